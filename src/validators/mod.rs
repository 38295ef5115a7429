//! XML Schema literal validators
//!
//! The temporal core (`dateTime`, `date`, `duration`) is built from a lexical
//! split, a numeric view and field-level rules; the auxiliary validators are
//! plain bound checks. Every validator is a pure `&str -> bool` function.

mod lexical;
mod time_of_day;

pub mod builtins;
pub mod date;
pub mod date_time;
pub mod duration;
pub mod gregorian;
pub mod helpers;
pub mod timezone;

// Re-exports
pub use date::is_valid_date_literal;
pub use date_time::is_valid_date_time_literal;
pub use duration::{is_valid_duration_literal, ParsedDuration};
pub use gregorian::{is_valid_gyear_literal, is_valid_gyear_month_literal};
pub use helpers::{is_valid_any_uri_literal, is_valid_language_literal};
pub use lexical::{ParsedTemporal, ParsedTime, RawLexicalGroups, RawTimeGroups};
pub use time_of_day::is_valid_time_of_day;
pub use timezone::{is_recoverable, TimezoneOffset};
