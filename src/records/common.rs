//! Building blocks without literal constraints of their own

use serde::{Deserialize, Serialize};

/// Identification of an object: a key and the source that issued it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentificatieGegevens {
    /// `identificatieKenmerk`, 1..1
    pub identificatie_kenmerk: String,
    /// `identificatieBron`, 1..1
    pub identificatie_bron: String,
}

impl IdentificatieGegevens {
    /// Create a new identification
    pub fn new(kenmerk: impl Into<String>, bron: impl Into<String>) -> Self {
        Self {
            identificatie_kenmerk: kenmerk.into(),
            identificatie_bron: bron.into(),
        }
    }
}

/// Reference to another object by name and optional identification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerwijzingGegevens {
    /// `verwijzingNaam`, 1..1
    pub verwijzing_naam: String,
    /// `verwijzingIdentificatie`, 0..1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verwijzing_identificatie: Option<IdentificatieGegevens>,
}

impl VerwijzingGegevens {
    /// Reference by name only
    pub fn new(naam: impl Into<String>) -> Self {
        Self {
            verwijzing_naam: naam.into(),
            verwijzing_identificatie: None,
        }
    }

    /// Attach an identification
    pub fn with_identificatie(mut self, identificatie: IdentificatieGegevens) -> Self {
        self.verwijzing_identificatie = Some(identificatie);
        self
    }
}

/// A term from a controlled vocabulary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BegripGegevens {
    /// `begripLabel`, 1..1
    pub begrip_label: String,
    /// `begripCode`, 0..1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub begrip_code: Option<String>,
    /// `begripBegrippenlijst`, 1..1
    pub begrip_begrippenlijst: VerwijzingGegevens,
}

impl BegripGegevens {
    /// Create a term from a label and the vocabulary it belongs to
    pub fn new(label: impl Into<String>, begrippenlijst: VerwijzingGegevens) -> Self {
        Self {
            begrip_label: label.into(),
            begrip_code: None,
            begrip_begrippenlijst: begrippenlijst,
        }
    }

    /// Set the term code
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.begrip_code = Some(code.into());
        self
    }
}

/// A person or organisation involved with an information object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BetrokkeneGegevens {
    /// `betrokkeneTypeRelatie`, 1..1
    pub betrokkene_type_relatie: BegripGegevens,
    /// `betrokkeneActor`, 1..1
    pub betrokkene_actor: VerwijzingGegevens,
}

/// Relation to another information object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GerelateerdInformatieobjectGegevens {
    /// `gerelateerdInformatieobjectVerwijzing`, 1..1
    pub gerelateerd_informatieobject_verwijzing: VerwijzingGegevens,
    /// `gerelateerdInformatieobjectTypeRelatie`, 1..1
    pub gerelateerd_informatieobject_type_relatie: BegripGegevens,
}
