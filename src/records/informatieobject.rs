//! The information object and the records only it refers to

use super::common::{
    BegripGegevens, BetrokkeneGegevens, GerelateerdInformatieobjectGegevens,
    IdentificatieGegevens, VerwijzingGegevens,
};
use super::temporal::{DekkingInTijdGegevens, EventGegevens, TermijnGegevens};
use super::{
    check_literal, check_not_empty, field_path, item_path, validate_items, validated, Validate,
};
use crate::error::ValidationErrors;
use crate::validators::builtins::{XSD_ANY_URI, XSD_LANGUAGE};
use serde::{Deserialize, Serialize};

// =============================================================================
// Consultation location
// =============================================================================

/// Where an information object can be consulted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaadpleegLocatieGegevens {
    /// `raadpleeglocatieFysiek`, 0..unbounded
    #[serde(default)]
    pub raadpleeglocatie_fysiek: Vec<VerwijzingGegevens>,
    /// `raadpleeglocatieOnline`, 0..unbounded, `xsd:anyURI`
    #[serde(default)]
    pub raadpleeglocatie_online: Vec<String>,
}

impl RaadpleegLocatieGegevens {
    /// Create a location record; every online location must be an `xsd:anyURI`
    pub fn new(
        fysiek: Vec<VerwijzingGegevens>,
        online: Vec<String>,
    ) -> Result<Self, ValidationErrors> {
        validated(Self {
            raadpleeglocatie_fysiek: fysiek,
            raadpleeglocatie_online: online,
        })
    }
}

impl Validate for RaadpleegLocatieGegevens {
    fn validate_into(&self, path: &str, errors: &mut ValidationErrors) {
        for (index, uri) in self.raadpleeglocatie_online.iter().enumerate() {
            check_literal(
                errors,
                item_path(path, "raadpleeglocatieOnline", index),
                uri,
                &[XSD_ANY_URI],
            );
        }
    }
}

// =============================================================================
// Restriction of use
// =============================================================================

/// A restriction on the use of an information object
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeperkingGebruikGegevens {
    /// `beperkingGebruikType`, 1..1
    pub beperking_gebruik_type: BegripGegevens,
    /// `beperkingGebruikNadereBeschrijving`, 0..1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beperking_gebruik_nadere_beschrijving: Option<String>,
    /// `beperkingGebruikDocumentatie`, 0..unbounded
    #[serde(default)]
    pub beperking_gebruik_documentatie: Vec<VerwijzingGegevens>,
    /// `beperkingGebruikTermijn`, 0..1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub beperking_gebruik_termijn: Option<TermijnGegevens>,
}

impl BeperkingGebruikGegevens {
    /// Restriction of the given type, without description or term
    pub fn new(beperking_type: BegripGegevens) -> Self {
        Self {
            beperking_gebruik_type: beperking_type,
            beperking_gebruik_nadere_beschrijving: None,
            beperking_gebruik_documentatie: Vec::new(),
            beperking_gebruik_termijn: None,
        }
    }

    /// Set the term during which the restriction applies
    pub fn with_termijn(mut self, termijn: TermijnGegevens) -> Self {
        self.beperking_gebruik_termijn = Some(termijn);
        self
    }
}

impl Validate for BeperkingGebruikGegevens {
    fn validate_into(&self, path: &str, errors: &mut ValidationErrors) {
        self.beperking_gebruik_termijn
            .validate_into(&field_path(path, "beperkingGebruikTermijn"), errors);
    }
}

// =============================================================================
// Information object
// =============================================================================

/// An MDTO information object
///
/// Build one with [`InformatieobjectType::builder`]; a deserialized value
/// must be checked with [`Validate::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InformatieobjectType {
    /// `identificatie`, 1..unbounded
    pub identificatie: Vec<IdentificatieGegevens>,
    /// `naam`, 1..1
    pub naam: String,
    /// `aggregatieniveau`, 0..1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregatieniveau: Option<BegripGegevens>,
    /// `classificatie`, 0..unbounded
    #[serde(default)]
    pub classificatie: Vec<BegripGegevens>,
    /// `trefwoord`, 0..unbounded
    #[serde(default)]
    pub trefwoord: Vec<String>,
    /// `omschrijving`, 0..1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub omschrijving: Option<String>,
    /// `raadpleeglocatie`, 0..unbounded
    #[serde(default)]
    pub raadpleeglocatie: Vec<RaadpleegLocatieGegevens>,
    /// `dekkingInTijd`, 0..unbounded
    #[serde(default)]
    pub dekking_in_tijd: Vec<DekkingInTijdGegevens>,
    /// `dekkingInRuimte`, 0..unbounded
    #[serde(default)]
    pub dekking_in_ruimte: Vec<VerwijzingGegevens>,
    /// `taal`, 0..unbounded, `xsd:language`
    #[serde(default)]
    pub taal: Vec<String>,
    /// `event`, 0..unbounded
    #[serde(default)]
    pub event: Vec<EventGegevens>,
    /// `waardering`, 1..1
    pub waardering: BegripGegevens,
    /// `bewaartermijn`, 0..1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bewaartermijn: Option<TermijnGegevens>,
    /// `informatiecategorie`, 0..1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub informatiecategorie: Option<BegripGegevens>,
    /// `isOnderdeelVan`, 0..unbounded
    #[serde(default)]
    pub is_onderdeel_van: Vec<VerwijzingGegevens>,
    /// `bevatOnderdeel`, 0..unbounded
    #[serde(default)]
    pub bevat_onderdeel: Vec<VerwijzingGegevens>,
    /// `heeftRepresentatie`, 0..unbounded
    #[serde(default)]
    pub heeft_representatie: Vec<VerwijzingGegevens>,
    /// `aanvullendeMetagegevens`, 0..unbounded
    #[serde(default)]
    pub aanvullende_metagegevens: Vec<VerwijzingGegevens>,
    /// `gerelateerdInformatieobject`, 0..unbounded
    #[serde(default)]
    pub gerelateerd_informatieobject: Vec<GerelateerdInformatieobjectGegevens>,
    /// `archiefvormer`, 1..unbounded
    pub archiefvormer: Vec<VerwijzingGegevens>,
    /// `betrokkene`, 0..unbounded
    #[serde(default)]
    pub betrokkene: Vec<BetrokkeneGegevens>,
    /// `activiteit`, 0..1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activiteit: Option<VerwijzingGegevens>,
    /// `beperkingGebruik`, 1..unbounded
    pub beperking_gebruik: Vec<BeperkingGebruikGegevens>,
}

impl InformatieobjectType {
    /// Start building an information object from its required single values
    pub fn builder(naam: impl Into<String>, waardering: BegripGegevens) -> InformatieobjectBuilder {
        InformatieobjectBuilder {
            inner: Self {
                identificatie: Vec::new(),
                naam: naam.into(),
                aggregatieniveau: None,
                classificatie: Vec::new(),
                trefwoord: Vec::new(),
                omschrijving: None,
                raadpleeglocatie: Vec::new(),
                dekking_in_tijd: Vec::new(),
                dekking_in_ruimte: Vec::new(),
                taal: Vec::new(),
                event: Vec::new(),
                waardering,
                bewaartermijn: None,
                informatiecategorie: None,
                is_onderdeel_van: Vec::new(),
                bevat_onderdeel: Vec::new(),
                heeft_representatie: Vec::new(),
                aanvullende_metagegevens: Vec::new(),
                gerelateerd_informatieobject: Vec::new(),
                archiefvormer: Vec::new(),
                betrokkene: Vec::new(),
                activiteit: None,
                beperking_gebruik: Vec::new(),
            },
        }
    }
}

impl Validate for InformatieobjectType {
    #[tracing::instrument(level = "debug", skip_all, fields(naam = %self.naam))]
    fn validate_into(&self, path: &str, errors: &mut ValidationErrors) {
        check_not_empty(errors, field_path(path, "identificatie"), &self.identificatie);
        check_not_empty(errors, field_path(path, "archiefvormer"), &self.archiefvormer);
        check_not_empty(errors, field_path(path, "beperkingGebruik"), &self.beperking_gebruik);

        for (index, taal) in self.taal.iter().enumerate() {
            check_literal(errors, item_path(path, "taal", index), taal, &[XSD_LANGUAGE]);
        }

        validate_items(errors, path, "raadpleeglocatie", &self.raadpleeglocatie);
        validate_items(errors, path, "dekkingInTijd", &self.dekking_in_tijd);
        validate_items(errors, path, "event", &self.event);
        self.bewaartermijn
            .validate_into(&field_path(path, "bewaartermijn"), errors);
        validate_items(errors, path, "beperkingGebruik", &self.beperking_gebruik);
    }
}

/// Collects the repeated and optional parts of an [`InformatieobjectType`]
#[derive(Debug, Clone)]
pub struct InformatieobjectBuilder {
    inner: InformatieobjectType,
}

impl InformatieobjectBuilder {
    /// Add an identification
    pub fn identificatie(mut self, identificatie: IdentificatieGegevens) -> Self {
        self.inner.identificatie.push(identificatie);
        self
    }

    /// Set the aggregation level
    pub fn aggregatieniveau(mut self, niveau: BegripGegevens) -> Self {
        self.inner.aggregatieniveau = Some(niveau);
        self
    }

    /// Add a classification
    pub fn classificatie(mut self, classificatie: BegripGegevens) -> Self {
        self.inner.classificatie.push(classificatie);
        self
    }

    /// Add a keyword
    pub fn trefwoord(mut self, trefwoord: impl Into<String>) -> Self {
        self.inner.trefwoord.push(trefwoord.into());
        self
    }

    /// Set the description
    pub fn omschrijving(mut self, omschrijving: impl Into<String>) -> Self {
        self.inner.omschrijving = Some(omschrijving.into());
        self
    }

    /// Add a consultation location
    pub fn raadpleeglocatie(mut self, locatie: RaadpleegLocatieGegevens) -> Self {
        self.inner.raadpleeglocatie.push(locatie);
        self
    }

    /// Add a coverage in time
    pub fn dekking_in_tijd(mut self, dekking: DekkingInTijdGegevens) -> Self {
        self.inner.dekking_in_tijd.push(dekking);
        self
    }

    /// Add a coverage in space
    pub fn dekking_in_ruimte(mut self, plaats: VerwijzingGegevens) -> Self {
        self.inner.dekking_in_ruimte.push(plaats);
        self
    }

    /// Add a language tag
    pub fn taal(mut self, taal: impl Into<String>) -> Self {
        self.inner.taal.push(taal.into());
        self
    }

    /// Add an event
    pub fn event(mut self, event: EventGegevens) -> Self {
        self.inner.event.push(event);
        self
    }

    /// Set the retention term
    pub fn bewaartermijn(mut self, termijn: TermijnGegevens) -> Self {
        self.inner.bewaartermijn = Some(termijn);
        self
    }

    /// Set the information category
    pub fn informatiecategorie(mut self, categorie: BegripGegevens) -> Self {
        self.inner.informatiecategorie = Some(categorie);
        self
    }

    /// Add a parent aggregation
    pub fn is_onderdeel_van(mut self, geheel: VerwijzingGegevens) -> Self {
        self.inner.is_onderdeel_van.push(geheel);
        self
    }

    /// Add a child of this aggregation
    pub fn bevat_onderdeel(mut self, onderdeel: VerwijzingGegevens) -> Self {
        self.inner.bevat_onderdeel.push(onderdeel);
        self
    }

    /// Add a file representing this object
    pub fn heeft_representatie(mut self, bestand: VerwijzingGegevens) -> Self {
        self.inner.heeft_representatie.push(bestand);
        self
    }

    /// Add a file with additional metadata
    pub fn aanvullende_metagegevens(mut self, bestand: VerwijzingGegevens) -> Self {
        self.inner.aanvullende_metagegevens.push(bestand);
        self
    }

    /// Add a related information object
    pub fn gerelateerd_informatieobject(
        mut self,
        relatie: GerelateerdInformatieobjectGegevens,
    ) -> Self {
        self.inner.gerelateerd_informatieobject.push(relatie);
        self
    }

    /// Add an archive creator
    pub fn archiefvormer(mut self, archiefvormer: VerwijzingGegevens) -> Self {
        self.inner.archiefvormer.push(archiefvormer);
        self
    }

    /// Add an involved party
    pub fn betrokkene(mut self, betrokkene: BetrokkeneGegevens) -> Self {
        self.inner.betrokkene.push(betrokkene);
        self
    }

    /// Set the business activity
    pub fn activiteit(mut self, activiteit: VerwijzingGegevens) -> Self {
        self.inner.activiteit = Some(activiteit);
        self
    }

    /// Add a restriction of use
    pub fn beperking_gebruik(mut self, beperking: BeperkingGebruikGegevens) -> Self {
        self.inner.beperking_gebruik.push(beperking);
        self
    }

    /// Validate and return the information object
    pub fn build(self) -> Result<InformatieobjectType, ValidationErrors> {
        validated(self.inner)
    }
}

// =============================================================================
// Root
// =============================================================================

/// The kind of object an MDTO document describes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ObjectType {
    /// An information object
    Informatieobject(Box<InformatieobjectType>),
}

impl Validate for ObjectType {
    fn validate_into(&self, path: &str, errors: &mut ValidationErrors) {
        match self {
            ObjectType::Informatieobject(object) => {
                object.validate_into(&field_path(path, "informatieobject"), errors)
            }
        }
    }
}

/// Root of an MDTO document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MdtoObject {
    /// The described object
    #[serde(flatten)]
    pub object: ObjectType,
}

impl MdtoObject {
    /// Wrap an information object
    pub fn informatieobject(object: InformatieobjectType) -> Self {
        Self {
            object: ObjectType::Informatieobject(Box::new(object)),
        }
    }

    /// Parse a JSON document without validating it
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Validate for MdtoObject {
    fn validate_into(&self, path: &str, errors: &mut ValidationErrors) {
        self.object.validate_into(path, errors);
    }
}

// =============================================================================
// Tests
// =============================================================================
