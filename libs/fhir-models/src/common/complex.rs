//! FHIR complex datatypes
//!
//! `Coding`, `CodeableConcept`, `Reference` and `Quantity`, restricted to the
//! elements a coded vital-sign Observation requires. Every element here is
//! mandatory; `Reference::patient` and `Quantity::new` also reject empty ids and
//! non-finite values. Parsed resources get the same checks through
//! `Observation::validate`.

use super::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// A reference to a code defined by a terminology system
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Coding {
    /// Identity of the terminology system
    pub system: String,

    /// Symbol in syntax defined by the system
    pub code: String,

    /// Representation defined by the system
    pub display: String,
}

impl Coding {
    pub fn new(
        system: impl Into<String>,
        code: impl Into<String>,
        display: impl Into<String>,
    ) -> Self {
        Self {
            system: system.into(),
            code: code.into(),
            display: display.into(),
        }
    }
}

/// Concept defined by one or more codings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CodeableConcept {
    /// Code defined by a terminology system
    pub coding: Vec<Coding>,
}

impl CodeableConcept {
    /// Concept carrying exactly one coding
    pub fn single(coding: Coding) -> Self {
        Self {
            coding: vec![coding],
        }
    }

    /// First coding, if any
    pub fn primary(&self) -> Option<&Coding> {
        self.coding.first()
    }

    /// Whether any coding matches the given system and code
    pub fn has_code(&self, system: &str, code: &str) -> bool {
        self.coding
            .iter()
            .any(|c| c.system == system && c.code == code)
    }
}

/// A reference from one resource to another
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reference {
    /// Literal reference, relative, internal or absolute URL
    pub reference: String,
}

impl Reference {
    /// Relative reference `Patient/{id}`.
    ///
    /// The id is embedded verbatim; only emptiness is rejected.
    pub fn patient(id: &str) -> Result<Self> {
        if id.is_empty() {
            return Err(Error::invalid("patient id must not be empty"));
        }
        Ok(Self {
            reference: format!("Patient/{id}"),
        })
    }

    /// Id part of a `Patient/{id}` reference
    pub fn patient_id(&self) -> Option<&str> {
        self.reference.strip_prefix("Patient/")
    }
}

/// A measured amount
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Quantity {
    /// Numerical value
    pub value: f64,

    /// Unit representation
    pub unit: String,

    /// System that defines coded unit form
    pub system: String,

    /// Coded form of the unit
    pub code: String,
}

impl Quantity {
    /// Create a quantity, rejecting NaN and infinite values
    pub fn new(
        value: f64,
        unit: impl Into<String>,
        system: impl Into<String>,
        code: impl Into<String>,
    ) -> Result<Self> {
        if !value.is_finite() {
            return Err(Error::invalid(format!(
                "quantity value must be a finite number, got {value}"
            )));
        }
        Ok(Self {
            value,
            unit: unit.into(),
            system: system.into(),
            code: code.into(),
        })
    }
}
