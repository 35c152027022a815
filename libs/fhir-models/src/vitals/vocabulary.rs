//! Fixed coded vocabulary for vital-sign observations
//!
//! System URIs, codes and displays are defined by HL7, LOINC and UCUM. They
//! are consumed by external conformance validators and must match
//! byte-for-byte.

use crate::common::{CodeableConcept, Coding, Quantity, Result};

/// Terminology system URIs
pub mod system {
    pub const OBSERVATION_CATEGORY: &str =
        "http://terminology.hl7.org/CodeSystem/observation-category";
    pub const LOINC: &str = "http://loinc.org";
    pub const UCUM: &str = "http://unitsofmeasure.org";
}

/// A (system, code, display) triple from a controlled vocabulary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodedTerm {
    pub system: &'static str,
    pub code: &'static str,
    pub display: &'static str,
}

impl CodedTerm {
    pub const fn new(system: &'static str, code: &'static str, display: &'static str) -> Self {
        Self {
            system,
            code,
            display,
        }
    }

    pub fn to_coding(&self) -> Coding {
        Coding::new(self.system, self.code, self.display)
    }

    pub fn to_concept(&self) -> CodeableConcept {
        CodeableConcept::single(self.to_coding())
    }
}

/// Observation category "vital-signs"
pub const VITAL_SIGNS: CodedTerm =
    CodedTerm::new(system::OBSERVATION_CATEGORY, "vital-signs", "Vital Signs");

/// LOINC codes of the HL7 vital-signs panel
pub mod loinc {
    use super::{system, CodedTerm};

    pub const BODY_TEMPERATURE: CodedTerm =
        CodedTerm::new(system::LOINC, "8310-5", "Body temperature");
    pub const HEART_RATE: CodedTerm = CodedTerm::new(system::LOINC, "8867-4", "Heart rate");
    pub const RESPIRATORY_RATE: CodedTerm =
        CodedTerm::new(system::LOINC, "9279-1", "Respiratory rate");
    pub const OXYGEN_SATURATION: CodedTerm = CodedTerm::new(
        system::LOINC,
        "2708-6",
        "Oxygen saturation in Arterial blood",
    );
    pub const BODY_WEIGHT: CodedTerm = CodedTerm::new(system::LOINC, "29463-7", "Body weight");
    pub const BODY_HEIGHT: CodedTerm = CodedTerm::new(system::LOINC, "8302-2", "Body height");
}

/// Unit metadata carried by a Quantity: human unit, coded system and code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitOfMeasure {
    pub unit: &'static str,
    pub system: &'static str,
    pub code: &'static str,
}

impl UnitOfMeasure {
    pub const fn ucum(unit: &'static str, code: &'static str) -> Self {
        Self {
            unit,
            system: system::UCUM,
            code,
        }
    }

    /// Quantity of `value` in this unit; fails on non-finite values
    pub fn quantity(&self, value: f64) -> Result<Quantity> {
        Quantity::new(value, self.unit, self.system, self.code)
    }
}

/// UCUM units used by the vital-signs panel
pub mod ucum {
    use super::UnitOfMeasure;

    pub const CELSIUS: UnitOfMeasure = UnitOfMeasure::ucum("C", "Cel");
    pub const BEATS_PER_MINUTE: UnitOfMeasure = UnitOfMeasure::ucum("beats/minute", "/min");
    pub const BREATHS_PER_MINUTE: UnitOfMeasure = UnitOfMeasure::ucum("breaths/minute", "/min");
    pub const PERCENT: UnitOfMeasure = UnitOfMeasure::ucum("%", "%");
    pub const KILOGRAM: UnitOfMeasure = UnitOfMeasure::ucum("kg", "kg");
    pub const CENTIMETER: UnitOfMeasure = UnitOfMeasure::ucum("cm", "cm");
}
