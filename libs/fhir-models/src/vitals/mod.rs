//! Vital-sign observations
//!
//! Fixed LOINC/UCUM vocabulary, a lookup table keyed by [`ObservationKind`],
//! and the builder that turns `(patient id, value)` into a canonical
//! FHIR Observation.

pub mod builder;
pub mod kind;
pub mod range;
pub mod vocabulary;

pub use builder::{build_temperature_observation, build_vital_sign_observation, ObservationBuilder};
pub use kind::{ObservationKind, VitalSignProfile};
pub use range::{PhysiologicalRange, ValueCheck};
pub use vocabulary::{CodedTerm, UnitOfMeasure};
