//! FHIR vital-sign models
//!
//! This crate provides strongly-typed Rust structures for building FHIR
//! `Observation` resources that carry a single vital-sign measurement.
//!
//! # Module Organization
//!
//! - `common`: FHIR datatypes (`Coding`, `CodeableConcept`, `Reference`,
//!   `Quantity`) and the `Observation` resource
//! - `vitals`: fixed vocabulary, the observation kind table, and the
//!   validating builder
//!
//! # Example
//!
//! ```rust
//! use vitalis_models::build_temperature_observation;
//! use serde_json::Value;
//!
//! let json = build_temperature_observation("123", 36.5).unwrap();
//! let value: Value = serde_json::from_str(&json).unwrap();
//!
//! assert_eq!(value["resourceType"], "Observation");
//! assert_eq!(value["subject"]["reference"], "Patient/123");
//! assert_eq!(value["valueQuantity"]["code"], "Cel");
//! ```

pub mod common;
pub mod vitals;

// Re-export commonly used types
pub use common::*;
pub use vitals::{
    build_temperature_observation, build_vital_sign_observation, ObservationBuilder,
    ObservationKind, PhysiologicalRange, ValueCheck, VitalSignProfile,
};
