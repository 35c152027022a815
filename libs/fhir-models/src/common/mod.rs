//! FHIR datatypes and resources
//!
//! Only the subset needed to express a vital-sign Observation.

pub mod complex;
pub mod error;
pub mod observation;

// Re-export commonly used types
pub use complex::*;
pub use error::{Error, ErrorKind, Result};
pub use observation::*;
