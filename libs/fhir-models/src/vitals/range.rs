//! Optional value checks run by the builder after structural validation

use super::kind::ObservationKind;
use crate::common::{Error, Result};

/// Extra validation of a measured value
///
/// The builder runs no check unless one is installed with
/// [`ObservationBuilder::with_check`](super::ObservationBuilder::with_check).
pub trait ValueCheck: Send + Sync {
    fn check(&self, kind: ObservationKind, value: f64) -> Result<()>;
}

impl<F> ValueCheck for F
where
    F: Fn(ObservationKind, f64) -> Result<()> + Send + Sync,
{
    fn check(&self, kind: ObservationKind, value: f64) -> Result<()> {
        self(kind, value)
    }
}

/// Inclusive plausibility bounds per observation kind
#[derive(Debug, Clone, PartialEq)]
pub struct PhysiologicalRange {
    // Indexed by `ObservationKind as usize`.
    bounds: [(f64, f64); 6],
}

impl Default for PhysiologicalRange {
    fn default() -> Self {
        Self {
            bounds: [
                (25.0, 45.0),  // Cel
                (20.0, 300.0), // /min
                (4.0, 80.0),   // /min
                (0.0, 100.0),  // %
                (0.2, 650.0),  // kg
                (20.0, 280.0), // cm
            ],
        }
    }
}

impl PhysiologicalRange {
    pub fn bounds(&self, kind: ObservationKind) -> (f64, f64) {
        self.bounds[kind as usize]
    }

    /// Replace the bounds for one kind.
    ///
    /// Both bounds must be finite with `min <= max`.
    pub fn with_bounds(mut self, kind: ObservationKind, min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(Error::invalid(format!(
                "{kind} bounds must be finite with min <= max, got [{min}, {max}]"
            )));
        }
        self.bounds[kind as usize] = (min, max);
        Ok(self)
    }
}

impl ValueCheck for PhysiologicalRange {
    fn check(&self, kind: ObservationKind, value: f64) -> Result<()> {
        let (min, max) = self.bounds(kind);
        if value < min || value > max {
            return Err(Error::invalid(format!(
                "{kind} value {value} outside plausible range [{min}, {max}] {}",
                kind.profile().unit.code
            )));
        }
        Ok(())
    }
}
