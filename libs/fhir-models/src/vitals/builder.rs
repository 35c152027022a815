//! Validating Observation builder and the one-call serializing entry points

use super::kind::{ObservationKind, VitalSignProfile};
use super::range::ValueCheck;
use crate::common::{Error, Observation, ObservationStatus, Reference, Result};

/// Builds a vital-sign [`Observation`] with every required element validated
/// at construction time.
///
/// Category, code and unit come from the kind's [`VitalSignProfile`]; the
/// caller supplies only the subject and the measured value.
pub struct ObservationBuilder {
    profile: &'static VitalSignProfile,
    status: ObservationStatus,
    subject: Option<String>,
    value: Option<f64>,
    check: Option<Box<dyn ValueCheck>>,
}

impl ObservationBuilder {
    pub fn new(kind: ObservationKind) -> Self {
        Self {
            profile: kind.profile(),
            status: ObservationStatus::Final,
            subject: None,
            value: None,
            check: None,
        }
    }

    pub fn status(mut self, status: ObservationStatus) -> Self {
        self.status = status;
        self
    }

    pub fn subject_patient(mut self, patient_id: impl Into<String>) -> Self {
        self.subject = Some(patient_id.into());
        self
    }

    pub fn value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }

    /// Install an extra check on the measured value, run after the finite check
    pub fn with_check(mut self, check: impl ValueCheck + 'static) -> Self {
        self.check = Some(Box::new(check));
        self
    }

    pub fn build(self) -> Result<Observation> {
        let patient_id = self
            .subject
            .ok_or_else(|| Error::invalid("missing required field: subject"))?;
        let value = self
            .value
            .ok_or_else(|| Error::invalid("missing required field: valueQuantity"))?;

        let subject = Reference::patient(&patient_id)?;
        let quantity = self.profile.unit.quantity(value)?;
        if let Some(check) = &self.check {
            check.check(self.profile.kind, value)?;
        }

        Ok(Observation::new(
            self.status,
            self.profile.category.to_concept(),
            self.profile.code.to_concept(),
            subject,
            quantity,
        ))
    }
}

/// Build and serialize a final vital-sign observation of the given kind
pub fn build_vital_sign_observation(
    kind: ObservationKind,
    patient_id: &str,
    value: f64,
) -> Result<String> {
    ObservationBuilder::new(kind)
        .subject_patient(patient_id)
        .value(value)
        .build()?
        .to_json_pretty()
}

/// Build and serialize a final body-temperature observation in degrees Celsius.
///
/// No physiological range check is applied. Fails with
/// [`Error::InvalidInput`] for an empty patient id or a non-finite value.
pub fn build_temperature_observation(patient_id: &str, temperature_value: f64) -> Result<String> {
    build_vital_sign_observation(ObservationKind::BodyTemperature, patient_id, temperature_value)
}
