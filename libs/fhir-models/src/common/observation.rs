//! FHIR Observation model
//!
//! Shape of a coded, single-valued vital-sign Observation.

use super::complex::*;
use super::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// FHIR Observation resource
///
/// Measurements and simple assertions made about a patient. Field order is the
/// serialization order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    /// Resource type - always "Observation"
    #[serde(default = "default_resource_type")]
    pub resource_type: String,

    /// registered | preliminary | final | amended +
    pub status: ObservationStatus,

    /// Classification of type of observation
    pub category: Vec<CodeableConcept>,

    /// Type of observation (code / type)
    pub code: CodeableConcept,

    /// Who and/or what the observation is about
    pub subject: Reference,

    /// Actual result
    pub value_quantity: Quantity,

    /// Additional content beyond core fields (id, meta, effective[x], ...)
    #[serde(flatten)]
    pub extensions: Map<String, Value>,
}

fn default_resource_type() -> String {
    "Observation".to_string()
}

/// Status of an observation result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObservationStatus {
    Registered,
    Preliminary,
    Final,
    Amended,
    Corrected,
    Cancelled,
    EnteredInError,
    Unknown,
}

impl Observation {
    /// Create a new Observation with all required fields
    pub fn new(
        status: ObservationStatus,
        category: CodeableConcept,
        code: CodeableConcept,
        subject: Reference,
        value_quantity: Quantity,
    ) -> Self {
        Self {
            resource_type: "Observation".to_string(),
            status,
            category: vec![category],
            code,
            subject,
            value_quantity,
            extensions: Map::new(),
        }
    }

    /// Parse from JSON Value, then [`validate`](Self::validate)
    pub fn from_value(value: &Value) -> Result<Self> {
        let obs: Self = serde_json::from_value(value.clone())?;
        obs.validate()?;
        Ok(obs)
    }

    /// Parse from JSON text, then [`validate`](Self::validate)
    pub fn from_json(text: &str) -> Result<Self> {
        let obs: Self = serde_json::from_str(text)?;
        obs.validate()?;
        Ok(obs)
    }

    /// Check the elements a coded vital-sign observation requires.
    ///
    /// Serde only enforces presence; this rejects present-but-empty values.
    pub fn validate(&self) -> Result<()> {
        if self.resource_type != "Observation" {
            return Err(Error::invalid(format!(
                "resourceType must be 'Observation', got '{}'",
                self.resource_type
            )));
        }
        if self.category.is_empty() || self.category.iter().any(|c| c.coding.is_empty()) {
            return Err(Error::invalid("category must carry at least one coding"));
        }
        if self.code.coding.is_empty() {
            return Err(Error::invalid("code must carry at least one coding"));
        }
        if !matches!(self.patient_id(), Some(id) if !id.is_empty()) {
            return Err(Error::invalid(format!(
                "subject must reference Patient/<id>, got '{}'",
                self.subject.reference
            )));
        }
        if !self.value_quantity.value.is_finite() {
            return Err(Error::invalid("valueQuantity.value must be a finite number"));
        }
        Ok(())
    }

    /// Convert to JSON Value
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(Error::from)
    }

    /// Canonical text form: pretty-printed JSON, two-space indent
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Error::from)
    }

    /// Check if the result is complete and verified
    pub fn is_final(&self) -> bool {
        matches!(self.status, ObservationStatus::Final)
    }

    /// Check if any category carries the given coding
    pub fn has_category(&self, system: &str, code: &str) -> bool {
        self.category.iter().any(|c| c.has_code(system, code))
    }

    /// Patient id the observation refers to
    pub fn patient_id(&self) -> Option<&str> {
        self.subject.patient_id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ErrorKind;
    use serde_json::json;

    fn sample() -> Observation {
        Observation::new(
            ObservationStatus::Final,
            CodeableConcept::single(Coding::new(
                "http://terminology.hl7.org/CodeSystem/observation-category",
                "vital-signs",
                "Vital Signs",
            )),
            CodeableConcept::single(Coding::new(
                "http://loinc.org",
                "8310-5",
                "Body temperature",
            )),
            Reference::patient("123").unwrap(),
            Quantity::new(36.5, "C", "http://unitsofmeasure.org", "Cel").unwrap(),
        )
    }

    #[test]
    fn test_serialize_key_order() {
        let json = serde_json::to_value(sample()).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            vec![
                "resourceType",
                "status",
                "category",
                "code",
                "subject",
                "valueQuantity"
            ]
        );
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(
            serde_json::to_value(ObservationStatus::Final).unwrap(),
            json!("final")
        );
        assert_eq!(
            serde_json::to_value(ObservationStatus::EnteredInError).unwrap(),
            json!("entered-in-error")
        );
    }

    #[test]
    fn test_deserialize_observation_with_extra_fields() {
        let json = json!({
            "resourceType": "Observation",
            "id": "temp-1",
            "status": "amended",
            "category": [{"coding": [{
                "system": "http://terminology.hl7.org/CodeSystem/observation-category",
                "code": "vital-signs",
                "display": "Vital Signs"
            }]}],
            "code": {"coding": [{
                "system": "http://loinc.org",
                "code": "8310-5",
                "display": "Body temperature"
            }]},
            "subject": {"reference": "Patient/123"},
            "effectiveDateTime": "2024-05-01T10:00:00Z",
            "valueQuantity": {
                "value": 38.1,
                "unit": "C",
                "system": "http://unitsofmeasure.org",
                "code": "Cel"
            }
        });

        let obs = Observation::from_value(&json).unwrap();
        assert_eq!(obs.status, ObservationStatus::Amended);
        assert!(!obs.is_final());
        assert_eq!(obs.patient_id(), Some("123"));
        assert_eq!(obs.value_quantity.value, 38.1);
        assert_eq!(obs.extensions["id"], "temp-1");
        assert!(obs.extensions.contains_key("effectiveDateTime"));
    }

    #[test]
    fn test_deserialize_rejects_missing_subject() {
        let json = json!({
            "resourceType": "Observation",
            "status": "final",
            "category": [],
            "code": {"coding": []},
            "valueQuantity": {
                "value": 36.5,
                "unit": "C",
                "system": "http://unitsofmeasure.org",
                "code": "Cel"
            }
        });
        assert!(Observation::from_value(&json).is_err());
    }

    fn sample_json() -> Value {
        serde_json::to_value(sample()).unwrap()
    }

    fn assert_invalid(json: Value, needle: &str) {
        let err = Observation::from_value(&json).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(err.to_string().contains(needle), "unexpected error: {err}");
    }

    #[test]
    fn test_from_value_rejects_wrong_resource_type() {
        let mut json = sample_json();
        json["resourceType"] = json!("Patient");
        assert_invalid(json, "resourceType");
    }

    #[test]
    fn test_from_value_rejects_empty_category() {
        let mut json = sample_json();
        json["category"] = json!([]);
        assert_invalid(json.clone(), "category");

        json["category"] = json!([{"coding": []}]);
        assert_invalid(json, "category");
    }

    #[test]
    fn test_from_value_rejects_empty_code() {
        let mut json = sample_json();
        json["code"] = json!({"coding": []});
        assert_invalid(json, "code");
    }

    #[test]
    fn test_from_value_rejects_bad_subject() {
        for reference in ["", "Patient/", "Group/7"] {
            let mut json = sample_json();
            json["subject"] = json!({ "reference": reference });
            assert_invalid(json, "subject");
        }
    }

    #[test]
    fn test_validate_rejects_non_finite_value() {
        let mut obs = sample();
        obs.value_quantity.value = f64::INFINITY;
        let err = obs.validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_from_json_rejects_lax_record() {
        let text = r#"{"resourceType":"Patient","status":"final","category":[],
            "code":{"coding":[]},"subject":{"reference":""},
            "valueQuantity":{"value":1,"unit":"C","system":"http://unitsofmeasure.org","code":"Cel"}}"#;
        let err = Observation::from_json(text).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_has_category() {
        let obs = sample();
        assert!(obs.has_category(
            "http://terminology.hl7.org/CodeSystem/observation-category",
            "vital-signs"
        ));
        assert!(!obs.has_category(
            "http://terminology.hl7.org/CodeSystem/observation-category",
            "laboratory"
        ));
    }

    #[test]
    fn test_round_trip_json_text() {
        let obs = sample();
        let text = obs.to_json_pretty().unwrap();
        assert_eq!(Observation::from_json(&text).unwrap(), obs);
    }
}
