//! Observation kinds and their fixed coding/unit profile

use super::vocabulary::{loinc, ucum, CodedTerm, UnitOfMeasure, VITAL_SIGNS};
use crate::common::Error;
use std::fmt;
use std::str::FromStr;

/// A vital sign the builder knows how to code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObservationKind {
    BodyTemperature,
    HeartRate,
    RespiratoryRate,
    OxygenSaturation,
    BodyWeight,
    BodyHeight,
}

/// Fixed category, code and unit for one observation kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VitalSignProfile {
    pub kind: ObservationKind,
    pub category: CodedTerm,
    pub code: CodedTerm,
    pub unit: UnitOfMeasure,
}

// Indexed by `ObservationKind as usize`.
static PROFILES: [VitalSignProfile; 6] = [
    VitalSignProfile {
        kind: ObservationKind::BodyTemperature,
        category: VITAL_SIGNS,
        code: loinc::BODY_TEMPERATURE,
        unit: ucum::CELSIUS,
    },
    VitalSignProfile {
        kind: ObservationKind::HeartRate,
        category: VITAL_SIGNS,
        code: loinc::HEART_RATE,
        unit: ucum::BEATS_PER_MINUTE,
    },
    VitalSignProfile {
        kind: ObservationKind::RespiratoryRate,
        category: VITAL_SIGNS,
        code: loinc::RESPIRATORY_RATE,
        unit: ucum::BREATHS_PER_MINUTE,
    },
    VitalSignProfile {
        kind: ObservationKind::OxygenSaturation,
        category: VITAL_SIGNS,
        code: loinc::OXYGEN_SATURATION,
        unit: ucum::PERCENT,
    },
    VitalSignProfile {
        kind: ObservationKind::BodyWeight,
        category: VITAL_SIGNS,
        code: loinc::BODY_WEIGHT,
        unit: ucum::KILOGRAM,
    },
    VitalSignProfile {
        kind: ObservationKind::BodyHeight,
        category: VITAL_SIGNS,
        code: loinc::BODY_HEIGHT,
        unit: ucum::CENTIMETER,
    },
];

impl ObservationKind {
    pub const ALL: [ObservationKind; 6] = [
        ObservationKind::BodyTemperature,
        ObservationKind::HeartRate,
        ObservationKind::RespiratoryRate,
        ObservationKind::OxygenSaturation,
        ObservationKind::BodyWeight,
        ObservationKind::BodyHeight,
    ];

    pub fn profile(self) -> &'static VitalSignProfile {
        &PROFILES[self as usize]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ObservationKind::BodyTemperature => "body-temperature",
            ObservationKind::HeartRate => "heart-rate",
            ObservationKind::RespiratoryRate => "respiratory-rate",
            ObservationKind::OxygenSaturation => "oxygen-saturation",
            ObservationKind::BodyWeight => "body-weight",
            ObservationKind::BodyHeight => "body-height",
        }
    }
}

impl fmt::Display for ObservationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ObservationKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ObservationKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::invalid(format!("unknown observation kind '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_table_is_aligned() {
        for kind in ObservationKind::ALL {
            assert_eq!(kind.profile().kind, kind);
        }
    }

    #[test]
    fn test_all_profiles_are_vital_signs() {
        for kind in ObservationKind::ALL {
            assert_eq!(kind.profile().category, VITAL_SIGNS);
            assert_eq!(kind.profile().unit.system, "http://unitsofmeasure.org");
            assert_eq!(kind.profile().code.system, "http://loinc.org");
        }
    }

    #[test]
    fn test_body_temperature_profile() {
        let profile = ObservationKind::BodyTemperature.profile();
        assert_eq!(profile.code.code, "8310-5");
        assert_eq!(profile.unit.unit, "C");
        assert_eq!(profile.unit.code, "Cel");
    }

    #[test]
    fn test_parse_round_trip() {
        for kind in ObservationKind::ALL {
            assert_eq!(kind.to_string().parse::<ObservationKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_parse_unknown_kind() {
        let err = "blood-glucose".parse::<ObservationKind>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid input: unknown observation kind 'blood-glucose'"
        );
    }
}
