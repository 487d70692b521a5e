#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Closed enumerations for plate report submissions.
//!
//! This crate defines the canonical violation, vehicle type, vehicle color,
//! and observed-gender sets shared by the validation engine, the report
//! store, and the API surface. Every submitted report must use values from
//! these sets; free-text variants do not exist.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// The type of traffic violation being reported.
///
/// Serialized with the lowercase display strings the public feed uses
/// (e.g. `"reckless driving"`, `"texting / phone use"`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
pub enum Violation {
    /// Exceeding the posted speed limit
    #[serde(rename = "speeding")]
    #[strum(serialize = "speeding")]
    Speeding,
    /// Aggressive or dangerous operation
    #[serde(rename = "reckless driving")]
    #[strum(serialize = "reckless driving")]
    RecklessDriving,
    /// Handheld phone use while driving
    #[serde(rename = "texting / phone use")]
    #[strum(serialize = "texting / phone use")]
    TextingPhoneUse,
    /// Running a red light or stop sign
    #[serde(rename = "red light / stop sign")]
    #[strum(serialize = "red light / stop sign")]
    RedLightStopSign,
    /// Parking in a prohibited zone
    #[serde(rename = "illegal parking")]
    #[strum(serialize = "illegal parking")]
    IllegalParking,
    /// Following too closely
    #[serde(rename = "tailgating")]
    #[strum(serialize = "tailgating")]
    Tailgating,
    /// Changing lanes without signaling or clearance
    #[serde(rename = "unsafe lane change")]
    #[strum(serialize = "unsafe lane change")]
    UnsafeLaneChange,
    /// Failing to yield right of way
    #[serde(rename = "failure to yield")]
    #[strum(serialize = "failure to yield")]
    FailureToYield,
    /// Leaving the scene of a collision
    #[serde(rename = "hit and run")]
    #[strum(serialize = "hit and run")]
    HitAndRun,
    /// Suspected impaired driving
    #[serde(rename = "suspected dui")]
    #[strum(serialize = "suspected dui")]
    SuspectedDui,
}

/// Body style of the observed vehicle.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
pub enum VehicleType {
    #[serde(rename = "sedan")]
    #[strum(serialize = "sedan")]
    Sedan,
    #[serde(rename = "suv")]
    #[strum(serialize = "suv")]
    Suv,
    #[serde(rename = "pickup")]
    #[strum(serialize = "pickup")]
    Pickup,
    #[serde(rename = "coupe")]
    #[strum(serialize = "coupe")]
    Coupe,
    #[serde(rename = "hatchback")]
    #[strum(serialize = "hatchback")]
    Hatchback,
    #[serde(rename = "van/minivan")]
    #[strum(serialize = "van/minivan")]
    VanMinivan,
    #[serde(rename = "motorcycle")]
    #[strum(serialize = "motorcycle")]
    Motorcycle,
    #[serde(rename = "commercial truck")]
    #[strum(serialize = "commercial truck")]
    CommercialTruck,
    #[serde(rename = "bus")]
    #[strum(serialize = "bus")]
    Bus,
    #[serde(rename = "other")]
    #[strum(serialize = "other")]
    Other,
}

/// Primary color of the observed vehicle.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
pub enum VehicleColor {
    #[serde(rename = "white")]
    #[strum(serialize = "white")]
    White,
    #[serde(rename = "black")]
    #[strum(serialize = "black")]
    Black,
    #[serde(rename = "silver")]
    #[strum(serialize = "silver")]
    Silver,
    #[serde(rename = "gray")]
    #[strum(serialize = "gray")]
    Gray,
    #[serde(rename = "red")]
    #[strum(serialize = "red")]
    Red,
    #[serde(rename = "blue")]
    #[strum(serialize = "blue")]
    Blue,
    #[serde(rename = "green")]
    #[strum(serialize = "green")]
    Green,
    #[serde(rename = "yellow")]
    #[strum(serialize = "yellow")]
    Yellow,
    #[serde(rename = "orange")]
    #[strum(serialize = "orange")]
    Orange,
    #[serde(rename = "brown")]
    #[strum(serialize = "brown")]
    Brown,
    #[serde(rename = "tan")]
    #[strum(serialize = "tan")]
    Tan,
    #[serde(rename = "gold")]
    #[strum(serialize = "gold")]
    Gold,
    #[serde(rename = "other")]
    #[strum(serialize = "other")]
    Other,
}

/// Observed gender of the driver, as reported by the submitter.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
pub enum GenderObserved {
    #[serde(rename = "female")]
    #[strum(serialize = "female")]
    Female,
    #[serde(rename = "male")]
    #[strum(serialize = "male")]
    Male,
    #[serde(rename = "unknown")]
    #[strum(serialize = "unknown")]
    Unknown,
}

/// Vehicle make suggestions offered by the submission form.
///
/// Informational only; `make` remains free text and is not validated
/// against this list.
pub const VEHICLE_MAKES: &[&str] = &[
    "Toyota",
    "Honda",
    "Ford",
    "Chevrolet",
    "Nissan",
    "BMW",
    "Mercedes-Benz",
    "Audi",
    "Kia",
    "Hyundai",
    "Volkswagen",
    "Subaru",
    "Tesla",
    "Lexus",
    "Jeep",
    "Dodge",
    "Ram",
    "GMC",
    "Mazda",
    "Volvo",
    "Porsche",
];

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator as _;

    use super::*;

    #[test]
    fn violation_round_trips_through_display() {
        for violation in Violation::iter() {
            let s = violation.to_string();
            assert_eq!(s.parse::<Violation>().unwrap(), violation);
        }
    }

    #[test]
    fn violation_set_has_ten_values() {
        assert_eq!(Violation::iter().count(), 10);
    }

    #[test]
    fn vehicle_type_set_has_ten_values() {
        assert_eq!(VehicleType::iter().count(), 10);
    }

    #[test]
    fn color_set_has_thirteen_values() {
        assert_eq!(VehicleColor::iter().count(), 13);
    }

    #[test]
    fn parses_multi_word_values() {
        assert_eq!(
            "red light / stop sign".parse::<Violation>().unwrap(),
            Violation::RedLightStopSign
        );
        assert_eq!(
            "van/minivan".parse::<VehicleType>().unwrap(),
            VehicleType::VanMinivan
        );
    }

    #[test]
    fn rejects_unknown_values() {
        assert!("jaywalking".parse::<Violation>().is_err());
        assert!("hovercraft".parse::<VehicleType>().is_err());
        assert!("chartreuse".parse::<VehicleColor>().is_err());
    }

    #[test]
    fn serde_uses_canonical_strings() {
        let json = serde_json::to_string(&Violation::TextingPhoneUse).unwrap();
        assert_eq!(json, "\"texting / phone use\"");
        let back: Violation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Violation::TextingPhoneUse);
    }
}
