#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Static US state and reference city data.
//!
//! The submission form constrains `state_code` to the 54 entries below
//! (50 states, DC, and the PR/GU/VI territories) and `city` to the curated
//! per-state city list in [`cities`]. City matching is exact and
//! case-sensitive against the reference spelling; the validation engine
//! reports anything else as an invalid city.

pub mod cities;

use serde::{Deserialize, Serialize};

/// A US state or territory selectable in the submission form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsState {
    /// Two-letter USPS code.
    pub code: &'static str,
    /// Full display name.
    pub name: &'static str,
}

/// All selectable states and territories, ordered by name.
pub const US_STATES: &[UsState] = &[
    UsState { code: "AL", name: "Alabama" },
    UsState { code: "AK", name: "Alaska" },
    UsState { code: "AZ", name: "Arizona" },
    UsState { code: "AR", name: "Arkansas" },
    UsState { code: "CA", name: "California" },
    UsState { code: "CO", name: "Colorado" },
    UsState { code: "CT", name: "Connecticut" },
    UsState { code: "DE", name: "Delaware" },
    UsState { code: "DC", name: "District of Columbia" },
    UsState { code: "FL", name: "Florida" },
    UsState { code: "GA", name: "Georgia" },
    UsState { code: "HI", name: "Hawaii" },
    UsState { code: "ID", name: "Idaho" },
    UsState { code: "IL", name: "Illinois" },
    UsState { code: "IN", name: "Indiana" },
    UsState { code: "IA", name: "Iowa" },
    UsState { code: "KS", name: "Kansas" },
    UsState { code: "KY", name: "Kentucky" },
    UsState { code: "LA", name: "Louisiana" },
    UsState { code: "ME", name: "Maine" },
    UsState { code: "MD", name: "Maryland" },
    UsState { code: "MA", name: "Massachusetts" },
    UsState { code: "MI", name: "Michigan" },
    UsState { code: "MN", name: "Minnesota" },
    UsState { code: "MS", name: "Mississippi" },
    UsState { code: "MO", name: "Missouri" },
    UsState { code: "MT", name: "Montana" },
    UsState { code: "NE", name: "Nebraska" },
    UsState { code: "NV", name: "Nevada" },
    UsState { code: "NH", name: "New Hampshire" },
    UsState { code: "NJ", name: "New Jersey" },
    UsState { code: "NM", name: "New Mexico" },
    UsState { code: "NY", name: "New York" },
    UsState { code: "NC", name: "North Carolina" },
    UsState { code: "ND", name: "North Dakota" },
    UsState { code: "OH", name: "Ohio" },
    UsState { code: "OK", name: "Oklahoma" },
    UsState { code: "OR", name: "Oregon" },
    UsState { code: "PA", name: "Pennsylvania" },
    UsState { code: "RI", name: "Rhode Island" },
    UsState { code: "SC", name: "South Carolina" },
    UsState { code: "SD", name: "South Dakota" },
    UsState { code: "TN", name: "Tennessee" },
    UsState { code: "TX", name: "Texas" },
    UsState { code: "UT", name: "Utah" },
    UsState { code: "VT", name: "Vermont" },
    UsState { code: "VA", name: "Virginia" },
    UsState { code: "WA", name: "Washington" },
    UsState { code: "WV", name: "West Virginia" },
    UsState { code: "WI", name: "Wisconsin" },
    UsState { code: "WY", name: "Wyoming" },
    UsState { code: "PR", name: "Puerto Rico" },
    UsState { code: "GU", name: "Guam" },
    UsState { code: "VI", name: "Virgin Islands" },
];

/// Resolves a two-letter state code to its display name.
#[must_use]
pub fn state_name(code: &str) -> Option<&'static str> {
    US_STATES
        .iter()
        .find(|state| state.code == code)
        .map(|state| state.name)
}

/// Returns the reference city list for a state code, or `None` if the code
/// is unknown.
#[must_use]
pub fn cities_for(code: &str) -> Option<&'static [&'static str]> {
    cities::CITIES
        .iter()
        .find(|(state_code, _)| *state_code == code)
        .map(|(_, city_list)| *city_list)
}

/// Returns whether `city` exactly matches an entry in the reference city
/// list for `state_code`. Unknown state codes are never valid.
#[must_use]
pub fn is_valid_city(state_code: &str, city: &str) -> bool {
    cities_for(state_code).is_some_and(|city_list| city_list.contains(&city))
}
