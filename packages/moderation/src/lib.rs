#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Submission validation and content moderation engine.
//!
//! Takes the raw key/value form input as submitted and produces either a
//! fully-typed [`NewReport`] or a map of field name → human-readable error
//! message. Validation is side-effect free and collects every field error
//! before returning, so the client can surface all problems at once.
//!
//! This crate is the single implementation of the validation contract;
//! both the server boundary and any client-side mirror go through it
//! rather than re-deriving the rules.

pub mod screen;

use std::collections::BTreeMap;

use chrono::Datelike as _;
use plate_report_report_models::{GenderObserved, VehicleColor, VehicleType, Violation};
use serde::{Deserialize, Serialize};

/// Field name → human-readable error message.
pub type FieldErrors = BTreeMap<String, String>;

/// Maximum accepted media files per report.
pub const MAX_MEDIA_FILES: usize = 5;

/// Maximum size of a single media file (25 MiB).
pub const MAX_MEDIA_BYTES: u64 = 25 * 1024 * 1024;

/// Maximum description length in characters.
pub const MAX_DESCRIPTION_CHARS: usize = 500;

/// Earliest accepted vehicle model year.
pub const MIN_VEHICLE_YEAR: i32 = 1900;

/// MIME types accepted for attached media.
pub const ALLOWED_MEDIA_TYPES: &[&str] = &[
    "image/jpeg",
    "image/png",
    "image/webp",
    "video/mp4",
    "video/quicktime",
];

/// Raw submission input as received from the form, before any validation.
///
/// Every field is an optional string; the validation engine owns all
/// parsing and coercion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ReportSubmission {
    pub plate: Option<String>,
    pub state_code: Option<String>,
    pub city: Option<String>,
    pub violation: Option<String>,
    pub vehicle_type: Option<String>,
    pub color: Option<String>,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<String>,
    pub gender_observed: Option<String>,
    pub description: Option<String>,
    pub reporter_email: Option<String>,
    pub contact_ok: Option<String>,
}

/// Metadata for one uploaded media file. The file bytes themselves are
/// handled (or discarded) elsewhere; validation only needs shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaMeta {
    /// Declared MIME type of the upload.
    pub content_type: String,
    /// Size of the upload in bytes.
    pub size_bytes: u64,
}

/// A fully-validated, normalized report ready for persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReport {
    /// Normalized plate: uppercased, whitespace stripped, 2–10 chars.
    pub plate: String,
    /// Two-letter state code from the known state set.
    pub state_code: String,
    /// City matching the reference list for `state_code`.
    pub city: String,
    pub violation: Violation,
    pub vehicle_type: VehicleType,
    pub color: VehicleColor,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub gender_observed: Option<GenderObserved>,
    pub description: Option<String>,
    /// Never shown publicly; used only for contact when `contact_ok`.
    pub reporter_email: Option<String>,
    pub contact_ok: bool,
    /// Count of accepted media files, capped at [`MAX_MEDIA_FILES`].
    pub media_count: u8,
}

/// Normalizes a plate string: uppercase, all whitespace removed.
#[must_use]
pub fn normalize_plate(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase()
}

/// Treats empty and whitespace-only strings as absent.
fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty())
}

/// Coerces the form's checkbox value to a boolean. Absent means `false`.
fn coerce_bool(value: Option<&String>) -> bool {
    non_empty(value).is_some_and(|v| matches!(v.to_lowercase().as_str(), "1" | "true" | "on"))
}

/// Validates and moderates a raw submission.
///
/// Runs, in order: field presence/shape checks (all errors collected),
/// city-belongs-to-state cross validation, profanity and PII screening of
/// the free-text fields, and media validation. Returns the normalized
/// [`NewReport`] only if no step produced an error.
///
/// # Errors
///
/// Returns a [`FieldErrors`] map with one message per invalid field. The
/// caller must not persist anything when this returns `Err`.
#[allow(clippy::too_many_lines)]
pub fn validate(
    submission: &ReportSubmission,
    media: &[MediaMeta],
) -> Result<NewReport, FieldErrors> {
    let mut errors = FieldErrors::new();

    // Field presence and shape
    let plate = non_empty(submission.plate.as_ref()).map(normalize_plate);
    match &plate {
        Some(p) if (2..=10).contains(&p.chars().count()) => {}
        _ => {
            errors.insert(
                "plate".to_string(),
                "Plate must be 2-10 characters".to_string(),
            );
        }
    }

    let state_code = non_empty(submission.state_code.as_ref());
    match state_code {
        Some(code) if code.chars().count() == 2 => {}
        Some(_) => {
            errors.insert(
                "state_code".to_string(),
                "State code must be 2 letters".to_string(),
            );
        }
        None => {
            errors.insert("state_code".to_string(), "State is required".to_string());
        }
    }

    let city = non_empty(submission.city.as_ref());
    if city.is_none() {
        errors.insert("city".to_string(), "City is required".to_string());
    }

    let violation = match non_empty(submission.violation.as_ref()) {
        Some(raw) => match raw.parse::<Violation>() {
            Ok(v) => Some(v),
            Err(_) => {
                errors.insert(
                    "violation".to_string(),
                    "Invalid violation type".to_string(),
                );
                None
            }
        },
        None => {
            errors.insert("violation".to_string(), "Violation is required".to_string());
            None
        }
    };

    let vehicle_type = match non_empty(submission.vehicle_type.as_ref()) {
        Some(raw) => match raw.parse::<VehicleType>() {
            Ok(v) => Some(v),
            Err(_) => {
                errors.insert(
                    "vehicle_type".to_string(),
                    "Invalid vehicle type".to_string(),
                );
                None
            }
        },
        None => {
            errors.insert(
                "vehicle_type".to_string(),
                "Vehicle type is required".to_string(),
            );
            None
        }
    };

    let color = match non_empty(submission.color.as_ref()) {
        Some(raw) => match raw.parse::<VehicleColor>() {
            Ok(v) => Some(v),
            Err(_) => {
                errors.insert("color".to_string(), "Invalid color".to_string());
                None
            }
        },
        None => {
            errors.insert("color".to_string(), "Color is required".to_string());
            None
        }
    };

    let year = match non_empty(submission.year.as_ref()) {
        Some(raw) => match raw.parse::<i32>() {
            Ok(y) if (MIN_VEHICLE_YEAR..=chrono::Utc::now().year()).contains(&y) => Some(y),
            _ => {
                errors.insert("year".to_string(), "Invalid year".to_string());
                None
            }
        },
        None => None,
    };

    let gender_observed = match non_empty(submission.gender_observed.as_ref()) {
        Some(raw) => match raw.parse::<GenderObserved>() {
            Ok(g) => Some(g),
            Err(_) => {
                errors.insert("gender_observed".to_string(), "Invalid gender".to_string());
                None
            }
        },
        None => None,
    };

    let description = non_empty(submission.description.as_ref());
    if let Some(text) = description {
        if text.chars().count() > MAX_DESCRIPTION_CHARS {
            errors.insert(
                "description".to_string(),
                format!("Description must be {MAX_DESCRIPTION_CHARS} characters or fewer"),
            );
        }
    }

    let reporter_email = non_empty(submission.reporter_email.as_ref());
    if let Some(email) = reporter_email {
        if !screen::is_valid_email(email) {
            errors.insert(
                "reporter_email".to_string(),
                "Invalid email address".to_string(),
            );
        }
    }

    let contact_ok = coerce_bool(submission.contact_ok.as_ref());

    // Cross-field: city must belong to the selected state. An unknown
    // state code surfaces here as a city error as well.
    if let (Some(code), Some(city_name)) = (state_code, city) {
        if !plate_report_geography::is_valid_city(code, city_name) {
            errors.insert(
                "city".to_string(),
                "Please select a valid city from the list".to_string(),
            );
        }
    }

    // Content moderation over the free-text fields. The dedicated
    // reporter_email field is exempt from the email-shape PII check since
    // emails are expected there.
    let screened: [(&str, Option<&str>); 4] = [
        ("plate", plate.as_deref()),
        ("make", non_empty(submission.make.as_ref())),
        ("model", non_empty(submission.model.as_ref())),
        ("description", description),
    ];

    for (field, value) in screened {
        if let Some(text) = value {
            if screen::contains_profanity(text) {
                errors.insert(field.to_string(), screen::Rejection::Language.message().to_string());
                break;
            }
        }
    }

    for (field, value) in screened {
        if let Some(text) = value {
            if screen::contains_pii(text) {
                errors
                    .entry(field.to_string())
                    .or_insert_with(|| screen::Rejection::PersonalInfo.message().to_string());
                break;
            }
        }
    }

    // Media validation: all-or-nothing across the set.
    let media_ok = media.iter().all(|file| {
        ALLOWED_MEDIA_TYPES.contains(&file.content_type.as_str())
            && file.size_bytes <= MAX_MEDIA_BYTES
    });
    if !media_ok {
        errors.insert(
            "media".to_string(),
            "Media files must be JPEG, PNG, WebP, MP4, or QuickTime video, 25 MB or smaller"
                .to_string(),
        );
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    #[allow(clippy::cast_possible_truncation)]
    let media_count = media.len().min(MAX_MEDIA_FILES) as u8;

    Ok(NewReport {
        plate: plate.unwrap_or_default(),
        state_code: state_code.unwrap_or_default().to_string(),
        city: city.unwrap_or_default().to_string(),
        violation: violation.unwrap_or(Violation::Speeding),
        vehicle_type: vehicle_type.unwrap_or(VehicleType::Other),
        color: color.unwrap_or(VehicleColor::Other),
        make: non_empty(submission.make.as_ref()).map(ToString::to_string),
        model: non_empty(submission.model.as_ref()).map(ToString::to_string),
        year,
        gender_observed,
        description: description.map(ToString::to_string),
        reporter_email: reporter_email.map(ToString::to_string),
        contact_ok,
        media_count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_submission() -> ReportSubmission {
        ReportSubmission {
            plate: Some("abc 1234".to_string()),
            state_code: Some("CA".to_string()),
            city: Some("San Diego".to_string()),
            violation: Some("speeding".to_string()),
            vehicle_type: Some("sedan".to_string()),
            color: Some("blue".to_string()),
            make: Some("Toyota".to_string()),
            model: Some("Corolla".to_string()),
            year: Some("2020".to_string()),
            gender_observed: Some("unknown".to_string()),
            description: Some("Weaving between lanes at speed".to_string()),
            reporter_email: Some("witness@example.com".to_string()),
            contact_ok: Some("true".to_string()),
        }
    }

    #[test]
    fn accepts_valid_submission() {
        let report = validate(&valid_submission(), &[]).unwrap();
        assert_eq!(report.plate, "ABC1234");
        assert_eq!(report.state_code, "CA");
        assert_eq!(report.city, "San Diego");
        assert_eq!(report.year, Some(2020));
        assert!(report.contact_ok);
        assert_eq!(report.media_count, 0);
    }

    #[test]
    fn collects_all_missing_required_fields() {
        let errors = validate(&ReportSubmission::default(), &[]).unwrap_err();
        for field in ["plate", "state_code", "city", "violation", "vehicle_type", "color"] {
            assert!(errors.contains_key(field), "missing error for {field}");
        }
    }

    #[test]
    fn normalizes_plate_before_length_check() {
        let mut submission = valid_submission();
        submission.plate = Some("  a b c 1 2 3 4  ".to_string());
        let report = validate(&submission, &[]).unwrap();
        assert_eq!(report.plate, "ABC1234");
    }

    #[test]
    fn rejects_plate_outside_length_bounds() {
        let mut submission = valid_submission();
        submission.plate = Some("A".to_string());
        assert!(validate(&submission, &[]).unwrap_err().contains_key("plate"));

        submission.plate = Some("ABCDEFGHIJK".to_string());
        assert!(validate(&submission, &[]).unwrap_err().contains_key("plate"));
    }

    #[test]
    fn rejects_city_not_in_state_list() {
        let mut submission = valid_submission();
        submission.city = Some("Nonexistent City".to_string());
        let errors = validate(&submission, &[]).unwrap_err();
        assert_eq!(
            errors.get("city").map(String::as_str),
            Some("Please select a valid city from the list")
        );
    }

    #[test]
    fn rejects_city_from_wrong_state() {
        let mut submission = valid_submission();
        submission.city = Some("Houston".to_string());
        assert!(validate(&submission, &[]).unwrap_err().contains_key("city"));
    }

    #[test]
    fn unknown_state_fails_as_city_error() {
        let mut submission = valid_submission();
        submission.state_code = Some("ZZ".to_string());
        assert!(validate(&submission, &[]).unwrap_err().contains_key("city"));
    }

    #[test]
    fn rejects_profanity_in_description() {
        let mut submission = valid_submission();
        submission.description = Some("this is damn annoying".to_string());
        let errors = validate(&submission, &[]).unwrap_err();
        assert_eq!(
            errors.get("description").map(String::as_str),
            Some("contains inappropriate language")
        );
    }

    #[test]
    fn rejects_ssn_in_description() {
        let mut submission = valid_submission();
        submission.description = Some("driver ssn 123-45-6789".to_string());
        let errors = validate(&submission, &[]).unwrap_err();
        assert_eq!(
            errors.get("description").map(String::as_str),
            Some("appears to contain personal information")
        );
    }

    #[test]
    fn rejects_email_shape_in_free_text_but_not_reporter_email() {
        let mut submission = valid_submission();
        submission.description = Some("contact driver@example.com about it".to_string());
        assert!(
            validate(&submission, &[])
                .unwrap_err()
                .contains_key("description")
        );

        // The dedicated email field is validated, not PII-screened.
        assert!(validate(&valid_submission(), &[]).is_ok());
    }

    #[test]
    fn rejects_malformed_reporter_email() {
        let mut submission = valid_submission();
        submission.reporter_email = Some("not-an-email".to_string());
        assert!(
            validate(&submission, &[])
                .unwrap_err()
                .contains_key("reporter_email")
        );
    }

    #[test]
    fn empty_reporter_email_is_accepted() {
        let mut submission = valid_submission();
        submission.reporter_email = Some(String::new());
        let report = validate(&submission, &[]).unwrap();
        assert_eq!(report.reporter_email, None);
    }

    #[test]
    fn rejects_year_out_of_range() {
        let mut submission = valid_submission();
        submission.year = Some("1899".to_string());
        assert!(validate(&submission, &[]).unwrap_err().contains_key("year"));

        submission.year = Some("3000".to_string());
        assert!(validate(&submission, &[]).unwrap_err().contains_key("year"));
    }

    #[test]
    fn rejects_overlong_description() {
        let mut submission = valid_submission();
        submission.description = Some("x".repeat(501));
        assert!(
            validate(&submission, &[])
                .unwrap_err()
                .contains_key("description")
        );
    }

    #[test]
    fn coerces_contact_ok_variants() {
        for (raw, expected) in [("true", true), ("1", true), ("on", true), ("false", false)] {
            let mut submission = valid_submission();
            submission.contact_ok = Some(raw.to_string());
            assert_eq!(validate(&submission, &[]).unwrap().contact_ok, expected, "{raw}");
        }

        let mut submission = valid_submission();
        submission.contact_ok = None;
        assert!(!validate(&submission, &[]).unwrap().contact_ok);
    }

    #[test]
    fn accepts_valid_media_set() {
        let media = vec![
            MediaMeta {
                content_type: "image/jpeg".to_string(),
                size_bytes: 1024,
            },
            MediaMeta {
                content_type: "video/mp4".to_string(),
                size_bytes: MAX_MEDIA_BYTES,
            },
        ];
        let report = validate(&valid_submission(), &media).unwrap();
        assert_eq!(report.media_count, 2);
    }

    #[test]
    fn one_bad_file_invalidates_the_whole_media_set() {
        let media = vec![
            MediaMeta {
                content_type: "image/jpeg".to_string(),
                size_bytes: 1024,
            },
            MediaMeta {
                content_type: "application/pdf".to_string(),
                size_bytes: 1024,
            },
        ];
        assert!(
            validate(&valid_submission(), &media)
                .unwrap_err()
                .contains_key("media")
        );
    }

    #[test]
    fn rejects_oversized_media() {
        let media = vec![MediaMeta {
            content_type: "image/png".to_string(),
            size_bytes: MAX_MEDIA_BYTES + 1,
        }];
        assert!(
            validate(&valid_submission(), &media)
                .unwrap_err()
                .contains_key("media")
        );
    }

    #[test]
    fn media_count_is_capped() {
        let media = vec![
            MediaMeta {
                content_type: "image/jpeg".to_string(),
                size_bytes: 1,
            };
            7
        ];
        let report = validate(&valid_submission(), &media).unwrap();
        assert_eq!(report.media_count, 5);
    }
}
