#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the plate report server.
//!
//! These types are serialized to JSON for the REST API. They are separate
//! from the database row types to allow independent evolution of the API
//! contract — most importantly, [`ApiReport`] has no `reporter_email`
//! field at all, so the private contact address can never leak into a
//! response body.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use plate_report_database_models::ReportRow;
use plate_report_report_models::{GenderObserved, VehicleColor, VehicleType, Violation};
use serde::{Deserialize, Serialize};

/// A report as returned by the API.
///
/// The id doubles as the pagination cursor and is serialized as a string
/// so clients treat it as opaque.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiReport {
    /// Unique report id (opaque cursor value).
    pub id: String,
    /// Normalized plate.
    pub plate: String,
    /// Two-letter state code.
    pub state_code: String,
    /// City name.
    pub city: String,
    pub violation: Violation,
    pub vehicle_type: VehicleType,
    pub color: VehicleColor,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub gender_observed: Option<GenderObserved>,
    pub description: Option<String>,
    /// Whether the reporter consented to private follow-up contact.
    pub contact_ok: bool,
    /// When the incident was observed (ISO 8601).
    pub incident_at: DateTime<Utc>,
    /// When the report was created (ISO 8601).
    pub created_at: DateTime<Utc>,
    /// Number of accepted media attachments.
    pub media_count: u8,
}

impl From<ReportRow> for ApiReport {
    fn from(row: ReportRow) -> Self {
        Self {
            id: row.id.to_string(),
            plate: row.plate,
            state_code: row.state_code,
            city: row.city,
            violation: row.violation,
            vehicle_type: row.vehicle_type,
            color: row.color,
            make: row.make,
            model: row.model,
            year: row.year,
            gender_observed: row.gender_observed,
            description: row.description,
            contact_ok: row.contact_ok,
            incident_at: row.incident_at,
            created_at: row.created_at,
            media_count: row.media_count,
        }
    }
}

/// Query parameters for the report listing endpoint. Field names match
/// the query string keys exactly.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportQueryParams {
    /// Exact state code filter.
    pub state: Option<String>,
    /// City substring filter.
    pub city: Option<String>,
    /// Exact violation filter.
    pub violation: Option<String>,
    /// Exact vehicle type filter.
    pub vehicle_type: Option<String>,
    /// Plate substring filter.
    pub plate: Option<String>,
    /// Page size (default 20, max 100).
    pub limit: Option<u32>,
    /// Id of the last item of the previous page.
    pub cursor: Option<String>,
}

/// One page of the public report feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiReportPage {
    pub reports: Vec<ApiReport>,
    pub has_more: bool,
    pub next_cursor: Option<String>,
}

/// Successful submission response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmitSuccess {
    pub success: bool,
    pub report: ApiReport,
}

/// Validation failure response: field name → message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiFieldErrors {
    pub errors: BTreeMap<String, String>,
}

/// Generic error response for rate-limit and server failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

/// Health check response.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the service is healthy.
    pub healthy: bool,
    /// Server version.
    pub version: String,
}

/// A selectable state with its reference cities, for form rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiStateOption {
    pub code: String,
    pub name: String,
    pub cities: Vec<String>,
}

/// Static reference data for the submission form and feed filters.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiReference {
    pub states: Vec<ApiStateOption>,
    pub violations: Vec<Violation>,
    pub vehicle_types: Vec<VehicleType>,
    pub colors: Vec<VehicleColor>,
    pub genders: Vec<GenderObserved>,
    pub makes: Vec<String>,
}
