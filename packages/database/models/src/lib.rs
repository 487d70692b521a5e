#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Report row and query parameter types.
//!
//! These types represent the shapes of data as stored in and retrieved
//! from the `SQLite` store. They are distinct from the API response types
//! in `plate_report_server_models` and the raw submission input in
//! `plate_report_moderation`.

use chrono::{DateTime, Utc};
use plate_report_report_models::{GenderObserved, VehicleColor, VehicleType, Violation};
use serde::{Deserialize, Serialize};

/// Default page size for report listings.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Maximum page size a caller may request.
pub const MAX_PAGE_SIZE: u32 = 100;

/// A report row as persisted in the store. Append-only: rows are never
/// updated or deleted once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    /// Primary key: epoch milliseconds at creation, strictly monotonic
    /// within a process. Doubles as the pagination cursor.
    pub id: i64,
    /// Normalized plate (uppercase, no whitespace).
    pub plate: String,
    /// Two-letter state code.
    pub state_code: String,
    /// City from the reference list for `state_code`.
    pub city: String,
    pub violation: Violation,
    pub vehicle_type: VehicleType,
    pub color: VehicleColor,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub gender_observed: Option<GenderObserved>,
    pub description: Option<String>,
    /// Private contact address; never exposed on the public feed.
    pub reporter_email: Option<String>,
    pub contact_ok: bool,
    /// When the incident was observed (set to submission time).
    pub incident_at: DateTime<Utc>,
    /// Server-assigned creation time, immutable.
    pub created_at: DateTime<Utc>,
    /// Count of accepted media attachments, 0–5.
    pub media_count: u8,
}

/// Filters and pagination for a report listing query.
///
/// Absent filters impose no constraint. `cursor` is the id of the last
/// item of the previous page; only rows with a smaller id are returned.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportQuery {
    /// Exact state code match.
    pub state_code: Option<String>,
    /// Case-insensitive city substring match.
    pub city: Option<String>,
    /// Exact violation match.
    pub violation: Option<Violation>,
    /// Exact vehicle type match.
    pub vehicle_type: Option<VehicleType>,
    /// Case-insensitive plate substring match.
    pub plate: Option<String>,
    /// Page size; clamped to [`MAX_PAGE_SIZE`].
    pub limit: u32,
    /// Exclusive upper bound on row id from the previous page.
    pub cursor: Option<i64>,
}

impl ReportQuery {
    /// A query with no filters and the default page size.
    #[must_use]
    pub fn latest() -> Self {
        Self {
            limit: DEFAULT_PAGE_SIZE,
            ..Self::default()
        }
    }
}

/// One page of a report listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPage {
    /// Rows in `created_at` descending order.
    pub reports: Vec<ReportRow>,
    /// Whether more rows exist past this page.
    pub has_more: bool,
    /// Cursor for the next page; `None` on the last page.
    pub next_cursor: Option<i64>,
}
