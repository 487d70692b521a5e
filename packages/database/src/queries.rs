//! Query functions for the report store.
//!
//! Listing uses dynamically-built SQL with positional parameters, the
//! same shape for the filtered and unfiltered paths: optional predicates
//! are appended per filter, ordering is always `created_at DESC, id DESC`,
//! and pagination fetches one row past the requested limit to learn
//! whether more pages exist.

use std::fmt::Write as _;

use chrono::SecondsFormat;
use moosicbox_json_utils::database::ToValue as _;
use plate_report_database_models::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, ReportPage, ReportQuery, ReportRow};
use plate_report_report_models::{GenderObserved, VehicleColor, VehicleType, Violation};
use switchy_database::{Database, DatabaseValue};

use crate::DbError;

/// Inserts one fully-validated report row.
///
/// The id is the primary key; inserting a duplicate id fails with a
/// database error (the monotonic generator makes this unreachable in
/// practice).
///
/// # Errors
///
/// Returns [`DbError`] if the insert fails.
pub async fn insert_report(db: &dyn Database, report: &ReportRow) -> Result<(), DbError> {
    db.exec_raw_params(
        "INSERT INTO reports (
            id, plate, state_code, city, violation, vehicle_type, color,
            make, model, year, gender_observed, description, reporter_email,
            contact_ok, incident_at, created_at, media_count
        ) VALUES (
            $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14,
            $15, $16, $17
        )",
        &[
            DatabaseValue::Int64(report.id),
            DatabaseValue::String(report.plate.clone()),
            DatabaseValue::String(report.state_code.clone()),
            DatabaseValue::String(report.city.clone()),
            DatabaseValue::String(report.violation.to_string()),
            DatabaseValue::String(report.vehicle_type.to_string()),
            DatabaseValue::String(report.color.to_string()),
            report
                .make
                .as_ref()
                .map_or(DatabaseValue::Null, |m| DatabaseValue::String(m.clone())),
            report
                .model
                .as_ref()
                .map_or(DatabaseValue::Null, |m| DatabaseValue::String(m.clone())),
            report
                .year
                .map_or(DatabaseValue::Null, |y| DatabaseValue::Int64(i64::from(y))),
            report
                .gender_observed
                .map_or(DatabaseValue::Null, |g| DatabaseValue::String(g.to_string())),
            report
                .description
                .as_ref()
                .map_or(DatabaseValue::Null, |d| DatabaseValue::String(d.clone())),
            report
                .reporter_email
                .as_ref()
                .map_or(DatabaseValue::Null, |e| DatabaseValue::String(e.clone())),
            DatabaseValue::Int64(i64::from(report.contact_ok)),
            DatabaseValue::String(format_timestamp(report.incident_at)),
            DatabaseValue::String(format_timestamp(report.created_at)),
            DatabaseValue::Int64(i64::from(report.media_count)),
        ],
    )
    .await
    .map_err(|e| DbError::Database(e.to_string()))?;

    Ok(())
}

/// Queries reports with optional filters and cursor pagination.
///
/// # Errors
///
/// Returns [`DbError`] if the query fails or a stored row cannot be
/// converted back to its typed form.
pub async fn query_reports(db: &dyn Database, query: &ReportQuery) -> Result<ReportPage, DbError> {
    let limit = effective_limit(query.limit);
    let (sql, params) = build_reports_sql(query, limit);

    let rows = db
        .query_raw_params(&sql, &params)
        .await
        .map_err(|e| DbError::Database(e.to_string()))?;

    let mut reports = Vec::with_capacity(rows.len());
    for row in &rows {
        reports.push(row_to_report(row)?);
    }

    Ok(shape_page(reports, limit))
}

/// Clamps a requested page size to `1..=MAX_PAGE_SIZE`, defaulting zero.
const fn effective_limit(limit: u32) -> u32 {
    if limit == 0 {
        DEFAULT_PAGE_SIZE
    } else if limit > MAX_PAGE_SIZE {
        MAX_PAGE_SIZE
    } else {
        limit
    }
}

/// Builds the listing SQL and its parameters.
///
/// Fetches `limit + 1` rows; the extra row only signals that another page
/// exists and is dropped by [`shape_page`].
fn build_reports_sql(query: &ReportQuery, limit: u32) -> (String, Vec<DatabaseValue>) {
    let mut sql = String::from(
        "SELECT id, plate, state_code, city, violation, vehicle_type, color,
                make, model, year, gender_observed, description,
                reporter_email, contact_ok, incident_at, created_at,
                media_count
         FROM reports
         WHERE 1=1",
    );

    let mut params: Vec<DatabaseValue> = Vec::new();
    let mut param_idx = 1u32;

    if let Some(state_code) = &query.state_code {
        write!(sql, " AND state_code = ${param_idx}").unwrap();
        params.push(DatabaseValue::String(state_code.clone()));
        param_idx += 1;
    }

    if let Some(city) = &query.city {
        write!(sql, " AND LOWER(city) LIKE ${param_idx}").unwrap();
        params.push(DatabaseValue::String(format!(
            "%{}%",
            city.to_lowercase()
        )));
        param_idx += 1;
    }

    if let Some(violation) = &query.violation {
        write!(sql, " AND violation = ${param_idx}").unwrap();
        params.push(DatabaseValue::String(violation.to_string()));
        param_idx += 1;
    }

    if let Some(vehicle_type) = &query.vehicle_type {
        write!(sql, " AND vehicle_type = ${param_idx}").unwrap();
        params.push(DatabaseValue::String(vehicle_type.to_string()));
        param_idx += 1;
    }

    if let Some(plate) = &query.plate {
        write!(sql, " AND LOWER(plate) LIKE ${param_idx}").unwrap();
        params.push(DatabaseValue::String(format!(
            "%{}%",
            plate.to_lowercase()
        )));
        param_idx += 1;
    }

    if let Some(cursor) = query.cursor {
        write!(sql, " AND id < ${param_idx}").unwrap();
        params.push(DatabaseValue::Int64(cursor));
        param_idx += 1;
    }

    sql.push_str(" ORDER BY created_at DESC, id DESC");

    write!(sql, " LIMIT ${param_idx}").unwrap();
    params.push(DatabaseValue::Int64(i64::from(limit) + 1));

    (sql, params)
}

/// Turns up to `limit + 1` fetched rows into one page.
fn shape_page(mut reports: Vec<ReportRow>, limit: u32) -> ReportPage {
    let limit = limit as usize;
    let has_more = reports.len() > limit;
    reports.truncate(limit);
    let next_cursor = if has_more {
        reports.last().map(|report| report.id)
    } else {
        None
    };

    ReportPage {
        reports,
        has_more,
        next_cursor,
    }
}

fn format_timestamp(at: chrono::DateTime<chrono::Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn parse_timestamp(raw: &str) -> Result<chrono::DateTime<chrono::Utc>, DbError> {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&chrono::Utc))
        .map_err(|e| DbError::Conversion {
            message: format!("Invalid stored timestamp {raw:?}: {e}"),
        })
}

fn row_to_report(row: &switchy_database::Row) -> Result<ReportRow, DbError> {
    let violation_raw: String = row
        .to_value("violation")
        .map_err(|e| conversion(e.to_string()))?;
    let violation = violation_raw
        .parse::<Violation>()
        .map_err(|_| conversion(format!("Unknown stored violation {violation_raw:?}")))?;

    let vehicle_type_raw: String = row
        .to_value("vehicle_type")
        .map_err(|e| conversion(e.to_string()))?;
    let vehicle_type = vehicle_type_raw
        .parse::<VehicleType>()
        .map_err(|_| conversion(format!("Unknown stored vehicle type {vehicle_type_raw:?}")))?;

    let color_raw: String = row
        .to_value("color")
        .map_err(|e| conversion(e.to_string()))?;
    let color = color_raw
        .parse::<VehicleColor>()
        .map_err(|_| conversion(format!("Unknown stored color {color_raw:?}")))?;

    let gender_observed = row
        .to_value::<Option<String>>("gender_observed")
        .unwrap_or(None)
        .map(|raw| {
            raw.parse::<GenderObserved>()
                .map_err(|_| conversion(format!("Unknown stored gender {raw:?}")))
        })
        .transpose()?;

    let incident_at_raw: String = row
        .to_value("incident_at")
        .map_err(|e| conversion(e.to_string()))?;
    let created_at_raw: String = row
        .to_value("created_at")
        .map_err(|e| conversion(e.to_string()))?;

    let media_count: i64 = row.to_value("media_count").unwrap_or(0);

    Ok(ReportRow {
        id: row.to_value("id").map_err(|e| conversion(e.to_string()))?,
        plate: row.to_value("plate").unwrap_or_default(),
        state_code: row.to_value("state_code").unwrap_or_default(),
        city: row.to_value("city").unwrap_or_default(),
        violation,
        vehicle_type,
        color,
        make: row.to_value("make").unwrap_or(None),
        model: row.to_value("model").unwrap_or(None),
        year: row
            .to_value::<Option<i64>>("year")
            .unwrap_or(None)
            .and_then(|y| i32::try_from(y).ok()),
        gender_observed,
        description: row.to_value("description").unwrap_or(None),
        reporter_email: row.to_value("reporter_email").unwrap_or(None),
        contact_ok: row.to_value::<Option<i64>>("contact_ok").unwrap_or(None) == Some(1),
        incident_at: parse_timestamp(&incident_at_raw)?,
        created_at: parse_timestamp(&created_at_raw)?,
        media_count: u8::try_from(media_count).unwrap_or(0),
    })
}

fn conversion(message: String) -> DbError {
    DbError::Conversion { message }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone as _;

    use super::*;

    fn report(id: i64) -> ReportRow {
        ReportRow {
            id,
            plate: "ABC1234".to_string(),
            state_code: "CA".to_string(),
            city: "San Diego".to_string(),
            violation: Violation::Speeding,
            vehicle_type: VehicleType::Sedan,
            color: VehicleColor::Blue,
            make: None,
            model: None,
            year: None,
            gender_observed: None,
            description: None,
            reporter_email: None,
            contact_ok: false,
            incident_at: chrono::Utc.timestamp_millis_opt(id).unwrap(),
            created_at: chrono::Utc.timestamp_millis_opt(id).unwrap(),
            media_count: 0,
        }
    }

    #[test]
    fn unfiltered_sql_has_only_the_limit_parameter() {
        let (sql, params) = build_reports_sql(&ReportQuery::latest(), 20);
        assert!(sql.contains("WHERE 1=1 ORDER BY created_at DESC, id DESC LIMIT $1"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn each_filter_adds_one_predicate() {
        let query = ReportQuery {
            state_code: Some("CA".to_string()),
            city: Some("Diego".to_string()),
            violation: Some(Violation::Speeding),
            vehicle_type: Some(VehicleType::Sedan),
            plate: Some("abc".to_string()),
            limit: 20,
            cursor: Some(99),
        };
        let (sql, params) = build_reports_sql(&query, 20);
        assert!(sql.contains("state_code = $1"));
        assert!(sql.contains("LOWER(city) LIKE $2"));
        assert!(sql.contains("violation = $3"));
        assert!(sql.contains("vehicle_type = $4"));
        assert!(sql.contains("LOWER(plate) LIKE $5"));
        assert!(sql.contains("id < $6"));
        assert!(sql.contains("LIMIT $7"));
        assert_eq!(params.len(), 7);
    }

    #[test]
    fn substring_filters_are_lowercased_and_wrapped() {
        let query = ReportQuery {
            city: Some("San DIEGO".to_string()),
            limit: 20,
            ..ReportQuery::default()
        };
        let (_, params) = build_reports_sql(&query, 20);
        assert_eq!(
            params.first(),
            Some(&DatabaseValue::String("%san diego%".to_string()))
        );
    }

    #[test]
    fn fetches_one_past_the_limit() {
        let (_, params) = build_reports_sql(&ReportQuery::latest(), 20);
        assert_eq!(params.last(), Some(&DatabaseValue::Int64(21)));
    }

    #[test]
    fn effective_limit_defaults_and_clamps() {
        assert_eq!(effective_limit(0), DEFAULT_PAGE_SIZE);
        assert_eq!(effective_limit(5), 5);
        assert_eq!(effective_limit(500), MAX_PAGE_SIZE);
    }

    #[test]
    fn full_page_with_extra_row_reports_more() {
        let rows: Vec<ReportRow> = (1..=21).rev().map(report).collect();
        let page = shape_page(rows, 20);
        assert_eq!(page.reports.len(), 20);
        assert!(page.has_more);
        assert_eq!(page.next_cursor, Some(2));
    }

    #[test]
    fn short_page_has_no_cursor() {
        let rows: Vec<ReportRow> = (1..=5).rev().map(report).collect();
        let page = shape_page(rows, 20);
        assert_eq!(page.reports.len(), 5);
        assert!(!page.has_more);
        assert_eq!(page.next_cursor, None);
    }

    #[test]
    fn empty_page_is_well_formed() {
        let page = shape_page(Vec::new(), 20);
        assert!(page.reports.is_empty());
        assert!(!page.has_more);
        assert_eq!(page.next_cursor, None);
    }

    #[test]
    fn timestamps_round_trip() {
        let at = chrono::Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        let formatted = format_timestamp(at);
        assert_eq!(parse_timestamp(&formatted).unwrap(), at);
    }
}
