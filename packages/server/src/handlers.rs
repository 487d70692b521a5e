//! HTTP handler functions for the plate report API.

use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, web};
use futures::TryStreamExt as _;
use plate_report_database::queries;
use plate_report_database_models::{ReportQuery, ReportRow};
use plate_report_moderation::{MAX_MEDIA_FILES, MediaMeta, ReportSubmission};
use plate_report_report_models::{
    GenderObserved, VEHICLE_MAKES, VehicleColor, VehicleType, Violation,
};
use plate_report_server_models::{
    ApiError, ApiFieldErrors, ApiHealth, ApiReference, ApiReport, ApiReportPage, ApiStateOption,
    ReportQueryParams, SubmitSuccess,
};
use strum::IntoEnumIterator as _;

use crate::AppState;
use crate::rate_limit::UNKNOWN_CLIENT;

/// `GET /health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /reference`
///
/// Returns the static reference data the submission form renders:
/// states with their selectable cities, and the closed violation,
/// vehicle, color, and gender sets.
pub async fn reference() -> HttpResponse {
    let states = plate_report_geography::US_STATES
        .iter()
        .map(|state| ApiStateOption {
            code: state.code.to_string(),
            name: state.name.to_string(),
            cities: plate_report_geography::cities_for(state.code)
                .unwrap_or_default()
                .iter()
                .map(ToString::to_string)
                .collect(),
        })
        .collect();

    HttpResponse::Ok().json(ApiReference {
        states,
        violations: Violation::iter().collect(),
        vehicle_types: VehicleType::iter().collect(),
        colors: VehicleColor::iter().collect(),
        genders: GenderObserved::iter().collect(),
        makes: VEHICLE_MAKES.iter().map(ToString::to_string).collect(),
    })
}

/// `POST /reports`
///
/// Submission pipeline: rate-limit check, multipart parse, validation and
/// moderation, persist, respond. Any failure halts the pipeline and maps
/// to its error status; nothing is persisted unless every step passed.
pub async fn submit_report(
    req: HttpRequest,
    state: web::Data<AppState>,
    payload: Multipart,
) -> HttpResponse {
    let key = client_key(&req);
    if !state.rate_limiter.allow(&key) {
        log::debug!("Rate limited submission from {key}");
        return HttpResponse::TooManyRequests().json(ApiError {
            error: "Too many reports submitted. Please try again later.".to_string(),
        });
    }

    let (submission, media) = match read_submission(payload).await {
        Ok(parsed) => parsed,
        Err(e) => {
            log::debug!("Failed to parse multipart submission: {e}");
            return HttpResponse::BadRequest().json(ApiError {
                error: "Invalid form data".to_string(),
            });
        }
    };

    let new_report = match plate_report_moderation::validate(&submission, &media) {
        Ok(report) => report,
        Err(errors) => {
            return HttpResponse::BadRequest().json(ApiFieldErrors { errors });
        }
    };

    let now = chrono::Utc::now();
    let row = ReportRow {
        id: state.ids.next(),
        plate: new_report.plate,
        state_code: new_report.state_code,
        city: new_report.city,
        violation: new_report.violation,
        vehicle_type: new_report.vehicle_type,
        color: new_report.color,
        make: new_report.make,
        model: new_report.model,
        year: new_report.year,
        gender_observed: new_report.gender_observed,
        description: new_report.description,
        reporter_email: new_report.reporter_email,
        contact_ok: new_report.contact_ok,
        incident_at: now,
        created_at: now,
        media_count: new_report.media_count,
    };

    match queries::insert_report(state.db.as_ref(), &row).await {
        Ok(()) => HttpResponse::Ok().json(SubmitSuccess {
            success: true,
            report: ApiReport::from(row),
        }),
        Err(e) => {
            log::error!("Failed to insert report: {e}");
            HttpResponse::InternalServerError().json(ApiError {
                error: "Failed to save report".to_string(),
            })
        }
    }
}

/// `GET /reports`
///
/// Queries the public feed with optional filters and cursor pagination.
pub async fn list_reports(
    state: web::Data<AppState>,
    params: web::Query<ReportQueryParams>,
) -> HttpResponse {
    // An enum filter value outside the closed set can never match a
    // stored row, so answer with an empty page instead of querying.
    let violation = match parse_filter::<Violation>(params.violation.as_deref()) {
        Ok(v) => v,
        Err(()) => return HttpResponse::Ok().json(empty_page()),
    };
    let vehicle_type = match parse_filter::<VehicleType>(params.vehicle_type.as_deref()) {
        Ok(v) => v,
        Err(()) => return HttpResponse::Ok().json(empty_page()),
    };

    let query = ReportQuery {
        state_code: non_empty(params.state.as_deref()),
        city: non_empty(params.city.as_deref()),
        violation,
        vehicle_type,
        plate: non_empty(params.plate.as_deref()),
        limit: params.limit.unwrap_or(0),
        cursor: params
            .cursor
            .as_deref()
            .and_then(|raw| raw.parse::<i64>().ok()),
    };

    match queries::query_reports(state.db.as_ref(), &query).await {
        Ok(page) => HttpResponse::Ok().json(ApiReportPage {
            reports: page.reports.into_iter().map(ApiReport::from).collect(),
            has_more: page.has_more,
            next_cursor: page.next_cursor.map(|id| id.to_string()),
        }),
        Err(e) => {
            log::error!("Failed to query reports: {e}");
            HttpResponse::InternalServerError().json(ApiError {
                error: "Failed to query reports".to_string(),
            })
        }
    }
}

const fn empty_page() -> ApiReportPage {
    ApiReportPage {
        reports: Vec::new(),
        has_more: false,
        next_cursor: None,
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
}

/// Parses an optional enum filter. `Err` means a value was supplied but
/// is not a member of the closed set.
fn parse_filter<T: std::str::FromStr>(raw: Option<&str>) -> Result<Option<T>, ()> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        Some(value) => value.parse::<T>().map(Some).map_err(|_| ()),
        None => Ok(None),
    }
}

/// Derives the rate-limit key from the forwarded or peer address.
///
/// Clients with no resolvable address all share the [`UNKNOWN_CLIENT`]
/// bucket.
fn client_key(req: &HttpRequest) -> String {
    if let Some(forwarded) = req
        .headers()
        .get("x-forwarded-for")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .map(str::trim)
        .filter(|v| !v.is_empty())
    {
        return forwarded.to_string();
    }

    if let Some(real_ip) = req
        .headers()
        .get("x-real-ip")
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
    {
        return real_ip.to_string();
    }

    req.peer_addr()
        .map_or_else(|| UNKNOWN_CLIENT.to_string(), |addr| addr.ip().to_string())
}

/// Reads the multipart payload into raw submission fields and media
/// metadata. File bytes are drained and discarded — only the declared
/// MIME type and observed size are kept for validation. File parts past
/// the five-file cap are drained but not recorded.
async fn read_submission(
    mut payload: Multipart,
) -> Result<(ReportSubmission, Vec<MediaMeta>), actix_multipart::MultipartError> {
    let mut submission = ReportSubmission::default();
    let mut media = Vec::new();

    while let Some(mut field) = payload.try_next().await? {
        let Some(name) = field.name().map(ToString::to_string) else {
            continue;
        };

        if name == "media" {
            let content_type = field
                .content_type()
                .map_or_else(|| "application/octet-stream".to_string(), ToString::to_string);

            let mut size_bytes = 0u64;
            while let Some(chunk) = field.try_next().await? {
                size_bytes += chunk.len() as u64;
            }

            if media.len() < MAX_MEDIA_FILES {
                media.push(MediaMeta {
                    content_type,
                    size_bytes,
                });
            }
            continue;
        }

        let mut buf = Vec::new();
        while let Some(chunk) = field.try_next().await? {
            buf.extend_from_slice(&chunk);
        }
        let value = String::from_utf8_lossy(&buf).into_owned();

        match name.as_str() {
            "plate" => submission.plate = Some(value),
            "state_code" => submission.state_code = Some(value),
            "city" => submission.city = Some(value),
            "violation" => submission.violation = Some(value),
            "vehicle_type" => submission.vehicle_type = Some(value),
            "color" => submission.color = Some(value),
            "make" => submission.make = Some(value),
            "model" => submission.model = Some(value),
            "year" => submission.year = Some(value),
            "gender_observed" => submission.gender_observed = Some(value),
            "description" => submission.description = Some(value),
            "reporter_email" => submission.reporter_email = Some(value),
            "contact_ok" => submission.contact_ok = Some(value),
            other => log::debug!("Ignoring unknown form field {other:?}"),
        }
    }

    Ok((submission, media))
}
