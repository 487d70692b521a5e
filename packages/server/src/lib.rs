#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Actix-Web API server for the plate report application.
//!
//! Serves the public submission and feed endpoints backed by the
//! single-file `SQLite` report store, plus the static frontend bundle.
//! Submissions flow through the rate limiter and the validation and
//! moderation engine before anything is persisted.

pub mod handlers;
pub mod rate_limit;

use std::sync::Arc;

use actix_cors::Cors;
use actix_files::Files;
use actix_web::{App, HttpServer, middleware, web};
use plate_report_database::ReportIds;
use switchy_database::Database;

use crate::rate_limit::RateLimiter;

/// Shared application state.
pub struct AppState {
    /// Report store connection.
    pub db: Arc<dyn Database>,
    /// Monotonic report id generator.
    pub ids: ReportIds,
    /// Per-client submission rate limiter.
    pub rate_limiter: RateLimiter,
}

/// Starts the plate report API server.
///
/// Opens (or creates) the report database, builds the shared state, and
/// starts the Actix-Web HTTP server. This is a regular async function —
/// the caller is responsible for providing the async runtime (e.g. via
/// `#[actix_web::main]`).
///
/// # Errors
///
/// Returns an `std::io::Result` error if the HTTP server fails to bind or
/// encounters a runtime error.
///
/// # Panics
///
/// Panics if the report database cannot be opened.
#[allow(clippy::future_not_send)]
pub async fn run_server() -> std::io::Result<()> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    log::info!("Opening report database...");
    let db = plate_report_database::open_from_env()
        .await
        .expect("Failed to open report database");

    let state = web::Data::new(AppState {
        db: Arc::from(db),
        ids: ReportIds::new(),
        rate_limiter: RateLimiter::submissions(),
    });

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    log::info!("Starting server on {bind_addr}:{port}");

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .app_data(state.clone())
            .route("/health", web::get().to(handlers::health))
            .route("/reference", web::get().to(handlers::reference))
            .route("/reports", web::post().to(handlers::submit_report))
            .route("/reports", web::get().to(handlers::list_reports))
            // Serve frontend static files (production)
            .service(Files::new("/", "app/dist").index_file("index.html"))
    })
    .bind((bind_addr, port))?
    .run()
    .await
}
