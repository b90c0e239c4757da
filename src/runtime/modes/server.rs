//! Server mode
//!
//! Builds the actix-web application for each service and runs it.

use std::time::Duration;

use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware::Compress, web};
use anyhow::{Context, Result};
use tracing::warn;

use crate::api::middleware::RequestIdMiddleware;
use crate::api::services::{
    AppStartTime, ShortenerAssets, TrackerAssets, frontend_routes, shortener_health_routes,
    shortener_routes, tracker_health_routes, tracker_routes,
};
use crate::runtime::lifetime;

/// 启用时允许任意来源访问 API
fn build_cors_middleware(enabled: bool) -> Cors {
    if !enabled {
        return Cors::default();
    }

    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600)
}

fn bind_address() -> (String, usize) {
    let config = crate::config::get_config();
    let address = format!("{}:{}", config.server.host, config.server.port);
    (address, config.server.cpu_count.clamp(1, 32))
}

/// Run the URL shortener
///
/// **Note**: Logging system must be initialized before calling this function
pub async fn run_shortener_server() -> Result<()> {
    let app_start_time = AppStartTime::now();
    let startup = lifetime::startup::prepare_shortener_startup();
    let service = startup.service;

    let cors_enabled = crate::config::get_config().server.cors_enabled;
    let (address, workers) = bind_address();
    warn!("Using {} worker threads for the shortener", workers);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequestIdMiddleware)
            .wrap(build_cors_middleware(cors_enabled))
            .wrap(Compress::default())
            .app_data(web::Data::new(service.clone()))
            .app_data(web::Data::new(app_start_time.clone()))
            .service(shortener_routes())
            .service(shortener_health_routes())
            .service(frontend_routes::<ShortenerAssets>())
    })
    .keep_alive(Duration::from_secs(30))
    .workers(workers)
    .bind(&address)
    .with_context(|| format!("Failed to bind shortener to {}", address))?;

    warn!("Starting shortener at http://{}", address);
    server.run().await.context("Shortener server error")?;

    Ok(())
}

/// Run the exercise tracker
///
/// Storage is connected and migrated before the socket is bound.
pub async fn run_tracker_server() -> Result<()> {
    let app_start_time = AppStartTime::now();
    let startup = lifetime::startup::prepare_tracker_startup()
        .await
        .inspect_err(|e| tracing::error!("Tracker startup failed: {}", e))?;
    let service = startup.service;
    let db_for_shutdown = startup.storage.get_db().clone();

    let cors_enabled = crate::config::get_config().server.cors_enabled;
    let (address, workers) = bind_address();
    warn!("Using {} worker threads for the tracker", workers);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequestIdMiddleware)
            .wrap(build_cors_middleware(cors_enabled))
            .wrap(Compress::default())
            .app_data(web::Data::new(service.clone()))
            .app_data(web::Data::new(app_start_time.clone()))
            .service(tracker_routes())
            .service(tracker_health_routes())
            .service(frontend_routes::<TrackerAssets>())
    })
    .keep_alive(Duration::from_secs(30))
    .workers(workers)
    .bind(&address)
    .with_context(|| format!("Failed to bind tracker to {}", address))?;

    warn!("Starting tracker at http://{}", address);
    let result = server.run().await;

    lifetime::shutdown::close_database(db_for_shutdown).await;
    result.context("Tracker server error")?;

    Ok(())
}
