use std::sync::Arc;
use std::time::{Duration, Instant};

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;
use tracing::{error, info, trace};

use crate::services::{ShortenerService, TrackerService};

const STORAGE_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

// 应用启动时间结构体
#[derive(Clone, Debug)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

impl AppStartTime {
    pub fn now() -> Self {
        Self {
            start_datetime: chrono::Utc::now(),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        (chrono::Utc::now() - self.start_datetime)
            .num_seconds()
            .max(0) as u64
    }
}

#[derive(Debug, Serialize)]
pub struct StorageCheck {
    pub status: &'static str,
    pub backend: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub timestamp: String,
    pub uptime: u64,
    pub details: HealthDetails,
    pub response_time_ms: u64,
}

#[derive(Debug, Default, Serialize)]
pub struct HealthDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registered_urls: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<StorageCheck>,
}

/// Health Service
///
/// tracker 直接查询 storage 的用户数，不经过业务校验。
pub struct HealthService;

impl HealthService {
    /// shortener 没有外部依赖，进程存活即健康
    pub async fn shortener_health(
        service: web::Data<Arc<ShortenerService>>,
        app_start_time: web::Data<AppStartTime>,
    ) -> impl Responder {
        let start_time = Instant::now();
        trace!("Received shortener health check request");

        HttpResponse::Ok().json(HealthResponse {
            status: "healthy",
            service: "shortener",
            timestamp: chrono::Utc::now().to_rfc3339(),
            uptime: app_start_time.uptime_seconds(),
            details: HealthDetails {
                registered_urls: Some(service.registered_count()),
                storage: None,
            },
            response_time_ms: start_time.elapsed().as_millis() as u64,
        })
    }

    pub async fn tracker_health(
        service: web::Data<Arc<TrackerService>>,
        app_start_time: web::Data<AppStartTime>,
    ) -> impl Responder {
        let start_time = Instant::now();
        trace!("Received tracker health check request");

        let storage = service.storage();
        let backend = storage.get_backend_config().storage_type;

        let check =
            match tokio::time::timeout(STORAGE_CHECK_TIMEOUT, storage.count_users()).await {
                Ok(Ok(count)) => StorageCheck {
                    status: "healthy",
                    backend,
                    users_count: Some(count),
                    error: None,
                },
                Ok(Err(e)) => {
                    error!("Storage health check failed: {}", e);
                    StorageCheck {
                        status: "unhealthy",
                        backend,
                        users_count: None,
                        error: Some(format!("database error: {}", e)),
                    }
                }
                Err(_) => {
                    error!("Storage health check timeout");
                    StorageCheck {
                        status: "unhealthy",
                        backend,
                        users_count: None,
                        error: Some("timeout".to_string()),
                    }
                }
            };

        let is_healthy = check.status == "healthy";
        let status = if is_healthy {
            StatusCode::OK
        } else {
            StatusCode::SERVICE_UNAVAILABLE
        };

        info!(
            "Health check completed in {:?}, status: {}",
            start_time.elapsed(),
            check.status
        );

        HttpResponse::build(status).json(HealthResponse {
            status: check.status,
            service: "tracker",
            timestamp: chrono::Utc::now().to_rfc3339(),
            uptime: app_start_time.uptime_seconds(),
            details: HealthDetails {
                registered_urls: None,
                storage: Some(check),
            },
            response_time_ms: start_time.elapsed().as_millis() as u64,
        })
    }
}

/// 健康检查路由（shortener）
pub fn shortener_health_routes() -> actix_web::Scope {
    web::scope("/health").route("", web::get().to(HealthService::shortener_health))
}

/// 健康检查路由（tracker）
pub fn tracker_health_routes() -> actix_web::Scope {
    web::scope("/health").route("", web::get().to(HealthService::tracker_health))
}
