//! URL shortener HTTP handlers
//!
//! Every client-side failure answers `200 {"error":"invalid url"}`.

use std::sync::Arc;

use actix_web::error::{InternalError, UrlencodedError};
use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, trace};

use crate::services::ShortenerService;

const INVALID_URL: &str = "invalid url";

#[derive(Debug, Deserialize)]
pub struct ShortenForm {
    pub url: Option<String>,
}

pub struct ShortUrlService;

impl ShortUrlService {
    pub async fn create(
        form: web::Form<ShortenForm>,
        service: web::Data<Arc<ShortenerService>>,
    ) -> HttpResponse {
        let Some(url) = form.into_inner().url else {
            debug!("Shorten request without url field");
            return Self::invalid_url_response();
        };

        match service.submit(&url).await {
            Ok(short) => HttpResponse::Ok().json(short),
            Err(e) => {
                debug!("Shorten request rejected: {}", e);
                Self::invalid_url_response()
            }
        }
    }

    pub async fn redirect(
        path: web::Path<String>,
        service: web::Data<Arc<ShortenerService>>,
    ) -> HttpResponse {
        let token = path.into_inner();

        match service.resolve(&token) {
            Ok(url) => {
                trace!("Redirecting {} -> {}", token, url);
                HttpResponse::Found()
                    .insert_header((header::LOCATION, url))
                    .finish()
            }
            Err(e) => {
                debug!("Redirect lookup failed: {}", e);
                Self::invalid_url_response()
            }
        }
    }

    #[inline]
    fn invalid_url_response() -> HttpResponse {
        HttpResponse::Ok().json(json!({ "error": INVALID_URL }))
    }
}

/// 表单解析失败（错误的 Content-Type 或编码）也按 invalid url 处理
fn form_error_handler(err: UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
    debug!("Malformed shorten form: {}", err);
    InternalError::from_response(err, ShortUrlService::invalid_url_response()).into()
}

/// Shortener 路由配置
pub fn shortener_routes() -> actix_web::Scope {
    web::scope("/api/shorturl")
        .app_data(web::FormConfig::default().error_handler(form_error_handler))
        .route("", web::post().to(ShortUrlService::create))
        .route("/{short_url}", web::get().to(ShortUrlService::redirect))
}
