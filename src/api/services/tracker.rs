//! Exercise tracker HTTP handlers
//!
//! Failures are plain text: 400 for validation, 404 for unknown users,
//! 500 for anything coming from storage.

use std::sync::Arc;

use actix_web::error::{InternalError, UrlencodedError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, web};
use serde::Deserialize;
use tracing::{debug, error};

use crate::errors::ShortrackError;
use crate::services::{NewExercise, TrackerService};
use crate::utils::LogFilterParams;

#[derive(Debug, Deserialize)]
pub struct UserForm {
    pub username: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ExerciseForm {
    pub description: Option<String>,
    pub duration: Option<String>,
    pub date: Option<String>,
}

pub struct TrackerApi;

impl TrackerApi {
    pub async fn create_user(
        form: web::Form<UserForm>,
        service: web::Data<Arc<TrackerService>>,
    ) -> HttpResponse {
        match service.create_user(form.username.as_deref()).await {
            Ok(user) => HttpResponse::Ok().json(user),
            Err(e) => error_response(&e),
        }
    }

    pub async fn list_users(service: web::Data<Arc<TrackerService>>) -> HttpResponse {
        match service.list_users().await {
            Ok(users) => HttpResponse::Ok().json(users),
            Err(e) => error_response(&e),
        }
    }

    pub async fn add_exercise(
        path: web::Path<String>,
        form: web::Form<ExerciseForm>,
        service: web::Data<Arc<TrackerService>>,
    ) -> HttpResponse {
        let user_id = path.into_inner();
        let fields = NewExercise {
            description: form.description.as_deref(),
            duration: form.duration.as_deref(),
            date: form.date.as_deref(),
        };

        match service.add_exercise(&user_id, fields).await {
            Ok(summary) => HttpResponse::Ok().json(summary),
            Err(e) => error_response(&e),
        }
    }

    /// 每个查询参数独立解析，重复的 key 取第一个值
    pub async fn get_logs(
        req: HttpRequest,
        path: web::Path<String>,
        service: web::Data<Arc<TrackerService>>,
    ) -> HttpResponse {
        let user_id = path.into_inner();
        let pairs = web::Query::<Vec<(String, String)>>::from_query(req.query_string())
            .map(|q| q.into_inner())
            .unwrap_or_default();
        let params = LogFilterParams::from_query(
            first_value(&pairs, "from"),
            first_value(&pairs, "to"),
            first_value(&pairs, "limit"),
        );

        match service.list_logs(&user_id, params).await {
            Ok(log) => HttpResponse::Ok().json(log),
            Err(e) => error_response(&e),
        }
    }
}

fn first_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

/// ShortrackError → 纯文本响应
fn error_response(err: &ShortrackError) -> HttpResponse {
    let status = err.http_status();
    if err.is_client_error() {
        debug!("Tracker request rejected ({}): {}", status, err);
        text_response(status, err.message())
    } else {
        error!("Tracker request failed: {}", err);
        text_response(status, "Internal Server Error")
    }
}

fn text_response(status: StatusCode, body: &str) -> HttpResponse {
    HttpResponse::build(status)
        .content_type("text/plain; charset=utf-8")
        .body(body.to_string())
}

fn form_error_handler(err: UrlencodedError, _req: &HttpRequest) -> actix_web::Error {
    let response = text_response(StatusCode::BAD_REQUEST, &format!("Invalid form body: {}", err));
    InternalError::from_response(err, response).into()
}

/// Tracker 路由配置
pub fn tracker_routes() -> actix_web::Scope {
    web::scope("/api/users")
        .app_data(web::FormConfig::default().error_handler(form_error_handler))
        .route("", web::post().to(TrackerApi::create_user))
        .route("", web::get().to(TrackerApi::list_users))
        .route("/{id}/exercises", web::post().to(TrackerApi::add_exercise))
        .route("/{id}/logs", web::get().to(TrackerApi::get_logs))
}
