//! Exercise tracker service
//!
//! Business rules for users and their exercise logs, shared by the HTTP
//! handlers. Storage errors are passed through untouched.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::errors::{Result, ShortrackError};
use crate::storage::{Exercise, ExerciseFilter, SeaOrmStorage, User};
use crate::utils::date_format::{format_day, today};
use crate::utils::form_parse::{parse_duration, parse_optional_date, require_text};
use crate::utils::LogFilterParams;

// ============ Request/Response DTOs ============

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub username: String,
    #[serde(rename = "_id")]
    pub id: String,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            id: user.id,
        }
    }
}

/// Raw exercise form fields, validated by `add_exercise`
#[derive(Debug, Clone, Default)]
pub struct NewExercise<'a> {
    pub description: Option<&'a str>,
    pub duration: Option<&'a str>,
    pub date: Option<&'a str>,
}

/// 新增运动记录后的返回值，`_id` 是用户 id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseSummary {
    pub username: String,
    pub description: String,
    pub duration: i64,
    pub date: String,
    #[serde(rename = "_id")]
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    pub description: String,
    pub duration: i64,
    pub date: String,
}

impl From<Exercise> for LogEntry {
    fn from(entry: Exercise) -> Self {
        Self {
            description: entry.description,
            duration: entry.duration,
            date: format_day(entry.date),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExerciseLog {
    pub username: String,
    pub count: usize,
    #[serde(rename = "_id")]
    pub id: String,
    pub log: Vec<LogEntry>,
}

// ============ Service ============

pub struct TrackerService {
    storage: Arc<SeaOrmStorage>,
}

impl TrackerService {
    pub fn new(storage: Arc<SeaOrmStorage>) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &Arc<SeaOrmStorage> {
        &self.storage
    }

    pub async fn create_user(&self, username: Option<&str>) -> Result<UserSummary> {
        let username = require_text("username", username)?;

        let user = User {
            id: new_id(),
            username: username.to_string(),
            created_at: Utc::now(),
        };
        self.storage.insert_user(&user).await?;

        Ok(user.into())
    }

    pub async fn list_users(&self) -> Result<Vec<UserSummary>> {
        let users = self.storage.list_users().await?;
        Ok(users.into_iter().map(UserSummary::from).collect())
    }

    /// 新增运动记录
    ///
    /// `date` defaults to today when absent or empty; a malformed date is a
    /// validation error.
    pub async fn add_exercise(
        &self,
        user_id: &str,
        fields: NewExercise<'_>,
    ) -> Result<ExerciseSummary> {
        let user = self.require_user(user_id).await?;

        let description = require_text("description", fields.description)?;
        let duration = parse_duration(fields.duration)?;
        let date = parse_optional_date(fields.date)?.unwrap_or_else(today);

        let entry = Exercise {
            id: new_id(),
            user_id: user.id.clone(),
            description: description.to_string(),
            duration,
            date,
            created_at: Utc::now(),
        };
        self.storage.insert_exercise(&entry).await?;

        Ok(ExerciseSummary {
            username: user.username,
            description: entry.description,
            duration: entry.duration,
            date: format_day(entry.date),
            id: user.id,
        })
    }

    /// 查询运动日志，`count` 为过滤和截断后的条数
    pub async fn list_logs(&self, user_id: &str, params: LogFilterParams) -> Result<ExerciseLog> {
        let user = self.require_user(user_id).await?;

        let filter = ExerciseFilter::from(params);
        let entries = self.storage.list_exercises(&user.id, &filter).await?;
        debug!(
            "Log query for {} ({:?}) returned {} entries",
            user.id,
            filter,
            entries.len()
        );

        let log: Vec<LogEntry> = entries.into_iter().map(LogEntry::from).collect();
        Ok(ExerciseLog {
            username: user.username,
            count: log.len(),
            id: user.id,
            log,
        })
    }

    async fn require_user(&self, user_id: &str) -> Result<User> {
        self.storage
            .get_user(user_id)
            .await?
            .ok_or_else(|| ShortrackError::not_found(format!("unknown userId: {}", user_id)))
    }
}

fn new_id() -> String {
    Uuid::new_v4().simple().to_string()
}
