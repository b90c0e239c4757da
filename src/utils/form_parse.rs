//! 表单 / 查询参数解析
//!
//! Body fields are parsed strictly and reject bad input; query-string filters
//! are parsed leniently and drop anything unparseable.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::errors::ShortrackError;

/// 字段校验错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    Missing(&'static str),
    NotAnInteger { field: &'static str, value: String },
    Negative { field: &'static str, value: i64 },
    InvalidDate(String),
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing(field) => write!(f, "{} is required", field),
            Self::NotAnInteger { field, value } => {
                write!(f, "{} must be an integer, got '{}'", field, value)
            }
            Self::Negative { field, value } => {
                write!(f, "{} must not be negative, got {}", field, value)
            }
            Self::InvalidDate(value) => write!(f, "Invalid Date: '{}'", value),
        }
    }
}

impl std::error::Error for FieldError {}

impl From<FieldError> for ShortrackError {
    fn from(err: FieldError) -> Self {
        match err {
            FieldError::InvalidDate(_) => ShortrackError::date_parse(err.to_string()),
            _ => ShortrackError::validation(err.to_string()),
        }
    }
}

/// 接受的日期格式（除 RFC3339 外）
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%a %b %d %Y", "%B %d, %Y", "%Y/%m/%d"];
const DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// 非空文本字段
pub fn require_text<'a>(field: &'static str, value: Option<&'a str>) -> Result<&'a str, FieldError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(FieldError::Missing(field)),
    }
}

/// 解析 duration：必须是非负整数
pub fn parse_duration(value: Option<&str>) -> Result<i64, FieldError> {
    let raw = require_text("duration", value)?;
    let parsed: i64 = raw.trim().parse().map_err(|_| FieldError::NotAnInteger {
        field: "duration",
        value: raw.to_string(),
    })?;

    if parsed < 0 {
        return Err(FieldError::Negative {
            field: "duration",
            value: parsed,
        });
    }
    Ok(parsed)
}

/// 严格解析日期
pub fn parse_date(value: &str) -> Result<NaiveDate, FieldError> {
    let input = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc).date_naive());
    }
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(input, fmt) {
            return Ok(date);
        }
    }
    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input, fmt) {
            return Ok(dt.date());
        }
    }

    Err(FieldError::InvalidDate(value.to_string()))
}

/// 可选的 body 日期字段：缺省或空串返回 None，格式错误则报错
pub fn parse_optional_date(value: Option<&str>) -> Result<Option<NaiveDate>, FieldError> {
    match value {
        Some(v) if !v.trim().is_empty() => parse_date(v).map(Some),
        _ => Ok(None),
    }
}

/// 查询参数日期：无法解析时忽略
pub fn lenient_date(value: Option<&str>) -> Option<NaiveDate> {
    value.and_then(|v| parse_date(v).ok())
}

/// 查询参数 limit：无法解析、非正数或超出 i64 范围时不限制
///
/// The SQL drivers bind LIMIT as a signed 64-bit integer.
pub fn lenient_limit(value: Option<&str>) -> Option<u64> {
    value
        .and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|limit| *limit > 0)
        .map(|limit| limit as u64)
}

/// 日志查询过滤条件
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogFilterParams {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub limit: Option<u64>,
}

impl LogFilterParams {
    pub fn from_query(from: Option<&str>, to: Option<&str>, limit: Option<&str>) -> Self {
        Self {
            from: lenient_date(from),
            to: lenient_date(to),
            limit: lenient_limit(limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_require_text() {
        assert_eq!(require_text("username", Some("fcc_test")), Ok("fcc_test"));
        assert_eq!(
            require_text("username", Some("")),
            Err(FieldError::Missing("username"))
        );
        assert_eq!(
            require_text("username", Some("   ")),
            Err(FieldError::Missing("username"))
        );
        assert_eq!(
            require_text("username", None),
            Err(FieldError::Missing("username"))
        );
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration(Some("60")), Ok(60));
        assert_eq!(parse_duration(Some(" 15 ")), Ok(15));
        assert_eq!(parse_duration(Some("0")), Ok(0));
        assert!(matches!(
            parse_duration(Some("abc")),
            Err(FieldError::NotAnInteger { .. })
        ));
        assert!(matches!(
            parse_duration(Some("12.5")),
            Err(FieldError::NotAnInteger { .. })
        ));
        assert!(matches!(
            parse_duration(Some("-5")),
            Err(FieldError::Negative { value: -5, .. })
        ));
        assert_eq!(parse_duration(None), Err(FieldError::Missing("duration")));
    }

    #[test]
    fn test_parse_date_formats() {
        assert_eq!(parse_date("1990-01-01"), Ok(ymd(1990, 1, 1)));
        assert_eq!(parse_date("Mon Jan 01 1990"), Ok(ymd(1990, 1, 1)));
        assert_eq!(parse_date("2021-03-04T10:20:30Z"), Ok(ymd(2021, 3, 4)));
        assert_eq!(parse_date("2021-03-04T10:20:30"), Ok(ymd(2021, 3, 4)));
        assert_eq!(parse_date("2021/03/04"), Ok(ymd(2021, 3, 4)));
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(matches!(
            parse_date("not a date"),
            Err(FieldError::InvalidDate(_))
        ));
        assert!(parse_date("2021-13-40").is_err());
    }

    #[test]
    fn test_optional_date() {
        assert_eq!(parse_optional_date(None), Ok(None));
        assert_eq!(parse_optional_date(Some("")), Ok(None));
        assert_eq!(
            parse_optional_date(Some("2020-02-29")),
            Ok(Some(ymd(2020, 2, 29)))
        );
        assert!(parse_optional_date(Some("yesterday")).is_err());
    }

    #[test]
    fn test_lenient_query_params() {
        let params = LogFilterParams::from_query(Some("2020-01-01"), Some("garbage"), Some("x"));
        assert_eq!(params.from, Some(ymd(2020, 1, 1)));
        assert_eq!(params.to, None);
        assert_eq!(params.limit, None);

        let params = LogFilterParams::from_query(None, None, Some("3"));
        assert_eq!(params.limit, Some(3));
        assert_eq!(lenient_limit(Some("0")), None);
        assert_eq!(lenient_limit(Some("-2")), None);
    }

    #[test]
    fn test_limit_stays_within_signed_range() {
        assert_eq!(
            lenient_limit(Some("9223372036854775807")),
            Some(i64::MAX as u64)
        );
        assert_eq!(lenient_limit(Some("9223372036854775808")), None);
        assert_eq!(lenient_limit(Some("18446744073709551615")), None);
    }

    #[test]
    fn test_field_error_into_validation() {
        let err: ShortrackError = FieldError::Missing("username").into();
        assert_eq!(err, ShortrackError::validation("username is required"));
    }

    #[test]
    fn test_invalid_date_into_date_parse() {
        let err: ShortrackError = parse_date("not a date").unwrap_err().into();
        assert!(matches!(err, ShortrackError::DateParse(ref m) if m.contains("not a date")));
        assert_eq!(err.http_status(), actix_web::http::StatusCode::BAD_REQUEST);
    }
}
