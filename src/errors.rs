use std::fmt;

use actix_web::http::StatusCode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShortrackError {
    DatabaseConfig(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
    FileOperation(String),
    Validation(String),
    NotFound(String),
    InvalidUrl(String),
    Serialization(String),
    DateParse(String),
}

impl ShortrackError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            ShortrackError::DatabaseConfig(_) => "E001",
            ShortrackError::DatabaseConnection(_) => "E002",
            ShortrackError::DatabaseOperation(_) => "E003",
            ShortrackError::FileOperation(_) => "E004",
            ShortrackError::Validation(_) => "E005",
            ShortrackError::NotFound(_) => "E006",
            ShortrackError::InvalidUrl(_) => "E007",
            ShortrackError::Serialization(_) => "E008",
            ShortrackError::DateParse(_) => "E009",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            ShortrackError::DatabaseConfig(_) => "Database Configuration Error",
            ShortrackError::DatabaseConnection(_) => "Database Connection Error",
            ShortrackError::DatabaseOperation(_) => "Database Operation Error",
            ShortrackError::FileOperation(_) => "File Operation Error",
            ShortrackError::Validation(_) => "Validation Error",
            ShortrackError::NotFound(_) => "Resource Not Found",
            ShortrackError::InvalidUrl(_) => "Invalid URL",
            ShortrackError::Serialization(_) => "Serialization Error",
            ShortrackError::DateParse(_) => "Date Parse Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            ShortrackError::DatabaseConfig(msg)
            | ShortrackError::DatabaseConnection(msg)
            | ShortrackError::DatabaseOperation(msg)
            | ShortrackError::FileOperation(msg)
            | ShortrackError::Validation(msg)
            | ShortrackError::NotFound(msg)
            | ShortrackError::InvalidUrl(msg)
            | ShortrackError::Serialization(msg)
            | ShortrackError::DateParse(msg) => msg,
        }
    }

    /// HTTP 状态码映射（exercise tracker 使用）
    pub fn http_status(&self) -> StatusCode {
        match self {
            ShortrackError::Validation(_)
            | ShortrackError::InvalidUrl(_)
            | ShortrackError::DateParse(_) => StatusCode::BAD_REQUEST,
            ShortrackError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client errors carry a message that is safe to echo back.
    pub fn is_client_error(&self) -> bool {
        self.http_status().is_client_error()
    }

    /// 格式化为彩色输出（用于启动失败时的终端输出）
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        format!(
            "{} {} {}\n  {}",
            "[ERROR]".red().bold(),
            self.code().yellow(),
            self.error_type().red(),
            self.message().white()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ShortrackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ShortrackError {}

// 便捷的构造函数
impl ShortrackError {
    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        ShortrackError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        ShortrackError::DatabaseConnection(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        ShortrackError::DatabaseOperation(msg.into())
    }

    pub fn file_operation<T: Into<String>>(msg: T) -> Self {
        ShortrackError::FileOperation(msg.into())
    }

    pub fn validation<T: Into<String>>(msg: T) -> Self {
        ShortrackError::Validation(msg.into())
    }

    pub fn not_found<T: Into<String>>(msg: T) -> Self {
        ShortrackError::NotFound(msg.into())
    }

    pub fn invalid_url<T: Into<String>>(msg: T) -> Self {
        ShortrackError::InvalidUrl(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        ShortrackError::Serialization(msg.into())
    }

    pub fn date_parse<T: Into<String>>(msg: T) -> Self {
        ShortrackError::DateParse(msg.into())
    }
}

impl From<sea_orm::DbErr> for ShortrackError {
    fn from(err: sea_orm::DbErr) -> Self {
        ShortrackError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for ShortrackError {
    fn from(err: std::io::Error) -> Self {
        ShortrackError::FileOperation(err.to_string())
    }
}

impl From<toml::ser::Error> for ShortrackError {
    fn from(err: toml::ser::Error) -> Self {
        ShortrackError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ShortrackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ShortrackError::validation("x").http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ShortrackError::not_found("x").http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ShortrackError::database_operation("x").http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert!(!ShortrackError::database_connection("x").is_client_error());
    }

    #[test]
    fn test_format_simple() {
        let err = ShortrackError::not_found("unknown userId");
        assert_eq!(err.code(), "E006");
        assert_eq!(err.to_string(), "Resource Not Found: unknown userId");
    }

    #[test]
    fn test_from_toml_err() {
        // TOML 顶层必须是表
        let err: ShortrackError = toml::to_string(&1u32).unwrap_err().into();
        assert_eq!(err.code(), "E008");
        assert!(!err.is_client_error());
    }

    #[test]
    fn test_from_db_err() {
        let err: ShortrackError = sea_orm::DbErr::Custom("boom".to_string()).into();
        assert!(matches!(err, ShortrackError::DatabaseOperation(ref m) if m.contains("boom")));
    }
}
