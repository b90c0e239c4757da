pub mod date_format;
pub mod form_parse;
pub mod url_validator;

pub use date_format::format_day;
pub use form_parse::{FieldError, LogFilterParams};
pub use url_validator::{UrlValidationError, validate_url};
