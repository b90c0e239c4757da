//! URL shortener service
//!
//! Validation and the host probe happen here; the registry only stores.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::ShortenerConfig;
use crate::errors::{Result, ShortrackError};
use crate::services::resolver::{DnsResolver, HostResolver, NoopResolver};
use crate::services::url_registry::UrlRegistry;
use crate::utils::validate_url;

/// 成功缩短后的结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortUrl {
    pub original_url: String,
    pub short_url: u64,
}

pub struct ShortenerService {
    registry: UrlRegistry,
    resolver: Arc<dyn HostResolver>,
}

impl ShortenerService {
    pub fn new(resolver: Arc<dyn HostResolver>) -> Self {
        Self {
            registry: UrlRegistry::new(),
            resolver,
        }
    }

    /// 根据配置选择 DNS 探测或跳过探测
    pub fn from_config(config: &ShortenerConfig) -> Self {
        let resolver: Arc<dyn HostResolver> = if config.verify_host {
            Arc::new(DnsResolver::new(Duration::from_millis(
                config.lookup_timeout_ms,
            )))
        } else {
            Arc::new(NoopResolver)
        };
        Self::new(resolver)
    }

    /// 提交 URL，返回 handle
    pub async fn submit(&self, raw_url: &str) -> Result<ShortUrl> {
        let parsed = validate_url(raw_url).map_err(|e| {
            debug!("Rejected URL {:?}: {}", raw_url, e);
            ShortrackError::invalid_url(e.to_string())
        })?;

        let host = parsed.host_str().unwrap_or_default();
        if !self.resolver.host_exists(host).await {
            debug!("Rejected URL {:?}: host {} did not resolve", raw_url, host);
            return Err(ShortrackError::invalid_url(format!(
                "host does not resolve: {}",
                host
            )));
        }

        let (handle, inserted) = self.registry.register(raw_url);
        if inserted {
            info!("Registered short url {} -> {}", handle, raw_url);
        }

        Ok(ShortUrl {
            original_url: raw_url.to_string(),
            short_url: handle,
        })
    }

    /// 解析路径中的 handle 并查找原始 URL
    ///
    /// Only the leading integer of the token counts; `0`, negatives, tokens
    /// without leading digits and values past the last assigned handle are
    /// all not-found.
    pub fn resolve(&self, token: &str) -> Result<String> {
        let handle = parse_handle(token)
            .ok_or_else(|| ShortrackError::not_found(format!("invalid short url: {}", token)))?;

        self.registry
            .resolve(handle)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| ShortrackError::not_found(format!("no url for short url {}", handle)))
    }

    pub fn registered_count(&self) -> usize {
        self.registry.len()
    }
}

/// 读取 token 开头的十进制整数（允许前导空白和正负号），其余字符忽略
///
/// `"1abc"`, `"1.5"` and `" 1"` all read as 1; no leading digits means no
/// handle.
fn parse_handle(token: &str) -> Option<u64> {
    let trimmed = token.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    if negative {
        return None;
    }
    rest[..digits_len].parse::<u64>().ok().filter(|h| *h >= 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_handle() {
        assert_eq!(parse_handle("1"), Some(1));
        assert_eq!(parse_handle("42"), Some(42));
        assert_eq!(parse_handle("01"), Some(1));
        assert_eq!(parse_handle("+1"), Some(1));
        assert_eq!(parse_handle("0"), None);
        assert_eq!(parse_handle("-1"), None);
        assert_eq!(parse_handle("-0"), None);
        assert_eq!(parse_handle("abc"), None);
        assert_eq!(parse_handle(""), None);
        assert_eq!(parse_handle("+"), None);
        assert_eq!(parse_handle("99999999999999999999999"), None);
    }

    #[test]
    fn test_parse_handle_reads_leading_integer() {
        assert_eq!(parse_handle("1abc"), Some(1));
        assert_eq!(parse_handle("1.5"), Some(1));
        assert_eq!(parse_handle(" 1"), Some(1));
        assert_eq!(parse_handle("\t12x"), Some(12));
        assert_eq!(parse_handle("a1"), None);
        assert_eq!(parse_handle("- 1"), None);
    }

    #[tokio::test]
    async fn test_submit_and_resolve() {
        let service = ShortenerService::new(Arc::new(NoopResolver));

        let first = service.submit("https://example.com").await.unwrap();
        assert_eq!(first.short_url, 1);
        assert_eq!(first.original_url, "https://example.com");

        let again = service.submit("https://example.com").await.unwrap();
        assert_eq!(again.short_url, 1);

        assert_eq!(service.resolve("1").unwrap(), "https://example.com");
        assert!(matches!(
            service.resolve("2"),
            Err(ShortrackError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_scheme_rejected_before_probe() {
        let service = ShortenerService::new(Arc::new(NoopResolver));
        assert!(matches!(
            service.submit("ftp://example.com").await,
            Err(ShortrackError::InvalidUrl(_))
        ));
        assert!(matches!(
            service.submit("").await,
            Err(ShortrackError::InvalidUrl(_))
        ));
        assert_eq!(service.registered_count(), 0);
    }
}
