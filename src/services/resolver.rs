//! Host existence probe
//!
//! `dns.lookup`-style check: a host passes when the system resolver returns
//! at least one address for it within the timeout.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, trace};

#[async_trait]
pub trait HostResolver: Send + Sync {
    /// 主机名是否可解析
    async fn host_exists(&self, host: &str) -> bool;
}

/// 使用 tokio 系统解析器的实现
pub struct DnsResolver {
    timeout: Duration,
}

impl DnsResolver {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl HostResolver for DnsResolver {
    async fn host_exists(&self, host: &str) -> bool {
        // lookup_host 需要端口，端口本身不参与解析
        let target = format!("{}:80", host);
        match tokio::time::timeout(self.timeout, tokio::net::lookup_host(target)).await {
            Ok(Ok(mut addrs)) => {
                let found = addrs.next().is_some();
                trace!("DNS lookup for {}: found={}", host, found);
                found
            }
            Ok(Err(e)) => {
                debug!("DNS lookup failed for {}: {}", host, e);
                false
            }
            Err(_) => {
                debug!("DNS lookup timed out for {}", host);
                false
            }
        }
    }
}

/// 跳过探测，所有主机都视为存在（`shortener.verify_host = false`）
pub struct NoopResolver;

#[async_trait]
impl HostResolver for NoopResolver {
    async fn host_exists(&self, _host: &str) -> bool {
        true
    }
}
