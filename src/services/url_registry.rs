//! In-memory URL table
//!
//! Handles are 1-based: handle `n` lives at backing index `n - 1`, so handle
//! 0 is never assigned. Entries are append-only and never removed.

use std::collections::HashMap;

use parking_lot::RwLock;

#[derive(Default)]
struct RegistryInner {
    urls: Vec<String>,
    handles: HashMap<String, u64>,
}

/// Append-only registry mapping small integer handles to original URLs
#[derive(Default)]
pub struct UrlRegistry {
    inner: RwLock<RegistryInner>,
}

impl UrlRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册 URL，已存在（字符串完全相等）则返回原有 handle
    ///
    /// Returns `(handle, newly_inserted)`.
    pub fn register(&self, url: &str) -> (u64, bool) {
        if let Some(handle) = self.inner.read().handles.get(url) {
            return (*handle, false);
        }

        let mut inner = self.inner.write();
        // 拿到写锁后再查一次，避免并发重复插入
        if let Some(handle) = inner.handles.get(url) {
            return (*handle, false);
        }

        inner.urls.push(url.to_string());
        let handle = inner.urls.len() as u64;
        inner.handles.insert(url.to_string(), handle);
        (handle, true)
    }

    /// 按 handle 查找原始 URL
    pub fn resolve(&self, handle: u64) -> Option<String> {
        if handle == 0 {
            return None;
        }
        let index = usize::try_from(handle - 1).ok()?;
        self.inner.read().urls.get(index).cloned()
    }

    /// 已分配的 handle 数量（最大 handle）
    pub fn len(&self) -> usize {
        self.inner.read().urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_start_at_one() {
        let registry = UrlRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.register("https://example.com"), (1, true));
        assert_eq!(registry.register("https://example.org"), (2, true));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_duplicate_returns_existing_handle() {
        let registry = UrlRegistry::new();
        assert_eq!(registry.register("https://example.com"), (1, true));
        assert_eq!(registry.register("https://example.com"), (1, false));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_no_normalization() {
        let registry = UrlRegistry::new();
        let (a, _) = registry.register("https://example.com");
        let (b, _) = registry.register("https://example.com/");
        let (c, _) = registry.register("HTTPS://example.com");
        assert_eq!((a, b, c), (1, 2, 3));
    }

    #[test]
    fn test_resolve_bounds() {
        let registry = UrlRegistry::new();
        registry.register("https://example.com");

        assert_eq!(registry.resolve(0), None);
        assert_eq!(registry.resolve(1).as_deref(), Some("https://example.com"));
        assert_eq!(registry.resolve(2), None);
        assert_eq!(registry.resolve(u64::MAX), None);
    }

    #[test]
    fn test_concurrent_registration_is_deduplicated() {
        use std::sync::Arc;

        let registry = Arc::new(UrlRegistry::new());
        let threads: Vec<_> = (0..8)
            .map(|_| {
                let registry = registry.clone();
                std::thread::spawn(move || registry.register("https://same.example").0)
            })
            .collect();

        let handles: Vec<u64> = threads.into_iter().map(|t| t.join().unwrap()).collect();
        assert!(handles.iter().all(|h| *h == 1));
        assert_eq!(registry.len(), 1);
    }
}
