use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::{debug, info, warn};

use crate::services::{ShortenerService, TrackerService};
use crate::storage::{SeaOrmStorage, StorageFactory};

pub struct ShortenerContext {
    pub service: Arc<ShortenerService>,
}

pub struct TrackerContext {
    pub storage: Arc<SeaOrmStorage>,
    pub service: Arc<TrackerService>,
}

/// shortener 启动准备：只有内存注册表和主机探测器
pub fn prepare_shortener_startup() -> ShortenerContext {
    let config = crate::config::get_config();

    if config.shortener.verify_host {
        debug!(
            "Host verification enabled, lookup timeout {:?}",
            Duration::from_millis(config.shortener.lookup_timeout_ms)
        );
    } else {
        warn!("Host verification disabled, any well-formed http(s) URL will be accepted");
    }

    ShortenerContext {
        service: Arc::new(ShortenerService::from_config(&config.shortener)),
    }
}

/// tracker 启动准备：连接数据库并执行迁移
pub async fn prepare_tracker_startup() -> Result<TrackerContext> {
    let start_time = std::time::Instant::now();
    debug!("Starting tracker pre-startup processing...");

    let storage = StorageFactory::create()
        .await
        .context("Failed to create storage backend")?;
    info!(
        "Using storage backend: {}",
        storage.get_backend_config().storage_type
    );

    let service = Arc::new(TrackerService::new(storage.clone()));

    debug!("Tracker pre-startup completed in {:?}", start_time.elapsed());
    Ok(TrackerContext { storage, service })
}
