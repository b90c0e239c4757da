use std::time::Duration;

use sea_orm::DatabaseConnection;
use tokio::time::timeout;
use tracing::{error, info, warn};

/// 关闭数据库连接的超时时间（秒）
const SHUTDOWN_TIMEOUT_SECS: u64 = 10;

/// 服务器停止后释放数据库连接池
pub async fn close_database(db: DatabaseConnection) {
    match timeout(Duration::from_secs(SHUTDOWN_TIMEOUT_SECS), db.close()).await {
        Ok(Ok(())) => info!("Database connections closed"),
        Ok(Err(e)) => warn!("Failed to close database connections: {}", e),
        Err(_) => error!(
            "Closing database connections timed out after {} seconds",
            SHUTDOWN_TIMEOUT_SECS
        ),
    }
}
