pub mod frontend;
pub mod health;
pub mod shortener;
pub mod tracker;

pub use frontend::{FrontendService, ShortenerAssets, TrackerAssets, frontend_routes};
pub use health::{AppStartTime, HealthService, shortener_health_routes, tracker_health_routes};
pub use shortener::{ShortUrlService, shortener_routes};
pub use tracker::{TrackerApi, tracker_routes};
