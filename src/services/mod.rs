pub mod resolver;
pub mod shortener;
pub mod tracker;
pub mod url_registry;

pub use resolver::{DnsResolver, HostResolver, NoopResolver};
pub use shortener::{ShortUrl, ShortenerService};
pub use tracker::{ExerciseLog, ExerciseSummary, LogEntry, NewExercise, TrackerService, UserSummary};
pub use url_registry::UrlRegistry;
