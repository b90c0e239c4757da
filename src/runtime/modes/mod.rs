//! Mode routing
//!
//! Each service runs as its own HTTP server; the command line picks which.

pub mod server;

pub use server::{run_shortener_server, run_tracker_server};
