//! System-level modules
//!
//! Process setup shared by both services.

pub mod logging;
