//! shortrack - two small HTTP services
//!
//! - **shortener**: maps submitted http(s) URLs to sequential integer
//!   handles kept in memory and redirects back to them
//! - **tracker**: stores users and their exercise sessions, with filtered
//!   log queries
//!
//! # Architecture
//! - `api`: actix-web handlers, route scopes and middleware
//! - `services`: URL registry, host probe, tracker logic
//! - `storage`: sea-orm store for users and exercises
//! - `config`: Configuration management
//! - `runtime`: server assembly for each service
//! - `system`: logging setup

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;
