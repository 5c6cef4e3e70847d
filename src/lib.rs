//! Cocktail search relay server
//!
//! An asynchronous HTTP server that serves a small search UI and relays
//! cocktail lookups to the external cocktail database, passing the upstream
//! JSON through unchanged. A fixed demo record is available for exercising
//! the frontend without network access.

pub mod api;
pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
pub mod upstream;
