//! Request handler module
//!
//! Responsible for request routing dispatch plus the HTML surface
//! (landing page, favicon, static assets).

pub mod pages;
pub mod router;

// Re-export main entry point
pub use router::handle_request;
