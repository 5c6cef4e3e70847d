//! HTTP protocol layer module
//!
//! Response builders shared by the page handlers and the router, decoupled
//! from specific endpoint logic.

pub mod response;

// Re-export commonly used builders
pub use response::{
    build_404_response, build_405_response, build_413_response, build_asset_response,
    build_html_response, build_options_response,
};
