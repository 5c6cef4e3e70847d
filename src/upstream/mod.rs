//! Upstream module
//!
//! Outbound client for the external cocktail database.

mod client;

pub use client::{CocktailDbClient, UpstreamError};
