// Runtime application state
// Shared across connections, read-only after startup

use std::sync::atomic::AtomicUsize;

use crate::config::Config;
use crate::upstream::{CocktailDbClient, UpstreamError};

/// Shared application state, fixed at startup.
///
/// There is no runtime mutation: configuration is loaded once and the
/// upstream client is built once. The active connection counter is the
/// only mutable piece.
pub struct AppState {
    pub config: Config,
    pub upstream: CocktailDbClient,
    pub active_connections: AtomicUsize,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, UpstreamError> {
        let upstream = CocktailDbClient::new(&config.upstream)?;

        Ok(Self {
            config,
            upstream,
            active_connections: AtomicUsize::new(0),
        })
    }
}
