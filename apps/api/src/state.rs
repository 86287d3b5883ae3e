use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Generation is pure, so the only thing handlers need is the configuration
/// (currently just the simulated latency).
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}
