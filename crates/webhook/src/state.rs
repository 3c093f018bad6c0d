use std::sync::Arc;

use relay::traits::Dispatcher;

use crate::config::RelayConfig;

/// Shared across all requests. The dispatcher is the only component holding
/// a resource (the pooled HTTP client), and it is safe for concurrent use.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RelayConfig>,
    pub dispatcher: Arc<dyn Dispatcher>,
}

impl AppState {
    pub fn new(config: RelayConfig, dispatcher: Arc<dyn Dispatcher>) -> Self {
        Self {
            config: Arc::new(config),
            dispatcher,
        }
    }
}
