use std::sync::Arc;

use tokio::sync::mpsc;

use crate::config::AppConfig;
use crate::core::source::{HttpRecordSource, RecordSource};

use super::events::AppEvent;

/// Centralized handle to backend services.
///
/// Created once at startup, then passed by ref to views that need
/// backend access.
pub struct Services {
    pub source: Arc<dyn RecordSource>,
    pub event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl Services {
    /// Initialize services from config.
    pub fn init(config: &AppConfig, event_tx: mpsc::UnboundedSender<AppEvent>) -> Self {
        log::info!("Record source base URL: {}", config.source.base_url);
        let source = Arc::new(HttpRecordSource::new(&config.source.base_url));
        Self::with_source(source, event_tx)
    }

    /// Build services around an existing source.
    pub fn with_source(
        source: Arc<dyn RecordSource>,
        event_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        Self { source, event_tx }
    }
}
