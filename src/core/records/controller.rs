//! Fetch lifecycle and event handlers for the record table.
//!
//! The controller owns the [`ViewState`]. `start` launches a single fetch
//! on a tokio task and the result comes back over an mpsc channel, which
//! the UI drains from its tick via [`RecordsController::poll`]. Dropping
//! the controller aborts the task, so a late result never reaches a
//! disposed view.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TryRecvError;
use tokio::task::JoinHandle;

use super::model::Record;
use super::pagination::PageSize;
use super::query::{filter_records, table_body, TableBody};
use super::state::ViewState;
use crate::core::source::{FetchError, RecordSource};

type FetchResult = Result<Vec<Record>, FetchError>;

pub struct RecordsController {
    state: ViewState,
    started: bool,
    result_rx: Option<mpsc::UnboundedReceiver<FetchResult>>,
    task: Option<JoinHandle<()>>,
}

impl Default for RecordsController {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordsController {
    pub fn new() -> Self {
        Self {
            state: ViewState::new(),
            started: false,
            result_rx: None,
            task: None,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Launch the one-time fetch. Later calls are ignored.
    ///
    /// Must be called from within a tokio runtime.
    pub fn start(&mut self, source: Arc<dyn RecordSource>) {
        if self.started {
            return;
        }
        self.started = true;
        self.state.set_loading(true);

        let (tx, rx) = mpsc::unbounded_channel();
        self.result_rx = Some(rx);
        self.task = Some(tokio::spawn(async move {
            let result = source.fetch_records().await;
            // Receiver is gone once the view is disposed.
            let _ = tx.send(result);
        }));
    }

    /// Apply a finished fetch, if any. Returns true when state changed.
    pub fn poll(&mut self) -> bool {
        let Some(rx) = self.result_rx.as_mut() else {
            return false;
        };
        match rx.try_recv() {
            Ok(result) => {
                self.complete(Some(result));
                true
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => {
                self.complete(None);
                true
            }
        }
    }

    /// Wait for the in-flight fetch to finish and apply it.
    pub async fn settle(&mut self) {
        let Some(rx) = self.result_rx.as_mut() else {
            return;
        };
        let result = rx.recv().await;
        self.complete(result);
    }

    fn complete(&mut self, result: Option<FetchResult>) {
        match result {
            Some(Ok(records)) => {
                tracing::info!(count = records.len(), "record list loaded");
                self.state.set_list(records);
            }
            Some(Err(e)) => {
                tracing::error!(error = %e, status = ?e.status(), "failed to load records");
            }
            None => {
                tracing::error!("record fetch task ended without a result");
            }
        }
        self.state.set_loading(false);
        self.result_rx = None;
        self.task = None;
    }

    // ── Event handlers ──────────────────────────────────────────────────

    pub fn on_query_change(&mut self, query: &str) {
        self.state.set_query(query);
    }

    /// Go to `page` as requested; bounds are the widget's concern.
    pub fn on_page_change(&mut self, page: usize) {
        self.state.set_page(page);
    }

    pub fn on_page_size_change(&mut self, page_size: PageSize) {
        self.state.set_page_size(page_size);
    }

    // ── Derived views ───────────────────────────────────────────────────

    /// Records matching the current query.
    pub fn filtered(&self) -> Vec<&Record> {
        filter_records(self.state.records(), self.state.query())
    }

    pub fn body(&self) -> TableBody<'_> {
        table_body(&self.state)
    }
}

impl Drop for RecordsController {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
