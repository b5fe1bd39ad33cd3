//! Background scheme requests.
//!
//! Each request runs in its own task and reports back over a channel, so
//! results are delivered in the order the requests complete. Nothing is
//! cancelled when a newer request starts.

use crate::app::FetchRequest;
use schemer_engine::{SchemeError, SchemeFetcher, SchemeResponse, Transport};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// Outcome of one request.
pub type FetchResult = Result<SchemeResponse, SchemeError>;

/// Set of in-flight scheme requests.
pub struct FetchPool<T> {
    fetcher: Arc<SchemeFetcher<T>>,
    tx: mpsc::UnboundedSender<FetchResult>,
    rx: mpsc::UnboundedReceiver<FetchResult>,
    handles: Vec<JoinHandle<()>>,
}

impl<T: Transport + 'static> FetchPool<T> {
    /// Create a pool that issues requests through `fetcher`.
    pub fn new(fetcher: SchemeFetcher<T>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            fetcher: Arc::new(fetcher),
            tx,
            rx,
            handles: Vec::new(),
        }
    }

    /// Start a request in the background.
    pub fn spawn(&mut self, request: FetchRequest) {
        self.handles.retain(|h| !h.is_finished());

        debug!(hex = %request.hex, mode = %request.mode, "starting scheme request");
        let fetcher = Arc::clone(&self.fetcher);
        let tx = self.tx.clone();
        let handle = tokio::spawn(async move {
            let result = fetcher.fetch_scheme(&request.hex, &request.mode).await;
            // Receiver is gone once the UI has shut down
            let _ = tx.send(result);
        });
        self.handles.push(handle);
    }

    /// Next completed result, if one is ready.
    pub fn try_next(&mut self) -> Option<FetchResult> {
        self.rx.try_recv().ok()
    }

    /// Wait for the next completed result.
    pub async fn next(&mut self) -> Option<FetchResult> {
        self.rx.recv().await
    }

    /// Number of requests still running.
    pub fn pending(&self) -> usize {
        self.handles.iter().filter(|h| !h.is_finished()).count()
    }

    /// Abort every running request.
    pub fn abort_all(&mut self) {
        for handle in self.handles.drain(..) {
            handle.abort();
        }
    }
}

impl<T> Drop for FetchPool<T> {
    fn drop(&mut self) {
        for handle in &self.handles {
            handle.abort();
        }
    }
}
