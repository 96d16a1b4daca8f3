use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

/// Quiet period after the last keystroke before a search actually hits the
/// backend. Typing fast produces one request, not one per character.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(400);

/// Collapses bursts of calls into the last one. Each `call` cancels the
/// previously scheduled invocation and schedules the new one after `delay`;
/// only a call that survives a full quiet window runs.
///
/// This suppresses redundant *scheduling* only. A request already on the
/// wire is not cancelled here — superseded responses are handled by the
/// dashboard's fetch generation instead.
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Schedule `fut` to run after the quiet period, dropping whatever was
    /// scheduled before. Must be called from within the async runtime.
    pub fn call<F>(&mut self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            fut.await;
        }));
    }
}
