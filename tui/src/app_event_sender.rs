use std::sync::mpsc::Sender;

use crate::app_event::AppEvent;

/// Cloneable handle for pushing events into the app loop. Send failures
/// are swallowed and logged; they only occur during shutdown.
#[derive(Clone, Debug)]
pub(crate) struct AppEventSender {
    tx: Sender<AppEvent>,
}

impl AppEventSender {
    pub(crate) fn new(tx: Sender<AppEvent>) -> Self {
        Self { tx }
    }

    pub(crate) fn send(&self, event: AppEvent) {
        if let Err(e) = self.tx.send(event) {
            tracing::error!("failed to send app event: {e}");
        }
    }
}
