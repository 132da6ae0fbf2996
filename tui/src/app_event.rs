//! Events drained by the app loop. Everything that mutates [`crate::app::App`]
//! arrives here, whether it came from the keyboard thread or an async task.

use crossterm::event::KeyEvent;
use roiwiz_core::report::ReportData;

#[derive(Debug)]
pub(crate) enum AppEvent {
    /// Keyboard input from the crossterm reader thread.
    Key(KeyEvent),

    /// Terminal resized; redraw on the next loop turn.
    Redraw,

    /// Department suggestions arrived for `industry`. Stale responses
    /// (industry changed while the request was in flight) are dropped.
    DepartmentsLoaded {
        industry: String,
        departments: Vec<String>,
    },

    /// Suggestion fetch failed; logged and degraded, never blocking.
    DepartmentsFailed { industry: String, error: String },

    /// The cosmetic question-advance delay elapsed.
    AdvanceElapsed { generation: u64 },

    /// `calculate-roi` succeeded.
    ReportReady(Box<ReportData>),

    /// `calculate-roi` failed; the raw message becomes the alert text.
    ReportFailed { error: String },

    /// Leave the application.
    ExitRequest,
}
