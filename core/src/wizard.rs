//! Wizard step machine.
//!
//! The flow is strictly forward: `Intake -> Question(1..=N) -> Review ->
//! Computing -> Report`. Question advances are cosmetic-delayed; the delay
//! is modeled as a generation-tagged [`ScheduledAdvance`] so a superseded
//! or torn-down schedule can never leak a transition into a later state.

use std::time::Duration;

use crate::catalog::QUESTION_COUNT;

/// Cosmetic pause between answering a question and moving on.
pub const ADVANCE_DELAY: Duration = Duration::from_millis(300);

/// Where the session currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    /// Company/department intake form.
    Intake,
    /// Multiple-choice question `1..=QUESTION_COUNT`.
    Question(usize),
    /// Summary + confirm gate before the remote computation.
    Review,
    /// The single `calculate-roi` request is in flight.
    Computing,
    /// Rendered report.
    Report,
}

impl WizardStep {
    /// The step that follows answering question `index` (1-based).
    pub fn after_question(index: usize) -> WizardStep {
        if index < QUESTION_COUNT {
            WizardStep::Question(index + 1)
        } else {
            WizardStep::Review
        }
    }

    /// Progress ratio shown while answering questions.
    pub fn progress(self) -> f64 {
        match self {
            WizardStep::Intake => 0.0,
            WizardStep::Question(i) => i as f64 / QUESTION_COUNT as f64,
            WizardStep::Review | WizardStep::Computing | WizardStep::Report => 1.0,
        }
    }
}

/// A pending step transition handed to a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledAdvance {
    pub generation: u64,
    pub target: WizardStep,
}

/// Issues and validates scheduled advances. Each new schedule supersedes
/// the previous one; only the latest generation may commit.
#[derive(Debug, Default)]
pub struct AdvanceScheduler {
    generation: u64,
    pending: Option<ScheduledAdvance>,
}

impl AdvanceScheduler {
    /// Schedule a transition to `target`, superseding any earlier schedule.
    pub fn schedule(&mut self, target: WizardStep) -> ScheduledAdvance {
        self.generation += 1;
        let advance = ScheduledAdvance {
            generation: self.generation,
            target,
        };
        self.pending = Some(advance);
        advance
    }

    /// Drop the pending schedule, e.g. on view teardown.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Commit the schedule with the given generation. Stale generations
    /// (superseded or cancelled) commit nothing.
    pub fn commit(&mut self, generation: u64) -> Option<WizardStep> {
        match self.pending {
            Some(advance) if advance.generation == generation => {
                self.pending = None;
                Some(advance.target)
            }
            _ => None,
        }
    }
}
