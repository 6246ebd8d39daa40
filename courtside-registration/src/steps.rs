//! Registration step state machine
//!
//! `Category → Partner → Payment → Success`, forward-by-one and
//! backward-by-one only. Success is terminal and reachable only through
//! a payment outcome. Category selection auto-advances to Partner and
//! arms a one-shot guard so a manual "next" landing in the same tick
//! does not double-advance; any interaction in between settles the
//! guard, so only the immediately-following advance is swallowed.

use crate::error::{FlowError, FlowResult};

/// The flow steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    Category,
    Partner,
    Payment,
    Success,
}

/// Current step plus the auto-advance guard.
#[derive(Debug, Clone, Default)]
pub struct StepMachine {
    current: Step,
    just_auto_advanced: bool,
}

impl StepMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Step {
        self.current
    }

    /// Auto-advance Category → Partner after a category selection.
    /// Arms the guard that swallows the next manual advance.
    pub(crate) fn auto_advance_to_partner(&mut self) {
        if self.current == Step::Category {
            self.current = Step::Partner;
            self.just_auto_advanced = true;
        }
    }

    /// Consume the auto-advance guard. Returns true exactly once after
    /// an auto-advance; manual navigation resumes on the next call.
    pub(crate) fn consume_auto_advance_guard(&mut self) -> bool {
        std::mem::take(&mut self.just_auto_advanced)
    }

    /// Settle the guard without consuming it. Any interaction other than
    /// the immediately-following advance clears it, so a later manual
    /// "next" is honored.
    pub(crate) fn clear_auto_advance_guard(&mut self) {
        self.just_auto_advanced = false;
    }

    /// Advance one step forward. Validation of the selection is the
    /// session's responsibility; the machine enforces reachable edges.
    pub(crate) fn advance(&mut self) -> FlowResult<Step> {
        self.current = match self.current {
            Step::Category => Step::Partner,
            Step::Partner => Step::Payment,
            Step::Payment => {
                return Err(FlowError::validation(
                    "payment must complete before continuing",
                ));
            }
            Step::Success => {
                return Err(FlowError::validation("registration already completed"));
            }
        };
        Ok(self.current)
    }

    /// Go one step back. Always permitted; a no-op at Category and after
    /// Success.
    pub(crate) fn retreat(&mut self) -> Step {
        self.current = match self.current {
            Step::Payment => Step::Partner,
            Step::Partner => Step::Category,
            other => other,
        };
        self.current
    }

    /// Jump to the terminal Success state. Idempotent; both the payment
    /// outcome and the redirect-return handler call this.
    pub(crate) fn force_success(&mut self) {
        self.current = Step::Success;
        self.just_auto_advanced = false;
    }
}
