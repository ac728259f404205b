//! Confirmation gate: at most one action descriptor may await confirmation
//! at any time, and nothing executes without an explicit confirm.

use thiserror::Error;

use crate::action::ActionDescriptor;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum GateState {
    #[default]
    Idle,
    PendingConfirmation(ActionDescriptor),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    #[error("another action is already awaiting confirmation")]
    AlreadyPending,
    #[error("a commit is already in flight")]
    CommitInFlight,
}

#[derive(Debug, Default)]
pub struct ConfirmationGate {
    state: GateState,
}

impl ConfirmationGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stages a descriptor for confirmation. Rejects the call if another
    /// descriptor is already pending; the pending one is never overwritten.
    pub fn open(&mut self, descriptor: ActionDescriptor) -> Result<(), GateError> {
        match self.state {
            GateState::Idle => {
                self.state = GateState::PendingConfirmation(descriptor);
                Ok(())
            }
            GateState::PendingConfirmation(_) => Err(GateError::AlreadyPending),
        }
    }

    /// Unconditionally returns to idle, handing back the discarded
    /// descriptor if one was pending. No external call was issued for it.
    pub fn cancel(&mut self) -> Option<ActionDescriptor> {
        match std::mem::take(&mut self.state) {
            GateState::Idle => None,
            GateState::PendingConfirmation(descriptor) => Some(descriptor),
        }
    }

    /// Takes the pending descriptor out for execution and closes the gate.
    /// The gate is idle again before any external call is made.
    pub fn confirm(&mut self) -> Option<ActionDescriptor> {
        match std::mem::take(&mut self.state) {
            GateState::Idle => None,
            GateState::PendingConfirmation(descriptor) => Some(descriptor),
        }
    }

    pub fn pending(&self) -> Option<&ActionDescriptor> {
        match &self.state {
            GateState::Idle => None,
            GateState::PendingConfirmation(descriptor) => Some(descriptor),
        }
    }

    pub fn is_idle(&self) -> bool {
        self.state == GateState::Idle
    }
}

#[cfg(test)]
#[path = "tests/gate_tests.rs"]
mod tests;
