use crate::models::{TransferOutcome, TransferRequest};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DispatchState {
    Idle,
    /// POST in flight. `min_elapsed` is set once the settle delay has run out.
    Dispatching { id: u64, min_elapsed: bool },
    /// Backend answered; waiting for the settle delay before reporting.
    Settling { id: u64, outcome: TransferOutcome },
}

/// Work the shell has to start for an accepted submission: the POST and the
/// settle timer, both reporting back with `id`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DispatchTicket {
    pub id: u64,
    pub request: TransferRequest,
}

/// Allows a single transfer in flight. A submission completes once the
/// backend has answered and the settle delay has elapsed, whichever is later.
#[derive(Debug)]
pub struct SubmissionDispatcher {
    state: DispatchState,
    next_id: u64,
}

impl Default for SubmissionDispatcher {
    fn default() -> Self {
        Self {
            state: DispatchState::Idle,
            next_id: 1,
        }
    }
}

impl SubmissionDispatcher {
    #[cfg(test)]
    pub fn state(&self) -> &DispatchState {
        &self.state
    }

    pub fn is_busy(&self) -> bool {
        !matches!(self.state, DispatchState::Idle)
    }

    pub fn begin(&mut self, request: TransferRequest) -> Option<DispatchTicket> {
        if self.is_busy() {
            return None;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.state = DispatchState::Dispatching {
            id,
            min_elapsed: false,
        };
        Some(DispatchTicket { id, request })
    }

    /// Returns the outcome when this event finishes the submission.
    pub fn on_response(&mut self, id: u64, outcome: TransferOutcome) -> Option<TransferOutcome> {
        match std::mem::replace(&mut self.state, DispatchState::Idle) {
            DispatchState::Dispatching {
                id: current,
                min_elapsed: true,
            } if current == id => Some(outcome),
            DispatchState::Dispatching { id: current, .. } if current == id => {
                self.state = DispatchState::Settling { id, outcome };
                None
            }
            other => {
                self.state = other;
                None
            }
        }
    }

    /// Returns the outcome when this event finishes the submission.
    pub fn on_settle_elapsed(&mut self, id: u64) -> Option<TransferOutcome> {
        match std::mem::replace(&mut self.state, DispatchState::Idle) {
            DispatchState::Dispatching { id: current, .. } if current == id => {
                self.state = DispatchState::Dispatching {
                    id,
                    min_elapsed: true,
                };
                None
            }
            DispatchState::Settling {
                id: current,
                outcome,
            } if current == id => Some(outcome),
            other => {
                self.state = other;
                None
            }
        }
    }
}
