//! Transfer form and history table state, free of any I/O.
//!
//! Every operation updates the state and hands back a ticket describing the
//! request or timer the caller has to run; the result is fed back through the
//! matching `on_*` method.

pub mod dispatcher;
pub mod history;
pub mod selection;
pub mod validation;

use log::{debug, error, info, warn};

use crate::error::ApiError;
use crate::models::{HistoryResponse, HistorySnapshot, NodeId, PeerIndex, ToastKind, TransferOutcome};
use crate::notify::Notifier;

pub use dispatcher::{DispatchTicket, SubmissionDispatcher};
pub use history::{FetchOutcome, FetchTicket, HistorySynchronizer};
pub use selection::SelectionState;

pub const SENT_MESSAGE: &str = "Transaction successfully sent!";
pub const REFRESHED_MESSAGE: &str = "Transactions table refreshed!";
pub const GENERIC_ERROR: &str = "Some error occurred!";

#[derive(Debug)]
pub struct Controller {
    selection: SelectionState,
    dispatcher: SubmissionDispatcher,
    history: HistorySynchronizer,
}

impl Controller {
    pub fn new(history_node: NodeId) -> Self {
        Self {
            selection: SelectionState::new(history_node),
            dispatcher: SubmissionDispatcher::default(),
            history: HistorySynchronizer::default(),
        }
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn snapshot(&self) -> &HistorySnapshot {
        self.history.snapshot()
    }

    pub fn is_busy(&self) -> bool {
        self.dispatcher.is_busy()
    }

    // Form inputs are disabled while a transfer is in flight, so edits that
    // still arrive are dropped.

    pub fn set_sender(&mut self, sender: Option<NodeId>) -> bool {
        if self.is_busy() {
            return false;
        }
        self.selection.set_sender(sender);
        true
    }

    pub fn set_receiver(&mut self, receiver: Option<PeerIndex>) -> bool {
        if self.is_busy() {
            return false;
        }
        self.selection.set_receiver(receiver);
        true
    }

    /// Returns what the amount field should display afterwards.
    pub fn set_amount(&mut self, proposed: &str) -> String {
        if self.is_busy() {
            return self.selection.amount().to_string();
        }
        self.selection.set_amount(proposed).to_string()
    }

    /// Initial background load of the default node.
    pub fn mount(&mut self) -> FetchTicket {
        self.history.begin(self.selection.history_node(), true)
    }

    pub fn select_history_node(&mut self, node: NodeId) -> FetchTicket {
        self.selection.set_history_node(node);
        self.history.begin(node, false)
    }

    pub fn refresh(&mut self) -> FetchTicket {
        self.history.begin(self.selection.history_node(), false)
    }

    /// Background refresh. Skipped while a user-started fetch for the
    /// displayed node is still out, so that fetch keeps its own notice.
    pub fn poll(&mut self) -> Option<FetchTicket> {
        let node = self.selection.history_node();
        if self.history.is_visible_pending(node) {
            debug!("Poll skipped: a refresh of node {} is already pending", node);
            return None;
        }
        Some(self.history.begin(node, true))
    }

    pub fn on_history_response(
        &mut self,
        ticket: FetchTicket,
        result: Result<HistoryResponse, ApiError>,
        notifier: &impl Notifier,
    ) -> FetchOutcome {
        let outcome = self
            .history
            .complete(ticket, self.selection.history_node(), result);
        match &outcome {
            FetchOutcome::Applied => {
                info!(
                    "History for node {} refreshed: {} transactions",
                    ticket.node,
                    self.history.snapshot().count
                );
                if !ticket.silent {
                    notifier.notify(REFRESHED_MESSAGE.to_string(), ToastKind::Success);
                }
            }
            FetchOutcome::Failed(e) => {
                error!("Fetching history for node {} failed: {}", ticket.node, e);
                if !ticket.silent {
                    notifier.notify(format!("{} {}", GENERIC_ERROR, e), ToastKind::Error);
                }
            }
            FetchOutcome::Stale => {}
        }
        outcome
    }

    /// Validates the form and, if it passes, locks it for dispatch.
    /// Returns `None` when rejected or when a transfer is already running.
    pub fn submit(&mut self, notifier: &impl Notifier) -> Option<DispatchTicket> {
        if self.is_busy() {
            warn!("Submit ignored: a transaction is already in flight");
            return None;
        }
        let request = match self.selection.validate() {
            Ok(request) => request,
            Err(rejection) => {
                info!("Transfer rejected: {:?}", rejection);
                notifier.notify(rejection.to_string(), ToastKind::Error);
                return None;
            }
        };
        let ticket = self.dispatcher.begin(request)?;
        info!(
            "Dispatching transfer #{}: {} -> peer {} ({} VAD)",
            ticket.id, ticket.request.sender, ticket.request.receiver, ticket.request.amount
        );
        Some(ticket)
    }

    /// Result of the POST for dispatch `id`.
    pub fn on_submit_response(
        &mut self,
        id: u64,
        result: Result<String, ApiError>,
        notifier: &impl Notifier,
    ) -> Option<FetchTicket> {
        let outcome = match result {
            Ok(ack) => {
                info!("Transfer #{} accepted: {}", id, ack);
                TransferOutcome::Submitted
            }
            Err(e) => {
                error!("Transfer #{} failed: {}", id, e);
                TransferOutcome::Failed(e.to_string())
            }
        };
        let finished = self.dispatcher.on_response(id, outcome)?;
        self.finish(finished, notifier)
    }

    /// The settle delay for dispatch `id` ran out.
    pub fn on_settle_elapsed(&mut self, id: u64, notifier: &impl Notifier) -> Option<FetchTicket> {
        let finished = self.dispatcher.on_settle_elapsed(id)?;
        self.finish(finished, notifier)
    }

    fn finish(&mut self, outcome: TransferOutcome, notifier: &impl Notifier) -> Option<FetchTicket> {
        match outcome {
            TransferOutcome::Submitted => {
                self.selection.clear();
                notifier.notify(SENT_MESSAGE.to_string(), ToastKind::Success);
                Some(self.history.begin(self.selection.history_node(), true))
            }
            TransferOutcome::Failed(reason) => {
                notifier.notify(format!("{} {}", GENERIC_ERROR, reason), ToastKind::Error);
                None
            }
        }
    }
}

#[cfg(test)]
impl Controller {
    pub fn dispatch_state(&self) -> &dispatcher::DispatchState {
        self.dispatcher.state()
    }
}
