use log::debug;

use crate::error::ApiError;
use crate::models::{HistoryResponse, HistorySnapshot, NodeId};

/// A history request the shell has to run and report back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    pub token: u64,
    pub node: NodeId,
    /// Silent fetches never produce notices.
    pub silent: bool,
}

#[derive(Debug, PartialEq)]
pub enum FetchOutcome {
    Applied,
    /// Superseded by a newer request or aimed at a node no longer selected.
    Stale,
    Failed(ApiError),
}

/// Owns the displayed snapshot. Fetches are neither coalesced nor cancelled;
/// a completion only lands if it belongs to the latest request for the node
/// still on screen.
///
/// A user-started fetch owes the user a notice. A newer request for the same
/// node supersedes it, so that request inherits the notice.
#[derive(Debug, Default)]
pub struct HistorySynchronizer {
    snapshot: HistorySnapshot,
    latest_token: u64,
    visible_pending: Option<NodeId>,
}

impl HistorySynchronizer {
    pub fn snapshot(&self) -> &HistorySnapshot {
        &self.snapshot
    }

    /// Whether a user-started fetch for `node` has not landed yet.
    pub fn is_visible_pending(&self, node: NodeId) -> bool {
        self.visible_pending == Some(node)
    }

    pub fn begin(&mut self, node: NodeId, silent: bool) -> FetchTicket {
        self.latest_token += 1;
        let silent = silent && !self.is_visible_pending(node);
        if !silent {
            self.visible_pending = Some(node);
        }
        FetchTicket {
            token: self.latest_token,
            node,
            silent,
        }
    }

    pub fn complete(
        &mut self,
        ticket: FetchTicket,
        selected: NodeId,
        result: Result<HistoryResponse, ApiError>,
    ) -> FetchOutcome {
        if ticket.token != self.latest_token || ticket.node != selected {
            debug!(
                "Discarding history for node {} (token {}, latest {}, selected {})",
                ticket.node, ticket.token, self.latest_token, selected
            );
            return FetchOutcome::Stale;
        }
        self.visible_pending = None;
        match result {
            Ok(response) => {
                self.snapshot = HistorySnapshot::from_response(ticket.node, response);
                FetchOutcome::Applied
            }
            Err(e) => FetchOutcome::Failed(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionRecord;

    fn records(ids: &[&str]) -> HistoryResponse {
        HistoryResponse::Records {
            transactions: ids
                .iter()
                .map(|id| TransactionRecord {
                    hash_id: id.to_string(),
                    status: "Processed".into(),
                    amount: 1,
                    sender: "9090".into(),
                    receiver: "1".into(),
                })
                .collect(),
        }
    }

    #[test]
    fn slow_response_for_previous_node_is_discarded() {
        let mut history = HistorySynchronizer::default();
        let n = history.begin(NodeId(9090), false);
        let m = history.begin(NodeId(9091), false);

        assert_eq!(
            history.complete(m, NodeId(9091), Ok(records(&["m1"]))),
            FetchOutcome::Applied
        );
        assert_eq!(
            history.complete(n, NodeId(9091), Ok(records(&["n1", "n2"]))),
            FetchOutcome::Stale
        );
        assert_eq!(history.snapshot().node, Some(NodeId(9091)));
        assert_eq!(history.snapshot().records[0].hash_id, "m1");
    }

    #[test]
    fn response_for_deselected_node_is_discarded_even_if_latest() {
        let mut history = HistorySynchronizer::default();
        let ticket = history.begin(NodeId(9090), true);
        assert_eq!(
            history.complete(ticket, NodeId(9092), Ok(records(&["x"]))),
            FetchOutcome::Stale
        );
        assert_eq!(history.snapshot(), &HistorySnapshot::default());
    }

    #[test]
    fn failure_keeps_previous_snapshot() {
        let mut history = HistorySynchronizer::default();
        let first = history.begin(NodeId(9090), false);
        history.complete(first, NodeId(9090), Ok(records(&["a", "b"])));

        let second = history.begin(NodeId(9090), false);
        let outcome = history.complete(
            second,
            NodeId(9090),
            Err(ApiError::Transport("connection refused".into())),
        );
        assert!(matches!(outcome, FetchOutcome::Failed(_)));
        assert_eq!(history.snapshot().count, 2);
    }

    #[test]
    fn silent_fetch_takes_over_pending_visible_fetch() {
        let mut history = HistorySynchronizer::default();
        let manual = history.begin(NodeId(9090), false);
        let background = history.begin(NodeId(9090), true);
        assert!(!background.silent);

        assert_eq!(
            history.complete(manual, NodeId(9090), Ok(records(&["a"]))),
            FetchOutcome::Stale
        );
        assert!(history.is_visible_pending(NodeId(9090)));
        assert_eq!(
            history.complete(background, NodeId(9090), Ok(records(&["a"]))),
            FetchOutcome::Applied
        );
        assert!(!history.is_visible_pending(NodeId(9090)));
        assert!(history.begin(NodeId(9090), true).silent);
    }

    #[test]
    fn pending_visible_fetch_for_other_node_stays_silent() {
        let mut history = HistorySynchronizer::default();
        history.begin(NodeId(9091), false);
        assert!(history.begin(NodeId(9092), true).silent);
    }

    #[test]
    fn each_fetch_replaces_the_whole_snapshot() {
        let mut history = HistorySynchronizer::default();
        let first = history.begin(NodeId(9090), true);
        history.complete(first, NodeId(9090), Ok(records(&["a", "b", "c"])));
        let second = history.begin(NodeId(9090), true);
        history.complete(
            second,
            NodeId(9090),
            Ok(HistoryResponse::CountOnly {
                transactions_made: 7,
            }),
        );
        assert!(history.snapshot().records.is_empty());
        assert_eq!(history.snapshot().count, 7);
    }
}
