use crate::error::Rejection;
use crate::models::{NodeId, PeerIndex, TransferRequest};
use crate::utils::accept_amount_input;

use super::validation::validate;

/// What the user has picked in the transfer form and the history header.
/// Every field has exactly one setter.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectionState {
    sender: Option<NodeId>,
    receiver: Option<PeerIndex>,
    amount: String,
    history_node: NodeId,
    reset_token: u64,
}

impl SelectionState {
    pub fn new(history_node: NodeId) -> Self {
        Self {
            sender: None,
            receiver: None,
            amount: String::new(),
            history_node,
            reset_token: 0,
        }
    }

    pub fn sender(&self) -> Option<NodeId> {
        self.sender
    }

    pub fn receiver(&self) -> Option<PeerIndex> {
        self.receiver
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn history_node(&self) -> NodeId {
        self.history_node
    }

    /// Bumped on every [`clear`](Self::clear); the form widgets are keyed on it.
    pub fn reset_token(&self) -> u64 {
        self.reset_token
    }

    pub fn set_sender(&mut self, sender: Option<NodeId>) {
        self.sender = sender;
    }

    pub fn set_receiver(&mut self, receiver: Option<PeerIndex>) {
        self.receiver = receiver;
    }

    /// Returns the value the field holds afterwards.
    pub fn set_amount(&mut self, proposed: &str) -> &str {
        self.amount = accept_amount_input(&self.amount, proposed);
        &self.amount
    }

    pub fn set_history_node(&mut self, node: NodeId) {
        self.history_node = node;
    }

    pub fn clear(&mut self) {
        self.sender = None;
        self.receiver = None;
        self.amount.clear();
        self.reset_token = self.reset_token.wrapping_add(1);
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.sender.is_none() && self.receiver.is_none() && self.amount.is_empty()
    }

    pub fn validate(&self) -> Result<TransferRequest, Rejection> {
        validate(self.sender, self.receiver, &self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_on_default_node() {
        let selection = SelectionState::new(NodeId(9090));
        assert!(selection.is_empty());
        assert_eq!(selection.history_node(), NodeId(9090));
        assert_eq!(selection.reset_token(), 0);
    }

    #[test]
    fn setters_touch_only_their_field() {
        let mut selection = SelectionState::new(NodeId(9090));
        selection.set_sender(Some(NodeId(9091)));
        assert_eq!(selection.receiver(), None);
        assert_eq!(selection.amount(), "");

        selection.set_receiver(Some(PeerIndex(2)));
        selection.set_amount("42");
        selection.set_history_node(NodeId(9092));

        assert_eq!(selection.sender(), Some(NodeId(9091)));
        assert_eq!(selection.receiver(), Some(PeerIndex(2)));
        assert_eq!(selection.amount(), "42");
        assert_eq!(selection.history_node(), NodeId(9092));
    }

    #[test]
    fn amount_setter_refuses_non_digits() {
        let mut selection = SelectionState::new(NodeId(9090));
        selection.set_amount("1");
        assert_eq!(selection.set_amount("1a"), "1");
        assert_eq!(selection.set_amount("a"), "1");
    }

    #[test]
    fn clear_empties_form_and_bumps_token_but_keeps_history_node() {
        let mut selection = SelectionState::new(NodeId(9090));
        selection.set_sender(Some(NodeId(9090)));
        selection.set_receiver(Some(PeerIndex(1)));
        selection.set_amount("7");
        selection.set_history_node(NodeId(9091));

        selection.clear();
        selection.clear();

        assert!(selection.is_empty());
        assert_eq!(selection.reset_token(), 2);
        assert_eq!(selection.history_node(), NodeId(9091));
    }
}
