use std::time::Duration;

use crate::models::{NodeId, PeerIndex};

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Ports of the ledger nodes the backend exposes, in display order.
pub const KNOWN_NODES: [NodeId; 3] = [NodeId(9090), NodeId(9091), NodeId(9092)];

/// Peer indices selectable as receiver.
pub const KNOWN_PEERS: [PeerIndex; 3] = [PeerIndex(0), PeerIndex(1), PeerIndex(2)];

/// Node ids and peer indices share an identity space modulo this value.
pub const PEER_DOMAIN: u16 = 10;

pub const MAX_AMOUNT_DIGITS: usize = 6;

pub const SETTLE_DELAY: Duration = Duration::from_millis(2_500);
pub const POLL_INTERVAL: Duration = Duration::from_secs(5);
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    pub api_base: String,
    pub default_history_node: NodeId,
    pub settle_delay: Duration,
    pub poll_interval: Option<Duration>,
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: option_env!("VADAM_API_URL")
                .unwrap_or(DEFAULT_API_BASE)
                .trim_end_matches('/')
                .to_string(),
            default_history_node: KNOWN_NODES[0],
            settle_delay: SETTLE_DELAY,
            poll_interval: Some(POLL_INTERVAL),
            request_timeout: REQUEST_TIMEOUT,
        }
    }
}

impl ClientConfig {
    pub fn transactions_url(&self, node: NodeId) -> String {
        format!("{}/get-transactions/{}", self.api_base, node.port())
    }

    pub fn send_transaction_url(&self) -> String {
        format!("{}/send-transaction", self.api_base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_built_from_the_api_base() {
        let config = ClientConfig {
            api_base: "http://ledger.local:8000".into(),
            ..ClientConfig::default()
        };
        assert_eq!(
            config.transactions_url(NodeId(9091)),
            "http://ledger.local:8000/get-transactions/9091"
        );
        assert_eq!(
            config.send_transaction_url(),
            "http://ledger.local:8000/send-transaction"
        );
    }

    #[test]
    fn default_history_node_is_first_known_node() {
        assert_eq!(ClientConfig::default().default_history_node, NodeId(9090));
    }
}
