use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::config::{KNOWN_NODES, KNOWN_PEERS, PEER_DOMAIN};

/// A ledger node, addressed by the port the backend knows it under.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct NodeId(pub u16);

impl NodeId {
    pub fn port(self) -> u16 {
        self.0
    }

    /// Index of the peer this node stands for in the receiver domain.
    pub fn local_index(self) -> PeerIndex {
        PeerIndex(self.0 % PEER_DOMAIN)
    }

    /// Whether `peer` resolves to this node's own peer.
    pub fn is_peer(self, peer: PeerIndex) -> bool {
        self.local_index() == peer
    }

    pub fn parse(value: &str) -> Option<NodeId> {
        let port = value.trim().parse::<u16>().ok()?;
        KNOWN_NODES.iter().copied().find(|n| n.0 == port)
    }

    pub fn label(self) -> String {
        match KNOWN_NODES.iter().position(|n| *n == self) {
            Some(i) => format!("Node {}", i + 1),
            None => format!("Node :{}", self.0),
        }
    }

    /// Label used in the sender selector, where each node acts as a peer.
    pub fn peer_label(self) -> String {
        match KNOWN_NODES.iter().position(|n| *n == self) {
            Some(i) => format!("Peer {}", i + 1),
            None => format!("Peer :{}", self.0),
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct PeerIndex(pub u16);

impl PeerIndex {
    pub fn parse(value: &str) -> Option<PeerIndex> {
        let index = value.trim().parse::<u16>().ok()?;
        KNOWN_PEERS.iter().copied().find(|p| p.0 == index)
    }

    pub fn label(self) -> String {
        format!("Peer {}", self.0 + 1)
    }
}

impl fmt::Display for PeerIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransferRequest {
    pub sender: NodeId,
    pub receiver: PeerIndex,
    pub amount: u32,
}

impl TransferRequest {
    pub fn to_args(&self) -> SendTransactionArgs {
        SendTransactionArgs {
            node_id: self.sender.port(),
            peer_id: self.receiver.0,
            amount: self.amount,
        }
    }
}

/// Body of `POST /send-transaction`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct SendTransactionArgs {
    pub node_id: u16,
    pub peer_id: u16,
    pub amount: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransferOutcome {
    Submitted,
    Failed(String),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct TransactionRecord {
    #[serde(rename = "hashId", alias = "hash_id", alias = "tx_id")]
    pub hash_id: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub amount: u64,
    #[serde(default, deserialize_with = "string_or_number")]
    pub sender: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub receiver: String,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(s) => s,
        Raw::Number(n) => n.to_string(),
    })
}

/// Both shapes `GET /get-transactions/{node}` has answered with.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum HistoryResponse {
    Records {
        transactions: Vec<TransactionRecord>,
    },
    CountOnly {
        #[serde(alias = "transactions-made")]
        transactions_made: u64,
    },
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct HistorySnapshot {
    pub node: Option<NodeId>,
    pub records: Vec<TransactionRecord>,
    pub count: usize,
}

impl HistorySnapshot {
    pub fn from_response(node: NodeId, response: HistoryResponse) -> Self {
        match response {
            HistoryResponse::Records { transactions } => Self {
                node: Some(node),
                count: transactions.len(),
                records: transactions,
            },
            HistoryResponse::CountOnly { transactions_made } => Self {
                node: Some(node),
                records: Vec::new(),
                count: usize::try_from(transactions_made).unwrap_or(usize::MAX),
            },
        }
    }

    pub fn caption(&self) -> String {
        format!("List of all processed transactions ({})", self.count)
    }
}

/// `{ "detail": ... }` is what the backend sends with an HTTP error,
/// `{ "error": ... }` is accepted too.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    #[serde(alias = "error")]
    pub detail: String,
}

#[derive(Clone, PartialEq, Debug, Default)]
pub enum ToastKind {
    #[default]
    Error,
    Success,
}

impl ToastKind {
    pub fn class(&self) -> &'static str {
        match self {
            ToastKind::Error => "toast-error",
            ToastKind::Success => "toast-success",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_response_is_normalized_to_records() {
        let body = r#"{
            "status": "OK",
            "transactions": [
                {"hashId": "ab12", "status": "Processed", "amount": 12, "sender": 9090, "receiver": "1"}
            ]
        }"#;
        let response: HistoryResponse = serde_json::from_str(body).unwrap();
        let snapshot = HistorySnapshot::from_response(NodeId(9090), response);

        assert_eq!(snapshot.count, 1);
        assert_eq!(snapshot.records[0].hash_id, "ab12");
        assert_eq!(snapshot.records[0].sender, "9090");
        assert_eq!(snapshot.records[0].receiver, "1");
    }

    #[test]
    fn count_only_response_accepts_both_key_spellings() {
        for body in [
            r#"{"transactions_made": 4}"#,
            r#"{"status": "OK", "transactions-made": 4}"#,
        ] {
            let response: HistoryResponse = serde_json::from_str(body).unwrap();
            let snapshot = HistorySnapshot::from_response(NodeId(9091), response);
            assert_eq!(snapshot.count, 4);
            assert!(snapshot.records.is_empty());
            assert_eq!(snapshot.node, Some(NodeId(9091)));
        }
    }

    #[test]
    fn empty_list_renders_zero_caption() {
        let response: HistoryResponse = serde_json::from_str(r#"{"transactions": []}"#).unwrap();
        let snapshot = HistorySnapshot::from_response(NodeId(9090), response);
        assert_eq!(snapshot.count, 0);
        assert!(snapshot.records.is_empty());
        assert_eq!(snapshot.caption(), "List of all processed transactions (0)");
    }

    #[test]
    fn request_serializes_to_backend_field_names() {
        let request = TransferRequest {
            sender: NodeId(9090),
            receiver: PeerIndex(1),
            amount: 12,
        };
        let body = serde_json::to_value(request.to_args()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "node_id": 9090, "peer_id": 1, "amount": 12 })
        );
    }

    #[test]
    fn node_identity_wraps_into_peer_domain() {
        assert_eq!(NodeId(9090).local_index(), PeerIndex(0));
        assert_eq!(NodeId(9092).local_index(), PeerIndex(2));
        assert!(NodeId(9091).is_peer(PeerIndex(1)));
        assert!(!NodeId(9091).is_peer(PeerIndex(2)));
    }

    #[test]
    fn selector_values_parse_only_known_entries() {
        assert_eq!(NodeId::parse("9092"), Some(NodeId(9092)));
        assert_eq!(NodeId::parse("8000"), None);
        assert_eq!(PeerIndex::parse("2"), Some(PeerIndex(2)));
        assert_eq!(PeerIndex::parse(""), None);
        assert_eq!(NodeId(9091).label(), "Node 2");
        assert_eq!(PeerIndex(0).label(), "Peer 1");
    }
}
