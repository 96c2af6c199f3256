use crate::error::Rejection;
use crate::models::{NodeId, PeerIndex, TransferRequest};
use crate::utils::parse_amount;

/// Checks a pending transfer. Rules run in order and the first one that fails
/// decides the rejection.
pub fn validate(
    sender: Option<NodeId>,
    receiver: Option<PeerIndex>,
    amount: &str,
) -> Result<TransferRequest, Rejection> {
    let sender = sender.ok_or(Rejection::SenderMissing)?;
    let receiver = receiver.ok_or(Rejection::ReceiverMissing)?;
    if amount.trim().is_empty() {
        return Err(Rejection::AmountMissing);
    }
    if sender.is_peer(receiver) {
        return Err(Rejection::SameParty);
    }
    let amount = parse_amount(amount)?;

    Ok(TransferRequest {
        sender,
        receiver,
        amount,
    })
}
