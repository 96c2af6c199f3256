use thiserror::Error;

/// Why a transfer never left the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("Please select a sender peer!")]
    SenderMissing,
    #[error("Please select a recipient peer!")]
    ReceiverMissing,
    #[error("Please enter an amount!")]
    AmountMissing,
    #[error("Please select different sender and recipient peer!")]
    SameParty,
    #[error("Please enter a valid amount!")]
    AmountInvalid,
}

/// Failures talking to the ledger backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Transport(String),

    #[error("Request timed out after {0} ms")]
    Timeout(u64),

    #[error("Backend returned {code}: {message}")]
    Status { code: u16, message: String },

    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => ApiError::Transport(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_messages_are_user_facing() {
        assert_eq!(
            Rejection::SameParty.to_string(),
            "Please select different sender and recipient peer!"
        );
        assert_eq!(
            Rejection::SenderMissing.to_string(),
            "Please select a sender peer!"
        );
    }

    #[test]
    fn status_error_includes_code_and_detail() {
        let err = ApiError::Status {
            code: 404,
            message: "IPv8 instance not found".into(),
        };
        assert_eq!(
            err.to_string(),
            "Backend returned 404: IPv8 instance not found"
        );
    }
}
