use std::future::Future;
use std::time::Duration;

use futures_util::future::{select, Either};
use gloo_net::http::{Request, Response};
use gloo_timers::future::TimeoutFuture;
use log::{debug, info};

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::models::{ErrorResponse, HistoryResponse, NodeId, TransferRequest};

/// HTTP access to the ledger backend.
#[derive(Clone, Debug, PartialEq)]
pub struct LedgerClient {
    config: ClientConfig,
}

impl LedgerClient {
    pub fn new(config: ClientConfig) -> Self {
        Self { config }
    }

    pub async fn get_transactions(&self, node: NodeId) -> Result<HistoryResponse, ApiError> {
        let url = self.config.transactions_url(node);
        info!("GET {}", url);
        let response = with_timeout(self.config.request_timeout, Request::get(&url).send()).await?;
        let response = check_status(response).await?;
        let history = response.json::<HistoryResponse>().await?;
        debug!("History payload for node {}: {:?}", node, history);
        Ok(history)
    }

    /// Returns the backend's acknowledgment body as text.
    pub async fn send_transaction(&self, request: &TransferRequest) -> Result<String, ApiError> {
        let url = self.config.send_transaction_url();
        let args = request.to_args();
        info!("POST {} {:?}", url, args);
        let pending = Request::post(&url).json(&args)?;
        let response = with_timeout(self.config.request_timeout, pending.send()).await?;
        let response = check_status(response).await?;
        Ok(response.text().await.unwrap_or_default())
    }
}

async fn with_timeout<T, F>(timeout: Duration, request: F) -> Result<T, ApiError>
where
    F: Future<Output = Result<T, gloo_net::Error>>,
{
    let millis = u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX);
    match select(Box::pin(request), Box::pin(TimeoutFuture::new(millis))).await {
        Either::Left((result, _)) => result.map_err(ApiError::from),
        Either::Right(_) => Err(ApiError::Timeout(u64::from(millis))),
    }
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let code = response.status();
    let fallback = response.status_text();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        code,
        message: error_message(&body, &fallback),
    })
}

fn error_message(body: &str, fallback: &str) -> String {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(err) => err.detail,
        Err(_) if !body.trim().is_empty() && !body.trim_start().starts_with('{') => {
            body.trim().to_string()
        }
        Err(_) if !fallback.is_empty() => fallback.to_string(),
        Err(_) => "Unknown error".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_backend_detail() {
        assert_eq!(
            error_message(r#"{"detail": "IPv8 instance not found"}"#, "Not Found"),
            "IPv8 instance not found"
        );
        assert_eq!(error_message(r#"{"error": "bad peer"}"#, ""), "bad peer");
    }

    #[test]
    fn error_message_falls_back_to_text_then_status() {
        assert_eq!(error_message("Internal Server Error", "x"), "Internal Server Error");
        assert_eq!(error_message(r#"{"detail": [1, 2]}"#, "Unprocessable"), "Unprocessable");
        assert_eq!(error_message("", ""), "Unknown error");
    }
}
