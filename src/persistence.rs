//! Client for sending transactions to the webhook that records them, e.g. a
//! spreadsheet script.
//!
//! A save is best-effort and unconfirmed: [Delivery::Dispatched] means the
//! request was sent and some response came back, not that the webhook stored
//! the transaction. The response is never read, mirroring webhooks that cannot
//! be read cross-origin. Reading it would change this contract.

use reqwest::{Url, header::CONTENT_TYPE};

use crate::{Error, transaction::TransactionRecord};

/// How a successful save was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    /// The transaction was sent to the webhook.
    Dispatched,
    /// No webhook is configured, the transaction was only logged.
    Mocked {
        /// Explains why nothing was sent.
        message: String,
    },
}

/// Sends transactions to the configured webhook.
///
/// Without a webhook URL the client runs in mock mode: every save succeeds
/// without any network I/O.
#[derive(Debug, Clone)]
pub struct PersistenceClient {
    webhook_url: Option<Url>,
    http: reqwest::Client,
}

impl PersistenceClient {
    /// Create a client for `webhook_url`.
    ///
    /// `None` or an empty string selects mock mode.
    ///
    /// # Errors
    /// Returns [Error::InvalidUrl] if `webhook_url` is not a valid URL.
    pub fn new(webhook_url: Option<&str>) -> Result<Self, Error> {
        let webhook_url = match webhook_url.map(str::trim) {
            None | Some("") => None,
            Some(url) => Some(
                Url::parse(url).map_err(|error| Error::InvalidUrl(url.to_owned(), error.to_string()))?,
            ),
        };

        Ok(Self {
            webhook_url,
            http: reqwest::Client::new(),
        })
    }

    /// Whether saves are only logged instead of sent.
    pub fn is_mock(&self) -> bool {
        self.webhook_url.is_none()
    }

    /// Send `record` to the webhook.
    ///
    /// Makes at most one request. Nothing is retried or queued.
    ///
    /// # Errors
    /// Returns [Error::Serialization] if `record` cannot be encoded as JSON and
    /// [Error::Dispatch] if the request could not be sent.
    pub async fn save(&self, record: &TransactionRecord) -> Result<Delivery, Error> {
        let payload = serde_json::to_string(record).map_err(|error| {
            tracing::error!("could not serialize transaction: {error}");
            Error::Serialization(error.to_string())
        })?;

        let Some(webhook_url) = &self.webhook_url else {
            tracing::warn!("Webhook URL not set. Logging transaction instead: {payload}");
            return Ok(Delivery::Mocked {
                message: "Mock success (no webhook URL)".to_owned(),
            });
        };

        let response = self
            .http
            .post(webhook_url.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(|error| {
                tracing::error!("could not send transaction to webhook: {error}");
                Error::Dispatch(error.to_string())
            })?;

        tracing::debug!(
            "webhook answered with status {}, treating the transaction as sent",
            response.status()
        );

        Ok(Delivery::Dispatched)
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::json;
    use time::macros::datetime;

    use crate::{
        Error,
        persistence::{Delivery, PersistenceClient},
        test_utils::{spawn_recording_server, unreachable_url},
        transaction::{TransactionRecord, TransactionType},
    };

    fn coffee() -> TransactionRecord {
        TransactionRecord {
            date: datetime!(2024-01-01 10:00 UTC),
            name: "Coffee".to_owned(),
            transaction_type: TransactionType::Expense,
            amount: 15000.0,
        }
    }

    #[tokio::test]
    async fn mock_mode_succeeds_without_network() {
        let client = PersistenceClient::new(None).unwrap();

        let got = client.save(&coffee()).await;

        assert!(client.is_mock());
        assert!(matches!(got, Ok(Delivery::Mocked { .. })), "got {got:?}");
    }

    #[tokio::test]
    async fn empty_url_selects_mock_mode() {
        let client = PersistenceClient::new(Some("  ")).unwrap();

        assert!(client.is_mock());
    }

    #[test]
    fn invalid_url_is_rejected() {
        let got = PersistenceClient::new(Some("not a url"));

        assert!(matches!(got, Err(Error::InvalidUrl(..))), "got {got:?}");
    }

    #[tokio::test]
    async fn posts_record_as_json() {
        let server = spawn_recording_server(StatusCode::OK).await;
        let client = PersistenceClient::new(Some(&server.url)).unwrap();

        let got = client.save(&coffee()).await;

        assert_eq!(got, Ok(Delivery::Dispatched));
        let requests = server.requests();
        assert_eq!(requests.len(), 1, "want exactly one request, got {requests:?}");
        assert_eq!(requests[0].method, "POST");
        assert_eq!(
            requests[0].json(),
            json!({
                "date": "2024-01-01T10:00:00Z",
                "name": "Coffee",
                "type": "Pengeluaran",
                "amount": 15000,
            })
        );
    }

    #[tokio::test]
    async fn error_status_still_counts_as_sent() {
        let server = spawn_recording_server(StatusCode::INTERNAL_SERVER_ERROR).await;
        let client = PersistenceClient::new(Some(&server.url)).unwrap();

        let got = client.save(&coffee()).await;

        assert_eq!(got, Ok(Delivery::Dispatched));
        assert_eq!(server.requests().len(), 1);
    }

    #[tokio::test]
    async fn network_failure_is_reported() {
        let url = unreachable_url().await;
        let client = PersistenceClient::new(Some(&url)).unwrap();

        let got = client.save(&coffee()).await;

        assert!(matches!(got, Err(Error::Dispatch(_))), "got {got:?}");
    }
}
