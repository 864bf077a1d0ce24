//! Reads transactions from a hosted PostgREST table, e.g. on Supabase.

use reqwest::{StatusCode, Url};
use serde::Deserialize;

use crate::{Error, transaction::StoredTransaction};

/// The error body returned by PostgREST.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: String,
}

/// A read-only client for the table that stores transactions.
#[derive(Debug, Clone)]
pub struct TransactionTable {
    endpoint: Url,
    api_key: String,
    http: reqwest::Client,
}

impl TransactionTable {
    /// Create a client for the table `table_name` in the database at `base_url`.
    ///
    /// # Errors
    /// Returns [Error::InvalidUrl] if `base_url` is not a valid base URL.
    pub fn new(base_url: &str, api_key: &str, table_name: &str) -> Result<Self, Error> {
        let invalid_url = |reason: String| Error::InvalidUrl(base_url.to_owned(), reason);

        let mut endpoint = Url::parse(base_url).map_err(|error| invalid_url(error.to_string()))?;
        endpoint
            .path_segments_mut()
            .map_err(|_| invalid_url("cannot be used as a base URL".to_owned()))?
            .pop_if_empty()
            .extend(["rest", "v1", table_name]);

        Ok(Self {
            endpoint,
            api_key: api_key.to_owned(),
            http: reqwest::Client::new(),
        })
    }

    /// Fetch every transaction, newest first.
    ///
    /// There is no limit or paging.
    ///
    /// # Errors
    /// Returns [Error::Fetch] if the request fails, the table answers with an
    /// error status or the body is not a JSON list. Rows in the list that are
    /// not transactions, e.g. with a null name or an unknown type, are logged
    /// and left out.
    pub async fn fetch_all(&self) -> Result<Vec<StoredTransaction>, Error> {
        let response = self
            .http
            .get(self.endpoint.clone())
            .query(&[("select", "*"), ("order", "date.desc")])
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .send()
            .await
            .map_err(|error| {
                tracing::error!("could not reach the transaction table: {error}");
                Error::Fetch(error.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = error_message(status, response.text().await.unwrap_or_default());
            tracing::error!("the transaction table answered with {status}: {message}");
            return Err(Error::Fetch(message));
        }

        let rows = response
            .json::<Vec<serde_json::Value>>()
            .await
            .map_err(|error| {
                tracing::error!("could not decode transactions: {error}");
                Error::Fetch(format!("Unexpected response from the transaction table: {error}"))
            })?;

        Ok(decode_rows(rows))
    }
}

/// Decode each row on its own, skipping the rows that are not transactions.
fn decode_rows(rows: Vec<serde_json::Value>) -> Vec<StoredTransaction> {
    rows.into_iter()
        .filter_map(
            |row| match serde_json::from_value::<StoredTransaction>(row.clone()) {
                Ok(transaction) => Some(transaction),
                Err(error) => {
                    tracing::warn!("Skipping transaction row {row}: {error}");
                    None
                }
            },
        )
        .collect()
}

/// The message to show for an error response, PostgREST's own message if the
/// body has one.
fn error_message(status: StatusCode, body: String) -> String {
    serde_json::from_str::<ErrorBody>(&body)
        .map(|body| body.message)
        .unwrap_or_else(|_| format!("The transaction table answered with {status}"))
}
