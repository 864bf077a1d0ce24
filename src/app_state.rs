//! Implements a struct that holds the state of the REST server.

use crate::{
    Error, config::AppConfig, persistence::PersistenceClient, report::TransactionTable,
    timezone::get_local_offset,
};

/// The state of the REST server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Sends new transactions to the webhook.
    pub persistence: PersistenceClient,

    /// Reads transactions for the report, `None` if no table is configured.
    pub table: Option<TransactionTable>,

    /// The local timezone as a canonical timezone name, e.g. "Asia/Jakarta".
    pub local_timezone: String,
}

impl AppState {
    /// Create a new [AppState] from the startup configuration.
    ///
    /// # Errors
    /// Returns an error if a URL in `config` is invalid or the timezone is
    /// not a canonical timezone name.
    pub fn new(config: AppConfig) -> Result<Self, Error> {
        if get_local_offset(&config.local_timezone).is_none() {
            return Err(Error::InvalidTimezoneError(config.local_timezone));
        }

        let persistence = PersistenceClient::new(config.webhook_url.as_deref())?;
        if persistence.is_mock() {
            tracing::warn!("No webhook URL configured, transactions will only be logged");
        }

        let table = config
            .table
            .map(|table| TransactionTable::new(&table.url, &table.api_key, &table.table_name))
            .transpose()?;
        if table.is_none() {
            tracing::warn!("No transaction table configured, the report is unavailable");
        }

        Ok(Self {
            persistence,
            table,
            local_timezone: config.local_timezone,
        })
    }
}
