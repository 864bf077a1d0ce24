//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{alert::Alert, internal_server_error::InternalServerError};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A transaction could not be encoded as JSON for the webhook.
    #[error("could not serialize the transaction as JSON: {0}")]
    Serialization(String),

    /// The request to the webhook could not be sent.
    ///
    /// Only transport failures end up here. The webhook's response is never
    /// read, so a rejected transaction is indistinguishable from an accepted
    /// one.
    #[error("could not send the transaction: {0}")]
    Dispatch(String),

    /// The transactions could not be read from the transaction table.
    ///
    /// This covers transport failures, non-success status codes and response
    /// bodies that are not a list of transactions.
    #[error("could not fetch transactions: {0}")]
    Fetch(String),

    /// The report was requested but no transaction table was configured.
    #[error("the transaction table has not been configured")]
    TableNotConfigured,

    /// A configured URL could not be parsed.
    ///
    /// Callers should pass in the offending URL and the parser's error message.
    #[error("invalid URL \"{0}\": {1}")]
    InvalidUrl(String, String),

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::InvalidTimezoneError(timezone) => InternalServerError {
                description: "Invalid Timezone Settings",
                fix: &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            }
            .into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// The alert to show the user for this error.
    pub fn alert(&self) -> Alert {
        match self {
            Error::Dispatch(_) | Error::Serialization(_) => Alert::Error {
                message: "Failed to save".to_owned(),
                details: "The transaction could not be sent. \
                    Check your connection and try again."
                    .to_owned(),
            },
            Error::Fetch(details) => Alert::Error {
                message: "Failed to fetch data".to_owned(),
                details: details.to_owned(),
            },
            Error::TableNotConfigured => Alert::Error {
                message: "Report unavailable".to_owned(),
                details: "No transaction table has been configured. \
                    Start the server with a table URL and key."
                    .to_owned(),
            },
            Error::InvalidTimezoneError(timezone) => Alert::Error {
                message: "Invalid Timezone Settings".to_owned(),
                details: format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            },
            _ => Alert::Error {
                message: "Something went wrong".to_owned(),
                details: "An unexpected error occurred, check the server logs for more details."
                    .to_owned(),
            },
        }
    }

    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let status_code = match &self {
            Error::Dispatch(_) | Error::Serialization(_) | Error::Fetch(_) => {
                StatusCode::BAD_GATEWAY
            }
            Error::TableNotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status_code, self.alert().into_html()).into_response()
    }
}
