use axum::{
    extract::{FromRef, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use time::OffsetDateTime;

use crate::{
    AppState,
    persistence::PersistenceClient,
    quick_add::{Draft, SubmissionStatus, form::quick_add_form, submit},
};

/// The state needed for the form endpoint.
#[derive(Debug, Clone)]
pub struct QuickAddState {
    /// Sends the transaction to the webhook.
    pub persistence: PersistenceClient,
}

impl FromRef<AppState> for QuickAddState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            persistence: state.persistence.clone(),
        }
    }
}

/// Save the transaction in the entry form.
///
/// This is also where an auto-submitted entry page posts its pre-filled form.
///
/// Responds with a fresh form on success, an error alert for the status area
/// on failure and `204 No Content` if the form was incomplete, which leaves
/// the page as it is.
pub async fn create_transaction_endpoint(
    State(state): State<QuickAddState>,
    Form(draft): Form<Draft>,
) -> Response {
    let submission = submit(draft, &state.persistence, OffsetDateTime::now_utc()).await;

    match submission.status {
        SubmissionStatus::Idle => StatusCode::NO_CONTENT.into_response(),
        SubmissionStatus::Error(error) => error.into_alert_response(),
        status @ SubmissionStatus::Success(_) => {
            quick_add_form(&submission.draft, &status, false).into_response()
        }
    }
}
