//! The submission routine shared by the form endpoint and auto-submit.

use time::OffsetDateTime;

use crate::{
    Error,
    alert::Alert,
    persistence::{Delivery, PersistenceClient},
    quick_add::Draft,
    transaction::TransactionRecord,
};

/// The state of the last submission as shown next to the form.
#[derive(Debug, PartialEq)]
pub enum SubmissionStatus {
    /// Nothing has been submitted, or the submission was skipped.
    Idle,
    /// The transaction was handed to the persistence client.
    Success(Delivery),
    /// The transaction could not be sent.
    Error(Error),
}

impl SubmissionStatus {
    /// The alert to show for this status, `None` when idle.
    pub fn alert(&self) -> Option<Alert> {
        match self {
            SubmissionStatus::Idle => None,
            SubmissionStatus::Success(Delivery::Dispatched) => Some(Alert::Success {
                message: "SAVED SUCCESSFULLY!".to_owned(),
                details: String::new(),
            }),
            SubmissionStatus::Success(Delivery::Mocked { message }) => Some(Alert::Success {
                message: "SAVED SUCCESSFULLY!".to_owned(),
                details: message.clone(),
            }),
            SubmissionStatus::Error(error) => Some(error.alert()),
        }
    }
}

/// The outcome of [submit]: the draft to show in the form and the status.
#[derive(Debug, PartialEq)]
pub struct Submission {
    /// The draft after the submission.
    pub draft: Draft,
    /// What happened.
    pub status: SubmissionStatus,
}

/// Save `draft` as a transaction that happened at `now`.
///
/// An incomplete draft, i.e. an empty name or an amount that is missing or
/// not a number, is not sent anywhere and comes back unchanged with the
/// status [SubmissionStatus::Idle].
///
/// On success the draft is reset to the default. On failure the draft comes
/// back exactly as it was so the user can try again.
pub async fn submit(draft: Draft, client: &PersistenceClient, now: OffsetDateTime) -> Submission {
    let Some(amount) = draft.parsed_amount().filter(|_| draft.is_complete()) else {
        tracing::debug!("Skipping submission of incomplete draft {draft:?}");
        return Submission {
            draft,
            status: SubmissionStatus::Idle,
        };
    };

    let record = TransactionRecord {
        date: now,
        name: draft.name.clone(),
        transaction_type: draft.transaction_type,
        amount,
    };

    match client.save(&record).await {
        Ok(delivery) => {
            tracing::info!("Saved transaction {record:?}");
            Submission {
                draft: Draft::default(),
                status: SubmissionStatus::Success(delivery),
            }
        }
        Err(error) => {
            tracing::error!("Could not save transaction {record:?}: {error}");
            Submission {
                draft,
                status: SubmissionStatus::Error(error),
            }
        }
    }
}
