//! The transaction being entered and the query string that can pre-fill it.

use serde::Deserialize;

use crate::transaction::TransactionType;

/// The not-yet-saved transaction held by the entry form.
///
/// `amount` is kept as the text the user typed so that a failed save can
/// give it back exactly as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Draft {
    /// What the money was spent on or earned from.
    #[serde(default)]
    pub name: String,
    /// Whether the money was spent or earned.
    #[serde(rename = "type", default)]
    pub transaction_type: TransactionType,
    /// The amount as typed.
    #[serde(default)]
    pub amount: String,
}

impl Draft {
    /// The parsed amount, `None` if the amount is missing or not a finite number.
    pub fn parsed_amount(&self) -> Option<f64> {
        self.amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|amount| amount.is_finite())
    }

    /// Whether the draft passes the presence checks required for saving.
    ///
    /// Any non-empty name counts, even one made only of spaces.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && self.parsed_amount().is_some()
    }
}

/// The query parameters accepted by the entry page, e.g.
/// `/quick-add?name=Coffee&amount=15000&auto=true`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntryQuery {
    /// Pre-fills the name.
    pub name: Option<String>,
    /// Pre-fills the transaction type, either the wire or the English name.
    #[serde(rename = "type")]
    pub transaction_type: Option<String>,
    /// Pre-fills the amount.
    pub amount: Option<String>,
    /// Set to exactly "true" to save the pre-filled draft immediately.
    pub auto: Option<String>,
}

impl EntryQuery {
    /// The draft described by the query, using the defaults for anything
    /// that is missing.
    ///
    /// An unknown `type` is ignored and the default, expense, is used.
    pub fn draft(&self) -> Draft {
        let transaction_type = match self.transaction_type.as_deref() {
            None | Some("") => TransactionType::default(),
            Some(text) => text.parse().unwrap_or_else(|error| {
                tracing::warn!("Ignoring the type query parameter: {error}");
                TransactionType::default()
            }),
        };

        Draft {
            name: self.name.clone().unwrap_or_default(),
            transaction_type,
            amount: self.amount.clone().unwrap_or_default(),
        }
    }

    /// Whether the draft should be saved without waiting for the user.
    pub fn should_auto_submit(&self) -> bool {
        let is_present =
            |value: &Option<String>| value.as_deref().is_some_and(|value| !value.is_empty());

        self.auto.as_deref() == Some("true") && is_present(&self.name) && is_present(&self.amount)
    }
}
