//! Defines the transaction record that is sent to the webhook and the rows
//! that are read back from the transaction table.

use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};
use time::OffsetDateTime;

use crate::format::Timestamp;

/// Whether money was spent or earned.
///
/// On the wire the variants use the Indonesian names "Pengeluaran" (expense)
/// and "Pemasukan" (income). The English names are accepted when reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionType {
    /// Money spent.
    #[default]
    #[serde(rename = "Pengeluaran", alias = "expense")]
    Expense,
    /// Money earned.
    #[serde(rename = "Pemasukan", alias = "income")]
    Income,
}

impl TransactionType {
    /// The value used for the radio inputs in HTML forms.
    pub fn form_value(&self) -> &'static str {
        match self {
            TransactionType::Expense => "expense",
            TransactionType::Income => "income",
        }
    }
}

/// The string was not the name of a transaction type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("\"{0}\" is not a transaction type")]
pub struct UnknownTransactionType(pub String);

impl FromStr for TransactionType {
    type Err = UnknownTransactionType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pengeluaran" | "expense" => Ok(TransactionType::Expense),
            "pemasukan" | "income" => Ok(TransactionType::Income),
            _ => Err(UnknownTransactionType(s.to_owned())),
        }
    }
}

/// A transaction as it is sent to the webhook.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRecord {
    /// When the transaction was submitted.
    #[serde(with = "time::serde::rfc3339")]
    pub date: OffsetDateTime,
    /// What the money was spent on or earned from.
    pub name: String,
    /// Whether the money was spent or earned.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// The size of the transaction, always positive. The sign is implied by
    /// `transaction_type`.
    #[serde(serialize_with = "serialize_amount")]
    pub amount: f64,
}

/// Write whole amounts as JSON integers, e.g. `15000` instead of `15000.0`.
fn serialize_amount<S: Serializer>(amount: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

    if amount.fract() == 0.0 && amount.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*amount as i64)
    } else {
        serializer.serialize_f64(*amount)
    }
}

/// A transaction as it is stored in the transaction table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StoredTransaction {
    /// The ID assigned by the table.
    #[serde(default)]
    pub id: Option<i64>,
    /// When the row was inserted, assigned by the table.
    #[serde(default)]
    pub created_at: Option<String>,
    /// What the money was spent on or earned from.
    pub name: String,
    /// Whether the money was spent or earned.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// The size of the transaction.
    pub amount: f64,
    /// When the transaction happened as an ISO 8601 string.
    #[serde(default)]
    pub date: Option<String>,
}

impl StoredTransaction {
    /// The date to display, `date` if it is set and `created_at` otherwise.
    pub fn display_date(&self) -> Option<&str> {
        self.date
            .as_deref()
            .filter(|date| !date.is_empty())
            .or(self.created_at.as_deref())
    }

    /// The parsed display date, `None` if missing or not ISO 8601.
    pub fn timestamp(&self) -> Option<Timestamp> {
        self.display_date().and_then(Timestamp::parse)
    }

    /// A key that identifies the row in the rendered list.
    pub fn key(&self) -> String {
        match (self.id, &self.created_at) {
            (Some(id), _) => id.to_string(),
            (None, Some(created_at)) => created_at.clone(),
            (None, None) => String::new(),
        }
    }
}
