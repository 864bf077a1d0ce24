use crate::transaction::{StoredTransaction, TransactionType};

/// The sums shown at the top of the report.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    /// The sum of all expense amounts.
    pub expense: f64,
    /// The sum of all income amounts.
    pub income: f64,
}

impl Totals {
    /// Sum `transactions` by type.
    pub fn from_transactions(transactions: &[StoredTransaction]) -> Self {
        transactions
            .iter()
            .fold(Self::default(), |mut totals, transaction| {
                match transaction.transaction_type {
                    TransactionType::Expense => totals.expense += transaction.amount,
                    TransactionType::Income => totals.income += transaction.amount,
                }

                totals
            })
    }

    /// Income minus expenses.
    pub fn balance(&self) -> f64 {
        self.income - self.expense
    }
}
