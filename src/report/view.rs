use std::cmp::Reverse;

use maud::{Markup, html};
use time::UtcOffset;

use crate::{
    Error, endpoints,
    alert::Alert,
    format::{format_date, format_rupiah},
    html::{CARD_STYLE, loading_spinner},
    report::Totals,
    transaction::{StoredTransaction, TransactionType},
};

/// The ID of the element that holds the report.
pub const REPORT_CONTAINER_ID: &str = "report";

/// What the report is currently showing. Exactly one state is shown at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportState {
    /// The transactions are being fetched.
    Loading,
    /// The transactions could not be fetched.
    Error(Alert),
    /// The table has no transactions.
    Empty,
    /// The transactions, newest first.
    Populated(Vec<StoredTransaction>),
}

impl ReportState {
    /// The state for the result of a fetch.
    ///
    /// The rows are sorted newest first regardless of the order they arrived
    /// in. Rows without a parseable date go last.
    pub fn from_fetch(result: Result<Vec<StoredTransaction>, Error>) -> Self {
        match result {
            Ok(transactions) if transactions.is_empty() => ReportState::Empty,
            Ok(mut transactions) => {
                sort_newest_first(&mut transactions);
                ReportState::Populated(transactions)
            }
            Err(error) => ReportState::Error(error.alert()),
        }
    }

    fn transactions(&self) -> &[StoredTransaction] {
        match self {
            ReportState::Populated(transactions) => transactions,
            _ => &[],
        }
    }
}

fn sort_newest_first(transactions: &mut [StoredTransaction]) {
    transactions.sort_by_cached_key(|transaction| {
        Reverse(transaction.timestamp().map(|timestamp| timestamp.sort_key()))
    });
}

/// Render the report for `state`. Dates are shown as seen from `local_offset`.
///
/// In the loading state the container fetches the other states from the
/// report API as soon as it is loaded and replaces itself with the result.
pub fn report_view(state: &ReportState, local_offset: UtcOffset) -> Markup {
    let transactions = state.transactions();
    let totals = Totals::from_transactions(transactions);
    let is_loading = matches!(state, ReportState::Loading);

    html! {
        div
            id=(REPORT_CONTAINER_ID)
            class="flex flex-col gap-4"
            hx-get=[is_loading.then_some(endpoints::REPORT_API)]
            hx-trigger=[is_loading.then_some("load")]
            hx-swap=[is_loading.then_some("outerHTML")]
        {
            (summary_cards(&totals))
            (balance_card(totals.balance()))

            section class="mt-2"
            {
                div
                    class="flex items-center justify-between mb-3 border-b-2
                        border-retro-black pb-2"
                {
                    h2 class="font-bold text-lg" { "HISTORY" }

                    div
                        data-testid="item-count"
                        class="text-xs font-bold bg-retro-black text-white px-2 py-1 rounded"
                    {
                        (transactions.len()) " ITEMS"
                    }
                }

                @match state {
                    ReportState::Loading => {
                        div
                            data-state="loading"
                            class="flex justify-center items-center py-10 opacity-50"
                        {
                            (loading_spinner())
                        }
                    }
                    ReportState::Error(alert) => {
                        div data-state="error" { (alert.clone().into_html()) }
                    }
                    ReportState::Empty => {
                        p data-state="empty" class="text-center py-10 opacity-50 italic"
                        {
                            "No transactions found."
                        }
                    }
                    ReportState::Populated(transactions) => {
                        ul data-state="populated" class="flex flex-col gap-3"
                        {
                            @for transaction in transactions {
                                (transaction_row(transaction, local_offset))
                            }
                        }
                    }
                }
            }
        }
    }
}

fn summary_cards(totals: &Totals) -> Markup {
    html! {
        div class="grid grid-cols-2 gap-3"
        {
            div data-testid="total-expense" class={ (CARD_STYLE) " bg-red-100 shadow-retro-sm" }
            {
                span class="text-xs font-bold uppercase text-red-600 block mb-1" { "Expense" }
                div class="font-bold text-lg leading-tight" { (format_rupiah(totals.expense)) }
            }

            div data-testid="total-income" class={ (CARD_STYLE) " bg-green-100 shadow-retro-sm" }
            {
                span class="text-xs font-bold uppercase text-green-600 block mb-1" { "Income" }
                div class="font-bold text-lg leading-tight" { (format_rupiah(totals.income)) }
            }
        }
    }
}

fn balance_card(balance: f64) -> Markup {
    let colour = if balance >= 0.0 {
        "bg-blue-100"
    } else {
        "bg-orange-100"
    };

    html! {
        div
            data-testid="balance"
            class={ (CARD_STYLE) " shadow-retro text-center " (colour) }
        {
            span class="text-xs font-bold uppercase block mb-1" { "Net Balance" }
            span class="font-black text-2xl tracking-tight" { (format_rupiah(balance)) }
        }
    }
}

fn transaction_row(transaction: &StoredTransaction, local_offset: UtcOffset) -> Markup {
    let date = transaction
        .display_date()
        .map(|date| format_date(date, local_offset))
        .unwrap_or_default();
    let (sign, amount_style) = match transaction.transaction_type {
        TransactionType::Expense => ("-", "text-red-500"),
        TransactionType::Income => ("+", "text-green-500"),
    };

    html! {
        li
            data-key=(transaction.key())
            class="bg-white border-2 border-retro-black p-3 rounded-retro shadow-retro-sm
                flex justify-between items-center hover:translate-x-1 transition-transform"
        {
            div class="flex flex-col"
            {
                span class="font-bold text-gray-800" { (transaction.name) }
                span class="text-xs text-gray-500 font-mono" { (date) }
            }

            div class={ "font-bold font-mono text-lg " (amount_style) }
            {
                (sign) (format_rupiah(transaction.amount))
            }
        }
    }
}
