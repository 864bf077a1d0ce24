//! The report view: every saved transaction with totals.
//!
//! This module contains:
//! - The [TransactionTable] client that reads the saved transactions
//! - The [Totals] shown above the list
//! - The rendering of the four report states and the page handlers

mod page;
mod table;
mod totals;
mod view;

pub use page::{get_report_fragment, get_report_page};
pub use table::TransactionTable;
pub use totals::Totals;
pub use view::{ReportState, report_view};
