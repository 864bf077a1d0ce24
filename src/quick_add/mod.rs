//! The entry view: a form for recording one income or expense.
//!
//! This module contains:
//! - The [Draft] held by the form and the [EntryQuery] that can pre-fill it
//! - The [submit] routine shared by the form endpoint and auto-submit
//! - The page handler and the endpoint the form posts to, also when it
//!   auto-submits

mod draft;
mod endpoint;
mod form;
mod page;
mod submission;

pub use draft::{Draft, EntryQuery};
pub use endpoint::create_transaction_endpoint;
pub use page::get_quick_add_page;
pub use submission::{SubmissionStatus, submit};
