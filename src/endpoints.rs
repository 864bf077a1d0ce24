//! The API endpoints URIs.

/// The root route which redirects to the quick add page.
pub const ROOT: &str = "/";
/// The page for recording a new income or expense.
pub const QUICK_ADD_VIEW: &str = "/quick-add";
/// The page listing all recorded transactions with their totals.
pub const REPORT_VIEW: &str = "/report";
/// The page to display when an internal server error occurs.
pub const INTERNAL_ERROR_VIEW: &str = "/error";
/// The route for static files.
pub const STATIC: &str = "/static";

/// The route for submitting a new transaction.
pub const TRANSACTIONS_API: &str = "/api/transactions";
/// The route for the report fragment (totals and transaction list).
pub const REPORT_API: &str = "/api/report";
