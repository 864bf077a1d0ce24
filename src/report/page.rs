//! The report page and the fragment it loads.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Redirect, Response},
};
use axum_htmx::HxRequest;
use maud::html;
use time::UtcOffset;

use crate::{
    AppState, Error, endpoints,
    html::{PAGE_CONTAINER_STYLE, base, link},
    navigation::NavBar,
    report::{ReportState, TransactionTable, report_view},
    timezone::get_local_offset,
};

/// The state needed for the report.
#[derive(Debug, Clone)]
pub struct ReportPageState {
    /// Reads the transactions, `None` if no table is configured.
    pub table: Option<TransactionTable>,
    /// The local timezone as a canonical timezone name, e.g. "Asia/Jakarta".
    pub local_timezone: String,
}

impl FromRef<AppState> for ReportPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            table: state.table.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

impl ReportPageState {
    fn local_offset(&self) -> Result<UtcOffset, Error> {
        get_local_offset(&self.local_timezone).ok_or_else(|| {
            tracing::error!(
                "could not get local time offset from timezone {}",
                &self.local_timezone
            );
            Error::InvalidTimezoneError(self.local_timezone.clone())
        })
    }
}

/// Render the report page in the loading state.
///
/// The page fetches the transactions from [get_report_fragment] once it has
/// loaded.
pub async fn get_report_page(State(state): State<ReportPageState>) -> Result<Response, Error> {
    let local_offset = state.local_offset()?;
    let nav_bar = NavBar::new(endpoints::REPORT_VIEW).into_html();

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            (link(endpoints::QUICK_ADD_VIEW, "BACK TO ADD"))

            (report_view(&ReportState::Loading, local_offset))
        }
    };

    Ok(base("Laporan Keuangan", &[], &content).into_response())
}

/// Fetch the transactions and render the report in the resulting state.
///
/// Fetch failures are rendered as the error state, not as an error status,
/// so that htmx swaps the result in like any other state. Requests that do
/// not come from htmx are redirected to the report page.
pub async fn get_report_fragment(
    State(state): State<ReportPageState>,
    HxRequest(is_htmx_request): HxRequest,
) -> Result<Response, Error> {
    if !is_htmx_request {
        return Ok(Redirect::to(endpoints::REPORT_VIEW).into_response());
    }

    let local_offset = state.local_offset()?;

    let result = match &state.table {
        Some(table) => table.fetch_all().await,
        None => Err(Error::TableNotConfigured),
    };

    if let Ok(transactions) = &result {
        tracing::debug!("Fetched {} transactions", transactions.len());
    }

    Ok(report_view(&ReportState::from_fetch(result), local_offset).into_response())
}
