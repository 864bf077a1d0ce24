//! The entry page, optionally pre-filled from the query string.

use axum::{
    extract::Query,
    response::{IntoResponse, Response},
};
use maud::{PreEscaped, html};

use crate::{
    endpoints,
    html::{HeadElement, PAGE_CONTAINER_STYLE, base},
    navigation::NavBar,
    quick_add::{
        EntryQuery, SubmissionStatus,
        form::{FORM_CONTAINER_ID, quick_add_form},
    },
};

/// Render the entry page.
///
/// The query string pre-fills the form. Rendering the page never saves
/// anything, so link previews, HEAD requests and prerendering are harmless.
/// With `auto=true` and both a name and an amount, the form posts itself to
/// the form endpoint once the page is shown, and the page drops the query
/// string from the address bar so that reloading does not save it again.
pub async fn get_quick_add_page(Query(query): Query<EntryQuery>) -> Response {
    let draft = query.draft();
    let auto_submit = query.should_auto_submit();

    if auto_submit {
        tracing::debug!("Rendering {draft:?} for auto-submission");
    }

    let nav_bar = NavBar::new(endpoints::QUICK_ADD_VIEW).into_html();
    let form = quick_add_form(&draft, &SubmissionStatus::Idle, auto_submit);

    let content = html! {
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div id=(FORM_CONTAINER_ID) { (form) }
        }
    };

    let head_elements = if auto_submit {
        vec![HeadElement::ScriptSource(PreEscaped(format!(
            "history.replaceState(null, \"\", \"{}\");",
            endpoints::QUICK_ADD_VIEW
        )))]
    } else {
        Vec::new()
    };

    base("Quick Add", &head_elements, &content).into_response()
}
