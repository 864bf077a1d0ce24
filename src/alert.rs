//! Alert system for displaying success and error messages to users.
//!
//! Success alerts are transient and remove themselves after
//! [SUCCESS_ALERT_DURATION]. Error alerts stay on the page until they are
//! replaced, e.g. by the next submission.

use std::time::Duration;

use maud::{Markup, html};

/// How long a success alert stays on screen before dismissing itself.
pub const SUCCESS_ALERT_DURATION: Duration = Duration::from_secs(3);

/// An alert message.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// A transient message confirming that an action succeeded.
    Success {
        /// The headline.
        message: String,
        /// Optional extra text, may be empty.
        details: String,
    },
    /// A persistent message explaining that an action failed.
    Error {
        /// The headline.
        message: String,
        /// Optional extra text, may be empty.
        details: String,
    },
}

impl Alert {
    /// Render the alert.
    ///
    /// Success alerts carry a `data-dismiss-after` attribute (milliseconds)
    /// that the page script uses to remove them.
    pub fn into_html(self) -> Markup {
        match self {
            Alert::Success { message, details } => html! {
                div
                    role="status"
                    data-dismiss-after=(SUCCESS_ALERT_DURATION.as_millis())
                    class="alert alert-success bg-green-100 border-2 border-retro-black p-2
                        text-center text-green-800 font-bold text-xs animate-bounce"
                {
                    p { (message) }

                    @if !details.is_empty() {
                        p class="font-normal" { (details) }
                    }
                }
            },
            Alert::Error { message, details } => html! {
                div
                    role="alert"
                    class="alert alert-error bg-red-200 border-2 border-retro-black p-4
                        text-center font-bold text-red-800"
                {
                    p { (message) }

                    @if !details.is_empty() {
                        p class="font-normal text-sm" { (details) }
                    }
                }
            },
        }
    }
}
