use maud::{Markup, html};

use crate::{
    endpoints,
    html::{BUTTON_PRIMARY_STYLE, FORM_RADIO_LABEL_STYLE, FORM_TEXT_INPUT_STYLE},
    quick_add::{Draft, SubmissionStatus},
    transaction::TransactionType,
};

/// The ID of the element the form is rendered into.
pub const FORM_CONTAINER_ID: &str = "quick-add";

/// The ID of the element that holds the submission status.
pub const STATUS_ID: &str = "quick-add-status";

/// The htmx trigger for a form that posts itself once the page is shown.
///
/// A prerendered page is not active until the user navigates to it, so the
/// load trigger is skipped while prerendering and the activation event
/// stands in for it.
const AUTO_SUBMIT_TRIGGER: &str =
    "submit, load[!document.prerendering], prerenderingchange from:document";

/// Render the entry form for `draft` with the alert for `status`.
///
/// A successful response replaces the contents of [FORM_CONTAINER_ID] with a
/// new form. An error response only replaces the status, so the fields keep
/// what the user typed.
///
/// With `auto_submit` the browser posts the form by itself as soon as the
/// page becomes active. The forms returned by the endpoint never do.
pub fn quick_add_form(draft: &Draft, status: &SubmissionStatus, auto_submit: bool) -> Markup {
    let target = format!("#{FORM_CONTAINER_ID}");
    let error_target = format!("#{STATUS_ID}");

    html! {
        form
            id="quick-add-form"
            hx-post=(endpoints::TRANSACTIONS_API)
            hx-target=(target)
            hx-swap="innerHTML"
            hx-target-error=(error_target)
            hx-disabled-elt="find input, find button"
            hx-trigger=[auto_submit.then_some(AUTO_SUBMIT_TRIGGER)]
            class="flex flex-col gap-6"
        {
            fieldset class="flex gap-4"
            {
                legend class="sr-only" { "Transaction type" }

                (type_option(TransactionType::Expense, draft.transaction_type, "has-[:checked]:bg-retro-pink"))
                (type_option(TransactionType::Income, draft.transaction_type, "has-[:checked]:bg-green-200"))
            }

            div
            {
                label for="name" class="sr-only" { "Name" }

                input
                    id="name"
                    type="text"
                    name="name"
                    placeholder="What for?"
                    value=(draft.name)
                    autocomplete="off"
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="amount" class="sr-only" { "Amount" }

                input
                    id="amount"
                    type="number"
                    name="amount"
                    step="any"
                    min="0"
                    inputmode="numeric"
                    placeholder="How much?"
                    value=(draft.amount)
                    class={ (FORM_TEXT_INPUT_STYLE) " text-lg font-bold" };
            }

            div id=(STATUS_ID) aria-live="polite"
            {
                @if let Some(alert) = status.alert() {
                    (alert.into_html())
                }
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE)
            {
                span class="htmx-indicator" { "SAVING..." }
                span class="htmx-idle" { "SAVE RECORD" }
            }
        }
    }
}

fn type_option(
    transaction_type: TransactionType,
    selected: TransactionType,
    checked_style: &str,
) -> Markup {
    let id = format!("transaction-type-{}", transaction_type.form_value());
    let label = match transaction_type {
        TransactionType::Expense => "EXPENSE",
        TransactionType::Income => "INCOME",
    };

    html! {
        label for=(id) class={ (FORM_RADIO_LABEL_STYLE) " " (checked_style) }
        {
            input
                id=(id)
                type="radio"
                name="type"
                value=(transaction_type.form_value())
                checked[transaction_type == selected]
                class="sr-only";

            (label)
        }
    }
}
