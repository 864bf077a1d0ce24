use maud::{DOCTYPE, Markup, PreEscaped, html};

/// The name of the app shown in page titles.
pub const APP_NAME: &str = "Catatan Keuangan";

// Link styles
pub const LINK_STYLE: &str = "flex items-center gap-2 text-sm font-bold text-gray-600 \
    hover:text-black";

// Button styles
pub const BUTTON_PRIMARY_STYLE: &str = "btn-retro w-full flex items-center justify-center \
    gap-2 mt-4 bg-retro-black text-white hover:bg-gray-800 active:bg-black \
    disabled:opacity-60";

// Form styles
pub const FORM_TEXT_INPUT_STYLE: &str = "input-retro w-full border-2 border-retro-black \
    rounded-retro p-3 bg-white disabled:opacity-60";
pub const FORM_RADIO_LABEL_STYLE: &str = "flex-1 cursor-pointer border-2 \
    border-retro-black p-3 rounded-retro text-center font-bold transition-all \
    bg-white shadow-retro-sm opacity-60 hover:opacity-100 \
    has-[:checked]:opacity-100 has-[:checked]:shadow-retro";

// Card styles
pub const CARD_STYLE: &str = "border-2 border-retro-black p-3 rounded-retro";

// Page container
pub const PAGE_CONTAINER_STYLE: &str = "flex flex-col gap-4";

/// Elements to add to the `<head>` of a page.
pub enum HeadElement {
    /// JavaScript source code.
    ScriptSource(PreEscaped<String>),
}

const DISMISS_ALERTS_SCRIPT: &str = r#"
    function dismissAfterDelay(alert) {
        var delay = parseInt(alert.dataset.dismissAfter, 10);
        setTimeout(function () { alert.remove(); }, delay);
    }

    function dismissAlerts(root) {
        if (root.matches && root.matches("[data-dismiss-after]")) {
            dismissAfterDelay(root);
        }
        root.querySelectorAll("[data-dismiss-after]").forEach(dismissAfterDelay);
    }

    document.addEventListener("DOMContentLoaded", function () { dismissAlerts(document); });
    document.addEventListener("htmx:load", function (event) { dismissAlerts(event.target); });
"#;

/// The shared page layout, a retro window with a title bar and a status bar.
pub fn base(title: &str, head_elements: &[HeadElement], content: &Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="id"
        {
            head
            {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " - " (APP_NAME) }
                link href="/static/main.css" rel="stylesheet";

                script src="https://unpkg.com/htmx.org@2.0.8/dist/htmx.min.js" {}
                script src="https://unpkg.com/htmx-ext-response-targets@2.0.4/dist/response-targets.js" {}

                style
                {
                    r#"
                    .htmx-indicator {
                        display: none;
                    }

                    .htmx-request .htmx-indicator {
                        display: inline;
                    }

                    .htmx-request .htmx-idle {
                        display: none;
                    }
                    "#
                }

                script { (PreEscaped(DISMISS_ALERTS_SCRIPT)) }

                @for element in head_elements
                {
                    @match element
                    {
                        HeadElement::ScriptSource(text) => script { (text) }
                    }
                }
            }

            body
                hx-ext="response-targets"
                class="bg-retro-pink font-mono"
            {
                div class="flex flex-col items-center justify-center min-h-screen p-4 sm:p-8"
                {
                    div
                        class="w-full max-w-md bg-retro-beige border-2 border-retro-black
                            shadow-retro rounded-retro overflow-hidden flex flex-col
                            h-[80vh] sm:h-[600px]"
                    {
                        header
                            class="bg-white border-b-2 border-retro-black p-3 flex
                                items-center justify-between"
                        {
                            div class="flex gap-2"
                            {
                                div class="w-3 h-3 rounded-full bg-red-400 border border-retro-black" {}
                                div class="w-3 h-3 rounded-full bg-yellow-400 border border-retro-black" {}
                                div class="w-3 h-3 rounded-full bg-green-400 border border-retro-black" {}
                            }

                            h1 class="font-bold uppercase tracking-wider text-sm" { (title) }

                            div class="w-8" {}
                        }

                        main class="flex-1 overflow-auto p-4 sm:p-6 bg-retro-beige"
                        {
                            (content)
                        }

                        footer
                            class="border-t-2 border-retro-black p-2 bg-retro-pink/20
                                text-xs text-center"
                        {
                            span class="opacity-60" { "RETRO FINANCE OS v1.0" }
                        }
                    }
                }
            }
        }
    }
}

pub fn error_view(title: &str, header: &str, description: &str, fix: &str) -> Markup {
    let content = html!(
        section class="flex flex-col items-center text-center gap-4 py-8"
        {
            p class="text-7xl font-extrabold" { (header) }

            p class="text-2xl font-bold" { (description) }

            p class="text-base" { (fix) }

            a href="/" class=(BUTTON_PRIMARY_STYLE) { "Back to Homepage" }
        }
    );

    base(title, &[], &content)
}

pub fn loading_spinner() -> Markup {
    // Spinner SVG adapted from https://flowbite.com/docs/components/spinner/
    html! {
        svg
            aria-hidden="true"
            role="status"
            class="inline w-8 h-8 animate-spin"
            viewBox="0 0 100 101"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
        {
            path
                d="M100 50.5908C100 78.2051 77.6142 100.591 50 100.591C22.3858 100.591 0 78.2051 0 50.5908C0 22.9766 22.3858 0.59082 50 0.59082C77.6142 0.59082 100 22.9766 100 50.5908ZM9.08144 50.5908C9.08144 73.1895 27.4013 91.5094 50 91.5094C72.5987 91.5094 90.9186 73.1895 90.9186 50.5908C90.9186 27.9921 72.5987 9.67226 50 9.67226C27.4013 9.67226 9.08144 27.9921 9.08144 50.5908Z"
                fill="#E5E7EB" {}
            path
                d="M93.9676 39.0409C96.393 38.4038 97.8624 35.9116 97.0079 33.5539C95.2932 28.8227 92.871 24.3692 89.8167 20.348C85.8452 15.1192 80.8826 10.7238 75.2124 7.41289C69.5422 4.10194 63.2754 1.94025 56.7698 1.05124C51.7666 0.367541 46.6976 0.446843 41.7345 1.27873C39.2613 1.69328 37.813 4.19778 38.4501 6.62326C39.0873 9.04874 41.5694 10.4717 44.0505 10.1071C47.8511 9.54855 51.7191 9.52689 55.5402 10.0491C60.8642 10.7766 65.9928 12.5457 70.6331 15.2552C75.2735 17.9648 79.3347 21.5619 82.5849 25.841C84.9175 28.9121 86.7997 32.2913 88.1811 35.8758C89.083 38.2158 91.5421 39.6781 93.9676 39.0409Z"
                fill="currentColor" {}
        }
    }
}

/// A link with bold text, e.g. for moving between the two views.
pub fn link(url: &str, text: &str) -> Markup {
    html! (
        a href=(url) class=(LINK_STYLE) { (text) }
    )
}
