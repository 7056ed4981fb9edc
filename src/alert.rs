//! Alert messages that htmx swaps into the page's alert container.

use maud::{Markup, html};

/// An alert to show to the user.
#[derive(Debug, Clone, PartialEq)]
pub enum Alert {
    /// An error with a short message and a longer explanation.
    Error { message: String, details: String },
    /// An error with only a short message.
    ErrorSimple { message: String },
}

impl Alert {
    /// Render the alert as an HTML fragment.
    pub fn into_html(self) -> Markup {
        let (message, details) = match self {
            Alert::Error { message, details } => (message, Some(details)),
            Alert::ErrorSimple { message } => (message, None),
        };

        html! {
            div
                role="alert"
                class="flex items-start gap-3 p-4 mb-4 text-sm text-red-800 rounded-lg
                    border border-red-300 bg-red-50 shadow-lg dark:bg-gray-800
                    dark:text-red-400 dark:border-red-800"
            {
                div class="flex-1"
                {
                    p class="font-medium" { (message) }

                    @if let Some(details) = details {
                        span class="block mt-1" { (details) }
                    }
                }

                button
                    type="button"
                    aria-label="Dismiss"
                    onclick="this.closest('[role=alert]').remove()"
                    class="ms-auto -mx-1.5 -my-1.5 rounded-lg p-1.5 inline-flex
                        items-center justify-center h-8 w-8 hover:bg-red-200
                        dark:hover:bg-gray-700"
                {
                    "×"
                }
            }
        }
    }
}
