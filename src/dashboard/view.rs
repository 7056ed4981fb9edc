//! HTML rendering for the dashboard page.

use maud::{Markup, html};
use unicode_segmentation::UnicodeSegmentation;

use crate::{
    balance::{Balance, parse_amount},
    endpoints,
    format::format_value,
    header::header_view,
    html::{
        BUTTON_DELETE_STYLE, CARD_STYLE, CARD_TOTAL_STYLE, PAGE_CONTAINER_STYLE,
        TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base,
    },
    transaction::{DisplayTransaction, TransactionType},
};

use super::state::DashboardState;

/// The ID of the element that is swapped out after a transaction is deleted.
pub(crate) const DASHBOARD_CONTENT_ID: &str = "dashboard-content";

/// The max number of graphemes to display in the transaction table rows before
/// truncating and displaying ellipses.
const MAX_TITLE_GRAPHEMES: usize = 48;

/// The full dashboard page.
pub(crate) fn dashboard_view(state: &DashboardState) -> Markup {
    let content = html! {
        (header_view(endpoints::DASHBOARD_VIEW))

        main class=(PAGE_CONTAINER_STYLE)
        {
            (dashboard_content_view(state))
        }
    };

    base("Dashboard", &content)
}

/// The balance cards and the transaction table.
///
/// This is also the response to a successful delete, so htmx can replace the
/// old content with it.
pub(crate) fn dashboard_content_view(state: &DashboardState) -> Markup {
    html! {
        div
            id=(DASHBOARD_CONTENT_ID)
            class="w-full max-w-screen-lg space-y-8"
        {
            (balance_cards_view(&state.balance))
            (transactions_table_view(&state.transactions))
        }
    }
}

fn balance_cards_view(balance: &Balance) -> Markup {
    html! {
        section class="grid grid-cols-1 md:grid-cols-3 gap-4"
        {
            (balance_card("Income", "balance-income", &balance.income, CARD_STYLE))
            (balance_card("Outcome", "balance-outcome", &balance.outcome, CARD_STYLE))
            (balance_card("Total", "balance-total", &balance.total, CARD_TOTAL_STYLE))
        }
    }
}

fn balance_card(label: &str, test_id: &str, amount: &str, style: &str) -> Markup {
    html! {
        div class=(style)
        {
            header class="flex justify-between items-center"
            {
                p class="text-base" { (label) }
            }

            h1 class="mt-4 text-3xl font-normal" data-testid=(test_id)
            {
                (format_value(parse_amount(amount)))
            }
        }
    }
}

fn transactions_table_view(transactions: &[DisplayTransaction]) -> Markup {
    html! {
        section class="rounded bg-gray-50 dark:bg-gray-800 overflow-x-auto"
        {
            table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Title" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Value" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                        th scope="col" class=(TABLE_CELL_STYLE) { span class="sr-only" { "Actions" } }
                    }
                }

                tbody
                {
                    @for transaction in transactions {
                        (transaction_row_view(transaction))
                    }

                    @if transactions.is_empty() {
                        tr
                        {
                            td
                                colspan="5"
                                data-empty-state="true"
                                class="px-6 py-4 text-center"
                            {
                                "No transactions yet."
                            }
                        }
                    }
                }
            }
        }
    }
}

fn transaction_row_view(transaction: &DisplayTransaction) -> Markup {
    let (title, full_title) = format_title(&transaction.title);
    let delete_url = endpoints::format_endpoint(
        endpoints::DELETE_TRANSACTION,
        transaction.id.as_str(),
    );
    let value_style = match transaction.kind {
        TransactionType::Income => "text-green-700 dark:text-green-300",
        TransactionType::Outcome => "text-red-700 dark:text-red-300",
    };

    html! {
        tr
            id={ "transaction-" (transaction.id.as_str()) }
            data-transaction-id=(transaction.id.as_str())
            class=(TABLE_ROW_STYLE)
        {
            td class={ "title " (TABLE_CELL_STYLE) } title=[full_title]
            {
                (title)
            }

            td class={ (transaction.kind.as_str()) " " (TABLE_CELL_STYLE) " " (value_style) }
            {
                (transaction.signed_value())
            }

            td class=(TABLE_CELL_STYLE) { (transaction.category.title) }

            td class=(TABLE_CELL_STYLE) { (transaction.formatted_date) }

            td class=(TABLE_CELL_STYLE)
            {
                button
                    type="button"
                    aria-label={ "Delete " (transaction.title) }
                    hx-delete=(delete_url)
                    hx-confirm={ "Are you sure you want to delete '" (transaction.title) "'?" }
                    hx-target={ "#" (DASHBOARD_CONTENT_ID) }
                    hx-target-error="#alert-container"
                    hx-swap="outerHTML"
                    class=(BUTTON_DELETE_STYLE)
                {
                    "Delete"
                }
            }
        }
    }
}

fn format_title(title: &str) -> (String, Option<&str>) {
    let title_length = title.graphemes(true).count();

    if title_length <= MAX_TITLE_GRAPHEMES {
        (title.to_owned(), None)
    } else {
        let truncated: String = title.graphemes(true).take(MAX_TITLE_GRAPHEMES - 3).collect();
        (truncated + "...", Some(title))
    }
}
