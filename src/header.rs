//! The header shown at the top of every page.

use maud::{Markup, html};

use crate::endpoints;

/// Render the header with the app name and the navigation links.
///
/// The link matching `active_endpoint` is marked as the current page.
pub fn header_view(active_endpoint: &str) -> Markup {
    let links = [(endpoints::DASHBOARD_VIEW, "Dashboard")];

    // Template adapted from https://flowbite.com/docs/components/navbar/#default-navbar
    html!(
        header class="bg-white border-gray-200 dark:bg-gray-900"
        {
            nav class="max-w-screen-xl flex flex-wrap items-center justify-between mx-auto p-4"
            {
                a href=(endpoints::ROOT) class="flex items-center space-x-3"
                {
                    span
                        class="self-center text-2xl font-semibold whitespace-nowrap dark:text-white"
                    {
                        "Finance Dashboard"
                    }
                }

                ul class="font-medium flex flex-row space-x-8"
                {
                    @for (url, title) in links {
                        @let is_current = url == active_endpoint;

                        li
                        {
                            a
                                href=(url)
                                aria-current=[is_current.then_some("page")]
                                class=(link_style(is_current))
                            {
                                (title)
                            }
                        }
                    }
                }
            }
        }
    )
}

fn link_style(is_current: bool) -> &'static str {
    if is_current {
        "block py-2 px-3 rounded-sm text-blue-700 dark:text-blue-500"
    } else {
        "block py-2 px-3 rounded-sm text-gray-900 hover:text-blue-700 \
        dark:text-white dark:hover:text-blue-500"
    }
}
