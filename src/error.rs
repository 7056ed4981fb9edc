//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    alert::Alert,
    api::ApiError,
    error_pages::{InternalServerErrorPage, NotFoundPage},
};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An error occurred while getting the local timezone from a canonical timezone string.
    #[error("invalid timezone {0}")]
    InvalidTimezoneError(String),

    /// The base URL of the finance API is not an absolute HTTP(S) URL.
    #[error("invalid finance API URL {0}")]
    InvalidApiUrl(String),

    /// The HTTP client for the finance API could not be created.
    #[error("could not create the HTTP client: {0}")]
    HttpClientError(String),

    /// A request to the finance API failed.
    ///
    /// The error string should only be logged for debugging on the server.
    #[error("the finance API request failed: {0}")]
    Api(#[from] ApiError),

    /// The finance API does not know the transaction that was to be deleted.
    #[error("tried to delete a transaction that does not exist")]
    DeleteMissingTransaction,

    /// The finance API failed to delete a transaction.
    #[error("could not delete the transaction: {0}")]
    DeleteTransactionFailed(ApiError),

    /// Could not acquire the lock on the dashboard state.
    #[error("could not acquire the dashboard state lock")]
    StateLockError,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => NotFoundPage.into_response(),
            Error::InvalidTimezoneError(timezone) => InternalServerErrorPage {
                description: "Invalid Timezone Settings",
                fix: &format!(
                    "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                ),
            }
            .into_response(),
            // Logged where the request failed.
            Error::Api(_) => InternalServerErrorPage {
                description: "Could not load your transactions",
                fix: "The finance service did not respond as expected. Try again later.",
            }
            .into_response(),
            Error::StateLockError => InternalServerErrorPage::default().into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerErrorPage::default().into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into an HTTP response with an HTML alert.
    pub fn into_alert_response(self) -> Response {
        let (status_code, alert) = match self {
            Error::DeleteMissingTransaction => (
                StatusCode::NOT_FOUND,
                Alert::Error {
                    message: "Could not delete transaction".to_owned(),
                    details: "The transaction could not be found. \
                    Try refreshing the page to see if the transaction has already been deleted."
                        .to_owned(),
                },
            ),
            Error::DeleteTransactionFailed(_) => (
                StatusCode::BAD_GATEWAY,
                Alert::Error {
                    message: "Could not delete transaction".to_owned(),
                    details: "An unexpected error occurred. \
                    Try again later or check the logs on the server."
                        .to_owned(),
                },
            ),
            Error::InvalidTimezoneError(timezone) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::Error {
                    message: "Invalid Timezone Settings".to_owned(),
                    details: format!(
                        "Could not get local timezone \"{timezone}\". Check your server settings and \
                    ensure the timezone has been set to valid, canonical timezone string"
                    ),
                },
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Alert::ErrorSimple {
                    message: "Something went wrong".to_owned(),
                },
            ),
        };

        (status_code, alert.into_html()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::{
        api::ApiError,
        test_utils::{assert_valid_html, capture_logs, parse_html_fragment},
    };

    use super::Error;

    #[tokio::test]
    async fn missing_transaction_alert_is_not_found() {
        let response = Error::DeleteMissingTransaction.into_alert_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let html = parse_html_fragment(response).await;
        assert_valid_html(&html);
        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("Could not delete transaction"));
        assert!(text.contains("already been deleted"));
    }

    #[tokio::test]
    async fn failed_delete_alert_is_bad_gateway() {
        let response =
            Error::DeleteTransactionFailed(ApiError::Request("timed out".to_owned()))
                .into_alert_response();

        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
        let html = parse_html_fragment(response).await;
        let text = html.root_element().text().collect::<String>();
        assert!(text.contains("Could not delete transaction"));
        assert!(!text.contains("timed out"), "internal details should not be shown");
    }

    #[test]
    fn api_error_page_is_internal_server_error() {
        let (logs, _guard) = capture_logs();

        let response = Error::Api(ApiError::Status(503, "down".to_owned())).into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(logs.error_count(), 0, "the API error was already logged");
    }

    #[test]
    fn not_found_page_is_not_found() {
        assert_eq!(Error::NotFound.into_response().status(), StatusCode::NOT_FOUND);
    }
}
