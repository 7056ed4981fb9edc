use std::time::Duration;

use reqwest::{Client, Response, StatusCode, Url};

use crate::{
    Error,
    api::{ApiError, TransactionsApi, TransactionsResponse},
    transaction::TransactionId,
};

/// A [TransactionsApi] that talks to the finance API over HTTP.
#[derive(Debug, Clone)]
pub struct HttpTransactionsApi {
    http_client: Client,
    base_url: Url,
}

impl HttpTransactionsApi {
    /// Create a client for the API hosted at `base_url`, e.g.
    /// "http://localhost:3333".
    ///
    /// Requests that take longer than `timeout` fail with
    /// [ApiError::Request].
    ///
    /// # Errors
    /// Returns [Error::InvalidApiUrl] if `base_url` is not an absolute HTTP
    /// URL, or [Error::HttpClientError] if the HTTP client cannot be built.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, Error> {
        let base_url = Url::parse(base_url)
            .map_err(|error| Error::InvalidApiUrl(format!("{base_url}: {error}")))?;

        if base_url.cannot_be_a_base() || !matches!(base_url.scheme(), "http" | "https") {
            return Err(Error::InvalidApiUrl(base_url.to_string()));
        }

        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|error| Error::HttpClientError(error.to_string()))?;

        Ok(Self {
            http_client,
            base_url,
        })
    }

    /// Build the URL for `/transactions` followed by `segments`.
    fn transactions_url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();

        // `new` rejects URLs that cannot be a base, so the path is always editable.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().push("transactions").extend(segments);
        }

        url
    }

    async fn handle_error_response(response: Response) -> ApiError {
        let status = response.status();
        let body_text = response.text().await.unwrap_or_default();

        match status {
            StatusCode::NOT_FOUND => ApiError::NotFound(body_text),
            status => {
                tracing::warn!("finance API responded with {status}: {body_text}");
                ApiError::Status(status.as_u16(), body_text)
            }
        }
    }
}

impl TransactionsApi for HttpTransactionsApi {
    async fn list_transactions(&self) -> Result<TransactionsResponse, ApiError> {
        let url = self.transactions_url(&[]);
        tracing::debug!("GET {url}");

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|error| ApiError::Request(error.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::handle_error_response(response).await);
        }

        response
            .json::<TransactionsResponse>()
            .await
            .map_err(|error| ApiError::Deserialization(error.to_string()))
    }

    async fn delete_transaction(&self, id: &TransactionId) -> Result<(), ApiError> {
        let url = self.transactions_url(&[id.as_str()]);
        tracing::debug!("DELETE {url}");

        let response = self
            .http_client
            .delete(url)
            .send()
            .await
            .map_err(|error| ApiError::Request(error.to_string()))?;

        if !response.status().is_success() {
            return Err(Self::handle_error_response(response).await);
        }

        Ok(())
    }
}
