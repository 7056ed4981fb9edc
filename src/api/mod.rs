//! The client side of the remote finance API that owns transactions and
//! balances.
//!
//! Handlers only talk to the API through [TransactionsApi] so that tests can
//! swap in an in-memory implementation.

mod http;

use std::future::Future;

use serde::{Deserialize, Serialize};

pub use http::HttpTransactionsApi;

use crate::{balance::Balance, transaction::Transaction, transaction::TransactionId};

/// The body of `GET /transactions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionsResponse {
    /// Every transaction the API knows about.
    pub transactions: Vec<Transaction>,
    /// The totals over `transactions`.
    pub balance: Balance,
}

/// The errors that may occur while talking to the finance API.
///
/// All kinds are handled the same way by the dashboard, apart from
/// [ApiError::NotFound] which gets a more specific message.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request could not be sent or no response was received, e.g. the
    /// connection was refused or timed out.
    #[error("request failed: {0}")]
    Request(String),

    /// The API responded with 404 Not Found.
    #[error("not found: {0}")]
    NotFound(String),

    /// The API responded with any other non-success status code.
    #[error("unexpected status {0}: {1}")]
    Status(u16, String),

    /// The response body did not have the expected shape.
    #[error("could not parse the response: {0}")]
    Deserialization(String),
}

/// The operations the dashboard needs from the finance API.
pub trait TransactionsApi: Clone + Send + Sync + 'static {
    /// Fetch all transactions together with the balance in one request.
    fn list_transactions(
        &self,
    ) -> impl Future<Output = Result<TransactionsResponse, ApiError>> + Send;

    /// Delete the transaction with the ID `id`.
    ///
    /// Issues exactly one request and never retries.
    fn delete_transaction(
        &self,
        id: &TransactionId,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;
}
