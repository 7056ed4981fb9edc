use std::sync::{Arc, Mutex};

use crate::{
    api::{ApiError, TransactionsApi, TransactionsResponse},
    balance::Balance,
    transaction::TransactionId,
};

/// An in-memory stand-in for the finance API.
///
/// Deleting removes the transaction from the stored response, so a later
/// listing no longer includes it. The balance is left alone, like the real
/// API leaves it to the dashboard to patch.
#[derive(Debug, Clone)]
pub(crate) struct FakeTransactionsApi {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug)]
struct Inner {
    response: TransactionsResponse,
    list_error: Option<ApiError>,
    delete_error: Option<ApiError>,
    list_calls: usize,
    delete_calls: usize,
    deleted_ids: Vec<TransactionId>,
}

impl Default for FakeTransactionsApi {
    fn default() -> Self {
        Self::with_response(TransactionsResponse {
            transactions: Vec::new(),
            balance: Balance::default(),
        })
    }
}

impl FakeTransactionsApi {
    pub(crate) fn with_response(response: TransactionsResponse) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                response,
                list_error: None,
                delete_error: None,
                list_calls: 0,
                delete_calls: 0,
                deleted_ids: Vec::new(),
            })),
        }
    }

    /// Make every following listing fail with `error`.
    pub(crate) fn fail_list_with(&self, error: ApiError) {
        self.inner.lock().unwrap().list_error = Some(error);
    }

    /// Make every following delete fail with `error`.
    pub(crate) fn fail_delete_with(&self, error: ApiError) {
        self.inner.lock().unwrap().delete_error = Some(error);
    }

    pub(crate) fn list_calls(&self) -> usize {
        self.inner.lock().unwrap().list_calls
    }

    pub(crate) fn delete_calls(&self) -> usize {
        self.inner.lock().unwrap().delete_calls
    }

    pub(crate) fn deleted_ids(&self) -> Vec<TransactionId> {
        self.inner.lock().unwrap().deleted_ids.clone()
    }
}

impl TransactionsApi for FakeTransactionsApi {
    async fn list_transactions(&self) -> Result<TransactionsResponse, ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.list_calls += 1;

        match &inner.list_error {
            Some(error) => Err(error.clone()),
            None => Ok(inner.response.clone()),
        }
    }

    async fn delete_transaction(&self, id: &TransactionId) -> Result<(), ApiError> {
        let mut inner = self.inner.lock().unwrap();
        inner.delete_calls += 1;

        if let Some(error) = &inner.delete_error {
            return Err(error.clone());
        }

        let Some(position) = inner
            .response
            .transactions
            .iter()
            .position(|transaction| transaction.id == *id)
        else {
            return Err(ApiError::NotFound(format!("no transaction with id {id}")));
        };

        inner.response.transactions.remove(position);
        inner.deleted_ids.push(id.clone());

        Ok(())
    }
}
