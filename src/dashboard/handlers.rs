//! Dashboard HTTP handlers.
//!
//! The handlers talk to the finance API, feed the outcome into the reducer and
//! render whatever state results.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};

use crate::{
    AppState, Error,
    api::{ApiError, TransactionsApi},
    dashboard::{
        state::{DashboardEvent, DashboardState, reduce},
        view::{dashboard_content_view, dashboard_view},
    },
    timezone::get_timezone,
    transaction::{TransactionId, to_display},
};

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardPageState<A> {
    /// The client for the finance API.
    pub api: A,
    /// The state behind the dashboard view.
    pub dashboard: Arc<Mutex<DashboardState>>,
    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl<A> FromRef<AppState<A>> for DashboardPageState<A>
where
    A: TransactionsApi,
{
    fn from_ref(state: &AppState<A>) -> Self {
        Self {
            api: state.api.clone(),
            dashboard: state.dashboard.clone(),
            local_timezone: state.local_timezone.clone(),
        }
    }
}

/// The state needed for deleting a transaction.
#[derive(Debug, Clone)]
pub struct DeleteTransactionState<A> {
    /// The client for the finance API.
    pub api: A,
    /// The state behind the dashboard view.
    pub dashboard: Arc<Mutex<DashboardState>>,
}

impl<A> FromRef<AppState<A>> for DeleteTransactionState<A>
where
    A: TransactionsApi,
{
    fn from_ref(state: &AppState<A>) -> Self {
        Self {
            api: state.api.clone(),
            dashboard: state.dashboard.clone(),
        }
    }
}

/// Display the balance summary and the transaction table.
///
/// Every request loads fresh data from the finance API. If that fails, the
/// dashboard state is left as it was and the error page is shown.
pub async fn get_dashboard_page<A>(
    State(state): State<DashboardPageState<A>>,
) -> Result<Response, Error>
where
    A: TransactionsApi,
{
    let timezone = get_timezone(&state.local_timezone)
        .ok_or_else(|| Error::InvalidTimezoneError(state.local_timezone.clone()))?;

    let response = state
        .api
        .list_transactions()
        .await
        .inspect_err(|error| tracing::error!("could not load the dashboard data: {error}"))?;

    tracing::debug!(
        "loaded {} transactions from the finance API",
        response.transactions.len()
    );

    let transactions = response
        .transactions
        .into_iter()
        .map(|transaction| to_display(transaction, timezone))
        .collect();

    let snapshot = apply_event(
        &state.dashboard,
        DashboardEvent::DataLoaded {
            transactions,
            balance: response.balance,
        },
    )?;

    Ok(dashboard_view(&snapshot).into_response())
}

/// A route handler for deleting a transaction.
///
/// Responds with the updated dashboard content on success, or an alert
/// otherwise.
pub async fn delete_transaction_endpoint<A>(
    State(state): State<DeleteTransactionState<A>>,
    Path(transaction_id): Path<TransactionId>,
) -> Response
where
    A: TransactionsApi,
{
    match delete_transaction(&state.api, &state.dashboard, transaction_id).await {
        Ok(snapshot) => dashboard_content_view(&snapshot).into_response(),
        Err(error) => error.into_alert_response(),
    }
}

/// Ask the finance API to delete the transaction `id` and update the
/// dashboard state with the outcome.
///
/// The lock on `dashboard` is only held to apply the outcome, so deletes that
/// overlap are applied in the order they complete.
///
/// # Errors
/// Returns [Error::DeleteMissingTransaction] if the finance API does not know
/// the transaction, [Error::DeleteTransactionFailed] for any other API error,
/// and [Error::StateLockError] if the dashboard state lock is poisoned.
pub async fn delete_transaction<A>(
    api: &A,
    dashboard: &Mutex<DashboardState>,
    id: TransactionId,
) -> Result<DashboardState, Error>
where
    A: TransactionsApi,
{
    match api.delete_transaction(&id).await {
        Ok(()) => {
            tracing::info!("deleted transaction {id}");
            apply_event(dashboard, DashboardEvent::DeleteSucceeded { id })
        }
        Err(error) => {
            tracing::error!("could not delete transaction {id}: {error}");
            apply_event(
                dashboard,
                DashboardEvent::DeleteFailed {
                    id,
                    reason: error.to_string(),
                },
            )?;

            Err(match error {
                ApiError::NotFound(_) => Error::DeleteMissingTransaction,
                error => Error::DeleteTransactionFailed(error),
            })
        }
    }
}

/// Reduce `event` into the shared state and return a copy of the new state
/// for rendering.
fn apply_event(
    dashboard: &Mutex<DashboardState>,
    event: DashboardEvent,
) -> Result<DashboardState, Error> {
    let mut dashboard = dashboard
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire dashboard state lock: {error}"))
        .map_err(|_| Error::StateLockError)?;

    *dashboard = reduce(std::mem::take(&mut *dashboard), event);

    Ok(dashboard.clone())
}
