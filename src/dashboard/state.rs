//! The state behind the dashboard view and the reducer that is the only way
//! to change it.

use crate::{
    balance::{Balance, BalancePatchRule},
    transaction::{DisplayTransaction, TransactionId},
};

/// Everything the dashboard view renders.
///
/// Starts out empty and becomes loaded once the first [DashboardEvent::DataLoaded]
/// has been reduced. There is no way back to the empty state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    /// The transactions to list, in the order the finance API sent them.
    pub transactions: Vec<DisplayTransaction>,
    /// The income, outcome and total summary.
    pub balance: Balance,
    /// Whether data has been loaded from the finance API at least once.
    pub loaded: bool,
    /// How the balance is patched when a transaction is deleted.
    pub patch_rule: BalancePatchRule,
}

impl DashboardState {
    /// Create an empty dashboard state that patches the balance with `patch_rule`.
    pub fn new(patch_rule: BalancePatchRule) -> Self {
        Self {
            patch_rule,
            ..Default::default()
        }
    }
}

/// Things that happen to the dashboard.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEvent {
    /// The transactions and balance were fetched from the finance API.
    DataLoaded {
        transactions: Vec<DisplayTransaction>,
        balance: Balance,
    },
    /// The finance API deleted the transaction `id`.
    DeleteSucceeded { id: TransactionId },
    /// The finance API could not delete the transaction `id`.
    DeleteFailed { id: TransactionId, reason: String },
}

/// Compute the dashboard state after `event`.
///
/// A successful delete removes the first transaction with a matching ID and
/// patches the balance with the state's [BalancePatchRule]. A delete of an
/// ID that is not in the state, or a failed delete, leaves the state as is.
pub fn reduce(state: DashboardState, event: DashboardEvent) -> DashboardState {
    match event {
        DashboardEvent::DataLoaded {
            transactions,
            balance,
        } => DashboardState {
            transactions,
            balance,
            loaded: true,
            patch_rule: state.patch_rule,
        },
        DashboardEvent::DeleteSucceeded { id } => remove_transaction(state, &id),
        DashboardEvent::DeleteFailed { id, reason } => {
            tracing::debug!("keeping transaction {id} on the dashboard, delete failed: {reason}");
            state
        }
    }
}

fn remove_transaction(mut state: DashboardState, id: &TransactionId) -> DashboardState {
    let Some(position) = state
        .transactions
        .iter()
        .position(|transaction| transaction.id == *id)
    else {
        tracing::warn!("transaction {id} was deleted but is not on the dashboard");
        return state;
    };

    let deleted = state.transactions.remove(position);
    state.balance = state
        .patch_rule
        .apply(&state.balance, deleted.kind, deleted.value);

    state
}
