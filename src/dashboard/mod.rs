//! Dashboard module
//!
//! Shows the income, outcome and total balance cards above a table of every
//! transaction, each with a button to delete it.

mod handlers;
mod state;
mod view;

pub use handlers::{
    DashboardPageState, DeleteTransactionState, delete_transaction,
    delete_transaction_endpoint, get_dashboard_page,
};
pub use state::{DashboardEvent, DashboardState, reduce};
