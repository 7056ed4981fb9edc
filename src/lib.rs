//! A personal finance dashboard.
//!
//! The dashboard loads transactions and the income, outcome and total balance
//! from a remote finance API and serves them as HTML pages. Transactions can be
//! deleted from the table, after which the balance is patched locally instead
//! of being fetched again.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod alert;
pub mod api;
mod app_state;
pub mod balance;
pub mod dashboard;
pub mod endpoints;
mod error;
mod error_pages;
pub mod format;
mod header;
mod html;
mod logging;
mod routing;
pub mod timezone;
pub mod transaction;

#[cfg(test)]
mod test_utils;

pub use api::{ApiError, HttpTransactionsApi, TransactionsApi, TransactionsResponse};
pub use app_state::AppState;
pub use balance::{Balance, BalancePatchRule};
pub use error::Error;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut terminate) => {
                terminate.recv().await;
            }
            Err(error) => {
                tracing::error!("failed to install terminate signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
