//! Implements a struct that holds the state of the web server.

use std::sync::{Arc, Mutex};

use crate::{
    Error,
    api::TransactionsApi,
    balance::BalancePatchRule,
    dashboard::DashboardState,
    timezone::get_timezone,
};

/// The state of the web server.
#[derive(Debug, Clone)]
pub struct AppState<A>
where
    A: TransactionsApi,
{
    /// The client for the finance API.
    pub api: A,

    /// The state behind the dashboard view, shared by all requests.
    pub dashboard: Arc<Mutex<DashboardState>>,

    /// The local timezone as a canonical timezone name, e.g. "Pacific/Auckland".
    pub local_timezone: String,
}

impl<A> AppState<A>
where
    A: TransactionsApi,
{
    /// Create a new [AppState] with an empty dashboard.
    ///
    /// `local_timezone` should be a valid, canonical timezone name, e.g.
    /// "Pacific/Auckland". Transaction dates are displayed in this timezone.
    ///
    /// # Errors
    /// Returns [Error::InvalidTimezoneError] if `local_timezone` is not a known timezone.
    pub fn new(
        api: A,
        local_timezone: &str,
        patch_rule: BalancePatchRule,
    ) -> Result<Self, Error> {
        if get_timezone(local_timezone).is_none() {
            return Err(Error::InvalidTimezoneError(local_timezone.to_owned()));
        }

        Ok(Self {
            api,
            dashboard: Arc::new(Mutex::new(DashboardState::new(patch_rule))),
            local_timezone: local_timezone.to_owned(),
        })
    }
}
