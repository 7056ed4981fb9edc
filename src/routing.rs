//! Application router configuration.

use std::path::Path;

use axum::{
    Router, middleware,
    response::Redirect,
    routing::{delete, get},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    api::TransactionsApi,
    dashboard::{delete_transaction_endpoint, get_dashboard_page},
    endpoints,
    error_pages::{get_404_not_found, get_internal_server_error_page},
    logging::logging_middleware,
};

/// Return a router with all the app's routes.
///
/// Static files, e.g. the htmx scripts, are served from `static_dir`.
pub fn build_router<A>(state: AppState<A>, static_dir: impl AsRef<Path>) -> Router
where
    A: TransactionsApi,
{
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page::<A>))
        .route(
            endpoints::DELETE_TRANSACTION,
            delete(delete_transaction_endpoint::<A>),
        )
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .nest_service(endpoints::STATIC, ServeDir::new(static_dir))
        .fallback(get_404_not_found)
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}

/// The root path '/' redirects to the dashboard page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::DASHBOARD_VIEW)
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};
    use axum_test::TestServer;
    use scraper::{Html, Selector};
    use time::macros::datetime;

    use crate::{
        AppState,
        api::{ApiError, TransactionsResponse},
        balance::{Balance, BalancePatchRule},
        endpoints::{self, format_endpoint},
        test_utils::{FakeTransactionsApi, get_header},
        transaction::{Category, Transaction, TransactionId, TransactionType},
    };

    use super::{build_router, get_index_page};

    fn api() -> FakeTransactionsApi {
        FakeTransactionsApi::with_response(TransactionsResponse {
            transactions: vec![
                Transaction {
                    id: TransactionId::new("salary"),
                    title: "Salary".to_owned(),
                    value: 4000.0,
                    kind: TransactionType::Income,
                    category: Category {
                        title: "Work".to_owned(),
                    },
                    created_at: datetime!(2021-02-01 09:00 UTC),
                },
                Transaction {
                    id: TransactionId::new("rent"),
                    title: "Rent".to_owned(),
                    value: 1200.5,
                    kind: TransactionType::Outcome,
                    category: Category {
                        title: "Housing".to_owned(),
                    },
                    created_at: datetime!(2021-02-03 18:30 UTC),
                },
            ],
            balance: Balance {
                income: "4000".to_owned(),
                outcome: "1200.5".to_owned(),
                total: "2799.5".to_owned(),
            },
        })
    }

    fn get_test_server(api: FakeTransactionsApi, patch_rule: BalancePatchRule) -> TestServer {
        let state = AppState::new(api, "Etc/UTC", patch_rule).expect("Could not create app state");
        let app = build_router(state, "static/");

        TestServer::try_new(app).expect("Could not create test server.")
    }

    fn figure(html: &Html, test_id: &str) -> String {
        let selector = Selector::parse(&format!("[data-testid='{test_id}']")).unwrap();

        html.select(&selector)
            .next()
            .unwrap_or_else(|| panic!("No element with data-testid {test_id}"))
            .text()
            .collect::<String>()
            .trim()
            .to_owned()
    }

    fn row_count(html: &Html) -> usize {
        html.select(&Selector::parse("tr[data-transaction-id]").unwrap())
            .count()
    }

    #[tokio::test]
    async fn root_redirects_to_dashboard() {
        let response = get_index_page().await.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);

        assert_eq!(get_header(&response, "location"), endpoints::DASHBOARD_VIEW);
    }

    #[tokio::test]
    async fn dashboard_lists_transactions() {
        let server = get_test_server(api(), BalancePatchRule::Observed);

        let response = server.get(endpoints::DASHBOARD_VIEW).await;

        response.assert_status_ok();
        let html = Html::parse_document(&response.text());
        assert_eq!(row_count(&html), 2);
        assert_eq!(figure(&html, "balance-income"), "$4,000.00");
        assert_eq!(figure(&html, "balance-outcome"), "$1,200.50");
        assert_eq!(figure(&html, "balance-total"), "$2,799.50");
    }

    #[tokio::test]
    async fn dashboard_shows_error_page_when_api_is_down() {
        let api = api();
        api.fail_list_with(ApiError::Request("connection refused".to_owned()));
        let server = get_test_server(api, BalancePatchRule::Observed);

        let response = server.get(endpoints::DASHBOARD_VIEW).await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.text().contains("Could not load your transactions"));
    }

    #[tokio::test]
    async fn delete_returns_patched_dashboard_content() {
        let api = api();
        let server = get_test_server(api.clone(), BalancePatchRule::Observed);
        server.get(endpoints::DASHBOARD_VIEW).await.assert_status_ok();

        let response = server
            .delete(&format_endpoint(endpoints::DELETE_TRANSACTION, "salary"))
            .await;

        response.assert_status_ok();
        let html = Html::parse_fragment(&response.text());
        assert_eq!(row_count(&html), 1);
        assert_eq!(figure(&html, "balance-income"), "$0.00");
        assert_eq!(figure(&html, "balance-outcome"), "-$2,799.50");
        assert_eq!(figure(&html, "balance-total"), "$2,799.50");
        assert_eq!(api.deleted_ids(), vec![TransactionId::new("salary")]);
    }

    #[tokio::test]
    async fn delete_with_corrected_rule_only_patches_matching_field() {
        let server = get_test_server(api(), BalancePatchRule::Corrected);
        server.get(endpoints::DASHBOARD_VIEW).await.assert_status_ok();

        let response = server
            .delete(&format_endpoint(endpoints::DELETE_TRANSACTION, "rent"))
            .await;

        response.assert_status_ok();
        let html = Html::parse_fragment(&response.text());
        assert_eq!(figure(&html, "balance-income"), "$4,000.00");
        assert_eq!(figure(&html, "balance-outcome"), "$0.00");
        assert_eq!(figure(&html, "balance-total"), "$4,000.00");
    }

    #[tokio::test]
    async fn delete_of_unknown_transaction_returns_not_found_alert() {
        let server = get_test_server(api(), BalancePatchRule::Observed);

        let response = server
            .delete(&format_endpoint(endpoints::DELETE_TRANSACTION, "nope"))
            .await;

        response.assert_status_not_found();
        assert!(response.text().contains("Could not delete transaction"));
    }

    #[tokio::test]
    async fn static_files_are_served_byte_for_byte() {
        let static_dir = std::env::temp_dir().join(format!(
            "finance-dashboard-static-{}",
            std::process::id()
        ));
        std::fs::create_dir_all(&static_dir).expect("Could not create static dir");
        let image = [0x89, b'P', b'N', b'G', 0xff, 0xfe, 0x00, 0x80];
        std::fs::write(static_dir.join("logo.png"), image).expect("Could not write static file");
        let state = AppState::new(api(), "Etc/UTC", BalancePatchRule::Observed)
            .expect("Could not create app state");
        let server = TestServer::try_new(build_router(state, &static_dir))
            .expect("Could not create test server.");

        let response = server.get(&format!("{}/logo.png", endpoints::STATIC)).await;

        std::fs::remove_dir_all(&static_dir).expect("Could not remove static dir");
        response.assert_status_ok();
        assert_eq!(response.as_bytes().as_ref(), image.as_slice());
    }

    #[tokio::test]
    async fn error_page_is_served() {
        let server = get_test_server(api(), BalancePatchRule::Observed);

        server
            .get(endpoints::INTERNAL_ERROR_VIEW)
            .await
            .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let server = get_test_server(api(), BalancePatchRule::Observed);

        server.get("/budgets").await.assert_status_not_found();
    }
}
