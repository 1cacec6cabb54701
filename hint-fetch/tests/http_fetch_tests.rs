//! Integration tests for `HttpFetcher` and `SchemeFetcher` against a loopback server.

use std::net::SocketAddr;
use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::get;
use hint_fetch::{
    ContentFetcher, FetchConfig, FetchError, FetchResponse, HttpFetcher, SchemeFetcher, Url,
};
use tokio::net::TcpListener;

async fn spawn_server() -> SocketAddr {
    let app = Router::new()
        .route("/manifest.json", get(|| async { r#"{"name": "app"}"# }))
        .route("/gone.json", get(|| async { StatusCode::GONE }))
        .route(
            "/moved.json",
            get(|| async { Redirect::permanent("/manifest.json") }),
        )
        .route(
            "/slow.json",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "{}"
            }),
        );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn url_for(addr: SocketAddr, path: &str) -> Url {
    Url::parse(&format!("http://{addr}{path}")).unwrap()
}

#[tokio::test]
async fn test_http_ok_reports_200() {
    let addr = spawn_server().await;
    let fetcher = HttpFetcher::new(&FetchConfig::default()).unwrap();

    let response = fetcher.fetch(&url_for(addr, "/manifest.json")).await.unwrap();
    assert_eq!(response, FetchResponse::with_status(200));
}

#[tokio::test]
async fn test_http_missing_reports_404() {
    let addr = spawn_server().await;
    let fetcher = HttpFetcher::new(&FetchConfig::default()).unwrap();

    let response = fetcher.fetch(&url_for(addr, "/nope.json")).await.unwrap();
    assert_eq!(response.status_code, Some(404));
}

#[tokio::test]
async fn test_http_error_status_is_not_a_fetch_error() {
    let addr = spawn_server().await;
    let fetcher = HttpFetcher::new(&FetchConfig::default()).unwrap();

    let response = fetcher.fetch(&url_for(addr, "/gone.json")).await.unwrap();
    assert_eq!(response.status_code, Some(410));
}

#[tokio::test]
async fn test_redirect_reports_final_status() {
    let addr = spawn_server().await;
    let fetcher = HttpFetcher::new(&FetchConfig::default()).unwrap();

    let response = fetcher.fetch(&url_for(addr, "/moved.json")).await.unwrap();
    assert_eq!(response.status_code, Some(200));
}

#[tokio::test]
async fn test_redirects_disabled_reports_redirect_status() {
    let addr = spawn_server().await;
    let mut config = FetchConfig::default();
    config.max_redirects = 0;
    let fetcher = HttpFetcher::new(&config).unwrap();

    let response = fetcher.fetch(&url_for(addr, "/moved.json")).await.unwrap();
    assert_eq!(response.status_code, Some(308));
}

#[tokio::test]
async fn test_custom_client_is_used() {
    let addr = spawn_server().await;
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap();
    let fetcher = HttpFetcher::with_client(client);

    let moved = fetcher.fetch(&url_for(addr, "/moved.json")).await.unwrap();
    assert_eq!(moved.status_code, Some(308));
    let ok = fetcher.fetch(&url_for(addr, "/manifest.json")).await.unwrap();
    assert_eq!(ok.status_code, Some(200));
}

#[tokio::test]
async fn test_timeout_is_classified() {
    let addr = spawn_server().await;
    let mut config = FetchConfig::default();
    config.timeout_secs = 1;
    let fetcher = HttpFetcher::new(&config).unwrap();

    let err = fetcher
        .fetch(&url_for(addr, "/slow.json"))
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Timeout { .. }), "got: {err}");
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let fetcher = HttpFetcher::new(&FetchConfig::default()).unwrap();
    let err = fetcher
        .fetch(&url_for(addr, "/manifest.json"))
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Network { .. }), "got: {err}");
}

#[tokio::test]
async fn test_scheme_fetcher_routes_http() {
    let addr = spawn_server().await;
    let fetcher = SchemeFetcher::new(&FetchConfig::default()).unwrap();

    let response = fetcher.fetch(&url_for(addr, "/manifest.json")).await.unwrap();
    assert_eq!(response.status_code, Some(200));
}
