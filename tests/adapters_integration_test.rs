//! Integration tests for the production adapters, driven through a loader.
//!
//! HTTP traffic goes to a local wiremock server; local content lives in a
//! temporary directory.

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::*;
use hubview::adapters::{
    FileContentProvider, FixedConnectivity, HttpContentProvider, ReqwestHttpClient,
};
use hubview::error::{LoadError, ProviderError};
use hubview::loader::ViewModelLoader;
use hubview::models::{ConnectivityState, ContentPolicy, ContentRequest, ContentSource};
use hubview::traits::ContentProvider;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn request() -> ContentRequest {
    ContentRequest::new(&feature(ContentPolicy::PreferRemote), ConnectivityState::Online)
}

#[tokio::test]
async fn test_http_provider_fetches_view() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/{}", FEATURE)))
        .and(query_param("uri", VIEW_URI))
        .and(header("accept", "application/json"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(view_json("remote"), "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let provider = HttpContentProvider::new(ReqwestHttpClient::new(), server.uri());
    let payload = provider.fetch(&request()).await.unwrap();

    assert_eq!(payload.source, ContentSource::Remote);
    assert_eq!(payload.content_type.as_deref(), Some("application/json"));
    assert_eq!(payload.body, view_json("remote").into_bytes());
}

#[tokio::test]
async fn test_http_provider_status_mapping() {
    let server = MockServer::start().await;
    Mock::given(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(path("/broken"))
        .respond_with(ResponseTemplate::new(500).set_body_string("oops"))
        .mount(&server)
        .await;

    let provider = HttpContentProvider::new(ReqwestHttpClient::new(), server.uri());

    let mut missing = request();
    missing.feature = "missing".to_string();
    assert_eq!(provider.fetch(&missing).await, Err(ProviderError::NotFound));

    let mut broken = request();
    broken.feature = "broken".to_string();
    assert_eq!(
        provider.fetch(&broken).await,
        Err(ProviderError::Http { status: 500, message: "oops".to_string() })
    );
}

#[tokio::test]
async fn test_http_provider_unreachable_server() {
    // Bind then release a port so nothing is listening on it.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let uri = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let provider = HttpContentProvider::new(ReqwestHttpClient::new(), uri);
    let error = provider.fetch(&request()).await.unwrap_err();
    assert!(matches!(error, ProviderError::Network(_)), "got {:?}", error);
}

#[tokio::test]
async fn test_http_client_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(view_json("slow"))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let client = ReqwestHttpClient::with_timeout(Duration::from_millis(100)).unwrap();
    let provider = HttpContentProvider::new(client, server.uri());
    let error = provider.fetch(&request()).await.unwrap_err();
    assert!(matches!(error, ProviderError::Network(_)), "got {:?}", error);
}

#[tokio::test]
async fn test_loader_with_real_adapters_falls_back_to_disk() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let local = FileContentProvider::new(dir.path());
    local
        .store(FEATURE, VIEW_URI, view_json("cached").as_bytes())
        .await
        .unwrap();

    let loader = ViewModelLoader::builder(feature(ContentPolicy::PreferRemote))
        .with_connectivity_resolver(Arc::new(FixedConnectivity::online()))
        .with_remote_provider(Arc::new(HttpContentProvider::new(
            ReqwestHttpClient::new(),
            server.uri(),
        )))
        .with_local_provider(Arc::new(local))
        .build()
        .unwrap();

    let view_model = within(loader.load_view_model().outcome()).await.unwrap();
    assert_eq!(view_model.id, "cached");
    assert_eq!(view_model.body[0].id, "cached-row");
}

#[tokio::test]
async fn test_loader_with_real_adapters_reports_both_failures() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let dir = TempDir::new().unwrap();

    let loader = ViewModelLoader::builder(feature(ContentPolicy::PreferRemote))
        .with_connectivity_resolver(Arc::new(FixedConnectivity::online()))
        .with_remote_provider(Arc::new(HttpContentProvider::new(
            ReqwestHttpClient::new(),
            server.uri(),
        )))
        .with_local_provider(Arc::new(FileContentProvider::new(dir.path())))
        .build()
        .unwrap();

    let error = within(loader.load_view_model().outcome()).await.unwrap_err();
    assert!(matches!(error, LoadError::NoViewModelProduced { ref attempts, .. } if attempts.len() == 2));
    assert_eq!(error.error_code(), "E_LOAD_EXHAUSTED");
    assert!(!error.user_message().is_empty());
}

#[tokio::test]
async fn test_offline_loader_never_touches_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(view_json("remote")))
        .expect(0)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let local = FileContentProvider::new(dir.path());
    local
        .store(FEATURE, VIEW_URI, view_json("cached").as_bytes())
        .await
        .unwrap();

    let loader = ViewModelLoader::builder(feature(ContentPolicy::PreferRemote))
        .with_connectivity_resolver(Arc::new(FixedConnectivity::offline()))
        .with_remote_provider(Arc::new(HttpContentProvider::new(
            ReqwestHttpClient::new(),
            server.uri(),
        )))
        .with_local_provider(Arc::new(local))
        .build()
        .unwrap();

    let view_model = within(loader.load_view_model().outcome()).await.unwrap();
    assert_eq!(view_model.id, "cached");
}
