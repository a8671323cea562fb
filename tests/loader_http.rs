//! Loader integration tests
//!
//! Runs the HTTP tool source and the one-shot loader against a mock server.

use std::sync::Arc;

use serde_json::json;
use toolcat::catalog::{LoadState, TabId, Tool, ViewState, filter_tools};
use toolcat::loader::{HttpToolSource, IconProbe, Loader};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOOLS_PATH: &str = "/api/ai-tools";

async fn load_from(server: &MockServer) -> ViewState {
    let source = HttpToolSource::new(&format!("{}{}", server.uri(), TOOLS_PATH), None).unwrap();
    let mut loader = Loader::new(Arc::new(source));
    let mut state = ViewState::new();
    assert!(state.loading());

    let outcome = loader.run().await.expect("first run must fetch");
    assert!(state.settle(outcome));
    state
}

/// 200 with a single tool settles into the loaded state
#[tokio::test]
async fn test_success_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TOOLS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "A", "description": "d", "url": "http://x", "category": "ai"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let state = load_from(&server).await;
    assert!(!state.loading());
    assert!(state.error().is_none());
    assert_eq!(state.tools(), &[Tool::new("A", "d", "http://x", "ai")]);
}

/// 500 settles into the failed state with a message and no tools
#[tokio::test]
async fn test_server_error_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TOOLS_PATH))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let state = load_from(&server).await;
    assert!(!state.loading());
    let error = state.error().expect("error expected");
    assert!(!error.is_empty());
    assert!(error.contains("500"));
    assert!(state.tools().is_empty());
}

/// A body that is not a tool array is a failure
#[tokio::test]
async fn test_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TOOLS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tools": []})))
        .mount(&server)
        .await;

    let state = load_from(&server).await;
    assert!(matches!(state.load_state(), LoadState::Failed(msg) if !msg.is_empty()));
    assert!(state.tools().is_empty());
}

/// Nothing listening: network fault is a failure, not a panic
#[tokio::test]
async fn test_connection_refused() {
    let source = HttpToolSource::new("http://127.0.0.1:9/api/ai-tools", None).unwrap();
    let mut loader = Loader::new(Arc::new(source));
    let mut state = ViewState::new();
    assert!(state.settle(loader.run().await.unwrap()));
    assert!(state.error().is_some_and(|e| !e.is_empty()));
}

/// The latch keeps a loader to a single request
#[tokio::test]
async fn test_single_request_per_loader() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TOOLS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let source = HttpToolSource::new(&format!("{}{}", server.uri(), TOOLS_PATH), None).unwrap();
    let mut loader = Loader::new(Arc::new(source));

    let (tx, rx) = tokio::sync::oneshot::channel();
    let handle = loader
        .spawn(move |outcome| {
            let _ = tx.send(outcome);
        })
        .unwrap();
    assert!(loader.spawn(|_| {}).is_none());
    assert!(loader.run().await.is_none());

    handle.await.unwrap();
    assert_eq!(rx.await.unwrap(), LoadState::Loaded(vec![]));
}

/// Loaded data feeds the filter engine scenario end to end
#[tokio::test]
async fn test_loaded_tools_filter_by_tab_and_keyword() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(TOOLS_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"name": "Chat", "description": "talks", "category": "ai", "url": "u1"},
            {"name": "Bot", "description": "agent thing", "category": "agent", "url": "u2"}
        ])))
        .mount(&server)
        .await;

    let state = load_from(&server).await;
    let agent = filter_tools(state.tools(), TabId::Agent.tab(), "");
    assert_eq!(agent.len(), 1);
    assert_eq!(agent[0].name, "Bot");

    let chat = filter_tools(state.tools(), TabId::Ai.tab(), "chat");
    assert_eq!(chat.len(), 1);
    assert_eq!(chat[0].name, "Chat");

    assert!(filter_tools(state.tools(), TabId::Ai.tab(), "zzz").is_empty());
}

/// Icons that 404 are reported; reachable ones are not
#[tokio::test]
async fn test_icon_probe_reports_missing_icons() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/icons/ok.png"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    Mock::given(method("HEAD"))
        .and(path("/icons/gone.png"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let source = HttpToolSource::new(&format!("{}{}", server.uri(), TOOLS_PATH), None).unwrap();
    let probe = IconProbe::new(source.client().clone(), source.endpoint().clone(), 4);

    let tools = vec![
        Tool::new("Ok", "d", "u", "ai").with_icon("/icons/ok.png"),
        Tool::new("Gone", "d", "u", "ai").with_icon("/icons/gone.png"),
        Tool::new("None", "d", "u", "ai"),
    ];
    let broken = std::sync::Mutex::new(Vec::new());
    probe
        .run(IconProbe::targets(&tools), |pos| broken.lock().unwrap().push(pos))
        .await;

    assert_eq!(*broken.lock().unwrap(), vec![1]);
}

/// Relative icon paths are fetched from the site root, not the endpoint's directory
#[tokio::test]
async fn test_icon_probe_resolves_relative_icon_from_site_root() {
    let server = MockServer::start().await;
    Mock::given(method("HEAD"))
        .and(path("/icons/a.png"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let source = HttpToolSource::new(&format!("{}{}", server.uri(), TOOLS_PATH), None).unwrap();
    let probe = IconProbe::new(source.client().clone(), source.endpoint().clone(), 4);

    let tools = vec![Tool::new("Rel", "d", "u", "ai").with_icon("icons/a.png")];
    let broken = std::sync::Mutex::new(Vec::new());
    probe
        .run(IconProbe::targets(&tools), |pos| broken.lock().unwrap().push(pos))
        .await;

    assert!(broken.lock().unwrap().is_empty());
}
