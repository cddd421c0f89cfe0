use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use novamatch_core::gateway::RemoteGateway;
use novamatch_core::matchmaking::{MatchFilters, MatchQuery};
use novamatch_core::profile::{InvestorDraft, StartupDraft};
use novamatch_core::NovaError;
use novamatch_infrastructure::HttpGateway;
use serde_json::{json, Value};

/// Request bodies received by the stub backend, in arrival order.
type Received = Arc<Mutex<Vec<(String, Value)>>>;

/// Gateway bypassing any proxy configured in the environment.
fn gateway(base_url: impl Into<String>) -> HttpGateway {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    HttpGateway::with_client(client, base_url)
}

async fn spawn_backend(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn recording_backend(received: Received) -> Router {
    async fn record(
        State(received): State<Received>,
        path: &str,
        body: Value,
    ) {
        received.lock().unwrap().push((path.to_string(), body));
    }

    Router::new()
        .route(
            "/api/startups",
            get(|| async {
                Json(json!([
                    {"_id": "s-2", "name": "Zeta", "tagline": "Last letter"},
                    {"_id": "s-1", "name": "Alpha", "tagline": "First letter"}
                ]))
            })
            .post(|state: State<Received>, Json(body): Json<Value>| async move {
                record(state, "/api/startups", body).await;
                Json(json!({"id": "new-startup"}))
            }),
        )
        .route(
            "/api/investors",
            get(|| async {
                Json(json!([
                    {"_id": "i-1", "name": "Fund One", "preferred_stage": ["seed"]}
                ]))
            })
            .post(|state: State<Received>, Json(body): Json<Value>| async move {
                record(state, "/api/investors", body).await;
                Json(json!({"id": "new-investor"}))
            }),
        )
        .route(
            "/api/matchmaking",
            post(|state: State<Received>, Json(body): Json<Value>| async move {
                record(state, "/api/matchmaking", body).await;
                Json(json!([
                    {"a_id": "s-1", "b_id": "i-1", "score": 0.4},
                    {"a_id": "s-2", "b_id": "i-1", "score": 0.9}
                ]))
            }),
        )
        .route(
            "/api/auth/google",
            post(|Json(body): Json<Value>| async move {
                if body["id_token"] == "good-token" {
                    Json(json!({
                        "ok": true,
                        "profile": {"name": "Ada", "email": "ada@example.com", "picture": "https://example.com/a.png"}
                    }))
                } else {
                    Json(json!({"ok": false, "error": "invalid token"}))
                }
            }),
        )
        .with_state(received)
}

#[tokio::test]
async fn test_lists_keep_server_order() {
    let received = Received::default();
    let gateway = gateway(spawn_backend(recording_backend(received)).await);

    let startups = gateway.list_startups().await.unwrap();
    let names: Vec<&str> = startups.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Zeta", "Alpha"]);
    assert_eq!(startups[0].id.as_deref(), Some("s-2"));

    let investors = gateway.list_investors().await.unwrap();
    assert_eq!(investors.len(), 1);
    assert_eq!(investors[0].preferred_stage[0].to_string(), "seed");
}

#[tokio::test]
async fn test_create_startup_sends_normalized_payload() {
    let received = Received::default();
    let gateway = gateway(spawn_backend(recording_backend(received.clone())).await);

    let draft = StartupDraft {
        name: "Acme".to_string(),
        industry: "fintech, health , health".to_string(),
        funding_needs_max: "50000".to_string(),
        ..Default::default()
    };
    let created = gateway.create_startup(&draft.normalize()).await.unwrap();
    assert_eq!(created.id, "new-startup");

    let received = received.lock().unwrap();
    let (path, body) = &received[0];
    assert_eq!(path, "/api/startups");
    assert_eq!(body["industry"], json!(["fintech", "health", "health"]));
    assert_eq!(body["funding_needs_min"], Value::Null);
    assert_eq!(body["funding_needs_max"].as_f64(), Some(50000.0));
    assert_eq!(body["stage"], "pre-seed");
}

#[tokio::test]
async fn test_create_investor_wraps_stage_in_list() {
    let received = Received::default();
    let gateway = gateway(spawn_backend(recording_backend(received.clone())).await);

    let draft = InvestorDraft {
        name: "Fund One".to_string(),
        email: "gp@fund.one".to_string(),
        ticket_max: "50000".to_string(),
        ..Default::default()
    };
    let created = gateway.create_investor(&draft.normalize()).await.unwrap();
    assert_eq!(created.id, "new-investor");

    let received = received.lock().unwrap();
    let (_, body) = &received[0];
    assert_eq!(body["preferred_stage"], json!(["seed"]));
    assert_eq!(body["ticket_min"], Value::Null);
    assert_eq!(body["ticket_max"].as_f64(), Some(50000.0));
}

#[tokio::test]
async fn test_blank_match_query_sends_all_nulls() {
    let received = Received::default();
    let gateway = gateway(spawn_backend(recording_backend(received.clone())).await);

    let query: MatchQuery = MatchFilters::default().to_query();
    let results = gateway.run_match_query(&query).await.unwrap();
    // Server order, not re-sorted by score
    assert_eq!(results[0].score, 0.4);
    assert_eq!(results[1].a_id, "s-2");

    let received = received.lock().unwrap();
    assert_eq!(
        received[0].1,
        json!({
            "industry": null,
            "stage": null,
            "geography": null,
            "ticket_min": null,
            "ticket_max": null
        })
    );
}

#[tokio::test]
async fn test_identity_exchange_branches_on_ok() {
    let gateway = gateway(spawn_backend(recording_backend(Received::default())).await);

    let accepted = gateway.exchange_identity("good-token").await.unwrap();
    assert!(accepted.ok);
    assert_eq!(accepted.into_profile().unwrap().email, "ada@example.com");

    let refused = gateway.exchange_identity("bad-token").await.unwrap();
    assert!(!refused.ok);
    assert!(refused.into_profile().unwrap_err().is_auth());
}

#[tokio::test]
async fn test_non_json_response_is_decode_error() {
    let app = Router::new().route("/api/startups", get(|| async { "<html>oops</html>" }));
    let gateway = gateway(spawn_backend(app).await);

    let err = gateway.list_startups().await.unwrap_err();
    assert!(err.is_decode(), "expected decode error, got {:?}", err);
}

#[tokio::test]
async fn test_error_status_is_network_error() {
    let app = Router::new().route(
        "/api/investors",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "database down") }),
    );
    let gateway = gateway(spawn_backend(app).await);

    match gateway.list_investors().await {
        Err(NovaError::Network { status, message }) => {
            assert_eq!(status, Some(500));
            assert!(message.contains("database down"));
        }
        other => panic!("Expected network error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let gateway = gateway(format!("http://{}", addr));
    let err = gateway.list_startups().await.unwrap_err();
    assert!(matches!(err, NovaError::Network { status: None, .. }));
}
