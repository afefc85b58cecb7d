//! End-to-end tests over a real listener, with the in-memory store standing
//! in for PostgreSQL.

use std::net::SocketAddr;
use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::json;
use sitefront::{app_router, AppConfig, AppState, DocumentStore, MemoryStore};
use tokio::net::TcpListener;

struct TestApp {
    base_url: String,
    store: Arc<MemoryStore>,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let store = Arc::new(MemoryStore::new());
    let config = AppConfig {
        database_url: None,
        database_name: None,
        port: 0,
    };
    let state = AppState::new(config, Some(store.clone() as Arc<dyn DocumentStore>));
    let app = app_router(state);

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp {
        base_url: format!("http://{}", addr),
        store,
    })
}

#[tokio::test]
async fn contact_round_trip_persists_the_message() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c
        .post(format!("{}/api/contact", app.base_url))
        .json(&json!({
            "name": "Ada",
            "email": "ada@example.com",
            "subject": "Quote request",
            "message": "We need a new site."
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "Thanks for reaching out!");
    let ticket_id = body["ticket_id"].as_str().unwrap().to_string();

    let docs = app.store.get_documents("contactmessage", None).await.unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0]["id"].as_str().unwrap(), ticket_id);
    assert_eq!(docs[0]["subject"], "Quote request");
    Ok(())
}

#[tokio::test]
async fn company_profile_create_and_read() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c
        .post(format!("{}/api/company", app.base_url))
        .json(&json!({"name": "Acme", "tagline": "We build things"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let res = c.get(format!("{}/api/company", app.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let docs = res.json::<Vec<serde_json::Value>>().await?;
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0]["name"], "Acme");
    assert_eq!(docs[0]["tagline"], "We build things");
    assert!(docs[0]["email"].is_null());
    Ok(())
}

#[tokio::test]
async fn validation_failure_is_distinguishable_from_storage_failure() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c
        .post(format!("{}/api/contact", app.base_url))
        .json(&json!({
            "name": "Ada",
            "email": "nope",
            "subject": "Hi",
            "message": "hey"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["error"]["code"], "validation_error");
    Ok(())
}

#[tokio::test]
async fn cross_origin_requests_are_allowed_with_credentials() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c
        .get(format!("{}/api/services", app.base_url))
        .header("Origin", "https://www.example.com")
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("https://www.example.com")
    );
    assert_eq!(
        res.headers()
            .get("access-control-allow-credentials")
            .and_then(|v| v.to_str().ok()),
        Some("true")
    );
    Ok(())
}

#[tokio::test]
async fn diagnostics_always_answer() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c.get(format!("{}/test", app.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["backend"], "running");
    assert_eq!(body["database"], "connected");
    Ok(())
}
