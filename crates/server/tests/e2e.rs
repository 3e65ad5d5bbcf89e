use std::net::SocketAddr;
use std::path::PathBuf;

use configs::AppConfig;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;
use uuid::Uuid;

struct TestApp {
    base_url: String,
    data_dir: PathBuf,
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.data_dir);
    }
}

async fn start_server() -> anyhow::Result<TestApp> {
    // isolated data file per test run
    let data_dir = std::env::temp_dir().join(format!("form_e2e_{}", Uuid::new_v4()));
    let mut cfg = AppConfig::default();
    cfg.storage.data_file = data_dir.join("db.json");

    let app = server::startup::build_app(&cfg).await?;
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url, data_dir })
}

fn form(email: &str) -> serde_json::Value {
    json!({
        "name": "Lin", "email": email, "phone": "555-0101",
        "githubLink": "https://github.com/lin", "stopwatchTime": "00:00:42"
    })
}

#[tokio::test]
async fn e2e_full_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c.get(format!("{}/ping", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<serde_json::Value>().await?, json!({"success": true}));

    for expected_id in 1..=3 {
        let res = c.post(format!("{}/submit", app.base_url)).json(&form("lin@x.io")).send().await?;
        assert_eq!(res.status(), HttpStatusCode::CREATED);
        let body = res.json::<serde_json::Value>().await?;
        assert_eq!(body["id"], expected_id);
    }

    let res = c.delete(format!("{}/delete/2", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    // position 1 now holds id 3
    let res = c.get(format!("{}/read", app.base_url)).query(&[("index", "1")]).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<serde_json::Value>().await?["id"], 3);

    let res = c.put(format!("{}/edit/3", app.base_url)).json(&form("other@x.io")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    let res = c.get(format!("{}/search", app.base_url)).query(&[("email", "lin@x.io")]).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let found = res.json::<Vec<serde_json::Value>>().await?;
    assert_eq!(found.len(), 1);
    assert_eq!(found[0]["id"], 1);

    // ids continue from the last element, not a counter
    let res = c.post(format!("{}/submit", app.base_url)).json(&form("lin@x.io")).send().await?;
    assert_eq!(res.json::<serde_json::Value>().await?["id"], 4);
    Ok(())
}

#[tokio::test]
async fn e2e_openapi_document_served() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = reqwest::get(format!("{}/api-docs/openapi.json", app.base_url)).await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let doc = res.json::<serde_json::Value>().await?;
    assert!(doc["paths"]["/submit"].is_object());
    Ok(())
}
