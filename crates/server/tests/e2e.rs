use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use reqwest::StatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use server::routes;
use service::directory::RestaurantDirectory;

struct TestApp {
    base_url: String,
}

/// Start a freshly seeded server on an ephemeral port.
async fn start_server() -> anyhow::Result<TestApp> {
    let directory = RestaurantDirectory::with_seed();
    let app: Router = routes::build_router(Arc::clone(&directory), CorsLayer::very_permissive());

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

async fn list_restaurants(c: &reqwest::Client, base_url: &str) -> anyhow::Result<Vec<Value>> {
    let res = c.get(format!("{}/restaurants", base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    Ok(res.json::<Vec<Value>>().await?)
}

#[tokio::test]
async fn e2e_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_list_returns_seed_records() -> anyhow::Result<()> {
    let app = start_server().await?;
    let records = list_restaurants(&client(), &app.base_url).await?;
    assert_eq!(records.len(), 5);
    assert_eq!(records[0], json!({"id": 1, "name": "The Gourmet Kitchen"}));
    assert_eq!(records[4], json!({"id": 5, "name": "Taco Town"}));
    Ok(())
}

#[tokio::test]
async fn e2e_create_appends_and_confirms() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c
        .post(format!("{}/restaurant", app.base_url))
        .json(&json!({"id": 6, "name": "Pizza Place"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.text().await?;
    assert!(body.contains("Pizza Place"));

    let records = list_restaurants(&c, &app.base_url).await?;
    assert_eq!(records.len(), 6);
    assert_eq!(records[5], json!({"id": 6, "name": "Pizza Place"}));
    Ok(())
}

#[tokio::test]
async fn e2e_create_with_missing_fields_stores_defaults() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c
        .post(format!("{}/restaurant", app.base_url))
        .json(&json!({}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let records = list_restaurants(&c, &app.base_url).await?;
    assert_eq!(records[5], json!({"id": 0, "name": ""}));
    Ok(())
}

#[tokio::test]
async fn e2e_create_does_not_enforce_unique_ids() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c
        .post(format!("{}/restaurant", app.base_url))
        .json(&json!({"id": 1, "name": "Duplicate"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let records = list_restaurants(&c, &app.base_url).await?;
    let with_id_1 = records.iter().filter(|r| r["id"] == 1).count();
    assert_eq!(with_id_1, 2);
    Ok(())
}

#[tokio::test]
async fn e2e_delete_removes_matches_and_is_idempotent() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c.delete(format!("{}/restaurant/2", app.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.text().await?.contains("2"));

    let records = list_restaurants(&c, &app.base_url).await?;
    assert_eq!(records.len(), 4);
    assert!(records.iter().all(|r| r["id"] != 2));

    // deleting again still reports success and changes nothing
    let res = c.delete(format!("{}/restaurant/2", app.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(list_restaurants(&c, &app.base_url).await?.len(), 4);
    Ok(())
}

#[tokio::test]
async fn e2e_delete_unknown_id_is_a_successful_noop() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c.delete(format!("{}/restaurant/99", app.base_url)).send().await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(list_restaurants(&c, &app.base_url).await?.len(), 5);
    Ok(())
}

#[tokio::test]
async fn e2e_update_renames_in_place() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c
        .put(format!("{}/restaurant/3", app.base_url))
        .json(&json!({"name": "Sushi World"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(res.text().await?.contains("3"));

    let records = list_restaurants(&c, &app.base_url).await?;
    assert_eq!(records.len(), 5);
    assert_eq!(records[2], json!({"id": 3, "name": "Sushi World"}));
    Ok(())
}

#[tokio::test]
async fn e2e_update_unknown_id_returns_404() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c
        .put(format!("{}/restaurant/999", app.base_url))
        .json(&json!({"name": "X"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body = res.json::<Value>().await?;
    assert_eq!(body["error"], "Not Found");

    // collection untouched
    let records = list_restaurants(&c, &app.base_url).await?;
    assert_eq!(records.len(), 5);
    assert_eq!(records[2], json!({"id": 3, "name": "Sushi Central"}));
    Ok(())
}

#[tokio::test]
async fn e2e_openapi_document_is_served() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client()
        .get(format!("{}/api-docs/openapi.json", app.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let doc = res.json::<Value>().await?;
    assert!(doc["paths"]["/restaurants"].is_object());
    assert!(doc["paths"]["/restaurant/{id}"].is_object());
    Ok(())
}
