use std::net::SocketAddr;
use std::path::PathBuf;

use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use uuid::Uuid;

/// A running test server instance with a dedicated SQLite file.
pub struct TestApp {
    pub addr: SocketAddr,
    pub pool: SqlitePool,
    pub client: Client,
    pub db_path: PathBuf,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// Create a property, return the property JSON.
    pub async fn create_property(&self, name: &str, property_type: Option<&str>) -> Value {
        let mut body = json!({ "Name": name });
        if let Some(t) = property_type {
            body["type"] = json!(t);
        }
        let (body, status) = self.post("/properties", &body).await;
        assert_eq!(status, StatusCode::CREATED, "create property non-201: {body}");
        body
    }

    /// Create a unit under a property, return the unit JSON.
    pub async fn create_unit(&self, property_id: i64, unit_number: &str) -> Value {
        let (body, status) = self
            .post(
                &format!("/properties/{property_id}/units"),
                &json!({ "unit_number": unit_number }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create unit non-201: {body}");
        body
    }

    /// Create a meter under a unit, return the meter JSON.
    pub async fn create_meter(
        &self,
        property_id: i64,
        unit_id: i64,
        meter_number: &str,
        meter_type: &str,
    ) -> Value {
        let (body, status) = self
            .post(
                &format!("/properties/{property_id}/units/{unit_id}/meters"),
                &json!({ "meter_number": meter_number, "type": meter_type }),
            )
            .await;
        assert_eq!(status, StatusCode::OK, "create meter non-200: {body}");
        body
    }

    pub async fn get(&self, path: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .get(self.url(path))
            .send()
            .await
            .expect("get request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn post(&self, path: &str, body: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .expect("post request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    /// POST a pre-serialized JSON body, keeping number literals exactly as written.
    pub async fn post_raw(&self, path: &str, body: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .post(self.url(path))
            .header("content-type", "application/json")
            .body(body.to_string())
            .send()
            .await
            .expect("post request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn patch(&self, path: &str, body: &Value) -> (Value, StatusCode) {
        let resp = self
            .client
            .patch(self.url(path))
            .json(body)
            .send()
            .await
            .expect("patch request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }

    pub async fn delete(&self, path: &str) -> (Value, StatusCode) {
        let resp = self
            .client
            .delete(self.url(path))
            .send()
            .await
            .expect("delete request failed");
        let status = resp.status();
        let body: Value = resp.json().await.unwrap_or(json!(null));
        (body, status)
    }
}

/// Spawn a test app backed by a fresh temporary database file.
pub async fn spawn_app() -> TestApp {
    let db_path = std::env::temp_dir().join(format!(
        "zahavi_test_{}.db",
        Uuid::now_v7().simple()
    ));
    let database_url = format!("sqlite://{}", db_path.display());

    let pool = zahavi::db::connect(&database_url, 5)
        .await
        .expect("Failed to open test database");

    zahavi::db::migrate(&pool)
        .await
        .expect("Failed to run migrations on test database");

    let app = zahavi::build_app(pool.clone());

    // Bind to random port
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server failed");
    });

    TestApp {
        addr,
        pool,
        client: Client::new(),
        db_path,
    }
}

/// Close the pool and remove the test database file.
pub async fn cleanup(app: TestApp) {
    app.pool.close().await;
    let _ = std::fs::remove_file(&app.db_path);
}
