//! In-process fake of the order backend for integration tests.
#![allow(dead_code)]

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

pub const ADMIN_TOKEN: &str = "admin-token";

/// One request the backend received.
#[derive(Debug, Clone)]
pub struct Received {
    pub path: &'static str,
    pub token: Option<String>,
    pub body: Value,
}

#[derive(Default)]
pub struct Backend {
    /// Stored in insertion order, oldest first.
    pub orders: Mutex<Vec<Value>>,
    pub received: Mutex<Vec<Received>>,
    /// When set, the status endpoint answers 500.
    pub fail_status: Mutex<bool>,
    /// When set, the status endpoint rejects with this message.
    pub reject_status: Mutex<Option<String>>,
    /// When set, the status endpoint stores this status instead of the requested one.
    pub override_status: Mutex<Option<String>>,
}

impl Backend {
    pub fn received(&self) -> Vec<Received> {
        self.received.lock().unwrap().clone()
    }

    pub fn status_of(&self, id: &str) -> Option<String> {
        self.orders
            .lock()
            .unwrap()
            .iter()
            .find(|o| o["_id"] == id)
            .and_then(|o| o["status"].as_str().map(str::to_string))
    }

    fn record(&self, path: &'static str, headers: &HeaderMap, body: &Value) {
        let token = headers
            .get("token")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.received.lock().unwrap().push(Received {
            path,
            token,
            body: body.clone(),
        });
    }

    fn authorized(headers: &HeaderMap) -> bool {
        headers.get("token").and_then(|v| v.to_str().ok()) == Some(ADMIN_TOKEN)
    }
}

pub fn order_json(id: &str, status: &str, date_ms: i64) -> Value {
    json!({
        "_id": id,
        "userId": "u1",
        "items": [{ "_id": "p1", "name": "Tee", "price": 20, "quantity": 2, "size": "M" }],
        "address": {
            "firstName": "Ada",
            "lastName": "Lovelace",
            "email": "ada@example.com",
            "street": "1 Main St",
            "city": "London",
            "state": "LDN",
            "zipcode": "N1",
            "country": "UK",
            "phone": "555-0100"
        },
        "amount": 50,
        "paymentMethod": "COD",
        "payment": false,
        "status": status,
        "date": date_ms
    })
}

async fn list_orders(
    State(backend): State<Arc<Backend>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    backend.record("/api/order/list", &headers, &body);
    if !Backend::authorized(&headers) {
        return Json(json!({ "success": false, "message": "Not Authorized Login Again" }));
    }
    let orders = backend.orders.lock().unwrap().clone();
    Json(json!({ "success": true, "orders": orders }))
}

async fn update_status(
    State(backend): State<Arc<Backend>>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    backend.record("/api/order/status", &headers, &body);
    if *backend.fail_status.lock().unwrap() {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    if !Backend::authorized(&headers) {
        return Ok(Json(json!({ "success": false, "message": "Not Authorized Login Again" })));
    }
    if let Some(message) = backend.reject_status.lock().unwrap().clone() {
        return Ok(Json(json!({ "success": false, "message": message })));
    }

    let stored = backend
        .override_status
        .lock()
        .unwrap()
        .clone()
        .unwrap_or_else(|| body["status"].as_str().unwrap_or_default().to_string());
    for order in backend.orders.lock().unwrap().iter_mut() {
        if order["_id"] == body["orderId"] {
            order["status"] = Value::String(stored.clone());
        }
    }
    Ok(Json(json!({ "success": true, "message": "Status Updated" })))
}

/// An API client that talks to `url` directly, ignoring proxy settings.
pub fn api(url: &str) -> storefront::api::HttpOrderApi {
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    storefront::api::HttpOrderApi::with_client(http, url)
}

/// Starts the backend on an ephemeral port and returns its base URL.
pub async fn start_backend(orders: Vec<Value>) -> (String, Arc<Backend>) {
    let backend = Arc::new(Backend {
        orders: Mutex::new(orders),
        ..Backend::default()
    });

    let app = Router::new()
        .route("/api/order/list", post(list_orders))
        .route("/api/order/status", post(update_status))
        .with_state(backend.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    tokio::time::sleep(Duration::from_millis(50)).await;

    (format!("http://{}", addr), backend)
}
