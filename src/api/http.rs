//! # HTTP Order API
//!
//! [`OrderApi`] over `reqwest`. Every call is a single `POST` with the admin
//! token forwarded verbatim in a `token` header. There is no retry, no
//! caching and no timeout beyond the client defaults.
use crate::api::{Ack, ApiError, Envelope, OrderApi, OrderList};
use crate::model::{Order, OrderId, OrderStatus, StatusUpdate};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument};

const LIST_PATH: &str = "/api/order/list";
const STATUS_PATH: &str = "/api/order/status";

/// Client for the backend order endpoints.
#[derive(Clone)]
pub struct HttpOrderApi {
    http: reqwest::Client,
    backend_url: String,
}

impl HttpOrderApi {
    pub fn new(backend_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), backend_url)
    }

    pub fn with_client(http: reqwest::Client, backend_url: impl Into<String>) -> Self {
        let backend_url = backend_url.into().trim_end_matches('/').to_string();
        Self { http, backend_url }
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    async fn post<B, T>(&self, path: &str, token: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.backend_url, path);
        debug!(%url, "Sending request");

        let response = self
            .http
            .post(&url)
            .header("token", token)
            .json(body)
            .send()
            .await?
            .error_for_status()?;

        let bytes = response.bytes().await?;
        let envelope: Envelope<T> =
            serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))?;
        envelope.into_result()
    }
}

#[async_trait]
impl OrderApi for HttpOrderApi {
    #[instrument(skip(self, token))]
    async fn list_orders(&self, token: &str) -> Result<Vec<Order>, ApiError> {
        let list: OrderList = self
            .post(LIST_PATH, token, &serde_json::json!({}))
            .await?;
        debug!(count = list.orders.len(), "Orders received");
        Ok(list.orders)
    }

    #[instrument(skip(self, token))]
    async fn update_status(
        &self,
        token: &str,
        order_id: &OrderId,
        status: OrderStatus,
    ) -> Result<(), ApiError> {
        let body = StatusUpdate {
            order_id: order_id.clone(),
            status,
        };
        let _: Ack = self.post(STATUS_PATH, token, &body).await?;
        Ok(())
    }
}
