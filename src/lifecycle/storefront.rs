use crate::api::HttpOrderApi;
use crate::config::StorefrontConfig;
use crate::model::Product;
use crate::notify::Notifier;
use crate::router::Navigator;
use crate::shop::{self, ShopClient};
use crate::views::{CartError, CartView, OrdersView};
use std::sync::Arc;
use tracing::{error, info};

/// Runtime orchestrator for the storefront.
///
/// Owns the shop actor task and the shared HTTP client. Views built from it
/// hold clones of the shop client, so they must be dropped before
/// [`Storefront::shutdown`] can complete.
pub struct Storefront {
    /// Client for the shop actor (cart and catalog).
    pub shop_client: ShopClient,

    /// Backend client shared by every orders view.
    pub order_api: Arc<HttpOrderApi>,

    config: StorefrontConfig,

    /// Task handles for running actors, awaited on shutdown.
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl Storefront {
    /// Spawns the shop actor with `products` as its catalog.
    pub fn new(config: StorefrontConfig, products: Vec<Product>) -> Self {
        let (shop_actor, shop_client) = shop::new(products);
        let shop_handle = tokio::spawn(shop_actor.run());

        let order_api = Arc::new(HttpOrderApi::new(config.backend_url.clone()));
        info!(backend_url = %order_api.backend_url(), "Storefront started");

        Self {
            shop_client,
            order_api,
            config,
            handles: vec![shop_handle],
        }
    }

    pub fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// An admin orders view. Call [`OrdersView::mount`] to load it.
    pub fn orders_view(&self, notifier: Arc<dyn Notifier>, token: Option<String>) -> OrdersView {
        OrdersView::new(self.order_api.clone(), notifier, self.config.clone(), token)
    }

    pub async fn cart_view(&self, navigator: Arc<dyn Navigator>) -> Result<CartView, CartError> {
        CartView::new(self.shop_client.clone(), navigator, self.config.clone()).await
    }

    /// Drops the shop client and waits for the actor task to exit.
    ///
    /// Returns an error if the task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down storefront...");
        drop(self.shop_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Storefront shutdown complete.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CartLine;
    use crate::router::RecordingNavigator;

    #[tokio::test]
    async fn test_cart_view_sees_shop_and_shutdown_completes() {
        let storefront = Storefront::new(
            StorefrontConfig::default(),
            vec![Product::new("p1", "Tee", 20.0, vec![])],
        );
        storefront
            .shop_client
            .add_to_cart("p1".into(), "M".to_string())
            .await
            .unwrap();

        let view = storefront
            .cart_view(Arc::new(RecordingNavigator::new()))
            .await
            .unwrap();
        assert_eq!(view.lines(), &[CartLine::new("p1", "M", 1)]);
        assert_eq!(view.totals().total, 30.0);

        drop(view);
        storefront.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_orders_view_uses_configured_backend() {
        let config = StorefrontConfig {
            backend_url: "http://backend:9000".to_string(),
            ..StorefrontConfig::default()
        };
        let storefront = Storefront::new(config, vec![]);
        assert_eq!(storefront.order_api.backend_url(), "http://backend:9000");

        let view = storefront.orders_view(Arc::new(crate::notify::RecordingNotifier::new()), None);
        assert!(view.orders().is_empty());
        storefront.shutdown().await.unwrap();
    }
}
