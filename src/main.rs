//! # Storefront Demo
//!
//! Seeds a small catalog, walks the cart through a few edits and prints the
//! cart page. When `STOREFRONT_ADMIN_TOKEN` is set, also loads the admin
//! order list from the configured backend and prints it.

use std::sync::Arc;
use storefront::config::StorefrontConfig;
use storefront::lifecycle::tracing::setup_tracing;
use storefront::lifecycle::Storefront;
use storefront::model::Product;
use storefront::notify::TracingNotifier;
use storefront::router::{Navigator, Route, TracingNavigator};
use tracing::{error, info, Instrument};

const ENV_ADMIN_TOKEN: &str = "STOREFRONT_ADMIN_TOKEN";

fn catalog() -> Vec<Product> {
    vec![
        Product::new("p1", "Women Round Neck Cotton Top", 100.0, vec!["p_img1.png".into()]),
        Product::new("p2", "Men Slim Fit Jacket", 220.0, vec!["p_img2_1.png".into()]),
        Product::new("p3", "Kid Tapered Trousers", 60.0, vec![]),
    ]
}

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = StorefrontConfig::from_env().map_err(|e| e.to_string())?;
    info!(backend_url = %config.backend_url, "Starting storefront demo");

    let storefront = Storefront::new(config, catalog());

    let span = tracing::info_span!("shopping");
    async {
        let shop = &storefront.shop_client;
        shop.add_to_cart("p1".into(), "M".to_string()).await?;
        shop.add_to_cart("p1".into(), "M".to_string()).await?;
        shop.add_to_cart("p2".into(), "L".to_string()).await?;
        shop.add_to_cart("p3".into(), "S".to_string()).await?;
        let count = shop.cart_count().await?;
        info!(count, "Cart filled");
        Ok::<_, storefront::shop::ShopError>(())
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    let span = tracing::info_span!("cart_page");
    async {
        TracingNavigator.navigate(Route::Cart);
        let mut cart = storefront.cart_view(Arc::new(TracingNavigator)).await?;

        if let Some(line) = cart.lines().first().cloned() {
            cart.edit_quantity(&line, "3").await?;
        }
        if let Some(line) = cart.lines().last().cloned() {
            cart.remove(&line).await?;
        }
        cart.sync();

        println!("{}", cart.render()?);
        cart.proceed_to_checkout();
        Ok::<_, storefront::views::CartError>(())
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    match std::env::var(ENV_ADMIN_TOKEN) {
        Ok(token) => {
            let span = tracing::info_span!("admin_orders");
            async {
                let mut orders =
                    storefront.orders_view(Arc::new(TracingNotifier), Some(token));
                let outcome = orders.mount().await;
                info!(?outcome, "Orders page mounted");
                if outcome.is_applied() {
                    println!("{}", orders.render());
                }
            }
            .instrument(span)
            .await;
        }
        Err(_) => info!("{} not set, skipping admin orders", ENV_ADMIN_TOKEN),
    }

    if let Err(e) = storefront.shutdown().await {
        error!(error = %e, "Shutdown failed");
        return Err(e);
    }

    info!("Demo completed successfully");
    Ok(())
}
