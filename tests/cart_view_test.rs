use std::sync::Arc;
use storefront::config::StorefrontConfig;
use storefront::lifecycle::Storefront;
use storefront::model::{CartLine, Product};
use storefront::router::{RecordingNavigator, Route};
use storefront::views::QuantityEdit;

fn catalog() -> Vec<Product> {
    vec![
        Product::new("p1", "Tee", 20.0, vec!["tee.png".into()]),
        Product::new("p2", "Hoodie", 45.0, vec!["hoodie.png".into()]),
    ]
}

/// Two pages looking at the same cart see each other's edits.
#[tokio::test]
async fn test_views_share_one_cart() {
    let storefront = Storefront::new(StorefrontConfig::default(), catalog());
    storefront
        .shop_client
        .add_to_cart("p1".into(), "M".to_string())
        .await
        .unwrap();

    let navigator = RecordingNavigator::new();
    let editor = storefront.cart_view(Arc::new(navigator.clone())).await.unwrap();
    let mut watcher = storefront.cart_view(Arc::new(navigator.clone())).await.unwrap();

    let line = editor.lines()[0].clone();
    assert_eq!(
        editor.edit_quantity(&line, " 4 ").await.unwrap(),
        QuantityEdit::Applied(4)
    );

    watcher.wait_for_change().await.unwrap();
    assert_eq!(watcher.lines(), &[CartLine::new("p1", "M", 4)]);
    assert_eq!(watcher.totals().subtotal, 80.0);
    assert_eq!(watcher.totals().total, 90.0);

    drop(editor);
    drop(watcher);
    storefront.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_removing_last_line_empties_page() {
    let storefront = Storefront::new(StorefrontConfig::default(), catalog());
    storefront
        .shop_client
        .add_to_cart("p2".into(), "L".to_string())
        .await
        .unwrap();

    let mut view = storefront
        .cart_view(Arc::new(RecordingNavigator::new()))
        .await
        .unwrap();
    let line = view.lines()[0].clone();

    view.remove(&line).await.unwrap();
    assert!(view.sync());

    assert!(view.lines().is_empty());
    assert_eq!(storefront.shop_client.cart_count().await.unwrap(), 0);
    let items = storefront.shop_client.cart_items().await.unwrap();
    assert_eq!(items.quantity(&"p2".into(), "L"), 0);

    let page = view.render().unwrap();
    assert!(page.rows.is_empty());
    assert_eq!(page.totals.total, 0.0);

    drop(view);
    storefront.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_catalog_reload_and_checkout() {
    let storefront = Storefront::new(StorefrontConfig::default(), vec![]);
    storefront
        .shop_client
        .add_to_cart("p1".into(), "S".to_string())
        .await
        .unwrap();

    let navigator = RecordingNavigator::new();
    let mut view = storefront.cart_view(Arc::new(navigator.clone())).await.unwrap();
    assert!(view.render().is_err());

    storefront.shop_client.set_products(catalog()).await.unwrap();
    view.reload_products().await.unwrap();

    let page = view.render().unwrap();
    assert_eq!(page.rows[0].name, "Tee");
    assert!(page.to_string().starts_with("YOUR CART\n"));

    view.proceed_to_checkout();
    assert_eq!(navigator.visited(), vec![Route::PlaceOrder]);
    assert_eq!(Route::PlaceOrder.path(), "/place-order");

    drop(view);
    storefront.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_huge_quantity_edits_leave_shop_usable() {
    let storefront = Storefront::new(StorefrontConfig::default(), catalog());
    storefront
        .shop_client
        .add_to_cart("p1".into(), "M".to_string())
        .await
        .unwrap();
    storefront
        .shop_client
        .add_to_cart("p2".into(), "L".to_string())
        .await
        .unwrap();

    let mut view = storefront
        .cart_view(Arc::new(RecordingNavigator::new()))
        .await
        .unwrap();
    let lines = view.lines().to_vec();
    for line in &lines {
        assert_eq!(
            view.edit_quantity(line, "3000000000").await.unwrap(),
            QuantityEdit::Applied(3_000_000_000)
        );
    }

    assert_eq!(storefront.shop_client.cart_count().await.unwrap(), u32::MAX);
    assert!(view.sync());
    assert_eq!(view.lines().len(), 2);
    assert_eq!(view.totals().subtotal, 3_000_000_000.0 * 20.0 + 3_000_000_000.0 * 45.0);

    drop(view);
    storefront.shutdown().await.unwrap();
}
