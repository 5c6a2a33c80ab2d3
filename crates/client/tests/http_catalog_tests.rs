use client::{ApiError, CatalogApi, HttpCatalog};
use data::{NewProduct, Product};
use testware::StubCatalogService;

fn product(id: i64, title: &str, price: f64) -> Product {
    Product {
        id,
        title: title.to_string(),
        price,
        description: None,
        img: None,
    }
}

fn new_product() -> NewProduct {
    NewProduct {
        title: "Mug".to_string(),
        price: 0.0,
        description: "x".to_string(),
        img: "y".to_string(),
    }
}

#[tokio::test]
async fn list_returns_products_in_service_order() {
    let service =
        StubCatalogService::spawn(vec![product(2, "Mug", 4.0), product(1, "Soap", 2.5)]).await;
    let catalog = HttpCatalog::new(service.base_url());

    let products = catalog.list().await.unwrap();

    assert_eq!(products, vec![product(2, "Mug", 4.0), product(1, "Soap", 2.5)]);
}

#[tokio::test]
async fn list_bypasses_intermediary_caches() {
    let service = StubCatalogService::spawn(vec![]).await;
    let catalog = HttpCatalog::new(service.base_url());

    catalog.list().await.unwrap();

    assert_eq!(
        service.get_cache_headers(),
        vec![Some("no-cache".to_string())]
    );
}

#[tokio::test]
async fn list_maps_non_success_statuses_to_errors() {
    let service = StubCatalogService::spawn(vec![]).await;
    service.set_fail_get(true);
    let catalog = HttpCatalog::new(service.base_url());

    let err = catalog.list().await.unwrap_err();

    assert!(matches!(err, ApiError::Status(500)));
}

#[tokio::test]
async fn list_rejects_a_malformed_body() {
    let service = StubCatalogService::spawn(vec![]).await;
    service.set_garbage_get(true);
    let catalog = HttpCatalog::new(service.base_url());

    let err = catalog.list().await.unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)));
}

#[tokio::test]
async fn create_sends_json_without_an_id() {
    let service = StubCatalogService::spawn(vec![]).await;
    let catalog = HttpCatalog::new(service.base_url());

    catalog.create(&new_product()).await.unwrap();

    let posts = service.recorded_posts();
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].content_type.as_deref(), Some("application/json"));
    assert!(posts[0].body.get("id").is_none());
    assert_eq!(posts[0].body["title"], "Mug");
    assert_eq!(posts[0].body["price"], 0.0);
    assert_eq!(posts[0].body["description"], "x");
    assert_eq!(posts[0].body["img"], "y");
}

#[tokio::test]
async fn create_maps_non_success_statuses_to_errors() {
    let service = StubCatalogService::spawn(vec![]).await;
    service.set_fail_post(true);
    let catalog = HttpCatalog::new(service.base_url());

    let err = catalog.create(&new_product()).await.unwrap_err();

    assert!(matches!(err, ApiError::Status(500)));
}

#[tokio::test]
async fn created_product_shows_up_on_the_next_list() {
    let service = StubCatalogService::spawn(vec![product(1, "Soap", 2.5)]).await;
    let catalog = HttpCatalog::new(service.base_url());

    catalog.create(&new_product()).await.unwrap();
    let products = catalog.list().await.unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(products[1].title, "Mug");
    // The id comes from the service, never from the client.
    assert_eq!(products[1].id, 2);
}
