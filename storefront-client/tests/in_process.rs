// Storefront client dispatching straight into the mock Router

mod common;

use common::*;
use std::sync::Arc;
use storefront_client::models::*;
use storefront_client::{
    Decimal, DomainError, HttpClient, InMemoryTokenStore, OneshotHttpClient, StorefrontClient, TokenStore,
};

fn client() -> (StorefrontClient<OneshotHttpClient>, Arc<MockState>) {
    init_tracing();
    let state = Arc::new(MockState::default());
    let tokens: Arc<dyn TokenStore> = Arc::new(InMemoryTokenStore::new());
    let http = OneshotHttpClient::new(router(state.clone()), tokens.clone());
    (StorefrontClient::with_parts(Arc::new(http), tokens), state)
}

#[tokio::test]
async fn test_sign_in_then_cart() {
    let (client, state) = client();

    let err = client.cart().get_cart().await.unwrap_err();
    assert_eq!(err, DomainError::InvalidToken);

    client.auth().sign_in(EMAIL, PASSWORD).await.unwrap();
    let cart = client.cart().add_item(2, 3).await.unwrap();
    assert_eq!(cart.item_count(), 3);
    assert_eq!(cart.subtotal(), Decimal::new(1485, 1));
    assert_eq!(
        state.last_authorization.lock().unwrap().as_deref(),
        Some(format!("Bearer {}", TOKEN).as_str())
    );

    client.auth().sign_out().await;
    assert!(!client.is_signed_in().await);
}

#[tokio::test]
async fn test_classification_matches_network_transport() {
    let (client, _) = client();

    assert_eq!(
        client.auth().sign_in(EMAIL, "nope").await.unwrap_err(),
        DomainError::InvalidCredentials
    );
    assert_eq!(
        client.products().get_product(99).await.unwrap_err(),
        DomainError::NotFound
    );

    client.auth().sign_in(EMAIL, PASSWORD).await.unwrap();
    assert_eq!(
        client.orders().get_order(500).await.unwrap_err(),
        DomainError::ServerInternal
    );
    assert_eq!(
        client.orders().get_order(503).await.unwrap_err(),
        DomainError::http(503, Some("maintenance".into()))
    );
}

#[tokio::test]
async fn test_query_reaches_router() {
    let (client, _) = client();

    let kitchen = client
        .products()
        .get_products(&ProductQuery::category(2))
        .await
        .unwrap();
    assert_eq!(kitchen.len(), 1);
    assert_eq!(kitchen[0].name, "Kettle");

    let shoes = client
        .products()
        .get_products(&ProductQuery::search("shoes"))
        .await
        .unwrap();
    assert_eq!(shoes.len(), 2);
}

#[tokio::test]
async fn test_consistency_checks() {
    let (client, _) = client();
    client.auth().sign_in(EMAIL, PASSWORD).await.unwrap();

    let ok = AddressCreate::new("Porto", "Rua das Flores", "5").with_postal_code("4050-262");
    assert_eq!(
        client.addresses().create_address(&ok).await.unwrap().postal_code.as_deref(),
        Some("4050-262")
    );

    let drifted = AddressCreate::new(DRIFT_CITY, "Main", "1");
    assert_eq!(
        client.addresses().create_address(&drifted).await.unwrap_err(),
        DomainError::DataInconsistent
    );
}

#[tokio::test]
async fn test_empty_and_undecodable_bodies() {
    let (client, _) = client();
    client.auth().sign_in(EMAIL, PASSWORD).await.unwrap();

    client.addresses().delete_address(1).await.unwrap();

    let http = OneshotHttpClient::new(
        router(Arc::new(MockState::default())),
        Arc::new(InMemoryTokenStore::new()),
    );
    let failure = http.get::<Cart>("broken").await.unwrap_err();
    assert!(matches!(failure, storefront_client::Failure::Unexpected { .. }));
}
