//! Mock storefront backend for integration tests

#![allow(dead_code)]

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde_json::json;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use storefront_client::Decimal;
use storefront_client::models::*;

pub const EMAIL: &str = "ada@example.com";
pub const PASSWORD: &str = "secret";
pub const TOKEN: &str = "tok-ada";
pub const TAKEN_EMAIL: &str = "taken@example.com";
/// City the backend silently rewrites on create
pub const DRIFT_CITY: &str = "Atlantis";
/// Holder name the backend echoes with the wrong card digits
pub const DRIFT_HOLDER: &str = "MALLORY";
/// Order the backend takes 5 seconds to answer
pub const SLOW_ORDER_ID: i64 = 408;

#[derive(Default)]
pub struct MockState {
    cart: Mutex<Cart>,
    user: Mutex<Option<UserInfo>>,
    /// Reviews posted, valid or not
    pub review_posts: AtomicUsize,
    /// Last Authorization header seen
    pub last_authorization: Mutex<Option<String>>,
}

type Shared = Arc<MockState>;

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}

fn authorize(state: &MockState, headers: &HeaderMap) -> Result<(), Response> {
    let value = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    *state.last_authorization.lock().unwrap() = value.clone();
    match value {
        Some(v) if v == format!("Bearer {}", TOKEN) => Ok(()),
        _ => Err(error(StatusCode::UNAUTHORIZED, "token expired")),
    }
}

fn ada() -> UserInfo {
    UserInfo {
        id: 1,
        name: "Ada".into(),
        surname: "Lovelace".into(),
        phone: None,
        email: EMAIL.into(),
        birth_date: Some("1815-12-10".into()),
        gender: None,
        updated_at: None,
    }
}

fn catalogue() -> Vec<Product> {
    let product = |id, name: &str, price, category_id| Product {
        id,
        name: name.into(),
        description: None,
        price,
        category_id,
        image_url: None,
        rating: None,
        in_stock: true,
    };
    vec![
        product(1, "Red shoes", Decimal::new(599, 1), 1),
        product(2, "Blue shoes", Decimal::new(495, 1), 1),
        product(3, "Kettle", Decimal::new(1999, 2), 2),
    ]
}

async fn sign_in(Json(req): Json<SignInRequest>) -> Response {
    if req.email == EMAIL && req.password == PASSWORD {
        Json(AuthToken {
            token: TOKEN.into(),
        })
        .into_response()
    } else {
        error(StatusCode::UNAUTHORIZED, "bad credentials")
    }
}

async fn sign_up(Json(req): Json<SignUpRequest>) -> Response {
    if req.email == TAKEN_EMAIL {
        error(StatusCode::CONFLICT, "email already registered")
    } else if req.password.len() < 6 {
        error(StatusCode::BAD_REQUEST, "password too short")
    } else {
        Json(AuthToken {
            token: TOKEN.into(),
        })
        .into_response()
    }
}

async fn products(Query(query): Query<ProductQuery>) -> Response {
    let items: Vec<Product> = catalogue()
        .into_iter()
        .filter(|p| query.category_id.is_none_or(|c| p.category_id == c))
        .filter(|p| {
            query
                .search
                .as_deref()
                .is_none_or(|s| p.name.to_lowercase().contains(&s.to_lowercase()))
        })
        .collect();
    Json(items).into_response()
}

async fn product(Path(id): Path<i64>) -> Response {
    match catalogue().into_iter().find(|p| p.id == id) {
        Some(p) => Json(p).into_response(),
        None => error(StatusCode::NOT_FOUND, "no such product"),
    }
}

async fn categories() -> Response {
    Json(vec![
        Category {
            id: 1,
            name: "Shoes".into(),
        },
        Category {
            id: 2,
            name: "Kitchen".into(),
        },
    ])
    .into_response()
}

fn cart_total(cart: &mut Cart) {
    cart.total = cart.subtotal();
}

async fn get_cart(State(state): State<Shared>, headers: HeaderMap) -> Response {
    if let Err(r) = authorize(&state, &headers) {
        return r;
    }
    Json(state.cart.lock().unwrap().clone()).into_response()
}

async fn add_cart_item(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(req): Json<CartItemAdd>,
) -> Response {
    if let Err(r) = authorize(&state, &headers) {
        return r;
    }
    let Some(product) = catalogue().into_iter().find(|p| p.id == req.product_id) else {
        return error(StatusCode::NOT_FOUND, "no such product");
    };
    let mut cart = state.cart.lock().unwrap();
    match cart.items.iter_mut().find(|i| i.product_id == req.product_id) {
        Some(item) => item.quantity += req.quantity,
        None => cart.items.push(CartItem {
            product_id: product.id,
            name: product.name,
            price: product.price,
            quantity: req.quantity,
        }),
    }
    cart_total(&mut cart);
    Json(cart.clone()).into_response()
}

async fn update_cart_item(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(product_id): Path<i64>,
    Json(req): Json<CartItemUpdate>,
) -> Response {
    if let Err(r) = authorize(&state, &headers) {
        return r;
    }
    let mut cart = state.cart.lock().unwrap();
    let Some(item) = cart.items.iter_mut().find(|i| i.product_id == product_id) else {
        return error(StatusCode::NOT_FOUND, "not in cart");
    };
    item.quantity = req.quantity;
    cart_total(&mut cart);
    Json(cart.clone()).into_response()
}

async fn remove_cart_item(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(product_id): Path<i64>,
) -> Response {
    if let Err(r) = authorize(&state, &headers) {
        return r;
    }
    let mut cart = state.cart.lock().unwrap();
    cart.items.retain(|i| i.product_id != product_id);
    cart_total(&mut cart);
    Json(cart.clone()).into_response()
}

async fn get_addresses(State(state): State<Shared>, headers: HeaderMap) -> Response {
    if let Err(r) = authorize(&state, &headers) {
        return r;
    }
    Json(Vec::<Address>::new()).into_response()
}

async fn create_address(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(req): Json<AddressCreate>,
) -> Response {
    if let Err(r) = authorize(&state, &headers) {
        return r;
    }
    let city = if req.city == DRIFT_CITY {
        "Elsewhere".to_string()
    } else {
        req.city
    };
    Json(Address {
        id: 7,
        city,
        street: req.street,
        house: req.house,
        apartment: req.apartment,
        postal_code: req.postal_code,
        is_default: req.is_default,
        created_at: Some(1_700_000_000_000),
    })
    .into_response()
}

async fn delete_resource(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Response {
    if let Err(r) = authorize(&state, &headers) {
        return r;
    }
    if id == 404 {
        return error(StatusCode::NOT_FOUND, "gone");
    }
    StatusCode::NO_CONTENT.into_response()
}

async fn get_payment_methods(State(state): State<Shared>, headers: HeaderMap) -> Response {
    if let Err(r) = authorize(&state, &headers) {
        return r;
    }
    Json(Vec::<PaymentMethod>::new()).into_response()
}

async fn create_payment_method(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(req): Json<PaymentMethodCreate>,
) -> Response {
    if let Err(r) = authorize(&state, &headers) {
        return r;
    }
    let card_last4 = if req.holder_name == DRIFT_HOLDER {
        "0000".to_string()
    } else {
        req.last4().unwrap_or_default()
    };
    Json(PaymentMethod {
        id: 3,
        card_last4,
        holder_name: req.holder_name,
        expiry_month: req.expiry_month,
        expiry_year: req.expiry_year,
        created_at: None,
    })
    .into_response()
}

fn order(id: i64, address_id: i64, payment_method_id: i64) -> Order {
    Order {
        id,
        items: vec![OrderItem {
            product_id: 3,
            name: "Kettle".into(),
            price: Decimal::new(1999, 2),
            quantity: 1,
        }],
        total: Decimal::new(1999, 2),
        status: OrderStatus::Pending,
        address_id,
        payment_method_id,
        created_at: 1_700_000_000_000,
    }
}

async fn get_orders(State(state): State<Shared>, headers: HeaderMap) -> Response {
    if let Err(r) = authorize(&state, &headers) {
        return r;
    }
    Json(vec![order(1, 7, 3)]).into_response()
}

async fn get_order(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Response {
    if let Err(r) = authorize(&state, &headers) {
        return r;
    }
    match id {
        1 => Json(order(1, 7, 3)).into_response(),
        SLOW_ORDER_ID => {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(order(SLOW_ORDER_ID, 7, 3)).into_response()
        }
        500 => error(StatusCode::INTERNAL_SERVER_ERROR, "database down"),
        503 => error(StatusCode::SERVICE_UNAVAILABLE, "maintenance"),
        _ => error(StatusCode::NOT_FOUND, "no such order"),
    }
}

async fn checkout(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(req): Json<CheckoutRequest>,
) -> Response {
    if let Err(r) = authorize(&state, &headers) {
        return r;
    }
    let mut cart = state.cart.lock().unwrap();
    if cart.is_empty() {
        return error(StatusCode::BAD_REQUEST, "cart is empty");
    }
    *cart = Cart::default();
    Json(order(2, req.address_id, req.payment_method_id)).into_response()
}

async fn get_reviews(Path(product_id): Path<i64>) -> Response {
    Json(vec![Review {
        id: 1,
        product_id,
        author: "Grace".into(),
        rating: 4,
        text: Some("Sturdy".into()),
        created_at: 1_700_000_000_000,
    }])
    .into_response()
}

async fn create_review(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(product_id): Path<i64>,
    Json(req): Json<ReviewCreate>,
) -> Response {
    state.review_posts.fetch_add(1, Ordering::SeqCst);
    if let Err(r) = authorize(&state, &headers) {
        return r;
    }
    Json(Review {
        id: 2,
        product_id,
        author: "Ada".into(),
        rating: req.rating,
        text: req.text,
        created_at: 1_700_000_000_000,
    })
    .into_response()
}

async fn get_user(State(state): State<Shared>, headers: HeaderMap) -> Response {
    if let Err(r) = authorize(&state, &headers) {
        return r;
    }
    let user = state.user.lock().unwrap().clone().unwrap_or_else(ada);
    Json(user).into_response()
}

async fn update_user(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(req): Json<UserInfoUpdate>,
) -> Response {
    if let Err(r) = authorize(&state, &headers) {
        return r;
    }
    // Phone numbers come back normalized
    let phone = req.phone.map(|p| p.replace(' ', ""));
    let user = UserInfo {
        id: 1,
        name: req.name,
        surname: req.surname,
        phone,
        email: req.email,
        birth_date: req.birth_date,
        gender: req.gender,
        updated_at: Some(1_700_000_000_000),
    };
    *state.user.lock().unwrap() = Some(user.clone());
    Json(user).into_response()
}

async fn broken_json() -> Response {
    (StatusCode::OK, "<html>not json</html>").into_response()
}

/// Build the mock backend router
pub fn router(state: Shared) -> Router {
    Router::new()
        .route("/auth/sign-in", post(sign_in))
        .route("/auth/sign-up", post(sign_up))
        .route("/products", get(products))
        .route("/products/{id}", get(product))
        .route("/products/{id}/reviews", get(get_reviews).post(create_review))
        .route("/categories", get(categories))
        .route("/cart", get(get_cart))
        .route("/cart/items", post(add_cart_item))
        .route(
            "/cart/items/{product_id}",
            put(update_cart_item).delete(remove_cart_item),
        )
        .route("/addresses", get(get_addresses).post(create_address))
        .route("/addresses/{id}", delete(delete_resource))
        .route(
            "/payment-methods",
            get(get_payment_methods).post(create_payment_method),
        )
        .route("/payment-methods/{id}", delete(delete_resource))
        .route("/orders", get(get_orders).post(checkout))
        .route("/orders/{id}", get(get_order))
        .route("/user", get(get_user).put(update_user))
        .route("/broken", get(broken_json))
        .with_state(state)
}

/// Mock backend listening on an ephemeral local port
pub struct MockServer {
    pub addr: SocketAddr,
    pub state: Shared,
}

impl MockServer {
    pub async fn start() -> Self {
        let state = Shared::default();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = router(state.clone());
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Self { addr, state }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

/// Address of a port nobody listens on
pub async fn closed_port() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    addr
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storefront_client=debug".into()),
        )
        .with_test_writer()
        .try_init();
}
