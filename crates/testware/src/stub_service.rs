use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;

use data::{NewProduct, Product};

/// One captured `POST /products` request, kept raw so tests can assert the
/// exact wire shape the client produced.
#[derive(Debug, Clone)]
pub struct RecordedPost {
    pub content_type: Option<String>,
    pub body: serde_json::Value,
}

#[derive(Clone, Default)]
struct StubState {
    products: Arc<Mutex<Vec<Product>>>,
    next_id: Arc<AtomicI64>,
    fail_get: Arc<AtomicBool>,
    fail_post: Arc<AtomicBool>,
    garbage_get: Arc<AtomicBool>,
    get_cache_headers: Arc<Mutex<Vec<Option<String>>>>,
    posts: Arc<Mutex<Vec<RecordedPost>>>,
}

/// An in-process stand-in for the remote product service, serving
/// `GET /products` and `POST /products` on an ephemeral local port.
pub struct StubCatalogService {
    addr: SocketAddr,
    state: StubState,
}

impl StubCatalogService {
    pub async fn spawn(initial: Vec<Product>) -> Self {
        let next_id = initial.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let state = StubState {
            products: Arc::new(Mutex::new(initial)),
            next_id: Arc::new(AtomicI64::new(next_id)),
            ..StubState::default()
        };

        let router = Router::new()
            .route("/products", get(list_products).post(create_product))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub service");
        let addr = listener.local_addr().expect("Failed to read local addr");

        tokio::spawn(async move {
            axum::serve(listener, router)
                .await
                .expect("Stub service stopped unexpectedly");
        });

        Self { addr, state }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Snapshot of the service-side collection.
    pub fn products(&self) -> Vec<Product> {
        self.state.products.lock().unwrap().clone()
    }

    pub fn recorded_posts(&self) -> Vec<RecordedPost> {
        self.state.posts.lock().unwrap().clone()
    }

    /// The `Cache-Control` header of each GET received so far, in order.
    pub fn get_cache_headers(&self) -> Vec<Option<String>> {
        self.state.get_cache_headers.lock().unwrap().clone()
    }

    pub fn set_fail_get(&self, fail: bool) {
        self.state.fail_get.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_post(&self, fail: bool) {
        self.state.fail_post.store(fail, Ordering::SeqCst);
    }

    /// Makes subsequent GETs answer 200 with a body that is not a product
    /// array.
    pub fn set_garbage_get(&self, garbage: bool) {
        self.state.garbage_get.store(garbage, Ordering::SeqCst);
    }
}

async fn list_products(State(state): State<StubState>, headers: HeaderMap) -> Response {
    let cache_control = headers
        .get(header::CACHE_CONTROL)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state.get_cache_headers.lock().unwrap().push(cache_control);

    if state.fail_get.load(Ordering::SeqCst) {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    if state.garbage_get.load(Ordering::SeqCst) {
        return axum::Json(serde_json::json!({"not": "a product array"})).into_response();
    }

    let products = state.products.lock().unwrap().clone();
    axum::Json(products).into_response()
}

async fn create_product(
    State(state): State<StubState>,
    headers: HeaderMap,
    body: String,
) -> Response {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let json: serde_json::Value = match serde_json::from_str(&body) {
        Ok(json) => json,
        Err(e) => {
            tracing::error!("Stub service received a non-JSON body: {e}");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };
    state.posts.lock().unwrap().push(RecordedPost {
        content_type,
        body: json.clone(),
    });

    if state.fail_post.load(Ordering::SeqCst) {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    let new_product: NewProduct = match serde_json::from_value(json) {
        Ok(p) => p,
        Err(e) => {
            tracing::error!("Stub service received a malformed product: {e}");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    let product = Product {
        id: state.next_id.fetch_add(1, Ordering::SeqCst),
        title: new_product.title,
        price: new_product.price,
        description: Some(new_product.description),
        img: Some(new_product.img),
    };
    state.products.lock().unwrap().push(product);

    StatusCode::CREATED.into_response()
}
