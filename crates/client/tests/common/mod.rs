//! Shared helpers for client integration tests.
//!
//! Each test mounts the routes it needs on an axum router and serves it on
//! `127.0.0.1:0`. Every request is counted so tests can assert that a
//! rejected form never reached the network.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::Router;

use promo_client::session::{KEY_AUTH_TOKEN, KEY_USER_DATA};
use promo_client::{MemorySessionStore, PromoApi, SessionStore};
use promo_core::roles::Role;
use promo_core::session::AuthData;

/// A running fake of the campaign API.
pub struct FakeApi {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
}

impl FakeApi {
    /// Number of requests received so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

async fn count_request(
    State(hits): State<Arc<AtomicUsize>>,
    request: Request,
    next: Next,
) -> Response {
    hits.fetch_add(1, Ordering::SeqCst);
    next.run(request).await
}

/// Serve `router` on an ephemeral port.
pub async fn serve(router: Router) -> FakeApi {
    let hits = Arc::new(AtomicUsize::new(0));
    let app = router.layer(middleware::from_fn_with_state(hits.clone(), count_request));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    FakeApi {
        base_url: format!("http://{addr}"),
        hits,
    }
}

pub fn session(rol: Role) -> AuthData {
    AuthData {
        token: "tok-123".to_string(),
        email: "vendedor@tienda.bo".to_string(),
        nombre: "Vendedor Uno".to_string(),
        rol,
    }
}

/// Client with an in-memory store, optionally pre-seeded with a session.
pub fn client(base_url: &str, user: Option<&AuthData>) -> PromoApi {
    let store = MemorySessionStore::new();
    if let Some(user) = user {
        store.set(KEY_AUTH_TOKEN, &user.token).unwrap();
        store
            .set(KEY_USER_DATA, &serde_json::to_string(user).unwrap())
            .unwrap();
    }
    PromoApi::new(base_url, Box::new(store))
}
