//! Axum handlers and the shared state they receive.

use std::sync::Arc;

use axum::{routing::get, Router};
use db::ClientStore;

use crate::messages::{Locale, Messages};

pub mod clients;

/// State cloned into every handler.
///
/// The store handle is created and torn down by the process that owns it;
/// handlers only borrow it for one round trip per request.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ClientStore>,
    pub messages: &'static Messages,
}

impl AppState {
    pub fn new(store: Arc<dyn ClientStore>, locale: Locale) -> Self {
        Self {
            store,
            messages: locale.messages(),
        }
    }
}

/// Routes for the clients resource, relative to wherever they are mounted.
pub fn client_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(clients::list).post(clients::create))
        .route(
            "/:id",
            get(clients::get).put(clients::update).delete(clients::delete),
        )
}
