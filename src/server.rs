//! Rental platform HTTP server implementation.

use crate::config::RentalConfig;
use crate::error::Result;
use crate::registry::{create_registry, AddItem, Item, ItemRegistry, RentItem, UpdateItem};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{delete, get, post, put},
    Router,
};
use serde::Serialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

type SharedRegistry = Arc<dyn ItemRegistry>;

#[derive(Clone)]
struct AppState {
    registry: SharedRegistry,
}

#[derive(Serialize)]
struct Receipt {
    message: &'static str,
    item: Item,
}

/// The main rental platform server.
///
/// Serves the item registry over HTTP/JSON. State is held in memory only;
/// a restart discards all items.
pub struct RentalServer {
    addr: SocketAddr,
    _handle: tokio::task::JoinHandle<()>,
}

impl RentalServer {
    /// Creates and starts a new rental server with the given configuration.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use rental_backend::{RentalServer, RentalConfig};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = RentalConfig::new().with_port(3000);
    /// let server = RentalServer::new(config).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn new(config: RentalConfig) -> Result<Self> {
        let registry = create_registry();

        let state = AppState { registry };

        let app = Router::new()
            .route("/", get(banner))
            .route("/items", post(add_item))
            .route("/items", get(list_items))
            .route("/items/{id}", get(get_item))
            .route("/items/{id}", put(update_item))
            .route("/items/{id}", delete(delete_item))
            .route("/items/rent/{id}", post(rent_item))
            .route("/items/return/{id}", put(return_item))
            .layer(TraceLayer::new_for_http())
            .with_state(state);

        let bind_addr = if let Some(port) = config.port {
            format!("{}:{}", config.host, port)
        } else {
            format!("{}:0", config.host)
        };

        let listener = TcpListener::bind(&bind_addr).await?;
        let addr = listener.local_addr()?;

        info!("Peer-to-Peer Rental Platform Backend is running on http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Ok(Self {
            addr,
            _handle: handle,
        })
    }

    /// Returns the socket address the server is bound to.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Returns the full URL of the rental server.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use rental_backend::{RentalServer, RentalConfig};
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let server = RentalServer::new(RentalConfig::new()).await?;
    /// println!("Rental platform URL: {}", server.url());
    /// # Ok(())
    /// # }
    /// ```
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Returns the port number the server is listening on.
    pub fn port(&self) -> u16 {
        self.addr.port()
    }
}

async fn banner() -> &'static str {
    "Peer-to-Peer Rental Platform Backend is running!"
}

async fn add_item(
    State(state): State<AppState>,
    body: Option<Json<AddItem>>,
) -> Result<impl IntoResponse> {
    let body = body.map(|Json(b)| b).unwrap_or_default();
    let item = state.registry.add(body).await?;
    info!("Added item {} ({})", item.id, item.name);

    Ok((StatusCode::CREATED, Json(item)))
}

async fn list_items(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let items = state.registry.list().await?;

    Ok(Json(items))
}

async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse> {
    let item = state.registry.get(id).await?;

    Ok(Json(item))
}

async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    body: Option<Json<UpdateItem>>,
) -> Result<impl IntoResponse> {
    let body = body.map(|Json(b)| b).unwrap_or_default();
    let item = state.registry.update(id, body).await?;
    info!("Updated item {}", id);

    Ok(Json(item))
}

async fn rent_item(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    body: Option<Json<RentItem>>,
) -> Result<impl IntoResponse> {
    let body = body.map(|Json(b)| b).unwrap_or_default();
    let item = state.registry.rent(id, body).await?;
    info!("Rented item {}", id);

    Ok(Json(Receipt {
        message: "Item rented successfully",
        item,
    }))
}

async fn return_item(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse> {
    let item = state.registry.return_item(id).await?;
    info!("Returned item {}", id);

    Ok(Json(Receipt {
        message: "Item returned successfully.",
        item,
    }))
}

async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse> {
    let item = state.registry.remove(id).await?;
    info!("Deleted item {}", id);

    Ok(Json(Receipt {
        message: "Item deleted successfully.",
        item,
    }))
}
