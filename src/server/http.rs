//! HTTP server implementation
//!
//! hyper http1 with TokioIo for async handling; one spawned task per
//! connection and a method+path match for routing.

use bytes::Bytes;
use http_body_util::Full;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Instant;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::config::Args;
use crate::routes;
use crate::store::Storage;
use crate::types::Result;

/// Shared application state
pub struct AppState {
    pub args: Args,
    /// Entity store behind the trait seam, so a durable backend can be
    /// swapped in without touching handlers
    pub store: Arc<dyn Storage>,
    /// Process start, for the health endpoint's uptime figure
    pub started_at: Instant,
}

impl AppState {
    pub fn new(args: Args, store: Arc<dyn Storage>) -> Self {
        Self {
            args,
            store,
            started_at: Instant::now(),
        }
    }
}

/// Start the HTTP server
pub async fn run(state: Arc<AppState>) -> Result<()> {
    let listener = TcpListener::bind(state.args.listen).await?;

    info!(
        "Taskdeck listening on {} (user {})",
        state.args.listen, state.args.user_id
    );

    loop {
        match listener.accept().await {
            Ok((stream, addr)) => {
                let state = Arc::clone(&state);
                tokio::spawn(async move {
                    let io = TokioIo::new(stream);

                    let service = service_fn(move |req| {
                        let state = Arc::clone(&state);
                        async move { handle_request(state, addr, req).await }
                    });

                    if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                        error!("Error serving connection from {}: {:?}", addr, err);
                    }
                });
            }
            Err(e) => {
                error!("Error accepting connection: {:?}", e);
            }
        }
    }
}

/// Route incoming HTTP requests
async fn handle_request(
    state: Arc<AppState>,
    addr: SocketAddr,
    req: Request<Incoming>,
) -> std::result::Result<Response<Full<Bytes>>, hyper::Error> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    info!("[{}] {} {}", addr, method, path);

    let response = match (method, path.as_str()) {
        // Liveness probe
        (Method::GET, "/health") | (Method::GET, "/healthz") => routes::health_check(&state),

        // Build info for deployment verification
        (Method::GET, "/version") => routes::version_info(),

        // CORS preflight
        (Method::OPTIONS, _) => preflight_response(),

        // Categories
        (Method::GET, "/api/categories") => {
            routes::handle_list_categories(Arc::clone(&state)).await
        }
        (Method::POST, "/api/categories") => {
            routes::handle_create_category(req, Arc::clone(&state)).await
        }
        (Method::DELETE, p) if p.starts_with("/api/categories/") => {
            let id = p.strip_prefix("/api/categories/").unwrap_or("");
            routes::handle_delete_category(Arc::clone(&state), id).await
        }

        // Tasks; the reorder route must win over the {id} suffix routes
        (Method::GET, "/api/tasks") => routes::handle_list_tasks(Arc::clone(&state)).await,
        (Method::POST, "/api/tasks") => routes::handle_create_task(req, Arc::clone(&state)).await,
        (Method::POST, "/api/tasks/reorder") => {
            routes::handle_reorder_tasks(req, Arc::clone(&state)).await
        }
        (Method::PATCH, p) if p.starts_with("/api/tasks/") => {
            let id = p.strip_prefix("/api/tasks/").unwrap_or("");
            routes::handle_update_task(req, Arc::clone(&state), id).await
        }
        (Method::DELETE, p) if p.starts_with("/api/tasks/") => {
            let id = p.strip_prefix("/api/tasks/").unwrap_or("");
            routes::handle_delete_task(Arc::clone(&state), id).await
        }

        // Stats and suggestions
        (Method::GET, "/api/stats") => routes::handle_get_stats(Arc::clone(&state)).await,
        (Method::GET, "/api/suggestions") => routes::handle_suggestions(),

        (_, p) => not_found_response(p),
    };

    Ok(response)
}

/// CORS preflight response
fn preflight_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::NO_CONTENT)
        .header("Access-Control-Allow-Origin", "*")
        .header(
            "Access-Control-Allow-Methods",
            "GET, POST, PATCH, DELETE, OPTIONS",
        )
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Full::default())
        .unwrap()
}

/// 404 for unrouted paths
fn not_found_response(path: &str) -> Response<Full<Bytes>> {
    routes::error_response(StatusCode::NOT_FOUND, &format!("No route for {}", path))
}
