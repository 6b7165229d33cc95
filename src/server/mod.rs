//! Preview server that renders the listing on every request

use anyhow::Result;
use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::helpers::blog_index_path;
use crate::templates::TemplateRenderer;
use crate::Blog;

/// Server state
pub struct ServerState {
    blog: Blog,
    renderer: TemplateRenderer,
}

impl ServerState {
    pub fn new(blog: Blog) -> Result<Self> {
        Ok(Self {
            blog,
            renderer: TemplateRenderer::new()?,
        })
    }

    /// Load posts from disk and render the listing
    fn render_listing(&self) -> Result<String> {
        let index = self.blog.build_index()?;
        self.renderer.render_index(&self.blog.config, &index)
    }
}

/// Build the application router
pub fn router(state: Arc<ServerState>) -> Router {
    let index_path = blog_index_path(&state.blog.config);
    let public_dir = state.blog.public_dir.clone();

    let mut app = Router::new().route(&index_path, get(blog_index_handler));
    if index_path != "/" {
        app = app.route(&format!("{}/", index_path), get(blog_index_handler));
    }

    app.fallback_service(ServeDir::new(public_dir).append_index_html_on_directories(true))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the preview server
pub async fn start(blog: &Blog, ip: &str, port: u16) -> Result<()> {
    let state = Arc::new(ServerState::new(blog.clone())?);
    let index_path = blog_index_path(&blog.config);
    let app = router(state);

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}{}", ip, port, index_path);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Render the listing fresh from disk
async fn blog_index_handler(State(state): State<Arc<ServerState>>) -> Response {
    let result = tokio::task::spawn_blocking(move || state.render_listing()).await;

    match result {
        Ok(Ok(html)) => Html(html).into_response(),
        Ok(Err(e)) => {
            tracing::error!("Failed to render listing: {:#}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to render listing").into_response()
        }
        Err(e) => {
            tracing::error!("Render task failed: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response()
        }
    }
}
