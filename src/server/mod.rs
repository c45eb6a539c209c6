//! Static file server for the site directory

use anyhow::Result;
use axum::Router;
use std::net::SocketAddr;
use std::path::PathBuf;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Router serving `root` as-is: pages, `posts.json`, and `pages/<file>`
pub fn router(root: PathBuf) -> Router {
    let service = ServeDir::new(root).append_index_html_on_directories(true);
    Router::new()
        .fallback_service(service)
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve until interrupted
pub async fn start(root: PathBuf, ip: &str, port: u16) -> Result<()> {
    if !root.is_dir() {
        anyhow::bail!("Site directory {:?} does not exist", root);
    }

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Serving {} at http://{}:{}", root.display(), ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(root)).await?;

    Ok(())
}
