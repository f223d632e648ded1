//! Development server for the webtop desktop
//!
//! Serves the static page and the wasm bundle from the `site` directory
//! with correct MIME types for module scripts and wasm.

use axum::{
    body::Body,
    http::{header, HeaderValue, Request},
    response::Response,
    Router,
};
use std::net::SocketAddr;
use tower_http::services::ServeDir;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dev_server=info,tower_http=info".into()),
        )
        .init();

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    let addr = SocketAddr::from(([127, 0, 0, 1], port));

    let serve_dir = ServeDir::new("site").precompressed_gzip().precompressed_br();

    let app = Router::new()
        .fallback_service(serve_dir)
        .layer(axum::middleware::from_fn(fix_mime_types));

    tracing::info!("webtop dev server listening on http://localhost:{}", port);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}

/// Fix MIME types for module scripts and the wasm bundle
async fn fix_mime_types(request: Request<Body>, next: axum::middleware::Next) -> Response<Body> {
    let path = request.uri().path().to_string();

    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    if path.ends_with(".js") || path.ends_with(".mjs") {
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/javascript; charset=utf-8"),
        );
    } else if path.ends_with(".wasm") {
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/wasm"),
        );
    } else if path.ends_with(".css") {
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/css; charset=utf-8"),
        );
    } else if path.ends_with(".html") {
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("text/html; charset=utf-8"),
        );
    }

    response
}
