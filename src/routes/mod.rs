//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the Leptos app with SSR for every page route, the
//! hydration bundle under `/pkg`, and a JSON health probe. The site is
//! stateless; handlers share nothing beyond `LeptosOptions`.

use std::path::PathBuf;

use axum::routing::get;
use axum::{Json, Router};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use serde::Serialize;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::ServerError;

#[cfg(test)]
#[path = "routes_test.rs"]
mod tests;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Health {
    pub status: &'static str,
    pub version: &'static str,
}

pub async fn healthz() -> Json<Health> {
    Json(Health { status: "ok", version: env!("CARGO_PKG_VERSION") })
}

/// Routes that do not depend on the Leptos build output.
pub fn service_routes() -> Router {
    Router::new().route("/healthz", get(healthz))
}

/// Directory the `/pkg` bundle is served from: `SITE_ROOT` when set,
/// otherwise the Leptos `site_root`.
pub fn pkg_dir(config: &ServerConfig, site_root: &str, site_pkg_dir: &str) -> PathBuf {
    let root = config.site_root.clone().unwrap_or_else(|| PathBuf::from(site_root));
    root.join(site_pkg_dir)
}

/// Full application: SSR pages + `/pkg` static bundle + service routes.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `Cargo.toml` `[package.metadata.leptos]` section).
pub fn app(config: &ServerConfig) -> Result<Router, ServerError> {
    let conf = get_configuration(None).map_err(|e| ServerError::Leptos(e.to_string()))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);
    let pkg = pkg_dir(config, &leptos_options.site_root, &leptos_options.site_pkg_dir);
    tracing::debug!(pkg = %pkg.display(), routes = routes.len(), "assembling router");

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(client::app::shell))
        .with_state(leptos_options);

    Ok(service_routes()
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(pkg))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}
