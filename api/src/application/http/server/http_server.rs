use std::sync::Arc;

use anyhow::Context;
use axum::{
    Json, Router,
    extract::DefaultBodyLimit,
    http::{
        HeaderValue, Method,
        header::{ACCEPT, CONTENT_LENGTH, CONTENT_TYPE},
    },
    routing::get,
};
use axum_prometheus::PrometheusMetricLayer;
use recipelens_core::{application::create_service, domain::common::RecipeLensConfig};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, info, info_span};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    application::http::{
        batch::router::batch_routes,
        health::router::health_routes,
        page::{renderer::PageRenderer, router::page_routes},
        recipe::router::recipe_routes,
        server::{app_state::AppState, openapi::ApiDoc},
    },
    args::Args,
};

/// Loads the model and the catalog, then builds the shared state.
///
/// Model loading is CPU bound and runs on the blocking pool.
pub async fn state(args: Arc<Args>) -> Result<AppState, anyhow::Error> {
    let config = RecipeLensConfig::from(args.as_ref().clone());

    let service = tokio::task::spawn_blocking(move || create_service(config))
        .await
        .context("service initialisation panicked")??;

    let pages = PageRenderer::new().context("failed to load page templates")?;

    Ok(AppState::new(args, service, pages))
}

///  Returns the [`Router`] of this application.
pub fn router(state: AppState) -> Result<Router, anyhow::Error> {
    let trace_layer =
        TraceLayer::new_for_http().make_span_with(|request: &axum::extract::Request| {
            let uri: String = request.uri().to_string();
            info_span!("http_request", method = ?request.method(), uri)
        });

    let allowed_origins = state
        .args
        .server
        .allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .with_context(|| format!("invalid allowed origin: {}", origin))
        })
        .collect::<Result<Vec<HeaderValue>, _>>()?;

    debug!("Allowed origins: {:?}", allowed_origins);

    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(allowed_origins)
        .allow_headers([CONTENT_TYPE, CONTENT_LENGTH, ACCEPT]);

    let mut openapi = ApiDoc::openapi();
    let mut paths = openapi.paths.clone();
    paths.paths = openapi
        .paths
        .paths
        .into_iter()
        .map(|(path, item)| (format!("{}{path}", state.args.server.root_path), item))
        .collect();
    openapi.paths = paths;

    let root_path = state.args.server.root_path.clone();
    let api_docs_url = format!("{}/api-docs/openapi.json", root_path);

    let mut router = Router::new()
        .merge(Scalar::with_url(
            format!("{}/scalar", root_path),
            openapi.clone(),
        ))
        .route(
            &api_docs_url,
            get(move || {
                let openapi = openapi.clone();
                async move { Json(openapi) }
            }),
        )
        .merge(page_routes(state.clone()))
        .merge(batch_routes(state.clone()))
        .merge(recipe_routes(state.clone()))
        .merge(health_routes(&root_path));

    // The Prometheus recorder is process global and can only be installed once.
    if state.args.server.metrics_enabled {
        let (prometheus_layer, metric_handle) = PrometheusMetricLayer::pair();
        router = router
            .route(
                &format!("{}/metrics", root_path),
                get(|| async move { metric_handle.render() }),
            )
            .layer(prometheus_layer);
    }

    info!(
        max_upload_bytes = state.args.server.max_upload_bytes,
        metrics = state.args.server.metrics_enabled,
        "Router configured"
    );

    let router = router
        .layer(DefaultBodyLimit::max(state.args.server.max_upload_bytes))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state);

    Ok(router)
}
