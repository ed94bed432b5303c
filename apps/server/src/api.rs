use std::sync::Arc;

use anyhow::Context;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::HeaderValue,
    routing::{get, post},
    Json, Router,
};
use lookout_resolver::RequestContext;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    config::Config,
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{
        AutocompleteRequest, AutocompleteResponse, GetObjectSchemasRequest,
        GetObjectSchemasResponse, ResolveRequest, ResultsResponse, SearchRequest,
    },
};

pub async fn healthz() -> &'static str {
    "ok"
}

/// Scope for one request. Expires before the HTTP timeout layer does.
fn request_context(state: &AppState) -> RequestContext {
    RequestContext::with_timeout(state.lookup_timeout)
}

fn require(field: &str, value: &str) -> ApiResult<()> {
    if value.trim().is_empty() {
        return Err(ApiError::BadRequest(format!("'{}' is required", field)));
    }
    Ok(())
}

async fn resolve(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ResolveRequest>, JsonRejection>,
) -> ApiResult<Json<ResultsResponse>> {
    let Json(request) = payload?;
    require("want", &request.want)?;

    let ctx = request_context(&state);
    let _guard = ctx.drop_guard();
    let results = state
        .registry
        .resolve(&ctx, &request.want, &request.have, request.limit)
        .await?;
    Ok(Json(results.into()))
}

async fn search(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> ApiResult<Json<ResultsResponse>> {
    let Json(request) = payload?;
    require("want", &request.want)?;
    require("query", &request.query)?;

    let ctx = request_context(&state);
    let _guard = ctx.drop_guard();
    let results = state
        .registry
        .search(&ctx, &request.want, &request.query, request.limit)
        .await?;
    Ok(Json(results.into()))
}

async fn autocomplete(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<AutocompleteRequest>, JsonRejection>,
) -> ApiResult<Json<AutocompleteResponse>> {
    let Json(request) = payload?;
    require("want", &request.want)?;

    let ctx = request_context(&state);
    let _guard = ctx.drop_guard();
    let results = state
        .registry
        .autocomplete(
            &ctx,
            &request.want,
            &request.search,
            request.limit,
            request.case_sensitive,
        )
        .await?;
    Ok(Json(AutocompleteResponse { results }))
}

async fn get_object_schemas(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GetObjectSchemasRequest>, JsonRejection>,
) -> ApiResult<Json<GetObjectSchemasResponse>> {
    let Json(request) = payload?;
    require("typeUrl", &request.type_url)?;

    let schemas = state.registry.object_schemas(&request.type_url);
    Ok(Json(GetObjectSchemasResponse {
        type_url: request.type_url,
        schemas,
    }))
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> anyhow::Result<Router> {
    let cors = if config.cors_allow.iter().any(|o| o == "*") {
        CorsLayer::new().allow_origin(Any)
    } else {
        let origins = config
            .cors_allow
            .iter()
            .map(|o| {
                o.parse::<HeaderValue>()
                    .with_context(|| format!("Invalid CORS origin '{}'", o))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        CorsLayer::new().allow_origin(origins)
    };

    let api = Router::new()
        .route("/healthz", get(healthz))
        .route("/resolver/resolve", post(resolve))
        .route("/resolver/search", post(search))
        .route("/resolver/autocomplete", post(autocomplete))
        .route("/resolver/getObjectSchemas", post(get_object_schemas));

    Ok(Router::new()
        .nest("/v1", api)
        .with_state(state)
        .layer(cors)
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http()))
}
