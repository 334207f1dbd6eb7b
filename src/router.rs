use axum::{routing::get, Router};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error, handlers, state::AppState};

/// Full application: album routes under the configured prefix plus the
/// global layers.
pub fn create_router(state: AppState) -> Router {
    create_router_with_api(state, handlers::api_routes())
}

/// Same as [`create_router`] with a caller-supplied route table mounted
/// under the prefix. Layers added later wrap the ones added earlier.
pub fn create_router_with_api(state: AppState, api: Router<AppState>) -> Router {
    let api_prefix = state.config.api_prefix.clone();

    let router = Router::new().route("/health", get(handlers::health::health_check));

    let router = if api_prefix.is_empty() {
        router.merge(api)
    } else {
        router.nest(&api_prefix, api)
    };

    router
        .layer(CatchPanicLayer::custom(error::handle_panic))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
