use axum::{
    http::{header, StatusCode},
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::api::collection::{collection_routes, collection_routes_with};
use crate::api::{contact, content};
use crate::config::ContactConfig;
use crate::error::{panic_response, ApiError};
use crate::state::AppState;
use crate::store::models::{Belief, ContentBlock, Meeting};

pub const CONTENT_PATH: &str = "/api/cms/content";
pub const BELIEFS_PATH: &str = "/api/beliefs";
pub const MEETINGS_PATH: &str = "/api/meetings";

/// Build the full axum Router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    // Admin CRUD families. No auth: the dashboard is open on this deployment.
    // GET {id} doubles as the by-type listing when the segment is not a number
    let content_routes =
        collection_routes_with::<ContentBlock>(CONTENT_PATH, get(content::get_block_or_type))
            .route(
                &format!("{}/type/{{type}}", CONTENT_PATH),
                get(content::list_by_type),
            );
    let belief_routes = collection_routes::<Belief>(BELIEFS_PATH);
    let meeting_routes = collection_routes::<Meeting>(MEETINGS_PATH);

    let contact_routes = rate_limited(
        Router::new().route("/api/contact", post(contact::submit)),
        &state.contact,
    );

    let health = Router::new().route("/health", get(health_check));

    let router = Router::new()
        .merge(content_routes)
        .merge(belief_routes)
        .merge(meeting_routes)
        .merge(contact_routes)
        .merge(health);

    with_middleware(router).with_state(state)
}

/// Request tracing and panic recovery shared by every route.
/// A panicking handler answers 500 with the generic JSON error body.
pub fn with_middleware<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(panic_response))
}

/// Per-IP rate limiting for public form endpoints.
/// Uses PeerIpKeyExtractor which reads from ConnectInfo<SocketAddr>.
fn rate_limited(router: Router<AppState>, settings: &ContactConfig) -> Router<AppState> {
    if !settings.rate_limit_enabled {
        return router;
    }

    let Some(governor_config) = GovernorConfigBuilder::default()
        .key_extractor(PeerIpKeyExtractor)
        .per_second(settings.rate_limit_period_secs)
        .burst_size(settings.rate_limit_burst)
        .finish()
    else {
        tracing::warn!(
            period_secs = settings.rate_limit_period_secs,
            burst = settings.rate_limit_burst,
            "Invalid contact rate limit settings, serving contact form without rate limiting"
        );
        return router;
    };
    let governor_config = Arc::new(governor_config);

    // Spawn background task to clean up rate limiter state
    let limiter = governor_config.limiter().clone();
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(Duration::from_secs(60)).await;
            limiter.retain_recent();
        }
    });

    router
        .layer(GovernorLayer {
            config: governor_config,
        })
        .layer(middleware::map_response(json_rate_limit_body))
}

/// Swap the limiter's plain-text 429 body for the API's JSON error shape,
/// keeping its retry headers.
async fn json_rate_limit_body(response: Response) -> Response {
    if response.status() != StatusCode::TOO_MANY_REQUESTS {
        return response;
    }

    let (parts, _) = response.into_parts();
    let mut limited = ApiError::RateLimited.into_response();
    for (name, value) in parts.headers.iter() {
        if name != header::CONTENT_TYPE && name != header::CONTENT_LENGTH {
            limited.headers_mut().append(name.clone(), value.clone());
        }
    }
    limited
}

/// Basic health check endpoint
async fn health_check() -> &'static str {
    "ok"
}
