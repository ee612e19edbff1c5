use axum::{
    middleware,
    routing::{delete, get, patch, post, put},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{
    metrics_handler, metrics_middleware, require_admin, security_headers_middleware, trace_id,
};
use crate::routes::{
    applications, board_members, contact_messages, dashboard, donations, health, programs,
    sections, settings, site_config, volunteers,
};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
}

pub fn create_app(config: Config, pool: PgPool) -> Router {
    let config = Arc::new(config);

    let state = AppState {
        pool,
        config: config.clone(),
    };

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Public routes: everything the site renders from, plus form submissions
    let public_routes = Router::new()
        .route("/api/v1/settings", get(settings::get_settings))
        .route("/api/v1/site-config", get(site_config::get_site_config))
        .route(
            "/api/v1/pages/:page/sections",
            get(sections::get_page_sections),
        )
        .route(
            "/api/v1/board-members",
            get(board_members::get_active_members),
        )
        .route("/api/v1/programs", get(programs::get_active_programs))
        .route(
            "/api/v1/donations/recent",
            get(donations::get_recent_donations),
        )
        .route(
            "/api/v1/donations/stats",
            get(donations::get_donation_stats),
        )
        .route("/api/v1/donations", post(donations::create_donation))
        .route("/api/v1/volunteers", post(volunteers::create_volunteer))
        .route(
            "/api/v1/applications",
            post(applications::create_application),
        )
        .route(
            "/api/v1/contact-messages",
            post(contact_messages::create_message),
        );

    // Admin routes (require the admin bearer token)
    let admin_routes = Router::new()
        .route("/api/v1/admin/dashboard", get(dashboard::get_dashboard))
        .route(
            "/api/v1/admin/settings/:key",
            put(settings::update_setting),
        )
        .route(
            "/api/v1/admin/sections",
            get(sections::list_sections).put(sections::upsert_section),
        )
        .route(
            "/api/v1/admin/sections/:id",
            delete(sections::delete_section),
        )
        .route(
            "/api/v1/admin/board-members",
            get(board_members::list_members).post(board_members::create_member),
        )
        .route(
            "/api/v1/admin/board-members/:id",
            patch(board_members::update_member).delete(board_members::delete_member),
        )
        .route(
            "/api/v1/admin/programs",
            get(programs::list_programs).post(programs::create_program),
        )
        .route(
            "/api/v1/admin/programs/:id",
            patch(programs::update_program).delete(programs::delete_program),
        )
        .route("/api/v1/admin/donations", get(donations::list_donations))
        .route(
            "/api/v1/admin/donations/:id/status",
            patch(donations::update_donation_status),
        )
        .route("/api/v1/admin/volunteers", get(volunteers::list_volunteers))
        .route(
            "/api/v1/admin/volunteers/:id/status",
            patch(volunteers::update_volunteer_status),
        )
        .route(
            "/api/v1/admin/applications",
            get(applications::list_applications),
        )
        .route(
            "/api/v1/admin/applications/stats",
            get(applications::get_application_stats),
        )
        .route(
            "/api/v1/admin/applications/:id/status",
            patch(applications::update_application_status),
        )
        .route(
            "/api/v1/admin/contact-messages",
            get(contact_messages::list_messages),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    // Operational routes (no authentication required)
    let ops_routes = Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    Router::new()
        .merge(ops_routes)
        .merge(public_routes)
        .merge(admin_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id))
        .layer(cors)
        .with_state(state)
}
