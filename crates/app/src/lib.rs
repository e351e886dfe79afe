//! CareBridge application composition root
//!
//! Wires stores, the avatar URL signer and domain services together and
//! composes the domain routers into a single application.

use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use sqlx::PgPool;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;

use carebridge_common::config::Config;
use carebridge_conversations::{ConversationRepository, ConversationService, ConversationsState};
use carebridge_notifications::{NotificationRepository, NotificationService, NotificationsState};
use carebridge_profiles::{ProfileDirectory, ProfileRepository, ProfileService, ProfilesState};
use carebridge_storage::{StorageConfig, UrlSigner, UrlSignerFactory};

/// Largest accepted request body
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Domain services shared by the HTTP layer
#[derive(Clone)]
pub struct Services {
    pub conversations: Arc<ConversationService>,
    pub notifications: Arc<NotificationService>,
    pub profiles: Arc<ProfileService>,
}

impl Services {
    /// Postgres-backed services
    pub fn postgres(pool: PgPool, signer: Arc<dyn UrlSigner>) -> Self {
        let directory: Arc<dyn ProfileDirectory> = Arc::new(ProfileRepository::new(pool.clone()));

        Self {
            conversations: Arc::new(ConversationService::new(
                Arc::new(ConversationRepository::new(pool.clone())),
                directory.clone(),
                signer.clone(),
            )),
            notifications: Arc::new(NotificationService::new(Arc::new(
                NotificationRepository::new(pool),
            ))),
            profiles: Arc::new(ProfileService::new(directory, signer)),
        }
    }
}

/// Compose domain routers over already-built services
pub fn create_router(services: Services) -> Router {
    Router::new()
        .route("/health", axum::routing::get(health_check))
        .route(
            "/",
            axum::routing::get(|| async { "CareBridge API v0.1.0" }),
        )
        .merge(carebridge_conversations::routes().with_state(ConversationsState {
            service: services.conversations,
        }))
        .merge(carebridge_notifications::routes().with_state(NotificationsState {
            service: services.notifications,
        }))
        .merge(carebridge_profiles::routes().with_state(ProfilesState {
            service: services.profiles,
        }))
}

/// Create the main application router: migrations, signer, services, routes
pub async fn create_app(config: &Config, pool: PgPool) -> Result<Router, anyhow::Error> {
    sqlx::migrate!("../../migrations").run(&pool).await?;
    tracing::info!("Database migrations applied");

    let storage_config = StorageConfig::from_env()?;
    let provider = storage_config.provider.clone();
    let signer: Arc<dyn UrlSigner> = Arc::from(UrlSignerFactory::create(storage_config).await?);
    tracing::info!(
        %provider,
        ttl_secs = signer.url_ttl().as_secs(),
        "Avatar URL signer configured"
    );

    tracing::debug!(cors = %config.cors_allowed_origins, "Building router");

    Ok(create_router(Services::postgres(pool, signer)))
}

/// CORS layer from a comma-separated origin list; `*` allows any origin
pub fn build_cors_layer(origins: &str) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    if origins.trim() == "*" {
        return layer.allow_origin(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .filter_map(|o| match HeaderValue::from_str(o) {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(origin = o, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(allowed))
}

/// Reject request bodies above [`MAX_BODY_BYTES`]
pub fn body_limit_layer() -> RequestBodyLimitLayer {
    RequestBodyLimitLayer::new(MAX_BODY_BYTES)
}

/// Health check endpoint
#[mutants::skip]
async fn health_check() -> &'static str {
    "OK"
}
