mod adapters;
mod application;
mod domain;
mod services;

use std::sync::Arc;

use adapters::{
    controllers::{health_controller::HealthController, review_controller::ReviewController},
    repositories::{PgFileRepository, PgReviewRepository},
    state::AppState,
};
use application::{
    repositories::{file_repository::FileRepository, review_repository::ReviewRepository},
    services::ReviewService,
};
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use domain::config::app::AppConfig;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // aws-sdk-s3 and reqwest both pull in rustls; pin the process-wide provider
    // before either builds a client.
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let config = AppConfig::from_env().unwrap_or_else(|e| panic!("ERROR: {}", e));

    tracing::info!(
        "Starting review-service with storage provider {:?}",
        config.storage.provider
    );

    let cors = match &config.cors_allowed_origins {
        Some(allowed_origins) => {
            let origins: Vec<_> = allowed_origins
                .iter()
                .map(|s| s.parse().expect("Invalid CORS origin"))
                .collect();
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods(Any)
                .allow_headers(Any)
        }
        // Allow all origins if not specified (only for development)
        None => CorsLayer::permissive(),
    };

    tracing::info!("Connecting to database...");
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(std::time::Duration::from_secs(30))
        .connect(&config.database_url)
        .await
        .expect("ERROR: Failed to connect to PostgreSQL database. Check DATABASE_URL and network connectivity.");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("ERROR: Failed to run database migrations");
    tracing::info!("Database ready");

    let storage_service = services::create_storage_service(&config.storage)
        .expect("Failed to create storage service");

    let review_service = ReviewService::new(
        Arc::new(PgReviewRepository::new(pool.clone())) as Arc<dyn ReviewRepository>,
        Arc::new(PgFileRepository::new(pool.clone())) as Arc<dyn FileRepository>,
        storage_service,
        config.storage.bucket_url.clone(),
    );

    let app_state = AppState {
        review_service: Arc::new(review_service),
        pool,
    };

    let router = Router::new()
        .route("/api/v1/health", get(HealthController::health_check))
        .route(
            "/api/v1/products/{product_no}/reviews",
            get(ReviewController::get_reviews_by_product),
        )
        .route("/api/v1/reviews", post(ReviewController::create_review))
        .route(
            "/api/v1/reviews/{review_no}",
            get(ReviewController::get_review)
                .put(ReviewController::update_review)
                .delete(ReviewController::delete_review),
        )
        .layer(DefaultBodyLimit::max(config.max_upload_size))
        .layer(cors)
        .with_state(app_state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("Failed to bind to port");

    tracing::info!("Server listening on 0.0.0.0:{}", config.port);

    axum::serve(listener, router)
        .await
        .expect("Failed to start server");
}
