use std::sync::Arc;

use axum::extract::FromRef;

use crate::application::services::ReviewService;

#[derive(Clone, FromRef)]
pub struct AppState {
    pub review_service: Arc<ReviewService>,
    pub pool: sqlx::PgPool,
}
