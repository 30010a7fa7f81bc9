use axum::{extract::State, Json};
use serde::Serialize;
use sysinfo::System;
use tracing::{info, warn};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    pub version: String,
    pub metrics: SystemMetrics,
}

#[derive(Debug, Serialize)]
pub struct SystemMetrics {
    #[serde(rename = "cpuUsagePercent")]
    pub cpu_usage_percent: f32,
    #[serde(rename = "memoryUsedBytes")]
    pub memory_used_bytes: u64,
    #[serde(rename = "memoryTotalBytes")]
    pub memory_total_bytes: u64,
    #[serde(rename = "memoryUsagePercent")]
    pub memory_usage_percent: f32,
}

impl SystemMetrics {
    fn collect() -> Self {
        let mut sys = System::new();
        sys.refresh_cpu_usage();
        sys.refresh_memory();

        let memory_used = sys.used_memory();
        let memory_total = sys.total_memory();

        Self {
            cpu_usage_percent: sys.global_cpu_usage(),
            memory_used_bytes: memory_used,
            memory_total_bytes: memory_total,
            memory_usage_percent: usage_percent(memory_used, memory_total),
        }
    }
}

fn usage_percent(used: u64, total: u64) -> f32 {
    if total > 0 {
        (used as f32 / total as f32) * 100.0
    } else {
        0.0
    }
}

pub struct HealthController;

impl HealthController {
    /// GET /api/v1/health
    pub async fn health_check(State(pool): State<sqlx::PgPool>) -> Json<HealthResponse> {
        info!("Health check requested");

        let database = match sqlx::query("SELECT 1").execute(&pool).await {
            Ok(_) => "up",
            Err(e) => {
                warn!("Database ping failed: {}", e);
                "down"
            }
        };

        let status = if database == "up" { "healthy" } else { "degraded" };

        Json(HealthResponse {
            status: status.to_string(),
            database: database.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            metrics: SystemMetrics::collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_percent_handles_zero_total() {
        assert_eq!(usage_percent(10, 0), 0.0);
        assert_eq!(usage_percent(50, 200), 25.0);
    }
}
