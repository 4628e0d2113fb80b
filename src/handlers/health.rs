use axum::Json;
use serde::{Deserialize, Serialize};

const SERVICE_NAME: &str = env!("CARGO_PKG_NAME");

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// `GET /health`: liveness plus build version
pub async fn health_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
    })
}

/// `GET /ready`: the calculator holds no resources, so a live server is ready
pub async fn readiness_check() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ready".to_string(),
        service: SERVICE_NAME.to_string(),
        version: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_reports_version() {
        let Json(health) = health_check().await;

        assert_eq!(health.status, "healthy");
        assert_eq!(health.service, "pizza-pricing");
        assert_eq!(health.version.as_deref(), Some(env!("CARGO_PKG_VERSION")));
    }

    #[tokio::test]
    async fn test_readiness_omits_version() {
        let Json(ready) = readiness_check().await;
        let value = serde_json::to_value(&ready).unwrap();

        assert_eq!(
            value,
            serde_json::json!({ "status": "ready", "service": "pizza-pricing" })
        );
    }
}
