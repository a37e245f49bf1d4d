use axum::{http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use tracing::{error, info};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

pub fn router() -> Router {
    Router::new().route("/health", get(health))
}

pub async fn spawn(bind_address: &str, port: u16) -> std::io::Result<()> {
    let address = format!("{bind_address}:{port}");
    let listener = tokio::net::TcpListener::bind(&address).await?;

    info!(
        event_name = "system.health.start",
        correlation_id = "bootstrap",
        bind_address = %address,
        "health endpoint started"
    );

    tokio::spawn(async move {
        if let Err(error) = axum::serve(listener, router()).await {
            error!(
                event_name = "system.health.error",
                correlation_id = "bootstrap",
                error = %error,
                "health endpoint server terminated unexpectedly"
            );
        }
    });

    Ok(())
}

/// Pure liveness: the response is fixed and always `200`.
pub async fn health() -> (StatusCode, Json<HealthResponse>) {
    (StatusCode::OK, Json(HealthResponse { status: "ok", service: "counsel-server" }))
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, Json};

    use crate::health::health;

    #[tokio::test]
    async fn health_always_answers_with_the_fixed_success_response() {
        let (status, Json(payload)) = health().await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload.status, "ok");
        assert_eq!(payload.service, "counsel-server");
    }
}
