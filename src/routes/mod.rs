use crate::middleware::{cors, http_tracing};
use crate::utils::email::Mailer;
use axum::Router;
use std::sync::Arc;

mod health;
mod otp;

pub fn routers(mailer: Arc<dyn Mailer>) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(otp::routes(mailer))
        .layer(cors::cors_layer())
        .layer(http_tracing::trace_layer())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    struct NoopMailer;

    #[async_trait]
    impl Mailer for NoopMailer {
        async fn send(&self, _to: &str, _subject: &str, _body: &str) -> anyhow::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_cors_allows_any_origin() {
        let app = routers(Arc::new(NoopMailer));

        let req = Request::builder()
            .method("OPTIONS")
            .uri("/send-otp")
            .header("Origin", "https://anywhere.example")
            .header("Access-Control-Request-Method", "POST")
            .body(Body::empty())
            .unwrap();
        let resp = app.oneshot(req).await.unwrap();

        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(
            resp.headers()
                .get("access-control-allow-origin")
                .map(|v| v.to_str().unwrap()),
            Some("*")
        );
    }
}
