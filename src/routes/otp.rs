use crate::handler::otp;
use crate::utils::email::Mailer;
use axum::Router;
use axum::routing::post;
use std::sync::Arc;

pub fn routes(mailer: Arc<dyn Mailer>) -> Router {
    Router::new()
        // 发送验证码 -> POST /send-otp
        .route("/send-otp", post(otp::send_otp))
        .with_state(mailer)
}
