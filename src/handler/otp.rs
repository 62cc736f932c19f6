use crate::response::{ApiError, OtpSent};
use crate::utils::email::Mailer;
use axum::extract::{Json, State};
use rand::Rng;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

#[derive(Deserialize)]
pub struct SendOtpRequest {
    // 缺字段、null、空串走同一条拒绝路径
    #[serde(default)]
    pub email: Option<String>,
}

/// 生成 [100000, 999999] 内均匀分布的验证码，6 位十进制，首位非 0
pub fn generate_otp() -> String {
    rand::rng().random_range(100_000..=999_999).to_string()
}

// 发送验证码
#[instrument(name = "send_otp_handler", skip_all, fields(module = "otp"))]
pub async fn send_otp(
    State(mailer): State<Arc<dyn Mailer>>,
    Json(payload): Json<SendOtpRequest>,
) -> Result<OtpSent, ApiError> {
    // 只做非空校验，不校验邮箱格式
    let email = match payload.email.as_deref() {
        Some(e) if !e.is_empty() => e,
        _ => {
            warn!("SEND_OTP: missing email");
            return Err(ApiError::bad_request("Email is required"));
        }
    };

    let code = generate_otp();
    // 码值与凭证不落日志
    info!(email = %email, "SEND_OTP: code generated");

    match mailer.send_code(email, &code).await {
        Ok(_) => {
            info!(email = %email, "SEND_OTP: mail accepted by provider");
            Ok(OtpSent::new())
        }
        Err(e) => {
            error!(email = %email, "SEND_OTP: mail send failed: {:#}", e);
            Err(ApiError::internal(&e.to_string()))
        }
    }
}
