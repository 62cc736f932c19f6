use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// 成功响应：`{"success":true,"message":"OTP sent successfully"}`
#[derive(Serialize)]
pub struct OtpSent {
    pub success: bool,
    pub message: String,
}

impl OtpSent {
    pub fn new() -> Self {
        Self {
            success: true,
            message: "OTP sent successfully".to_string(),
        }
    }
}

impl IntoResponse for OtpSent {
    fn into_response(self) -> Response {
        (StatusCode::OK, axum::Json(self)).into_response()
    }
}

/// 错误响应：`{"error":"..."}`，状态码不进响应体
#[derive(Serialize)]
pub struct ApiError {
    #[serde(skip)]
    pub status: StatusCode,
    pub error: String,
}

impl ApiError {
    pub fn bad_request(message: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error: message.to_string(),
        }
    }

    pub fn internal(message: &str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error: message.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status;
        (status, axum::Json(self)).into_response()
    }
}
