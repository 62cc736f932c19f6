use axum::http::Method;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

/// 跨域放行所有来源
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any)
}
