use crate::config::AppConfig;
use axum::{Json, Router, routing::get};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
pub struct Health {
    config: String,
    resend: String,
}

pub fn routes() -> Router {
    Router::new().route("/health", get(health))
}

async fn health() -> Json<Health> {
    let config = AppConfig::global();
    let (config_ok, config_total) = config.stats();

    // Resend 连通性检测
    let resend_status = match check_resend().await {
        Ok(_) => "ok".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Json(Health {
        config: format!("{}/{}", config_ok, config_total),
        resend: resend_status,
    })
}

async fn check_resend() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::global();
    let key = config.resend.api_key.expose_secret();

    let client = reqwest::Client::new();
    let res = client
        .get(format!("{}/domains", config.resend.api_base))
        .header("User-Agent", "otp-mini-healthcheck")
        .bearer_auth(key)
        .send()
        .await?;

    if res.status().is_success() {
        Ok(())
    } else {
        Err(format!("Resend returned status {}", res.status()).into())
    }
}
