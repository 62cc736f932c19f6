use crate::config::AppConfig;
use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<()>;

    async fn send_code(&self, to: &str, code: &str) -> Result<()> {
        let subject = "Your OTP Code";
        let body = format!("Your OTP code is {code}. It expires in 5 minutes.");
        self.send(to, subject, &body).await
    }
}

/// Resend 发信请求体
#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: Vec<&'a str>,
    subject: &'a str,
    text: &'a str,
}

/// Resend 错误响应里带的说明文字
#[derive(Deserialize)]
struct ResendErrorBody {
    message: String,
}

pub struct ResendMailer {
    client: Client,
    api_base: String,
    from: String,
}

impl ResendMailer {
    pub fn new() -> Result<Self> {
        let cfg = AppConfig::global();

        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            api_base: cfg.resend.api_base.clone(),
            from: cfg.resend.from.clone(),
        })
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<()> {
        let cfg = AppConfig::global();

        let res = self
            .client
            .post(format!("{}/emails", self.api_base))
            .bearer_auth(cfg.resend.api_key.expose_secret())
            .json(&SendEmailRequest {
                from: &self.from,
                to: vec![to],
                subject,
                text: body,
            })
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            // 提取 Resend 返回的错误说明，取不到就退回状态码
            let message = match res.json::<ResendErrorBody>().await {
                Ok(e) => e.message,
                Err(_) => format!("Resend returned status {}", status),
            };
            bail!(message);
        }

        tracing::debug!(to = %to, "mail accepted by Resend");
        Ok(())
    }
}
