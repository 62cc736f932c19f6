use crate::config::AppConfig;
use crate::utils::email::ResendMailer;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

mod config;
mod handler;
mod middleware;
mod response;
mod routes;
mod utils;

#[tokio::main]
async fn main() {
    let config = AppConfig::global();
    utils::log::init_tracing();

    // 启动阶段构建一次 Resend 客户端，之后注入各请求
    let mailer = Arc::new(ResendMailer::new().expect("Failed to init Resend mailer"));
    let app = routes::routers(mailer);

    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let listener = TcpListener::bind(addr).await.unwrap();
    println!("Server running at http://{}", addr);

    axum::serve(listener, app).await.unwrap();
}
