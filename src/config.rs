use config::{Config, File};
use dotenv::dotenv;
use once_cell::sync::OnceCell;
use secrecy::{ExposeSecret, SecretBox};
use serde::Deserialize;
use std::path::PathBuf;
use std::{env, fmt};

// 全局配置实例
static CONFIG: OnceCell<AppConfig> = OnceCell::new();

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub port: u16,
    pub resend: ResendConfig,
    pub log: LogConfig,
}

#[derive(Debug, Deserialize)]
pub struct ResendConfig {
    pub api_key: SecretBox<String>,
    /// 发件地址，需在 Resend 侧完成域名验证
    pub from: String,
    pub api_base: String,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
    Compact,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Text => "text",
            LogFormat::Json => "json",
            LogFormat::Compact => "compact",
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Deserialize)]
pub struct LogConfig {
    pub level: LogLevel,
    pub format: LogFormat,
    pub dir: PathBuf,
}

impl LogConfig {
    pub fn file_for_level(&self, level: LogLevel) -> PathBuf {
        self.dir.join(format!("{}.log", level.as_str()))
    }
}

impl AppConfig {
    fn load_config() -> Result<Self, Box<dyn std::error::Error>> {
        // 确保 .env 文件已加载
        dotenv().ok();

        let config = Config::builder()
            .add_source(File::with_name("config.toml").required(false))
            .set_default("app.port", "5000")?
            .set_default("resend.from", "no-reply@otp.example.com")?
            .set_default("resend.api_base", "https://api.resend.com")?
            .set_default("log.level", "info")?
            .set_default("log.format", "compact")?
            .set_default("log.dir", "/var/log/otp-mini")?
            .build()?;

        // 尝试从不同前缀的环境变量加载
        let resend_api_key = env::var("OTP_MINI_RESEND_API_KEY")
            .or_else(|_| env::var("RESEND_API_KEY"))
            .map_err(|_| {
                "Neither OTP_MINI_RESEND_API_KEY nor RESEND_API_KEY found in environment"
            })?;

        Ok(Self {
            port: config.get::<u16>("app.port")?,
            resend: ResendConfig {
                api_key: SecretBox::new(Box::new(resend_api_key)),
                from: config.get::<String>("resend.from")?,
                api_base: config.get::<String>("resend.api_base")?,
            },
            log: LogConfig {
                level: config.get::<LogLevel>("log.level")?,
                format: config.get::<LogFormat>("log.format")?,
                dir: config.get::<PathBuf>("log.dir")?,
            },
        })
    }

    /// 获取全局配置实例
    pub fn global() -> &'static Self {
        CONFIG.get_or_init(|| Self::load_config().expect("Failed to load config"))
    }
}

impl AppConfig {
    pub fn stats(&self) -> (usize, usize) {
        let checks = [
            !self.resend.api_key.expose_secret().is_empty(),
            !self.resend.from.is_empty(),
            !self.resend.api_base.is_empty(),
            !self.log.dir.as_os_str().is_empty(),
        ];

        let ok = checks.iter().filter(|&&c| c).count();
        let total = checks.len();
        (ok, total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    /// 设置测试环境变量
    fn set_test_env() {
        unsafe {
            env::set_var("OTP_MINI_RESEND_API_KEY", "test_api_key");
        }
    }

    #[test]
    fn test_load_config() {
        set_test_env();

        let config = AppConfig::load_config().expect("Failed to load config");

        // 验证 resend 配置
        assert_eq!(config.resend.api_key.expose_secret().as_str(), "test_api_key");
        assert!(!config.resend.from.is_empty());
        assert!(config.resend.api_base.starts_with("https://"));

        // 验证端口默认值
        assert_eq!(config.port, 5000);

        assert!(matches!(
            config.log.level,
            LogLevel::Error | LogLevel::Warn | LogLevel::Info | LogLevel::Debug | LogLevel::Trace
        ));

        assert!(matches!(
            config.log.format,
            LogFormat::Text | LogFormat::Json | LogFormat::Compact
        ));

        // 验证 stats 方法
        let (ok, total) = config.stats();
        assert_eq!(ok, total);
    }

    #[test]
    fn test_global_config_singleton() {
        set_test_env();

        let global1 = AppConfig::global();
        let global2 = AppConfig::global();

        // 应该是同一个实例
        assert_eq!(global1 as *const _, global2 as *const _);
    }

    #[test]
    fn test_log_file_for_level() {
        let log = LogConfig {
            level: LogLevel::Info,
            format: LogFormat::Compact,
            dir: PathBuf::from("/tmp/otp-mini"),
        };
        assert_eq!(
            log.file_for_level(LogLevel::Error),
            PathBuf::from("/tmp/otp-mini/error.log")
        );
    }
}
