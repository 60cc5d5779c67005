use crate::domain::MemberId;
use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_LOG_FILTER: &str = "library_inventory=debug,tower_http=debug,axum=trace";

/// 設定読み込みのエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PORT must be a number between 0 and 65535, got '{0}'")]
    InvalidPort(String),

    #[error("LIBRARY_MEMBERS entry '{0}' is not an integer member id")]
    InvalidMemberId(String),
}

/// アプリケーション設定
///
/// 環境変数から読み込む。未設定の項目はデフォルト値を使う。
/// - `PORT`: 待ち受けポート（デフォルト 3000）
/// - `LIBRARY_MEMBERS`: 有効な会員IDのカンマ区切り（デフォルト 空）
/// - `RUST_LOG`: ログフィルタ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    pub members: Vec<MemberId>,
    pub log_filter: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 任意の取得関数から設定を組み立てる（テスト用に環境変数から切り離している）
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => DEFAULT_PORT,
        };

        let members = match lookup("LIBRARY_MEMBERS") {
            Some(raw) => parse_members(&raw)?,
            None => Vec::new(),
        };

        let log_filter = lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Ok(Self {
            port,
            members,
            log_filter,
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn parse_members(raw: &str) -> Result<Vec<MemberId>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            entry
                .parse::<i64>()
                .map(MemberId::new)
                .map_err(|_| ConfigError::InvalidMemberId(entry.to_string()))
        })
        .collect()
}
