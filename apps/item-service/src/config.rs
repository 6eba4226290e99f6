//! # Item Service 設定
//!
//! 環境変数から Item Service サーバーの設定を読み込む。
//!
//! 接続文字列は起動時に検証しない。未設定・不正な値は
//! リクエスト処理時の接続エラーとして表面化する。

use std::{env, time::Duration};

use shoppinglist_infra::mongo::{DEFAULT_SERVER_SELECTION_TIMEOUT, MongoConfig};
use shoppinglist_shared::observability::{LogFormat, UnknownLogFormat};
use thiserror::Error;

/// デフォルトのバインドアドレス
const DEFAULT_HOST: &str = "0.0.0.0";

/// デフォルトのポート番号
const DEFAULT_PORT: u16 = 7071;

/// 設定の読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("ITEM_SERVICE_PORT は有効なポート番号である必要があります: {0:?}")]
    InvalidPort(String),

    #[error("DOCUMENT_STORE_TIMEOUT_MS はミリ秒単位の正の整数である必要があります: {0:?}")]
    InvalidTimeout(String),

    #[error(transparent)]
    InvalidLogFormat(#[from] UnknownLogFormat),
}

/// Item Service サーバーの設定
#[derive(Debug, Clone)]
pub struct ItemServiceConfig {
    /// バインドアドレス
    pub host:       String,
    /// ポート番号
    pub port:       u16,
    /// ログ出力形式
    pub log_format: LogFormat,
    /// ドキュメントストアの接続設定
    pub mongo:      MongoConfig,
}

impl ItemServiceConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意の参照関数から設定を読み込む
    ///
    /// テストでプロセス全体の環境変数を書き換えずに済むよう、
    /// 値の取得元を差し替えられるようにしている。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("ITEM_SERVICE_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("ITEM_SERVICE_PORT") {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(value))?,
            None => DEFAULT_PORT,
        };

        let server_selection_timeout = match lookup("DOCUMENT_STORE_TIMEOUT_MS") {
            Some(value) => match value.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => Duration::from_millis(ms),
                _ => return Err(ConfigError::InvalidTimeout(value)),
            },
            None => DEFAULT_SERVER_SELECTION_TIMEOUT,
        };

        let log_format = match lookup("LOG_FORMAT") {
            Some(value) => value.parse()?,
            None => LogFormat::default(),
        };

        let connection_string = lookup("COSMOSDB_CONNECTION_STRING")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Ok(Self {
            host,
            port,
            log_format,
            mongo: MongoConfig {
                connection_string,
                server_selection_timeout,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ItemServiceConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        ItemServiceConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_未設定ならデフォルト値を使う() {
        let config = load(&[]).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 7071);
        assert_eq!(config.log_format, LogFormat::Pretty);
        assert_eq!(
            config.mongo.server_selection_timeout,
            Duration::from_secs(5)
        );
        assert!(config.mongo.connection_string.is_none());
    }

    #[test]
    fn test_環境変数の値を読み込む() {
        let config = load(&[
            ("ITEM_SERVICE_HOST", "127.0.0.1"),
            ("ITEM_SERVICE_PORT", "8080"),
            ("DOCUMENT_STORE_TIMEOUT_MS", "1500"),
            ("LOG_FORMAT", "json"),
            ("COSMOSDB_CONNECTION_STRING", "mongodb://localhost:27017"),
        ])
        .unwrap();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(
            config.mongo.server_selection_timeout,
            Duration::from_millis(1500)
        );
        assert_eq!(
            config.mongo.connection_string.as_deref(),
            Some("mongodb://localhost:27017")
        );
    }

    #[test]
    fn test_空の接続文字列は未設定として扱う() {
        let config = load(&[("COSMOSDB_CONNECTION_STRING", "   ")]).unwrap();

        assert!(config.mongo.connection_string.is_none());
    }

    #[test]
    fn test_不正な接続文字列でも起動時にはエラーにしない() {
        let config = load(&[("COSMOSDB_CONNECTION_STRING", "not-a-uri")]).unwrap();

        assert_eq!(config.mongo.connection_string.as_deref(), Some("not-a-uri"));
    }

    #[rstest]
    #[case("abc", "数値でない")]
    #[case("70000", "範囲外")]
    #[case("-1", "負数")]
    fn test_不正なポート番号はエラーになる(#[case] value: &str, #[case] _description: &str) {
        let result = load(&[("ITEM_SERVICE_PORT", value)]);

        assert_eq!(result.unwrap_err(), ConfigError::InvalidPort(value.to_string()));
    }

    #[rstest]
    #[case("0", "ゼロ")]
    #[case("soon", "数値でない")]
    fn test_不正なタイムアウトはエラーになる(#[case] value: &str, #[case] _description: &str) {
        let result = load(&[("DOCUMENT_STORE_TIMEOUT_MS", value)]);

        assert_eq!(
            result.unwrap_err(),
            ConfigError::InvalidTimeout(value.to_string())
        );
    }

    #[test]
    fn test_不正なログ形式はエラーになる() {
        let result = load(&[("LOG_FORMAT", "text")]);

        assert_eq!(
            result.unwrap_err(),
            ConfigError::InvalidLogFormat(UnknownLogFormat("text".to_string()))
        );
    }
}
