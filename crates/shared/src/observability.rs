//! # Observability 基盤
//!
//! ログ出力形式の定義と、トレーシング subscriber の初期化を提供する。
//!
//! 出力形式は呼び出し側の設定（`LOG_FORMAT`）から受け取り、
//! ログレベルは `RUST_LOG` で制御する。
//!
//! [`init_tracing`] は `tracing_error::ErrorLayer` も登録するため、
//! インフラ層のエラーが捕捉する `SpanTrace` にスパン情報が含まれる。

use std::str::FromStr;

use thiserror::Error;

/// `RUST_LOG` 未設定時のフィルタ
///
/// リクエストごとのログはハンドラの 1 行のみになる。
/// インフラ層の debug ログは `RUST_LOG=info,shoppinglist=debug` で有効にする。
pub const DEFAULT_ENV_FILTER: &str = "info";

/// ログ出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// JSON 形式（本番環境向け）
    Json,
    /// 人間が読みやすい形式（開発環境向け）
    #[default]
    Pretty,
}

/// 未知のログ出力形式
#[derive(Debug, Error, PartialEq, Eq)]
#[error("LOG_FORMAT は json または pretty である必要があります: {0:?}")]
pub struct UnknownLogFormat(pub String);

impl FromStr for LogFormat {
    type Err = UnknownLogFormat;

    /// 大文字・小文字と前後の空白は区別しない
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            _ => Err(UnknownLogFormat(s.to_string())),
        }
    }
}

/// トレーシングを初期化する
///
/// JSON モードではイベントのフィールドをトップレベルに展開し、
/// 現在のスパンを `span` フィールドとして出力する。
#[cfg(feature = "observability")]
pub fn init_tracing(log_format: LogFormat) {
    use tracing_subscriber::{EnvFilter, Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_ENV_FILTER));

    let fmt_layer = match log_format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer().boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .with(tracing_error::ErrorLayer::default())
        .init();
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("json", LogFormat::Json, "小文字")]
    #[case("JSON", LogFormat::Json, "大文字")]
    #[case(" pretty ", LogFormat::Pretty, "前後に空白")]
    #[case("Pretty", LogFormat::Pretty, "先頭のみ大文字")]
    fn test_from_strで既知の形式を受け付ける(
        #[case] input: &str,
        #[case] expected: LogFormat,
        #[case] _description: &str,
    ) {
        assert_eq!(input.parse::<LogFormat>(), Ok(expected));
    }

    #[rstest]
    #[case("", "空文字")]
    #[case("text", "未知の形式")]
    fn test_from_strで未知の形式はエラーになる(#[case] input: &str, #[case] _description: &str) {
        assert_eq!(
            input.parse::<LogFormat>(),
            Err(UnknownLogFormat(input.to_string()))
        );
    }

    #[test]
    fn test_デフォルトはprettyになる() {
        assert_eq!(LogFormat::default(), LogFormat::Pretty);
    }
}
