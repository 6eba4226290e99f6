//! # Item Service サーバー
//!
//! 買い物リストのアイテム一覧を返す HTTP サーバー。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `COSMOSDB_CONNECTION_STRING` | **Yes** | MongoDB 互換ストアの接続文字列 |
//! | `ITEM_SERVICE_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `ITEM_SERVICE_PORT` | No | ポート番号（デフォルト: `7071`） |
//! | `DOCUMENT_STORE_TIMEOUT_MS` | No | サーバー選択・接続のタイムアウト（デフォルト: `5000`） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`、それ以外は起動エラー） |
//! | `RUST_LOG` | No | ログフィルタ（デフォルト: `info`） |
//!
//! 接続文字列が未設定でも起動はする。その場合、アイテム一覧は 500 を返す。
//!
//! ## 起動方法
//!
//! ```bash
//! COSMOSDB_CONNECTION_STRING=mongodb://localhost:27017 cargo run -p shoppinglist-item-service
//! ```

use std::sync::Arc;

use shoppinglist_infra::{DocumentStore, mongo::MongoDocumentStore};
use shoppinglist_item_service::{app::build_router, config::ItemServiceConfig};
use shoppinglist_shared::observability::init_tracing;
use tokio::{net::TcpListener, signal};

/// ログに出力するサービス名
const SERVICE_NAME: &str = "item-service";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    dotenvy::dotenv().ok();

    let config = ItemServiceConfig::from_env()?;

    init_tracing(config.log_format);
    tracing::info!(
        service = SERVICE_NAME,
        version = env!("CARGO_PKG_VERSION"),
        "トレーシングを初期化しました"
    );

    if config.mongo.connection_string.is_none() {
        tracing::warn!("COSMOSDB_CONNECTION_STRING が未設定です。アイテム一覧の取得は失敗します");
    }

    let store: Arc<dyn DocumentStore> = Arc::new(MongoDocumentStore::new(config.mongo.clone()));
    let app = build_router(store);

    let listener = TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!(
        "Item Service サーバーが起動しました: {}",
        listener.local_addr()?
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Item Service サーバーを停止しました");
    Ok(())
}

/// Ctrl+C または SIGTERM を待つ
///
/// ハンドラを登録できなかったシグナルは待たない。
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "Ctrl+C ハンドラの登録に失敗しました");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "SIGTERM ハンドラの登録に失敗しました");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("Ctrl+C を受信しました。停止します"),
        () = terminate => tracing::info!("SIGTERM を受信しました。停止します"),
    }
}
