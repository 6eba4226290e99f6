//! # MongoDB 接続管理
//!
//! MongoDB ワイヤプロトコル互換のストア（Cosmos DB for MongoDB を含む）に対する
//! [`DocumentStore`] 実装を提供する。
//!
//! ## 設計方針
//!
//! - **リクエストごとのクライアント**: `connect` のたびに `Client` を作成し、
//!   `close` で `Client::shutdown` を呼ぶ
//! - **接続確認**: `Client` の作成だけではサーバーに接続しないため、
//!   `admin` データベースへの `ping` で到達性を確認する
//! - **タイムアウト**: サーバー選択・接続タイムアウトを設定で上書きする。
//!   ドライバのデフォルト（30 秒）のままだと到達不能時の応答が遅すぎる
//! - **ドキュメント変換**: `ObjectId` は 16 進文字列、日時は ISO 8601 文字列にする
//!   （`conversion` モジュール参照）
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use std::time::Duration;
//!
//! use shoppinglist_infra::mongo::{MongoConfig, MongoDocumentStore};
//!
//! let store = MongoDocumentStore::new(MongoConfig {
//!     connection_string:        Some("mongodb://localhost:27017".to_string()),
//!     server_selection_timeout: Duration::from_secs(5),
//! });
//! let session = store.connect().await?;
//! let items = session.find_all(&StoreLocation::shopping_list()).await?;
//! session.close().await;
//! ```

use std::time::Duration;

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    Client,
    bson::{Document, doc},
    options::ClientOptions,
};
use shoppinglist_domain::{Item, StoreLocation};

use crate::{
    document_store::{DocumentSession, DocumentStore},
    error::InfraError,
};

mod conversion;

pub use conversion::document_to_item;

/// デフォルトのサーバー選択タイムアウト
pub const DEFAULT_SERVER_SELECTION_TIMEOUT: Duration = Duration::from_secs(5);

/// MongoDB 接続設定
#[derive(Debug, Clone)]
pub struct MongoConfig {
    /// 接続文字列（未設定の場合は接続時にエラーとなる）
    pub connection_string:        Option<String>,
    /// サーバー選択・接続タイムアウト
    pub server_selection_timeout: Duration,
}

impl MongoConfig {
    pub fn new(connection_string: Option<String>) -> Self {
        Self {
            connection_string,
            server_selection_timeout: DEFAULT_SERVER_SELECTION_TIMEOUT,
        }
    }
}

/// MongoDB クライアントを作成し、到達性を確認する
///
/// # エラー
///
/// 以下の場合に接続エラーを返す:
/// - 接続文字列が未設定
/// - 接続文字列の解析に失敗（SRV レコードの解決失敗を含む）
/// - `ping` がタイムアウトまたは失敗
pub async fn create_client(config: &MongoConfig) -> Result<Client, InfraError> {
    let Some(uri) = config.connection_string.as_deref() else {
        return Err(InfraError::connection("接続文字列が設定されていません"));
    };

    let mut options = ClientOptions::parse(uri)
        .await
        .map_err(|e| InfraError::connection(format!("接続文字列の解析に失敗: {e}")))?;
    options.server_selection_timeout = Some(config.server_selection_timeout);
    options.connect_timeout = Some(config.server_selection_timeout);

    let client = Client::with_options(options)
        .map_err(|e| InfraError::connection(format!("クライアントの作成に失敗: {e}")))?;

    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .map_err(|e| InfraError::connection(e.to_string()))?;

    Ok(client)
}

/// MongoDB 実装の DocumentStore
#[derive(Debug, Clone)]
pub struct MongoDocumentStore {
    config: MongoConfig,
}

impl MongoDocumentStore {
    pub fn new(config: MongoConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl DocumentStore for MongoDocumentStore {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn connect(&self) -> Result<Box<dyn DocumentSession>, InfraError> {
        let client = create_client(&self.config).await?;
        tracing::debug!("ドキュメントストアに接続しました");
        Ok(Box::new(MongoSession { client }))
    }
}

/// MongoDB のセッション（1 リクエスト分の `Client`）
pub struct MongoSession {
    client: Client,
}

#[async_trait]
impl DocumentSession for MongoSession {
    #[tracing::instrument(skip_all, level = "debug", fields(%location))]
    async fn find_all(&self, location: &StoreLocation) -> Result<Vec<Item>, InfraError> {
        let collection = self
            .client
            .database(location.database())
            .collection::<Document>(location.collection());

        let cursor = collection
            .find(doc! {})
            .await
            .map_err(|e| InfraError::query(e.to_string()))?;

        let documents: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(|e| InfraError::query(e.to_string()))?;

        tracing::debug!(count = documents.len(), "ドキュメントを取得しました");

        documents.into_iter().map(document_to_item).collect()
    }

    async fn close(self: Box<Self>) {
        self.client.shutdown().await;
        tracing::debug!("ドキュメントストアとの接続を閉じました");
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_mongo_config_newはデフォルトのタイムアウトを使う() {
        let config = MongoConfig::new(None);

        assert_eq!(config.server_selection_timeout, DEFAULT_SERVER_SELECTION_TIMEOUT);
        assert!(config.connection_string.is_none());
    }
}
