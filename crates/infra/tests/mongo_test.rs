//! MongoDB 接続の統合テスト
//!
//! 接続失敗系のテストはサーバーなしで実行できる。
//! 実サーバーを使うテストは `#[ignore]` で除外しており、
//! `MONGODB_TEST_URI` を設定して明示的に実行する。
//!
//! 実行方法:
//! ```bash
//! cargo test -p shoppinglist-infra --test mongo_test
//!
//! # 実サーバーを使うテストも含める
//! MONGODB_TEST_URI=mongodb://localhost:27017 \
//!     cargo test -p shoppinglist-infra --test mongo_test -- --include-ignored
//! ```

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use mongodb::bson::doc;
use pretty_assertions::assert_eq;
use serde_json::json;
use shoppinglist_domain::{Item, StoreLocation};
use shoppinglist_infra::{
    DocumentStore,
    InfraErrorKind,
    mongo::{MongoConfig, MongoDocumentStore, create_client},
};

/// 到達不能なアドレス（ポート 1 は通常どこも listen していない）
const UNREACHABLE_URI: &str = "mongodb://127.0.0.1:1/?directConnection=true";

fn config(connection_string: Option<&str>) -> MongoConfig {
    MongoConfig {
        connection_string:        connection_string.map(str::to_string),
        server_selection_timeout: Duration::from_millis(300),
    }
}

/// テスト用の MongoDB 接続文字列
fn mongodb_test_uri() -> String {
    std::env::var("MONGODB_TEST_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
}

async fn connect_error_kind(config: MongoConfig) -> InfraErrorKind {
    let store = MongoDocumentStore::new(config);
    match store.connect().await {
        Ok(_) => panic!("接続が失敗すること"),
        Err(err) => err.into_parts().0,
    }
}

#[tokio::test]
async fn test_接続文字列が未設定の場合は接続エラーになる() {
    let kind = connect_error_kind(config(None)).await;

    assert!(matches!(kind, InfraErrorKind::Connection(msg) if !msg.is_empty()));
}

#[tokio::test]
async fn test_不正な接続文字列は接続エラーになる() {
    let kind = connect_error_kind(config(Some("not-a-connection-string"))).await;

    assert!(matches!(kind, InfraErrorKind::Connection(_)));
}

#[tokio::test]
async fn test_到達不能なサーバーは接続エラーになる() {
    let kind = connect_error_kind(config(Some(UNREACHABLE_URI))).await;

    assert!(matches!(kind, InfraErrorKind::Connection(_)));
}

#[tokio::test]
#[ignore = "MongoDB サーバーが必要（MONGODB_TEST_URI）"]
async fn test_find_allがコレクションの全ドキュメントを返す() {
    let uri = mongodb_test_uri();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    // ランダムなコレクション名で分離（他テストとの競合を防止）
    let location = StoreLocation::new("shoppinglist_test", format!("itemlist_{nanos}"));

    let client = create_client(&MongoConfig::new(Some(uri.clone())))
        .await
        .unwrap();
    let collection = client
        .database(location.database())
        .collection::<mongodb::bson::Document>(location.collection());
    collection
        .insert_many(vec![
            doc! { "_id": "1", "name": "milk" },
            doc! { "_id": "2", "name": "eggs" },
        ])
        .await
        .unwrap();

    let store = MongoDocumentStore::new(MongoConfig::new(Some(uri)));
    let session = store.connect().await.unwrap();
    let mut items = session.find_all(&location).await.unwrap();
    session.close().await;

    items.sort_by_key(|item| item.get("_id").and_then(|v| v.as_str()).map(str::to_string));
    assert_eq!(
        items,
        vec![
            Item::try_from(json!({"_id": "1", "name": "milk"})).unwrap(),
            Item::try_from(json!({"_id": "2", "name": "eggs"})).unwrap(),
        ]
    );

    // クリーンアップ
    let _ = collection.drop().await;
    client.shutdown().await;
}

#[tokio::test]
#[ignore = "MongoDB サーバーが必要（MONGODB_TEST_URI）"]
async fn test_存在しないコレクションは空を返す() {
    let store = MongoDocumentStore::new(MongoConfig::new(Some(mongodb_test_uri())));

    let session = store.connect().await.unwrap();
    let items = session
        .find_all(&StoreLocation::new("shoppinglist_test", "does_not_exist"))
        .await
        .unwrap();
    session.close().await;

    assert!(items.is_empty());
}
