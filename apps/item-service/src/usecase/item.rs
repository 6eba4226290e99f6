//! # アイテムユースケース
//!
//! 買い物リストのアイテム一覧取得を実装する。
//!
//! ## 接続のライフサイクル
//!
//! 1. ストアに接続する（失敗した場合はここで終了し、解放処理は行わない）
//! 2. 固定の格納先から全ドキュメントを取得する
//! 3. 取得の成否にかかわらず接続を解放する
//!
//! 接続はリクエストごとに開いて閉じる。リトライは行わない。

use std::sync::Arc;

use shoppinglist_domain::{Item, StoreLocation};
use shoppinglist_infra::DocumentStore;

use crate::error::ItemServiceError;

/// アイテムユースケース実装
pub struct ItemUseCaseImpl {
    store:    Arc<dyn DocumentStore>,
    location: StoreLocation,
}

impl ItemUseCaseImpl {
    /// 買い物リストの格納先（`shoppinglist.itemlist`）を読むユースケースを作成する
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self::with_location(store, StoreLocation::shopping_list())
    }

    pub fn with_location(store: Arc<dyn DocumentStore>, location: StoreLocation) -> Self {
        Self { store, location }
    }

    /// 格納先のすべてのアイテムを取得する
    ///
    /// 順序はストアに依存する。
    pub async fn list_items(&self) -> Result<Vec<Item>, ItemServiceError> {
        let session = self.store.connect().await?;

        let result = session.find_all(&self.location).await;
        session.close().await;

        result.map_err(ItemServiceError::from)
    }
}
