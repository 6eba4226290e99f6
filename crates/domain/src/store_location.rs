//! # 格納先
//!
//! アイテムが格納されているデータベースとコレクションの組。
//!
//! 買い物リストは `shoppinglist` データベースの `itemlist` コレクションに
//! 固定で格納される。格納先を値として持ち回すことで、リポジトリ実装や
//! テスト用ストアが同じ識別子を参照できるようにする。

use derive_more::Display;

/// 買い物リストのデータベース名
pub const SHOPPING_LIST_DATABASE: &str = "shoppinglist";

/// アイテムのコレクション名
pub const ITEM_LIST_COLLECTION: &str = "itemlist";

/// データベース名とコレクション名の組
///
/// `Display` は `{database}.{collection}`（MongoDB の名前空間表記）を出力する。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display("{database}.{collection}")]
pub struct StoreLocation {
    database:   String,
    collection: String,
}

impl StoreLocation {
    /// 任意の格納先を作成する
    pub fn new(database: impl Into<String>, collection: impl Into<String>) -> Self {
        Self {
            database:   database.into(),
            collection: collection.into(),
        }
    }

    /// 買い物リストの格納先（`shoppinglist.itemlist`）
    pub fn shopping_list() -> Self {
        Self::new(SHOPPING_LIST_DATABASE, ITEM_LIST_COLLECTION)
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }
}
