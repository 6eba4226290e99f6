//! # ShoppingList ドメイン層
//!
//! 買い物リストのアイテムと、その格納先を表すドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **アイテムはスキーマを持たない**: 外部の書き込み側が自由に形を決めるため、
//!   このサービスはアイテムを不透明なキー・バリュー構造として扱う
//! - **格納先は固定**: データベース名・コレクション名は定数として持つ
//!
//! ## 依存関係の方向
//!
//! ```text
//! item-service → infra → domain
//! ```
//!
//! ドメイン層はドキュメントストアのドライバに一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`item`] - アイテム（不透明なドキュメント）
//! - [`store_location`] - データベース名・コレクション名の組
//!
//! ## 使用例
//!
//! ```rust
//! use shoppinglist_domain::{item::Item, store_location::StoreLocation};
//!
//! let location = StoreLocation::shopping_list();
//! assert_eq!(location.to_string(), "shoppinglist.itemlist");
//!
//! let item: Item = serde_json::from_str(r#"{"_id":"1","name":"milk"}"#).unwrap();
//! assert_eq!(item.get("name"), Some(&serde_json::json!("milk")));
//! ```

pub mod item;
pub mod store_location;

pub use item::Item;
pub use store_location::StoreLocation;
