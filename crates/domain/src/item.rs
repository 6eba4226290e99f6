//! # アイテム
//!
//! 買い物リストに登録された 1 件のドキュメント。
//!
//! ## 設計判断
//!
//! ### スキーマを定義しない
//!
//! アイテムの作成・更新は外部の書き込み側が担当し、形は保証されない。
//! このサービスはストアから読んだ内容をそのままレスポンスに載せるだけなので、
//! 型付きの構造体ではなく JSON オブジェクトの Newtype として表現する。
//!
//! `#[serde(transparent)]` により、シリアライズ結果は内部のオブジェクトと
//! 完全に一致する（ラッパーの痕跡は出力に現れない）。

use derive_more::{Deref, From};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 買い物リストのアイテム（不透明なドキュメント）
///
/// キーの順序はストアから受け取った順序を保持する。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Deref, From)]
#[serde(transparent)]
pub struct Item(Map<String, Value>);

impl TryFrom<Value> for Item {
    type Error = serde_json::Error;

    /// JSON 値からアイテムを作成する
    ///
    /// オブジェクト以外（配列・文字列など）はドキュメントとして扱えないため失敗する。
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        serde_json::from_value(value)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_シリアライズ結果が元のオブジェクトと一致する() {
        let item = Item::try_from(json!({"_id": "1", "name": "milk"})).unwrap();

        let serialized = serde_json::to_string(&item).unwrap();

        assert_eq!(serialized, r#"{"_id":"1","name":"milk"}"#);
    }

    #[test]
    fn test_ネストしたフィールドを変更せずに保持する() {
        let value = json!({
            "_id": "65a1b2c3d4e5f60718293a4b",
            "added": "2024-01-01T00:00:00.000Z",
            "name": "eggs",
            "quantity": 12,
            "tags": ["dairy", "fresh"],
            "bought": false
        });

        let item = Item::try_from(value.clone()).unwrap();

        assert_eq!(serde_json::to_value(&item).unwrap(), value);
    }

    #[test]
    fn test_derefでフィールドを参照できる() {
        let item = Item::try_from(json!({"name": "bread"})).unwrap();

        assert_eq!(item.get("name"), Some(&json!("bread")));
        assert_eq!(item.len(), 1);
    }

    #[rstest]
    #[case(json!([1, 2, 3]), "配列")]
    #[case(json!("milk"), "文字列")]
    #[case(json!(42), "数値")]
    #[case(json!(null), "null")]
    fn test_オブジェクト以外はアイテムに変換できない(
        #[case] value: Value,
        #[case] _description: &str,
    ) {
        assert!(Item::try_from(value).is_err());
    }

    #[test]
    fn test_空のオブジェクトもアイテムとして扱える() {
        let item = Item::try_from(json!({})).unwrap();

        assert!(item.is_empty());
        assert_eq!(serde_json::to_string(&item).unwrap(), "{}");
    }
}
