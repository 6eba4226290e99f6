//! # BSON → JSON 変換
//!
//! ストアから読んだドキュメントを、既存クライアントが受け取ってきた JSON の形に変換する。
//!
//! | BSON | JSON |
//! |------|------|
//! | `ObjectId` | 16 進文字列（`"65a1b2c3d4e5f60718293a4b"`） |
//! | `DateTime` | ミリ秒精度の ISO 8601 文字列（`"2024-01-01T00:00:00.000Z"`） |
//! | `Double` | 数値。整数値は小数点なし、`NaN` / `±Infinity` は `null` |
//! | `Int32` / `Int64` | 数値 |
//! | `Binary` | Base64 文字列 |
//! | `Null` / `Undefined` | `null` |
//! | `Array` / `Document` | 要素ごとに再帰的に変換 |
//!
//! それ以外（`Decimal128`, `Timestamp` など）は relaxed Extended JSON で表現する。

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use chrono::{DateTime, SecondsFormat};
use mongodb::bson::{self, Bson, Document};
use serde_json::{Map, Value};
use shoppinglist_domain::Item;

use crate::error::InfraError;

/// ISO 8601 文字列で表現できる日時の上限（±100,000,000 日）
const MAX_DATE_TIME_MILLIS: u64 = 8_640_000_000_000_000;

/// 倍精度浮動小数点で誤差なく表現できる整数の上限（2^53）
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// BSON ドキュメントをアイテムに変換する
///
/// フィールドの順序はドキュメントの順序を保つ。
pub fn document_to_item(document: Document) -> Result<Item, InfraError> {
    let value = Value::Object(document_to_map(document));
    Item::try_from(value).map_err(InfraError::from)
}

fn document_to_map(document: Document) -> Map<String, Value> {
    document
        .into_iter()
        .map(|(key, value)| (key, bson_to_json(value)))
        .collect()
}

fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::Double(v) => double_to_json(v),
        Bson::String(s) | Bson::Symbol(s) => Value::String(s),
        Bson::Boolean(b) => Value::Bool(b),
        Bson::Int32(v) => Value::from(v),
        Bson::Int64(v) => Value::from(v),
        Bson::Null | Bson::Undefined => Value::Null,
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => date_time_to_json(dt),
        Bson::Binary(binary) => Value::String(BASE64.encode(&binary.bytes)),
        Bson::Array(values) => Value::Array(values.into_iter().map(bson_to_json).collect()),
        Bson::Document(document) => Value::Object(document_to_map(document)),
        other => other.into_relaxed_extjson(),
    }
}

fn double_to_json(v: f64) -> Value {
    // 2.0 は "2.0" ではなく "2" として出力する
    if v.fract() == 0.0 && v.abs() < MAX_SAFE_INTEGER {
        return Value::from(v as i64);
    }
    serde_json::Number::from_f64(v).map_or(Value::Null, Value::Number)
}

fn date_time_to_json(dt: bson::DateTime) -> Value {
    let millis = dt.timestamp_millis();
    if millis.unsigned_abs() > MAX_DATE_TIME_MILLIS {
        return Value::Null;
    }
    DateTime::from_timestamp_millis(millis).map_or(Value::Null, |t| {
        Value::String(t.to_rfc3339_opts(SecondsFormat::Millis, true))
    })
}
