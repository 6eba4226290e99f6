//! # Item Service エラー定義
//!
//! Item Service 固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! ## エラーレスポンスの形式
//!
//! どの失敗も `500 Internal Server Error` に変換し、本文は
//! `Error occurred: <メッセージ>` のプレーンテキストとする。
//! `Content-Type` は既存クライアントとの互換性のため、成功時と同じ
//! `application/json` を返す（本文は JSON ではない）。

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use shoppinglist_infra::InfraError;
use thiserror::Error;

/// レスポンスの Content-Type（成功・失敗で共通）
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// エラーレスポンス本文の接頭辞
pub const ERROR_BODY_PREFIX: &str = "Error occurred: ";

/// Item Service で発生するエラー
///
/// ストア由来のエラーは [`InfraError`] の種別（接続・クエリ・シリアライズ）で
/// 区別できる。レスポンス本文のエンコードに失敗した場合は
/// [`Serialization`](ItemServiceError::Serialization) になる。
#[derive(Debug, Error)]
pub enum ItemServiceError {
    /// ドキュメントストアのエラー
    #[error(transparent)]
    Store(#[from] InfraError),

    /// レスポンスのシリアライズエラー
    #[error("レスポンスのシリアライズに失敗しました: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl IntoResponse for ItemServiceError {
    fn into_response(self) -> Response {
        match &self {
            ItemServiceError::Store(e) => {
                tracing::error!(
                    error = %e,
                    span_trace = %e.span_trace(),
                    "アイテム一覧の取得に失敗しました"
                );
            }
            ItemServiceError::Serialization(e) => {
                tracing::error!(error = %e, "アイテム一覧のシリアライズに失敗しました");
            }
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, JSON_CONTENT_TYPE)],
            format!("{ERROR_BODY_PREFIX}{self}"),
        )
            .into_response()
    }
}
