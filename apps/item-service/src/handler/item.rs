//! # アイテム一覧ハンドラ
//!
//! ```text
//! GET /api/johnGetItemList
//! ```
//!
//! 買い物リストの全アイテムを JSON 配列で返す。リクエストのクエリ・本文・
//! ヘッダーは参照しない。
//!
//! ## レスポンス
//!
//! | 結果 | ステータス | 本文 |
//! |------|-----------|------|
//! | 成功 | 200 | アイテムの JSON 配列（0 件なら `[]`） |
//! | 失敗 | 500 | `Error occurred: <メッセージ>` |
//!
//! どちらも `Content-Type: application/json` を付与する。

use std::sync::Arc;

use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::{
    error::{ItemServiceError, JSON_CONTENT_TYPE},
    usecase::ItemUseCaseImpl,
};

/// アイテム API の共有状態
pub struct ItemState {
    pub usecase: ItemUseCaseImpl,
}

/// アイテム一覧を取得する
#[tracing::instrument(skip_all)]
pub async fn get_item_list(
    State(state): State<Arc<ItemState>>,
) -> Result<Response, ItemServiceError> {
    tracing::info!("買い物リストの全アイテムを取得します");

    let items = state.usecase.list_items().await?;
    let body = serde_json::to_vec(&items)?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, JSON_CONTENT_TYPE)],
        body,
    )
        .into_response())
}
