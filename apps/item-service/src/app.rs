//! # アプリケーション構築
//!
//! State の初期化とルーター構築を担当する。
//! `main.rs` は設定読み込みとサーバー起動に集中する。

use std::sync::Arc;

use axum::{Router, routing::get};
use shoppinglist_infra::DocumentStore;
use tower_http::trace::{DefaultOnFailure, TraceLayer};
use tracing::Level;

use crate::{
    handler::{
        ItemState,
        ReadinessState,
        get_item_list,
        health_check,
        readiness_check,
    },
    usecase::ItemUseCaseImpl,
};

/// アイテム一覧エンドポイントのパス
pub const ITEM_LIST_PATH: &str = "/api/johnGetItemList";

/// ルーターを構築する
///
/// ストアは Readiness Check とアイテム一覧で共有する。
/// デフォルトのログレベル（`info`）では、アイテム一覧 1 リクエストあたりの
/// ログはハンドラの 1 行と、失敗時のエラー 1 行のみになる。
pub fn build_router(store: Arc<dyn DocumentStore>) -> Router {
    let readiness_state = Arc::new(ReadinessState {
        store: store.clone(),
    });
    let item_state = Arc::new(ItemState {
        usecase: ItemUseCaseImpl::new(store),
    });

    Router::new()
        .route("/health", get(health_check))
        .route("/health/ready", get(readiness_check))
        .with_state(readiness_state)
        .route(ITEM_LIST_PATH, get(get_item_list))
        .with_state(item_state)
        // 5xx は ItemServiceError 側で記録済み
        .layer(TraceLayer::new_for_http().on_failure(DefaultOnFailure::new().level(Level::DEBUG)))
}
