//! # ヘルスチェックハンドラ
//!
//! - `/health` — Liveness Check（常に `"healthy"` を返す）
//! - `/health/ready` — Readiness Check（ドキュメントストアへの接続を確認）
//!
//! レスポンス型は [`shoppinglist_shared::HealthResponse`] / [`shoppinglist_shared::ReadinessResponse`] を参照。

use std::{collections::HashMap, sync::Arc, time::Duration};

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use shoppinglist_infra::DocumentStore;
use shoppinglist_shared::{CheckStatus, HealthResponse, ReadinessResponse};

/// Readiness Check のタイムアウト
const READINESS_TIMEOUT: Duration = Duration::from_secs(5);

/// Readiness Check 結果のキー
pub const DOCUMENT_STORE_CHECK: &str = "document_store";

/// Item Service のヘルスチェックエンドポイント
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy(env!("CARGO_PKG_VERSION")))
}

/// Readiness Check 用の State
pub struct ReadinessState {
    pub store: Arc<dyn DocumentStore>,
}

/// Item Service の Readiness Check エンドポイント
///
/// ドキュメントストアに接続できれば 200、できなければ 503。
#[tracing::instrument(skip_all)]
pub async fn readiness_check(State(state): State<Arc<ReadinessState>>) -> impl IntoResponse {
    let store_status = check_document_store(state.store.as_ref()).await;

    let checks = HashMap::from([(DOCUMENT_STORE_CHECK.to_string(), store_status)]);
    let response = ReadinessResponse::from_checks(checks);

    let http_status = if response.is_ready() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (http_status, Json(response))
}

/// 接続して即座に解放できるかを確認する（タイムアウト: 5 秒）
async fn check_document_store(store: &dyn DocumentStore) -> CheckStatus {
    match tokio::time::timeout(READINESS_TIMEOUT, store.connect()).await {
        Ok(Ok(session)) => {
            session.close().await;
            CheckStatus::Ok
        }
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "readiness check: document store connect failed");
            CheckStatus::Error
        }
        Err(_) => {
            tracing::warn!("readiness check: document store check timed out");
            CheckStatus::Error
        }
    }
}
