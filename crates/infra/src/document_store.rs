//! # ドキュメントストア
//!
//! ドキュメントストアへの接続と読み取りを抽象化するトレイトを定義する。
//!
//! ## 設計方針
//!
//! - **リクエストごとの接続**: 接続はプールせず、呼び出しごとに開いて閉じる
//! - **セッションの所有**: [`DocumentSession::close`] は `Box<Self>` を消費するため、
//!   閉じたセッションを再利用するコードはコンパイルエラーになる
//! - **テスタビリティ**: トレイト経由でモック可能な設計
//!
//! ## ライフサイクル
//!
//! ```text
//! DocumentStore::connect ──→ DocumentSession::find_all ──→ DocumentSession::close
//!        │ 失敗                                               （成功時・クエリ失敗時）
//!        ↓
//!   close は呼ばれない（開いた接続が存在しない）
//! ```

use async_trait::async_trait;
use shoppinglist_domain::{Item, StoreLocation};

use crate::error::InfraError;

/// ドキュメントストアへの接続を開くトレイト
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// セッションを開く
    ///
    /// 接続文字列が未設定・不正な場合や、サーバーに到達できない場合は
    /// 接続エラー（[`InfraErrorKind::Connection`](crate::InfraErrorKind::Connection)）を返す。
    async fn connect(&self) -> Result<Box<dyn DocumentSession>, InfraError>;
}

/// 開かれたドキュメントストアへの接続
#[async_trait]
pub trait DocumentSession: Send + Sync {
    /// 格納先のすべてのドキュメントを取得する（フィルタなし）
    ///
    /// 順序はストアに依存し、安定性は保証されない。
    async fn find_all(&self, location: &StoreLocation) -> Result<Vec<Item>, InfraError>;

    /// 接続を解放する
    async fn close(self: Box<Self>);
}
