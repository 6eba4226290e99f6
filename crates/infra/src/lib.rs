//! # ShoppingList インフラ層
//!
//! ドキュメントストアとの接続・通信を担当するインフラストラクチャ層。
//!
//! ## 設計方針
//!
//! このクレートは [`DocumentStore`] / [`DocumentSession`] トレイトと、
//! その MongoDB 実装を提供する。ドライバの詳細をカプセル化し、
//! アプリケーション層をストアの変更から保護する。
//!
//! ## 依存関係
//!
//! ```text
//! item-service → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`document_store`] - ストア・セッションのトレイト
//! - [`mongo`] - MongoDB 実装
//! - [`error`] - インフラ層エラー定義
//! - `mock` - インメモリのモック（`test-utils` feature）

pub mod document_store;
pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod mongo;

pub use document_store::{DocumentSession, DocumentStore};
pub use error::{InfraError, InfraErrorKind};
