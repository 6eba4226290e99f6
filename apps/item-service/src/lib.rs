//! # Item Service
//!
//! 買い物リストのアイテムを読み出す HTTP サービス。
//!
//! ```text
//! GET /api/johnGetItemList  → shoppinglist.itemlist の全ドキュメント
//! GET /health               → Liveness Check
//! GET /health/ready         → Readiness Check
//! ```
//!
//! ## モジュール構成
//!
//! - [`app`]: ルーター構築
//! - [`config`]: 環境変数からの設定読み込み
//! - [`error`]: エラーと HTTP レスポンスへの変換
//! - [`handler`]: HTTP ハンドラ
//! - [`usecase`]: 接続・取得・解放のライフサイクル

pub mod app;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
