//! # ユースケース層
//!
//! Item Service のアプリケーションロジックを実装する。
//!
//! ## 設計方針
//!
//! - **依存性注入**: ドキュメントストアを `Arc<dyn DocumentStore>` で外部から注入
//! - **薄いハンドラ**: ハンドラはログ出力とレスポンス組み立てのみを担当する

pub mod item;

pub use item::ItemUseCaseImpl;
