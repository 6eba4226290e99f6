//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! - 各ハンドラはサブモジュールに配置し、ここで re-export する
//! - ハンドラは薄く保ち、取得処理はユースケース層に委譲する

pub mod health;
pub mod item;

pub use health::{ReadinessState, health_check, readiness_check};
pub use item::{ItemState, get_item_list};
