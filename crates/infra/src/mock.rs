//! # テスト用モックドキュメントストア
//!
//! ハンドラ・ユースケーステストで使用するインメモリのドキュメントストア。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! shoppinglist-infra = { workspace = true, features = ["test-utils"] }
//! ```
//!
//! 接続・検索・解放の呼び出し回数を記録するため、
//! 「接続失敗時には解放が呼ばれない」といった接続のライフサイクルを検証できる。

use std::{
    collections::HashMap,
    sync::{
        Arc,
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;
use shoppinglist_domain::{Item, StoreLocation};

use crate::{
    document_store::{DocumentSession, DocumentStore},
    error::InfraError,
};

/// 呼び出し回数のカウンタ
#[derive(Debug, Default)]
struct CallCounts {
    connect:  AtomicUsize,
    find_all: AtomicUsize,
    close:    AtomicUsize,
}

// ===== MockDocumentStore =====

#[derive(Clone, Default)]
pub struct MockDocumentStore {
    collections:     Arc<Mutex<HashMap<StoreLocation, Vec<Item>>>>,
    connect_failure: Option<String>,
    query_failure:   Option<String>,
    counts:          Arc<CallCounts>,
}

impl MockDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 格納先にアイテムを登録した状態で作成する
    pub fn with_items(location: &StoreLocation, items: Vec<Item>) -> Self {
        let store = Self::new();
        store
            .collections
            .lock()
            .unwrap()
            .insert(location.clone(), items);
        store
    }

    /// 接続が常に失敗するストアを作成する
    pub fn failing_connect(message: impl Into<String>) -> Self {
        Self {
            connect_failure: Some(message.into()),
            ..Self::default()
        }
    }

    /// 検索が常に失敗するようにする
    pub fn with_query_failure(mut self, message: impl Into<String>) -> Self {
        self.query_failure = Some(message.into());
        self
    }

    pub fn add_item(&self, location: &StoreLocation, item: Item) {
        self.collections
            .lock()
            .unwrap()
            .entry(location.clone())
            .or_default()
            .push(item);
    }

    /// 格納先のアイテム数（ストアの中身を直接参照する）
    pub fn item_count(&self, location: &StoreLocation) -> usize {
        self.collections
            .lock()
            .unwrap()
            .get(location)
            .map_or(0, Vec::len)
    }

    pub fn connect_count(&self) -> usize {
        self.counts.connect.load(Ordering::SeqCst)
    }

    pub fn find_all_count(&self) -> usize {
        self.counts.find_all.load(Ordering::SeqCst)
    }

    pub fn close_count(&self) -> usize {
        self.counts.close.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentStore for MockDocumentStore {
    async fn connect(&self) -> Result<Box<dyn DocumentSession>, InfraError> {
        self.counts.connect.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = &self.connect_failure {
            return Err(InfraError::connection(message.clone()));
        }

        Ok(Box::new(MockDocumentSession {
            collections:   self.collections.clone(),
            query_failure: self.query_failure.clone(),
            counts:        self.counts.clone(),
        }))
    }
}

// ===== MockDocumentSession =====

struct MockDocumentSession {
    collections:   Arc<Mutex<HashMap<StoreLocation, Vec<Item>>>>,
    query_failure: Option<String>,
    counts:        Arc<CallCounts>,
}

#[async_trait]
impl DocumentSession for MockDocumentSession {
    async fn find_all(&self, location: &StoreLocation) -> Result<Vec<Item>, InfraError> {
        self.counts.find_all.fetch_add(1, Ordering::SeqCst);

        if let Some(message) = &self.query_failure {
            return Err(InfraError::query(message.clone()));
        }

        // 存在しないコレクションは MongoDB と同様に空として扱う
        Ok(self
            .collections
            .lock()
            .unwrap()
            .get(location)
            .cloned()
            .unwrap_or_default())
    }

    async fn close(self: Box<Self>) {
        self.counts.close.fetch_add(1, Ordering::SeqCst);
    }
}
