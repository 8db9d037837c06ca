//! 会话存储
//!
//! 只保存一个不透明的 token，存在（且非空白）即视为已登录。

use crate::web::KeyValueStore;

pub const STORAGE_TOKEN_KEY: &str = "token";

#[derive(Debug, Clone, Copy, Default)]
pub struct SessionStore<S> {
    store: S,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn set_token(&self, token: &str) {
        self.store.set(STORAGE_TOKEN_KEY, token);
    }

    pub fn clear_token(&self) {
        self.store.delete(STORAGE_TOKEN_KEY);
    }

    /// 读取 token；空白值按不存在处理
    pub fn token(&self) -> Option<String> {
        self.store
            .get(STORAGE_TOKEN_KEY)
            .filter(|t| !t.trim().is_empty())
    }

    pub fn is_logged_in(&self) -> bool {
        self.token().is_some()
    }
}
