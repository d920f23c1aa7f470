use std::sync::Arc;

use berita_core::ArticleSource;

use crate::session::SessionStore;

pub struct AppState {
    pub source: Arc<dyn ArticleSource>,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(source: Arc<dyn ArticleSource>) -> Self {
        Self {
            source,
            sessions: SessionStore::default(),
        }
    }
}
