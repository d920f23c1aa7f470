use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::{HeaderMap, HeaderValue};
use axum::response::Response;
use berita_analytics::PageCursor;
use tokio::sync::RwLock;
use uuid::Uuid;

pub const SESSION_COOKIE: &str = "berita_session";

/// Identifies the browser a request came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    pub id: Uuid,
    pub is_new: bool,
}

impl Session {
    /// Reuse the session cookie when present and well formed, otherwise start
    /// a new session.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        match session_id(headers) {
            Some(id) => Self { id, is_new: false },
            None => Self {
                id: Uuid::new_v4(),
                is_new: true,
            },
        }
    }

    /// Attach the cookie to `response` for sessions started by this request.
    pub fn attach(&self, mut response: Response) -> Response {
        if self.is_new {
            let cookie = format!("{}={}; Path=/; HttpOnly; SameSite=Lax", SESSION_COOKIE, self.id);
            if let Ok(value) = HeaderValue::from_str(&cookie) {
                response.headers_mut().append(SET_COOKIE, value);
            }
        }
        response
    }
}

fn session_id(headers: &HeaderMap) -> Option<Uuid> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .and_then(|(_, value)| Uuid::parse_str(value.trim()).ok())
}

/// Sessions idle for longer than this lose their cursor.
pub const SESSION_TTL: Duration = Duration::from_secs(30 * 60);

/// Pagination cursor of every session. Unknown sessions start on page 1,
/// so only sessions that left page 1 take up an entry.
#[derive(Clone)]
pub struct SessionStore {
    cursors: Arc<RwLock<HashMap<Uuid, (PageCursor, Instant)>>>,
    ttl: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_ttl(SESSION_TTL)
    }
}

impl SessionStore {
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            cursors: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    pub async fn cursor(&self, id: Uuid) -> PageCursor {
        self.cursors
            .read()
            .await
            .get(&id)
            .filter(|(_, seen)| seen.elapsed() < self.ttl)
            .map(|(cursor, _)| *cursor)
            .unwrap_or_default()
    }

    /// Record the cursor of `id` and drop sessions that went idle.
    pub async fn store(&self, id: Uuid, cursor: PageCursor) {
        let mut cursors = self.cursors.write().await;
        let before = cursors.len();
        cursors.retain(|_, (_, seen)| seen.elapsed() < self.ttl);
        if cursors.len() < before {
            tracing::debug!(expired = before - cursors.len(), "expired idle sessions");
        }

        if cursor == PageCursor::default() {
            cursors.remove(&id);
        } else {
            cursors.insert(id, (cursor, Instant::now()));
        }
    }

    pub async fn len(&self) -> usize {
        self.cursors.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_cookie_among_others() {
        let id = Uuid::new_v4();
        let mut headers = HeaderMap::new();
        headers.insert(
            COOKIE,
            HeaderValue::from_str(&format!("theme=dark; {}={}", SESSION_COOKIE, id)).unwrap(),
        );
        let session = Session::from_headers(&headers);
        assert_eq!(session.id, id);
        assert!(!session.is_new);
    }

    #[test]
    fn test_invalid_cookie_starts_new_session() {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, HeaderValue::from_static("berita_session=not-a-uuid"));
        assert!(Session::from_headers(&headers).is_new);
        assert!(Session::from_headers(&HeaderMap::new()).is_new);
    }

    #[test]
    fn test_cookie_only_set_for_new_sessions() {
        let fresh = Session::from_headers(&HeaderMap::new());
        let response = fresh.attach(Response::default());
        let cookie = response.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
        assert!(cookie.starts_with(&format!("{}={}", SESSION_COOKIE, fresh.id)));

        let known = Session {
            id: fresh.id,
            is_new: false,
        };
        assert!(known.attach(Response::default()).headers().get(SET_COOKIE).is_none());
    }

    #[tokio::test]
    async fn test_store_starts_on_first_page() {
        let store = SessionStore::default();
        let id = Uuid::new_v4();
        assert_eq!(store.cursor(id).await.page(), 1);
        assert!(store.is_empty().await);

        store.store(id, PageCursor::new(3)).await;
        assert_eq!(store.cursor(id).await.page(), 3);
        assert_eq!(store.cursor(Uuid::new_v4()).await.page(), 1);
    }

    #[tokio::test]
    async fn test_first_page_takes_no_entry() {
        let store = SessionStore::default();
        let id = Uuid::new_v4();
        store.store(id, PageCursor::default()).await;
        assert!(store.is_empty().await);

        store.store(id, PageCursor::new(2)).await;
        assert_eq!(store.len().await, 1);
        store.store(id, PageCursor::new(1)).await;
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_idle_sessions_expire() {
        let store = SessionStore::with_ttl(Duration::ZERO);
        let idle = Uuid::new_v4();
        store.store(idle, PageCursor::new(3)).await;
        assert_eq!(store.cursor(idle).await.page(), 1);

        let active = Uuid::new_v4();
        store.store(active, PageCursor::new(2)).await;
        assert_eq!(store.len().await, 1);
    }
}
