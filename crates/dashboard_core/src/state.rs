use serde::Serialize;
use serde_json::Value;

use crate::history::BoundedHistory;

/// Maximum number of crawl/query records kept in the history.
pub const CRAWLER_HISTORY_LIMIT: usize = 20;

/// Tension dataset as returned by the backend.
pub type TensionData = Value;
/// One crawl or query action.
pub type HistoryRecord = Value;
/// Opaque user profile; presence means logged in.
pub type UserInfo = Value;

/// A cached value stamped with the epoch milliseconds at which it was stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheEntry<T> {
    pub data: T,
    pub timestamp: i64,
}

impl<T> CacheEntry<T> {
    pub fn new(data: T, timestamp: i64) -> Self {
        Self { data, timestamp }
    }

    /// Milliseconds elapsed since the entry was stored, clamped at zero.
    pub fn age_ms(&self, now_ms: i64) -> i64 {
        now_ms.saturating_sub(self.timestamp).max(0)
    }

    pub fn is_older_than(&self, max_age_ms: i64, now_ms: i64) -> bool {
        self.age_ms(now_ms) > max_age_ms
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientState {
    loading: bool,
    user_info: Option<UserInfo>,
    tension_cache: Option<CacheEntry<TensionData>>,
    crawler_history: BoundedHistory<HistoryRecord>,
    #[serde(skip)]
    dirty: bool,
}

impl Default for ClientState {
    fn default() -> Self {
        Self {
            loading: false,
            user_info: None,
            tension_cache: None,
            crawler_history: BoundedHistory::with_capacity(CRAWLER_HISTORY_LIMIT),
            dirty: false,
        }
    }
}

impl ClientState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_logged_in(&self) -> bool {
        self.user_info.is_some()
    }

    pub fn user_info(&self) -> Option<&UserInfo> {
        self.user_info.as_ref()
    }

    pub fn cached_tension_data(&self) -> Option<&CacheEntry<TensionData>> {
        self.tension_cache.as_ref()
    }

    /// Crawl history, newest first.
    pub fn crawler_history(&self) -> Vec<HistoryRecord> {
        self.crawler_history.to_vec()
    }

    /// Returns whether any mutation happened since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub(crate) fn set_user_info(&mut self, user_info: Option<UserInfo>) {
        self.user_info = user_info;
    }

    pub(crate) fn replace_tension_cache(&mut self, entry: CacheEntry<TensionData>) {
        self.tension_cache = Some(entry);
    }

    pub(crate) fn push_crawler_record(&mut self, record: HistoryRecord) -> Option<HistoryRecord> {
        self.crawler_history.push_front(record)
    }

    pub(crate) fn clear_crawler_history(&mut self) {
        self.crawler_history.clear();
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
