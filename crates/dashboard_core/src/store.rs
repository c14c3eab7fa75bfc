use std::fmt;
use std::sync::Arc;

use chrono::Utc;

use crate::{apply, CacheEntry, ClientState, HistoryRecord, Mutation, TensionData, UserInfo};

/// Source of epoch-millisecond timestamps for cache entries.
pub type Clock = Arc<dyn Fn() -> i64 + Send + Sync>;

/// Single owner of the client state. All writes go through named operations.
#[derive(Clone)]
pub struct Store {
    state: ClientState,
    clock: Clock,
}

impl Default for Store {
    fn default() -> Self {
        Self::with_clock(Arc::new(|| Utc::now().timestamp_millis()))
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store").field("state", &self.state).finish()
    }
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clock(clock: Clock) -> Self {
        Self {
            state: ClientState::new(),
            clock,
        }
    }

    pub fn state(&self) -> &ClientState {
        &self.state
    }

    pub fn commit(&mut self, mutation: Mutation) {
        let state = std::mem::take(&mut self.state);
        self.state = apply(state, mutation);
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.commit(Mutation::SetLoading(loading));
    }

    pub fn set_user_info(&mut self, user_info: Option<UserInfo>) {
        self.commit(Mutation::SetUserInfo(user_info));
    }

    /// Replace the tension cache wholesale, stamped with the current time.
    pub fn update_tension_cache(&mut self, data: TensionData) {
        let timestamp = (self.clock)();
        self.commit(Mutation::SetTensionCache { data, timestamp });
    }

    pub fn add_crawler_record(&mut self, record: HistoryRecord) {
        self.commit(Mutation::AddCrawlerRecord(record));
    }

    pub fn clear_crawler_history(&mut self) {
        self.commit(Mutation::ClearCrawlerHistory);
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.is_logged_in()
    }

    pub fn cached_tension_data(&self) -> Option<&CacheEntry<TensionData>> {
        self.state.cached_tension_data()
    }

    pub fn crawler_history(&self) -> Vec<HistoryRecord> {
        self.state.crawler_history()
    }

    pub fn consume_dirty(&mut self) -> bool {
        self.state.consume_dirty()
    }

    pub fn now_ms(&self) -> i64 {
        (self.clock)()
    }
}
