use dashboard_logging::dash_trace;

use crate::{CacheEntry, ClientState, Mutation};

/// Pure state transition: applies a mutation and returns the next state.
pub fn apply(mut state: ClientState, mutation: Mutation) -> ClientState {
    match mutation {
        Mutation::SetLoading(loading) => state.set_loading(loading),
        Mutation::SetUserInfo(user_info) => state.set_user_info(user_info),
        Mutation::SetTensionCache { data, timestamp } => {
            state.replace_tension_cache(CacheEntry::new(data, timestamp));
        }
        Mutation::AddCrawlerRecord(record) => {
            if let Some(evicted) = state.push_crawler_record(record) {
                dash_trace!("crawler history full, evicted oldest record: {evicted}");
            }
        }
        Mutation::ClearCrawlerHistory => state.clear_crawler_history(),
    }
    state.mark_dirty();
    state
}
