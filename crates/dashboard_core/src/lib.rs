//! Dashboard core: client state, mutations and the single-owner store.
mod history;
mod mutation;
mod state;
mod store;
mod update;

pub use history::BoundedHistory;
pub use mutation::Mutation;
pub use state::{
    CacheEntry, ClientState, HistoryRecord, TensionData, UserInfo, CRAWLER_HISTORY_LIMIT,
};
pub use store::{Clock, Store};
pub use update::apply;
