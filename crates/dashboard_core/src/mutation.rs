use crate::{HistoryRecord, TensionData, UserInfo};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    /// Overwrite the global loading flag.
    SetLoading(bool),
    /// Store or forget the current user profile.
    SetUserInfo(Option<UserInfo>),
    /// Replace the tension cache with `data` stored at `timestamp` (epoch ms).
    SetTensionCache { data: TensionData, timestamp: i64 },
    /// Record one crawl/query action at the head of the history.
    AddCrawlerRecord(HistoryRecord),
    /// Drop every history record.
    ClearCrawlerHistory,
}
