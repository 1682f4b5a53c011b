//! Application services for the quest board and quest lifecycle.

mod board;
mod lifecycle;

pub use board::{
    PostQuestRequest, QuestBoardError, QuestBoardResult, QuestBoardService,
    UpdateQuestRankRequest, UpdateQuestRewardRequest,
};
pub use lifecycle::{
    QuestLifecycleError, QuestLifecycleErrorKind, QuestLifecycleResult, QuestLifecycleService,
    QuestOutcome, ReportQuestRequest, TakeQuestRequest,
};
