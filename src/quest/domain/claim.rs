//! Claim ("taken by") records linking quests to adventurers.

use super::QuestId;
use crate::adventurer::domain::AdventurerId;
use serde::{Deserialize, Serialize};

/// Evidence that an adventurer claimed a quest at some point.
///
/// Claims are never removed. Several claims may exist for one quest when it
/// was released and taken again, so a claim does not identify the current
/// holder on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Claim {
    quest_id: QuestId,
    adventurer_id: AdventurerId,
}

impl Claim {
    /// Creates a claim for the given pair.
    #[must_use]
    pub const fn new(quest_id: QuestId, adventurer_id: AdventurerId) -> Self {
        Self {
            quest_id,
            adventurer_id,
        }
    }

    /// Returns the claimed quest.
    #[must_use]
    pub const fn quest_id(self) -> QuestId {
        self.quest_id
    }

    /// Returns the claiming adventurer.
    #[must_use]
    pub const fn adventurer_id(self) -> AdventurerId {
        self.adventurer_id
    }
}
