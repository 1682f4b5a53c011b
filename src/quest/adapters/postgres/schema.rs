//! Diesel schema for quest board persistence.

diesel::table! {
    /// Quests posted on the guild board.
    quests (id) {
        /// Store-assigned quest identifier.
        id -> Int8,
        /// Quest title.
        #[max_length = 255]
        name -> Varchar,
        /// Free-text description.
        description -> Text,
        /// Minimum adventurer rank required to take the quest.
        minimum_rank -> Int4,
        /// Reward paid on completion.
        reward_number -> Int8,
        /// Lifecycle status code (0 available, 1 working, 2 completed).
        status -> Int2,
        /// Posting timestamp.
        posted_at -> Timestamptz,
    }
}

diesel::table! {
    /// Append-only claim records linking quests to adventurers.
    quest_claims (id) {
        /// Surrogate key; the quest/adventurer pair is not unique.
        id -> Int8,
        /// Claimed quest.
        quest_id -> Int8,
        /// Claiming adventurer.
        adventurer_id -> Int8,
    }
}

diesel::allow_tables_to_appear_in_same_query!(quests, quest_claims);
