//! Diesel schema for adventurer persistence.

diesel::table! {
    /// Registered adventurers and their completion counters.
    adventurers (id) {
        /// Store-assigned adventurer identifier.
        id -> Int8,
        /// Display name.
        #[max_length = 255]
        name -> Varchar,
        /// Guild rank.
        rank -> Int4,
        /// Number of quests reported as completed.
        completed_quest_count -> Int4,
        /// Registration timestamp.
        registered_at -> Timestamptz,
    }
}
