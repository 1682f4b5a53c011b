//! In-memory integration tests for the adventurer roster.

use eyre::ensure;
use guild_board::adventurer::{
    ports::AdventurerRepositoryError,
    services::{AdventurerRosterError, UpdateAdventurerRankRequest},
};
use guild_board::quest::services::{QuestLifecycleErrorKind, TakeQuestRequest};
use rstest::rstest;

use super::helpers::{Guild, guild};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn promotion_unlocks_senior_quests(guild: Guild) -> eyre::Result<()> {
    let quest_id = guild.post("Slay the wyrm", 12).await?;
    let adventurer_id = guild.register("Andi", 11).await?;
    let request = TakeQuestRequest::new(quest_id, adventurer_id);
    let refused = guild.lifecycle.take_quest(request).await;
    ensure!(
        refused
            .as_ref()
            .is_err_and(|err| err.kind() == QuestLifecycleErrorKind::IneligibleRank),
        "expected IneligibleRank, got {refused:?}"
    );

    guild
        .roster
        .update_rank(UpdateAdventurerRankRequest::new(adventurer_id.value(), 12))
        .await?;
    guild.lifecycle.take_quest(request).await?;

    ensure!(guild.adventurer(adventurer_id).await?.rank().value() == 12);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_adventurer_cannot_be_promoted(guild: Guild) {
    let result = guild
        .roster
        .update_rank(UpdateAdventurerRankRequest::new(7, 3))
        .await;

    assert!(matches!(
        result,
        Err(AdventurerRosterError::Repository(
            AdventurerRepositoryError::NotFound(_)
        ))
    ));
}
