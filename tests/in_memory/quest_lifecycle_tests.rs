//! In-memory integration tests for taking and reporting quests.

use eyre::{bail, ensure};
use guild_board::quest::{
    domain::QuestStatus,
    services::{
        QuestLifecycleError, QuestLifecycleErrorKind, ReportQuestRequest, TakeQuestRequest,
        UpdateQuestRankRequest,
    },
};
use rstest::rstest;

use super::helpers::{Guild, guild};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn adventurer_at_minimum_rank_takes_quest(guild: Guild) -> eyre::Result<()> {
    let quest_id = guild.post("Rescue the cat", 11).await?;
    let adventurer_id = guild.register("Andi", 11).await?;
    ensure!(quest_id.value() == 1 && adventurer_id.value() == 1);

    guild
        .lifecycle
        .take_quest(TakeQuestRequest::new(quest_id, adventurer_id))
        .await?;

    ensure!(guild.quest(quest_id).await?.status() == QuestStatus::Working);
    let active = guild.board.active_quests_for(adventurer_id.value()).await?;
    ensure!(active.len() == 1, "expected one active quest, got {}", active.len());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn taking_a_working_quest_again_is_invalid_state(guild: Guild) -> eyre::Result<()> {
    let quest_id = guild.post("Rescue the cat", 11).await?;
    let adventurer_id = guild.register("Andi", 11).await?;
    let request = TakeQuestRequest::new(quest_id, adventurer_id);
    guild.lifecycle.take_quest(request).await?;

    let second = guild.lifecycle.take_quest(request).await;

    match second {
        Err(err) if err.kind() == QuestLifecycleErrorKind::InvalidState => {}
        other => bail!("expected InvalidState, got {other:?}"),
    }
    ensure!(guild.quests.claims()?.len() == 1, "second take must not add a claim");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn junior_adventurer_cannot_take_senior_quest(guild: Guild) -> eyre::Result<()> {
    guild.post("Rescue the cat", 11).await?;
    let senior_quest = guild.post("Slay the wyrm", 12).await?;
    let adventurer_id = guild.register("Andi", 11).await?;
    ensure!(senior_quest.value() == 2);

    let result = guild
        .lifecycle
        .take_quest(TakeQuestRequest::new(senior_quest, adventurer_id))
        .await;

    ensure!(
        matches!(result, Err(QuestLifecycleError::IneligibleRank { .. })),
        "expected IneligibleRank, got {result:?}"
    );
    ensure!(guild.quest(senior_quest).await?.status() == QuestStatus::Available);
    ensure!(guild.quests.claims()?.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completing_a_quest_credits_the_adventurer(guild: Guild) -> eyre::Result<()> {
    let quest_id = guild.post("Rescue the cat", 11).await?;
    let adventurer_id = guild.register("Andi", 11).await?;
    guild
        .lifecycle
        .take_quest(TakeQuestRequest::new(quest_id, adventurer_id))
        .await?;

    guild
        .lifecycle
        .report_quest(ReportQuestRequest::completed(quest_id, adventurer_id))
        .await?;

    ensure!(guild.quest(quest_id).await?.status() == QuestStatus::Completed);
    ensure!(guild.adventurer(adventurer_id).await?.completed_quest_count() == 1);
    ensure!(guild.board.active_quests_for(adventurer_id.value()).await?.is_empty());
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn abandoning_a_quest_returns_it_to_the_board(guild: Guild) -> eyre::Result<()> {
    let quest_id = guild.post("Rescue the cat", 11).await?;
    let adventurer_id = guild.register("Andi", 11).await?;
    guild
        .lifecycle
        .take_quest(TakeQuestRequest::new(quest_id, adventurer_id))
        .await?;

    guild
        .lifecycle
        .report_quest(ReportQuestRequest::abandoned(quest_id, adventurer_id))
        .await?;

    ensure!(guild.quest(quest_id).await?.status() == QuestStatus::Available);
    ensure!(guild.adventurer(adventurer_id).await?.completed_quest_count() == 0);
    let available = guild.board.quests_by_status(QuestStatus::Available).await?;
    ensure!(available.iter().any(|summary| summary.id == quest_id));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn second_completion_report_is_rejected_without_credit(guild: Guild) -> eyre::Result<()> {
    let quest_id = guild.post("Rescue the cat", 0).await?;
    let adventurer_id = guild.register("Andi", 0).await?;
    guild
        .lifecycle
        .take_quest(TakeQuestRequest::new(quest_id, adventurer_id))
        .await?;
    let report = ReportQuestRequest::completed(quest_id, adventurer_id);
    guild.lifecycle.report_quest(report).await?;

    let second = guild.lifecycle.report_quest(report).await;

    ensure!(
        matches!(
            second,
            Err(QuestLifecycleError::InvalidState {
                actual: QuestStatus::Completed,
                ..
            })
        ),
        "expected InvalidState, got {second:?}"
    );
    ensure!(guild.adventurer(adventurer_id).await?.completed_quest_count() == 1);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reporting_without_a_claim_is_not_found(guild: Guild) -> eyre::Result<()> {
    let quest_id = guild.post("Rescue the cat", 0).await?;
    let holder = guild.register("Andi", 0).await?;
    let stranger = guild.register("Brin", 0).await?;
    guild
        .lifecycle
        .take_quest(TakeQuestRequest::new(quest_id, holder))
        .await?;

    let result = guild
        .lifecycle
        .report_quest(ReportQuestRequest::completed(quest_id, stranger))
        .await;

    ensure!(
        matches!(result, Err(QuestLifecycleError::ClaimNotFound { .. })),
        "expected ClaimNotFound, got {result:?}"
    );
    ensure!(guild.quest(quest_id).await?.status() == QuestStatus::Working);
    ensure!(guild.adventurer(stranger).await?.completed_quest_count() == 0);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stale_claims_still_authorise_reports(guild: Guild) -> eyre::Result<()> {
    let quest_id = guild.post("Rescue the cat", 0).await?;
    let first = guild.register("Andi", 0).await?;
    let second = guild.register("Brin", 0).await?;
    guild
        .lifecycle
        .take_quest(TakeQuestRequest::new(quest_id, first))
        .await?;
    guild
        .lifecycle
        .report_quest(ReportQuestRequest::abandoned(quest_id, first))
        .await?;
    guild
        .lifecycle
        .take_quest(TakeQuestRequest::new(quest_id, second))
        .await?;

    guild
        .lifecycle
        .report_quest(ReportQuestRequest::completed(quest_id, first))
        .await?;

    ensure!(guild.adventurer(first).await?.completed_quest_count() == 1);
    ensure!(guild.adventurer(second).await?.completed_quest_count() == 0);
    ensure!(guild.quests.claims()?.len() == 2);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn raising_the_minimum_rank_does_not_evict_the_holder(guild: Guild) -> eyre::Result<()> {
    let quest_id = guild.post("Rescue the cat", 1).await?;
    let adventurer_id = guild.register("Andi", 1).await?;
    guild
        .lifecycle
        .take_quest(TakeQuestRequest::new(quest_id, adventurer_id))
        .await?;
    guild
        .board
        .update_rank(UpdateQuestRankRequest::new(quest_id.value(), 50))
        .await?;

    guild
        .lifecycle
        .report_quest(ReportQuestRequest::completed(quest_id, adventurer_id))
        .await?;

    ensure!(guild.quest(quest_id).await?.status() == QuestStatus::Completed);
    Ok(())
}
