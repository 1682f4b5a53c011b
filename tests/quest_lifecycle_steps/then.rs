//! Then steps for quest lifecycle BDD scenarios.

use super::world::{QuestLifecycleWorld, run_async};
use guild_board::quest::domain::QuestStatus;
use rstest_bdd_macros::then;

#[then("the operation succeeds")]
fn operation_succeeds(world: &QuestLifecycleWorld) -> Result<(), eyre::Report> {
    match world.last_result.as_ref() {
        Some(Ok(())) => Ok(()),
        Some(Err(err)) => Err(eyre::eyre!("expected success, got {err}")),
        None => Err(eyre::eyre!("missing operation result")),
    }
}

#[then(r#"the operation fails with "{kind}""#)]
fn operation_fails_with(world: &QuestLifecycleWorld, kind: String) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing operation result"))?;

    match result {
        Err(err) if err.kind().as_str() == kind => Ok(()),
        Err(err) => Err(eyre::eyre!(
            "expected {kind} error, got {} ({err})",
            err.kind().as_str()
        )),
        Ok(()) => Err(eyre::eyre!("expected {kind} error, operation succeeded")),
    }
}

#[then(r#"quest "{quest}" is {status}"#)]
fn quest_has_status(
    world: &QuestLifecycleWorld,
    quest: String,
    status: String,
) -> Result<(), eyre::Report> {
    let expected = QuestStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let stored = run_async(world.board.find_quest(world.quest_id(&quest)?.value()))?;

    if stored.status() != expected {
        return Err(eyre::eyre!(
            "expected quest {quest} to be {expected}, found {}",
            stored.status()
        ));
    }
    Ok(())
}

#[then(r#"adventurer "{adventurer}" has completed {count:u32} quests"#)]
fn adventurer_completed_count(
    world: &QuestLifecycleWorld,
    adventurer: String,
    count: u32,
) -> Result<(), eyre::Report> {
    let stored = run_async(world.roster.find(world.adventurer_id(&adventurer)?.value()))?;

    if stored.completed_quest_count() != count {
        return Err(eyre::eyre!(
            "expected {adventurer} to have completed {count} quests, found {}",
            stored.completed_quest_count()
        ));
    }
    Ok(())
}
