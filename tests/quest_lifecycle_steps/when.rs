//! When steps for quest lifecycle BDD scenarios.

use super::world::QuestLifecycleWorld;
use guild_board::quest::services::QuestOutcome;
use rstest_bdd_macros::when;

#[when(r#"adventurer "{adventurer}" takes quest "{quest}""#)]
fn adventurer_takes_quest(
    world: &mut QuestLifecycleWorld,
    adventurer: String,
    quest: String,
) -> Result<(), eyre::Report> {
    let result = world.take(&adventurer, &quest)?;
    world.last_result = Some(result);
    Ok(())
}

#[when(r#"adventurer "{adventurer}" reports quest "{quest}" as {outcome}"#)]
fn adventurer_reports_quest(
    world: &mut QuestLifecycleWorld,
    adventurer: String,
    quest: String,
    outcome: String,
) -> Result<(), eyre::Report> {
    let outcome = match outcome.as_str() {
        "completed" => QuestOutcome::Completed,
        "abandoned" => QuestOutcome::Abandoned,
        other => return Err(eyre::eyre!("unknown outcome in scenario: {other}")),
    };
    let result = world.report(&adventurer, &quest, outcome)?;
    world.last_result = Some(result);
    Ok(())
}
