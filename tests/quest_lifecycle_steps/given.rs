//! Given steps for quest lifecycle BDD scenarios.

use super::world::QuestLifecycleWorld;
use eyre::WrapErr;
use guild_board::quest::services::QuestOutcome;
use rstest_bdd_macros::given;

#[given(r#"a quest "{name}" requiring rank {rank:u32}"#)]
fn quest_requiring_rank(
    world: &mut QuestLifecycleWorld,
    name: String,
    rank: u32,
) -> Result<(), eyre::Report> {
    world.post_quest(name, rank).wrap_err("post quest")
}

#[given(r#"an adventurer "{name}" of rank {rank:u32}"#)]
fn adventurer_of_rank(
    world: &mut QuestLifecycleWorld,
    name: String,
    rank: u32,
) -> Result<(), eyre::Report> {
    world.register(name, rank).wrap_err("register adventurer")
}

#[given(r#"adventurer "{adventurer}" has taken quest "{quest}""#)]
fn adventurer_has_taken_quest(
    world: &mut QuestLifecycleWorld,
    adventurer: String,
    quest: String,
) -> Result<(), eyre::Report> {
    world
        .take(&adventurer, &quest)?
        .wrap_err("take quest in scenario setup")
}

#[given(r#"adventurer "{adventurer}" has reported quest "{quest}" as completed"#)]
fn adventurer_has_completed_quest(
    world: &mut QuestLifecycleWorld,
    adventurer: String,
    quest: String,
) -> Result<(), eyre::Report> {
    world
        .report(&adventurer, &quest, QuestOutcome::Completed)?
        .wrap_err("report quest in scenario setup")
}
