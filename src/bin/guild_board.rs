//! Command-line front end for the guild board.
//!
//! Usage:
//!
//! ```text
//! guild_board <command> [options]
//! ```
//!
//! Every command decodes and validates its arguments, runs one service call
//! against the `PostgreSQL` stores named by `DATABASE_URL` and prints the
//! result as JSON on stdout. Failures print a JSON object with `kind` and
//! `message` on stderr and exit non-zero. For example:
//!
//! ```text
//! guild_board post-quest --name "Rescue the cat" --minimum-rank 11 --reward 200000
//! guild_board register-adventurer --name Andi --rank 11
//! guild_board take-quest --quest-id 1 --adventurer-id 1
//! guild_board report-quest --quest-id 1 --adventurer-id 1 --completed
//! ```

use clap::{Args, Parser, Subcommand};
use guild_board::{
    adventurer::{
        adapters::postgres::PostgresAdventurerRepository,
        domain::AdventurerId,
        ports::AdventurerRepositoryError,
        services::{
            AdventurerRosterError, AdventurerRosterService, RegisterAdventurerRequest,
            UpdateAdventurerRankRequest,
        },
    },
    config::{ConfigError, GuildBoardConfig},
    quest::{
        adapters::postgres::PostgresQuestRepository,
        domain::{QuestId, QuestStatus},
        ports::QuestRepositoryError,
        services::{
            PostQuestRequest, QuestBoardError, QuestBoardService, QuestLifecycleError,
            QuestLifecycleService, QuestOutcome, ReportQuestRequest, TakeQuestRequest,
            UpdateQuestRankRequest, UpdateQuestRewardRequest,
        },
    },
};
use mockable::DefaultClock;
use serde::Serialize;
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;
use thiserror::Error;
use tokio::runtime::Builder;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "guild_board")]
#[command(about = "Post, claim and report quests on the guild board")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Post a new available quest.
    PostQuest {
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        minimum_rank: u32,
        #[arg(long)]
        reward: u64,
    },
    /// Remove a quest from the board.
    WithdrawQuest {
        #[arg(long, value_parser = parse_quest_id)]
        quest_id: QuestId,
    },
    /// Change a quest's minimum rank.
    UpdateQuestRank {
        #[arg(long, value_parser = parse_quest_id)]
        quest_id: QuestId,
        #[arg(long)]
        minimum_rank: u32,
    },
    /// Change a quest's reward.
    UpdateQuestReward {
        #[arg(long, value_parser = parse_quest_id)]
        quest_id: QuestId,
        #[arg(long)]
        reward: u64,
    },
    /// List quests in a status.
    ListQuests {
        #[arg(long, default_value = "available", value_parser = parse_status)]
        status: QuestStatus,
    },
    /// List the working quests an adventurer has claimed.
    ActiveQuests {
        #[arg(long, value_parser = parse_adventurer_id)]
        adventurer_id: AdventurerId,
    },
    /// Register an adventurer.
    RegisterAdventurer {
        #[arg(long)]
        name: String,
        #[arg(long, default_value_t = 0)]
        rank: u32,
    },
    /// Change an adventurer's rank.
    UpdateAdventurerRank {
        #[arg(long, value_parser = parse_adventurer_id)]
        adventurer_id: AdventurerId,
        #[arg(long)]
        rank: u32,
    },
    /// Claim an available quest.
    TakeQuest {
        #[arg(long, value_parser = parse_quest_id)]
        quest_id: QuestId,
        #[arg(long, value_parser = parse_adventurer_id)]
        adventurer_id: AdventurerId,
    },
    /// Report a claimed quest as completed or abandoned.
    ReportQuest {
        #[arg(long, value_parser = parse_quest_id)]
        quest_id: QuestId,
        #[arg(long, value_parser = parse_adventurer_id)]
        adventurer_id: AdventurerId,
        #[command(flatten)]
        outcome: OutcomeFlags,
    },
}

#[derive(Debug, Args)]
#[group(required = true, multiple = false)]
struct OutcomeFlags {
    /// The quest was finished.
    #[arg(long)]
    completed: bool,
    /// The quest was given up and goes back on the board.
    #[arg(long)]
    abandoned: bool,
}

impl From<OutcomeFlags> for QuestOutcome {
    fn from(flags: OutcomeFlags) -> Self {
        Self::from(flags.completed && !flags.abandoned)
    }
}

fn parse_quest_id(raw: &str) -> Result<QuestId, String> {
    let value = raw.parse::<i64>().map_err(|err| err.to_string())?;
    QuestId::new(value).map_err(|err| err.to_string())
}

fn parse_adventurer_id(raw: &str) -> Result<AdventurerId, String> {
    let value = raw.parse::<i64>().map_err(|err| err.to_string())?;
    AdventurerId::new(value).map_err(|err| err.to_string())
}

fn parse_status(raw: &str) -> Result<QuestStatus, String> {
    QuestStatus::try_from(raw).map_err(|err| err.to_string())
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to connect to the database: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
    #[error("runtime init failed: {0}")]
    Runtime(#[source] io::Error),
    #[error(transparent)]
    Board(#[from] QuestBoardError),
    #[error(transparent)]
    Roster(#[from] AdventurerRosterError),
    #[error(transparent)]
    Lifecycle(#[from] QuestLifecycleError),
    #[error("failed to write output: {0}")]
    Output(#[from] serde_json::Error),
}

impl CliError {
    const fn kind(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Pool(_) | Self::Runtime(_) | Self::Output(_) => "io",
            Self::Board(QuestBoardError::Repository(QuestRepositoryError::NotFound(_)))
            | Self::Roster(AdventurerRosterError::Repository(
                AdventurerRepositoryError::NotFound(_),
            )) => "not_found",
            Self::Board(QuestBoardError::Repository(_))
            | Self::Roster(AdventurerRosterError::Repository(_)) => "storage",
            Self::Board(_) | Self::Roster(_) => "invalid_input",
            Self::Lifecycle(err) => err.kind().as_str(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorReport<'a> {
    kind: &'a str,
    message: String,
}

#[derive(Debug, Serialize)]
struct Acknowledgement {
    ok: bool,
}

const ACK: Acknowledgement = Acknowledgement { ok: true };

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "command failed");
            let report = ErrorReport {
                kind: err.kind(),
                message: err.to_string(),
            };
            let mut stderr = io::stderr().lock();
            if serde_json::to_writer(&mut stderr, &report).is_ok() {
                writeln!(stderr).ok();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), CliError> {
    let config = GuildBoardConfig::from_env()?;
    init_tracing(&config.log_directive);
    let pool = config.connect()?;

    let quests = Arc::new(PostgresQuestRepository::new(pool.clone()));
    let adventurers = Arc::new(PostgresAdventurerRepository::new(pool));
    let clock = Arc::new(DefaultClock);
    let services = Services {
        board: QuestBoardService::new(Arc::clone(&quests), Arc::clone(&clock)),
        roster: AdventurerRosterService::new(Arc::clone(&adventurers), clock),
        lifecycle: QuestLifecycleService::new(quests, adventurers),
    };

    let runtime = Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)?;
    runtime.block_on(services.dispatch(command))
}

fn init_tracing(default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

struct Services {
    board: QuestBoardService<PostgresQuestRepository, DefaultClock>,
    roster: AdventurerRosterService<PostgresAdventurerRepository, DefaultClock>,
    lifecycle: QuestLifecycleService<PostgresQuestRepository, PostgresAdventurerRepository>,
}

impl Services {
    async fn dispatch(&self, command: Command) -> Result<(), CliError> {
        match command {
            Command::PostQuest {
                name,
                description,
                minimum_rank,
                reward,
            } => {
                let request =
                    PostQuestRequest::new(name, minimum_rank, reward).with_description(description);
                emit(&self.board.post_quest(request).await?)
            }
            Command::WithdrawQuest { quest_id } => {
                self.board.withdraw_quest(quest_id.value()).await?;
                emit(&ACK)
            }
            Command::UpdateQuestRank {
                quest_id,
                minimum_rank,
            } => {
                let request = UpdateQuestRankRequest::new(quest_id.value(), minimum_rank);
                self.board.update_rank(request).await?;
                emit(&ACK)
            }
            Command::UpdateQuestReward { quest_id, reward } => {
                let request = UpdateQuestRewardRequest::new(quest_id.value(), reward);
                self.board.update_reward(request).await?;
                emit(&ACK)
            }
            Command::ListQuests { status } => emit(&self.board.quests_by_status(status).await?),
            Command::ActiveQuests { adventurer_id } => {
                emit(&self.board.active_quests_for(adventurer_id.value()).await?)
            }
            Command::RegisterAdventurer { name, rank } => {
                let request = RegisterAdventurerRequest::new(name, rank);
                emit(&self.roster.register(request).await?)
            }
            Command::UpdateAdventurerRank {
                adventurer_id,
                rank,
            } => {
                let request = UpdateAdventurerRankRequest::new(adventurer_id.value(), rank);
                self.roster.update_rank(request).await?;
                emit(&ACK)
            }
            Command::TakeQuest {
                quest_id,
                adventurer_id,
            } => {
                let request = TakeQuestRequest::new(quest_id, adventurer_id);
                self.lifecycle.take_quest(request).await?;
                emit(&ACK)
            }
            Command::ReportQuest {
                quest_id,
                adventurer_id,
                outcome,
            } => {
                let request = ReportQuestRequest::new(quest_id, adventurer_id, outcome.into());
                self.lifecycle.report_quest(request).await?;
                emit(&ACK)
            }
        }
    }
}

fn emit(value: &impl Serialize) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout).map_err(serde_json::Error::io)?;
    Ok(())
}
