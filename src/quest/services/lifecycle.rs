//! Service layer for claiming and reporting quests.
//!
//! [`QuestLifecycleService`] is a stateless coordinator: every call reads the
//! current quest and adventurer records through the ports, checks the
//! preconditions in a fixed order and then issues the writes one at a time.
//! Nothing is wrapped in a transaction. Two concurrent claims of the same
//! quest can both observe it as available, and a failed write leaves earlier
//! writes of the same call in place (an orphan claim, or a bumped
//! completed-quest counter on a quest that is still working).

use crate::adventurer::{
    domain::{AdventurerId, Rank},
    ports::{AdventurerRepository, AdventurerRepositoryError},
};
use crate::quest::{
    domain::{Claim, Quest, QuestDomainError, QuestId, QuestStatus},
    ports::{QuestRepository, QuestRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Request payload for claiming a quest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TakeQuestRequest {
    quest_id: QuestId,
    adventurer_id: AdventurerId,
}

impl TakeQuestRequest {
    /// Creates a claim request.
    #[must_use]
    pub const fn new(quest_id: QuestId, adventurer_id: AdventurerId) -> Self {
        Self {
            quest_id,
            adventurer_id,
        }
    }
}

/// Outcome an adventurer reports for a quest they are working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestOutcome {
    /// The quest was finished; the adventurer is credited.
    Completed,
    /// The quest was given up and goes back on the board.
    Abandoned,
}

impl From<bool> for QuestOutcome {
    fn from(completed: bool) -> Self {
        if completed {
            Self::Completed
        } else {
            Self::Abandoned
        }
    }
}

/// Request payload for reporting the outcome of a claimed quest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportQuestRequest {
    quest_id: QuestId,
    adventurer_id: AdventurerId,
    outcome: QuestOutcome,
}

impl ReportQuestRequest {
    /// Creates a report request.
    #[must_use]
    pub const fn new(
        quest_id: QuestId,
        adventurer_id: AdventurerId,
        outcome: QuestOutcome,
    ) -> Self {
        Self {
            quest_id,
            adventurer_id,
            outcome,
        }
    }

    /// Creates a report that the quest was completed.
    #[must_use]
    pub const fn completed(quest_id: QuestId, adventurer_id: AdventurerId) -> Self {
        Self::new(quest_id, adventurer_id, QuestOutcome::Completed)
    }

    /// Creates a report that the quest was abandoned.
    #[must_use]
    pub const fn abandoned(quest_id: QuestId, adventurer_id: AdventurerId) -> Self {
        Self::new(quest_id, adventurer_id, QuestOutcome::Abandoned)
    }
}

/// Coarse classification of [`QuestLifecycleError`] for transport mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestLifecycleErrorKind {
    /// A quest, adventurer or claim record is absent.
    NotFound,
    /// The quest status does not allow the operation.
    InvalidState,
    /// The adventurer's rank is below the quest's minimum.
    IneligibleRank,
    /// The underlying store failed.
    Storage,
}

impl QuestLifecycleErrorKind {
    /// Returns a stable snake-case label for the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::InvalidState => "invalid_state",
            Self::IneligibleRank => "ineligible_rank",
            Self::Storage => "storage",
        }
    }
}

/// Service-level errors for quest lifecycle operations.
#[derive(Debug, Error)]
pub enum QuestLifecycleError {
    /// No quest has the identifier.
    #[error("quest {0} not found")]
    QuestNotFound(QuestId),

    /// No adventurer has the identifier.
    #[error("adventurer {0} not found")]
    AdventurerNotFound(AdventurerId),

    /// The adventurer never claimed the quest.
    #[error("quest {quest_id} not taken by adventurer {adventurer_id}")]
    ClaimNotFound {
        /// Reported quest.
        quest_id: QuestId,
        /// Reporting adventurer.
        adventurer_id: AdventurerId,
    },

    /// The quest is not in the status the operation requires.
    #[error(
        "quest {quest_id} {reason} (status is {actual})",
        reason = invalid_state_reason(.required)
    )]
    InvalidState {
        /// Quest that was checked.
        quest_id: QuestId,
        /// Status the operation requires.
        required: QuestStatus,
        /// Status the quest is in.
        actual: QuestStatus,
    },

    /// The adventurer is not senior enough for the quest.
    #[error(
        "adventurer {adventurer_id} rank too low: rank {rank} is below quest {quest_id} minimum {minimum_rank}"
    )]
    IneligibleRank {
        /// Quest being claimed.
        quest_id: QuestId,
        /// Claiming adventurer.
        adventurer_id: AdventurerId,
        /// The adventurer's rank.
        rank: Rank,
        /// The quest's eligibility floor.
        minimum_rank: Rank,
    },

    /// The quest aggregate rejected a status change.
    #[error(transparent)]
    Domain(#[from] QuestDomainError),

    /// A store call failed.
    #[error("storage failure: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

const fn invalid_state_reason(required: &QuestStatus) -> &'static str {
    match required {
        QuestStatus::Available => "already taken",
        QuestStatus::Working => "not currently in progress",
        QuestStatus::Completed => "not completed",
    }
}

impl QuestLifecycleError {
    /// Returns the error's classification.
    #[must_use]
    pub const fn kind(&self) -> QuestLifecycleErrorKind {
        match self {
            Self::QuestNotFound(_) | Self::AdventurerNotFound(_) | Self::ClaimNotFound { .. } => {
                QuestLifecycleErrorKind::NotFound
            }
            Self::InvalidState { .. } | Self::Domain(_) => QuestLifecycleErrorKind::InvalidState,
            Self::IneligibleRank { .. } => QuestLifecycleErrorKind::IneligibleRank,
            Self::Storage(_) => QuestLifecycleErrorKind::Storage,
        }
    }
}

impl From<QuestRepositoryError> for QuestLifecycleError {
    fn from(err: QuestRepositoryError) -> Self {
        match err {
            QuestRepositoryError::NotFound(id) => Self::QuestNotFound(id),
            QuestRepositoryError::Persistence(source) => Self::Storage(source),
        }
    }
}

impl From<AdventurerRepositoryError> for QuestLifecycleError {
    fn from(err: AdventurerRepositoryError) -> Self {
        match err {
            AdventurerRepositoryError::NotFound(id) => Self::AdventurerNotFound(id),
            AdventurerRepositoryError::Persistence(source) => Self::Storage(source),
        }
    }
}

/// Result type for quest lifecycle operations.
pub type QuestLifecycleResult<T> = Result<T, QuestLifecycleError>;

/// Quest lifecycle orchestration service.
#[derive(Clone)]
pub struct QuestLifecycleService<Q, A>
where
    Q: QuestRepository,
    A: AdventurerRepository,
{
    quests: Arc<Q>,
    adventurers: Arc<A>,
}

impl<Q, A> QuestLifecycleService<Q, A>
where
    Q: QuestRepository,
    A: AdventurerRepository,
{
    /// Creates a new lifecycle service over the two stores.
    #[must_use]
    pub const fn new(quests: Arc<Q>, adventurers: Arc<A>) -> Self {
        Self {
            quests,
            adventurers,
        }
    }

    /// Claims an available quest for an adventurer and marks it working.
    ///
    /// Checks run in order and the first failure is returned: the quest
    /// exists, it is available, the adventurer exists, and the adventurer's
    /// rank meets the quest minimum. Then the claim is recorded and the quest
    /// status is written.
    ///
    /// # Errors
    ///
    /// Returns [`QuestLifecycleError::QuestNotFound`] or
    /// [`QuestLifecycleError::AdventurerNotFound`] for missing records,
    /// [`QuestLifecycleError::InvalidState`] when the quest is not available,
    /// [`QuestLifecycleError::IneligibleRank`] when the adventurer is too
    /// junior, and [`QuestLifecycleError::Storage`] when a store call fails.
    /// Any failed write is reported as `Storage`, even when the store found
    /// no row. A failed status write leaves the claim record behind.
    pub async fn take_quest(&self, request: TakeQuestRequest) -> QuestLifecycleResult<()> {
        let TakeQuestRequest {
            quest_id,
            adventurer_id,
        } = request;

        let mut quest = self.quests.get_quest(quest_id).await?;
        ensure_status(&quest, QuestStatus::Available)?;

        let adventurer = self.adventurers.get_adventurer(adventurer_id).await?;
        if !adventurer.meets_rank(quest.minimum_rank()) {
            debug!(
                %quest_id,
                %adventurer_id,
                rank = %adventurer.rank(),
                minimum_rank = %quest.minimum_rank(),
                "claim rejected: rank too low"
            );
            return Err(QuestLifecycleError::IneligibleRank {
                quest_id,
                adventurer_id,
                rank: adventurer.rank(),
                minimum_rank: quest.minimum_rank(),
            });
        }

        self.quests
            .create_claim(&Claim::new(quest_id, adventurer_id))
            .await
            .map_err(storage)?;

        quest.transition_to(QuestStatus::Working)?;
        if let Err(err) = self.quests.update_quest_status(&quest).await {
            warn!(
                %quest_id,
                %adventurer_id,
                error = %err,
                "claim recorded but quest status update failed"
            );
            return Err(storage(err));
        }

        info!(%quest_id, %adventurer_id, "quest taken");
        Ok(())
    }

    /// Reports the outcome of a quest the adventurer has claimed.
    ///
    /// The adventurer must have a claim on the quest and the quest must be
    /// working. A completed quest credits the adventurer first and is then
    /// marked completed; an abandoned quest goes back to available with no
    /// credit. Claim records are left in place either way.
    ///
    /// # Errors
    ///
    /// Returns [`QuestLifecycleError::ClaimNotFound`] when the adventurer has
    /// no claim on the quest, [`QuestLifecycleError::QuestNotFound`] for a
    /// missing quest, [`QuestLifecycleError::InvalidState`] when the quest is
    /// not working (including a second completion report), and
    /// [`QuestLifecycleError::Storage`] when a store call fails. Any failed
    /// write is reported as `Storage`, even when the store found no row. A
    /// failed status write after a successful credit leaves the credit in
    /// place.
    pub async fn report_quest(&self, request: ReportQuestRequest) -> QuestLifecycleResult<()> {
        let ReportQuestRequest {
            quest_id,
            adventurer_id,
            outcome,
        } = request;

        let claim = Claim::new(quest_id, adventurer_id);
        if !self.quests.claim_exists(&claim).await? {
            debug!(%quest_id, %adventurer_id, "report rejected: no claim");
            return Err(QuestLifecycleError::ClaimNotFound {
                quest_id,
                adventurer_id,
            });
        }

        let mut quest = self.quests.get_quest(quest_id).await?;
        ensure_status(&quest, QuestStatus::Working)?;

        match outcome {
            QuestOutcome::Completed => {
                self.adventurers
                    .increment_completed_quest_count(adventurer_id)
                    .await
                    .map_err(storage)?;
                quest.transition_to(QuestStatus::Completed)?;
                if let Err(err) = self.quests.update_quest_status(&quest).await {
                    warn!(
                        %quest_id,
                        %adventurer_id,
                        error = %err,
                        "completion credited but quest status update failed"
                    );
                    return Err(storage(err));
                }
                info!(%quest_id, %adventurer_id, "quest completed");
            }
            QuestOutcome::Abandoned => {
                quest.transition_to(QuestStatus::Available)?;
                self.quests
                    .update_quest_status(&quest)
                    .await
                    .map_err(storage)?;
                info!(%quest_id, %adventurer_id, "quest abandoned and returned to the board");
            }
        }
        Ok(())
    }
}

/// Maps a failed write to `Storage`, including writes that found no row.
fn storage(err: impl std::error::Error + Send + Sync + 'static) -> QuestLifecycleError {
    QuestLifecycleError::Storage(Arc::new(err))
}

fn ensure_status(quest: &Quest, required: QuestStatus) -> QuestLifecycleResult<()> {
    if quest.status() == required {
        return Ok(());
    }
    debug!(
        quest_id = %quest.id(),
        status = %quest.status(),
        %required,
        "quest status precondition failed"
    );
    Err(QuestLifecycleError::InvalidState {
        quest_id: quest.id(),
        required,
        actual: quest.status(),
    })
}
