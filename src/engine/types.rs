//! Closed enumerations and per-operation result types.
//!
//! The engine never hands out loosely-typed maps: every operation
//! returns a dedicated enum or record so callers can only read fields
//! that exist for that outcome.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::missions::{MAX_PLAYERS, MIN_PLAYERS};

/// A player's hidden allegiance. Assigned once at game start.
///
/// Doubles as the winning-faction type: the game outcome, once set,
/// is the `Role` of the faction that won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Resistance,
    Spy,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Resistance => write!(f, "Resistance"),
            Role::Spy => write!(f, "Spy"),
        }
    }
}

/// A ballot entry in the all-player vote on a proposed team.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamVote {
    Approve,
    Reject,
}

/// A team member's secret choice during a mission.
///
/// Resistance members can only play `Success`; the engine rejects a
/// `Failure` from them at submission time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissionAction {
    Success,
    Failure,
}

/// The recorded result of a completed mission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MissionOutcome {
    Success,
    Failure,
}

impl std::fmt::Display for MissionOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MissionOutcome::Success => write!(f, "Success"),
            MissionOutcome::Failure => write!(f, "Failure"),
        }
    }
}

/// Verdict of a complete team-vote ballot.
///
/// Approval requires a strict majority of Approve votes among all
/// players; a tie rejects the team.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamVoteVerdict {
    Approved,
    Rejected,
}

/// Report from [`GameEngine::resolve_team_vote_cycle`].
///
/// Each variant carries only the fields that exist for that outcome.
/// `AwaitingVotes` is also what the resolver reports once the game is
/// over, since terminal games accept no further mutation.
///
/// [`GameEngine::resolve_team_vote_cycle`]: crate::engine::GameEngine::resolve_team_vote_cycle
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamVoteCycle {
    /// Not every player has voted yet; nothing changed.
    AwaitingVotes,
    /// Team approved; the mission phase may begin.
    Approved { team: Vec<String> },
    /// Team rejected; leadership moved on.
    Rejected { new_leader: String, rejections: u32 },
    /// Fifth consecutive rejection: the spies win and the game ends.
    SpiesWin { rejections: u32 },
}

/// Report from [`GameEngine::resolve_mission`].
///
/// [`GameEngine::resolve_mission`]: crate::engine::GameEngine::resolve_mission
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MissionReport {
    /// Whether the mission succeeded.
    pub outcome: MissionOutcome,
    /// Failure actions played.
    pub fail_count: usize,
    /// Failures the mission needed in order to fail.
    pub fails_needed: usize,
    /// Snapshot of the per-member action ballot.
    pub actions: FxHashMap<String, MissionAction>,
}

/// Errors that can occur when constructing a game.
///
/// Construction either succeeds completely or leaves no state behind.
#[derive(Clone, Debug, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum SetupError {
    #[error("player count must be between {MIN_PLAYERS} and {MAX_PLAYERS}, got {0}")]
    InvalidPlayerCount(usize),
    #[error("expected {expected} players in the roster, got {actual}")]
    RosterSizeMismatch { expected: usize, actual: usize },
    #[error("duplicate player handle: {0}")]
    DuplicatePlayer(String),
}
