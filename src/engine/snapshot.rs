//! Immutable render view of a game.
//!
//! A [`GameSnapshot`] carries everything a presentation layer needs to
//! draw the table: progression, leadership, both ballots, history and
//! tallies. It is a plain value — cloning or serializing it never
//! exposes the engine's mutable state.
//!
//! Snapshots include every player's team vote and mission action;
//! deciding what each player is allowed to see is the collaborator's
//! job, exactly like [`GameEngine::role_of`].
//!
//! [`GameEngine::role_of`]: crate::engine::GameEngine::role_of

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::types::{MissionAction, MissionOutcome, Role, TeamVote};
use crate::missions::MissionConfig;

/// Where the game currently sits in its lifecycle.
///
/// Derived from engine state; the engine itself never stores a phase
/// tag, so the two can never disagree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// The current leader has not proposed a team yet.
    LeaderProposing,
    /// A team is proposed; the all-player vote is open.
    TeamVoting,
    /// The team was approved; members are playing their actions.
    MissionRunning,
    /// The mission's outcome is recorded; waiting for `advance_mission`.
    MissionResolved,
    /// An outcome is set; the engine accepts no further mutation.
    GameOver,
}

/// Complete observable state of one game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub player_count: usize,
    /// Current mission, 1-based.
    pub mission_number: usize,
    pub current_leader: String,
    /// Consecutive team rejections since the last approval.
    pub rejections: u32,
    /// Proposed team, empty when no proposal is live.
    pub proposed_team: Vec<String>,
    /// Team-vote ballot for the current proposal.
    pub team_votes: FxHashMap<String, TeamVote>,
    /// Mission-action ballot for the current mission.
    pub mission_actions: FxHashMap<String, MissionAction>,
    /// Outcomes of every concluded mission, in order.
    pub mission_history: Vec<MissionOutcome>,
    pub success_count: usize,
    pub failure_count: usize,
    /// Winning faction, `None` while the game is live.
    pub outcome: Option<Role>,
    /// Requirements of the current mission, `None` past mission 5.
    pub mission_config: Option<MissionConfig>,
    pub phase: GamePhase,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_serde_round_trip() {
        let mut team_votes = FxHashMap::default();
        team_votes.insert("ana".to_string(), TeamVote::Approve);

        let snapshot = GameSnapshot {
            player_count: 5,
            mission_number: 2,
            current_leader: "bruno".into(),
            rejections: 1,
            proposed_team: vec!["ana".into(), "bruno".into(), "carla".into()],
            team_votes,
            mission_actions: FxHashMap::default(),
            mission_history: vec![MissionOutcome::Success],
            success_count: 1,
            failure_count: 0,
            outcome: None,
            mission_config: Some(MissionConfig {
                team_size: 3,
                fails_needed: 1,
            }),
            phase: GamePhase::TeamVoting,
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: GameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, back);
    }
}
