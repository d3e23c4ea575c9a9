//! The Resistance rules engine.
//!
//! One [`GameEngine`] owns the full state of one game and enforces
//! every rule: role assignment, team proposal, team voting, mission
//! execution, leader rotation, rejection escalation and win-condition
//! evaluation.
//!
//! ## Contract with collaborators
//!
//! - All operations are synchronous and complete immediately; the
//!   engine performs no I/O, holds no locks and spawns no tasks.
//!   Callers running under real concurrency must serialize commands
//!   themselves.
//! - Commands validate their preconditions and fail as no-ops
//!   (returning `false` or an unchanged report) instead of panicking.
//!   Once an outcome is set, every command is a no-op.
//! - Queries never mutate. `role_of` answers for any roster player;
//!   what gets revealed to whom is the presentation layer's decision.
//!
//! ## Example
//!
//! ```
//! use resistance_engine::core::GameRng;
//! use resistance_engine::engine::{GameEngine, TeamVote, TeamVoteCycle};
//!
//! let roster: Vec<String> = ["ana", "bia", "caio", "duda", "enzo"]
//!     .iter().map(|s| s.to_string()).collect();
//! let mut rng = GameRng::new(42);
//! let mut game = GameEngine::new(5, roster, &mut rng).unwrap();
//!
//! let leader = game.current_leader().to_string();
//! assert!(game.propose_team(&leader, &["ana", "bia"]));
//!
//! for player in ["ana", "bia", "caio", "duda", "enzo"] {
//!     game.cast_team_vote(player, TeamVote::Approve);
//! }
//! assert!(matches!(game.resolve_team_vote_cycle(), TeamVoteCycle::Approved { .. }));
//! ```

pub mod snapshot;
pub mod types;

use log::{debug, info};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::{GameRng, Roster};
use crate::missions::{
    mission_table, spy_quota, MissionConfig, MAX_PLAYERS, MIN_PLAYERS, MISSION_COUNT,
};

pub use snapshot::{GamePhase, GameSnapshot};
pub use types::{
    MissionAction, MissionOutcome, MissionReport, Role, SetupError, TeamVote, TeamVoteCycle,
    TeamVoteVerdict,
};

/// Consecutive rejections that hand the game to the spies.
pub const REJECTION_LIMIT: u32 = 5;

/// Missions a faction must take to win.
pub const MISSIONS_TO_WIN: usize = 3;

/// The single source of truth for one game of The Resistance.
///
/// Construct one per game; there is no process-wide instance. Several
/// concurrent games are simply several independent engines.
#[derive(Clone, Debug, PartialEq)]
pub struct GameEngine {
    roster: Roster,
    /// Role per roster position, parallel to the roster order.
    roles: Vec<Role>,
    missions: [MissionConfig; MISSION_COUNT],
    leader_index: usize,
    /// Current mission, 1-based. Only ever advances.
    mission_number: usize,
    /// Consecutive rejections since the last approval.
    rejections: u32,
    proposed_team: Vec<String>,
    /// Set when the current proposal won its vote; gates mission actions.
    team_approved: bool,
    team_votes: FxHashMap<String, TeamVote>,
    mission_actions: FxHashMap<String, MissionAction>,
    history: Vec<MissionOutcome>,
    /// Winning faction. Write-once: set by win evaluation or the
    /// rejection limit, never overwritten.
    outcome: Option<Role>,
}

impl GameEngine {
    /// Create a game: validate the roster and assign roles.
    ///
    /// `spy_quota(player_count)` distinct players are drawn uniformly
    /// at random from `rng` as spies; everyone else is Resistance.
    /// This is the engine's only randomized step, so a fixed seed
    /// fully determines the assignment.
    ///
    /// The leader starts at roster position 0, the mission pointer at 1.
    pub fn new(
        player_count: usize,
        roster: Vec<String>,
        rng: &mut GameRng,
    ) -> Result<Self, SetupError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
            return Err(SetupError::InvalidPlayerCount(player_count));
        }
        if roster.len() != player_count {
            return Err(SetupError::RosterSizeMismatch {
                expected: player_count,
                actual: roster.len(),
            });
        }
        let mut seen = FxHashSet::default();
        for name in &roster {
            if !seen.insert(name.as_str()) {
                return Err(SetupError::DuplicatePlayer(name.clone()));
            }
        }

        let quota = spy_quota(player_count);
        let mut roles = vec![Role::Resistance; player_count];
        for index in rng.sample_indices(player_count, quota) {
            roles[index] = Role::Spy;
        }

        info!("game created: {player_count} players, {quota} spies");

        Ok(Self {
            roster: Roster::new(roster),
            roles,
            missions: mission_table(player_count),
            leader_index: 0,
            mission_number: 1,
            rejections: 0,
            proposed_team: Vec::new(),
            team_approved: false,
            team_votes: FxHashMap::default(),
            mission_actions: FxHashMap::default(),
            history: Vec::new(),
            outcome: None,
        })
    }

    // === Roster & role queries ===

    /// Number of players at the table.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.roster.len()
    }

    /// The ordered roster.
    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// A player's hidden role, or `None` for an unknown handle.
    ///
    /// The caller decides what to reveal to whom.
    #[must_use]
    pub fn role_of(&self, player: &str) -> Option<Role> {
        let index = self.roster.position(player)?;
        Some(self.roles[index])
    }

    /// True if the player is a spy.
    #[must_use]
    pub fn is_spy(&self, player: &str) -> bool {
        self.role_of(player) == Some(Role::Spy)
    }

    /// True if the player belongs to the Resistance.
    #[must_use]
    pub fn is_resistance(&self, player: &str) -> bool {
        self.role_of(player) == Some(Role::Resistance)
    }

    /// All spies, in roster order. For the night-phase reveal.
    #[must_use]
    pub fn spies(&self) -> Vec<&str> {
        self.faction(Role::Spy)
    }

    /// All Resistance members, in roster order.
    #[must_use]
    pub fn resistance_members(&self) -> Vec<&str> {
        self.faction(Role::Resistance)
    }

    fn faction(&self, role: Role) -> Vec<&str> {
        self.roster
            .iter()
            .zip(&self.roles)
            .filter(|(_, r)| **r == role)
            .map(|(name, _)| name)
            .collect()
    }

    // === Progression queries ===

    /// Handle of the player currently privileged to propose a team.
    #[must_use]
    pub fn current_leader(&self) -> &str {
        self.roster
            .get(self.leader_index)
            .expect("leader index stays within the roster")
    }

    /// True iff `player` is the current leader and the game is live.
    #[must_use]
    pub fn can_propose(&self, player: &str) -> bool {
        self.outcome.is_none() && self.current_leader() == player
    }

    /// Current mission number, 1-based.
    #[must_use]
    pub fn mission_number(&self) -> usize {
        self.mission_number
    }

    /// Consecutive rejections since the last approval.
    #[must_use]
    pub fn rejections(&self) -> u32 {
        self.rejections
    }

    /// Requirements of the current mission, `None` past mission 5.
    #[must_use]
    pub fn current_mission_config(&self) -> Option<MissionConfig> {
        if self.mission_number <= MISSION_COUNT {
            Some(self.missions[self.mission_number - 1])
        } else {
            None
        }
    }

    /// Missions completed successfully so far.
    #[must_use]
    pub fn success_count(&self) -> usize {
        self.history
            .iter()
            .filter(|o| **o == MissionOutcome::Success)
            .count()
    }

    /// Missions sabotaged so far.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.history
            .iter()
            .filter(|o| **o == MissionOutcome::Failure)
            .count()
    }

    /// Outcomes of every concluded mission, in order.
    #[must_use]
    pub fn mission_history(&self) -> &[MissionOutcome] {
        &self.history
    }

    /// Winning faction, `None` while the game is live.
    #[must_use]
    pub fn outcome(&self) -> Option<Role> {
        self.outcome
    }

    /// True once an outcome is set.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Where the game sits in its lifecycle. Derived, never stored.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        if self.outcome.is_some() {
            GamePhase::GameOver
        } else if self.history.len() >= self.mission_number {
            GamePhase::MissionResolved
        } else if self.team_approved {
            GamePhase::MissionRunning
        } else if !self.proposed_team.is_empty() {
            GamePhase::TeamVoting
        } else {
            GamePhase::LeaderProposing
        }
    }

    // === Team proposal ===

    /// Leader proposes a team for the current mission.
    ///
    /// Returns `false` and changes nothing if the game is over,
    /// `leader` is not the current leader, the mission pointer has run
    /// off the table, the team size does not match the current
    /// mission's requirement, or any member is unknown or repeated.
    ///
    /// On success the team is stored and both ballots from any earlier
    /// proposal this cycle are cleared.
    pub fn propose_team(&mut self, leader: &str, members: &[&str]) -> bool {
        if self.outcome.is_some() || self.current_leader() != leader {
            return false;
        }
        let Some(config) = self.current_mission_config() else {
            return false;
        };
        if members.len() != config.team_size {
            return false;
        }
        if !members.iter().all(|m| self.roster.contains(m)) {
            return false;
        }
        let mut distinct = FxHashSet::default();
        if !members.iter().all(|m| distinct.insert(*m)) {
            return false;
        }

        self.proposed_team = members.iter().map(|m| m.to_string()).collect();
        self.team_approved = false;
        self.team_votes.clear();
        self.mission_actions.clear();

        debug!(
            "mission {}: {leader} proposed team {:?}",
            self.mission_number, self.proposed_team
        );
        true
    }

    // === Team voting ===

    /// Record a player's vote on the proposed team.
    ///
    /// Returns `false` if the game is over, no team is proposed, or
    /// the player is not on the roster. Resubmission overwrites the
    /// earlier vote: last write wins.
    pub fn cast_team_vote(&mut self, player: &str, vote: TeamVote) -> bool {
        if self.outcome.is_some() || self.proposed_team.is_empty() {
            return false;
        }
        if !self.roster.contains(player) {
            return false;
        }

        self.team_votes.insert(player.to_string(), vote);
        true
    }

    /// Tally the team vote once every player has voted.
    ///
    /// `None` while the ballot is incomplete. Approval needs a strict
    /// majority of Approve votes; a tie rejects. Idempotent and
    /// side-effect free.
    #[must_use]
    pub fn tally_team_vote(&self) -> Option<TeamVoteVerdict> {
        if self.team_votes.len() < self.player_count() {
            return None;
        }

        let approvals = self
            .team_votes
            .values()
            .filter(|v| **v == TeamVote::Approve)
            .count();
        let rejections = self.team_votes.len() - approvals;

        if approvals > rejections {
            Some(TeamVoteVerdict::Approved)
        } else {
            Some(TeamVoteVerdict::Rejected)
        }
    }

    /// Resolve the current vote cycle once all votes are in.
    ///
    /// - Ballot incomplete (or game already over): reports
    ///   [`TeamVoteCycle::AwaitingVotes`], no mutation.
    /// - Approved: resets the rejection counter, opens the mission
    ///   phase and reports the team.
    /// - Rejected: increments the rejection counter. The fifth
    ///   consecutive rejection ends the game for the spies; otherwise
    ///   the proposal and ballot are cleared and leadership advances
    ///   by one seat.
    pub fn resolve_team_vote_cycle(&mut self) -> TeamVoteCycle {
        if self.outcome.is_some() {
            return TeamVoteCycle::AwaitingVotes;
        }
        let Some(verdict) = self.tally_team_vote() else {
            return TeamVoteCycle::AwaitingVotes;
        };

        match verdict {
            TeamVoteVerdict::Approved => {
                self.rejections = 0;
                self.team_approved = true;
                info!(
                    "mission {}: team approved {:?}",
                    self.mission_number, self.proposed_team
                );
                TeamVoteCycle::Approved {
                    team: self.proposed_team.clone(),
                }
            }
            TeamVoteVerdict::Rejected => {
                self.rejections += 1;
                if self.rejections >= REJECTION_LIMIT {
                    self.outcome = Some(Role::Spy);
                    info!("{} consecutive rejections: spies win", self.rejections);
                    return TeamVoteCycle::SpiesWin {
                        rejections: self.rejections,
                    };
                }

                self.proposed_team.clear();
                self.team_votes.clear();
                self.leader_index = self.roster.next_index(self.leader_index);
                let new_leader = self.current_leader().to_string();
                info!(
                    "mission {}: team rejected ({} of {}), leader is now {new_leader}",
                    self.mission_number, self.rejections, REJECTION_LIMIT
                );
                TeamVoteCycle::Rejected {
                    new_leader,
                    rejections: self.rejections,
                }
            }
        }
    }

    // === Mission execution ===

    /// Record a team member's mission action.
    ///
    /// Returns `false` if the game is over, the team has not been
    /// approved, the player is not on the approved team, or a
    /// Resistance player tries to play `Failure` (sabotage is a spy
    /// capability, enforced here at the submission boundary).
    /// Resubmission overwrites: last write wins.
    pub fn submit_mission_action(&mut self, player: &str, action: MissionAction) -> bool {
        if self.outcome.is_some() || !self.team_approved {
            return false;
        }
        if !self.proposed_team.iter().any(|m| m == player) {
            return false;
        }
        if self.is_resistance(player) && action == MissionAction::Failure {
            return false;
        }

        self.mission_actions.insert(player.to_string(), action);
        true
    }

    /// Resolve the mission once every team member has acted.
    ///
    /// `None` while the action ballot is incomplete. On the first
    /// completed call for a mission the outcome is appended to the
    /// history and the win condition evaluated; repeat calls return
    /// the same report without recording anything twice.
    pub fn resolve_mission(&mut self) -> Option<MissionReport> {
        let config = self.current_mission_config()?;
        if self.mission_actions.len() < config.team_size {
            return None;
        }

        let fail_count = self
            .mission_actions
            .values()
            .filter(|a| **a == MissionAction::Failure)
            .count();
        let outcome = if fail_count < config.fails_needed {
            MissionOutcome::Success
        } else {
            MissionOutcome::Failure
        };

        if self.history.len() < self.mission_number {
            self.history.push(outcome);
            info!(
                "mission {} resolved: {outcome} ({fail_count} fails, {} needed)",
                self.mission_number, config.fails_needed
            );
            self.evaluate_win_condition();
        }

        Some(MissionReport {
            outcome,
            fail_count,
            fails_needed: config.fails_needed,
            actions: self.mission_actions.clone(),
        })
    }

    /// Move on to the next mission.
    ///
    /// Clears the proposal and both ballots and advances leadership by
    /// one seat. No-op once the game is over. Sequencing is the
    /// caller's job: call this only after `resolve_mission` produced a
    /// report.
    pub fn advance_mission(&mut self) {
        if self.outcome.is_some() {
            return;
        }

        self.mission_number += 1;
        self.proposed_team.clear();
        self.team_approved = false;
        self.team_votes.clear();
        self.mission_actions.clear();
        self.leader_index = self.roster.next_index(self.leader_index);
        debug!(
            "advanced to mission {}, leader is {}",
            self.mission_number,
            self.current_leader()
        );
    }

    /// Set the outcome if either faction has taken three missions.
    ///
    /// Write-once: an existing outcome is never overwritten.
    fn evaluate_win_condition(&mut self) {
        if self.outcome.is_some() {
            return;
        }

        if self.success_count() >= MISSIONS_TO_WIN {
            self.outcome = Some(Role::Resistance);
            info!("{MISSIONS_TO_WIN} missions succeeded: Resistance wins");
        } else if self.failure_count() >= MISSIONS_TO_WIN {
            self.outcome = Some(Role::Spy);
            info!("{MISSIONS_TO_WIN} missions sabotaged: spies win");
        }
    }

    // === Snapshot ===

    /// An immutable view of everything a renderer needs.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            player_count: self.player_count(),
            mission_number: self.mission_number,
            current_leader: self.current_leader().to_string(),
            rejections: self.rejections,
            proposed_team: self.proposed_team.clone(),
            team_votes: self.team_votes.clone(),
            mission_actions: self.mission_actions.clone(),
            mission_history: self.history.clone(),
            success_count: self.success_count(),
            failure_count: self.failure_count(),
            outcome: self.outcome,
            mission_config: self.current_mission_config(),
            phase: self.phase(),
        }
    }
}
