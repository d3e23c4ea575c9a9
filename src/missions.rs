//! Mission configuration tables.
//!
//! Both tables here come straight from the published rules and depend
//! only on the player count fixed at game start:
//!
//! - `spy_quota`: how many of the players are spies
//! - `mission_table`: for each of the 5 missions, how many players go
//!   on it and how many Failure cards are needed to sabotage it

use serde::{Deserialize, Serialize};

/// Number of missions in a game.
pub const MISSION_COUNT: usize = 5;

/// Smallest supported table.
pub const MIN_PLAYERS: usize = 5;

/// Largest supported table.
pub const MAX_PLAYERS: usize = 10;

/// Requirements for a single mission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionConfig {
    /// Players the leader must put on the team.
    pub team_size: usize,
    /// Failure actions required for the mission to fail.
    pub fails_needed: usize,
}

const fn cfg(team_size: usize, fails_needed: usize) -> MissionConfig {
    MissionConfig {
        team_size,
        fails_needed,
    }
}

/// Number of spies for a given player count.
///
/// ## Panics
///
/// Panics if `player_count` is outside [`MIN_PLAYERS`]..=[`MAX_PLAYERS`];
/// the engine validates the count before calling.
#[must_use]
pub fn spy_quota(player_count: usize) -> usize {
    match player_count {
        5 | 6 => 2,
        7..=9 => 3,
        10 => 4,
        _ => panic!("unsupported player count: {player_count}"),
    }
}

/// The five mission configurations for a given player count.
///
/// ## Panics
///
/// Panics if `player_count` is outside [`MIN_PLAYERS`]..=[`MAX_PLAYERS`];
/// the engine validates the count before calling.
#[must_use]
pub fn mission_table(player_count: usize) -> [MissionConfig; MISSION_COUNT] {
    match player_count {
        5 => [cfg(2, 1), cfg(3, 1), cfg(2, 1), cfg(3, 1), cfg(3, 1)],
        6 => [cfg(2, 1), cfg(3, 1), cfg(4, 1), cfg(3, 1), cfg(4, 1)],
        7 => [cfg(2, 1), cfg(3, 1), cfg(3, 1), cfg(4, 2), cfg(4, 1)],
        8..=10 => [cfg(3, 1), cfg(4, 1), cfg(4, 1), cfg(5, 2), cfg(5, 1)],
        _ => panic!("unsupported player count: {player_count}"),
    }
}
