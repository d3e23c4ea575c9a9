//! # resistance-engine
//!
//! Rules engine for The Resistance, a hidden-role team-selection game
//! for 5-10 players.
//!
//! ## Design Principles
//!
//! 1. **One engine per game**: a [`GameEngine`] is an explicit value
//!    owned by whatever session object represents one game. No global
//!    state; concurrent games are independent instances.
//!
//! 2. **Pure in-process library**: every operation is synchronous and
//!    completes immediately. Transport, rendering, persistence and
//!    timeouts belong to collaborators that drive the engine through
//!    its command/query API and read [`GameSnapshot`]s.
//!
//! 3. **Closed types at the boundary**: roles, votes, actions and
//!    per-operation results are enums and records, never stringly-typed
//!    maps. Callers cannot read a field that does not apply.
//!
//! 4. **Injectable determinism**: role assignment is the only
//!    randomized step and draws from a caller-supplied [`GameRng`], so
//!    a fixed seed fully determines a game.
//!
//! ## Modules
//!
//! - `core`: player roster, deterministic RNG
//! - `missions`: spy quota and the per-player-count mission tables
//! - `engine`: the game state machine, its result types and snapshots

pub mod core;
pub mod engine;
pub mod missions;

// Re-export commonly used types
pub use crate::core::{GameRng, GameRngState, Roster};

pub use crate::missions::{
    mission_table, spy_quota, MissionConfig, MAX_PLAYERS, MIN_PLAYERS, MISSION_COUNT,
};

pub use crate::engine::{
    GameEngine, GamePhase, GameSnapshot, MissionAction, MissionOutcome, MissionReport, Role,
    SetupError, TeamVote, TeamVoteCycle, TeamVoteVerdict, MISSIONS_TO_WIN, REJECTION_LIMIT,
};
