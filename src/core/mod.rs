//! Core building blocks: the player roster and the deterministic RNG.
//!
//! These types are rules-agnostic; everything Resistance-specific lives
//! in `missions` and `engine`.

pub mod rng;
pub mod roster;

pub use rng::{GameRng, GameRngState};
pub use roster::Roster;
