//! Player roster: the ordered, immutable list of player handles.
//!
//! Players are identified by their handle (a stable, unique string).
//! Roster order is fixed at game start and defines leader rotation:
//! the leader pointer is an index into this list and only ever advances
//! by one position, wrapping.

use serde::{Deserialize, Serialize};

/// Ordered list of player handles for one game.
///
/// The roster never changes after construction. The engine validates
/// size and uniqueness before building one.
///
/// ## Example
///
/// ```
/// use resistance_engine::core::Roster;
///
/// let roster = Roster::new(vec!["ana".into(), "bruno".into(), "carla".into()]);
/// assert_eq!(roster.len(), 3);
/// assert_eq!(roster.get(0), Some("ana"));
/// assert!(roster.contains("carla"));
/// assert_eq!(roster.next_index(2), 0); // wraps
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<String>,
}

impl Roster {
    /// Create a roster from an ordered list of handles.
    #[must_use]
    pub fn new(players: Vec<String>) -> Self {
        Self { players }
    }

    /// Number of players.
    #[must_use]
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// True if the roster holds no players.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Get the handle at a roster position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.players.get(index).map(String::as_str)
    }

    /// Find the roster position of a handle.
    #[must_use]
    pub fn position(&self, player: &str) -> Option<usize> {
        self.players.iter().position(|p| p == player)
    }

    /// True if the handle belongs to this roster.
    #[must_use]
    pub fn contains(&self, player: &str) -> bool {
        self.players.iter().any(|p| p == player)
    }

    /// Iterate over handles in roster order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.players.iter().map(String::as_str)
    }

    /// All handles in roster order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.players
    }

    /// The position after `index`, wrapping at the roster size.
    ///
    /// Leader rotation: advance by exactly one, mod player count.
    #[must_use]
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.players.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(names: &[&str]) -> Roster {
        Roster::new(names.iter().map(|n| n.to_string()).collect())
    }

    #[test]
    fn test_lookup() {
        let r = roster(&["ana", "bruno", "carla"]);

        assert_eq!(r.len(), 3);
        assert_eq!(r.get(0), Some("ana"));
        assert_eq!(r.get(2), Some("carla"));
        assert_eq!(r.get(3), None);

        assert_eq!(r.position("bruno"), Some(1));
        assert_eq!(r.position("dora"), None);

        assert!(r.contains("ana"));
        assert!(!r.contains("dora"));
    }

    #[test]
    fn test_order_is_preserved() {
        let r = roster(&["z", "a", "m"]);
        let collected: Vec<_> = r.iter().collect();
        assert_eq!(collected, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_next_index_wraps() {
        let r = roster(&["a", "b", "c", "d", "e"]);

        assert_eq!(r.next_index(0), 1);
        assert_eq!(r.next_index(3), 4);
        assert_eq!(r.next_index(4), 0);
    }

    #[test]
    fn test_serde_round_trip() {
        let r = roster(&["ana", "bruno"]);
        let json = serde_json::to_string(&r).unwrap();
        let back: Roster = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}
