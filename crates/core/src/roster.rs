//! The ordered roster of players and its mutation commands.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Category;
use crate::score::ScoreRecord;
use crate::totals::Totals;

/// Smallest roster the game supports.
pub const MIN_PLAYERS: usize = 1;

/// Largest roster the game supports.
pub const MAX_PLAYERS: usize = 4;

/// Stable player identity.
///
/// Ids come from a monotonically increasing counter and are never reused,
/// even after the player is removed, so a stale id can never alias a newer
/// player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(u64);

impl PlayerId {
    /// The underlying counter value, for canonical encodings.
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One player: identity, display name, and score card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    name: String,
    record: ScoreRecord,
}

impl Player {
    /// Stable identity assigned at creation.
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Current display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player's score card.
    pub fn record(&self) -> &ScoreRecord {
        &self.record
    }

    /// Derived totals for the player's current card.
    pub fn totals(&self) -> Totals {
        Totals::of(&self.record)
    }
}

/// Ordered collection of 1..=4 players.
///
/// Every command is a total function: out-of-bounds additions and removals
/// and unknown ids are silent no-ops, never errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    players: Vec<Player>,
    next_id: u64,
}

impl Roster {
    /// A roster holding one fresh player, honoring the minimum-1 invariant
    /// from the start.
    pub fn new() -> Self {
        let mut roster = Self {
            players: Vec::new(),
            next_id: 0,
        };
        roster.push_player();
        roster
    }

    /// Players in seating order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Number of players currently seated.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// Always false; the roster never drops below one player.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Look up a player by id.
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|player| player.id == id)
    }

    /// Append a new player with a fresh id and an empty card.
    ///
    /// Returns the new id, or `None` when the roster is already full.
    pub fn add_player(&mut self) -> Option<PlayerId> {
        if self.players.len() >= MAX_PLAYERS {
            debug!(len = self.players.len(), "add_player refused: roster full");
            return None;
        }
        Some(self.push_player())
    }

    /// Remove the player with the given id.
    ///
    /// Returns false without changes when the id is unknown or the roster is
    /// at its minimum size.
    pub fn remove_player(&mut self, id: PlayerId) -> bool {
        if self.players.len() <= MIN_PLAYERS {
            debug!(%id, "remove_player refused: roster at minimum");
            return false;
        }
        let Some(position) = self.players.iter().position(|player| player.id == id) else {
            debug!(%id, "remove_player refused: unknown id");
            return false;
        };
        self.players.remove(position);
        true
    }

    /// Replace a player's display name verbatim; empty names are allowed.
    pub fn rename_player(&mut self, id: PlayerId, name: &str) -> bool {
        match self.player_mut(id) {
            Some(player) => {
                player.name = name.to_string();
                true
            }
            None => false,
        }
    }

    /// Record raw input for one of a player's categories.
    ///
    /// The raw text goes through the reject-to-unset parsing policy; invalid
    /// input clears the cell. Unknown ids are ignored.
    pub fn set_score(&mut self, id: PlayerId, category: Category, raw: &str) -> bool {
        match self.player_mut(id) {
            Some(player) => {
                player.record.apply_raw(category, raw);
                true
            }
            None => false,
        }
    }

    /// Clear every player's card. Names and seating are untouched.
    pub fn reset_all(&mut self) {
        for player in &mut self.players {
            player.record.clear_all();
        }
    }

    /// True once every seated player has a fully-set card.
    pub fn all_complete(&self) -> bool {
        self.players.iter().all(|player| player.record.is_complete())
    }

    fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|player| player.id == id)
    }

    fn push_player(&mut self) -> PlayerId {
        let id = PlayerId(self.next_id);
        self.next_id += 1;
        let name = format!("Player {}", self.players.len() + 1);
        self.players.push(Player {
            id,
            name,
            record: ScoreRecord::new(),
        });
        id
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}
