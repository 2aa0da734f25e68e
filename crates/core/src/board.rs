//! The scoreboard facade consumed by front ends.
//!
//! Bundles the roster and the win detector behind the command/query surface
//! a rendering layer needs, and re-runs win detection after every command so
//! derived state is never stale.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::Category;
use crate::roster::{Player, PlayerId, Roster};
use crate::totals::Totals;
use crate::winner::{WinDetector, WinnerAnnouncement};

/// Roster plus win detection, driven through commands.
#[derive(Debug, Clone, Default)]
pub struct Scoreboard {
    roster: Roster,
    detector: WinDetector,
    newly_raised: bool,
}

impl Scoreboard {
    /// A board with a single fresh player and no announcement.
    pub fn new() -> Self {
        Self::default()
    }

    /// Players in seating order.
    pub fn players(&self) -> &[Player] {
        self.roster.players()
    }

    /// Look up a player by id.
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.roster.player(id)
    }

    /// Derived totals for a player.
    pub fn totals(&self, id: PlayerId) -> Option<Totals> {
        self.roster.player(id).map(Player::totals)
    }

    /// The standing winner announcement, if the board is fully scored.
    pub fn announcement(&self) -> Option<&WinnerAnnouncement> {
        self.detector.current()
    }

    /// True while the current announcement has not been shown yet.
    ///
    /// Cleared by [`Scoreboard::acknowledge`]; the announcement itself
    /// survives acknowledgement and will not re-raise for the same board.
    pub fn newly_raised(&self) -> bool {
        self.newly_raised
    }

    /// Mark the current announcement as shown.
    pub fn acknowledge(&mut self) {
        self.newly_raised = false;
    }

    /// Seat a new player. Returns the id, or `None` when the table is full.
    pub fn add_player(&mut self) -> Option<PlayerId> {
        let id = self.roster.add_player();
        if id.is_some() {
            self.refresh();
        }
        id
    }

    /// Remove a player; no-op below two players or for unknown ids.
    pub fn remove_player(&mut self, id: PlayerId) -> bool {
        let removed = self.roster.remove_player(id);
        if removed {
            self.refresh();
        }
        removed
    }

    /// Rename a player verbatim.
    pub fn rename_player(&mut self, id: PlayerId, name: &str) -> bool {
        // Names are not part of the fingerprint, so no refresh is needed.
        self.roster.rename_player(id, name)
    }

    /// Record raw input for a player's category (reject-to-unset policy).
    pub fn set_score(&mut self, id: PlayerId, category: Category, raw: &str) -> bool {
        let applied = self.roster.set_score(id, category, raw);
        if applied {
            self.refresh();
        }
        applied
    }

    /// Clear every card; seating and names stay, the announcement goes.
    pub fn reset_all(&mut self) {
        self.roster.reset_all();
        self.refresh();
    }

    /// Capture the board for export or display.
    pub fn snapshot(&self) -> BoardSnapshot {
        let players = self
            .roster
            .players()
            .iter()
            .map(|player| PlayerSnapshot {
                id: player.id(),
                name: player.name().to_string(),
                scores: player.record().iter().map(|(_, value)| value).collect(),
                totals: player.totals(),
            })
            .collect();
        let winner = self.detector.current().map(|announcement| {
            let names = announcement
                .winners
                .iter()
                .filter_map(|id| self.roster.player(*id))
                .map(|player| player.name().to_string())
                .collect();
            WinnerSummary {
                names,
                max_total: announcement.max_total,
            }
        });
        BoardSnapshot {
            captured_at: Utc::now(),
            players,
            winner,
        }
    }

    fn refresh(&mut self) {
        let check = self.detector.evaluate(&self.roster);
        if check.newly_announced {
            self.newly_raised = true;
        } else if check.announcement.is_none() {
            self.newly_raised = false;
        }
    }
}

/// One player's slice of a [`BoardSnapshot`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerSnapshot {
    /// Stable player id.
    pub id: PlayerId,
    /// Display name at capture time.
    pub name: String,
    /// The 13 score slots in card order.
    pub scores: Vec<Option<u32>>,
    /// Derived totals at capture time.
    pub totals: Totals,
}

/// Winner line carried by a snapshot of a finished game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WinnerSummary {
    /// Display names of every tied winner, in seating order.
    pub names: Vec<String>,
    /// The winning grand total.
    pub max_total: u32,
}

/// A consistent capture of the whole board at one moment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Capture timestamp.
    pub captured_at: DateTime<Utc>,
    /// Every seated player with scores and totals.
    pub players: Vec<PlayerSnapshot>,
    /// Winner line, present only for a fully-scored board.
    pub winner: Option<WinnerSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete(board: &mut Scoreboard, id: PlayerId, value: u32) {
        for category in Category::ALL {
            board.set_score(id, category, &value.to_string());
        }
    }

    #[test]
    fn commands_keep_win_state_current() {
        let mut board = Scoreboard::new();
        let id = board.players()[0].id();
        assert!(board.announcement().is_none());

        complete(&mut board, id, 2);
        assert!(board.announcement().is_some());
        assert!(board.newly_raised());

        board.reset_all();
        assert!(board.announcement().is_none());
        assert!(!board.newly_raised());
    }

    #[test]
    fn acknowledging_keeps_the_announcement_standing() {
        let mut board = Scoreboard::new();
        let id = board.players()[0].id();
        complete(&mut board, id, 2);

        board.acknowledge();
        assert!(!board.newly_raised());
        assert!(board.announcement().is_some());

        // Re-writing the same score leaves the fingerprint unchanged, so the
        // dismissed notification does not come back.
        board.set_score(id, Category::Ones, "2");
        assert!(!board.newly_raised());
    }

    #[test]
    fn adding_a_player_makes_a_finished_board_incomplete() {
        let mut board = Scoreboard::new();
        let first = board.players()[0].id();
        complete(&mut board, first, 1);
        assert!(board.announcement().is_some());

        board.add_player().unwrap();
        assert!(board.announcement().is_none());
    }

    #[test]
    fn removing_the_unfinished_player_completes_the_board() {
        let mut board = Scoreboard::new();
        let first = board.players()[0].id();
        complete(&mut board, first, 1);
        let second = board.add_player().unwrap();
        assert!(board.announcement().is_none());

        board.remove_player(second);
        assert!(board.announcement().is_some());
        assert!(board.newly_raised());
    }

    #[test]
    fn snapshot_carries_players_totals_and_winner() {
        let mut board = Scoreboard::new();
        let id = board.players()[0].id();
        board.rename_player(id, "Alice");
        complete(&mut board, id, 3);

        let snapshot = board.snapshot();
        assert_eq!(snapshot.players.len(), 1);
        let player = &snapshot.players[0];
        assert_eq!(player.name, "Alice");
        assert_eq!(player.scores.len(), crate::catalog::NUM_CATEGORIES);
        assert_eq!(player.totals.grand_total, board.totals(id).unwrap().grand_total);

        let winner = snapshot.winner.expect("finished board carries a winner");
        assert_eq!(winner.names, vec!["Alice".to_string()]);
        assert_eq!(winner.max_total, player.totals.grand_total);
    }
}
