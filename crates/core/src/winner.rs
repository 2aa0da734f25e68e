//! Game-complete detection and the one-shot winner announcement.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::roster::{PlayerId, Roster};

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Deterministic summary of every player's id and full score set.
///
/// Built with FNV-1a over a canonical byte encoding rather than the standard
/// hasher, which is randomized per process. Two evaluations of the same board
/// always produce the same fingerprint, which is what keeps the winner
/// announcement from re-firing on unrelated re-evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fingerprint(u64);

impl Fingerprint {
    /// Fingerprint of the roster's current players and scores.
    pub fn of(roster: &Roster) -> Self {
        let mut hash = FNV_OFFSET;
        let mut eat = |byte: u8| {
            hash ^= u64::from(byte);
            hash = hash.wrapping_mul(FNV_PRIME);
        };
        for player in roster.players() {
            for byte in player.id().raw().to_le_bytes() {
                eat(byte);
            }
            for (_, value) in player.record().iter() {
                match value {
                    Some(score) => {
                        eat(1);
                        for byte in score.to_le_bytes() {
                            eat(byte);
                        }
                    }
                    None => eat(0),
                }
            }
        }
        Fingerprint(hash)
    }
}

/// The winner set for a fully-scored board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinnerAnnouncement {
    /// Ids of every player tied at the maximum grand total, in seating order.
    pub winners: Vec<PlayerId>,
    /// The maximum grand total.
    pub max_total: u32,
    /// Board state the announcement was computed from.
    pub fingerprint: Fingerprint,
}

/// Outcome of one win-detection pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinCheck {
    /// The standing announcement, if the board is fully scored.
    pub announcement: Option<WinnerAnnouncement>,
    /// True only on the pass that first produced this announcement.
    pub newly_announced: bool,
}

/// Watches roster completeness and announces a winner exactly once per
/// distinct fully-scored board state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WinDetector {
    announced: Option<WinnerAnnouncement>,
}

impl WinDetector {
    /// A detector with no standing announcement.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standing announcement, if any.
    pub fn current(&self) -> Option<&WinnerAnnouncement> {
        self.announced.as_ref()
    }

    /// Drop any standing announcement.
    pub fn clear(&mut self) {
        self.announced = None;
    }

    /// Re-derive completeness and the winner set from the roster.
    ///
    /// Incomplete boards clear the announcement. Complete boards announce a
    /// winner only when the fingerprint differs from the last announcement;
    /// re-evaluating unchanged state reports the standing announcement with
    /// `newly_announced` false.
    pub fn evaluate(&mut self, roster: &Roster) -> WinCheck {
        if !roster.all_complete() {
            self.announced = None;
            return WinCheck {
                announcement: None,
                newly_announced: false,
            };
        }

        let fingerprint = Fingerprint::of(roster);
        if let Some(existing) = &self.announced {
            if existing.fingerprint == fingerprint {
                return WinCheck {
                    announcement: Some(existing.clone()),
                    newly_announced: false,
                };
            }
        }

        let max_total = roster
            .players()
            .iter()
            .map(|player| player.totals().grand_total)
            .max()
            .unwrap_or(0);
        let winners: Vec<PlayerId> = roster
            .players()
            .iter()
            .filter(|player| player.totals().grand_total == max_total)
            .map(|player| player.id())
            .collect();

        info!(?winners, max_total, "winner announced");
        let announcement = WinnerAnnouncement {
            winners,
            max_total,
            fingerprint,
        };
        self.announced = Some(announcement.clone());
        WinCheck {
            announcement: Some(announcement),
            newly_announced: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    fn fill_card(roster: &mut Roster, id: PlayerId, upper: u32, lower: u32) {
        for category in Category::UPPER {
            roster.set_score(id, category, &upper.to_string());
        }
        for category in Category::LOWER {
            roster.set_score(id, category, &lower.to_string());
        }
    }

    #[test]
    fn incomplete_board_never_announces() {
        let mut roster = Roster::new();
        let id = roster.players()[0].id();
        roster.set_score(id, Category::Ones, "3");

        let mut detector = WinDetector::new();
        let check = detector.evaluate(&roster);
        assert!(check.announcement.is_none());
        assert!(!check.newly_announced);
        assert!(detector.current().is_none());
    }

    #[test]
    fn single_player_all_zero_board_is_a_zero_point_win() {
        let mut roster = Roster::new();
        let id = roster.players()[0].id();
        fill_card(&mut roster, id, 0, 0);

        let mut detector = WinDetector::new();
        let check = detector.evaluate(&roster);
        let announcement = check.announcement.expect("complete board announces");
        assert!(check.newly_announced);
        assert_eq!(announcement.winners, vec![id]);
        assert_eq!(announcement.max_total, 0);
    }

    #[test]
    fn ties_at_the_maximum_include_every_tied_player() {
        let mut roster = Roster::new();
        let a = roster.players()[0].id();
        let b = roster.add_player().unwrap();

        // A: upper 63 (bonus 35) + lower 50 = 148.
        for category in Category::UPPER {
            roster.set_score(a, category, "10");
        }
        roster.set_score(a, Category::Ones, "13");
        for category in Category::LOWER {
            roster.set_score(a, category, "0");
        }
        roster.set_score(a, Category::Yacht, "50");

        // B: upper 0 + lower 148 = 148.
        for category in Category::UPPER {
            roster.set_score(b, category, "0");
        }
        for category in Category::LOWER {
            roster.set_score(b, category, "0");
        }
        roster.set_score(b, Category::Chance, "148");

        assert_eq!(roster.player(a).unwrap().totals().grand_total, 148);
        assert_eq!(roster.player(b).unwrap().totals().grand_total, 148);

        let mut detector = WinDetector::new();
        let check = detector.evaluate(&roster);
        let announcement = check.announcement.unwrap();
        assert_eq!(announcement.winners, vec![a, b]);
        assert_eq!(announcement.max_total, 148);
    }

    #[test]
    fn unchanged_board_does_not_reraise_the_event() {
        let mut roster = Roster::new();
        let id = roster.players()[0].id();
        fill_card(&mut roster, id, 1, 2);

        let mut detector = WinDetector::new();
        let first = detector.evaluate(&roster);
        assert!(first.newly_announced);

        let second = detector.evaluate(&roster);
        assert!(!second.newly_announced);
        assert_eq!(second.announcement, first.announcement);
    }

    #[test]
    fn score_change_on_a_complete_board_announces_anew() {
        let mut roster = Roster::new();
        let id = roster.players()[0].id();
        fill_card(&mut roster, id, 1, 2);

        let mut detector = WinDetector::new();
        let first = detector.evaluate(&roster);

        roster.set_score(id, Category::Chance, "30");
        let second = detector.evaluate(&roster);
        assert!(second.newly_announced);
        assert_ne!(
            second.announcement.as_ref().unwrap().fingerprint,
            first.announcement.as_ref().unwrap().fingerprint
        );
    }

    #[test]
    fn going_incomplete_clears_the_announcement() {
        let mut roster = Roster::new();
        let id = roster.players()[0].id();
        fill_card(&mut roster, id, 1, 2);

        let mut detector = WinDetector::new();
        detector.evaluate(&roster);
        assert!(detector.current().is_some());

        roster.reset_all();
        let check = detector.evaluate(&roster);
        assert!(check.announcement.is_none());
        assert!(detector.current().is_none());

        // Completing the board again announces again.
        fill_card(&mut roster, id, 1, 2);
        assert!(detector.evaluate(&roster).newly_announced);
    }
}
