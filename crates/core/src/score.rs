//! Per-player score records and the raw-input parsing policy.

use serde::{Deserialize, Serialize};

use crate::catalog::{Category, NUM_CATEGORIES};

/// Parse raw score input into a value, or `None` for an unset cell.
///
/// The policy is permissive by design: anything that is not a clean
/// non-negative integer (empty, garbage text, negative, fractional) clears
/// the cell rather than raising an error. Typing junk into a cell is the
/// supported way to erase a bad entry.
pub fn parse_score(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<u32>().ok()
}

/// One player's recorded results, one slot per catalog category.
///
/// Backed by a fixed array indexed by [`Category::index`], so the record
/// always carries all 13 slots; a partially-keyed record cannot be
/// constructed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    slots: [Option<u32>; NUM_CATEGORIES],
}

impl ScoreRecord {
    /// A record with every category unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded value for a category, or `None` if unset.
    pub fn get(&self, category: Category) -> Option<u32> {
        self.slots[category.index()]
    }

    /// Record a value for a category.
    pub fn set(&mut self, category: Category, value: u32) {
        self.slots[category.index()] = Some(value);
    }

    /// Return a category to the unset state.
    pub fn clear(&mut self, category: Category) {
        self.slots[category.index()] = None;
    }

    /// Return every category to the unset state.
    pub fn clear_all(&mut self) {
        self.slots = [None; NUM_CATEGORIES];
    }

    /// Apply the [`parse_score`] policy to raw input for a category.
    pub fn apply_raw(&mut self, category: Category, raw: &str) {
        self.slots[category.index()] = parse_score(raw);
    }

    /// True once all 13 categories hold a value.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// Number of categories currently holding a value.
    pub fn set_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Iterate slots in card order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, Option<u32>)> + '_ {
        Category::ALL
            .iter()
            .map(move |category| (*category, self.get(*category)))
    }
}
