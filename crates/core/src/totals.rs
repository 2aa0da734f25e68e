//! Derived totals for a score record.
//!
//! Totals are never stored; they are recomputed from the record on every
//! read, so they cannot drift from their source.

use serde::{Deserialize, Serialize};

use crate::catalog::Category;
use crate::score::ScoreRecord;

/// Upper-section total required to earn the bonus.
pub const UPPER_BONUS_THRESHOLD: u32 = 63;

/// Bonus awarded when the upper subtotal reaches the threshold.
pub const UPPER_BONUS: u32 = 35;

/// The derived figures for one player's card.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    /// Sum of the six upper categories, unset counting as 0.
    pub upper_subtotal: u32,
    /// 35 once the upper subtotal reaches 63, otherwise 0.
    pub bonus: u32,
    /// Sum of the seven lower categories, unset counting as 0.
    pub lower_total: u32,
    /// Upper subtotal + bonus + lower total.
    pub grand_total: u32,
}

impl Totals {
    /// Compute all four figures from a record.
    pub fn of(record: &ScoreRecord) -> Self {
        let upper_subtotal = section_sum(record, &Category::UPPER);
        let lower_total = section_sum(record, &Category::LOWER);
        let bonus = if upper_subtotal >= UPPER_BONUS_THRESHOLD {
            UPPER_BONUS
        } else {
            0
        };
        Self {
            upper_subtotal,
            bonus,
            lower_total,
            grand_total: upper_subtotal
                .saturating_add(bonus)
                .saturating_add(lower_total),
        }
    }
}

fn section_sum(record: &ScoreRecord, categories: &[Category]) -> u32 {
    categories
        .iter()
        .map(|category| record.get(*category).unwrap_or(0))
        .fold(0u32, u32::saturating_add)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_with_upper(value: u32) -> ScoreRecord {
        let mut record = ScoreRecord::new();
        for category in Category::UPPER {
            record.set(category, value);
        }
        record
    }

    #[test]
    fn empty_record_totals_to_zero() {
        let totals = Totals::of(&ScoreRecord::new());
        assert_eq!(totals, Totals::default());
    }

    #[test]
    fn all_zero_complete_card_totals_to_zero() {
        let mut record = ScoreRecord::new();
        for category in Category::ALL {
            record.set(category, 0);
        }
        let totals = Totals::of(&record);
        assert_eq!(totals.upper_subtotal, 0);
        assert_eq!(totals.bonus, 0);
        assert_eq!(totals.lower_total, 0);
        assert_eq!(totals.grand_total, 0);
    }

    #[test]
    fn bonus_triggers_exactly_at_threshold() {
        // 6 * 10 = 60, below the threshold.
        let below = Totals::of(&record_with_upper(10));
        assert_eq!(below.upper_subtotal, 60);
        assert_eq!(below.bonus, 0);

        let mut record = record_with_upper(10);
        record.set(Category::Ones, 13); // 63 exactly
        let at = Totals::of(&record);
        assert_eq!(at.upper_subtotal, UPPER_BONUS_THRESHOLD);
        assert_eq!(at.bonus, UPPER_BONUS);

        record.set(Category::Ones, 14);
        assert_eq!(Totals::of(&record).bonus, UPPER_BONUS);
    }

    #[test]
    fn grand_total_is_the_sum_of_its_parts() {
        let mut record = record_with_upper(11); // 66 upper, bonus applies
        record.set(Category::Yacht, 50);
        record.set(Category::Chance, 17);
        let totals = Totals::of(&record);
        assert_eq!(totals.upper_subtotal, 66);
        assert_eq!(totals.bonus, UPPER_BONUS);
        assert_eq!(totals.lower_total, 67);
        assert_eq!(
            totals.grand_total,
            totals.upper_subtotal + totals.bonus + totals.lower_total
        );
        assert_eq!(totals.grand_total, 168);
    }

    #[test]
    fn unset_slots_count_as_zero() {
        let mut record = ScoreRecord::new();
        record.set(Category::Sixes, 30);
        record.set(Category::FullHouse, 25);
        let totals = Totals::of(&record);
        assert_eq!(totals.upper_subtotal, 30);
        assert_eq!(totals.lower_total, 25);
        assert_eq!(totals.grand_total, 55);
    }
}
