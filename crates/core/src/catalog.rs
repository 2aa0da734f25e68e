//! The fixed catalog of scoring categories.
//!
//! The thirteen categories, their section split, and their display labels are
//! defined once here and never change at runtime. Everything else in the crate
//! addresses scores through [`Category`].

use serde::{Deserialize, Serialize};

/// Number of scoring categories on a card.
pub const NUM_CATEGORIES: usize = 13;

/// Section a category belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    /// The six number-matching categories that count toward the bonus.
    Upper,
    /// The seven combination categories.
    Lower,
}

/// One of the 13 fixed scoring slots on a card.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Ones,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    ThreeOfAKind,
    FourOfAKind,
    FullHouse,
    SmallStraight,
    LargeStraight,
    Yacht,
    Chance,
}

impl Category {
    /// All categories in card order, upper section first.
    pub const ALL: [Category; NUM_CATEGORIES] = [
        Category::Ones,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
        Category::ThreeOfAKind,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::SmallStraight,
        Category::LargeStraight,
        Category::Yacht,
        Category::Chance,
    ];

    /// The six upper-section categories.
    pub const UPPER: [Category; 6] = [
        Category::Ones,
        Category::Twos,
        Category::Threes,
        Category::Fours,
        Category::Fives,
        Category::Sixes,
    ];

    /// The seven lower-section categories.
    pub const LOWER: [Category; 7] = [
        Category::ThreeOfAKind,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::SmallStraight,
        Category::LargeStraight,
        Category::Yacht,
        Category::Chance,
    ];

    /// Contiguous index in card order, `0..13`.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Category at the given card-order index, if in range.
    pub fn from_index(index: usize) -> Option<Category> {
        Category::ALL.get(index).copied()
    }

    /// Section this category is scored under.
    pub const fn section(self) -> Section {
        if (self as usize) < Category::UPPER.len() {
            Section::Upper
        } else {
            Section::Lower
        }
    }

    /// User-facing label for score cards and exports.
    pub const fn label(self) -> &'static str {
        match self {
            Category::Ones => "Ones",
            Category::Twos => "Twos",
            Category::Threes => "Threes",
            Category::Fours => "Fours",
            Category::Fives => "Fives",
            Category::Sixes => "Sixes",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::FourOfAKind => "Four of a Kind",
            Category::FullHouse => "Full House",
            Category::SmallStraight => "Small Straight",
            Category::LargeStraight => "Large Straight",
            Category::Yacht => "Yacht",
            Category::Chance => "Chance",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_holds_thirteen_categories() {
        assert_eq!(Category::ALL.len(), NUM_CATEGORIES);
        assert_eq!(Category::UPPER.len() + Category::LOWER.len(), NUM_CATEGORIES);
    }

    #[test]
    fn indices_are_contiguous_and_round_trip() {
        for (position, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), position);
            assert_eq!(Category::from_index(position), Some(*category));
        }
        assert_eq!(Category::from_index(NUM_CATEGORIES), None);
    }

    #[test]
    fn sections_split_along_card_order() {
        for category in Category::UPPER {
            assert_eq!(category.section(), Section::Upper);
        }
        for category in Category::LOWER {
            assert_eq!(category.section(), Section::Lower);
        }
    }

    #[test]
    fn labels_are_unique() {
        let mut labels: Vec<&str> = Category::ALL.iter().map(|c| c.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), NUM_CATEGORIES);
    }
}
