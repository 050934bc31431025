//! Order table: configured category sequence to rank lookup.

use crate::error::ConfigError;
use crate::models::category::Category;

/// Order used when the configuration does not set one.
pub const DEFAULT_ORDER: [Category; 5] = [
    Category::Inject,
    Category::Input,
    Category::InputRequired,
    Category::Output,
    Category::Other,
];

#[derive(Debug, Clone, PartialEq, Eq)]
/// Bijection between categories and ranks `0..5`. Read-only once built.
pub struct OrderTable {
    ranks: [usize; 5],
    by_rank: [Category; 5],
}

impl OrderTable {
    /// Build the table from a permutation of all five categories.
    pub fn build(order: &[Category]) -> Result<Self, ConfigError> {
        if order.len() != Category::ALL.len() {
            return Err(ConfigError::WrongLength {
                expected: Category::ALL.len(),
                actual: order.len(),
            });
        }
        let mut ranks = [usize::MAX; 5];
        let mut by_rank = DEFAULT_ORDER;
        for (rank, &category) in order.iter().enumerate() {
            let slot = &mut ranks[slot_of(category)];
            if *slot != usize::MAX {
                return Err(ConfigError::Duplicate(category));
            }
            *slot = rank;
            by_rank[rank] = category;
        }
        Ok(OrderTable { ranks, by_rank })
    }

    /// Build the table from raw configuration tags.
    pub fn from_tags<S: AsRef<str>>(tags: &[S]) -> Result<Self, ConfigError> {
        let order = tags
            .iter()
            .map(|t| {
                t.as_ref()
                    .parse::<Category>()
                    .map_err(ConfigError::UnknownCategory)
            })
            .collect::<Result<Vec<_>, _>>()?;
        OrderTable::build(&order)
    }

    pub fn rank(&self, category: Category) -> usize {
        self.ranks[slot_of(category)]
    }

    /// Reverse lookup; `None` when `rank` is out of range.
    pub fn category_at(&self, rank: usize) -> Option<Category> {
        self.by_rank.get(rank).copied()
    }

    /// Categories in configured order.
    pub fn order(&self) -> &[Category] {
        &self.by_rank
    }
}

impl Default for OrderTable {
    fn default() -> Self {
        OrderTable {
            ranks: [0, 1, 2, 3, 4],
            by_rank: DEFAULT_ORDER,
        }
    }
}

fn slot_of(category: Category) -> usize {
    match category {
        Category::Inject => 0,
        Category::Input => 1,
        Category::InputRequired => 2,
        Category::Output => 3,
        Category::Other => 4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_built_default() {
        assert_eq!(OrderTable::build(&DEFAULT_ORDER).unwrap(), OrderTable::default());
    }

    #[test]
    fn test_custom_order_ranks() {
        let t = OrderTable::from_tags(&["input", "input.required", "output", "inject", "other"]).unwrap();
        assert_eq!(t.rank(Category::Input), 0);
        assert_eq!(t.rank(Category::Inject), 3);
        assert_eq!(t.category_at(2), Some(Category::Output));
        assert_eq!(t.category_at(5), None);
    }

    #[test]
    fn test_rejects_wrong_length() {
        let err = OrderTable::from_tags(&["input", "output"]).unwrap_err();
        assert_eq!(err, ConfigError::WrongLength { expected: 5, actual: 2 });
    }

    #[test]
    fn test_rejects_duplicate() {
        let err = OrderTable::from_tags(&["input", "input", "output", "inject", "other"]).unwrap_err();
        assert_eq!(err, ConfigError::Duplicate(Category::Input));
    }

    #[test]
    fn test_rejects_unknown_tag() {
        let err = OrderTable::from_tags(&["input", "model", "output", "inject", "other"]).unwrap_err();
        assert_eq!(err, ConfigError::UnknownCategory("model".into()));
    }
}
