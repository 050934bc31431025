//! Sequence checker: single linear pass over one member list.
//!
//! The pass carries the highest rank seen so far. A member whose rank is
//! strictly below that maximum is out of order; the category holding the
//! maximum is the one it should have been declared before. Non-member nodes
//! (static blocks, index signatures) are skipped.
//!
//! The comparison is against the maximum, not the rank of the previous
//! member: `[output, inject, input]` yields two violations, both against
//! `output`, where a last-rank comparison would accept `input` after `inject`.

use crate::classify::classify;
use crate::models::category::Category;
use crate::models::member::Member;
use crate::order::OrderTable;
use std::iter::Enumerate;
use std::slice::Iter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A member declared after a category that should follow it.
pub struct Violation {
    /// Position of the member in the list.
    pub index: usize,
    pub category: Category,
    /// Category holding the running maximum rank when the member was visited.
    pub previous: Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Outcome of visiting one classifiable member.
pub struct Step {
    pub index: usize,
    pub category: Category,
    pub rank: usize,
    /// Set when the member is out of order.
    pub previous: Option<Category>,
}

impl Step {
    pub fn violation(&self) -> Option<Violation> {
        self.previous.map(|previous| Violation {
            index: self.index,
            category: self.category,
            previous,
        })
    }
}

/// Lazy scan yielding a `Step` per classifiable member.
pub struct Scan<'a> {
    members: Enumerate<Iter<'a, Member>>,
    table: &'a OrderTable,
    max: Option<(usize, Category)>,
}

impl Iterator for Scan<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        for (index, member) in self.members.by_ref() {
            if !member.is_classifiable() {
                continue;
            }
            let category = classify(member);
            let rank = self.table.rank(category);
            let previous = match self.max {
                Some((max_rank, max_category)) if rank < max_rank => Some(max_category),
                _ => None,
            };
            let raises = match self.max {
                Some((max_rank, _)) => rank > max_rank,
                None => true,
            };
            if raises {
                self.max = Some((rank, category));
            }
            return Some(Step {
                index,
                category,
                rank,
                previous,
            });
        }
        None
    }
}

/// Visit every classifiable member of `members` in source order.
pub fn scan<'a>(members: &'a [Member], table: &'a OrderTable) -> Scan<'a> {
    Scan {
        members: members.iter().enumerate(),
        table,
        max: None,
    }
}

/// Lazily produce every out-of-order member of `members`.
pub fn check<'a>(
    members: &'a [Member],
    table: &'a OrderTable,
) -> impl Iterator<Item = Violation> + 'a {
    scan(members, table).filter_map(|step| step.violation())
}
