//! Fix synthesis: one whole-block replacement per member list.
//!
//! The corrected order is a single replacement spanning the first to the last
//! node of the list. Every node is re-classified and the whole list is stably
//! sorted by rank; nodes of equal rank keep their relative order. Text between
//! nodes (standalone comments, extra blank lines) is not part of any span and
//! does not survive the rewrite.

use crate::classify::classify;
use crate::models::category::Category;
use crate::models::member::Member;
use crate::order::OrderTable;
use anyhow::bail;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// Replace `source[range[0]..range[1]]` with `text`.
pub struct Fix {
    pub range: [usize; 2],
    pub text: String,
}

/// Build the reordered block for `members`.
///
/// `batch` holds the indices of the members flagged as violations. An empty
/// batch means the list is already ordered and yields no fix. Returns `None`
/// as well when a span does not address valid text in `source`.
pub fn synthesize(
    batch: &[usize],
    members: &[Member],
    table: &OrderTable,
    source: &str,
) -> Option<Fix> {
    if batch.is_empty() {
        return None;
    }
    let start = members.first()?.span.start;
    let end = members.last()?.span.end;
    if start > end || end > source.len() {
        return None;
    }

    let mut ranked = members
        .iter()
        .map(|m| Some((sort_rank(m, table), m.text(source)?)))
        .collect::<Option<Vec<_>>>()?;
    ranked.sort_by_key(|(rank, _)| *rank);

    let dropped = text_between(members, source);
    if !dropped.is_empty() {
        debug!(
            "reordering {}..{} drops text between members: {:?}",
            start, end, dropped
        );
    }

    let separator = format!("\n\n{}", indentation_at(source, start));
    let text = ranked
        .into_iter()
        .map(|(_, text)| text)
        .collect::<Vec<_>>()
        .join(separator.as_str());
    Some(Fix {
        range: [start, end],
        text,
    })
}

/// Non-whitespace text found between consecutive nodes, trimmed.
fn text_between<'a>(members: &[Member], source: &'a str) -> Vec<&'a str> {
    members
        .windows(2)
        .filter_map(|pair| source.get(pair[0].span.end..pair[1].span.start))
        .map(str::trim)
        .filter(|gap| !gap.is_empty())
        .collect()
}

/// Non-member nodes sort with `other` so they stay inside the block.
fn sort_rank(member: &Member, table: &OrderTable) -> usize {
    if member.is_classifiable() {
        table.rank(classify(member))
    } else {
        table.rank(Category::Other)
    }
}

/// Leading whitespace of the line containing `offset`, or "" when the line
/// has other text before it.
fn indentation_at(source: &str, offset: usize) -> &str {
    let Some(before) = source.get(..offset) else {
        return "";
    };
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let indent = &before[line_start..];
    if indent.chars().all(|c| c == ' ' || c == '\t') {
        indent
    } else {
        ""
    }
}

/// Apply non-overlapping fixes to `source`.
pub fn apply_fixes(source: &str, fixes: &[Fix]) -> anyhow::Result<String> {
    let mut sorted: Vec<&Fix> = fixes.iter().collect();
    sorted.sort_by_key(|f| f.range[0]);

    let mut out = String::with_capacity(source.len());
    let mut cursor = 0usize;
    for fix in sorted {
        let [start, end] = fix.range;
        if start < cursor {
            bail!("overlapping fix at {}..{}", start, end);
        }
        let Some(kept) = source.get(cursor..start) else {
            bail!("fix range {}..{} is outside the source text", start, end);
        };
        if source.get(start..end).is_none() {
            bail!("fix range {}..{} is outside the source text", start, end);
        }
        out.push_str(kept);
        out.push_str(&fix.text);
        cursor = end;
    }
    out.push_str(&source[cursor..]);
    Ok(out)
}
