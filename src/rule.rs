//! The `member-ordering` rule: diagnostics plus one combined fix per body.

use crate::check::scan;
use crate::fix::{synthesize, Fix};
use crate::models::category::Category;
use crate::models::member::{Member, Span};
use crate::order::OrderTable;
use tracing::{debug, warn};

/// Rule identifier used in reports.
pub const RULE_ID: &str = "member-ordering";

#[derive(Debug, Clone, PartialEq, Eq)]
/// One out-of-order member.
pub struct Diagnostic {
    pub span: Span,
    pub member: Category,
    pub previous_member: Category,
    pub message: String,
    /// Whole-block fix, carried by the last diagnostic of a body only.
    pub fix: Option<Fix>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Everything the rule produced for one class body.
pub struct BodyReport {
    pub diagnostics: Vec<Diagnostic>,
    pub fix: Option<Fix>,
}

/// Check one body and build its fix once every member has been visited.
///
/// With `logging` set, each member and each verdict is traced. Tracing never
/// changes what is reported.
pub fn check_body(
    members: &[Member],
    source: &str,
    table: &OrderTable,
    logging: bool,
) -> BodyReport {
    let mut diagnostics = Vec::new();
    let mut batch = Vec::new();

    for step in scan(members, table) {
        let member = &members[step.index];
        if logging {
            debug!(
                "checking member '{}' as '{}' (order: {})",
                member.text(source).unwrap_or("<unavailable>"),
                step.category,
                step.rank
            );
        }
        let Some(violation) = step.violation() else {
            if logging {
                debug!("order is correct for '{}'", step.category);
            }
            continue;
        };
        if logging {
            warn!(
                "incorrect order: '{}' should be before '{}'",
                violation.category, violation.previous
            );
        }
        batch.push(violation.index);
        diagnostics.push(Diagnostic {
            span: member.span,
            member: violation.category,
            previous_member: violation.previous,
            message: message(violation.category, violation.previous),
            fix: None,
        });
    }

    let fix = synthesize(&batch, members, table, source);
    if !batch.is_empty() && fix.is_none() && logging {
        debug!("no fix available: member spans do not match the source text");
    }
    if let (Some(fix), Some(last)) = (fix.as_ref(), diagnostics.last_mut()) {
        last.fix = Some(fix.clone());
    }
    BodyReport { diagnostics, fix }
}

fn message(member: Category, previous: Category) -> String {
    format!("{} should be declared before {}.", member, previous)
}
