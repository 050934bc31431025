//! Shared data models: host input shapes and lint output structs.

pub mod category;
pub mod document;
pub mod member;

use crate::fix::Fix;
use serde::Serialize;

#[derive(Debug, Serialize)]
/// A single lint issue with severity and location.
pub struct Issue {
    pub file: String,
    pub rule: String,
    pub severity: String,
    /// Class body the issue belongs to, when the host named it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[usize; 2]>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix: Option<Fix>,
}

impl Issue {
    /// Document-level failure that is reported instead of aborting the run.
    pub fn document_error(file: String, rule: &str, message: String) -> Self {
        Issue {
            file,
            rule: rule.to_string(),
            severity: "error".into(),
            body: None,
            range: None,
            message,
            fix: None,
        }
    }
}

#[derive(Debug, Default, Serialize)]
/// Aggregated lint summary used by printers.
pub struct Summary {
    pub errors: usize,
    pub warnings: usize,
    pub infos: usize,
    pub files: usize,
}

#[derive(Debug, Serialize)]
/// Lint results container.
pub struct LintResult {
    pub issues: Vec<Issue>,
    pub summary: Summary,
}
