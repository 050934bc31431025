//! Applies synthesized member-order fixes to source files.
//!
//! Each class body contributes at most one whole-block fix. All fixes of a
//! document are applied to its source text in one pass. A class body nested
//! inside another (a class expression in a method) lies within the outer
//! body's fix; only the outermost fix is applied and the inner body is fixed
//! on the next run, once the host has re-emitted its spans.

use crate::config::Effective;
use crate::error::ConfigError;
use crate::fix::{apply_fixes, Fix};
use crate::lint::{collect_documents, load_document, LoadedDocument};
use crate::rule::check_body;
use rayon::prelude::*;
use std::fs;
use tracing::{debug, info};

#[derive(Debug)]
pub struct FormatResult {
    pub file: String,
    pub changed: bool,
    pub wrote: bool,
    pub preview: Option<String>,
    pub original: Option<String>,
    pub error: Option<String>,
}

impl FormatResult {
    fn failed(file: String, error: String) -> Self {
        FormatResult {
            file,
            changed: false,
            wrote: false,
            preview: None,
            original: None,
            error: Some(error),
        }
    }
}

/// Reorder members in every document selected by `eff`.
///
/// When `write` is true (and neither `diff` nor `check` is set) changed
/// sources are written back. Otherwise results carry the rewritten text as a
/// preview together with the original. Documents with inline `text` are
/// always previewed.
pub fn run_format(eff: &Effective) -> Result<Vec<FormatResult>, ConfigError> {
    let write = eff.write && !eff.diff && !eff.check;
    let (targets, unreadable) = collect_documents(eff)?;

    let mut results: Vec<FormatResult> = targets
        .par_iter()
        .map(|path| match load_document(&eff.repo_root, path) {
            Ok(loaded) => format_document(&loaded, eff, write),
            Err(issue) => FormatResult::failed(issue.file, issue.message),
        })
        .collect();
    results.extend(
        unreadable
            .into_iter()
            .map(|issue| FormatResult::failed(issue.file, issue.message)),
    );
    results.sort_by(|a, b| a.file.cmp(&b.file));
    Ok(results)
}

fn format_document(loaded: &LoadedDocument, eff: &Effective, write: bool) -> FormatResult {
    let fixes: Vec<Fix> = loaded
        .document
        .bodies
        .iter()
        .filter_map(|body| check_body(&body.members, &loaded.source, &eff.table, eff.logging).fix)
        .collect();
    if fixes.is_empty() {
        return FormatResult {
            file: loaded.display.clone(),
            changed: false,
            wrote: false,
            preview: None,
            original: None,
            error: None,
        };
    }
    let (fixes, deferred) = outermost(fixes);
    let fixed = match apply_fixes(&loaded.source, &fixes) {
        Ok(s) => s,
        Err(e) => return FormatResult::failed(loaded.display.clone(), e.to_string()),
    };
    debug!("{}: {} body fix(es)", loaded.display, fixes.len());
    if deferred > 0 {
        debug!(
            "{}: {} nested body fix(es) deferred to the next run",
            loaded.display, deferred
        );
    }

    if write {
        if let Some(path) = loaded.source_path.as_ref() {
            if let Err(e) = fs::write(path, &fixed) {
                return FormatResult::failed(
                    loaded.display.clone(),
                    format!("could not write {}: {}", path.display(), e),
                );
            }
            info!("formatted {}", loaded.display);
            return FormatResult {
                file: loaded.display.clone(),
                changed: true,
                wrote: true,
                preview: None,
                original: None,
                error: None,
            };
        }
    }
    FormatResult {
        file: loaded.display.clone(),
        changed: true,
        wrote: false,
        preview: Some(fixed),
        original: Some(loaded.source.clone()),
        error: None,
    }
}

/// Keep the outermost fixes that do not overlap, in source order. Returns the
/// kept fixes and how many were dropped.
fn outermost(mut fixes: Vec<Fix>) -> (Vec<Fix>, usize) {
    fixes.sort_by(|a, b| a.range[0].cmp(&b.range[0]).then(b.range[1].cmp(&a.range[1])));
    let total = fixes.len();
    let mut kept: Vec<Fix> = Vec::with_capacity(total);
    for fix in fixes {
        match kept.last() {
            Some(prev) if fix.range[0] < prev.range[1] => {}
            _ => kept.push(fix),
        }
    }
    let dropped = total - kept.len();
    (kept, dropped)
}
