//! Lint runner over member documents.
//!
//! Produces a `LintResult` with one issue per out-of-order member and a
//! summary. Documents that cannot be loaded are reported as issues too, so a
//! broken document never hides the results of the others.

use crate::config::Effective;
use crate::error::ConfigError;
use crate::models::document::MemberDocument;
use crate::models::{Issue, LintResult, Summary};
use crate::rule::{check_body, RULE_ID};
use glob::glob;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A parsed document together with the source text its spans point into.
pub struct LoadedDocument {
    pub document: MemberDocument,
    pub source: String,
    /// On-disk source file; `None` for inline `text`.
    pub source_path: Option<PathBuf>,
    /// Path shown in reports.
    pub display: String,
}

/// Run lint across the documents selected by `eff`.
pub fn run_lint(eff: &Effective) -> Result<LintResult, ConfigError> {
    let (targets, unreadable) = collect_documents(eff)?;
    debug!("linting {} member documents", targets.len());

    let per_file: Vec<(Vec<Issue>, usize)> = targets
        .par_iter()
        .map(|path| match load_document(&eff.repo_root, path) {
            Ok(loaded) => (lint_document(&loaded, eff), 1),
            Err(issue) => (vec![issue], 0),
        })
        .collect();

    let files = per_file.iter().map(|(_, c)| *c).sum::<usize>();
    let mut issues: Vec<Issue> = per_file.into_iter().flat_map(|(v, _)| v).collect();
    issues.extend(unreadable);
    // Deterministic ordering of issues by file then offset
    issues.sort_by(|a, b| a.file.cmp(&b.file).then(a.range.cmp(&b.range)));

    let mut summary = Summary {
        files,
        ..Summary::default()
    };
    for is in &issues {
        match is.severity.as_str() {
            "error" => summary.errors += 1,
            "warn" => summary.warnings += 1,
            _ => summary.infos += 1,
        }
    }
    Ok(LintResult { issues, summary })
}

/// Check every body of one loaded document.
pub fn lint_document(loaded: &LoadedDocument, eff: &Effective) -> Vec<Issue> {
    let mut issues = Vec::new();
    for body in &loaded.document.bodies {
        let report = check_body(&body.members, &loaded.source, &eff.table, eff.logging);
        for d in report.diagnostics {
            issues.push(Issue {
                file: loaded.display.clone(),
                rule: RULE_ID.to_string(),
                severity: eff.level.clone(),
                body: body.name.clone(),
                range: Some([d.span.start, d.span.end]),
                message: d.message,
                fix: d.fix,
            });
        }
    }
    issues
}

/// Expand explicit paths or configured glob patterns into document paths.
///
/// Directories the pattern walk cannot read are returned as `load-document`
/// issues next to the paths that were found.
pub fn collect_documents(eff: &Effective) -> Result<(Vec<PathBuf>, Vec<Issue>), ConfigError> {
    if !eff.paths.is_empty() {
        return Ok((eff.paths.clone(), Vec::new()));
    }
    let mut targets = Vec::new();
    let mut unreadable = Vec::new();
    for pat in &eff.patterns {
        let pattern = eff.repo_root.join(pat).to_string_lossy().to_string();
        let entries = glob(&pattern).map_err(|e| ConfigError::InvalidValue {
            key: "patterns",
            value: format!("{} ({})", pat, e.msg),
            expected: "glob patterns",
        })?;
        for entry in entries {
            match entry {
                Ok(path) => targets.push(path),
                Err(e) => unreadable.push(Issue::document_error(
                    display_path(&eff.repo_root, e.path()),
                    "load-document",
                    format!("Directory could not be read: {}", e.error()),
                )),
            }
        }
    }
    targets.sort();
    targets.dedup();
    unreadable.sort_by(|a, b| a.file.cmp(&b.file));
    unreadable.dedup_by(|a, b| a.file == b.file);
    Ok((targets, unreadable))
}

/// Read a member document and the source text it describes.
pub fn load_document(root: &Path, path: &Path) -> Result<LoadedDocument, Issue> {
    let doc_display = display_path(root, path);
    let raw = fs::read_to_string(path).map_err(|e| {
        Issue::document_error(
            doc_display.clone(),
            "load-document",
            format!("Member document could not be read: {}", e),
        )
    })?;
    let document: MemberDocument = serde_json::from_str(&raw).map_err(|e| {
        Issue::document_error(
            doc_display.clone(),
            "parse-document",
            format!("Member document is not valid JSON: {}", e),
        )
    })?;

    if let Some(text) = document.text.clone() {
        return Ok(LoadedDocument {
            document,
            source: text,
            source_path: None,
            display: doc_display,
        });
    }
    let Some(rel) = document.source.as_deref() else {
        return Err(Issue::document_error(
            doc_display,
            "load-source",
            "Member document names neither `source` nor `text`".into(),
        ));
    };
    let source_path = path.parent().unwrap_or(Path::new("")).join(rel);
    let source = fs::read_to_string(&source_path).map_err(|e| {
        Issue::document_error(
            doc_display.clone(),
            "load-source",
            format!("Source file {} could not be read: {}", source_path.display(), e),
        )
    })?;
    Ok(LoadedDocument {
        display: display_path(root, &source_path),
        document,
        source,
        source_path: Some(source_path),
    })
}

fn display_path(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .to_string()
}
