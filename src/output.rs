//! Output rendering for lint and format commands.
//!
//! Supports `human` (default) and `json` outputs. The JSON form includes
//! per-item fields and a top-level summary.

use crate::format::FormatResult;
use crate::models::LintResult;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

/// Prefix for fatal messages on stderr.
pub fn error_prefix() -> String {
    if use_colors("human") {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

/// Prefix for informational notes on stderr.
pub fn note_prefix() -> String {
    if use_colors("human") {
        "note:".cyan().bold().to_string()
    } else {
        "note:".to_string()
    }
}

/// Print lint results in the requested format.
pub fn print_lint(res: &LintResult, output: &str) -> serde_json::Result<()> {
    if output == "json" {
        println!("{}", serde_json::to_string_pretty(&compose_lint_json(res)?)?);
        return Ok(());
    }
    let color = use_colors(output);
    for is in &res.issues {
        let (label, icon) = match is.severity.as_str() {
            "error" => ("⟦error⟧", "✖"),
            "warn" => ("⟦warn⟧", "▲"),
            _ => ("⟦info⟧", "◆"),
        };
        let (sev, icon) = if !color {
            (label.to_string(), icon.to_string())
        } else {
            match is.severity.as_str() {
                "error" => (label.red().bold().to_string(), icon.red().to_string()),
                "warn" => (label.yellow().bold().to_string(), icon.yellow().to_string()),
                _ => (label.blue().bold().to_string(), icon.blue().to_string()),
            }
        };
        let location = match is.range {
            Some([start, end]) => format!("{}:{}-{}", is.file, start, end),
            None => is.file.clone(),
        };
        let location = if color {
            location.bold().to_string()
        } else {
            location
        };
        let fixable = if is.fix.is_some() { " (fixable)" } else { "" };
        println!(
            "{} {} {} ❲{}❳ — {}{}",
            icon, sev, location, is.rule, is.message, fixable
        );
    }
    let summary = format!(
        "— Summary — errors={} warnings={} infos={} files={}",
        res.summary.errors, res.summary.warnings, res.summary.infos, res.summary.files
    );
    if color {
        println!("{}", summary.bold());
    } else {
        println!("{}", summary);
    }
    Ok(())
}

/// Print formatting results. Written files are listed; otherwise previews or
/// diffs are emitted for changed sources.
pub fn print_format(results: &[FormatResult], output: &str, diff: bool) -> serde_json::Result<()> {
    if output == "json" {
        let out = compose_format_json(results, diff);
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }
    let color = use_colors(output);
    for r in results {
        if let Some(err) = &r.error {
            eprintln!("{} {}: {}", error_prefix(), r.file, err);
        } else if r.wrote {
            if color {
                println!("{} {}", "✏️  formatted:".green().bold(), r.file.bold());
            } else {
                println!("✏️  formatted: {}", r.file);
            }
        } else if r.changed {
            let body = if diff {
                build_naive_diff(r.original.as_deref(), r.preview.as_deref())
            } else {
                r.preview.clone()
            };
            if let Some(body) = body {
                if color {
                    println!("{} {}\n{}", "---".cyan().bold(), r.file.bold(), body);
                } else {
                    println!("--- {}\n{}", r.file, body);
                }
            }
        } else if color {
            println!("{} {}", "no changes:".bright_black(), r.file);
        } else {
            println!("no changes: {}", r.file);
        }
    }
    Ok(())
}

fn build_naive_diff(old: Option<&str>, new: Option<&str>) -> Option<String> {
    let old = old?;
    let new = new?;
    let mut out = String::new();
    out.push_str("+++ new\n");
    out.push_str(new);
    out.push('\n');
    out.push_str("--- old\n");
    out.push_str(old);
    Some(out)
}

/// Compose lint JSON object (pure) for testing/snapshot purposes.
pub fn compose_lint_json(res: &LintResult) -> serde_json::Result<JsonVal> {
    serde_json::to_value(res)
}

/// Compose format JSON object (pure) for testing/snapshot purposes.
pub fn compose_format_json(results: &[FormatResult], diff: bool) -> JsonVal {
    let items: Vec<_> = results
        .iter()
        .map(|r| {
            json!({
                "file": r.file,
                "changed": r.changed,
                "wrote": r.wrote,
                "preview": r.preview,
                "diff": if diff { build_naive_diff(r.original.as_deref(), r.preview.as_deref()) } else { None },
                "error": r.error,
            })
        })
        .collect();
    let summary = json!({
        "changed": results.iter().filter(|r| r.changed).count(),
        "total": results.len(),
        "wrote": results.iter().filter(|r| r.wrote).count(),
        "errors": results.iter().filter(|r| r.error.is_some()).count(),
    });
    json!({"results": items, "summary": summary})
}
