//! Configuration discovery and effective settings resolution.
//!
//! Reads `member-order.toml|yaml|yml` from the repository root (or closest
//! ancestor) and merges it with CLI flags to produce an `Effective` config.
//! Defaults:
//! - `order`: `inject, input, input.required, output, other`
//! - `logging`: false
//! - `level`: `error`
//! - `output`: `human`
//! - `patterns`: `**/*.members.json`
//! - `format.write|diff|check`: false
//!
//! Overrides precedence: CLI > config file > defaults. The effective order is
//! validated here, before any document is read.

use crate::error::ConfigError;
use crate::order::{OrderTable, DEFAULT_ORDER};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_FILES: [&str; 3] = ["member-order.toml", "member-order.yaml", "member-order.yml"];
const DEFAULT_PATTERN: &str = "**/*.members.json";
const LEVELS: &str = "info, warn, error";
const OUTPUTS: &str = "human, json";

#[derive(Debug, Default, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
/// Formatting-related configuration section under `[format]`.
pub struct FormatCfg {
    pub write: Option<bool>,
    pub diff: Option<bool>,
    pub check: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Clone)]
#[serde(deny_unknown_fields)]
/// Root configuration loaded from `member-order.toml|yaml`.
pub struct MemberOrderConfig {
    pub order: Option<Vec<String>>,
    pub logging: Option<bool>,
    pub level: Option<String>,
    pub output: Option<String>,
    pub patterns: Option<Vec<String>>,
    pub format: Option<FormatCfg>,
}

#[derive(Debug, Default, Clone)]
/// Values given on the command line; `None` defers to the config file.
pub struct Overrides {
    pub repo_root: Option<String>,
    pub order: Option<Vec<String>>,
    pub logging: Option<bool>,
    pub level: Option<String>,
    pub output: Option<String>,
    /// Explicit document paths; replace `patterns` when non-empty.
    pub paths: Vec<String>,
    pub write: Option<bool>,
    pub diff: Option<bool>,
    pub check: Option<bool>,
}

#[derive(Debug, Clone)]
/// Fully-resolved configuration used by commands after applying precedence.
pub struct Effective {
    pub repo_root: PathBuf,
    pub config_found: bool,
    pub table: OrderTable,
    pub logging: bool,
    pub level: String,
    pub output: String,
    pub patterns: Vec<String>,
    pub paths: Vec<PathBuf>,
    pub write: bool,
    pub diff: bool,
    pub check: bool,
}

/// Walk upward from `start` to detect the repository root.
///
/// Stops when a config file or a `.git` directory is found.
pub fn detect_repo_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if CONFIG_FILES.iter().any(|f| cur.join(f).exists()) || cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load the config file at `root`, if any. A file that exists but does not
/// parse is an error rather than silently ignored.
pub fn load_config(root: &Path) -> Result<Option<MemberOrderConfig>, ConfigError> {
    for name in CONFIG_FILES {
        let path = root.join(name);
        if !path.exists() {
            continue;
        }
        debug!("found config file at {}", path.display());
        let parse_err = |message: String| ConfigError::Parse {
            path: path.to_string_lossy().to_string(),
            message,
        };
        let s = fs::read_to_string(&path).map_err(|e| parse_err(e.to_string()))?;
        let cfg: MemberOrderConfig = if name.ends_with(".toml") {
            toml::from_str(&s).map_err(|e| parse_err(e.to_string()))?
        } else {
            serde_yaml::from_str(&s).map_err(|e| parse_err(e.to_string()))?
        };
        return Ok(Some(cfg));
    }
    Ok(None)
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
pub fn resolve_effective(cli: &Overrides) -> Result<Effective, ConfigError> {
    let start = PathBuf::from(cli.repo_root.as_deref().unwrap_or("."));
    let repo_root = detect_repo_root(&start);
    let loaded = load_config(&repo_root)?;
    let config_found = loaded.is_some();
    let cfg = loaded.unwrap_or_default();

    let table = match cli.order.as_ref().or(cfg.order.as_ref()) {
        Some(tags) => OrderTable::from_tags(tags.as_slice())?,
        None => OrderTable::build(&DEFAULT_ORDER)?,
    };

    let logging = cli.logging.or(cfg.logging).unwrap_or(false);

    let level = cli
        .level
        .clone()
        .or(cfg.level)
        .unwrap_or_else(|| "error".to_string());
    let level = match level.as_str() {
        "info" | "warn" | "error" => level,
        "warning" => "warn".to_string(),
        _ => {
            return Err(ConfigError::InvalidValue {
                key: "level",
                value: level,
                expected: LEVELS,
            })
        }
    };

    let output = cli
        .output
        .clone()
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());
    if output != "human" && output != "json" {
        return Err(ConfigError::InvalidValue {
            key: "output",
            value: output,
            expected: OUTPUTS,
        });
    }

    let patterns = cfg
        .patterns
        .unwrap_or_else(|| vec![DEFAULT_PATTERN.to_string()]);
    let paths = cli.paths.iter().map(PathBuf::from).collect();

    let format = cfg.format.unwrap_or_default();
    let write = cli.write.or(format.write).unwrap_or(false);
    let diff = cli.diff.or(format.diff).unwrap_or(false);
    let check = cli.check.or(format.check).unwrap_or(false);

    Ok(Effective {
        repo_root,
        config_found,
        table,
        logging,
        level,
        output,
        patterns,
        paths,
        write,
        diff,
        check,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::category::Category;
    use std::io::Write;
    use tempfile::tempdir;

    fn overrides_at(root: &Path) -> Overrides {
        Overrides {
            repo_root: root.to_str().map(String::from),
            ..Overrides::default()
        }
    }

    #[test]
    fn test_detect_and_load_toml() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("member-order.toml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
order = ["input", "input.required", "output", "inject", "other"]
logging = true
output = "json"
[format]
write = true
    "#
        )
        .unwrap();

        // Resolve using explicit repo_root to avoid global CWD races
        let eff = resolve_effective(&overrides_at(root)).unwrap();
        assert!(eff.config_found);
        assert_eq!(eff.table.rank(Category::Inject), 3);
        assert!(eff.logging);
        assert_eq!(eff.output, "json");
        assert!(eff.write);
    }

    #[test]
    fn test_load_yaml_and_defaults() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("member-order.yaml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
patterns:
  - "generated/*.members.json"
format:
  diff: true
            "#
        )
        .unwrap();

        let eff = resolve_effective(&overrides_at(root)).unwrap();
        assert_eq!(eff.table, OrderTable::default());
        assert!(!eff.logging);
        assert_eq!(eff.level, "error");
        assert_eq!(eff.output, "human");
        assert_eq!(eff.patterns, vec!["generated/*.members.json".to_string()]);
        assert!(eff.diff);
    }

    #[test]
    fn test_no_config_uses_defaults() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join(".git")).unwrap();
        let eff = resolve_effective(&overrides_at(dir.path())).unwrap();
        assert!(!eff.config_found);
        assert_eq!(eff.patterns, vec![DEFAULT_PATTERN.to_string()]);
        assert_eq!(eff.table.order(), &DEFAULT_ORDER);
    }

    #[test]
    fn test_cli_takes_precedence() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(
            root.join("member-order.toml"),
            "logging = true\nlevel = \"info\"\n[format]\nwrite = true\n",
        )
        .unwrap();
        let cli = Overrides {
            order: Some(
                ["other", "output", "input.required", "input", "inject"]
                    .map(String::from)
                    .to_vec(),
            ),
            logging: Some(false),
            level: Some("warning".into()),
            write: Some(false),
            ..overrides_at(root)
        };
        let eff = resolve_effective(&cli).unwrap();
        assert_eq!(eff.table.rank(Category::Other), 0);
        assert!(!eff.logging);
        assert_eq!(eff.level, "warn");
        assert!(!eff.write);
    }

    #[test]
    fn test_invalid_order_is_fatal() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(
            root.join("member-order.toml"),
            "order = [\"inject\", \"input\", \"input\", \"output\", \"other\"]\n",
        )
        .unwrap();
        let err = resolve_effective(&overrides_at(root)).unwrap_err();
        assert_eq!(err, ConfigError::Duplicate(Category::Input));
    }

    #[test]
    fn test_unknown_key_and_bad_values_rejected() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("member-order.toml"), "ordering = []\n").unwrap();
        assert!(matches!(
            resolve_effective(&overrides_at(root)),
            Err(ConfigError::Parse { .. })
        ));

        fs::write(root.join("member-order.toml"), "output = \"xml\"\n").unwrap();
        assert!(matches!(
            resolve_effective(&overrides_at(root)),
            Err(ConfigError::InvalidValue { key: "output", .. })
        ));
    }
}
