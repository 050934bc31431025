//! member-order core library.
//!
//! Checks that the members of class-like bodies appear in a configured
//! category order (`inject`, `input`, `input.required`, `output`, `other`)
//! and rewrites out-of-order bodies. Bodies are supplied by an external
//! structural-analysis host as member documents; this crate never parses
//! source text itself.
//!
//! High-level modules:
//! - `classify`: Member → category, by initializer shape.
//! - `order`: Configured order → rank table.
//! - `check`: Single-pass running-maximum order check.
//! - `fix`: Whole-block reordering fix and fix application.
//! - `rule`: Per-body diagnostics with the combined fix attached.
//! - `lint` / `format`: Document-level runners used by the binary.
//! - `config`, `cli`, `output`, `error`: Ambient plumbing.
//! - `models`: Host input shapes and lint output structs.
pub mod check;
pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod fix;
pub mod format;
pub mod lint;
pub mod models;
pub mod order;
pub mod output;
pub mod rule;
