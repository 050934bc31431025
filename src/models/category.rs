//! Member categories recognized by the ordering rule.
//!
//! The set is closed: users reorder the five tags but never add new ones.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
/// Semantic role a class member plays.
pub enum Category {
    #[serde(rename = "inject")]
    Inject,
    #[serde(rename = "input")]
    Input,
    #[serde(rename = "input.required")]
    InputRequired,
    #[serde(rename = "output")]
    Output,
    #[serde(rename = "other")]
    Other,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 5] = [
        Category::Inject,
        Category::Input,
        Category::InputRequired,
        Category::Output,
        Category::Other,
    ];

    /// Tag as written in configuration and messages.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Inject => "inject",
            Category::Input => "input",
            Category::InputRequired => "input.required",
            Category::Output => "output",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}
