//! Member document schema: one source file and the class bodies found in it.

use super::member::Member;
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
/// Top-level document written by the analysis host.
pub struct MemberDocument {
    /// Source path, relative to the document's directory.
    #[serde(default)]
    pub source: Option<String>,
    /// Inline source text; takes precedence over `source`.
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub bodies: Vec<ClassBody>,
}

#[derive(Debug, Default, Deserialize)]
/// The members of one class-like construct, in source order.
pub struct ClassBody {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub members: Vec<Member>,
}
