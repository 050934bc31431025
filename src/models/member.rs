//! Member declarations as delivered by the structural-analysis host.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "[usize; 2]", into = "[usize; 2]")]
/// Half-open byte range `[start, end)` into the source text.
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }
}

impl From<[usize; 2]> for Span {
    fn from([start, end]: [usize; 2]) -> Self {
        Span { start, end }
    }
}

impl From<Span> for [usize; 2] {
    fn from(span: Span) -> Self {
        [span.start, span.end]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// Node kind inside a class body. Only `Field` and `Method` are members.
pub enum NodeKind {
    Field,
    Method,
    StaticBlock,
    IndexSignature,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
/// Shape of a member initializer, reduced to what classification needs.
pub enum Initializer {
    #[default]
    None,
    /// `name(...)`
    BareCall { name: String },
    /// `object.property(...)`; either side is absent when it is not a plain identifier.
    MemberCall {
        #[serde(default)]
        object: Option<String>,
        #[serde(default)]
        property: Option<String>,
    },
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One node of a class body.
pub struct Member {
    pub kind: NodeKind,
    pub span: Span,
    #[serde(default)]
    pub init: Initializer,
}

impl Member {
    pub fn new(kind: NodeKind, span: Span, init: Initializer) -> Self {
        Member { kind, span, init }
    }

    /// Field initialized with `name(...)`.
    pub fn bare_call(name: &str, span: Span) -> Self {
        Member::new(
            NodeKind::Field,
            span,
            Initializer::BareCall {
                name: name.to_string(),
            },
        )
    }

    /// Field initialized with `object.property(...)`.
    pub fn member_call(object: &str, property: &str, span: Span) -> Self {
        Member::new(
            NodeKind::Field,
            span,
            Initializer::MemberCall {
                object: Some(object.to_string()),
                property: Some(property.to_string()),
            },
        )
    }

    /// True for field-like and method-like declarations.
    pub fn is_classifiable(&self) -> bool {
        matches!(self.kind, NodeKind::Field | NodeKind::Method)
    }

    /// Source text covered by this node, if the span is valid for `source`.
    pub fn text<'s>(&self, source: &'s str) -> Option<&'s str> {
        if self.span.start > self.span.end {
            return None;
        }
        source.get(self.span.start..self.span.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_host_shapes() {
        let raw = r#"[
            {"kind": "field", "span": [0, 10], "init": {"type": "bare_call", "name": "input"}},
            {"kind": "field", "span": [11, 20], "init": {"type": "member_call", "object": "input", "property": "required"}},
            {"kind": "method", "span": [21, 30]},
            {"kind": "static_block", "span": [31, 40]},
            {"kind": "accessor", "span": [41, 50]}
        ]"#;
        let members: Vec<Member> = serde_json::from_str(raw).unwrap();
        assert_eq!(members[0], Member::bare_call("input", Span::new(0, 10)));
        assert_eq!(members[1], Member::member_call("input", "required", Span::new(11, 20)));
        assert_eq!(members[2].init, Initializer::None);
        assert!(members[2].is_classifiable());
        assert!(!members[3].is_classifiable());
        assert_eq!(members[4].kind, NodeKind::Other);
    }

    #[test]
    fn test_text_rejects_bad_spans() {
        let src = "abc";
        assert_eq!(Member::new(NodeKind::Field, Span::new(0, 2), Initializer::None).text(src), Some("ab"));
        assert_eq!(Member::new(NodeKind::Field, Span::new(2, 9), Initializer::None).text(src), None);
        assert_eq!(Member::new(NodeKind::Field, Span::new(2, 1), Initializer::None).text(src), None);
    }
}
