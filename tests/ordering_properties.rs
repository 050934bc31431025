//! Property-based tests for the member ordering rule.
//!
//! These tests verify that:
//! - Every permutation of the categories builds a bijective rank table
//! - Violations are always strictly below the running maximum rank
//! - Applying the synthesized fix leaves a body with no violations
//! - Members of equal category keep their relative order after a fix

use member_order::check::check;
use member_order::classify::classify;
use member_order::fix::apply_fixes;
use member_order::models::category::Category;
use member_order::models::member::{Initializer, Member, NodeKind, Span};
use member_order::order::OrderTable;
use member_order::rule::check_body;
use proptest::prelude::*;
use std::collections::BTreeSet;

/// Node shapes a host can hand over, paired with the source text they stand for.
#[derive(Debug, Clone, Copy)]
enum Shape {
    Inject,
    Input,
    InputRequired,
    Output,
    OtherCall,
    Method,
    StaticBlock,
}

impl Shape {
    fn text(self, i: usize) -> String {
        match self {
            Shape::Inject => format!("m{} = inject(Service);", i),
            Shape::Input => format!("m{} = input();", i),
            Shape::InputRequired => format!("m{} = input.required();", i),
            Shape::Output => format!("m{} = output();", i),
            Shape::OtherCall => format!("m{} = signal(0);", i),
            Shape::Method => format!("m{}() {{}}", i),
            Shape::StaticBlock => format!("static {{ init{}(); }}", i),
        }
    }

    fn member(self, span: Span) -> Member {
        let call = |name: &str| Initializer::BareCall { name: name.into() };
        match self {
            Shape::Inject => Member::new(NodeKind::Field, span, call("inject")),
            Shape::Input => Member::new(NodeKind::Field, span, call("input")),
            Shape::InputRequired => Member::member_call("input", "required", span),
            Shape::Output => Member::new(NodeKind::Field, span, call("output")),
            Shape::OtherCall => Member::new(NodeKind::Field, span, call("signal")),
            Shape::Method => Member::new(NodeKind::Method, span, Initializer::None),
            Shape::StaticBlock => Member::new(NodeKind::StaticBlock, span, Initializer::None),
        }
    }
}

fn arb_shape() -> impl Strategy<Value = Shape> {
    prop_oneof![
        Just(Shape::Inject),
        Just(Shape::Input),
        Just(Shape::InputRequired),
        Just(Shape::Output),
        Just(Shape::OtherCall),
        Just(Shape::Method),
        Just(Shape::StaticBlock),
    ]
}

fn arb_order() -> impl Strategy<Value = Vec<Category>> {
    Just(Category::ALL.to_vec()).prop_shuffle()
}

/// Render a class body and the members pointing into it.
fn render(shapes: &[Shape]) -> (String, Vec<Member>) {
    let mut src = String::from("export class Widget {\n");
    let mut members = Vec::new();
    for (i, shape) in shapes.iter().enumerate() {
        src.push_str("  ");
        let start = src.len();
        src.push_str(&shape.text(i));
        members.push(shape.member(Span::new(start, src.len())));
        src.push('\n');
    }
    src.push_str("}\n");
    (src, members)
}

/// Locate every member's text in rewritten source, in new source order.
fn relocate(fixed: &str, shapes: &[Shape]) -> Vec<(usize, Member)> {
    let mut found: Vec<(usize, Member)> = shapes
        .iter()
        .enumerate()
        .map(|(i, shape)| {
            let text = shape.text(i);
            let start = fixed.find(&text).expect("member text survives the fix");
            (i, shape.member(Span::new(start, start + text.len())))
        })
        .collect();
    found.sort_by_key(|(_, m)| m.span.start);
    found
}

proptest! {
    #[test]
    fn table_is_bijection(order in arb_order()) {
        let table = OrderTable::build(&order).unwrap();
        let ranks: BTreeSet<usize> = Category::ALL.iter().map(|c| table.rank(*c)).collect();
        prop_assert_eq!(ranks, (0..5).collect::<BTreeSet<_>>());
        for (rank, category) in order.iter().enumerate() {
            prop_assert_eq!(table.rank(*category), rank);
            prop_assert_eq!(table.category_at(rank), Some(*category));
        }
    }

    #[test]
    fn violations_are_below_running_max(
        shapes in prop::collection::vec(arb_shape(), 0..12),
        order in arb_order(),
    ) {
        let table = OrderTable::build(&order).unwrap();
        let (_, members) = render(&shapes);
        for v in check(&members, &table) {
            let max = members[..v.index]
                .iter()
                .filter(|m| m.is_classifiable())
                .map(|m| table.rank(classify(m)))
                .max()
                .unwrap();
            prop_assert!(table.rank(v.category) < max);
            prop_assert_eq!(table.rank(v.previous), max);
        }
    }

    #[test]
    fn fixed_body_has_no_violations(
        shapes in prop::collection::vec(arb_shape(), 0..12),
        order in arb_order(),
    ) {
        let table = OrderTable::build(&order).unwrap();
        let (src, members) = render(&shapes);
        let report = check_body(&members, &src, &table, false);
        prop_assert_eq!(report.fix.is_some(), !report.diagnostics.is_empty());
        let Some(fix) = report.fix else {
            return Ok(());
        };
        let fixed = apply_fixes(&src, &[fix]).unwrap();
        let relocated: Vec<Member> = relocate(&fixed, &shapes).into_iter().map(|(_, m)| m).collect();
        prop_assert_eq!(check(&relocated, &table).count(), 0);
        prop_assert!(check_body(&relocated, &fixed, &table, false).fix.is_none());
    }

    #[test]
    fn fix_is_stable_within_category(
        shapes in prop::collection::vec(arb_shape(), 2..12),
        order in arb_order(),
    ) {
        let table = OrderTable::build(&order).unwrap();
        let (src, members) = render(&shapes);
        let Some(fix) = check_body(&members, &src, &table, false).fix else {
            return Ok(());
        };
        let fixed = apply_fixes(&src, &[fix]).unwrap();
        let relocated = relocate(&fixed, &shapes);
        for pair in relocated.windows(2) {
            let (a, ma) = &pair[0];
            let (b, mb) = &pair[1];
            let rank = |m: &Member| if m.is_classifiable() { table.rank(classify(m)) } else { table.rank(Category::Other) };
            prop_assert!(rank(ma) <= rank(mb));
            if rank(ma) == rank(mb) {
                prop_assert!(a < b);
            }
        }
    }
}
