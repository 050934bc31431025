//! Member classification by initializer shape.

use crate::models::category::Category;
use crate::models::member::{Initializer, Member};

/// Map one member to its category. Total: unmatched shapes are `Other`.
///
/// - `input(...)`, `output(...)`, `inject(...)` map to their category.
/// - `input.required(...)` maps to `InputRequired`.
pub fn classify(member: &Member) -> Category {
    match &member.init {
        Initializer::BareCall { name } => match name.as_str() {
            "input" => Category::Input,
            "output" => Category::Output,
            "inject" => Category::Inject,
            _ => Category::Other,
        },
        Initializer::MemberCall {
            object: Some(object),
            property: Some(property),
        } if object == "input" && property == "required" => Category::InputRequired,
        Initializer::MemberCall { .. } | Initializer::None | Initializer::Other => Category::Other,
    }
}
