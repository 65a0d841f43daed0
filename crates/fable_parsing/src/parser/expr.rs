//! Expressions, decomposed directly from statement text

use crate::parser::text::{replace_ignore_case, split_once_ignore_case};
use fable_ast::{BinaryOp, Node};
use strum::IntoEnumIterator;

/// Narrative literals and the numerals they stand for
const LITERALS: [(&str, &str); 4] = [
    ("nothing", "0"),
    ("all", "1"),
    ("universe", "1"),
    ("everything", "1"),
];

/// Replaces the narrative literals with their numerals.
///
/// This is plain text substitution, so a literal inside a longer word is replaced too
/// (`wall` becomes `w1`).
pub fn substitute_literals(text: &str) -> String {
    LITERALS
        .iter()
        .fold(text.to_string(), |text, (word, numeral)| {
            replace_ignore_case(&text, word, numeral)
        })
}

/// Creates an expression node from raw text.
///
/// The connectives are checked in [BinaryOp] order and the text is split on the first
/// occurrence of the first connective found. Operands are leaves holding the raw text, so
/// chained connectives are not folded: `a and b and c` is `BinOp(Expr(a), Expr(b and c), +)`.
/// Text without a connective becomes a single [fable_ast::NodeKind::Expr] leaf.
pub fn expr_from_text(text: &str) -> Node {
    let text = substitute_literals(text);
    let split = BinaryOp::iter().find_map(|op| {
        split_once_ignore_case(&text, op.connective()).map(|(left, right)| (op, left, right))
    });
    match split {
        Some((op, left, right)) => {
            Node::bin_op(Node::expr(left.trim()), Node::expr(right.trim()), op)
        }
        None => Node::expr(text.trim()),
    }
}
