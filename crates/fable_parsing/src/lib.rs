#![doc = include_str!("../README.md")]

use fable_ast::Node;

pub mod lexer;
pub mod parser;
pub mod transforms;

pub use lexer::{tokenize, tokenize_with, Lexer, Rule, RuleError, RuleSet};
pub use parser::{expr_from_text, parse, substitute_literals, Parser};
pub use transforms::nesting::{nest_blocks, NestingError};

/// Tokenizes and parses a source using the standard rules.
///
/// Never fails, unrecognized text ends up as narrative statements or is skipped.
pub fn parse_source(source: &str) -> Node {
    parse(&tokenize(source))
}
