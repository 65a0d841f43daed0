//! The parser, creating a flat syntax tree from a token stream

use crate::parser::text::{
    after_word, is_identifier, split_once_ignore_case, strip_prefix_ignore_case,
};
use fable_ast::Node;
use fable_tokens::token::{Token, TokenKind};
use tracing::{debug, trace};

mod expr;
mod text;

pub use expr::{expr_from_text, substitute_literals};

/// Creates the syntax tree from a token stream.
///
/// Statements are dispatched on the kind of their leading token, and their bodies are taken
/// apart textually. Loop and conditional headers do not own their bodies, a body is every
/// statement up to the matching [fable_ast::NodeKind::EndBlock]. See
/// [nest_blocks](crate::transforms::nesting::nest_blocks) for a tree where they do.
///
/// The parser never fails. A token that can not start a statement is skipped.
///
/// # Examples
/// ```
/// # use fable_parsing::{parser::Parser, tokenize};
/// let tokens = tokenize("You speak of all.");
/// let program = Parser::new(&tokens).parse_program();
/// assert_eq!(program.compact(), "Program(Print(Expr(1)))");
/// ```
#[derive(Debug)]
pub struct Parser<'t> {
    tokens: &'t [Token],
    cursor: usize,
}

impl<'t> Parser<'t> {
    /// Creates a new parser with its cursor at the first token
    pub fn new(tokens: &'t [Token]) -> Self {
        Self { tokens, cursor: 0 }
    }

    /// Peeks the token at the cursor
    pub fn current(&self) -> Option<&'t Token> {
        self.tokens.get(self.cursor)
    }

    /// Consumes the token at the cursor if there is one and, when a kind is given, it has that
    /// kind. Otherwise the cursor is left where it is.
    pub fn eat(&mut self, expected: impl Into<Option<TokenKind>>) -> Option<&'t Token> {
        let token = self.current()?;
        if expected.into().is_some_and(|expected| token.kind() != expected) {
            return None;
        }
        self.cursor += 1;
        trace!("consumed {token:?}");
        Some(token)
    }

    /// The number of tokens consumed so far
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Gets if every token has been consumed
    pub fn is_eof(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    /// Parses every statement, skipping tokens that can not start one
    pub fn parse_program(mut self) -> Node {
        let mut statements = vec![];
        while !self.is_eof() {
            let start = self.cursor;
            match self.parse_statement() {
                Some(statement) => statements.push(statement),
                None if self.cursor == start => {
                    debug!("skipping {:?}, it does not start a statement", self.current());
                    self.cursor += 1;
                }
                None => {
                    debug!("dropped {:?}, its text could not be decomposed", self.tokens[start]);
                }
            }
        }
        debug!(
            "parsed {} statements from {} tokens",
            statements.len(),
            self.tokens.len()
        );
        Node::program(statements)
    }

    /// Parses a single statement.
    ///
    /// Returns `None` without consuming anything if the current token can not start a
    /// statement, and `None` after consuming the token if its text could not be taken apart.
    pub fn parse_statement(&mut self) -> Option<Node> {
        let kind = self.current()?.kind();
        match kind {
            TokenKind::Input => self.eat(kind).and_then(input_statement),
            TokenKind::Assign => self.eat(kind).and_then(assign_statement),
            TokenKind::Print => self.eat(kind).and_then(print_statement),
            TokenKind::While => self.eat(kind).and_then(while_statement),
            TokenKind::If => self.eat(kind).and_then(if_statement),
            TokenKind::Leave => self.eat(kind).map(|_| Node::end_block()),
            TokenKind::Stmt => self.eat(kind).map(|token| Node::stmt(token.text())),
            _ => None,
        }
    }
}

/// Parses a token stream into a [fable_ast::NodeKind::Program]
pub fn parse(tokens: &[Token]) -> Node {
    Parser::new(tokens).parse_program()
}

/// `You seek wisdom from beyond and call it <name>.`
fn input_statement(token: &Token) -> Option<Node> {
    let name = token.text().split_whitespace().last()?.trim_end_matches('.');
    Some(Node::input(Node::var(name)))
}

/// `The <name> transforms into <expr>.`
fn assign_statement(token: &Token) -> Option<Node> {
    let rest = strip_prefix_ignore_case(token.text(), "the ")?;
    let (name, rhs) = split_once_ignore_case(rest, " transforms into ")?;
    let rhs = rhs.strip_suffix('.')?;
    if !is_identifier(name) {
        return None;
    }
    Some(Node::assign(Node::var(name), expr_from_text(rhs)))
}

/// `You speak of <expr>.`
fn print_statement(token: &Token) -> Option<Node> {
    let text = strip_prefix_ignore_case(token.text(), "you speak of ")?;
    let text = text.strip_suffix('.').unwrap_or(text);
    Some(Node::print(expr_from_text(text)))
}

/// `> enter <anything> while <condition>`
fn while_statement(token: &Token) -> Option<Node> {
    let rest = strip_prefix_ignore_case(token.text(), "> enter ")?;
    let condition = after_word(rest, "while")?;
    Some(Node::while_(expr_from_text(condition)))
}

/// `> inspect whether <condition>`
fn if_statement(token: &Token) -> Option<Node> {
    let condition = strip_prefix_ignore_case(token.text(), "> inspect whether")?;
    if !(condition.is_empty() || condition.starts_with(' ')) {
        return None;
    }
    Some(Node::if_(expr_from_text(condition)))
}
