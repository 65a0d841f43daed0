//! A lexical token from a fable source, along with the closed set of token kinds

use crate::spanned::{Span, Spanned};
use std::fmt::{Debug, Formatter};
use strum::{EnumIter, IntoStaticStr};

/// A lexical token from a source
#[derive(Clone)]
pub struct Token {
    span: Span,
    kind: TokenKind,
    text: String,
}

impl Token {
    /// Creates a new token. The text is trimmed of surrounding whitespace.
    pub fn new(span: Span, kind: TokenKind, text: impl AsRef<str>) -> Self {
        Self {
            span,
            kind,
            text: text.as_ref().trim().to_string(),
        }
    }

    /// Gets the kind for this token
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Gets the matched text of this token, without surrounding whitespace
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({:?})", self.kind, self.text)
    }
}

impl Spanned for Token {
    fn span(&self) -> Span {
        self.span
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.text == other.text
    }
}

impl Eq for Token {}

/// The kind for a token.
///
/// Variants are declared in the priority order the standard rule table tries them.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    /// `> enter ... while ...`
    While,
    /// `> inspect whether ...`
    If,
    /// `> leave ...`
    Leave,
    /// `The x transforms into ... .`
    Assign,
    /// `You speak of ... .`
    Print,
    /// `You seek wisdom from beyond and call it x.`
    Input,
    And,
    Or,
    Not,
    Eq,
    Neq,
    Lt,
    Gt,
    Le,
    Ge,
    Plus,
    Minus,
    Mul,
    Div,
    Mod,
    /// new line
    #[strum(serialize = "NEWLINE")]
    Nl,
    /// spaces and tabs
    Skip,
    /// any other sentence
    Stmt,
}

impl TokenKind {
    /// Whether tokens of this kind are dropped by the tokenizer
    pub fn is_trivia(&self) -> bool {
        matches!(self, TokenKind::Nl | TokenKind::Skip)
    }
}
