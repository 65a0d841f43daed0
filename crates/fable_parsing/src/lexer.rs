//! Responsible with converting source text into a token stream

use fable_tokens::spanned::Span;
use fable_tokens::token::{Token, TokenKind};
use tracing::{debug, trace};

mod rules;

pub use rules::{Rule, RuleError, RuleSet};

/// Scans a source from left to right, yielding a token for every match of the rule set,
/// including whitespace and newlines.
///
/// The spans of the yielded tokens are contiguous and cover the whole source. If no rule
/// matches at a position, a single character is yielded as a [TokenKind::Stmt] so scanning
/// always makes progress.
///
/// # Examples
/// ```
/// # use fable_parsing::lexer::{Lexer, RuleSet};
/// # use fable_tokens::token::TokenKind;
/// let rules = RuleSet::standard();
/// let kinds = Lexer::new(&rules, "Once upon a time.\n")
///     .map(|token| token.kind())
///     .collect::<Vec<_>>();
/// assert_eq!(kinds, [TokenKind::Stmt, TokenKind::Nl]);
/// ```
#[derive(Debug)]
pub struct Lexer<'r, 's> {
    rules: &'r RuleSet,
    source: &'s str,
    offset: usize,
}

impl<'r, 's> Lexer<'r, 's> {
    /// Creates a new lexer
    pub fn new(rules: &'r RuleSet, source: &'s str) -> Self {
        Self {
            rules,
            source,
            offset: 0,
        }
    }

    fn next_token(&mut self) -> Option<Token> {
        let rest = &self.source[self.offset..];
        if rest.is_empty() {
            return None;
        }
        let (kind, len) = match self.rules.match_start(rest) {
            Some((kind, len)) if len > 0 => (kind, len),
            _ => {
                let len = rest.chars().next().map_or(1, char::len_utf8);
                debug!("no rule matched at offset {}, consuming {len} byte(s)", self.offset);
                (TokenKind::Stmt, len)
            }
        };
        let token = Token::new(Span::new(self.offset, len), kind, &rest[..len]);
        self.offset += len;
        trace!("scanned {token:?}");
        Some(token)
    }
}

impl Iterator for Lexer<'_, '_> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Tokenizes a source with the given rules, dropping whitespace and newlines
pub fn tokenize_with(rules: &RuleSet, source: &str) -> Vec<Token> {
    let tokens = Lexer::new(rules, source)
        .filter(|token| !token.kind().is_trivia())
        .collect::<Vec<_>>();
    debug!("tokenized {} bytes into {} tokens", source.len(), tokens.len());
    tokens
}

/// Tokenizes a source with the standard rules, dropping whitespace and newlines
pub fn tokenize(source: &str) -> Vec<Token> {
    tokenize_with(&RuleSet::standard(), source)
}
