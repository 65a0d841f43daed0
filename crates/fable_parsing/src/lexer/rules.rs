//! The ordered rule table driving the lexer

use fable_tokens::token::TokenKind;
use regex::{Regex, RegexBuilder};
use std::borrow::Cow;
use thiserror::Error;

/// The standard fable grammar, in priority order
const STANDARD_RULES: [(TokenKind, &str); 23] = [
    (TokenKind::While, r"> enter .*? while [^\n]*"),
    (TokenKind::If, r"> inspect whether [^\n]*"),
    (TokenKind::Leave, r"> leave\b[^\n]*"),
    (TokenKind::Assign, r"the (?-u:[a-z_][a-z0-9_]*) transforms into .*?\."),
    (TokenKind::Print, r"you speak of .*?\."),
    (
        TokenKind::Input,
        r"you seek wisdom from beyond and call it (?-u:[a-z_][a-z0-9_]*)\.",
    ),
    (TokenKind::And, r"and\b"),
    (TokenKind::Or, r"or perhaps\b|or\b"),
    (TokenKind::Not, r"is not\b"),
    (TokenKind::Eq, r"is much like\b"),
    (TokenKind::Neq, r"differs from\b"),
    (TokenKind::Lt, r"stands before\b"),
    (TokenKind::Gt, r"towers above\b"),
    (TokenKind::Le, r"stands no further than\b"),
    (TokenKind::Ge, r"stands not below\b"),
    (TokenKind::Plus, r"reflect on all you have learned:"),
    (TokenKind::Minus, r"recall the distance between\b"),
    (TokenKind::Mul, r"envision [^.\n]*? by [^.\n]+"),
    (TokenKind::Div, r"divide [^.\n]*? among [^.\n]+"),
    (
        TokenKind::Mod,
        r"keep what remains of [^.\n]*? after sharing with [^.\n]+",
    ),
    (TokenKind::Nl, r"\r\n?|\n"),
    (TokenKind::Skip, r"[\s&&[^\r\n]]+"),
    (TokenKind::Stmt, r"[^.]*\.|[^.\r\n]+"),
];

/// A single lexer rule, classifying text matching its pattern as its kind.
///
/// Patterns are matched case-insensitively and anchored at the current scan position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    kind: TokenKind,
    pattern: Cow<'static, str>,
}

impl Rule {
    /// Creates a new rule
    pub fn new(kind: TokenKind, pattern: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            pattern: pattern.into(),
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

/// An immutable, ordered set of rules compiled into a single alternation.
///
/// When more than one rule matches at a position, the rule that comes first wins regardless
/// of match length.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<Rule>,
    groups: Vec<String>,
    regex: Regex,
}

impl RuleSet {
    /// Compiles a new rule set
    pub fn new(rules: impl IntoIterator<Item = Rule>) -> Result<Self, RuleError> {
        let rules = rules.into_iter().collect::<Vec<_>>();
        for rule in &rules {
            Regex::new(rule.pattern()).map_err(|source| RuleError::InvalidPattern {
                kind: rule.kind,
                source,
            })?;
        }
        let groups = (0..rules.len())
            .map(|index| format!("rule{index}"))
            .collect::<Vec<_>>();
        let alternation = rules
            .iter()
            .zip(&groups)
            .map(|(rule, group)| format!("(?P<{group}>{})", rule.pattern))
            .collect::<Vec<_>>()
            .join("|");
        let regex = RegexBuilder::new(&format!("^(?:{alternation})"))
            .case_insensitive(true)
            .build()?;
        Ok(Self {
            rules,
            groups,
            regex,
        })
    }

    /// The rules of the standard fable grammar
    pub fn standard() -> Self {
        Self::new(
            STANDARD_RULES
                .iter()
                .map(|&(kind, pattern)| Rule::new(kind, pattern)),
        )
        .expect("standard rules should always compile")
    }

    /// The rules of this set, in priority order
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Finds the first rule matching at the start of `text`, returning its kind and the length
    /// of the match in bytes.
    pub fn match_start(&self, text: &str) -> Option<(TokenKind, usize)> {
        let captures = self.regex.captures(text)?;
        self.rules
            .iter()
            .zip(&self.groups)
            .find_map(|(rule, group)| captures.name(group).map(|m| (rule.kind, m.len())))
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}

/// An error creating a [RuleSet]
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("invalid pattern for {kind} rule: {source}")]
    InvalidPattern {
        kind: TokenKind,
        #[source]
        source: regex::Error,
    },
    #[error(transparent)]
    Regex(#[from] regex::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_standard_rules_follow_kind_order() {
        let rules = RuleSet::standard();
        let kinds = rules.rules().iter().map(Rule::kind).collect::<Vec<_>>();
        assert_eq!(kinds, TokenKind::iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_first_rule_wins_over_longer_match() {
        // STMT would match the whole sentence, AND only the first word
        let rules = RuleSet::standard();
        assert_eq!(
            rules.match_start("and so it was."),
            Some((TokenKind::And, 3))
        );
    }

    #[test]
    fn test_match_is_case_insensitive() {
        let rules = RuleSet::standard();
        assert_eq!(
            rules.match_start("YOU SPEAK OF ALL."),
            Some((TokenKind::Print, 17))
        );
    }

    #[test]
    fn test_or_perhaps_preferred() {
        let rules = RuleSet::standard();
        assert_eq!(rules.match_start("or perhaps x"), Some((TokenKind::Or, 10)));
        assert_eq!(rules.match_start("or x"), Some((TokenKind::Or, 2)));
        assert_eq!(
            rules.match_start("orchards bloom."),
            Some((TokenKind::Stmt, 15))
        );
    }

    #[test]
    fn test_line_headers_stop_at_line_end() {
        let rules = RuleSet::standard();
        let text = "> enter loop while x stands before y\nYou speak of x.";
        assert_eq!(rules.match_start(text), Some((TokenKind::While, 36)));
    }

    #[test]
    fn test_identifiers_are_ascii() {
        let rules = RuleSet::standard();
        assert_eq!(
            rules.match_start("The X transforms into 1."),
            Some((TokenKind::Assign, 24))
        );
        // KELVIN SIGN folds to `k` under unicode case folding
        assert_eq!(
            rules.match_start("The \u{212A} transforms into 1."),
            Some((TokenKind::Stmt, 26))
        );
        assert_eq!(
            rules
                .match_start("You seek wisdom from beyond and call it \u{17F}.")
                .map(|(kind, _)| kind),
            Some(TokenKind::Stmt)
        );
    }

    #[test]
    fn test_every_line_break_is_a_newline() {
        let rules = RuleSet::standard();
        assert_eq!(rules.match_start("\r\nx"), Some((TokenKind::Nl, 2)));
        assert_eq!(rules.match_start("\rx"), Some((TokenKind::Nl, 1)));
        assert_eq!(rules.match_start("\nx"), Some((TokenKind::Nl, 1)));
        assert_eq!(
            rules.match_start("\u{A0}\x0C\t x"),
            Some((TokenKind::Skip, 5))
        );
    }

    #[test]
    fn test_fallback_crosses_lines_to_terminator() {
        let rules = RuleSet::standard();
        assert_eq!(
            rules.match_start("Once upon a time,\nin a kingdom by the sea. More"),
            Some((TokenKind::Stmt, 42))
        );
    }

    #[test]
    fn test_fallback_without_terminator() {
        let rules = RuleSet::standard();
        assert_eq!(
            rules.match_start("the end\nmore"),
            Some((TokenKind::Stmt, 7))
        );
    }

    #[test]
    fn test_invalid_pattern() {
        let result = RuleSet::new([
            Rule::new(TokenKind::Skip, r"[ \t]+"),
            Rule::new(TokenKind::Stmt, r"(unclosed"),
        ]);
        assert!(matches!(
            result,
            Err(RuleError::InvalidPattern {
                kind: TokenKind::Stmt,
                ..
            })
        ));
    }

    #[test]
    fn test_custom_rules_coexist() {
        let dialect = RuleSet::new([
            Rule::new(TokenKind::Print, r"thou sayest .*?\."),
            Rule::new(TokenKind::Skip, r"[ \t]+"),
            Rule::new(TokenKind::Stmt, r"[^.\n]*\."),
        ])
        .unwrap();
        let standard = RuleSet::standard();
        let text = "Thou sayest all.";
        assert_eq!(dialect.match_start(text), Some((TokenKind::Print, 16)));
        assert_eq!(standard.match_start(text), Some((TokenKind::Stmt, 16)));
    }
}
