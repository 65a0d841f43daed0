//! Syntax tree nodes

use itertools::Itertools;
use std::fmt::{Display, Formatter};
use strum::{AsRefStr, EnumIter};

/// The kind of a [Node]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display)]
pub enum NodeKind {
    /// The root, children are the top level statements in source order
    Program,
    Input,
    Assign,
    Var,
    Print,
    /// A loop header. The body is implied by the statements up to the matching [NodeKind::EndBlock]
    While,
    /// A conditional header. The body is implied by the statements up to the matching [NodeKind::EndBlock]
    If,
    EndBlock,
    /// A narrative sentence that matched no statement pattern
    Stmt,
    BinOp,
    Expr,
    /// An explicit statement body, only created when nesting blocks
    Block,
}

/// A binary operator recognized within expression text.
///
/// Declared in the order connectives are checked for.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, strum::Display, AsRefStr, EnumIter)]
pub enum BinaryOp {
    #[strum(serialize = "+")]
    Add,
    #[strum(serialize = "!=")]
    Ne,
    #[strum(serialize = "==")]
    Eq,
    #[strum(serialize = "<")]
    Lt,
    #[strum(serialize = ">")]
    Gt,
}

impl BinaryOp {
    /// The narrative phrase, surrounded by spaces, that denotes this operator
    pub fn connective(&self) -> &'static str {
        match self {
            BinaryOp::Add => " and ",
            BinaryOp::Ne => " differs from ",
            BinaryOp::Eq => " is much like ",
            BinaryOp::Lt => " stands before ",
            BinaryOp::Gt => " towers above ",
        }
    }
}

/// A node in the syntax tree.
///
/// Nodes are only created through the kind specific constructors, which guarantee the number
/// of children matches the kind. A node is never mutated after it has been constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    kind: NodeKind,
    children: Vec<Node>,
    value: Option<String>,
}

impl Node {
    fn new(kind: NodeKind, children: Vec<Node>, value: Option<String>) -> Self {
        Self {
            kind,
            children,
            value,
        }
    }

    fn leaf(kind: NodeKind, value: impl AsRef<str>) -> Self {
        Self::new(kind, vec![], Some(value.as_ref().to_string()))
    }

    /// The root of a syntax tree
    pub fn program(statements: impl IntoIterator<Item = Node>) -> Self {
        Self::new(NodeKind::Program, statements.into_iter().collect(), None)
    }

    /// Reads a value into the given [NodeKind::Var]
    pub fn input(var: Node) -> Self {
        debug_assert_eq!(var.kind, NodeKind::Var);
        Self::new(NodeKind::Input, vec![var], None)
    }

    pub fn assign(var: Node, expr: Node) -> Self {
        debug_assert_eq!(var.kind, NodeKind::Var);
        Self::new(NodeKind::Assign, vec![var, expr], None)
    }

    pub fn var(name: impl AsRef<str>) -> Self {
        Self::leaf(NodeKind::Var, name)
    }

    pub fn print(expr: Node) -> Self {
        Self::new(NodeKind::Print, vec![expr], None)
    }

    pub fn while_(condition: Node) -> Self {
        Self::new(NodeKind::While, vec![condition], None)
    }

    pub fn if_(condition: Node) -> Self {
        Self::new(NodeKind::If, vec![condition], None)
    }

    pub fn end_block() -> Self {
        Self::new(NodeKind::EndBlock, vec![], None)
    }

    /// A narrative no-op, retaining the sentence verbatim
    pub fn stmt(text: impl AsRef<str>) -> Self {
        Self::leaf(NodeKind::Stmt, text)
    }

    pub fn bin_op(left: Node, right: Node, op: BinaryOp) -> Self {
        Self::new(NodeKind::BinOp, vec![left, right], Some(op.to_string()))
    }

    /// A literal or identifier, holding the unparsed expression text
    pub fn expr(text: impl AsRef<str>) -> Self {
        Self::leaf(NodeKind::Expr, text)
    }

    pub fn block(statements: impl IntoIterator<Item = Node>) -> Self {
        Self::new(NodeKind::Block, statements.into_iter().collect(), None)
    }

    /// Creates a new header node from a [NodeKind::While] or [NodeKind::If] header, taking
    /// ownership of the given body.
    ///
    /// # Panics
    /// Panics if this node is not a loop or conditional header
    pub fn with_body(self, body: impl IntoIterator<Item = Node>) -> Self {
        assert!(
            matches!(self.kind, NodeKind::While | NodeKind::If),
            "only while and if headers can own a body, not {}",
            self.kind
        );
        let mut children = self.children;
        children.push(Node::block(body));
        Self::new(self.kind, children, self.value)
    }

    /// Gets the kind of this node
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Gets the scalar value of this node, if it has one.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Takes the children of this node
    pub fn into_children(self) -> Vec<Node> {
        self.children
    }

    /// Gets a single line rendering of this node and its children, such as
    /// `Assign(Var(x), BinOp(Expr(0), Expr(1), +))`
    pub fn compact(&self) -> String {
        if self.children.is_empty() && self.value.is_none() {
            return self.kind.to_string();
        }
        let parts = self
            .children
            .iter()
            .map(Node::compact)
            .chain(self.value.iter().cloned())
            .join(", ");
        format!("{}({})", self.kind, parts)
    }

    fn fmt_indented(&self, f: &mut Formatter<'_>, depth: usize) -> std::fmt::Result {
        write!(f, "{:width$}{}", "", self.kind, width = depth * 2)?;
        if let Some(value) = &self.value {
            write!(f, "({value})")?;
        }
        writeln!(f)?;
        for child in &self.children {
            child.fmt_indented(f, depth + 1)?;
        }
        Ok(())
    }
}

/// Renders the node as its kind, with the value in parentheses if present, followed by its
/// children indented below it.
impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.fmt_indented(f, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_compact() {
        let node = Node::program([Node::assign(
            Node::var("x"),
            Node::bin_op(Node::expr("0"), Node::expr("1"), BinaryOp::Add),
        )]);
        assert_eq!(
            node.compact(),
            "Program(Assign(Var(x), BinOp(Expr(0), Expr(1), +)))"
        );
        assert_eq!(Node::program([]).compact(), "Program");
        assert_eq!(Node::end_block().compact(), "EndBlock");
    }

    #[test]
    fn test_pretty_print() {
        let node = Node::program([
            Node::print(Node::expr("1")),
            Node::while_(Node::bin_op(Node::expr("x"), Node::expr("y"), BinaryOp::Lt)),
            Node::end_block(),
        ]);
        let expected = "\
Program
  Print
    Expr(1)
  While
    BinOp(<)
      Expr(x)
      Expr(y)
  EndBlock
";
        assert_eq!(node.to_string(), expected);
    }

    #[test]
    fn test_arity() {
        assert_eq!(Node::input(Node::var("x")).children().len(), 1);
        assert_eq!(
            Node::assign(Node::var("x"), Node::expr("1")).children().len(),
            2
        );
        let bin_op = Node::bin_op(Node::expr("a"), Node::expr("b"), BinaryOp::Ne);
        assert_eq!(bin_op.children().len(), 2);
        assert_eq!(bin_op.value(), Some("!="));
        for leaf in [Node::var("x"), Node::stmt("Once."), Node::expr("1")] {
            assert!(leaf.children().is_empty());
            assert!(leaf.value().is_some());
        }
    }

    #[test]
    fn test_with_body() {
        let header = Node::if_(Node::expr("x"));
        let nested = header.with_body([Node::stmt("Once."), Node::print(Node::expr("x"))]);
        assert_eq!(nested.kind(), NodeKind::If);
        assert_eq!(nested.children().len(), 2);
        assert_eq!(nested.children()[1].kind(), NodeKind::Block);
        assert_eq!(nested.children()[1].children().len(), 2);
    }

    #[test]
    #[should_panic]
    fn test_with_body_on_non_header() {
        let _ = Node::print(Node::expr("x")).with_body([]);
    }

    #[test]
    fn test_operator_symbols() {
        let symbols = BinaryOp::iter().map(|op| op.to_string()).collect::<Vec<_>>();
        assert_eq!(symbols, ["+", "!=", "==", "<", ">"]);
        assert_eq!(BinaryOp::Lt.as_ref(), "<");
    }
}
