//! Moves the statements of implied blocks under their headers

use fable_ast::{Node, NodeKind};
use thiserror::Error;
use tracing::{debug, trace};

/// An open block, waiting for its matching [NodeKind::EndBlock]
struct OpenBlock {
    index: usize,
    header: Node,
    body: Vec<Node>,
}

/// Restructures a flat program so that every [NodeKind::While] and [NodeKind::If] header owns
/// its body.
///
/// Each header takes the statements following it, up to the matching [NodeKind::EndBlock], as a
/// trailing [NodeKind::Block] child. The end markers are discarded. Blocks nest, an end marker
/// always closes the most recently opened block.
///
/// # Examples
/// ```
/// # use fable_parsing::{nest_blocks, parse_source};
/// let program = parse_source("> inspect whether x\nYou speak of x.\n> leave");
/// let nested = nest_blocks(program).unwrap();
/// assert_eq!(nested.compact(), "Program(If(Expr(x), Block(Print(Expr(x)))))");
/// ```
pub fn nest_blocks(program: Node) -> Result<Node, NestingError> {
    debug_assert_eq!(program.kind(), NodeKind::Program);
    let mut open: Vec<OpenBlock> = vec![];
    let mut top_level = vec![];

    for (index, statement) in program.into_children().into_iter().enumerate() {
        match statement.kind() {
            NodeKind::While | NodeKind::If => {
                trace!("opening {} block at statement {index}", statement.kind());
                open.push(OpenBlock {
                    index,
                    header: statement,
                    body: vec![],
                });
            }
            NodeKind::EndBlock => {
                let block = open
                    .pop()
                    .ok_or(NestingError::UnmatchedEndBlock { index })?;
                trace!(
                    "closing {} block opened at statement {} with {} statements",
                    block.header.kind(),
                    block.index,
                    block.body.len()
                );
                let nested = block.header.with_body(block.body);
                match open.last_mut() {
                    Some(parent) => parent.body.push(nested),
                    None => top_level.push(nested),
                }
            }
            _ => match open.last_mut() {
                Some(parent) => parent.body.push(statement),
                None => top_level.push(statement),
            },
        }
    }

    if let Some(unclosed) = open.pop() {
        return Err(NestingError::UnclosedBlock {
            kind: unclosed.header.kind(),
            index: unclosed.index,
        });
    }
    debug!("nested program has {} top level statements", top_level.len());
    Ok(Node::program(top_level))
}

/// An error nesting blocks
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NestingError {
    #[error("statement {index} leaves a block, but no block is open")]
    UnmatchedEndBlock { index: usize },
    #[error("{kind} block opened at statement {index} is never left")]
    UnclosedBlock { kind: NodeKind, index: usize },
}
