#![doc = include_str!("../README.md")]

pub mod node;
pub mod visitor;

pub use node::{BinaryOp, Node, NodeKind};
