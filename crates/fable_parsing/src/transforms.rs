//! Transforms run over a parsed program

pub mod nesting;
