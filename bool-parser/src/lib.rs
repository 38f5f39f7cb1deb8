//! Tokenizer, parser, and printer for boolean expressions.
//!
//! ```
//! use bool_parser::{parse, render};
//!
//! let node = parse("a * (b + c) · !d").unwrap();
//! assert_eq!(render(&node), "a & (b | c) & ~d");
//! ```

pub mod parser;
pub mod tokenizer;

pub use parser::{ast::{Connective, Node}, fmt::render, parse, Parser};
pub use tokenizer::{tokenize, Token, TokenKind};
