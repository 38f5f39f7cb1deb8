pub mod ast;
pub mod error;
pub mod fmt;
mod grammar;

use ast::Node;
use bool_error::{Error, ErrorKind};
use crate::tokenizer::{tokenize, Token, TokenKind};
use error::TrailingInput;
use std::ops::Range;

/// A recursive-descent parser over a fully tokenized expression.
///
/// The token stream always ends with a [`TokenKind::End`] token, so there is always a current
/// token to look at.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,
}

impl<'source> Parser<'source> {
    /// Tokenizes the given source and creates a parser over it.
    pub fn new(source: &'source str) -> Result<Self, Error> {
        Ok(Self {
            tokens: tokenize(source)?,
            cursor: 0,
        })
    }

    /// Creates an error that points at the current token.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns the span of the current token.
    pub fn span(&self) -> Range<usize> {
        self.current_token().span.clone()
    }

    /// Returns the current token. The cursor is not moved.
    pub fn current_token(&self) -> &Token<'source> {
        // the cursor never moves past the `End` token
        &self.tokens[self.cursor.min(self.tokens.len() - 1)]
    }

    /// Returns the current token, then advances the cursor. At the end of the stream, the `End`
    /// token is returned repeatedly.
    pub fn next_token(&mut self) -> Token<'source> {
        let token = self.current_token().clone();
        if token.kind != TokenKind::End {
            self.cursor += 1;
        }
        token
    }

    /// Consumes the current token if it is of the given kind.
    pub fn eat(&mut self, kind: TokenKind) -> Option<Token<'source>> {
        if self.current_token().kind == kind {
            Some(self.next_token())
        } else {
            None
        }
    }

    /// Parses a value from the stream of tokens. All the tokens must be consumed by the parser;
    /// if not, a [`TrailingInput`] error is returned.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        let value = T::parse(self)?;
        let found = self.current_token().kind;
        if found == TokenKind::End {
            Ok(value)
        } else {
            Err(self.error(TrailingInput { found }))
        }
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

/// Parses the source text into a flattened [`Node`] tree.
pub fn parse(source: &str) -> Result<Node, Error> {
    Parser::new(source)?.try_parse_full::<Node>()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    use error::{Expected, InvalidCharacter, UnexpectedToken};

    fn v(name: &str) -> Node {
        Node::var(name)
    }

    #[test]
    fn single_variable() {
        assert_eq!(parse("A").unwrap(), v("A"));
    }

    #[test]
    fn constants() {
        assert_eq!(parse("1").unwrap(), Node::Const(true));
        assert_eq!(parse("(0)").unwrap(), Node::Const(false));
    }

    #[test]
    fn and_binds_tighter_than_or() {
        assert_eq!(
            parse("A | B & C").unwrap(),
            Node::Or(vec![v("A"), Node::And(vec![v("B"), v("C")])]),
        );
    }

    #[test]
    fn not_binds_tighter_than_and() {
        assert_eq!(
            parse("~A & B").unwrap(),
            Node::And(vec![Node::not(v("A")), v("B")]),
        );
    }

    #[test]
    fn unary_right_associativity() {
        assert_eq!(
            parse("!~!A").unwrap(),
            Node::not(Node::not(Node::not(v("A")))),
        );
    }

    #[test]
    fn chains_are_flattened() {
        assert_eq!(
            parse("a & b & c").unwrap(),
            Node::And(vec![v("a"), v("b"), v("c")]),
        );
        assert_eq!(
            parse("a | b | c | d").unwrap(),
            Node::Or(vec![v("a"), v("b"), v("c"), v("d")]),
        );
    }

    #[test]
    fn parenthesized_chains_are_flattened() {
        assert_eq!(
            parse("(a & b) & (c & d)").unwrap(),
            Node::And(vec![v("a"), v("b"), v("c"), v("d")]),
        );
        assert_eq!(
            parse("a | (b | (c))").unwrap(),
            Node::Or(vec![v("a"), v("b"), v("c")]),
        );
    }

    #[test]
    fn parentheses_override_precedence() {
        assert_eq!(
            parse("(A | B) & C").unwrap(),
            Node::And(vec![Node::Or(vec![v("A"), v("B")]), v("C")]),
        );
        assert_eq!(
            parse("~(A | B)").unwrap(),
            Node::not(Node::Or(vec![v("A"), v("B")])),
        );
    }

    #[test]
    fn dangling_operator() {
        let err = parse("A &").unwrap_err();
        assert_eq!(
            err.downcast_ref::<UnexpectedToken>(),
            Some(&UnexpectedToken { found: TokenKind::End, expected: Expected::UnaryStart }),
        );
        assert_eq!(err.spans, vec![3..3]);
    }

    #[test]
    fn empty_input() {
        let err = parse("   ").unwrap_err();
        assert_eq!(
            err.downcast_ref::<UnexpectedToken>(),
            Some(&UnexpectedToken { found: TokenKind::End, expected: Expected::UnaryStart }),
        );
    }

    #[test]
    fn operator_where_operand_expected() {
        let err = parse("A & | B").unwrap_err();
        assert_eq!(
            err.downcast_ref::<UnexpectedToken>(),
            Some(&UnexpectedToken { found: TokenKind::Or, expected: Expected::UnaryStart }),
        );
        assert_eq!(err.position(), 4);
    }

    #[test]
    fn unclosed_parenthesis() {
        let err = parse("(A & B").unwrap_err();
        assert_eq!(
            err.downcast_ref::<UnexpectedToken>(),
            Some(&UnexpectedToken { found: TokenKind::End, expected: Expected::CloseParen }),
        );
    }

    #[test]
    fn trailing_input() {
        let err = parse("A B").unwrap_err();
        assert_eq!(
            err.downcast_ref::<TrailingInput>(),
            Some(&TrailingInput { found: TokenKind::Name }),
        );
        assert_eq!(err.spans, vec![2..3]);

        let err = parse("(A))").unwrap_err();
        assert_eq!(
            err.downcast_ref::<TrailingInput>(),
            Some(&TrailingInput { found: TokenKind::CloseParen }),
        );
    }

    #[test]
    fn lex_errors_surface_from_parse() {
        let err = parse("A # B").unwrap_err();
        assert_eq!(err.downcast_ref::<InvalidCharacter>(), Some(&InvalidCharacter { character: '#' }));
        assert_eq!(err.position(), 2);
    }

    #[test]
    fn parser_cursor_stops_at_end() {
        let mut parser = Parser::new("A").unwrap();
        assert_eq!(parser.next_token().kind, TokenKind::Name);
        assert_eq!(parser.next_token().kind, TokenKind::End);
        assert_eq!(parser.next_token().kind, TokenKind::End);
        assert!(parser.eat(TokenKind::End).is_some());
    }
}
