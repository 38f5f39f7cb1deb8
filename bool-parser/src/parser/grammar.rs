//! The expression grammar, from lowest to highest precedence:
//!
//! ```text
//! Expr    := Or
//! Or      := And ('|' And)*
//! And     := Unary ('&' Unary)*
//! Unary   := '~' Unary | Primary
//! Primary := Var | Const | '(' Expr ')'
//! ```
//!
//! Chains of the same operator are flattened as they are built.

use bool_error::Error;
use crate::tokenizer::TokenKind;
use super::{
    ast::{Connective, Node},
    error::{Expected, UnexpectedToken},
    Parse,
    Parser,
};

impl Parse for Node {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        parse_or(input)
    }
}

/// Parses one or more `&` chains separated by `|`.
fn parse_or(input: &mut Parser) -> Result<Node, Error> {
    let mut operands = vec![parse_and(input)?];
    while input.eat(TokenKind::Or).is_some() {
        operands.push(parse_and(input)?);
    }

    Ok(Connective::Or.collapse(operands))
}

/// Parses one or more unary expressions separated by `&`.
fn parse_and(input: &mut Parser) -> Result<Node, Error> {
    let mut operands = vec![parse_unary(input)?];
    while input.eat(TokenKind::And).is_some() {
        operands.push(parse_unary(input)?);
    }

    Ok(Connective::And.collapse(operands))
}

fn parse_unary(input: &mut Parser) -> Result<Node, Error> {
    if input.eat(TokenKind::Not).is_some() {
        Ok(Node::not(parse_unary(input)?))
    } else {
        parse_primary(input)
    }
}

fn parse_primary(input: &mut Parser) -> Result<Node, Error> {
    let token = input.current_token().clone();
    match token.kind {
        TokenKind::Name => {
            input.next_token();
            Ok(Node::var(token.lexeme))
        },
        TokenKind::Const(value) => {
            input.next_token();
            Ok(Node::Const(value))
        },
        TokenKind::OpenParen => {
            input.next_token();
            let expr = Node::parse(input)?;
            if input.eat(TokenKind::CloseParen).is_none() {
                return Err(input.error(UnexpectedToken {
                    found: input.current_token().kind,
                    expected: Expected::CloseParen,
                }));
            }
            Ok(expr)
        },
        found => Err(input.error(UnexpectedToken {
            found,
            expected: Expected::UnaryStart,
        })),
    }
}
