pub mod token;

use bool_error::Error;
use crate::parser::error::InvalidCharacter;
use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the lexer. Characters outside the accepted
/// alphabet are reported as `Err(())`.
pub fn lexer(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens in the input, terminated by a
/// [`TokenKind::End`] token whose span is empty and sits at the end of the input.
///
/// Fails on the first character that is not part of the accepted alphabet.
pub fn tokenize(input: &str) -> Result<Box<[Token]>, Error> {
    let mut lexer = lexer(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(kind) => tokens.push(Token {
                span,
                kind,
                lexeme: lexer.slice(),
            }),
            Err(()) => {
                // the error span may end in the middle of a multi-byte character
                let character = input[span.start..].chars().next().unwrap_or('\u{FFFD}');
                let end = span.start + character.len_utf8();
                return Err(Error::new(vec![span.start..end], InvalidCharacter { character }));
            },
        }
    }

    tokens.push(Token {
        span: input.len()..input.len(),
        kind: TokenKind::End,
        lexeme: "",
    });

    Ok(tokens.into_boxed_slice())
}
