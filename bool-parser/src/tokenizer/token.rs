use logos::Logos;
use std::{fmt, ops::Range};

/// The different kinds of tokens that can be produced by the tokenizer.
///
/// Several spellings map to the same kind: `&`, `*` and `·` are all [`TokenKind::And`], `|`, `+`
/// and the letter `v` (in either case) are [`TokenKind::Or`], and `~` and `!` are
/// [`TokenKind::Not`]. Because `v` is an operator, a variable name can never start with it.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
pub enum TokenKind {
    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[token("&")]
    #[token("*")]
    #[token("·")]
    And,

    #[token("|")]
    #[token("+")]
    #[token("v")]
    #[token("V")]
    Or,

    #[token("~")]
    #[token("!")]
    Not,

    #[token("0", |_| false)]
    #[token("1", |_| true)]
    Const(bool),

    #[regex(r"[A-UW-Za-uw-z][A-Za-z0-9_]*")]
    Name,

    /// Marks the end of the token stream. Never produced by the lexer itself; appended by
    /// [`tokenize`](super::tokenize).
    End,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::OpenParen => write!(f, "`(`"),
            TokenKind::CloseParen => write!(f, "`)`"),
            TokenKind::And => write!(f, "`&`"),
            TokenKind::Or => write!(f, "`|`"),
            TokenKind::Not => write!(f, "`~`"),
            TokenKind::Const(value) => write!(f, "constant `{}`", u8::from(*value)),
            TokenKind::Name => write!(f, "variable"),
            TokenKind::End => write!(f, "end of input"),
        }
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token. Empty for [`TokenKind::End`].
    pub lexeme: &'source str,
}
