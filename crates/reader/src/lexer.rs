use std::convert::TryFrom;

use logos::Logos;

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use cembed_common::Source;

#[derive(Debug, PartialEq, Clone)]
pub struct TokenData {
    pub token: Token,
    pub span: SourceSpan,
}

#[derive(Error, Debug, Diagnostic)]
#[error("Unable to tokenize input")]
#[diagnostic()]
pub struct LexerError {
    #[source_code]
    src: Source,
    #[label("Here")]
    span: SourceSpan,
}

pub fn tokenize(src: Source, contents: &str) -> Result<Vec<TokenData>, LexerError> {
    let lexer = Token::lexer(contents);

    lexer
        .spanned()
        .map(|(token, span)| match token {
            Ok(token) => Ok(TokenData {
                token,
                span: SourceSpan::from(span),
            }),
            Err(_error) => Err(LexerError {
                src: src.clone(),
                span: span.into(),
            }),
        })
        .collect()
}

/// The subset of C tokens that appear in a generated array declaration.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(error = ())]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"//[^\n]*")]
pub enum Token {
    /// Character literal such as `'a'`, `'\n'` or `'\xff'`
    #[token("'", parse_char_literal)]
    CharLiteral(u8),

    /// Integer literal in decimal, octal or hex
    #[regex(r"[1-9][0-9]*", |lex| parse_decint_literal(lex.slice()))]
    #[regex(r"0[0-7]*", |lex| parse_octal_literal(lex.slice()))]
    #[regex(r"0[xX][0-9a-fA-F]+", |lex| parse_hex_literal(lex.slice()))]
    IntLiteral(u64),

    /// An Identifier
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),

    // Keywords -----------------------------------------
    /// The Static Keyword
    #[token("static")]
    Static,

    /// The Const Keyword
    #[token("const")]
    Const,

    /// The Char Type Keyword
    #[token("char")]
    Char,

    // Punctuation --------------------------------------
    /// Left Bracket "["
    #[token("[")]
    LBracket,

    /// Right Bracket "]"
    #[token("]")]
    RBracket,

    /// Left Brace "{"
    #[token("{")]
    LBrace,

    /// Right Brace "}"
    #[token("}")]
    RBrace,

    /// Assignment "="
    #[token("=")]
    Assign,

    /// Comma ","
    #[token(",")]
    Comma,

    /// Semicolon ";"
    #[token(";")]
    Semicolon,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::CharLiteral(c) => write!(f, "'\\x{:02x}'", c),
            Token::IntLiteral(i) => write!(f, "{}", i),
            Token::Identifier(ident) => write!(f, "{}", ident),
            Token::Static => write!(f, "static"),
            Token::Const => write!(f, "const"),
            Token::Char => write!(f, "char"),
            Token::LBracket => write!(f, "["),
            Token::RBracket => write!(f, "]"),
            Token::LBrace => write!(f, "{{"),
            Token::RBrace => write!(f, "}}"),
            Token::Assign => write!(f, "="),
            Token::Comma => write!(f, ","),
            Token::Semicolon => write!(f, ";"),
        }
    }
}

/// Parses the body of a single character literal after its opening quote.
/// Only ASCII characters may appear unescaped.
fn parse_char_literal(lex: &mut logos::Lexer<'_, Token>) -> Option<u8> {
    let rest = lex.remainder().as_bytes();

    let (value, len) = match *rest.first()? {
        b'\\' => {
            let (value, len) = parse_escape(&rest[1..])?;
            (value, len + 1)
        }
        b'\'' | b'\n' => return None,
        c if c.is_ascii() => (c, 1),
        _ => return None,
    };

    if *rest.get(len)? != b'\'' {
        return None;
    }
    lex.bump(len + 1);
    Some(value)
}

/// Parses a C escape sequence. Takes the bytes after the backslash and
/// returns the produced byte and the number of bytes consumed.
fn parse_escape(rest: &[u8]) -> Option<(u8, usize)> {
    let res = match *rest.first()? {
        b'n' => (b'\n', 1),
        b't' => (b'\t', 1),
        b'r' => (b'\r', 1),
        b'a' => (0x07, 1),
        b'b' => (0x08, 1),
        b'f' => (0x0c, 1),
        b'v' => (0x0b, 1),
        b'\\' => (b'\\', 1),
        b'\'' => (b'\'', 1),
        b'"' => (b'"', 1),
        b'?' => (b'?', 1),
        b'x' => {
            let digits = rest[1..]
                .iter()
                .take_while(|b| b.is_ascii_hexdigit())
                .count();
            let value = parse_radix(&rest[1..1 + digits], 16)?;
            (value, digits + 1)
        }
        b'0'..=b'7' => {
            let digits = rest
                .iter()
                .take(3)
                .take_while(|b| (b'0'..=b'7').contains(*b))
                .count();
            let value = parse_radix(&rest[..digits], 8)?;
            (value, digits)
        }
        _ => return None,
    };

    Some(res)
}

fn parse_radix(digits: &[u8], radix: u32) -> Option<u8> {
    if digits.is_empty() {
        return None;
    }
    let digits = std::str::from_utf8(digits).ok()?;
    let value = u32::from_str_radix(digits, radix).ok()?;
    u8::try_from(value).ok()
}

fn parse_decint_literal(s: &str) -> Option<u64> {
    s.parse().ok()
}

fn parse_octal_literal(s: &str) -> Option<u64> {
    if s == "0" {
        return Some(0);
    }
    u64::from_str_radix(&s[1..], 8).ok()
}

fn parse_hex_literal(s: &str) -> Option<u64> {
    u64::from_str_radix(&s[2..], 16).ok()
}
