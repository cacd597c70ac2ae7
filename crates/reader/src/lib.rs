//! Reads a generated `static const char NAME[] = { ... };` declaration back
//! into the bytes it holds.

pub mod lexer;

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use cembed_common::Source;
use lexer::{tokenize, LexerError, Token, TokenData};

/// A decoded array declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    /// Every element of the initializer, including the terminator.
    pub values: Vec<u8>,
}

impl Declaration {
    /// The embedded bytes without the trailing terminator, or `None` if the
    /// array does not end with `0`.
    pub fn payload(&self) -> Option<&[u8]> {
        match self.values.split_last() {
            Some((&0, rest)) => Some(rest),
            _ => None,
        }
    }
}

#[derive(Error, Debug, Diagnostic)]
pub enum ReaderError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Lexer(#[from] LexerError),
    #[diagnostic()]
    #[error("Unexpected token '{token}': {description}")]
    UnexpectedToken {
        #[source_code]
        src: Source,
        #[label("Here")]
        span: SourceSpan,
        description: String,
        token: Token,
    },
    #[diagnostic()]
    #[error("End of input reached: {description}")]
    EndOfInput {
        #[source_code]
        src: Source,
        #[label("Input ends here")]
        span: SourceSpan,
        description: String,
    },
    #[diagnostic(help("each element must fit in a single byte"))]
    #[error("Value {value} does not fit in a char")]
    ValueOutOfRange {
        #[source_code]
        src: Source,
        #[label("Out of range")]
        span: SourceSpan,
        value: u64,
    },
    #[diagnostic(help("a generated file holds exactly one declaration"))]
    #[error("Unexpected input after the declaration")]
    TrailingInput {
        #[source_code]
        src: Source,
        #[label("Starting here")]
        span: SourceSpan,
    },
}

/// Tokenizes and parses `contents` as a single generated declaration.
pub fn read_declaration(src: Source, contents: &str) -> Result<Declaration, ReaderError> {
    let tokens = tokenize(src.clone(), contents)?;
    let mut input = ParseInput::new(src, tokens, contents.len());
    parse_declaration(&mut input)
}

struct ParseInput {
    src: Source,
    tokens: Vec<TokenData>,
    index: usize,
    end: usize,
}

impl ParseInput {
    fn new(src: Source, tokens: Vec<TokenData>, end: usize) -> Self {
        ParseInput {
            src,
            tokens,
            index: 0,
            end,
        }
    }

    fn end_of_input(&self, description: &str) -> ReaderError {
        ReaderError::EndOfInput {
            src: self.src.clone(),
            span: SourceSpan::from(self.end..self.end),
            description: description.to_string(),
        }
    }

    fn unexpected(&self, data: &TokenData, description: &str) -> ReaderError {
        ReaderError::UnexpectedToken {
            src: self.src.clone(),
            span: data.span,
            description: description.to_string(),
            token: data.token.clone(),
        }
    }

    fn peek(&self) -> Option<&TokenData> {
        self.tokens.get(self.index)
    }

    fn next(&mut self, description: &str) -> Result<TokenData, ReaderError> {
        let data = self
            .tokens
            .get(self.index)
            .cloned()
            .ok_or_else(|| self.end_of_input(description))?;
        self.index += 1;
        Ok(data)
    }

    fn assert_next(&mut self, token: Token, description: &str) -> Result<SourceSpan, ReaderError> {
        let next = self.next(description)?;
        if next.token == token {
            Ok(next.span)
        } else {
            Err(self.unexpected(&next, description))
        }
    }

    fn next_if(&mut self, token: Token) -> Option<SourceSpan> {
        let next = self.peek()?;
        if next.token != token {
            return None;
        }
        let span = next.span;
        self.index += 1;
        Some(span)
    }
}

fn parse_declaration(input: &mut ParseInput) -> Result<Declaration, ReaderError> {
    input.assert_next(Token::Static, "Declaration must start with 'static'")?;
    input.assert_next(Token::Const, "Expected 'const' after 'static'")?;
    input.assert_next(Token::Char, "Array element type must be 'char'")?;
    let name = parse_ident(input)?;
    input.assert_next(Token::LBracket, "Expected '[' after the array name")?;
    input.assert_next(Token::RBracket, "Array size must be left empty")?;
    input.assert_next(Token::Assign, "Expected '=' before the initializer")?;
    input.assert_next(Token::LBrace, "Initializer must start with '{'")?;
    let values = parse_values(input)?;
    input.assert_next(Token::Semicolon, "Declaration must end with ';'")?;

    if let Some(data) = input.peek() {
        return Err(ReaderError::TrailingInput {
            src: input.src.clone(),
            span: data.span,
        });
    }

    Ok(Declaration { name, values })
}

fn parse_ident(input: &mut ParseInput) -> Result<String, ReaderError> {
    let next = input.next("Expected array name")?;
    match next.token {
        Token::Identifier(ident) => Ok(ident),
        _ => Err(input.unexpected(&next, "Expected array name")),
    }
}

/// Parses the initializer elements up to and including the closing brace.
/// A trailing comma is allowed.
fn parse_values(input: &mut ParseInput) -> Result<Vec<u8>, ReaderError> {
    let mut values = Vec::new();
    loop {
        if input.next_if(Token::RBrace).is_some() {
            return Ok(values);
        }
        values.push(parse_value(input)?);

        let next = input.next("Initializer is missing its closing '}'")?;
        match next.token {
            Token::Comma => continue,
            Token::RBrace => return Ok(values),
            _ => return Err(input.unexpected(&next, "Expected ',' or '}'")),
        }
    }
}

fn parse_value(input: &mut ParseInput) -> Result<u8, ReaderError> {
    let next = input.next("Expected an array element")?;
    match next.token {
        Token::CharLiteral(c) => Ok(c),
        Token::IntLiteral(value) if value <= u8::MAX as u64 => Ok(value as u8),
        Token::IntLiteral(value) => Err(ReaderError::ValueOutOfRange {
            src: input.src.clone(),
            span: next.span,
            value,
        }),
        _ => Err(input.unexpected(&next, "Expected an integer or character literal")),
    }
}
