//! Parser for womtool type declarations
//!
//! A small recursive descent parser over the token stream produced by
//! [`Lexer`]. Only the structural type (`Array[Array[File]]+`) is consumed;
//! whatever follows it is annotation text such as `(optional, default = 5)`,
//! which the annotation helpers inspect separately.

mod annotations;
mod error;
mod types;
mod utils;

pub use annotations::{extract_default_value, mentions_optional};

use crate::config::{Config, OptionalScan};
use crate::error::{ConverterError, ErrorKind, Result};
use crate::lexer::{Lexer, Token, TokenType};
use crate::types::TypeSpec;

/// Deepest array nesting accepted before parsing gives up
pub const MAX_NESTING_DEPTH: usize = 128;

pub struct Parser {
    pub(super) tokens: Vec<Token>,
    pub(super) current: usize,
    /// Array levels currently open
    pub(super) depth: usize,
}

impl Parser {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if !matches!(tokens.last(), Some(token) if token.token_type == TokenType::Eof) {
            let column = tokens.last().map_or(1, |token| token.end_column + 1);
            tokens.push(Token {
                token_type: TokenType::Eof,
                column,
                end_column: column,
            });
        }
        Self {
            tokens,
            current: 0,
            depth: 0,
        }
    }

    /// Parse the structural type: the first type name in the declaration and
    /// its bracketed inner types. Tokens after it are left unconsumed.
    pub fn parse(&mut self) -> Result<TypeSpec> {
        let mut paren_depth: usize = 0;

        // The type name is the first identifier outside parenthesised annotations
        while !self.is_at_end() {
            match self.peek().token_type {
                TokenType::Identifier(_) if paren_depth == 0 => break,
                TokenType::LeftParen => paren_depth += 1,
                TokenType::RightParen => paren_depth = paren_depth.saturating_sub(1),
                _ => {}
            }
            self.advance();
        }

        if self.is_at_end() {
            return Err(ConverterError::new(
                ErrorKind::NoTypeFound,
                "could not be parsed into a type specification",
            ));
        }

        self.parse_type()
    }
}

/// Parse one raw declaration into a type tree, wrapping it in `optional`
/// when the configured scan finds the marker.
pub fn parse_type_declaration(declaration: &str, config: &Config) -> Result<TypeSpec> {
    let tokens = Lexer::new(declaration).tokenize();
    let mut parser = Parser::new(tokens);

    let structural = parser
        .parse()
        .map_err(|err| err.with_declaration(declaration))?;

    let optional = match config.optional_scan {
        OptionalScan::WholeString => mentions_optional(declaration),
        OptionalScan::Annotation => parser.annotation_marks_optional(),
    };

    tracing::trace!(declaration, optional, structural = %structural, "parsed type declaration");

    if optional {
        Ok(TypeSpec::optional(structural))
    } else {
        Ok(structural)
    }
}
