//! Error construction helpers for the parser

use super::Parser;
use crate::error::{ConverterError, ErrorKind, Span};
use crate::lexer::{Token, TokenType};
use crate::types::PrimitiveType;

impl Parser {
    /// Create an error with the given kind and message at the current token
    pub(super) fn error(&self, kind: ErrorKind, message: String) -> ConverterError {
        self.error_at_token(kind, message, self.peek())
    }

    /// Create an error at a specific token
    pub(super) fn error_at_token(&self, kind: ErrorKind, message: String, token: &Token) -> ConverterError {
        ConverterError::new(kind, message).with_span(Span::new(token.column, token.end_column))
    }

    /// Create an unexpected token error
    pub(super) fn unexpected_token(&self, expected: &str) -> ConverterError {
        let token = self.peek();
        if token.token_type == TokenType::Eof {
            self.error(
                ErrorKind::UnexpectedEnd,
                format!("expected {}, found end of declaration", expected),
            )
        } else {
            self.error(
                ErrorKind::UnexpectedToken,
                format!("expected {}, found {}", expected, describe(&token.token_type)),
            )
        }
    }

    pub(super) fn unsupported_type(&self, type_name: &str, token: &Token) -> ConverterError {
        let supported: Vec<&str> = PrimitiveType::ALL
            .iter()
            .map(|primitive| primitive.name())
            .chain(std::iter::once("Array"))
            .collect();

        self.error_at_token(
            ErrorKind::UnsupportedType,
            format!("'{}' is not a supported type", type_name),
            token,
        )
        .with_help(format!("supported types: {}", supported.join(", ")))
    }
}

fn describe(token_type: &TokenType) -> String {
    match token_type {
        TokenType::Identifier(name) => format!("'{}'", name),
        TokenType::StringLiteral(value) => format!("string \"{}\"", value),
        TokenType::Number(value) => format!("number {}", value),
        TokenType::LeftBracket => "'['".to_string(),
        TokenType::RightBracket => "']'".to_string(),
        TokenType::Plus => "'+'".to_string(),
        TokenType::Question => "'?'".to_string(),
        TokenType::LeftParen => "'('".to_string(),
        TokenType::RightParen => "')'".to_string(),
        TokenType::Comma => "','".to_string(),
        TokenType::Equal => "'='".to_string(),
        TokenType::Symbol(ch) => format!("'{}'", ch),
        TokenType::Eof => "end of declaration".to_string(),
    }
}
