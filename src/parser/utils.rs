//! Token cursor helpers shared by the parsing routines

use super::Parser;
use crate::error::Result;
use crate::lexer::{Token, TokenType};

impl Parser {
    /// Check if the current token matches a type (without consuming)
    pub(super) fn check(&self, token_type: &TokenType) -> bool {
        if self.is_at_end() {
            false
        } else {
            std::mem::discriminant(&self.peek().token_type) == std::mem::discriminant(token_type)
        }
    }

    /// Advance to the next token
    pub(super) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    pub(super) fn is_at_end(&self) -> bool {
        self.peek().token_type == TokenType::Eof
    }

    pub(super) fn peek(&self) -> &Token {
        &self.tokens[self.current.min(self.tokens.len() - 1)]
    }

    pub(super) fn previous(&self) -> &Token {
        &self.tokens[self.current.saturating_sub(1)]
    }

    /// Consume a token of the expected type or return an error
    pub(super) fn consume(&mut self, token_type: &TokenType, expected: &str) -> Result<&Token> {
        if self.check(token_type) {
            Ok(self.advance())
        } else {
            Err(self.unexpected_token(expected))
        }
    }

    /// Match and consume a token type
    pub(super) fn match_token(&mut self, token_type: &TokenType) -> bool {
        if self.check(token_type) {
            self.advance();
            true
        } else {
            false
        }
    }
}
