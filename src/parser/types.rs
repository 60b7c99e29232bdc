//! Type parsing for womtool declarations
//!
//! - Primitive types (`Int`, `String`, `Float`, `Boolean`, `File`)
//! - Arrays with a bracketed inner type and an optional `+` non-empty marker
//! - A trailing `?`, accepted without structural effect

use super::{Parser, MAX_NESTING_DEPTH};
use crate::error::{ErrorKind, Result, Span};
use crate::lexer::{Token, TokenType};
use crate::types::{PrimitiveType, TypeSpec};

impl Parser {
    pub(super) fn parse_type(&mut self) -> Result<TypeSpec> {
        let name_token = self.peek().clone();
        let type_name = match &name_token.token_type {
            TokenType::Identifier(name) => name.clone(),
            _ => return Err(self.unexpected_token("a type name")),
        };
        self.advance();

        let spec = match type_name.as_str() {
            "Array" => self.parse_array_type(&name_token)?,
            _ => match PrimitiveType::from_name(&type_name) {
                Some(primitive) => self.parse_primitive_type(primitive)?,
                None => return Err(self.unsupported_type(&type_name, &name_token)),
            },
        };

        // `String?` is womtool's own optional marker. Optionality is decided
        // from the annotation, so the suffix carries no structure here.
        self.match_token(&TokenType::Question);

        Ok(spec)
    }

    fn parse_primitive_type(&mut self, primitive: PrimitiveType) -> Result<TypeSpec> {
        if self.check(&TokenType::LeftBracket) {
            return Err(self.error(
                ErrorKind::UnexpectedInnerType,
                format!("primitive type '{}' does not take an inner type", primitive),
            ));
        }
        Ok(TypeSpec::primitive(primitive))
    }

    fn parse_array_type(&mut self, array_token: &Token) -> Result<TypeSpec> {
        if !self.match_token(&TokenType::LeftBracket) {
            return Err(self
                .error_at_token(
                    ErrorKind::MissingInnerType,
                    "Array is missing an inner type".to_string(),
                    array_token,
                )
                .with_help("write the element type in brackets, e.g. Array[String]"));
        }

        if self.check(&TokenType::RightBracket) {
            let open = self.previous().column;
            let close = self.peek().column;
            return Err(self
                .error(
                    ErrorKind::MissingInnerType,
                    "Array is missing an inner type".to_string(),
                )
                .with_span(Span::new(open, close)));
        }

        if self.depth >= MAX_NESTING_DEPTH {
            return Err(self
                .error_at_token(
                    ErrorKind::NestingTooDeep,
                    format!("arrays are nested more than {} levels deep", MAX_NESTING_DEPTH),
                    array_token,
                )
                .with_help("womtool never prints declarations this deep; check the source document"));
        }

        self.depth += 1;
        let inner = self.parse_type();
        self.depth -= 1;
        let inner = inner?;
        self.consume(&TokenType::RightBracket, "']' after the inner type")?;
        let non_empty = self.match_token(&TokenType::Plus);

        Ok(TypeSpec::array(inner, non_empty))
    }
}
