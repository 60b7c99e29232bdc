//! Annotation scanning: the `optional` marker and `default = ...` values

use super::Parser;
use crate::lexer::TokenType;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

const OPTIONAL_MARKER: &str = "optional";

static DEFAULT_VALUE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\(optional, default = (.*)\)").expect("default value regex should compile")
});

/// Whether `optional` occurs anywhere in the raw declaration, string
/// literals and bracket contents included.
pub fn mentions_optional(declaration: &str) -> bool {
    declaration.contains(OPTIONAL_MARKER)
}

/// The value of a `(optional, default = <value>)` annotation.
///
/// The value text runs to the last closing parenthesis. Text that is a JSON
/// literal (`"hello"`, `5`, `true`, `["a"]`) is returned as that value,
/// anything else (a WDL expression, say) as a JSON string.
pub fn extract_default_value(declaration: &str) -> Option<Value> {
    let captures = DEFAULT_VALUE.captures(declaration)?;
    let text = captures.get(1)?.as_str();

    Some(serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string())))
}

impl Parser {
    /// Whether a bare `optional` word appears outside bracket groups.
    /// String literal contents are separate tokens and never match.
    pub(super) fn annotation_marks_optional(&self) -> bool {
        let mut depth: usize = 0;

        for token in &self.tokens {
            match &token.token_type {
                TokenType::LeftBracket => depth += 1,
                TokenType::RightBracket => depth = depth.saturating_sub(1),
                TokenType::Identifier(word) if depth == 0 && word == OPTIONAL_MARKER => return true,
                _ => {}
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, OptionalScan};
    use crate::parser::parse_type_declaration;
    use crate::types::{PrimitiveType, TypeSpec};
    use serde_json::json;

    fn annotation_scan() -> Config {
        Config {
            optional_scan: OptionalScan::Annotation,
            ..Config::default()
        }
    }

    #[test]
    fn test_default_value_literals() {
        assert_eq!(
            extract_default_value(r#"String (optional, default = "hello world")"#),
            Some(json!("hello world"))
        );
        assert_eq!(extract_default_value("Int (optional, default = 5)"), Some(json!(5)));
        assert_eq!(
            extract_default_value("Boolean (optional, default = true)"),
            Some(json!(true))
        );
        assert_eq!(
            extract_default_value(r#"Array[String] (optional, default = ["a", "b"])"#),
            Some(json!(["a", "b"]))
        );
    }

    #[test]
    fn test_default_value_expression_kept_as_text() {
        assert_eq!(
            extract_default_value("Int (optional, default = max(1, 2))"),
            Some(json!("max(1, 2)"))
        );
    }

    #[test]
    fn test_no_default_value() {
        assert_eq!(extract_default_value("Int? (optional)"), None);
        assert_eq!(extract_default_value("String"), None);
    }

    #[test]
    fn test_optional_detected_anywhere() {
        let int = TypeSpec::primitive(PrimitiveType::Int);
        for declaration in ["Int? (optional)", "Int (optional, default = 3)", "(optional) Int"] {
            assert_eq!(
                parse_type_declaration(declaration, &Config::default()).unwrap(),
                TypeSpec::optional(int.clone()),
                "declaration: {}",
                declaration
            );
        }
    }

    #[test]
    fn test_whole_string_scan_sees_string_literals() {
        let declaration = r#"File (default = "not optional")"#;
        let file = TypeSpec::primitive(PrimitiveType::File);

        assert_eq!(
            parse_type_declaration(declaration, &Config::default()).unwrap(),
            TypeSpec::optional(file.clone())
        );
        assert_eq!(
            parse_type_declaration(declaration, &annotation_scan()).unwrap(),
            file
        );
    }

    #[test]
    fn test_annotation_scan_still_finds_marker() {
        let declaration = r#"String (optional, default = "optional")"#;
        let string = TypeSpec::primitive(PrimitiveType::String);

        for config in [Config::default(), annotation_scan()] {
            assert_eq!(
                parse_type_declaration(declaration, &config).unwrap(),
                TypeSpec::optional(string.clone())
            );
        }
    }

    #[test]
    fn test_optional_wraps_once_at_the_top() {
        let spec = parse_type_declaration("Array[Array[File]]+ (optional)", &Config::default()).unwrap();
        let file = TypeSpec::primitive(PrimitiveType::File);
        assert_eq!(
            spec,
            TypeSpec::optional(TypeSpec::array(TypeSpec::array(file, false), true))
        );
    }
}
