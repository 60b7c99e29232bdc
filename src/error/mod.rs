//! Error type hierarchy for declaration conversion
//!
//! Every failure surfaces as a [`ConverterError`]: an [`ErrorKind`] that
//! categorises it, a message, and an [`ErrorContext`] carrying the offending
//! declaration and where in it the problem was found.

mod conversions;

use colored::*;
use std::fmt;

/// Column range inside a single-line declaration (1-based, inclusive)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    pub fn single(column: usize) -> Self {
        Self {
            start: column,
            end: column,
        }
    }

    pub fn width(&self) -> usize {
        self.end - self.start + 1
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "column {}", self.start)
        } else {
            write!(f, "columns {}-{}", self.start, self.end)
        }
    }
}

/// Error context providing additional information
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    pub span: Option<Span>,
    /// The raw declaration being parsed when the error occurred
    pub declaration: Option<String>,
    pub note: Option<String>,
    pub help: Option<String>,
}

/// Main error type for the converter
#[derive(Debug, Clone)]
pub struct ConverterError {
    pub kind: ErrorKind,
    pub message: String,
    pub context: ErrorContext,
}

impl ConverterError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            context: ErrorContext::default(),
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.context.span = Some(span);
        self
    }

    pub fn with_declaration(mut self, declaration: impl Into<String>) -> Self {
        self.context.declaration = Some(declaration.into());
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.context.note = Some(note.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.context.help = Some(help.into());
        self
    }

    /// The declaration that failed to parse, if this came from the parser
    pub fn declaration(&self) -> Option<&str> {
        self.context.declaration.as_deref()
    }

    pub fn is_type_parse_error(&self) -> bool {
        self.kind.is_type_parse_error()
    }

    pub fn is_unsupported_type(&self) -> bool {
        self.kind == ErrorKind::UnsupportedType
    }
}

/// Categories of errors that can occur
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    // Type parse errors
    NoTypeFound,
    MissingInnerType,
    UnexpectedInnerType,
    UnexpectedToken,
    UnexpectedEnd,
    NestingTooDeep,
    UnsupportedType,

    // Boundary errors
    IoError,
    JsonError,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NoTypeFound => "no type found",
            ErrorKind::MissingInnerType => "missing inner type",
            ErrorKind::UnexpectedInnerType => "unexpected inner type",
            ErrorKind::UnexpectedToken => "unexpected token",
            ErrorKind::UnexpectedEnd => "unexpected end of declaration",
            ErrorKind::NestingTooDeep => "nesting too deep",
            ErrorKind::UnsupportedType => "unsupported type",
            ErrorKind::IoError => "I/O error",
            ErrorKind::JsonError => "JSON error",
        }
    }

    /// True for every kind raised while parsing a type declaration.
    /// `UnsupportedType` is the specialised member of this family.
    pub fn is_type_parse_error(&self) -> bool {
        !matches!(self, ErrorKind::IoError | ErrorKind::JsonError)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for ConverterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        if let Some(declaration) = &self.context.declaration {
            write!(f, " in '{}'", declaration)?;
            if let Some(span) = &self.context.span {
                write!(f, " at {}", span)?;
            }
        }

        write!(f, ": {}", self.message)?;

        if let Some(note) = &self.context.note {
            write!(f, "\nnote: {}", note)?;
        }

        if let Some(help) = &self.context.help {
            write!(f, "\nhelp: {}", help)?;
        }

        Ok(())
    }
}

impl std::error::Error for ConverterError {}

/// Result type for converter operations
pub type Result<T> = std::result::Result<T, ConverterError>;

/// Renders an error for the terminal, pointing into the declaration
pub struct ErrorFormatter<'a> {
    error: &'a ConverterError,
    filename: Option<&'a str>,
    use_color: bool,
}

impl<'a> ErrorFormatter<'a> {
    pub fn new(error: &'a ConverterError) -> Self {
        Self {
            error,
            filename: None,
            use_color: true,
        }
    }

    pub fn with_filename(mut self, filename: &'a str) -> Self {
        self.filename = Some(filename);
        self
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn format(&self) -> String {
        let mut output = String::new();

        if let Some(filename) = self.filename {
            output.push_str(&self.paint(filename, |s| s.bold()));
            output.push_str(": ");
        }

        let error_kind = self.error.kind.to_string();
        output.push_str(&self.paint(&error_kind, |s| s.red().bold()));
        output.push_str(&format!(": {}\n", self.error.message));

        if let Some(snippet) = self.extract_snippet() {
            output.push_str(&snippet);
        }

        if let Some(note) = &self.error.context.note {
            output.push_str(&format!("\n{}: {}", self.paint("note", |s| s.cyan().bold()), note));
        }

        if let Some(help) = &self.error.context.help {
            output.push_str(&format!("\n{}: {}", self.paint("help", |s| s.green().bold()), help));
        }

        output
    }

    fn paint(&self, text: &str, style: impl Fn(&str) -> ColoredString) -> String {
        if self.use_color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    fn extract_snippet(&self) -> Option<String> {
        let declaration = self.error.context.declaration.as_deref()?;
        let separator = self.paint("|", |s| s.blue());

        let mut snippet = format!("  {} {}", separator, declaration);

        if let Some(span) = &self.error.context.span {
            let pointer_padding = " ".repeat(span.start.saturating_sub(1));
            let pointer = "^".repeat(span.width());
            snippet.push_str(&format!(
                "\n  {} {}{}",
                separator,
                pointer_padding,
                self.paint(&pointer, |s| s.red().bold())
            ));
        }

        Some(snippet)
    }
}
