#[derive(Debug, Clone, PartialEq)]
pub enum TokenType {
    // Identifiers and literals
    Identifier(String),
    StringLiteral(String),
    Number(String),

    // Type structure
    LeftBracket,
    RightBracket,
    Plus,
    Question,

    // Annotation punctuation
    LeftParen,
    RightParen,
    Comma,
    Equal,

    /// Any other single character; only meaningful inside annotations
    Symbol(char),

    // Special
    Eof,
}

#[derive(Debug, Clone)]
pub struct Token {
    pub token_type: TokenType,
    /// 1-based column of the first character
    pub column: usize,
    /// 1-based column of the last character
    pub end_column: usize,
}

/// Splits a raw womtool type declaration into tokens.
///
/// The lexer never fails: characters with no structural meaning become
/// [`TokenType::Symbol`] and an unterminated string literal runs to the end
/// of the input.
pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
        }
    }

    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();
            match self.next_token() {
                Some(token) => tokens.push(token),
                None => break,
            }
        }

        let column = self.position + 1;
        tokens.push(Token {
            token_type: TokenType::Eof,
            column,
            end_column: column,
        });

        tokens
    }

    fn next_token(&mut self) -> Option<Token> {
        let start_column = self.position + 1;
        let ch = self.advance()?;

        let token_type = match ch {
            '[' => TokenType::LeftBracket,
            ']' => TokenType::RightBracket,
            '+' => TokenType::Plus,
            '?' => TokenType::Question,
            '(' => TokenType::LeftParen,
            ')' => TokenType::RightParen,
            ',' => TokenType::Comma,
            '=' => TokenType::Equal,
            '"' => TokenType::StringLiteral(self.read_string()),
            _ if ch.is_ascii_digit() || (ch == '-' && self.peek().is_some_and(|c| c.is_ascii_digit())) => {
                let mut value = String::from(ch);
                value.push_str(&self.read_while(|c| c.is_ascii_alphanumeric() || c == '.'));
                TokenType::Number(value)
            }
            _ if ch.is_alphabetic() || ch == '_' => {
                let mut value = String::from(ch);
                value.push_str(&self.read_while(|c| c.is_alphanumeric() || c == '_'));
                TokenType::Identifier(value)
            }
            _ => TokenType::Symbol(ch),
        };

        Some(Token {
            token_type,
            column: start_column,
            end_column: self.position,
        })
    }

    fn read_string(&mut self) -> String {
        let mut value = String::new();

        while let Some(ch) = self.advance() {
            match ch {
                '"' => break,
                '\\' => {
                    if let Some(escaped) = self.advance() {
                        value.push(escaped);
                    }
                }
                _ => value.push(ch),
            }
        }

        value
    }

    fn skip_whitespace(&mut self) {
        self.read_while(char::is_whitespace);
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        Some(ch)
    }

    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn read_while<F>(&mut self, mut predicate: F) -> String
    where
        F: FnMut(char) -> bool,
    {
        let mut value = String::new();

        while !self.is_at_end() {
            match self.peek() {
                Some(ch) if predicate(ch) => {
                    value.push(ch);
                    self.position += 1;
                }
                _ => break,
            }
        }

        value
    }
}
