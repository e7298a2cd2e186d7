use crate::ast::{Operator, Token};

/// Position of a character in the source, counted in characters from zero.
pub type Position = usize;

/// Errors raised while splitting an expression into tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A character outside the expression alphabet
    InvalidCharacter { ch: char, position: Position },

    /// An allowed character that cannot start or continue any token, such as
    /// the dot in `.5` or `1.`
    MalformedToken { text: String, position: Position },
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LexError::InvalidCharacter { ch, position } => {
                write!(f, "Invalid character '{}' at position {}", ch, position)
            }
            LexError::MalformedToken { text, position } => {
                write!(f, "Malformed token '{}' at position {}", text, position)
            }
        }
    }
}

impl std::error::Error for LexError {}

/// Whether `ch` may appear anywhere in an expression.
pub fn is_allowed_char(ch: char) -> bool {
    ch.is_ascii_digit()
        || ch.is_whitespace()
        || matches!(ch, '.' | '+' | '-' | '*' | '/' | '%' | '(' | ')')
}

pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }

    /// Reads `digit+ ('.' digit+)?`. A dot is only consumed when a digit
    /// follows it, so `1.` leaves the dot behind for the caller to reject.
    fn read_number(&mut self) -> Token {
        let mut number = String::new();
        let mut is_fraction = false;

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                number.push(ch);
                self.advance();
            } else if ch == '.'
                && !is_fraction
                && self.peek_char(1).is_some_and(|c| c.is_ascii_digit())
            {
                is_fraction = true;
                number.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        Token::Number(number)
    }

    fn operator(&mut self, op: Operator) -> Token {
        self.advance();
        Token::Operator(op)
    }

    /// Returns the next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        self.skip_whitespace();

        let token = match self.current_char() {
            None => return Ok(None),
            Some('+') => self.operator(Operator::Add),
            Some('-') => self.operator(Operator::Subtract),
            Some('*') => self.operator(Operator::Multiply),
            Some('/') => self.operator(Operator::Divide),
            Some('%') => self.operator(Operator::Modulo),
            Some('(') => {
                self.advance();
                Token::LParen
            }
            Some(')') => {
                self.advance();
                Token::RParen
            }
            Some(ch) if ch.is_ascii_digit() => self.read_number(),
            Some('.') => {
                return Err(LexError::MalformedToken {
                    text: ".".to_string(),
                    position: self.position,
                });
            }
            Some(ch) => {
                return Err(LexError::InvalidCharacter {
                    ch,
                    position: self.position,
                });
            }
        };

        Ok(Some(token))
    }
}

/// Splits `expr` into tokens, preserving source order.
///
/// The whole input is checked against the expression alphabet before any
/// token is produced, so a stray letter is always reported as an invalid
/// character even when a malformed literal precedes it.
///
/// ```
/// use decicalc::{Operator, Token, tokenize};
///
/// let tokens = tokenize("2.5 * (1-3)").unwrap();
/// assert_eq!(tokens[0], Token::number("2.5"));
/// assert_eq!(tokens[1], Token::Operator(Operator::Multiply));
/// assert_eq!(tokens.len(), 7);
/// ```
pub fn tokenize(expr: &str) -> Result<Vec<Token>, LexError> {
    if let Some((position, ch)) = expr.chars().enumerate().find(|(_, c)| !is_allowed_char(*c)) {
        return Err(LexError::InvalidCharacter { ch, position });
    }

    let mut lexer = Lexer::new(expr);
    let mut tokens = Vec::new();
    while let Some(token) = lexer.next_token()? {
        tokens.push(token);
    }

    tracing::trace!(count = tokens.len(), "tokenized expression");
    Ok(tokens)
}

#[test]
fn test_operators() {
    let mut lexer = Lexer::new("+ - * / %");
    assert_eq!(lexer.next_token(), Ok(Some(Token::Operator(Operator::Add))));
    assert_eq!(lexer.next_token(), Ok(Some(Token::Operator(Operator::Subtract))));
    assert_eq!(lexer.next_token(), Ok(Some(Token::Operator(Operator::Multiply))));
    assert_eq!(lexer.next_token(), Ok(Some(Token::Operator(Operator::Divide))));
    assert_eq!(lexer.next_token(), Ok(Some(Token::Operator(Operator::Modulo))));
    assert_eq!(lexer.next_token(), Ok(None));
}

#[test]
fn test_trailing_dot_is_left_behind() {
    let mut lexer = Lexer::new("7.");
    assert_eq!(lexer.next_token(), Ok(Some(Token::number("7"))));
    assert_eq!(
        lexer.next_token(),
        Err(LexError::MalformedToken {
            text: ".".to_string(),
            position: 1
        })
    );
}
