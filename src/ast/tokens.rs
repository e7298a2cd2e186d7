use crate::ast::Operator;

/// A lexical token of an arithmetic expression.
///
/// Tokens are produced once by the lexer and consumed once by the parser;
/// whitespace never becomes a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Numeric literal, kept as its source text
    ///
    /// # Examples
    /// ```text
    /// 42
    /// 3.14
    /// 0.001
    /// ```
    Number(String),

    /// Arithmetic operator
    ///
    /// The lexer only ever emits binary operators. A `-` that denotes negation
    /// is reclassified to [`Operator::Negate`] by the parser.
    Operator(Operator),

    /// Left parenthesis
    LParen,

    /// Right parenthesis
    RParen,
}

impl Token {
    /// Shorthand for a number token.
    pub fn number(text: impl Into<String>) -> Self {
        Token::Number(text.into())
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Number(text) => write!(f, "{}", text),
            Token::Operator(op) => write!(f, "{}", op.symbol()),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
        }
    }
}
