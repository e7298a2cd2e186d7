//! Infix to postfix conversion (shunting-yard).

use crate::ast::{Operator, Token};

/// Errors raised while reordering tokens into postfix form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A `)` without a matching `(`, or a `(` never closed
    MismatchedParentheses,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::MismatchedParentheses => write!(f, "Mismatched parentheses"),
        }
    }
}

impl std::error::Error for ParseError {}

/// What the parser saw last. Used only to tell a negation from a subtraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Prev {
    Start,
    Number,
    Operator,
    OpenParen,
    CloseParen,
}

impl Prev {
    /// A `-` in this position has no left operand, so it negates.
    fn expects_operand(self) -> bool {
        matches!(self, Prev::Start | Prev::Operator | Prev::OpenParen)
    }
}

/// Entries of the operator stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StackEntry {
    Op(Operator),
    Open,
}

pub struct Parser {
    output: Vec<Token>,
    stack: Vec<StackEntry>,
    prev: Prev,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    pub fn new() -> Self {
        Parser {
            output: Vec::new(),
            stack: Vec::new(),
            prev: Prev::Start,
        }
    }

    fn push_operator(&mut self, op: Operator) {
        while let Some(&StackEntry::Op(top)) = self.stack.last() {
            if !top.yields_to(op) {
                break;
            }
            self.stack.pop();
            self.output.push(Token::Operator(top));
        }
        self.stack.push(StackEntry::Op(op));
    }

    fn close_group(&mut self) -> Result<(), ParseError> {
        loop {
            match self.stack.pop() {
                Some(StackEntry::Op(op)) => self.output.push(Token::Operator(op)),
                Some(StackEntry::Open) => return Ok(()),
                None => return Err(ParseError::MismatchedParentheses),
            }
        }
    }

    fn feed(&mut self, token: Token) -> Result<(), ParseError> {
        match token {
            Token::Number(_) => {
                self.output.push(token);
                self.prev = Prev::Number;
            }
            Token::Operator(op) => {
                let op = if op == Operator::Subtract && self.prev.expects_operand() {
                    Operator::Negate
                } else {
                    op
                };
                self.push_operator(op);
                self.prev = Prev::Operator;
            }
            Token::LParen => {
                self.stack.push(StackEntry::Open);
                self.prev = Prev::OpenParen;
            }
            Token::RParen => {
                self.close_group()?;
                self.prev = Prev::CloseParen;
            }
        }
        Ok(())
    }

    /// Consumes the whole token sequence and returns it in postfix order.
    pub fn parse(mut self, tokens: Vec<Token>) -> Result<Vec<Token>, ParseError> {
        for token in tokens {
            self.feed(token)?;
        }

        while let Some(entry) = self.stack.pop() {
            match entry {
                StackEntry::Op(op) => self.output.push(Token::Operator(op)),
                StackEntry::Open => return Err(ParseError::MismatchedParentheses),
            }
        }

        Ok(self.output)
    }
}

/// Converts infix tokens to postfix (Reverse Polish) order.
///
/// Operator placement is not validated here: `1 + * 2` converts without
/// complaint and is rejected later when the evaluator runs out of operands.
///
/// ```
/// use decicalc::{to_postfix, tokenize};
///
/// let postfix = to_postfix(tokenize("-3-2").unwrap()).unwrap();
/// let rendered: Vec<String> = postfix.iter().map(|t| t.to_string()).collect();
/// assert_eq!(rendered, ["3", "u-", "2", "-"]);
/// ```
pub fn to_postfix(tokens: Vec<Token>) -> Result<Vec<Token>, ParseError> {
    let postfix = Parser::new().parse(tokens)?;
    tracing::trace!(count = postfix.len(), "converted to postfix");
    Ok(postfix)
}
