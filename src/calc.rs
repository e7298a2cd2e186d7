//! Evaluation facade.
//!
//! [`evaluate`] chains the stages
//!
//! ```text
//! text -> tokenize -> to_postfix -> eval_postfix -> format_decimal -> text
//! ```
//!
//! and surfaces the first error unchanged. [`calculate`] is the older
//! two-operand entry point; it shares the arithmetic of the expression path
//! so both agree on results and on division by zero.

use crate::ast::Operator;
use crate::decimal::Decimal;
use crate::evaluator::{EvalError, apply_binary, eval_postfix};
use crate::lexer::{LexError, tokenize};
use crate::output::format_decimal;
use crate::parser::{ParseError, to_postfix};

/// Longest accepted expression, in characters.
pub const MAX_EXPRESSION_LEN: usize = 1000;

/// Flat classification of every failure the evaluator can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidCharacter,
    MalformedToken,
    MismatchedParentheses,
    InvalidNumber,
    MissingOperand,
    DivisionByZero,
    UnsupportedOperator,
    InvalidExpression,
    ExpressionTooLong,
}

/// Any error produced while evaluating an expression.
///
/// All variants stem from the input; none are transient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// Tokenizer error
    Lex(LexError),
    /// Parenthesis error
    Parse(ParseError),
    /// Evaluation error
    Eval(EvalError),
    /// Input longer than [`MAX_EXPRESSION_LEN`] characters
    ExpressionTooLong { length: usize },
}

impl CalcError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CalcError::Lex(LexError::InvalidCharacter { .. }) => ErrorKind::InvalidCharacter,
            CalcError::Lex(LexError::MalformedToken { .. }) => ErrorKind::MalformedToken,
            CalcError::Parse(ParseError::MismatchedParentheses) => ErrorKind::MismatchedParentheses,
            CalcError::Eval(EvalError::InvalidNumber(_)) => ErrorKind::InvalidNumber,
            CalcError::Eval(EvalError::MissingOperand(_)) => ErrorKind::MissingOperand,
            CalcError::Eval(EvalError::DivisionByZero) => ErrorKind::DivisionByZero,
            CalcError::Eval(EvalError::UnsupportedOperator(_)) => ErrorKind::UnsupportedOperator,
            CalcError::Eval(EvalError::InvalidExpression) => ErrorKind::InvalidExpression,
            CalcError::ExpressionTooLong { .. } => ErrorKind::ExpressionTooLong,
        }
    }
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalcError::Lex(e) => write!(f, "{}", e),
            CalcError::Parse(e) => write!(f, "{}", e),
            CalcError::Eval(e) => write!(f, "{}", e),
            CalcError::ExpressionTooLong { .. } => write!(f, "Expression too long"),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CalcError::Lex(e) => Some(e),
            CalcError::Parse(e) => Some(e),
            CalcError::Eval(e) => Some(e),
            CalcError::ExpressionTooLong { .. } => None,
        }
    }
}

impl From<LexError> for CalcError {
    fn from(e: LexError) -> Self {
        CalcError::Lex(e)
    }
}

impl From<ParseError> for CalcError {
    fn from(e: ParseError) -> Self {
        CalcError::Parse(e)
    }
}

impl From<EvalError> for CalcError {
    fn from(e: EvalError) -> Self {
        CalcError::Eval(e)
    }
}

/// Evaluates an infix expression and returns its value as canonical text.
///
/// The length limit is checked before anything is tokenized.
///
/// # Examples
///
/// ```
/// use decicalc::{ErrorKind, evaluate};
///
/// assert_eq!(evaluate("(1+2)*3").unwrap(), "9");
/// assert_eq!(evaluate("2.5*2").unwrap(), "5");
/// assert_eq!(evaluate("1/0").unwrap_err().kind(), ErrorKind::DivisionByZero);
/// ```
pub fn evaluate(expr: &str) -> Result<String, CalcError> {
    let length = expr.chars().count();
    if length > MAX_EXPRESSION_LEN {
        return Err(CalcError::ExpressionTooLong { length });
    }

    let tokens = tokenize(expr)?;
    let postfix = to_postfix(tokens)?;
    let value = eval_postfix(&postfix)?;
    Ok(format_decimal(&value))
}

/// Two-operand calculation on decimal literals.
///
/// Operands are parsed before the operator is looked at, so a bad number
/// wins over a bad operator.
///
/// ```
/// use decicalc::calculate;
///
/// assert_eq!(calculate("0.1", "+", "0.2").unwrap().to_string(), "0.3");
/// assert!(calculate("1", "^", "2").is_err());
/// ```
pub fn calculate(a: &str, op: &str, b: &str) -> Result<Decimal, CalcError> {
    let left = a
        .parse::<Decimal>()
        .map_err(|_| EvalError::InvalidNumber(a.to_string()))?;
    let right = b
        .parse::<Decimal>()
        .map_err(|_| EvalError::InvalidNumber(b.to_string()))?;

    let op = Operator::from_symbol(op)
        .filter(|op| op.arity() == 2)
        .ok_or_else(|| EvalError::UnsupportedOperator(op.to_string()))?;

    Ok(apply_binary(op, &left, &right)?)
}
