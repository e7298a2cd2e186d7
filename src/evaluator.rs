use crate::ast::{Operator, Token};
use crate::decimal::Decimal;

/// Errors that can occur while evaluating a postfix sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// Number text that does not parse as a decimal
    InvalidNumber(String),

    /// An operator found fewer operands on the stack than it needs
    MissingOperand(Operator),

    /// Right-hand operand of `/` or `%` is zero
    DivisionByZero,

    /// Operator symbol outside the supported set
    UnsupportedOperator(String),

    /// The sequence did not reduce to exactly one value
    InvalidExpression,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvalError::InvalidNumber(_) => write!(f, "Invalid number"),
            EvalError::MissingOperand(_) => write!(f, "Missing operand"),
            EvalError::DivisionByZero => write!(f, "Division by zero"),
            EvalError::UnsupportedOperator(_) => write!(f, "Unsupported operator"),
            EvalError::InvalidExpression => write!(f, "Invalid expression"),
        }
    }
}

impl std::error::Error for EvalError {}

/// Applies a binary operator to two operands.
///
/// # Errors
///
/// [`EvalError::DivisionByZero`] when `right` is zero for `/` or `%`, and
/// [`EvalError::UnsupportedOperator`] when `op` is unary.
pub fn apply_binary(op: Operator, left: &Decimal, right: &Decimal) -> Result<Decimal, EvalError> {
    match op {
        Operator::Add => Ok(left.add(right)),
        Operator::Subtract => Ok(left.sub(right)),
        Operator::Multiply => Ok(left.mul(right)),
        Operator::Divide => left.checked_div(right).ok_or(EvalError::DivisionByZero),
        Operator::Modulo => left.checked_rem(right).ok_or(EvalError::DivisionByZero),
        Operator::Negate => Err(EvalError::UnsupportedOperator(op.symbol().to_string())),
    }
}

/// Stack machine over postfix tokens.
///
/// Each evaluator owns its value stack; nothing survives between calls to
/// [`Evaluator::eval`].
#[derive(Default)]
pub struct Evaluator {
    stack: Vec<Decimal>,
}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    fn pop_operand(&mut self, op: Operator) -> Result<Decimal, EvalError> {
        self.stack.pop().ok_or(EvalError::MissingOperand(op))
    }

    fn apply(&mut self, op: Operator) -> Result<(), EvalError> {
        if self.stack.len() < op.arity() {
            return Err(EvalError::MissingOperand(op));
        }

        let value = match op {
            Operator::Negate => self.pop_operand(op)?.neg(),
            _ => {
                let right = self.pop_operand(op)?;
                let left = self.pop_operand(op)?;
                apply_binary(op, &left, &right)?
            }
        };
        self.stack.push(value);
        Ok(())
    }

    /// Evaluates a postfix sequence to a single value.
    ///
    /// Stops at the first error; no partial result is returned.
    pub fn eval(&mut self, postfix: &[Token]) -> Result<Decimal, EvalError> {
        self.stack.clear();

        for token in postfix {
            match token {
                Token::Number(text) => {
                    let value = text
                        .parse::<Decimal>()
                        .map_err(|_| EvalError::InvalidNumber(text.clone()))?;
                    self.stack.push(value);
                }
                Token::Operator(op) => self.apply(*op)?,
                Token::LParen | Token::RParen => {
                    return Err(EvalError::UnsupportedOperator(token.to_string()));
                }
            }
        }

        match (self.stack.pop(), self.stack.is_empty()) {
            (Some(value), true) => Ok(value),
            _ => Err(EvalError::InvalidExpression),
        }
    }
}

/// Evaluates a postfix sequence with a fresh [`Evaluator`].
///
/// ```
/// use decicalc::{Decimal, Operator, Token, eval_postfix};
///
/// let postfix = vec![
///     Token::number("10"),
///     Token::number("3"),
///     Token::Operator(Operator::Modulo),
/// ];
/// assert_eq!(eval_postfix(&postfix).unwrap(), Decimal::from(1));
/// ```
pub fn eval_postfix(postfix: &[Token]) -> Result<Decimal, EvalError> {
    Evaluator::new().eval(postfix)
}
