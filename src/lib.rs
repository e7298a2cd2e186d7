pub mod ast;
pub mod calc;
pub mod decimal;
pub mod evaluator;
pub mod history;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod server;

pub use ast::{Associativity, Operator, Token};
pub use calc::{CalcError, ErrorKind, MAX_EXPRESSION_LEN, calculate, evaluate};
pub use decimal::{Decimal, ParseDecimalError, WORKING_PRECISION};
pub use evaluator::{EvalError, Evaluator, eval_postfix};
pub use history::{HistoryEntry, HistoryLog};
pub use lexer::{LexError, Lexer, Position, tokenize};
pub use output::format_decimal;
pub use parser::{ParseError, Parser, to_postfix};
