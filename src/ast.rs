//! # Expression tokens
//!
//! This module defines the lexical vocabulary shared by every stage of the
//! evaluator:
//!
//! - **[tokens]** - Tokens produced by the lexer and reordered by the parser
//! - **[operators]** - Operators with their precedence and associativity
//!
//! ## Grammar
//!
//! ```text
//! expr    := term (('+' | '-') term)*
//! term    := unary (('*' | '/' | '%') unary)*
//! unary   := '-' unary | primary
//! primary := number | '(' expr ')'
//! number  := digit+ ('.' digit+)?
//! ```
//!
//! There is no unary plus, no exponent notation and no leading-dot literal
//! (`.5` is rejected).
//!
//! ## Operator table
//!
//! | Operator        | Precedence | Associativity |
//! |-----------------|------------|---------------|
//! | `u-`            | 3          | right         |
//! | `*` `/` `%`     | 2          | left          |
//! | `+` `-`         | 1          | left          |
pub mod operators;
pub mod tokens;

pub use operators::{Associativity, Operator};
pub use tokens::Token;
