/// Operator associativity, used to break ties between equal precedences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

/// Arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Subtract,
    /// Multiplication (`*`)
    Multiply,
    /// Division (`/`)
    Divide,
    /// Truncating remainder (`%`)
    Modulo,
    /// Unary minus (`u-`), only ever produced by the parser
    Negate,
}

impl Operator {
    /// Binding strength; higher binds tighter.
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Subtract => 1,
            Operator::Multiply | Operator::Divide | Operator::Modulo => 2,
            Operator::Negate => 3,
        }
    }

    pub fn associativity(self) -> Associativity {
        match self {
            Operator::Negate => Associativity::Right,
            _ => Associativity::Left,
        }
    }

    /// Number of operands consumed from the value stack.
    pub fn arity(self) -> usize {
        match self {
            Operator::Negate => 1,
            _ => 2,
        }
    }

    /// Printable symbol. Unary minus is written `u-` so postfix output stays
    /// unambiguous.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Modulo => "%",
            Operator::Negate => "u-",
        }
    }

    /// Looks up an operator by its symbol.
    ///
    /// ```
    /// use decicalc::Operator;
    ///
    /// assert_eq!(Operator::from_symbol("%"), Some(Operator::Modulo));
    /// assert_eq!(Operator::from_symbol("u-"), Some(Operator::Negate));
    /// assert_eq!(Operator::from_symbol("^"), None);
    /// ```
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Subtract),
            "*" => Some(Operator::Multiply),
            "/" => Some(Operator::Divide),
            "%" => Some(Operator::Modulo),
            "u-" => Some(Operator::Negate),
            _ => None,
        }
    }

    /// Whether `self`, sitting on top of the operator stack, must be emitted
    /// before `incoming` is pushed.
    pub fn yields_to(self, incoming: Operator) -> bool {
        match self.associativity() {
            Associativity::Left => self.precedence() >= incoming.precedence(),
            Associativity::Right => self.precedence() > incoming.precedence(),
        }
    }
}
