use std::fmt::Display;

/// Binary operators, loosest level first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Equals,
    /// `><`
    NotEquals,
    Less,
    Greater,
    LessEquals,
    GreaterEquals,
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
}

impl BinaryOperator {
    pub fn from_lexeme(lexeme: &str) -> Option<Self> {
        let op = match lexeme {
            "==" => BinaryOperator::Equals,
            "><" => BinaryOperator::NotEquals,
            "<" => BinaryOperator::Less,
            ">" => BinaryOperator::Greater,
            "<=" => BinaryOperator::LessEquals,
            ">=" => BinaryOperator::GreaterEquals,
            "+" => BinaryOperator::Add,
            "-" => BinaryOperator::Subtract,
            "*" => BinaryOperator::Multiply,
            "/" => BinaryOperator::Divide,
            "%" => BinaryOperator::Modulo,
            _ => return None,
        };
        Some(op)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOperator::Equals => "==",
            BinaryOperator::NotEquals => "><",
            BinaryOperator::Less => "<",
            BinaryOperator::Greater => ">",
            BinaryOperator::LessEquals => "<=",
            BinaryOperator::GreaterEquals => ">=",
            BinaryOperator::Add => "+",
            BinaryOperator::Subtract => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Modulo => "%",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Negate,
    Not,
}

impl UnaryOperator {
    pub fn from_lexeme(lexeme: &str) -> Option<Self> {
        match lexeme {
            "-" => Some(UnaryOperator::Negate),
            "!" => Some(UnaryOperator::Not),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UnaryOperator::Negate => "-",
            UnaryOperator::Not => "!",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Int(i64),
    Float(f64),
    Str(String),
    Char(char),
    Bool(bool),
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOp {
    pub left: Box<Expr>,
    pub op: BinaryOperator,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryOp {
    pub op: UnaryOperator,
    pub right: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub value: LiteralValue,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: String,
    pub args: Vec<Expr>,
}

/// `name = value`. Only variables can be assigned to.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignExpr {
    pub name: String,
    pub value: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Binary(BinaryOp),
    Unary(UnaryOp),
    Literal(Literal),
    Variable(Variable),
    Call(CallExpr),
    Assign(AssignExpr),
}

impl Expr {
    pub fn binary(left: Expr, op: BinaryOperator, right: Expr) -> Self {
        Expr::Binary(BinaryOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        })
    }

    pub fn unary(op: UnaryOperator, right: Expr) -> Self {
        Expr::Unary(UnaryOp {
            op,
            right: Box::new(right),
        })
    }

    pub fn literal(value: LiteralValue) -> Self {
        Expr::Literal(Literal { value })
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Expr::Variable(Variable { name: name.into() })
    }
}

impl Display for LiteralValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LiteralValue::Int(value) => write!(f, "{}", value),
            LiteralValue::Float(value) => write!(f, "{:?}", value),
            LiteralValue::Str(value) => write!(f, "\"{}\"", value),
            LiteralValue::Char(value) => write!(f, "'{}'", value),
            LiteralValue::Bool(value) => write!(f, "{}", value),
        }
    }
}

/// Fully parenthesised, so the tree shape is visible.
impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Binary(binary) => write!(
                f,
                "({} {} {})",
                binary.left,
                binary.op.as_str(),
                binary.right
            ),
            Expr::Unary(unary) => write!(f, "({}{})", unary.op.as_str(), unary.right),
            Expr::Literal(literal) => write!(f, "{}", literal.value),
            Expr::Variable(variable) => write!(f, "{}", variable.name),
            Expr::Call(call) => {
                write!(f, "{}(", call.callee)?;
                for (i, arg) in call.args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
            Expr::Assign(assign) => write!(f, "({} = {})", assign.name, assign.value),
        }
    }
}
