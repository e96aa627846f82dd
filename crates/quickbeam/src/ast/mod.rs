//! Syntax tree consumed by the evaluator
//!
//! The tree is produced by a frontend (see [`crate::frontend`]) or built by
//! hand by an embedder. It is assumed to be structurally valid: the node
//! set below is closed, so the evaluator never sees an unknown shape.

mod display;

use std::rc::Rc;

/// A whole top-level syntax unit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Statements in source order
    pub statements: Vec<Statement>,
}

impl Program {
    /// Create a program from its statements.
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }
}

/// A statement inside a program or block.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `let <name> = <value>;`
    Let {
        /// Bound identifier
        name: String,
        /// Initializer
        value: Expression,
    },

    /// `return <value>;`
    Return(Expression),

    /// A bare expression used as a statement
    Expression(Expression),
}

impl Statement {
    /// Create a `let` statement.
    pub fn let_(name: impl Into<String>, value: Expression) -> Self {
        Statement::Let {
            name: name.into(),
            value,
        }
    }
}

/// A braced sequence of statements (function bodies, branch bodies).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockStatement {
    /// Statements in source order
    pub statements: Vec<Statement>,
}

impl BlockStatement {
    /// Create a block from its statements.
    pub fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }
}

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrefixOperator {
    /// Logical negation `!`
    Bang,
    /// Numeric negation `-`
    Minus,
}

/// Infix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InfixOperator {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `==`
    Eq,
    /// `!=`
    NotEq,
}

impl PrefixOperator {
    /// The operator as written in source.
    pub fn as_str(self) -> &'static str {
        match self {
            PrefixOperator::Bang => "!",
            PrefixOperator::Minus => "-",
        }
    }
}

impl InfixOperator {
    /// The operator as written in source.
    pub fn as_str(self) -> &'static str {
        match self {
            InfixOperator::Plus => "+",
            InfixOperator::Minus => "-",
            InfixOperator::Asterisk => "*",
            InfixOperator::Slash => "/",
            InfixOperator::Lt => "<",
            InfixOperator::Gt => ">",
            InfixOperator::Eq => "==",
            InfixOperator::NotEq => "!=",
        }
    }
}

/// A function literal: parameter names and body.
///
/// Both parts sit behind `Rc` so that every Function value created from
/// this literal refers to the same tree instead of copying it.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionLiteral {
    /// Parameter names in declaration order
    pub parameters: Rc<[String]>,

    /// Function body
    pub body: Rc<BlockStatement>,
}

impl FunctionLiteral {
    /// Create a function literal.
    pub fn new<I, S>(parameters: I, body: BlockStatement) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            parameters: parameters.into_iter().map(Into::into).collect(),
            body: Rc::new(body),
        }
    }
}

/// An expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Name reference
    Identifier(String),

    /// Integer literal
    Integer(i64),

    /// Boolean literal
    Boolean(bool),

    /// String literal
    String(String),

    /// `<op><right>`
    Prefix {
        /// Operator
        operator: PrefixOperator,
        /// Operand
        right: Box<Expression>,
    },

    /// `<left> <op> <right>`
    Infix {
        /// Left operand
        left: Box<Expression>,
        /// Operator
        operator: InfixOperator,
        /// Right operand
        right: Box<Expression>,
    },

    /// `if <condition> { .. } else { .. }`
    If {
        /// Condition
        condition: Box<Expression>,
        /// Taken when the condition is truthy
        consequence: BlockStatement,
        /// Taken otherwise, if present
        alternative: Option<BlockStatement>,
    },

    /// Function literal
    Function(FunctionLiteral),

    /// `<function>(<arguments>)`
    Call {
        /// Callee
        function: Box<Expression>,
        /// Arguments, evaluated left to right
        arguments: Vec<Expression>,
    },

    /// `[a, b, c]`
    Array(Vec<Expression>),

    /// `<left>[<index>]`
    Index {
        /// Indexed value
        left: Box<Expression>,
        /// Index or key
        index: Box<Expression>,
    },

    /// `{k: v, ...}` in source order
    Hash(Vec<(Expression, Expression)>),
}

impl Expression {
    /// Identifier reference.
    pub fn ident(name: impl Into<String>) -> Self {
        Expression::Identifier(name.into())
    }

    /// String literal.
    pub fn string(s: impl Into<String>) -> Self {
        Expression::String(s.into())
    }

    /// Prefix expression.
    pub fn prefix(operator: PrefixOperator, right: Expression) -> Self {
        Expression::Prefix {
            operator,
            right: Box::new(right),
        }
    }

    /// Infix expression.
    pub fn infix(left: Expression, operator: InfixOperator, right: Expression) -> Self {
        Expression::Infix {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    /// Conditional expression.
    pub fn if_(
        condition: Expression,
        consequence: BlockStatement,
        alternative: Option<BlockStatement>,
    ) -> Self {
        Expression::If {
            condition: Box::new(condition),
            consequence,
            alternative,
        }
    }

    /// Function literal.
    pub fn function<I, S>(parameters: I, body: BlockStatement) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Expression::Function(FunctionLiteral::new(parameters, body))
    }

    /// Call expression.
    pub fn call(function: Expression, arguments: Vec<Expression>) -> Self {
        Expression::Call {
            function: Box::new(function),
            arguments,
        }
    }

    /// Index expression.
    pub fn index(left: Expression, index: Expression) -> Self {
        Expression::Index {
            left: Box::new(left),
            index: Box::new(index),
        }
    }
}

impl From<i64> for Expression {
    fn from(n: i64) -> Self {
        Expression::Integer(n)
    }
}

impl From<bool> for Expression {
    fn from(b: bool) -> Self {
        Expression::Boolean(b)
    }
}

impl From<Expression> for Statement {
    fn from(expr: Expression) -> Self {
        Statement::Expression(expr)
    }
}
