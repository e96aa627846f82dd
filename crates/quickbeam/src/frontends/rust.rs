//! Rust-syntax frontend for Quickbeam
//!
//! Source text is parsed by `syn` as the statements of a block, and the
//! resulting `syn` tree is lowered into [`crate::ast`]. Only the subset
//! of Rust that has a direct counterpart in the evaluator is accepted:
//!
//! | Rust                      | Lowered to            |
//! |---------------------------|-----------------------|
//! | `let x = e;`              | `Statement::Let`      |
//! | `return e`                | `Statement::Return`   |
//! | `1`, `true`, `"s"`        | literals              |
//! | `-e`, `!e`                | `Expression::Prefix`  |
//! | `a + b` (`+ - * / < > == !=`) | `Expression::Infix` |
//! | `if c { .. } else { .. }` | `Expression::If`      |
//! | `\|a, b\| body`           | `Expression::Function`|
//! | `f(a, b)`                 | `Expression::Call`    |
//! | `[a, b]`, `a[i]`          | array and index       |
//! | `hash! { k => v, .. }`    | `Expression::Hash`    |
//!
//! Everything else is rejected with a [`ParseError`] that names the
//! construct and quotes it.

use proc_macro2::Span;
use quote::ToTokens;
use syn::parse::{Parse, ParseStream, Parser};
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;

use crate::ast::{
    BlockStatement, Expression, FunctionLiteral, InfixOperator, PrefixOperator, Program,
    Statement,
};
use crate::frontend::{LanguageFrontend, ParseError, SourceLocation};

/// Name used for locations in parse errors.
const SOURCE_NAME: &str = "<input>";

/// Rust-syntax frontend.
///
/// # Example
///
/// ```
/// use quickbeam::frontends::RustFrontend;
/// use quickbeam::LanguageFrontend;
///
/// let frontend = RustFrontend::new();
/// let program = frontend.parse("let x = 5; x * 2").unwrap();
/// assert_eq!(program.to_string(), "let x = 5;(x * 2)");
/// assert_eq!(frontend.name(), "Rust");
/// assert_eq!(frontend.file_extension(), "rs");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RustFrontend;

impl RustFrontend {
    /// Create a new Rust frontend.
    pub fn new() -> Self {
        Self
    }
}

impl LanguageFrontend for RustFrontend {
    fn parse(&self, source: &str) -> Result<Program, ParseError> {
        let stmts = syn::Block::parse_within
            .parse_str(source)
            .map_err(syntax_error)?;

        let statements = stmts
            .iter()
            .map(lower_stmt)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Program::new(statements))
    }

    fn name(&self) -> &str {
        "Rust"
    }

    fn file_extension(&self) -> &str {
        "rs"
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════════════════

fn location(span: Span) -> SourceLocation {
    let start = span.start();
    SourceLocation::new(SOURCE_NAME, start.line, start.column + 1)
}

fn syntax_error(err: syn::Error) -> ParseError {
    ParseError::new(format!("Rust syntax error: {}", err)).with_location(location(err.span()))
}

/// Reject `node`, quoting its tokens.
fn unsupported<T: ToTokens>(what: &str, node: &T) -> ParseError {
    ParseError::new(format!("unsupported {}", what))
        .with_location(location(node.span()))
        .with_snippet(node.to_token_stream().to_string())
}

// ═══════════════════════════════════════════════════════════════════════
// Statements
// ═══════════════════════════════════════════════════════════════════════

fn lower_stmt(stmt: &syn::Stmt) -> Result<Statement, ParseError> {
    match stmt {
        syn::Stmt::Local(local) => lower_local(local),
        syn::Stmt::Expr(expr, _) => lower_expr_stmt(expr),
        syn::Stmt::Macro(stmt_mac) => Ok(Statement::Expression(lower_macro(&stmt_mac.mac)?)),
        syn::Stmt::Item(item) => Err(unsupported("item", item)),
    }
}

fn lower_local(local: &syn::Local) -> Result<Statement, ParseError> {
    let name = match &local.pat {
        syn::Pat::Ident(pat) => binding_name(pat)?,
        other => return Err(unsupported("`let` pattern", other)),
    };

    let init = local
        .init
        .as_ref()
        .ok_or_else(|| unsupported("`let` without initializer", local))?;
    if init.diverge.is_some() {
        return Err(unsupported("`let ... else`", local));
    }

    Ok(Statement::Let {
        name,
        value: lower_expr(&init.expr)?,
    })
}

/// Lower an expression that stands in statement position, where
/// `return` is allowed.
fn lower_expr_stmt(expr: &syn::Expr) -> Result<Statement, ParseError> {
    match expr {
        syn::Expr::Return(ret) => match &ret.expr {
            Some(value) => Ok(Statement::Return(lower_expr(value)?)),
            None => Err(unsupported("`return` without a value", ret)),
        },
        other => Ok(Statement::Expression(lower_expr(other)?)),
    }
}

fn lower_block(block: &syn::Block) -> Result<BlockStatement, ParseError> {
    let statements = block
        .stmts
        .iter()
        .map(lower_stmt)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(BlockStatement::new(statements))
}

/// A closure body: a block is used as-is, an expression becomes a
/// single-statement block.
fn lower_body(body: &syn::Expr) -> Result<BlockStatement, ParseError> {
    match body {
        syn::Expr::Block(block) if block.label.is_none() => lower_block(&block.block),
        other => Ok(BlockStatement::new(vec![lower_expr_stmt(other)?])),
    }
}

fn binding_name(pat: &syn::PatIdent) -> Result<String, ParseError> {
    if pat.by_ref.is_some() || pat.subpat.is_some() {
        return Err(unsupported("binding pattern", pat));
    }
    Ok(pat.ident.to_string())
}

// ═══════════════════════════════════════════════════════════════════════
// Expressions
// ═══════════════════════════════════════════════════════════════════════

fn lower_expr(expr: &syn::Expr) -> Result<Expression, ParseError> {
    match expr {
        syn::Expr::Lit(lit) => lower_lit(&lit.lit),

        syn::Expr::Path(path) => {
            if path.qself.is_some() {
                return Err(unsupported("qualified path", path));
            }
            path.path
                .get_ident()
                .map(|ident| Expression::Identifier(ident.to_string()))
                .ok_or_else(|| unsupported("path", path))
        }

        syn::Expr::Unary(unary) => {
            let operator = match unary.op {
                syn::UnOp::Not(_) => PrefixOperator::Bang,
                syn::UnOp::Neg(_) => PrefixOperator::Minus,
                _ => return Err(unsupported("unary operator", unary)),
            };
            Ok(Expression::prefix(operator, lower_expr(&unary.expr)?))
        }

        syn::Expr::Binary(binary) => {
            let operator = lower_bin_op(&binary.op)?;
            let left = lower_expr(&binary.left)?;
            let right = lower_expr(&binary.right)?;
            Ok(Expression::infix(left, operator, right))
        }

        syn::Expr::Paren(paren) => lower_expr(&paren.expr),
        syn::Expr::Group(group) => lower_expr(&group.expr),

        syn::Expr::If(expr_if) => lower_if(expr_if),
        syn::Expr::Closure(closure) => lower_closure(closure),

        syn::Expr::Call(call) => {
            let function = lower_expr(&call.func)?;
            let arguments = lower_exprs(call.args.iter())?;
            Ok(Expression::call(function, arguments))
        }

        syn::Expr::Array(array) => Ok(Expression::Array(lower_exprs(array.elems.iter())?)),

        syn::Expr::Index(index) => {
            let left = lower_expr(&index.expr)?;
            let index = lower_expr(&index.index)?;
            Ok(Expression::index(left, index))
        }

        syn::Expr::Macro(mac) => lower_macro(&mac.mac),

        syn::Expr::Return(ret) => Err(unsupported("`return` in expression position", ret)),
        other => Err(unsupported(expr_kind(other), other)),
    }
}

fn lower_exprs<'a>(
    exprs: impl Iterator<Item = &'a syn::Expr>,
) -> Result<Vec<Expression>, ParseError> {
    exprs.map(lower_expr).collect()
}

fn lower_lit(lit: &syn::Lit) -> Result<Expression, ParseError> {
    match lit {
        syn::Lit::Int(int) => {
            if !int.suffix().is_empty() {
                return Err(unsupported("integer suffix", int));
            }
            let value = int.base10_parse::<i64>().map_err(syntax_error)?;
            Ok(Expression::Integer(value))
        }
        syn::Lit::Bool(b) => Ok(Expression::Boolean(b.value)),
        syn::Lit::Str(s) => Ok(Expression::String(s.value())),
        other => Err(unsupported("literal", other)),
    }
}

fn lower_bin_op(op: &syn::BinOp) -> Result<InfixOperator, ParseError> {
    match op {
        syn::BinOp::Add(_) => Ok(InfixOperator::Plus),
        syn::BinOp::Sub(_) => Ok(InfixOperator::Minus),
        syn::BinOp::Mul(_) => Ok(InfixOperator::Asterisk),
        syn::BinOp::Div(_) => Ok(InfixOperator::Slash),
        syn::BinOp::Lt(_) => Ok(InfixOperator::Lt),
        syn::BinOp::Gt(_) => Ok(InfixOperator::Gt),
        syn::BinOp::Eq(_) => Ok(InfixOperator::Eq),
        syn::BinOp::Ne(_) => Ok(InfixOperator::NotEq),
        other => Err(unsupported("operator", other)),
    }
}

fn lower_if(expr_if: &syn::ExprIf) -> Result<Expression, ParseError> {
    let condition = lower_expr(&expr_if.cond)?;
    let consequence = lower_block(&expr_if.then_branch)?;

    let alternative = match &expr_if.else_branch {
        None => None,
        Some((_, else_expr)) => Some(match else_expr.as_ref() {
            syn::Expr::Block(block) => lower_block(&block.block)?,
            // `else if` nests as the only statement of the alternative
            syn::Expr::If(nested) => BlockStatement::new(vec![lower_if(nested)?.into()]),
            other => return Err(unsupported("`else` branch", other)),
        }),
    };

    Ok(Expression::if_(condition, consequence, alternative))
}

fn lower_closure(closure: &syn::ExprClosure) -> Result<Expression, ParseError> {
    if closure.asyncness.is_some() || closure.constness.is_some() {
        return Err(unsupported("closure qualifier", closure));
    }
    if !matches!(closure.output, syn::ReturnType::Default) {
        return Err(unsupported("closure return type", &closure.output));
    }

    let parameters = closure
        .inputs
        .iter()
        .map(|input| match input {
            syn::Pat::Ident(pat) => binding_name(pat),
            other => Err(unsupported("closure parameter", other)),
        })
        .collect::<Result<Vec<_>, _>>()?;
    let body = lower_body(&closure.body)?;

    Ok(Expression::Function(FunctionLiteral::new(parameters, body)))
}

// ═══════════════════════════════════════════════════════════════════════
// hash! { k => v }
// ═══════════════════════════════════════════════════════════════════════

struct HashEntry {
    key: syn::Expr,
    value: syn::Expr,
}

impl Parse for HashEntry {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let key = input.parse()?;
        input.parse::<syn::Token![=>]>()?;
        let value = input.parse()?;
        Ok(HashEntry { key, value })
    }
}

fn lower_macro(mac: &syn::Macro) -> Result<Expression, ParseError> {
    if !mac.path.is_ident("hash") {
        return Err(unsupported("macro", mac));
    }

    let entries = mac
        .parse_body_with(Punctuated::<HashEntry, syn::Token![,]>::parse_terminated)
        .map_err(syntax_error)?;

    let pairs = entries
        .iter()
        .map(|entry| Ok((lower_expr(&entry.key)?, lower_expr(&entry.value)?)))
        .collect::<Result<Vec<_>, ParseError>>()?;

    Ok(Expression::Hash(pairs))
}

fn expr_kind(expr: &syn::Expr) -> &'static str {
    match expr {
        syn::Expr::Assign(_) => "assignment",
        syn::Expr::Block(_) => "block expression",
        syn::Expr::Field(_) => "field access",
        syn::Expr::ForLoop(_) | syn::Expr::Loop(_) | syn::Expr::While(_) => "loop",
        syn::Expr::Match(_) => "match expression",
        syn::Expr::MethodCall(_) => "method call",
        syn::Expr::Range(_) => "range",
        syn::Expr::Reference(_) => "reference",
        syn::Expr::Struct(_) => "struct literal",
        syn::Expr::Tuple(_) => "tuple",
        _ => "expression",
    }
}
