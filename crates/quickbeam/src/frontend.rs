//! Language frontend trait for Quickbeam
//!
//! The evaluator only consumes a [`Program`]. Turning source text into one
//! is the job of a frontend:
//!
//! ```text
//! Source Code → [Frontend] → Program → [Evaluator] → Value
//! ```
//!
//! A frontend parses source code and lowers it into the evaluator's
//! syntax tree.

use std::fmt;

use crate::ast::Program;

// ═══════════════════════════════════════════════════════════════════════
// ERROR TYPES
// ═══════════════════════════════════════════════════════════════════════

/// Error that occurred during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Human-readable error message
    pub message: String,

    /// Optional source location
    pub location: Option<SourceLocation>,

    /// Optional source snippet for context
    pub snippet: Option<String>,
}

impl ParseError {
    /// Create a new parse error with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: None,
            snippet: None,
        }
    }

    /// Add location information to the error.
    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// Add a source snippet for context.
    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parse error: {}", self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " at {}:{}:{}", loc.file, loc.line, loc.column)?;
        }
        if let Some(snippet) = &self.snippet {
            write!(f, "\n{}", snippet)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Source code location for error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// File name or identifier
    pub file: String,

    /// Line number (1-indexed)
    pub line: usize,

    /// Column number (1-indexed)
    pub column: usize,
}

impl SourceLocation {
    /// Create a new source location.
    pub fn new(file: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// LANGUAGE FRONTEND TRAIT
// ═══════════════════════════════════════════════════════════════════════

/// Language frontend interface.
///
/// This trait is the boundary between a concrete surface syntax and the
/// language-agnostic evaluator core.
///
/// # Example Implementation
///
/// ```
/// use quickbeam::ast::{Expression, Program};
/// use quickbeam::frontend::{LanguageFrontend, ParseError};
///
/// /// Accepts a single integer literal.
/// struct IntegerOnly;
///
/// impl LanguageFrontend for IntegerOnly {
///     fn parse(&self, source: &str) -> Result<Program, ParseError> {
///         let n: i64 = source
///             .trim()
///             .parse()
///             .map_err(|_| ParseError::new("expected an integer"))?;
///         Ok(Program::new(vec![Expression::Integer(n).into()]))
///     }
///
///     fn name(&self) -> &str {
///         "IntegerOnly"
///     }
///
///     fn file_extension(&self) -> &str {
///         "int"
///     }
/// }
///
/// assert!(IntegerOnly.parse("42").is_ok());
/// assert!(IntegerOnly.parse("x").is_err());
/// ```
pub trait LanguageFrontend: Send + Sync {
    /// Parse source code into a program.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the source cannot be parsed, or uses a
    /// construct the evaluator has no node for.
    fn parse(&self, source: &str) -> Result<Program, ParseError>;

    /// Return the name of this language frontend.
    fn name(&self) -> &str;

    /// Return the file extension for this language.
    fn file_extension(&self) -> &str;
}
