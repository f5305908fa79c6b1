//! Parse errors.
//!
//! Every failure carries the span of the lexeme that triggered it (or a
//! zero-width span at end of input) and maps onto one [`ErrorCode`].

use std::fmt;

use jack_diagnostic::{Diagnostic, ErrorCode};
use jack_ir::{ConstructKind, Span};

/// Why a lexeme could not be placed in the tree.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ParseError {
    /// The lexeme matches no token class.
    #[error("unrecognized lexeme `{lexeme}`")]
    Lexical { lexeme: String, span: Span },

    /// A closing symbol, or the end of input, does not fit the open contexts.
    #[error("{kind}")]
    Structural {
        kind: StructuralErrorKind,
        span: Span,
    },

    /// A symbol whose grammar the parser does not handle.
    #[error("`{symbol}` (array indexing) is not supported")]
    NotImplemented { symbol: char, span: Span },
}

/// The structural rule that was broken.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum StructuralErrorKind {
    /// Closing `symbol` would pop the root context.
    RootPopped { symbol: char },
    /// `symbol` has no matching open construct; `context` was innermost.
    UnmatchedClose {
        symbol: char,
        context: ConstructKind,
    },
    /// `;` outside a statement.
    MisplacedTerminator { context: ConstructKind },
    /// Input ended with `context` still open.
    Unclosed { context: ConstructKind },
}

impl fmt::Display for StructuralErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructuralErrorKind::RootPopped { symbol } => {
                write!(f, "`{symbol}` closes nothing: only the root is open")
            }
            StructuralErrorKind::UnmatchedClose { symbol, context } => {
                write!(f, "unmatched `{symbol}` inside `{context}`")
            }
            StructuralErrorKind::MisplacedTerminator { context } => {
                write!(f, "`;` outside a statement (inside `{context}`)")
            }
            StructuralErrorKind::Unclosed { context } => {
                write!(f, "input ended inside `{context}`")
            }
        }
    }
}

impl ParseError {
    pub(crate) fn structural(kind: StructuralErrorKind, span: Span) -> Self {
        ParseError::Structural { kind, span }
    }

    /// Source location of the failure.
    pub fn span(&self) -> Span {
        match self {
            ParseError::Lexical { span, .. }
            | ParseError::Structural { span, .. }
            | ParseError::NotImplemented { span, .. } => *span,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            ParseError::Lexical { .. } => ErrorCode::E0001,
            ParseError::Structural { kind, .. } => match kind {
                StructuralErrorKind::RootPopped { .. } => ErrorCode::E1001,
                StructuralErrorKind::UnmatchedClose { .. } => ErrorCode::E1002,
                StructuralErrorKind::MisplacedTerminator { .. } => ErrorCode::E1003,
                StructuralErrorKind::Unclosed { .. } => ErrorCode::E1004,
            },
            ParseError::NotImplemented { .. } => ErrorCode::E9001,
        }
    }

    /// Convert to a renderable diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let diag = Diagnostic::error(self.code()).with_message(self.to_string());
        match self {
            ParseError::Lexical { lexeme, span } => {
                let diag = diag.with_label(*span, "not a keyword, symbol, identifier or integer");
                if lexeme.chars().next().is_some_and(|c| c.is_ascii_digit()) {
                    diag.with_note("identifiers cannot start with a digit")
                } else {
                    diag
                }
            }
            ParseError::Structural { kind, span } => match kind {
                StructuralErrorKind::RootPopped { .. } => diag
                    .with_label(*span, "no open construct to close")
                    .with_note("every class has already been closed"),
                StructuralErrorKind::UnmatchedClose { context, .. } => diag
                    .with_label(*span, "nothing to close here")
                    .with_note(format!("innermost open construct: {context}")),
                StructuralErrorKind::MisplacedTerminator { context } => diag
                    .with_label(*span, "expected a `return` or `do` statement to end")
                    .with_note(format!("innermost open construct: {context}")),
                StructuralErrorKind::Unclosed { context } => diag
                    .with_label(*span, format!("`{context}` is still open"))
                    .with_note(format!("expected {}", expected_closer(*context))),
            },
            ParseError::NotImplemented { span, .. } => diag
                .with_label(*span, "unsupported here")
                .with_note("only keywords, identifiers, integers and the other symbols are parsed"),
        }
    }
}

/// What would have closed `context`.
fn expected_closer(context: ConstructKind) -> &'static str {
    match context {
        ConstructKind::Class
        | ConstructKind::SubroutineDec
        | ConstructKind::SubroutineBody
        | ConstructKind::Statements => "`}`",
        ConstructKind::ReturnStatement | ConstructKind::DoStatement => "`;`",
        ConstructKind::ParameterList
        | ConstructKind::ExpressionList
        | ConstructKind::Expression => "`)`",
        ConstructKind::Term => "an operator or `)`",
        ConstructKind::Root => "nothing",
    }
}
