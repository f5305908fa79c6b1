//! Lexeme dispatch.
//!
//! One rule set per token class. Closing symbols (`}` `;` `)`) are checked
//! first and may pop contexts; opening symbols (`{` `(`) may push them;
//! keywords may open a construct; operands may wrap themselves in
//! `expression`/`term`. Everything else is appended to the innermost open
//! construct as a leaf.

use jack_ir::{ConstructId, ConstructKind, Span, TerminalKind};
use jack_lexer_core::TokenClass;
use tracing::debug;

use super::IncrementalBuilder;
use crate::error::{ParseError, StructuralErrorKind};
use crate::skeleton;

use ConstructKind::{
    DoStatement, Expression, ExpressionList, ParameterList, Root, Statements, SubroutineBody,
    SubroutineDec, Term,
};

impl IncrementalBuilder {
    pub(super) fn dispatch(
        &mut self,
        class: TokenClass,
        text: &str,
        span: Span,
    ) -> Result<(), ParseError> {
        match class {
            TokenClass::Symbol => match text {
                "}" => self.close_brace(span),
                ";" => self.close_statement(span),
                ")" => self.close_paren(span),
                "[" => Err(ParseError::NotImplemented { symbol: '[', span }),
                "]" => Err(ParseError::NotImplemented { symbol: ']', span }),
                "{" => {
                    self.open_brace(span);
                    Ok(())
                }
                "(" => {
                    self.open_paren(span);
                    Ok(())
                }
                _ => {
                    self.handle_symbol(text, span);
                    Ok(())
                }
            },
            TokenClass::Keyword => {
                self.handle_keyword(text, span);
                Ok(())
            }
            TokenClass::Identifier => {
                self.handle_operand(TerminalKind::Identifier, text, span);
                Ok(())
            }
            TokenClass::IntegerConstant => {
                self.handle_operand(TerminalKind::IntegerConstant, text, span);
                Ok(())
            }
        }
    }

    // Closing symbols

    /// `}` ends a subroutine (statements, body and declaration together)
    /// or whatever construct holds the matching `{` as a leaf.
    fn close_brace(&mut self, span: Span) -> Result<(), ParseError> {
        match self.stack.peek_kind() {
            Statements => {
                self.close(1, '}', span)?;
                self.append(TerminalKind::Symbol, "}", span);
                self.close(2, '}', span)
            }
            Root => Err(root_popped('}', span)),
            _ => {
                self.append(TerminalKind::Symbol, "}", span);
                self.close(1, '}', span)
            }
        }
    }

    /// `;` ends a `return` or `do` statement.
    fn close_statement(&mut self, span: Span) -> Result<(), ParseError> {
        match self.stack.peek_kind() {
            context if context.is_statement() => {
                self.append(TerminalKind::Symbol, ";", span);
                self.close(1, ';', span)
            }
            Root => Err(root_popped(';', span)),
            context => Err(ParseError::structural(
                StructuralErrorKind::MisplacedTerminator { context },
                span,
            )),
        }
    }

    /// `)` ends an expression (and the call argument list around it, if
    /// any), a parameter list, or an empty argument list.
    fn close_paren(&mut self, span: Span) -> Result<(), ParseError> {
        match self.stack.peek_kind() {
            Expression => {
                self.close(1, ')', span)?;
                self.append(TerminalKind::Symbol, ")", span);
                self.stack.pop_if(&[Term, ExpressionList]);
                Ok(())
            }
            ParameterList | ExpressionList => {
                self.close(1, ')', span)?;
                self.append(TerminalKind::Symbol, ")", span);
                Ok(())
            }
            Root => Err(root_popped(')', span)),
            context => Err(unmatched(')', context, span)),
        }
    }

    // Opening symbols

    /// `{` after a subroutine header opens its body and statement list.
    fn open_brace(&mut self, span: Span) {
        if self.stack.context_is(&[SubroutineDec]) {
            let body = self.open(SubroutineBody, span);
            self.tree.add_terminal(body, TerminalKind::Symbol, "{", span);
            self.open(Statements, span);
        } else {
            self.append(TerminalKind::Symbol, "{", span);
        }
    }

    /// `(` opens a parameter list, a call's argument list, or a
    /// parenthesized sub-expression.
    fn open_paren(&mut self, span: Span) {
        match self.stack.peek_kind() {
            SubroutineDec => {
                self.append(TerminalKind::Symbol, "(", span);
                self.open(ParameterList, span);
            }
            DoStatement => {
                self.append(TerminalKind::Symbol, "(", span);
                self.open(ExpressionList, span);
            }
            ExpressionList | Expression | Term => {
                if !self.stack.context_is(&[Expression]) {
                    self.open(Expression, span);
                }
                self.open(Term, span);
                self.append(TerminalKind::Symbol, "(", span);
                self.open(Expression, span);
            }
            _ => self.append(TerminalKind::Symbol, "(", span),
        }
    }

    // Everything else

    /// Binary operators end the term before them.
    fn handle_symbol(&mut self, text: &str, span: Span) {
        if matches!(text, "+" | "*" | "/") {
            self.stack.pop_if(&[Term]);
        }
        self.append(TerminalKind::Symbol, text, span);
    }

    fn handle_keyword(&mut self, text: &str, span: Span) {
        match skeleton::keyword_construct(text) {
            Some(kind) => {
                let parent = self.stack.peek();
                let id = skeleton::instantiate(&mut self.tree, parent, kind, text, span);
                self.stack.push(id, kind);
                debug!(construct = %kind, depth = self.stack.depth(), "open");
            }
            None => self.append(TerminalKind::Keyword, text, span),
        }
    }

    /// Identifiers and integers inside an expression become terms.
    fn handle_operand(&mut self, kind: TerminalKind, text: &str, span: Span) {
        if self.stack.context_is(&[ExpressionList]) {
            self.open(Expression, span);
        }
        if self.stack.context_is(&[Expression]) {
            self.open(Term, span);
        }
        self.append(kind, text, span);
        self.stack.pop_if(&[Term]);
    }

    // Tree and stack primitives

    /// Attach a new construct to the innermost one and make it innermost.
    fn open(&mut self, kind: ConstructKind, span: Span) -> ConstructId {
        let id = self.tree.add_construct(self.stack.peek(), kind, span);
        self.stack.push(id, kind);
        debug!(construct = %kind, depth = self.stack.depth(), "open");
        id
    }

    fn append(&mut self, kind: TerminalKind, text: &str, span: Span) {
        self.tree.add_terminal(self.stack.peek(), kind, text, span);
    }

    /// Pop `n` contexts on behalf of `symbol`.
    fn close(&mut self, n: usize, symbol: char, span: Span) -> Result<(), ParseError> {
        debug!(closing = %self.stack.peek_kind(), n, %symbol, "close");
        self.stack.pop(n).map_err(|_| root_popped(symbol, span))
    }
}

fn root_popped(symbol: char, span: Span) -> ParseError {
    ParseError::structural(StructuralErrorKind::RootPopped { symbol }, span)
}

fn unmatched(symbol: char, context: ConstructKind, span: Span) -> ParseError {
    ParseError::structural(StructuralErrorKind::UnmatchedClose { symbol, context }, span)
}
