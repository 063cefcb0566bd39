//! Recursive-descent parser that evaluates while it parses.
//!
//! Grammar, lowest precedence first:
//!
//! ```text
//! expression := term (('+' | '-') term)*
//! term       := factor (('*' | '/') factor)*
//! factor     := ('+' | '-')* primary
//! primary    := NUMBER | '(' expression ')'
//! ```
//!
//! Binary operators are left-associative: each rule keeps a running value and
//! folds the next operand into it as soon as it has been parsed.

use crate::{
    Vec,
    errors::{Error, SyntaxError},
    evaluator::operators::{eval_binary, eval_unary},
    lexer::{SpannedToken, Token},
    parser::{BinaryOp, Span},
};

/// Value of a parsed sub-expression and the source it covers.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Operand {
    pub value: f64,
    pub span: Span,
}

pub(crate) struct Parser<'t> {
    tokens: &'t [SpannedToken],
    pos: usize,
    depth: usize,
    max_depth: usize,
}

impl<'t> Parser<'t> {
    /// `tokens` must end with [`Token::Eof`], as produced by
    /// [`crate::lexer::tokenize`].
    pub fn new(tokens: &'t [SpannedToken], max_depth: usize) -> Self {
        debug_assert!(matches!(
            tokens.last(),
            Some(SpannedToken {
                token: Token::Eof,
                ..
            })
        ));
        Self {
            tokens,
            pos: 0,
            depth: 0,
            max_depth,
        }
    }

    /// Parse a whole expression; the input must be fully consumed.
    pub fn parse(mut self) -> Result<f64, Error> {
        let result = self.expression()?;
        let current = self.current();
        if current.token != Token::Eof {
            return Err(Error::syntax(
                SyntaxError::TrailingInput {
                    found: current.token,
                },
                current.span.clone(),
            ));
        }
        tracing::trace!(value = result.value, "parsed expression");
        Ok(result.value)
    }

    fn current(&self) -> &'t SpannedToken {
        let tokens: &'t [SpannedToken] = self.tokens;
        &tokens[self.pos]
    }

    /// Consume the current token. The cursor never moves past `Eof`.
    fn advance(&mut self) -> &'t SpannedToken {
        let token = self.current();
        if token.token != Token::Eof {
            self.pos += 1;
        }
        token
    }

    fn expression(&mut self) -> Result<Operand, Error> {
        let mut lhs = self.term()?;
        while let Some(op) = self.current().token.additive_op() {
            self.advance();
            let rhs = self.term()?;
            lhs = fold(op, lhs, rhs)?;
        }
        Ok(lhs)
    }

    fn term(&mut self) -> Result<Operand, Error> {
        let mut lhs = self.factor()?;
        while let Some(op) = self.current().token.multiplicative_op() {
            self.advance();
            let rhs = self.factor()?;
            lhs = fold(op, lhs, rhs)?;
        }
        Ok(lhs)
    }

    /// A run of signs is consumed iteratively, so only parentheses count
    /// toward the nesting limit.
    fn factor(&mut self) -> Result<Operand, Error> {
        let mut signs = Vec::new();
        while let Some(op) = self.current().token.unary_op() {
            signs.push((op, self.advance()));
        }

        let mut operand = self.primary()?;
        for (op, sign) in signs.into_iter().rev() {
            operand = Operand {
                value: eval_unary(op, operand.value),
                span: Span::combine(&sign.span, &operand.span),
            };
        }
        Ok(operand)
    }

    fn primary(&mut self) -> Result<Operand, Error> {
        let current = self.current();
        match current.token {
            Token::Number(value) => {
                self.advance();
                Ok(Operand {
                    value,
                    span: current.span.clone(),
                })
            }
            Token::LParen => {
                // Check depth before recursing
                if self.depth >= self.max_depth {
                    return Err(Error::MaxDepthExceeded {
                        max_depth: self.max_depth,
                        span: current.span.clone(),
                    });
                }

                let open = self.advance();
                self.depth += 1;
                let inner = self.expression();
                self.depth -= 1;
                let inner = inner?;
                let close = self.expect_closing(open)?;
                Ok(Operand {
                    value: inner.value,
                    span: Span::combine(&open.span, &close.span),
                })
            }
            found => Err(Error::syntax(
                SyntaxError::MissingOperand { found },
                current.span.clone(),
            )),
        }
    }

    fn expect_closing(&mut self, open: &SpannedToken) -> Result<&'t SpannedToken, Error> {
        let current = self.current();
        match current.token {
            Token::RParen => Ok(self.advance()),
            Token::Eof => Err(Error::syntax(
                SyntaxError::UnclosedParenthesis,
                open.span.clone(),
            )),
            found => Err(Error::syntax(
                SyntaxError::UnexpectedToken {
                    expected: Token::RParen,
                    found,
                },
                current.span.clone(),
            )),
        }
    }
}

fn fold(op: BinaryOp, lhs: Operand, rhs: Operand) -> Result<Operand, Error> {
    let value = eval_binary(op, lhs.value, rhs.value, &rhs.span)?;
    tracing::trace!(op = %op.symbol(), lhs = lhs.value, rhs = rhs.value, value, "fold");
    Ok(Operand {
        value,
        span: Span::combine(&lhs.span, &rhs.span),
    })
}
