//! Tokenizer for arithmetic expressions.
//!
//! Turns source text into a flat sequence of [`SpannedToken`]s terminated by
//! a single [`Token::Eof`].

mod token;


pub use token::{SpannedToken, Token};

use crate::{String, ToString, Vec, errors::Error, parser::Span};

fn is_literal_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

/// Scan `source` into tokens.
///
/// Whitespace is skipped. A numeric literal is the longest run of ASCII
/// digits and `.` characters; the run is only validated once it has been
/// scanned completely, so `1.2.3` fails with [`Error::InvalidLiteral`]
/// rather than splitting into two numbers.
pub fn tokenize(source: &str) -> Result<Vec<SpannedToken>, Error> {
    let mut tokens = Vec::new();
    let mut chars = source.char_indices().peekable();

    while let Some(&(start, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }

        if let Some(token) = Token::from_symbol(c) {
            chars.next();
            tokens.push(SpannedToken::new(token, Span::new(start, start + 1)));
            continue;
        }

        if is_literal_char(c) {
            let mut end = start;
            while let Some(&(i, c)) = chars.peek() {
                if !is_literal_char(c) {
                    break;
                }
                end = i + c.len_utf8();
                chars.next();
            }
            let span = Span::new(start, end);
            let value = parse_literal(span.str_of(source), &span)?;
            tokens.push(SpannedToken::new(Token::Number(value), span));
            continue;
        }

        return Err(Error::UnexpectedCharacter {
            character: c,
            position: start,
        });
    }

    tokens.push(SpannedToken::new(Token::Eof, Span::at(source.len())));
    tracing::debug!(count = tokens.len(), "tokenized expression");
    Ok(tokens)
}

fn parse_literal(literal: &str, span: &Span) -> Result<f64, Error> {
    literal.parse::<f64>().map_err(|_| Error::InvalidLiteral {
        literal: String::from(literal),
        span: span.clone(),
    })
}

/// Renders a token sequence as a single line, e.g. `3 '+' 4 end of input`.
pub fn display_tokens(tokens: &[SpannedToken]) -> String {
    tokens
        .iter()
        .map(|t| t.token.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
