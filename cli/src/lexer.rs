use logos::Logos;

/// Loose token classes for line editing. Unlike the evaluator's tokenizer
/// this never fails as a whole: unknown characters come back as `Err(())`.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[regex(r"[+\-*/]")]
    Operator,

    #[regex(r"[0-9.]+")]
    Number,
}

/// Number of parentheses still open at the end of `buffer`.
///
/// Returns `None` if the buffer contains a character that can never be part
/// of an expression, so the editor submits it and lets evaluation report it.
pub fn calculate_depth(buffer: &str) -> Option<usize> {
    let mut depth: isize = 0;

    for token_res in Token::lexer(buffer) {
        match token_res {
            Ok(Token::LParen) => depth += 1,
            Ok(Token::RParen) => depth -= 1,

            // Valid tokens that don't affect depth
            Ok(_) => {}

            Err(_) => {
                return None;
            }
        }
    }

    if depth < 0 {
        Some(0)
    } else {
        Some(depth as usize)
    }
}
