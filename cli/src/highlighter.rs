use logos::Logos;
use nu_ansi_term::{Color, Style};
use reedline::{StyledText, ValidationResult, Validator};

use crate::lexer::{Token, calculate_depth};

fn style_for(token: &Result<Token, ()>) -> Style {
    match token {
        Ok(Token::Number) => Style::new().fg(Color::Cyan),
        Ok(Token::Operator) => Style::new().fg(Color::White),
        Ok(Token::LParen) | Ok(Token::RParen) => Style::new().fg(Color::DarkGray),
        Err(()) => Style::new().fg(Color::Red).underline(),
    }
}

/// Colors numbers, operators and parentheses; marks unknown characters red.
pub struct Highlighter;

impl reedline::Highlighter for Highlighter {
    fn highlight(&self, line: &str, _cursor: usize) -> StyledText {
        let mut styled = StyledText::new();
        let mut last = 0;

        for (token, span) in Token::lexer(line).spanned() {
            if span.start > last {
                styled.push((Style::new(), line[last..span.start].to_string()));
            }
            styled.push((style_for(&token), line[span.clone()].to_string()));
            last = span.end;
        }

        if last < line.len() {
            styled.push((Style::new(), line[last..].to_string()));
        }

        styled
    }
}

/// Keeps the editor open while parentheses are unbalanced.
pub struct ParenValidator;

impl Validator for ParenValidator {
    fn validate(&self, line: &str) -> ValidationResult {
        match calculate_depth(line) {
            Some(depth) if depth > 0 => ValidationResult::Incomplete,
            _ => ValidationResult::Complete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reedline::Highlighter as _;

    fn plain(styled: &StyledText) -> String {
        styled.buffer.iter().map(|(_, text)| text.as_str()).collect()
    }

    #[test]
    fn test_highlight_preserves_text() {
        let line = "  (1 + 2) *  x ";
        let styled = Highlighter.highlight(line, 0);
        assert_eq!(plain(&styled), line);
    }

    #[test]
    fn test_unknown_character_is_red() {
        let styled = Highlighter.highlight("1 $ 2", 0);
        let (style, _) = styled
            .buffer
            .iter()
            .find(|(_, text)| text == "$")
            .expect("missing segment");
        assert_eq!(style.foreground, Some(Color::Red));
    }

    #[test]
    fn test_validator() {
        assert!(matches!(
            ParenValidator.validate("(1 + 2"),
            ValidationResult::Incomplete
        ));
        assert!(matches!(
            ParenValidator.validate("(1 + 2)"),
            ValidationResult::Complete
        ));
        assert!(matches!(
            ParenValidator.validate("(1 + y"),
            ValidationResult::Complete
        ));
    }
}
