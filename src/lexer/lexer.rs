/*
 * ==========================================================================
 * SYNTA - See Your Syntax!
 * ==========================================================================
 *
 * License:
 * This file is part of the Synta source analyzer project.
 *
 * Synta is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

use crate::error::LexicalError;
use crate::lexer::keywords::keyword_kind;
use crate::lexer::token::{Token, TokenKind, TokenValue};
use crate::span::Span;

pub struct Lexer {
    input: Vec<char>,
    pos: usize,
    line: usize,
    column: usize,

    /// Output token sequence, terminated by the end marker after a
    /// successful `tokenize` run.
    pub tokens: Vec<Token>,

    /// Recorded number-format notes (second dot, trailing dot). These are
    /// non-fatal: the malformed literal is still emitted and scanning
    /// continues. They stay on the lexer and are not merged into the
    /// analysis error list.
    pub errors: Vec<String>,
}

impl Lexer {
    /// Creates a lexer over the given source text.
    ///
    /// The instance is single-use: call `tokenize` exactly once, then read
    /// `tokens` and `errors`.
    pub fn new(source: &str) -> Self {
        Self {
            input: source.chars().collect(),
            pos: 0,
            line: 1,
            column: 0,
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Converts the whole input into tokens.
    ///
    /// Fails with a `LexicalError` on the first character that matches no
    /// token rule; everything scanned up to that point remains in `tokens`
    /// but the end marker is only appended on success. Whitespace separates
    /// tokens and is otherwise discarded; newlines reset the column counter
    /// and advance the line counter.
    pub fn tokenize(&mut self) -> Result<(), LexicalError> {
        while self.pos < self.input.len() {
            self.skip_whitespace();

            let ch = match self.current_char() {
                Some(ch) => ch,
                None => break,
            };
            let start_column = self.column;

            // Numbers
            if ch.is_ascii_digit() {
                let token = self.read_number();
                self.tokens.push(token);
                continue;
            }

            // Identifiers and keywords
            if ch.is_alphabetic() || ch == '_' {
                let token = self.read_identifier_or_keyword();
                self.tokens.push(token);
                continue;
            }

            // Two-character operators are matched before their prefixes
            match ch {
                '*' if self.peek_char() == Some('*') => self.symbol(TokenKind::Power, "**"),
                '<' if self.peek_char() == Some('=') => self.symbol(TokenKind::Le, "<="),
                '>' if self.peek_char() == Some('=') => self.symbol(TokenKind::Ge, ">="),
                '=' if self.peek_char() == Some('=') => self.symbol(TokenKind::Eq, "=="),
                '!' if self.peek_char() == Some('=') => self.symbol(TokenKind::Ne, "!="),

                '+' => self.symbol(TokenKind::Plus, "+"),
                '-' => self.symbol(TokenKind::Minus, "-"),
                '*' => self.symbol(TokenKind::Multiply, "*"),
                '/' => self.symbol(TokenKind::Divide, "/"),
                '%' => self.symbol(TokenKind::Modulo, "%"),
                '<' => self.symbol(TokenKind::Lt, "<"),
                '>' => self.symbol(TokenKind::Gt, ">"),
                '=' => self.symbol(TokenKind::Assign, "="),
                '(' => self.symbol(TokenKind::LParen, "("),
                ')' => self.symbol(TokenKind::RParen, ")"),
                '{' => self.symbol(TokenKind::LBrace, "{"),
                '}' => self.symbol(TokenKind::RBrace, "}"),
                ';' => self.symbol(TokenKind::Semicolon, ";"),
                ',' => self.symbol(TokenKind::Comma, ","),

                // A bare '!' lands here too: it is not a token on its own
                _ => {
                    let message = format!(
                        "Unexpected character '{}' at line {}, column {}",
                        ch, self.line, start_column
                    );
                    self.errors.push(message.clone());
                    return Err(LexicalError::new(message, self.line, start_column));
                }
            }
        }

        // End marker, positioned at the final line/column reached
        self.tokens.push(Token {
            kind: TokenKind::Eof,
            value: TokenValue::Text("EOF".to_string()),
            lexeme: String::new(),
            span: Span::new(self.line, self.column),
        });
        Ok(())
    }

    /// Reads a numeric literal: a maximal run of digits with at most one
    /// dot. A second dot truncates the run and records a format note; a
    /// trailing dot records one as well. In both cases the token is still
    /// emitted with the text consumed so far.
    fn read_number(&mut self) -> Token {
        let line = self.line;
        let start_column = self.column;
        let mut num = String::new();
        let mut has_dot = false;

        while let Some(ch) = self.current_char() {
            if ch.is_ascii_digit() {
                num.push(ch);
                self.advance();
            } else if ch == '.' {
                if has_dot {
                    self.errors.push(format!(
                        "Invalid number format at line {}, column {}",
                        self.line, self.column
                    ));
                    break;
                }
                has_dot = true;
                num.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        if num.ends_with('.') {
            self.errors.push(format!(
                "Invalid number format '{}' at line {}, column {}",
                num, self.line, start_column
            ));
        }

        let value = if has_dot {
            TokenValue::Float(num.parse().unwrap_or(0.0))
        } else {
            match num.parse::<i64>() {
                Ok(n) => TokenValue::Int(n),
                // a digit run too long for i64 still tokenizes, as a float
                Err(_) => TokenValue::Float(num.parse().unwrap_or(0.0)),
            }
        };

        Token {
            kind: TokenKind::Number,
            value,
            lexeme: num,
            span: Span::new(line, start_column),
        }
    }

    /// Reads an identifier or keyword: letter or underscore first, then
    /// letters, digits, and underscores. The resulting text is looked up in
    /// the keyword table, case-sensitively.
    fn read_identifier_or_keyword(&mut self) -> Token {
        let line = self.line;
        let start_column = self.column;
        let mut text = String::new();

        if let Some(ch) = self.current_char() {
            if ch.is_alphabetic() || ch == '_' {
                text.push(ch);
                self.advance();
            }
        }

        while let Some(ch) = self.current_char() {
            if ch.is_alphanumeric() || ch == '_' {
                text.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        let kind = keyword_kind(&text).unwrap_or(TokenKind::Id);
        Token {
            kind,
            value: TokenValue::Text(text.clone()),
            lexeme: text,
            span: Span::new(line, start_column),
        }
    }

    /// Emits an operator or delimiter token and consumes its characters.
    fn symbol(&mut self, kind: TokenKind, text: &str) {
        let span = Span::new(self.line, self.column);
        for _ in text.chars() {
            self.advance();
        }
        self.tokens.push(Token {
            kind,
            value: TokenValue::Text(text.to_string()),
            lexeme: text.to_string(),
            span,
        });
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.current_char(), Some(ch) if ch.is_whitespace()) {
            self.advance();
        }
    }

    /// The character under the cursor, or `None` at end of input.
    fn current_char(&self) -> Option<char> {
        self.input.get(self.pos).copied()
    }

    /// One character of lookahead without consuming.
    fn peek_char(&self) -> Option<char> {
        self.input.get(self.pos + 1).copied()
    }

    /// Consumes one character, updating line and column counters.
    fn advance(&mut self) {
        if let Some(ch) = self.current_char() {
            if ch == '\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
            self.pos += 1;
        }
    }
}

/// Tokenizes a source string in one call.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexicalError> {
    let mut lexer = Lexer::new(source);
    lexer.tokenize()?;
    Ok(lexer.tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .expect("tokenize failed")
            .iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn tokenizes_simple_assignment() {
        let tokens = tokenize("x=5;").expect("tokenize failed");
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Id,
                TokenKind::Assign,
                TokenKind::Number,
                TokenKind::Semicolon,
                TokenKind::Eof,
            ]
        );
        assert_eq!(tokens[2].value, TokenValue::Int(5));
    }

    #[test]
    fn two_char_operators_win_over_prefixes() {
        assert_eq!(
            kinds("** <= >= == != * < > ="),
            vec![
                TokenKind::Power,
                TokenKind::Le,
                TokenKind::Ge,
                TokenKind::Eq,
                TokenKind::Ne,
                TokenKind::Multiply,
                TokenKind::Lt,
                TokenKind::Gt,
                TokenKind::Assign,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn bare_bang_is_a_lexical_error() {
        let err = tokenize("a ! b").expect_err("expected lexical error");
        assert_eq!(err.line, 1);
        assert_eq!(err.column, 2);
        assert!(err.message.contains("Unexpected character '!'"));
    }

    #[test]
    fn unexpected_character_position() {
        let err = tokenize("@").expect_err("expected lexical error");
        assert_eq!((err.line, err.column), (1, 0));
    }

    #[test]
    fn keywords_are_case_sensitive() {
        assert_eq!(
            kinds("if If _if"),
            vec![TokenKind::If, TokenKind::Id, TokenKind::Id, TokenKind::Eof]
        );
    }

    #[test]
    fn spans_track_lines_and_columns() {
        let tokens = tokenize("x = 1;\n  y = 2;").expect("tokenize failed");
        let y = tokens.iter().find(|t| t.lexeme == "y").expect("no y token");
        assert_eq!(y.span, Span::new(2, 2));
        // end marker sits at the final position reached
        let eof = tokens.last().expect("no end marker");
        assert_eq!(eof.kind, TokenKind::Eof);
        assert_eq!(eof.span, Span::new(2, 8));
    }

    #[test]
    fn float_literals_parse_as_float() {
        let tokens = tokenize("pi = 3.14;").expect("tokenize failed");
        assert_eq!(tokens[2].value, TokenValue::Float(3.14));
        assert_eq!(tokens[2].lexeme, "3.14");
    }

    #[test]
    fn trailing_dot_records_note_but_emits_token() {
        let mut lexer = Lexer::new("x = 5.;");
        lexer.tokenize().expect("tokenize failed");
        assert_eq!(lexer.errors.len(), 1);
        assert!(lexer.errors[0].contains("Invalid number format '5.'"));
        let num = &lexer.tokens[2];
        assert_eq!(num.kind, TokenKind::Number);
        assert_eq!(num.lexeme, "5.");
        assert_eq!(num.value, TokenValue::Float(5.0));
    }

    #[test]
    fn second_dot_truncates_and_faults_on_the_leftover() {
        // "1.2" is emitted with a format note, then the stray '.' is an
        // unrecognized character
        let mut lexer = Lexer::new("1.2.3");
        let err = lexer.tokenize().expect_err("expected lexical error");
        assert!(lexer.errors.iter().any(|e| e.contains("Invalid number format")));
        assert_eq!(lexer.tokens[0].lexeme, "1.2");
        assert!(err.message.contains("Unexpected character '.'"));
    }

    #[test]
    fn lexemes_round_trip_significant_characters() {
        let source = "def add(a, b) {\n  return a + b ** 2;\n}";
        let tokens = tokenize(source).expect("tokenize failed");
        let rebuilt: String = tokens.iter().map(|t| t.lexeme.as_str()).collect();
        let stripped: String = source.chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(rebuilt, stripped);
    }

    #[test]
    fn empty_input_yields_only_the_end_marker() {
        let tokens = tokenize("").expect("tokenize failed");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
        assert_eq!(tokens[0].span, Span::new(1, 0));
    }
}
