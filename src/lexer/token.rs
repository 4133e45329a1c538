/*
 * ==========================================================================
 * SYNTA - See Your Syntax!
 * ==========================================================================
 *
 * File:      token.rs
 * Purpose:   Defines the lexical token types produced by the Synta lexer
 *            and consumed by the syntax analyzer.
 *
 * License:
 * This file is part of the Synta source analyzer project.
 *
 * Synta is dual-licensed under the terms of:
 *   - The MIT License
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

use crate::span::Span;
use serde::Serialize;
use std::fmt;

/// The closed set of token kinds recognized by the Synta lexer.
///
/// Every character sequence in a valid input maps to exactly one of these.
/// The serialized and displayed form is the screaming-caps name (`PLUS`,
/// `SEMICOLON`, …), which is also the spelling used inside error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TokenKind {
    // Arithmetic operators
    Plus,     // +
    Minus,    // -
    Multiply, // *
    Divide,   // /
    Modulo,   // %
    Power,    // **

    // Comparison operators
    Lt, // <
    Gt, // >
    Le, // <=
    Ge, // >=
    Eq, // ==
    Ne, // !=

    // Delimiters
    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }
    Semicolon, // ;
    Comma,     // ,

    // Assignment
    Assign, // =

    // Keywords
    If,
    Else,
    While,
    For,
    Def,
    Return,

    /// A user-defined name.
    Id,

    /// An integer or floating-point literal.
    Number,

    /// End-of-input marker.
    ///
    /// Always appended as the final token during lexing. Any lookahead past
    /// the end of the token sequence yields this token, never a fault.
    Eof,
}

impl TokenKind {
    /// The canonical screaming-caps name, as it appears in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Multiply => "MULTIPLY",
            TokenKind::Divide => "DIVIDE",
            TokenKind::Modulo => "MODULO",
            TokenKind::Power => "POWER",
            TokenKind::Lt => "LT",
            TokenKind::Gt => "GT",
            TokenKind::Le => "LE",
            TokenKind::Ge => "GE",
            TokenKind::Eq => "EQ",
            TokenKind::Ne => "NE",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::LBrace => "LBRACE",
            TokenKind::RBrace => "RBRACE",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Assign => "ASSIGN",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::While => "WHILE",
            TokenKind::For => "FOR",
            TokenKind::Def => "DEF",
            TokenKind::Return => "RETURN",
            TokenKind::Id => "ID",
            TokenKind::Number => "NUMBER",
            TokenKind::Eof => "EOF",
        }
    }

    /// Maps a token kind onto its display category.
    pub fn category(self) -> TokenCategory {
        match self {
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Multiply
            | TokenKind::Divide
            | TokenKind::Modulo
            | TokenKind::Power
            | TokenKind::Lt
            | TokenKind::Gt
            | TokenKind::Le
            | TokenKind::Ge
            | TokenKind::Eq
            | TokenKind::Ne => TokenCategory::Operator,
            TokenKind::LParen
            | TokenKind::RParen
            | TokenKind::LBrace
            | TokenKind::RBrace
            | TokenKind::Semicolon
            | TokenKind::Comma => TokenCategory::Delimiter,
            TokenKind::If
            | TokenKind::Else
            | TokenKind::While
            | TokenKind::For
            | TokenKind::Def
            | TokenKind::Return => TokenCategory::Keyword,
            TokenKind::Id => TokenCategory::Identifier,
            TokenKind::Number => TokenCategory::Literal,
            TokenKind::Assign => TokenCategory::Assignment,
            TokenKind::Eof => TokenCategory::Unknown,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Coarse grouping of token kinds used by the token views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TokenCategory {
    Operator,
    Delimiter,
    Keyword,
    Identifier,
    Literal,
    Assignment,
    Unknown,
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenCategory::Operator => "Operator",
            TokenCategory::Delimiter => "Delimiter",
            TokenCategory::Keyword => "Keyword",
            TokenCategory::Identifier => "Identifier",
            TokenCategory::Literal => "Literal",
            TokenCategory::Assignment => "Assignment",
            TokenCategory::Unknown => "Unknown",
        };
        write!(f, "{name}")
    }
}

/// The parsed value a token carries.
///
/// Numeric literals parse to `Int` or `Float` (a literal containing a dot is
/// always a `Float`); identifiers, keywords, and symbols carry their text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TokenValue {
    Int(i64),
    Float(f64),
    Text(String),
}

impl TokenValue {
    /// True for the literal zero, integer or floating-point.
    pub fn is_zero(&self) -> bool {
        match self {
            TokenValue::Int(n) => *n == 0,
            TokenValue::Float(f) => *f == 0.0,
            TokenValue::Text(_) => false,
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenValue::Int(n) => write!(f, "{n}"),
            // {:?} keeps the trailing ".0" on whole floats, so a literal
            // written `5.0` round-trips as "5.0" rather than "5"
            TokenValue::Float(v) => write!(f, "{v:?}"),
            TokenValue::Text(s) => write!(f, "{s}"),
        }
    }
}

/// A single classified unit of source text.
///
/// Tokens are created once by the lexer and never mutated afterwards; the
/// token sequence owns them for the lifetime of one analysis.
#[derive(Debug, Clone)]
pub struct Token {
    /// The classified kind of the token.
    pub kind: TokenKind,

    /// The parsed value (numeric for literals, text otherwise).
    pub value: TokenValue,

    /// The exact source text this token was built from.
    pub lexeme: String,

    /// Position of the first character of the lexeme.
    pub span: Span,
}

impl fmt::Display for Token {
    /// Prints only the lexeme. Diagnostics care about what the user wrote,
    /// not the internal structure; `Debug` remains available for that.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lexeme)
    }
}
