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

use crate::span::Span;
use serde::Serialize;
use std::fmt;

/// The analysis error taxonomy.
///
/// Lexical errors are fatal to their analysis; syntax and semantic errors
/// accumulate and never stop the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorType {
    #[serde(rename = "Lexical Error")]
    Lexical,
    #[serde(rename = "Syntax Error")]
    Syntax,
    #[serde(rename = "Semantic Error")]
    Semantic,
}

impl fmt::Display for ErrorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorType::Lexical => "Lexical Error",
            ErrorType::Syntax => "Syntax Error",
            ErrorType::Semantic => "Semantic Error",
        };
        write!(f, "{name}")
    }
}

/// One recorded analysis error: a type, a message, and optionally a source
/// position and a human suggestion.
#[derive(Debug, Clone, Serialize)]
pub struct CompilerError {
    #[serde(rename = "type")]
    pub error_type: ErrorType,

    pub message: String,

    /// Where the error was observed, when a position is known. Parser
    /// messages embed their position in the text instead.
    #[serde(flatten)]
    pub span: Option<Span>,

    pub suggestion: Option<String>,
}

impl CompilerError {
    /// Generic constructor
    pub fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
            span: None,
            suggestion: None,
        }
    }

    pub fn lexical(message: impl Into<String>) -> Self {
        Self::new(ErrorType::Lexical, message)
    }

    pub fn syntax(message: impl Into<String>) -> Self {
        Self::new(ErrorType::Syntax, message)
    }

    pub fn semantic(message: impl Into<String>) -> Self {
        Self::new(ErrorType::Semantic, message)
    }

    /// Attach a source position (builder-style).
    pub fn at(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Attach a suggestion (builder-style).
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl fmt::Display for CompilerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.span {
            Some(span) => write!(f, "{} at {}: {}", self.error_type, span, self.message),
            None => write!(f, "{}: {}", self.error_type, self.message),
        }
    }
}

/// Accumulates the errors of one analysis in the order they were recorded.
///
/// Scoped to a single request: instantiate fresh per analysis, never share.
/// Nothing is deduplicated; `has_errors` is the acceptance test.
#[derive(Debug, Default)]
pub struct ErrorHandler {
    errors: Vec<CompilerError>,
}

impl ErrorHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, error: CompilerError) {
        self.errors.push(error);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[CompilerError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<CompilerError> {
        self.errors
    }

    /// Formats the whole list as a numbered, human-readable report.
    pub fn format_errors(&self) -> String {
        if self.errors.is_empty() {
            return "No errors found.".to_string();
        }

        let mut lines = vec![format!("Found {} error(s):", self.errors.len())];
        for (i, error) in self.errors.iter().enumerate() {
            lines.push(format!("{}. {}", i + 1, error));
            if let Some(suggestion) = &error.suggestion {
                lines.push(format!("   Suggestion: {suggestion}"));
            }
        }
        lines.join("\n")
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }
}

/// The fatal lexer failure: one unrecognized character stops tokenization.
#[derive(Debug, Clone)]
pub struct LexicalError {
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl LexicalError {
    pub fn new(message: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            message: message.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for LexicalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // the message already carries the position
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for LexicalError {}

impl From<LexicalError> for CompilerError {
    fn from(error: LexicalError) -> Self {
        let span = Span::new(error.line, error.column);
        CompilerError::lexical(error.message).at(span)
    }
}

/// Maps well-known message stems to a follow-up hint. Used by the CLI when
/// an error carries no suggestion of its own.
pub fn suggestion_for(message: &str) -> &'static str {
    const SUGGESTIONS: &[(&str, &str)] = &[
        (
            "Unexpected character",
            "Check for invalid symbols or special characters",
        ),
        ("Expected", "Verify the syntax matches the grammar rules"),
        ("Missing closing", "Add the appropriate closing delimiter"),
        ("Unexpected token", "Check statement structure and syntax"),
        ("Missing semicolon", "Add ';' at the end of the statement"),
    ];

    for (stem, suggestion) in SUGGESTIONS {
        if message.contains(stem) {
            return suggestion;
        }
    }
    "Review the grammar rules and syntax"
}
