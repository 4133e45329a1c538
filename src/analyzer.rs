/*
 * ==========================================================================
 * SYNTA - See Your Syntax!
 * ==========================================================================
 *
 * File:      analyzer.rs
 * Purpose:   The one-call analysis facade: source text in, tokens + parse
 *            tree + merged error list out.
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

use std::panic::{self, AssertUnwindSafe};

use serde::Serialize;

use crate::error::{CompilerError, ErrorHandler};
use crate::heuristics::detect_common_errors;
use crate::lexer::token::{Token, TokenCategory, TokenKind};
use crate::lexer::{self, Lexer};
use crate::parser;
use crate::tree::ParseTreeNode;

/// One token as the outside world sees it: stringified value, category,
/// and position. The end marker is never included in views.
#[derive(Debug, Clone, Serialize)]
pub struct TokenView {
    #[serde(rename = "type")]
    pub kind: TokenKind,
    pub value: String,
    pub lexeme: String,
    pub category: TokenCategory,
    pub line: usize,
    pub column: usize,
}

impl From<&Token> for TokenView {
    fn from(token: &Token) -> Self {
        Self {
            kind: token.kind,
            value: token.value.to_string(),
            lexeme: token.lexeme.clone(),
            category: token.kind.category(),
            line: token.span.line,
            column: token.span.column,
        }
    }
}

/// Everything one analysis produced.
///
/// `success` and `accepted` are the same fact, kept under both names for
/// the consumers of the serialized form: exactly "the error list is empty".
#[derive(Debug, Clone, Serialize)]
pub struct Analysis {
    pub success: bool,
    pub input: String,
    pub tokens: Vec<TokenView>,
    pub parse_tree: Option<ParseTreeNode>,
    pub errors: Vec<CompilerError>,
    pub accepted: bool,
}

impl Analysis {
    fn failed(input: impl Into<String>, errors: Vec<CompilerError>) -> Self {
        Self {
            success: false,
            input: input.into(),
            tokens: Vec::new(),
            parse_tree: None,
            errors,
            accepted: false,
        }
    }
}

/// The cheap validity probe.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Validation {
    pub valid: bool,
    pub error_count: usize,
}

/// Runs the full pipeline over one input: lex, heuristics, parse, merge.
///
/// Empty input (after trimming) short-circuits with one explicit error. A
/// lexical failure short-circuits with that single error, no tokens and no
/// tree. Syntax and semantic errors accumulate without stopping anything;
/// the tree is always best-effort. Any internal fault is contained and
/// reported as one generic entry; this function never panics into the
/// caller.
pub fn analyze(source: &str) -> Analysis {
    let input = source.trim();
    if input.is_empty() {
        return Analysis::failed(
            input,
            vec![CompilerError::syntax("Input string cannot be empty")],
        );
    }

    match panic::catch_unwind(AssertUnwindSafe(|| analyze_input(input))) {
        Ok(analysis) => analysis,
        Err(_) => Analysis::failed(
            input,
            vec![CompilerError::syntax("Unexpected internal error during analysis")],
        ),
    }
}

fn analyze_input(input: &str) -> Analysis {
    // Step 1: lexical analysis; the first unrecognized character ends the
    // whole analysis with that single error
    let mut lexer = Lexer::new(input);
    if let Err(fault) = lexer.tokenize() {
        return Analysis::failed(input, vec![CompilerError::from(fault)]);
    }
    let tokens = lexer.tokens;

    let views: Vec<TokenView> = tokens
        .iter()
        .filter(|t| t.kind != TokenKind::Eof)
        .map(TokenView::from)
        .collect();

    // Heuristic pass first, then the parser; one merged list, no
    // deduplication and no precedence between the two sources
    let mut handler = ErrorHandler::new();
    for error in detect_common_errors(input, &tokens) {
        handler.add_error(error);
    }

    // Step 2: syntax analysis
    let outcome = parser::parse(tokens);
    for message in &outcome.errors {
        handler.add_error(CompilerError::syntax(message.clone()));
    }

    let success = !handler.has_errors();
    Analysis {
        success,
        input: input.to_string(),
        tokens: views,
        parse_tree: outcome.tree,
        errors: handler.into_errors(),
        accepted: success,
    }
}

/// Checks whether an input parses, without the heuristic pass.
///
/// Same lexer and parser as `analyze`; only the parser's own error count
/// is reported, and a lexical failure counts as one error.
pub fn validate(source: &str) -> Validation {
    let input = source.trim();
    match lexer::tokenize(input) {
        Ok(tokens) => {
            let outcome = parser::parse(tokens);
            Validation {
                valid: outcome.accepted,
                error_count: outcome.errors.len(),
            }
        }
        Err(_) => Validation {
            valid: false,
            error_count: 1,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorType;
    use pretty_assertions::assert_eq;

    #[test]
    fn accepted_input_has_empty_error_list() {
        let analysis = analyze("x = 5;");
        assert!(analysis.accepted);
        assert!(analysis.success);
        assert!(analysis.errors.is_empty());
        assert_eq!(analysis.tokens.len(), 4);
        assert_eq!(
            analysis.parse_tree.as_ref().map(|t| t.name.as_str()),
            Some("Program")
        );
    }

    #[test]
    fn token_views_exclude_end_marker_and_stringify_values() {
        let analysis = analyze("x = 5;");
        let kinds: Vec<TokenKind> = analysis.tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Id,
                TokenKind::Assign,
                TokenKind::Number,
                TokenKind::Semicolon,
            ]
        );
        let number = &analysis.tokens[2];
        assert_eq!(number.value, "5");
        assert_eq!(number.category, TokenCategory::Literal);
        assert_eq!((number.line, number.column), (1, 4));
    }

    #[test]
    fn empty_input_is_one_explicit_error() {
        for source in ["", "   \n\t "] {
            let analysis = analyze(source);
            assert!(!analysis.accepted);
            assert!(analysis.tokens.is_empty());
            assert!(analysis.parse_tree.is_none());
            assert_eq!(analysis.errors.len(), 1);
            assert_eq!(analysis.errors[0].message, "Input string cannot be empty");
        }
    }

    #[test]
    fn lexical_failure_short_circuits() {
        let analysis = analyze("@");
        assert!(!analysis.accepted);
        assert!(analysis.tokens.is_empty());
        assert!(analysis.parse_tree.is_none());
        assert_eq!(analysis.errors.len(), 1);
        let error = &analysis.errors[0];
        assert_eq!(error.error_type, ErrorType::Lexical);
        assert_eq!(error.span.map(|s| (s.line, s.column)), Some((1, 0)));
    }

    #[test]
    fn heuristic_and_parser_errors_merge_in_order() {
        let analysis = analyze("x = a/0;");
        // syntactically fine, semantically flagged
        assert!(!analysis.accepted);
        assert_eq!(analysis.errors.len(), 1);
        assert_eq!(analysis.errors[0].error_type, ErrorType::Semantic);
        assert_eq!(analysis.errors[0].message, "Division by zero");
        assert!(analysis.parse_tree.is_some());
    }

    #[test]
    fn parser_errors_become_syntax_entries() {
        let analysis = analyze("x = 5");
        assert!(!analysis.accepted);
        assert!(analysis
            .errors
            .iter()
            .any(|e| e.error_type == ErrorType::Syntax && e.message.contains("SEMICOLON")));
    }

    #[test]
    fn validate_skips_heuristics() {
        // divide-by-zero is heuristic-only, so validation still passes
        assert!(validate("x = a/0;").valid);

        let validation = validate("x = 5");
        assert!(!validation.valid);
        assert_eq!(validation.error_count, 1);

        let validation = validate("@");
        assert!(!validation.valid);
        assert_eq!(validation.error_count, 1);
    }

    #[test]
    fn analysis_serializes_with_view_field_names() {
        let analysis = analyze("x = 5;");
        let json = serde_json::to_value(&analysis).expect("serialize failed");
        assert_eq!(json["accepted"], true);
        assert_eq!(json["tokens"][0]["type"], "ID");
        assert_eq!(json["tokens"][0]["category"], "Identifier");
        assert_eq!(json["parse_tree"]["name"], "Program");
    }
}
