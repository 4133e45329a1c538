/*
 * ==========================================================================
 * SYNTA - See Your Syntax!
 * ==========================================================================
 *
 * File:      heuristics.rs
 * Purpose:   Heuristic scan for common mistakes, independent of the
 *            parser and additive to its errors.
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

use crate::error::CompilerError;
use crate::lexer::token::{Token, TokenKind};

/// Scans raw text and tokens for common mistakes and returns them with
/// suggestions attached.
///
/// These are textual and token-level heuristics, not semantic analysis.
/// The substring checks in particular operate on the raw source, so they
/// can misreport nested-but-valid shapes; that imprecision is part of the
/// contract and callers must not expect better.
pub fn detect_common_errors(input: &str, tokens: &[Token]) -> Vec<CompilerError> {
    let mut errors = Vec::new();

    // Unbalanced braces
    let open_brace = input.matches('{').count();
    let close_brace = input.matches('}').count();
    if open_brace > close_brace {
        errors.push(
            CompilerError::syntax(format!(
                "Missing {} closing brace(s)",
                open_brace - close_brace
            ))
            .with_suggestion("Add '}' to match opening braces"),
        );
    } else if close_brace > open_brace {
        errors.push(
            CompilerError::syntax(format!(
                "Extra {} closing brace(s)",
                close_brace - open_brace
            ))
            .with_suggestion("Remove extra '}' or add matching '{'"),
        );
    }

    // Unbalanced parentheses
    let open_paren = input.matches('(').count();
    let close_paren = input.matches(')').count();
    if open_paren > close_paren {
        errors.push(
            CompilerError::syntax(format!(
                "Missing {} closing parenthesis/parentheses",
                open_paren - close_paren
            ))
            .with_suggestion("Add ')' to match opening parentheses"),
        );
    } else if close_paren > open_paren {
        errors.push(
            CompilerError::syntax(format!(
                "Extra {} closing parenthesis/parentheses",
                close_paren - open_paren
            ))
            .with_suggestion("Remove extra ')' or add matching '('"),
        );
    }

    // Assignment never closed by a semicolon before the next statement
    // keyword, scanning at bracket depth 0
    for (i, token) in tokens.iter().enumerate() {
        if token.kind != TokenKind::Assign {
            continue;
        }
        let mut depth: i64 = 0;
        for later in &tokens[i + 1..] {
            match later.kind {
                TokenKind::LParen | TokenKind::LBrace => depth += 1,
                TokenKind::RParen | TokenKind::RBrace => depth -= 1,
                TokenKind::Semicolon if depth == 0 => break,
                TokenKind::If | TokenKind::While | TokenKind::For | TokenKind::Def
                    if depth == 0 =>
                {
                    errors.push(
                        CompilerError::syntax("Missing semicolon after assignment")
                            .at(token.span)
                            .with_suggestion("Add ';' at the end of the assignment"),
                    );
                    break;
                }
                _ => {}
            }
        }
    }

    // Division by a literal zero
    for pair in tokens.windows(2) {
        if pair[0].kind == TokenKind::Divide
            && pair[1].kind == TokenKind::Number
            && pair[1].value.is_zero()
        {
            errors.push(
                CompilerError::semantic("Division by zero")
                    .at(pair[0].span)
                    .with_suggestion("Avoid dividing by zero"),
            );
        }
    }

    // Empty blocks, by raw substring
    if input.contains("{}") {
        errors.push(
            CompilerError::syntax("Empty block detected")
                .with_suggestion("Add statements inside braces or remove the block"),
        );
    }

    // Empty parentheses, by raw substring; a def anywhere disarms the
    // check since parameterless functions are legitimate
    if input.contains("()") && !input.contains("def") {
        errors.push(
            CompilerError::syntax("Empty parentheses in condition or expression")
                .with_suggestion("Add an expression inside parentheses"),
        );
    }

    errors
}
