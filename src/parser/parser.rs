/*
 * ==========================================================================
 * SYNTA - See Your Syntax!
 * ==========================================================================
 *
 * Core Recursive-Descent Parser Entry Point
 *
 * This file defines the primary `Parser` structure and the public `parse()`
 * driver used to turn a token stream into a concrete parse tree for the
 * analyzed language.
 *
 * The parsing implementation is split across multiple modules:
 * - `statements.rs`   → Statement-level grammar (`if`, `while`, `for`, …)
 * - `expressions.rs`  → Expression grammar & operator precedence
 * - `helpers.rs`      → Token inspection and consumption utilities
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

use std::panic::{self, AssertUnwindSafe};

use crate::lexer::token::{Token, TokenKind, TokenValue};
use crate::span::Span;
use crate::tree::ParseTreeNode;

/// The recursive-descent syntax analyzer.
///
/// One method per grammar non-terminal, spread over the `statements` and
/// `expressions` modules. Errors accumulate on the instance and never abort
/// the walk: every production returns a best-effort node. Instantiate fresh
/// per analysis; nothing is shared across requests.
pub struct Parser {
    /// Complete token stream, always ending with the end marker.
    pub tokens: Vec<Token>,

    /// Cursor into the token stream. May move past the end; reads clamp to
    /// the end marker.
    pub pos: usize,

    /// Syntax errors recorded so far, in source order.
    pub errors: Vec<String>,
}

/// What one parse produced: the best-effort tree, whether the input was
/// accepted, and every error message recorded along the way.
///
/// `accepted` is exactly "the error list is empty".
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    pub tree: Option<ParseTreeNode>,
    pub accepted: bool,
    pub errors: Vec<String>,
}

/// Parses a token stream in one call.
pub fn parse(tokens: Vec<Token>) -> ParseOutcome {
    Parser::new(tokens).parse()
}

impl Parser {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        // The stream invariant every helper relies on: a trailing end
        // marker exists, so out-of-range reads have something to clamp to.
        if tokens.last().map_or(true, |t| t.kind != TokenKind::Eof) {
            let span = tokens.last().map_or(Span::new(1, 0), |t| t.span);
            tokens.push(Token {
                kind: TokenKind::Eof,
                value: TokenValue::Text("EOF".to_string()),
                lexeme: String::new(),
                span,
            });
        }
        Self {
            tokens,
            pos: 0,
            errors: Vec::new(),
        }
    }

    /// Runs the top-level production and packages the outcome.
    ///
    /// Tokens left over after a complete `Program` add one trailing-input
    /// error. An internal fault inside the productions is contained here
    /// and surfaces as a single "Parser Error" entry instead of unwinding
    /// into the caller.
    pub fn parse(mut self) -> ParseOutcome {
        let tree = panic::catch_unwind(AssertUnwindSafe(|| self.program()));

        match tree {
            Ok(tree) => {
                if self.current().kind != TokenKind::Eof {
                    self.errors.push(format!(
                        "Unexpected token '{}' after program",
                        self.current().lexeme
                    ));
                }
                let accepted = self.errors.is_empty();
                ParseOutcome {
                    tree: Some(tree),
                    accepted,
                    errors: self.errors,
                }
            }
            Err(fault) => {
                let detail = fault
                    .downcast_ref::<String>()
                    .cloned()
                    .or_else(|| fault.downcast_ref::<&str>().map(|s| (*s).to_string()))
                    .unwrap_or_else(|| "internal parser fault".to_string());
                self.errors.push(format!("Parser Error: {detail}"));
                ParseOutcome {
                    tree: None,
                    accepted: false,
                    errors: self.errors,
                }
            }
        }
    }

    /// Program → StatementList
    pub(crate) fn program(&mut self) -> ParseTreeNode {
        let mut node = ParseTreeNode::new("Program");
        node.add_child(self.statement_list());
        node
    }
}
