/*
 * ==========================================================================
 * SYNTA - See Your Syntax!
 * ==========================================================================
 *
 * File:     lib.rs
 * Purpose:  Crate root: wires the analysis stages together and re-exports
 *           the public surface.
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

//! Synta analyzes source text written in a small imperative language
//! (assignments, conditionals, loops, function definitions, expressions)
//! and produces a token stream and a concrete parse tree, reporting precise
//! lexical and syntactic errors with position information.
//!
//! ```text
//! Source → Lexer → Tokens → { Parser, Heuristics } → Tree + Errors
//! ```
//!
//! Each analysis owns its own lexer, parser, and tree: there is no shared
//! state across requests, so independent analyses may run concurrently
//! without coordination. The core performs no I/O and cannot block.

/// The one-call `analyze`/`validate` facade.
pub mod analyzer;

/// Caret-style diagnostic rendering for the CLI.
pub mod diagnostics;

/// Error taxonomy, accumulator, and suggestions.
pub mod error;

/// The static grammar-rule table.
pub mod grammar;

/// Heuristic scan for common mistakes.
pub mod heuristics;

/// Lexical analysis: tokens, keywords, the tokenizer.
pub mod lexer;

/// The recursive-descent syntax analyzer.
pub mod parser;

/// Source positions.
pub mod span;

/// The concrete parse tree.
pub mod tree;

pub use analyzer::{analyze, validate, Analysis, TokenView, Validation};
pub use diagnostics::DiagnosticPrinter;
pub use error::{suggestion_for, CompilerError, ErrorHandler, ErrorType, LexicalError};
pub use grammar::{grammar_rules, GrammarRule};
pub use heuristics::detect_common_errors;
pub use lexer::token::{Token, TokenCategory, TokenKind, TokenValue};
pub use lexer::{tokenize, Lexer};
pub use parser::{parse, ParseOutcome, Parser};
pub use span::Span;
pub use tree::ParseTreeNode;
