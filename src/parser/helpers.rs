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

use crate::lexer::token::{Token, TokenKind};
use crate::parser::parser::Parser;

impl Parser {
    /// Returns the token under the cursor. Reads past the end of the
    /// stream clamp to the end marker, so lookahead is always safe.
    pub fn current(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    /// Checks the current token's kind without consuming it.
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current().kind == kind
    }

    /// Consumes and returns the current token.
    pub fn advance(&mut self) -> Token {
        let token = self.current().clone();
        self.pos += 1;
        token
    }

    /// Consumes the current token when it has the expected kind.
    ///
    /// On a mismatch this records an error naming the expected and actual
    /// kinds with the position, and returns `None` WITHOUT advancing or
    /// panicking. Callers proceed best-effort with the missing piece.
    pub fn eat(&mut self, kind: TokenKind) -> Option<Token> {
        if self.check(kind) {
            Some(self.advance())
        } else {
            let found = self.current();
            let message = format!(
                "Expected {} but got {} at line {}, column {}",
                kind, found.kind, found.span.line, found.span.column
            );
            self.errors.push(message);
            None
        }
    }
}
