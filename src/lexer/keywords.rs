/*
 * ==========================================================================
 * SYNTA - See Your Syntax!
 * ==========================================================================
 *
 * File:      keywords.rs
 * Purpose:   Defines the reserved keywords of the analyzed language.
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

use crate::lexer::token::TokenKind;

/// Looks up the keyword kind for an identifier-shaped lexeme.
///
/// Returns `None` when the word is an ordinary identifier. The lookup is
/// case-sensitive; `If` and `IF` are identifiers, only `if` is the keyword.
pub fn keyword_kind(word: &str) -> Option<TokenKind> {
    match word {
        "if" => Some(TokenKind::If),
        "else" => Some(TokenKind::Else),
        "while" => Some(TokenKind::While),
        "for" => Some(TokenKind::For),
        "def" => Some(TokenKind::Def),
        "return" => Some(TokenKind::Return),
        _ => None,
    }
}
