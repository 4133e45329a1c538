/*
 * ==========================================================================
 * SYNTA - See Your Syntax!
 * ==========================================================================
 *
 * File:     lexer/mod.rs
 * Purpose:  Root module for Synta's lexical analysis stage.
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

/// Keyword table for the analyzed language.
pub mod keywords;

/// The character-cursor tokenizer.
pub mod lexer;

/// Token kinds, values, and the token record.
pub mod token;

pub use lexer::{tokenize, Lexer};
