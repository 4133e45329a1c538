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

use crate::error::CompilerError;
use crate::span::Span;

/// Renders human-friendly, compiler-style diagnostics for analysis errors.
///
/// This printer:
/// - Formats errors with file/line/column information
/// - Displays the offending source line
/// - Highlights the error position using a caret (`^`)
/// - Optionally shows a helpful follow-up hint
///
/// The output is intentionally inspired by `rustc` diagnostics, but
/// simplified and designed to remain readable without color. Errors that
/// carry no position print as a single header line.
pub struct DiagnosticPrinter {
    /// Full source text under analysis, kept as one string so specific
    /// lines can be extracted for display.
    source: String,

    /// Display name of the input (a file name, or something like `<input>`).
    file_name: String,
}

impl DiagnosticPrinter {
    pub fn new(file_name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source: source.into(),
        }
    }

    /// Renders one error as a diagnostic block.
    ///
    /// # Output Example
    /// ```text
    /// Semantic Error: Division by zero
    ///   --> input.syn:1:7
    ///    |
    ///  1 | x = a/0;
    ///    |       ^
    ///
    /// help: Avoid dividing by zero
    /// ```
    pub fn render(&self, error: &CompilerError) -> String {
        let mut out = String::new();

        match error.span {
            Some(Span { line, column }) => {
                let lines: Vec<&str> = self.source.lines().collect();
                let src_line = lines.get(line.saturating_sub(1)).copied().unwrap_or("");

                out.push_str(&format!(
                    "{}: {}\n  --> {}:{}:{}\n",
                    error.error_type,
                    error.message,
                    self.file_name,
                    line,
                    column + 1
                ));
                out.push_str("   |\n");
                out.push_str(&format!("{line:>3} | {src_line}\n"));

                let mut underline = String::new();
                for _ in 0..column {
                    underline.push(' ');
                }
                underline.push('^');
                out.push_str(&format!("   | {underline}\n"));
            }
            None => {
                out.push_str(&format!("{}: {}\n", error.error_type, error.message));
            }
        }

        if let Some(help) = &error.suggestion {
            out.push_str(&format!("\nhelp: {help}\n"));
        }

        out
    }

    /// Prints one error to stderr.
    pub fn print(&self, error: &CompilerError) {
        eprint!("{}", self.render(error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CompilerError;
    use pretty_assertions::assert_eq;

    #[test]
    fn renders_caret_under_the_column() {
        let printer = DiagnosticPrinter::new("input.syn", "x = a/0;");
        let error = CompilerError::semantic("Division by zero")
            .at(Span::new(1, 5))
            .with_suggestion("Avoid dividing by zero");
        assert_eq!(
            printer.render(&error),
            "Semantic Error: Division by zero\n  --> input.syn:1:6\n   |\n  1 | x = a/0;\n   |      ^\n\nhelp: Avoid dividing by zero\n"
        );
    }

    #[test]
    fn renders_header_only_without_span() {
        let printer = DiagnosticPrinter::new("input.syn", "x = 5");
        let error = CompilerError::syntax("Expected SEMICOLON but got EOF at line 1, column 5");
        assert_eq!(
            printer.render(&error),
            "Syntax Error: Expected SEMICOLON but got EOF at line 1, column 5\n"
        );
    }
}
