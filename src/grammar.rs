/*
 * ==========================================================================
 * SYNTA - See Your Syntax!
 * ==========================================================================
 *
 * File:      grammar.rs
 * Purpose:   The static production table for the analyzed language.
 *            Reference data for callers; the parser's control flow never
 *            consults it.
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

use serde::Serialize;
use std::fmt;

/// A single production rule: a non-terminal, its alternatives as text, and
/// a one-line description.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GrammarRule {
    pub lhs: &'static str,
    pub rhs: &'static str,
    pub description: &'static str,
}

impl fmt::Display for GrammarRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {}", self.lhs, self.rhs)
    }
}

/// The grammar, lowest precedence first within expressions: comparison,
/// then `+ -`, then `* / %`, then right-associative `**`.
pub static GRAMMAR_RULES: &[GrammarRule] = &[
    // Program structure
    GrammarRule {
        lhs: "Program",
        rhs: "StatementList",
        description: "Program: Sequence of statements",
    },
    GrammarRule {
        lhs: "StatementList",
        rhs: "Statement StatementList | ε",
        description: "Statement List: Zero or more statements",
    },
    // Statements
    GrammarRule {
        lhs: "Statement",
        rhs: "Assignment | IfStatement | WhileStatement | ForStatement | FunctionDef | ReturnStatement | Block",
        description: "Statement: Various statement types",
    },
    GrammarRule {
        lhs: "Assignment",
        rhs: "id = E ;",
        description: "Assignment: Variable assignment",
    },
    GrammarRule {
        lhs: "Block",
        rhs: "{ StatementList }",
        description: "Block: Group of statements in braces",
    },
    // Control flow
    GrammarRule {
        lhs: "IfStatement",
        rhs: "if ( Condition ) Statement ElsePart",
        description: "If Statement: Conditional execution",
    },
    GrammarRule {
        lhs: "ElsePart",
        rhs: "else Statement | ε",
        description: "Else Part: Optional else clause",
    },
    GrammarRule {
        lhs: "WhileStatement",
        rhs: "while ( Condition ) Statement",
        description: "While Statement: Loop with condition",
    },
    GrammarRule {
        lhs: "ForStatement",
        rhs: "for ( [Assignment] ; [Condition] ; [Assignment] ) Statement",
        description: "For Statement: Traditional for loop; clause assignments carry no trailing semicolon",
    },
    // Functions
    GrammarRule {
        lhs: "FunctionDef",
        rhs: "def id ( ParamList ) Block",
        description: "Function Definition: Named function with parameters",
    },
    GrammarRule {
        lhs: "ParamList",
        rhs: "id ParamListTail | ε",
        description: "Parameter List: Function parameters",
    },
    GrammarRule {
        lhs: "ParamListTail",
        rhs: ", id ParamListTail | ε",
        description: "Parameter List Tail: Additional parameters",
    },
    GrammarRule {
        lhs: "ReturnStatement",
        rhs: "return E ; | return ;",
        description: "Return Statement: Return value from function",
    },
    // Conditions
    GrammarRule {
        lhs: "Condition",
        rhs: "E RelOp E | E",
        description: "Condition: Comparison between expressions, or truthiness of one",
    },
    GrammarRule {
        lhs: "RelOp",
        rhs: "< | > | <= | >= | == | !=",
        description: "Relational Operator: Comparison operators",
    },
    // Arithmetic expressions (left-factored, left recursion eliminated)
    GrammarRule {
        lhs: "E",
        rhs: "TE'",
        description: "Expression: Term followed by Expression Prime",
    },
    GrammarRule {
        lhs: "E'",
        rhs: "+TE' | -TE' | ε",
        description: "Expression Prime: Add/Sub operations or epsilon",
    },
    GrammarRule {
        lhs: "T",
        rhs: "FT'",
        description: "Term: Factor followed by Term Prime",
    },
    GrammarRule {
        lhs: "T'",
        rhs: "*FT' | /FT' | %FT' | ε",
        description: "Term Prime: Mul/Div/Mod operations or epsilon",
    },
    GrammarRule {
        lhs: "F",
        rhs: "P**F | P",
        description: "Factor: Power operation (right-associative) or Primary",
    },
    GrammarRule {
        lhs: "P",
        rhs: "(E) | id FunctionCall | number",
        description: "Primary: Parenthesized expr, function call, identifier, or number",
    },
    // Function calls
    GrammarRule {
        lhs: "FunctionCall",
        rhs: "( ArgList ) | ε",
        description: "Function Call: Optional function invocation",
    },
    GrammarRule {
        lhs: "ArgList",
        rhs: "E ArgListTail | ε",
        description: "Argument List: Function arguments",
    },
    GrammarRule {
        lhs: "ArgListTail",
        rhs: ", E ArgListTail | ε",
        description: "Argument List Tail: Additional arguments",
    },
    // Lexical rules
    GrammarRule {
        lhs: "id",
        rhs: "letter (letter | digit | _)*",
        description: "Identifier: Starts with letter/underscore",
    },
    GrammarRule {
        lhs: "number",
        rhs: "digit+ | digit+.digit+",
        description: "Number: Integer or floating-point",
    },
    GrammarRule {
        lhs: "letter",
        rhs: "a-z | A-Z | _",
        description: "Letter: Alphabetic character or underscore",
    },
    GrammarRule {
        lhs: "digit",
        rhs: "0-9",
        description: "Digit: Numeric character",
    },
];

/// Non-terminals of the grammar.
pub static NON_TERMINALS: &[&str] = &[
    "Program",
    "StatementList",
    "Statement",
    "Assignment",
    "Block",
    "IfStatement",
    "ElsePart",
    "WhileStatement",
    "ForStatement",
    "FunctionDef",
    "ParamList",
    "ParamListTail",
    "ReturnStatement",
    "Condition",
    "RelOp",
    "E",
    "E'",
    "T",
    "T'",
    "F",
    "P",
    "FunctionCall",
    "ArgList",
    "ArgListTail",
];

/// Terminals of the grammar.
pub static TERMINALS: &[&str] = &[
    "+", "-", "*", "/", "%", "**", "(", ")", "{", "}", ";", ",", "=", "<", ">", "<=", ">=", "==",
    "!=", "if", "else", "while", "for", "def", "return", "id", "number", "ε",
];

/// The full rule table, in declaration order.
pub fn grammar_rules() -> &'static [GrammarRule] {
    GRAMMAR_RULES
}

/// A symbol is terminal when it is listed as one, or not known as a
/// non-terminal at all.
pub fn is_terminal(symbol: &str) -> bool {
    TERMINALS.contains(&symbol) || !NON_TERMINALS.contains(&symbol)
}

pub fn is_non_terminal(symbol: &str) -> bool {
    NON_TERMINALS.contains(&symbol)
}

/// The grammar as one production per line.
pub fn grammar_as_string() -> String {
    GRAMMAR_RULES
        .iter()
        .map(GrammarRule::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_lhs_is_a_known_non_terminal_or_lexical_rule() {
        for rule in grammar_rules() {
            assert!(
                is_non_terminal(rule.lhs)
                    || matches!(rule.lhs, "id" | "number" | "letter" | "digit"),
                "unknown lhs {}",
                rule.lhs
            );
        }
    }

    #[test]
    fn symbol_classification() {
        assert!(is_non_terminal("Statement"));
        assert!(!is_terminal("Statement"));
        assert!(is_terminal(";"));
        assert!(is_terminal("if"));
        // unknown symbols default to terminal
        assert!(is_terminal("spelunk"));
        assert!(!is_non_terminal("spelunk"));
    }

    #[test]
    fn rules_render_with_arrow() {
        let program = &grammar_rules()[0];
        assert_eq!(program.to_string(), "Program → StatementList");
        assert!(grammar_as_string().lines().count() == grammar_rules().len());
    }
}
