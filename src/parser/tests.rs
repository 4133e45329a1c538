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

use crate::lexer::tokenize;
use crate::parser::{parse, ParseOutcome};
use crate::tree::ParseTreeNode;
use pretty_assertions::assert_eq;

fn parse_source(source: &str) -> ParseOutcome {
    let tokens = tokenize(source).expect("tokenize failed");
    parse(tokens)
}

fn tree(outcome: &ParseOutcome) -> &ParseTreeNode {
    outcome.tree.as_ref().expect("no tree produced")
}

/// First descendant with the given name, depth-first.
fn find<'a>(node: &'a ParseTreeNode, name: &str) -> Option<&'a ParseTreeNode> {
    node.all_nodes()
        .into_iter()
        .map(|(n, _)| n)
        .find(|n| n.name == name)
}

#[test]
fn accepts_simple_assignment() {
    let outcome = parse_source("x=5;");
    assert!(outcome.accepted);
    assert_eq!(outcome.errors, Vec::<String>::new());
    assert_eq!(tree(&outcome).name, "Program");
}

#[test]
fn assignment_tree_retains_terminals() {
    let outcome = parse_source("x=5;");
    let assignment = find(tree(&outcome), "Assignment").expect("no Assignment node");
    let names: Vec<&str> = assignment
        .children
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, vec!["id(x)", "=", "E", ";"]);
    assert!(find(assignment, "number(5)").is_some());
}

#[test]
fn missing_semicolon_is_reported_without_throwing() {
    let outcome = parse_source("x = 5");
    assert!(!outcome.accepted);
    assert!(outcome.errors.iter().any(|e| e.contains("SEMICOLON")));
    // best-effort tree still present
    assert!(outcome.tree.is_some());
}

#[test]
fn missing_rparen_in_if_condition() {
    let outcome = parse_source("if (x > 0 { y = 1; }");
    assert!(!outcome.accepted);
    assert!(outcome.errors.iter().any(|e| e.contains("Expected RPAREN")));
}

#[test]
fn eat_records_but_does_not_advance() {
    // '=' missing: the NUMBER that follows must still be consumed as the
    // expression, leaving exactly one error
    let outcome = parse_source("x 5;");
    assert_eq!(outcome.errors.len(), 1);
    assert!(outcome.errors[0].contains("Expected ASSIGN but got NUMBER"));
    assert!(find(tree(&outcome), "number(5)").is_some());
}

#[test]
fn add_sub_chains_nest_left() {
    let outcome = parse_source("x = a-b-c;");
    assert!(outcome.accepted);
    let e = find(tree(&outcome), "E").expect("no E node");
    let outer = &e.children[0];
    assert_eq!(outer.name, "AddSub");
    // outer = (a-b)-c: the left child is itself an AddSub, the right a T
    assert_eq!(outer.children[0].name, "AddSub");
    assert_eq!(outer.children[1].name, "op(-)");
    assert_eq!(outer.children[2].name, "T");
    let inner = &outer.children[0];
    assert_eq!(inner.children[0].name, "T");
    assert_eq!(inner.children[1].name, "op(-)");
    assert!(find(inner, "id(a)").is_some());
    assert!(find(&outer.children[2], "id(c)").is_some());
}

#[test]
fn mul_div_chains_nest_left() {
    let outcome = parse_source("x = a/b%c;");
    assert!(outcome.accepted);
    let t = find(tree(&outcome), "T").expect("no T node");
    let outer = &t.children[0];
    assert_eq!(outer.name, "MulDiv");
    assert_eq!(outer.children[0].name, "MulDiv");
    assert_eq!(outer.children[1].name, "op(%)");
}

#[test]
fn power_nests_right() {
    let outcome = parse_source("x = a**b**c;");
    assert!(outcome.accepted);
    let f = find(tree(&outcome), "F").expect("no F node");
    // F(a ** F(b ** F(c))): the second ** lives inside the right child
    assert_eq!(f.children[0].name, "P");
    assert_eq!(f.children[1].name, "op(**)");
    assert_eq!(f.children[2].name, "F");
    let right = &f.children[2];
    assert_eq!(right.children[1].name, "op(**)");
    assert_eq!(right.children[2].name, "F");
    assert!(find(right, "id(c)").is_some());
}

#[test]
fn precedence_puts_multiplication_below_addition() {
    let outcome = parse_source("x = a + b * c;");
    assert!(outcome.accepted);
    let addsub = find(tree(&outcome), "AddSub").expect("no AddSub node");
    // the multiplication hangs off the right-hand term of the addition
    let right_term = &addsub.children[2];
    assert_eq!(right_term.name, "T");
    assert!(find(right_term, "MulDiv").is_some());
}

#[test]
fn condition_without_relop_is_truthiness() {
    let outcome = parse_source("while (x) { y = 1; }");
    assert!(outcome.accepted);
    let condition = find(tree(&outcome), "Condition").expect("no Condition node");
    assert_eq!(condition.children.len(), 1);
    assert_eq!(condition.children[0].name, "E");
}

#[test]
fn condition_with_relop_keeps_both_sides() {
    let outcome = parse_source("if (a <= b) { y = 1; }");
    assert!(outcome.accepted);
    let condition = find(tree(&outcome), "Condition").expect("no Condition node");
    let names: Vec<&str> = condition
        .children
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, vec!["E", "relop(<=)", "E"]);
}

#[test]
fn for_clause_assignments_have_no_semicolon_child() {
    let outcome = parse_source("for (i = 0; i < 10; i = i + 1) { sum = sum + i; }");
    assert!(outcome.accepted, "errors: {:?}", outcome.errors);
    let for_node = find(tree(&outcome), "ForStatement").expect("no ForStatement node");
    let clause_assignments: Vec<&ParseTreeNode> = for_node
        .children
        .iter()
        .filter(|c| c.name == "Assignment")
        .collect();
    assert_eq!(clause_assignments.len(), 2);
    for assignment in clause_assignments {
        let names: Vec<&str> = assignment
            .children
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["id(i)", "=", "E"]);
    }
    // the body assignment keeps its semicolon
    let block = find(for_node, "Block").expect("no Block node");
    let body_assignment = find(block, "Assignment").expect("no body Assignment");
    assert_eq!(body_assignment.children.last().map(|c| c.name.as_str()), Some(";"));
}

#[test]
fn for_statement_with_empty_clauses() {
    let outcome = parse_source("for (;;) { x = 1; }");
    assert!(outcome.accepted, "errors: {:?}", outcome.errors);
    let for_node = find(tree(&outcome), "ForStatement").expect("no ForStatement node");
    let epsilon_count = for_node
        .children
        .iter()
        .filter(|c| c.is_epsilon())
        .count();
    assert_eq!(epsilon_count, 3);
}

#[test]
fn function_def_and_nested_calls() {
    let outcome = parse_source("def add(a, b) { return a + b; } result = add(multiply(2, 3), 4);");
    assert!(outcome.accepted, "errors: {:?}", outcome.errors);
    let root = tree(&outcome);
    let def = find(root, "FunctionDef").expect("no FunctionDef node");
    let params = find(def, "ParamList").expect("no ParamList node");
    assert!(find(params, "id(a)").is_some());
    let call = find(root, "FunctionCall").expect("no FunctionCall node");
    // the inner call nests inside the outer call's first argument
    let nested_calls = call
        .all_nodes()
        .iter()
        .filter(|(n, _)| n.name == "FunctionCall")
        .count();
    assert_eq!(nested_calls, 2);
}

#[test]
fn bare_return_keeps_epsilon_expression() {
    let outcome = parse_source("def noop() { return; }");
    assert!(outcome.accepted, "errors: {:?}", outcome.errors);
    let ret = find(tree(&outcome), "ReturnStatement").expect("no ReturnStatement node");
    let names: Vec<&str> = ret.children.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["return", "ε", ";"]);
}

#[test]
fn unexpected_statement_token_advances_and_records() {
    let outcome = parse_source("if (x > 1) 5;");
    assert!(!outcome.accepted);
    assert!(outcome
        .errors
        .iter()
        .any(|e| e.contains("Unexpected token NUMBER at line 1")));
}

#[test]
fn trailing_tokens_after_program() {
    let outcome = parse_source("x = 1; )");
    assert!(!outcome.accepted);
    assert!(outcome
        .errors
        .iter()
        .any(|e| e == "Unexpected token ')' after program"));
}

#[test]
fn failed_primary_bounds_error_count() {
    // every offender is stepped over exactly once, so the walk terminates
    let outcome = parse_source("x = ;");
    assert!(!outcome.accepted);
    assert!(outcome
        .errors
        .iter()
        .any(|e| e.contains("Unexpected token in primary: SEMICOLON")));
}

#[test]
fn empty_token_stream_parses_to_empty_program() {
    let outcome = parse_source("");
    assert!(outcome.accepted);
    let root = tree(&outcome);
    assert_eq!(root.name, "Program");
    let list = &root.children[0];
    assert_eq!(list.name, "StatementList");
    assert!(list.children[0].is_epsilon());
}

#[test]
fn multiple_statements_chain_through_statement_list() {
    let outcome = parse_source("x = 5; y = 10; z = x + y;");
    assert!(outcome.accepted);
    let root = tree(&outcome);
    // three nested StatementLists plus the terminating epsilon
    let mut list = &root.children[0];
    let mut statements = 0;
    while list.children.len() == 2 {
        assert_eq!(list.children[0].name, "Statement");
        statements += 1;
        list = &list.children[1];
    }
    assert_eq!(statements, 3);
    assert!(list.children[0].is_epsilon());
}

#[test]
fn node_count_dominates_leaf_count() {
    let outcome = parse_source("if (x > 0) { y = x * 2; } else { y = 0; }");
    assert!(outcome.accepted);
    let root = tree(&outcome);
    assert!(root.count_nodes() >= root.get_leaves().len());
    assert!(root.get_height() > 1);
}
