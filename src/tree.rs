/*
 * ==========================================================================
 * SYNTA - See Your Syntax!
 * ==========================================================================
 *
 * File:      tree.rs
 * Purpose:   The concrete parse tree built by the syntax analyzer, with
 *            its structural queries and text renderings.
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

use serde::{Deserialize, Serialize};
use std::fmt;

/// Leaf marker for the empty production.
pub const EPSILON: &str = "ε";

/// One node of the concrete parse tree.
///
/// `name` is a non-terminal label, a literal terminal spelling (`"+"`,
/// `"("`), a synthesized leaf (`id(x)`, `number(5)`, `op(+)`, `relop(<)`),
/// or the epsilon marker. Children appear in source order, so the tree is a
/// literal parse: parentheses and semicolons are retained as leaves.
///
/// Nodes form a strict forest. Children are append-only and exclusively
/// owned, so every query below is a plain recursive read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseTreeNode {
    pub name: String,
    pub value: Option<String>,
    pub children: Vec<ParseTreeNode>,
}

impl ParseTreeNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            children: Vec::new(),
        }
    }

    pub fn with_value(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            children: Vec::new(),
        }
    }

    /// A fresh epsilon leaf.
    pub fn epsilon() -> Self {
        Self::new(EPSILON)
    }

    pub fn add_child(&mut self, child: ParseTreeNode) {
        self.children.push(child);
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn is_epsilon(&self) -> bool {
        self.name == EPSILON
    }

    /// Total node count, this node included.
    pub fn count_nodes(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(ParseTreeNode::count_nodes)
            .sum::<usize>()
    }

    /// Height of the tree: 1 for a leaf, otherwise 1 + the tallest child.
    pub fn get_height(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(ParseTreeNode::get_height)
            .max()
            .unwrap_or(0)
    }

    /// All leaf nodes, left to right.
    pub fn get_leaves(&self) -> Vec<&ParseTreeNode> {
        if self.is_leaf() {
            return vec![self];
        }
        let mut leaves = Vec::new();
        for child in &self.children {
            leaves.extend(child.get_leaves());
        }
        leaves
    }

    /// Every node with its depth, in depth-first order starting at 0 here.
    pub fn all_nodes(&self) -> Vec<(&ParseTreeNode, usize)> {
        let mut nodes = vec![(self, 0)];
        for child in &self.children {
            nodes.extend(
                child
                    .all_nodes()
                    .into_iter()
                    .map(|(node, depth)| (node, depth + 1)),
            );
        }
        nodes
    }

    /// Box-drawing rendering of the tree, one node per line.
    pub fn ascii(&self) -> String {
        fn build(node: &ParseTreeNode, prefix: &str, is_last: bool, lines: &mut Vec<String>) {
            let connector = if is_last { "└── " } else { "├── " };
            lines.push(format!("{prefix}{connector}{}", node.name));

            let extension = if is_last { "    " } else { "│   " };
            let child_prefix = format!("{prefix}{extension}");
            for (i, child) in node.children.iter().enumerate() {
                build(child, &child_prefix, i == node.children.len() - 1, lines);
            }
        }

        let mut lines = vec![self.name.clone()];
        for (i, child) in self.children.iter().enumerate() {
            build(child, "", i == self.children.len() - 1, &mut lines);
        }
        lines.join("\n")
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, level: usize) -> fmt::Result {
        write!(f, "{}{}", "  ".repeat(level), self.name)?;
        if let Some(value) = &self.value {
            write!(f, " = {value}")?;
        }
        writeln!(f)?;
        for child in &self.children {
            child.write_indented(f, level + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for ParseTreeNode {
    /// Two-space indented listing, one node per line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}
