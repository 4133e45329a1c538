/*
 * ==========================================================================
 * SYNTA - See Your Syntax!
 * ==========================================================================
 *
 * File:     expressions.rs
 * Purpose:  Expression grammar and operator precedence.
 *
 * Parsing order follows the precedence ladder, lowest first:
 *
 *   Condition → E → T → F → P
 *
 * `+ - * / %` chains build left-nested AddSub/MulDiv nodes; `**` nests
 * rightward through F. Redundant terminals stay in the tree, so the result
 * is a literal parse rather than an abstract syntax tree.
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

use crate::lexer::token::TokenKind;
use crate::parser::parser::Parser;
use crate::tree::ParseTreeNode;

impl Parser {
    /// Condition → E ( RelOp E )?
    ///
    /// Without a relational operator the condition is the truthiness of
    /// the expression.
    pub(crate) fn condition(&mut self) -> ParseTreeNode {
        let mut node = ParseTreeNode::new("Condition");
        node.add_child(self.expression());
        if matches!(
            self.current().kind,
            TokenKind::Lt
                | TokenKind::Gt
                | TokenKind::Le
                | TokenKind::Ge
                | TokenKind::Eq
                | TokenKind::Ne
        ) {
            let op = self.advance();
            node.add_child(ParseTreeNode::new(format!("relop({})", op.lexeme)));
            node.add_child(self.expression());
        }
        node
    }

    /// E → T ( (+|-) T )*
    ///
    /// Left-associative: each operator folds the chain built so far into a
    /// new `AddSub` node with children `[left, op, right]` in source order.
    pub(crate) fn expression(&mut self) -> ParseTreeNode {
        let mut node = ParseTreeNode::new("E");
        let mut chain = self.term();
        while matches!(self.current().kind, TokenKind::Plus | TokenKind::Minus) {
            let op = self.advance();
            let mut bin = ParseTreeNode::new("AddSub");
            bin.add_child(chain);
            bin.add_child(ParseTreeNode::new(format!("op({})", op.lexeme)));
            bin.add_child(self.term());
            chain = bin;
        }
        node.add_child(chain);
        node
    }

    /// T → F ( (*|/|%) F )*
    pub(crate) fn term(&mut self) -> ParseTreeNode {
        let mut node = ParseTreeNode::new("T");
        let mut chain = self.factor();
        while matches!(
            self.current().kind,
            TokenKind::Multiply | TokenKind::Divide | TokenKind::Modulo
        ) {
            let op = self.advance();
            let mut bin = ParseTreeNode::new("MulDiv");
            bin.add_child(chain);
            bin.add_child(ParseTreeNode::new(format!("op({})", op.lexeme)));
            bin.add_child(self.factor());
            chain = bin;
        }
        node.add_child(chain);
        node
    }

    /// F → P ( ** F )?
    ///
    /// Right-associative by direct recursion on F.
    pub(crate) fn factor(&mut self) -> ParseTreeNode {
        let mut node = ParseTreeNode::new("F");
        node.add_child(self.primary());
        if self.check(TokenKind::Power) {
            if let Some(op) = self.eat(TokenKind::Power) {
                node.add_child(ParseTreeNode::new(format!("op({})", op.lexeme)));
            }
            node.add_child(self.factor());
        }
        node
    }

    /// P → ( E ) | id FunctionCall? | number
    ///
    /// A token that can't start a primary records an error and is stepped
    /// over unconditionally, which bounds the number of errors by the
    /// input length and keeps the expression walk from looping.
    pub(crate) fn primary(&mut self) -> ParseTreeNode {
        let mut node = ParseTreeNode::new("P");
        match self.current().kind {
            TokenKind::LParen => {
                self.eat(TokenKind::LParen);
                node.add_child(ParseTreeNode::new("("));
                node.add_child(self.expression());
                self.eat(TokenKind::RParen);
                node.add_child(ParseTreeNode::new(")"));
            }
            TokenKind::Id => {
                if let Some(id) = self.eat(TokenKind::Id) {
                    node.add_child(ParseTreeNode::new(format!("id({})", id.value)));
                }
                if self.check(TokenKind::LParen) {
                    node.add_child(self.function_call());
                }
            }
            TokenKind::Number => {
                if let Some(num) = self.eat(TokenKind::Number) {
                    node.add_child(ParseTreeNode::new(format!("number({})", num.value)));
                }
            }
            _ => {
                let token = self.advance();
                self.errors.push(format!(
                    "Unexpected token in primary: {} at line {}",
                    token.kind, token.span.line
                ));
            }
        }
        node
    }

    /// FunctionCall → ( ArgList )
    ///
    /// Only entered when the current token is `(`.
    pub(crate) fn function_call(&mut self) -> ParseTreeNode {
        let mut node = ParseTreeNode::new("FunctionCall");
        self.eat(TokenKind::LParen);
        node.add_child(ParseTreeNode::new("("));
        if !self.check(TokenKind::RParen) {
            node.add_child(self.expression());
            while self.check(TokenKind::Comma) {
                self.eat(TokenKind::Comma);
                node.add_child(ParseTreeNode::new(","));
                node.add_child(self.expression());
            }
        }
        self.eat(TokenKind::RParen);
        node.add_child(ParseTreeNode::new(")"));
        node
    }
}
