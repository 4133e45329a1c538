/*
 * ==========================================================================
 * SYNTA - See Your Syntax!
 * ==========================================================================
 *
 * File:     statements.rs
 * Purpose:  Statement-level grammar productions.
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
    /// StatementList → Statement StatementList | ε
    pub(crate) fn statement_list(&mut self) -> ParseTreeNode {
        let mut node = ParseTreeNode::new("StatementList");
        match self.current().kind {
            TokenKind::Id
            | TokenKind::If
            | TokenKind::While
            | TokenKind::For
            | TokenKind::Def
            | TokenKind::Return
            | TokenKind::LBrace => {
                node.add_child(self.statement());
                node.add_child(self.statement_list());
            }
            _ => node.add_child(ParseTreeNode::epsilon()),
        }
        node
    }

    /// Statement → Assignment | IfStatement | WhileStatement | ForStatement
    ///            | FunctionDef | ReturnStatement | Block
    ///
    /// Dispatches on the current token's kind. Anything else is an
    /// unexpected-token error; the cursor steps over the offender so the
    /// parse always makes forward progress.
    pub(crate) fn statement(&mut self) -> ParseTreeNode {
        let mut node = ParseTreeNode::new("Statement");
        match self.current().kind {
            TokenKind::If => node.add_child(self.if_statement()),
            TokenKind::While => node.add_child(self.while_statement()),
            TokenKind::For => node.add_child(self.for_statement()),
            TokenKind::Def => node.add_child(self.function_def()),
            TokenKind::Return => node.add_child(self.return_statement()),
            TokenKind::LBrace => node.add_child(self.block()),
            TokenKind::Id => node.add_child(self.assignment(true)),
            _ => {
                let token = self.advance();
                self.errors.push(format!(
                    "Unexpected token {} at line {}",
                    token.kind, token.span.line
                ));
            }
        }
        node
    }

    /// Assignment → id = E ;
    ///
    /// Inside `for (…)` the surrounding production owns the semicolons, so
    /// the init and increment clauses pass `require_semicolon = false` and
    /// leave the trailing `;` unconsumed. One parameterized production, not
    /// two near-copies.
    pub(crate) fn assignment(&mut self, require_semicolon: bool) -> ParseTreeNode {
        let mut node = ParseTreeNode::new("Assignment");
        if let Some(id) = self.eat(TokenKind::Id) {
            node.add_child(ParseTreeNode::new(format!("id({})", id.value)));
        }
        self.eat(TokenKind::Assign);
        node.add_child(ParseTreeNode::new("="));
        node.add_child(self.expression());
        if require_semicolon {
            self.eat(TokenKind::Semicolon);
            node.add_child(ParseTreeNode::new(";"));
        }
        node
    }

    /// Block → { StatementList }
    pub(crate) fn block(&mut self) -> ParseTreeNode {
        let mut node = ParseTreeNode::new("Block");
        self.eat(TokenKind::LBrace);
        node.add_child(ParseTreeNode::new("{"));
        node.add_child(self.statement_list());
        self.eat(TokenKind::RBrace);
        node.add_child(ParseTreeNode::new("}"));
        node
    }

    /// IfStatement → if ( Condition ) Statement ElsePart
    pub(crate) fn if_statement(&mut self) -> ParseTreeNode {
        let mut node = ParseTreeNode::new("IfStatement");
        self.eat(TokenKind::If);
        node.add_child(ParseTreeNode::new("if"));
        self.eat(TokenKind::LParen);
        node.add_child(ParseTreeNode::new("("));
        node.add_child(self.condition());
        self.eat(TokenKind::RParen);
        node.add_child(ParseTreeNode::new(")"));
        node.add_child(self.statement());
        node.add_child(self.else_part());
        node
    }

    /// ElsePart → else Statement | ε
    pub(crate) fn else_part(&mut self) -> ParseTreeNode {
        let mut node = ParseTreeNode::new("ElsePart");
        if self.check(TokenKind::Else) {
            self.eat(TokenKind::Else);
            node.add_child(ParseTreeNode::new("else"));
            node.add_child(self.statement());
        } else {
            node.add_child(ParseTreeNode::epsilon());
        }
        node
    }

    /// WhileStatement → while ( Condition ) Statement
    pub(crate) fn while_statement(&mut self) -> ParseTreeNode {
        let mut node = ParseTreeNode::new("WhileStatement");
        self.eat(TokenKind::While);
        node.add_child(ParseTreeNode::new("while"));
        self.eat(TokenKind::LParen);
        node.add_child(ParseTreeNode::new("("));
        node.add_child(self.condition());
        self.eat(TokenKind::RParen);
        node.add_child(ParseTreeNode::new(")"));
        node.add_child(self.statement());
        node
    }

    /// ForStatement → for ( [Assignment] ; [Condition] ; [Assignment] ) Statement
    pub(crate) fn for_statement(&mut self) -> ParseTreeNode {
        let mut node = ParseTreeNode::new("ForStatement");
        self.eat(TokenKind::For);
        node.add_child(ParseTreeNode::new("for"));
        self.eat(TokenKind::LParen);
        node.add_child(ParseTreeNode::new("("));

        // init: optional assignment, no trailing semicolon of its own
        if self.check(TokenKind::Id) {
            node.add_child(self.assignment(false));
        } else {
            node.add_child(ParseTreeNode::epsilon());
        }
        self.eat(TokenKind::Semicolon);
        node.add_child(ParseTreeNode::new(";"));

        // condition: optional
        if self.check(TokenKind::Semicolon) {
            node.add_child(ParseTreeNode::epsilon());
        } else {
            node.add_child(self.condition());
        }
        self.eat(TokenKind::Semicolon);
        node.add_child(ParseTreeNode::new(";"));

        // increment: optional assignment, same carve-out as init
        if self.check(TokenKind::Id) {
            node.add_child(self.assignment(false));
        } else {
            node.add_child(ParseTreeNode::epsilon());
        }
        self.eat(TokenKind::RParen);
        node.add_child(ParseTreeNode::new(")"));

        node.add_child(self.statement());
        node
    }

    /// FunctionDef → def id ( ParamList ) Block
    pub(crate) fn function_def(&mut self) -> ParseTreeNode {
        let mut node = ParseTreeNode::new("FunctionDef");
        self.eat(TokenKind::Def);
        node.add_child(ParseTreeNode::new("def"));
        if let Some(id) = self.eat(TokenKind::Id) {
            node.add_child(ParseTreeNode::new(format!("id({})", id.value)));
        }
        self.eat(TokenKind::LParen);
        node.add_child(ParseTreeNode::new("("));
        node.add_child(self.param_list());
        self.eat(TokenKind::RParen);
        node.add_child(ParseTreeNode::new(")"));
        node.add_child(self.block());
        node
    }

    /// ParamList → id ( , id )* | ε
    pub(crate) fn param_list(&mut self) -> ParseTreeNode {
        let mut node = ParseTreeNode::new("ParamList");
        if self.check(TokenKind::Id) {
            if let Some(id) = self.eat(TokenKind::Id) {
                node.add_child(ParseTreeNode::new(format!("id({})", id.value)));
            }
            if self.check(TokenKind::Comma) {
                self.eat(TokenKind::Comma);
                node.add_child(ParseTreeNode::new(","));
                node.add_child(self.param_list());
            }
        } else {
            node.add_child(ParseTreeNode::epsilon());
        }
        node
    }

    /// ReturnStatement → return E ; | return ;
    pub(crate) fn return_statement(&mut self) -> ParseTreeNode {
        let mut node = ParseTreeNode::new("ReturnStatement");
        self.eat(TokenKind::Return);
        node.add_child(ParseTreeNode::new("return"));
        if self.check(TokenKind::Semicolon) {
            // bare return
            node.add_child(ParseTreeNode::epsilon());
        } else {
            node.add_child(self.expression());
        }
        self.eat(TokenKind::Semicolon);
        node.add_child(ParseTreeNode::new(";"));
        node
    }
}
