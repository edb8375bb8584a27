use std::mem;

use crate::lex::{Keyword, Lexer, Token, TokenKind};
use crate::{ActionInvocation, Condition, Rule, Value};

use super::error::ParseError;
use super::parser::RuleHeader;

/// Recursive-descent parser over a token stream with one token of lookahead.
pub(crate) struct Parser<'l, 's> {
    lexer: &'l mut Lexer<'s>,
    lookahead: Token<'s>,
}

impl<'l, 's> Parser<'l, 's> {
    pub(crate) fn new(lexer: &'l mut Lexer<'s>) -> Self {
        let lookahead = lexer.next_token();
        Self { lexer, lookahead }
    }

    // -- Token plumbing -----------------------------------------------------

    fn peek(&self) -> &TokenKind {
        &self.lookahead.kind
    }

    fn bump(&mut self) -> Token<'s> {
        let next = self.lexer.next_token();
        mem::replace(&mut self.lookahead, next)
    }

    fn at_keyword(&self, keyword: Keyword) -> bool {
        self.lookahead.kind == TokenKind::Keyword(keyword)
    }

    fn unexpected(&self, expected: &[&'static str]) -> ParseError {
        match &self.lookahead.kind {
            TokenKind::Error(kind) => ParseError::Lex {
                position: self.lookahead.position,
                kind: *kind,
            },
            other => ParseError::Unexpected {
                position: self.lookahead.position,
                found: other.describe(),
                expected: expected.to_vec(),
            },
        }
    }

    fn expect(&mut self, kind: &TokenKind, expected: &[&'static str]) -> Result<(), ParseError> {
        if self.peek() == kind {
            self.bump();
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn identifier(&mut self, expected: &[&'static str]) -> Result<String, ParseError> {
        if let TokenKind::Identifier(name) = &mut self.lookahead.kind {
            let name = mem::take(name);
            self.bump();
            Ok(name)
        } else {
            Err(self.unexpected(expected))
        }
    }

    fn expect_end(&mut self, expected: &[&'static str]) -> Result<(), ParseError> {
        if self.lookahead.is_eof() {
            Ok(())
        } else {
            Err(self.unexpected(expected))
        }
    }

    // -- Rules --------------------------------------------------------------

    /// `rule := "on" IDENT ("if" condition)? action+`
    pub(crate) fn rule(&mut self) -> Result<Rule, ParseError> {
        let header = self.header()?;

        let mut expected_before_actions = vec!["action"];
        if header.condition.is_some() {
            expected_before_actions.extend(["`and`", "`or`"]);
        } else {
            expected_before_actions.push("`if`");
        }

        let mut actions = Vec::new();
        while let TokenKind::Identifier(_) = self.peek() {
            actions.push(self.action()?);
        }
        if actions.is_empty() {
            return Err(self.unexpected(&expected_before_actions));
        }
        self.expect_end(&["action", "end of input"])?;

        Ok(Rule {
            trigger: header.trigger,
            condition: header.condition,
            actions,
        })
    }

    /// `lambda-rule := "on" IDENT ("if" condition)?`
    pub(crate) fn lambda_rule(&mut self) -> Result<RuleHeader, ParseError> {
        let header = self.header()?;
        if header.condition.is_some() {
            self.expect_end(&["`and`", "`or`", "end of input"])?;
        } else {
            self.expect_end(&["`if`", "end of input"])?;
        }
        Ok(header)
    }

    fn header(&mut self) -> Result<RuleHeader, ParseError> {
        self.expect(&TokenKind::Keyword(Keyword::On), &["`on`"])?;
        let trigger = self.identifier(&["trigger name"])?;

        let condition = if self.at_keyword(Keyword::If) {
            self.bump();
            Some(self.condition()?)
        } else {
            None
        };

        Ok(RuleHeader { trigger, condition })
    }

    // -- Conditions (precedence: or < and < not < primary) -----------------

    fn condition(&mut self) -> Result<Condition, ParseError> {
        self.or_expr()
    }

    fn or_expr(&mut self) -> Result<Condition, ParseError> {
        let mut acc = self.and_expr()?;
        while self.at_keyword(Keyword::Or) {
            self.bump();
            let rhs = self.and_expr()?;
            acc = Condition::Or(Box::new(acc), Box::new(rhs));
        }
        Ok(acc)
    }

    fn and_expr(&mut self) -> Result<Condition, ParseError> {
        let mut acc = self.unary()?;
        while self.at_keyword(Keyword::And) {
            self.bump();
            let rhs = self.unary()?;
            acc = Condition::And(Box::new(acc), Box::new(rhs));
        }
        Ok(acc)
    }

    fn unary(&mut self) -> Result<Condition, ParseError> {
        if self.at_keyword(Keyword::Not) {
            self.bump();
            let inner = self.unary()?;
            Ok(Condition::Not(Box::new(inner)))
        } else {
            self.primary()
        }
    }

    fn primary(&mut self) -> Result<Condition, ParseError> {
        if *self.peek() == TokenKind::LeftParen {
            self.bump();
            let inner = self.condition()?;
            self.expect(&TokenKind::RightParen, &["`)`", "`and`", "`or`"])?;
            Ok(inner)
        } else {
            self.comparison()
        }
    }

    /// `comparison := IDENT COMPARATOR literal`
    fn comparison(&mut self) -> Result<Condition, ParseError> {
        let identifier = self.identifier(&["identifier", "`not`", "`(`"])?;

        let op = match self.peek() {
            TokenKind::Operator(op) => *op,
            _ => return Err(self.unexpected(&["comparison operator"])),
        };
        self.bump();

        let value = self
            .literal(false)
            .ok_or_else(|| self.unexpected(&["literal"]))?;

        Ok(Condition::Compare {
            identifier,
            op,
            value,
        })
    }

    // -- Actions ------------------------------------------------------------

    /// `action := IDENT "(" (literal ("," literal)*)? ")"`
    fn action(&mut self) -> Result<ActionInvocation, ParseError> {
        let name = self.identifier(&["action"])?;
        self.expect(&TokenKind::LeftParen, &["`(`"])?;

        let mut arguments = Vec::new();
        if *self.peek() == TokenKind::RightParen {
            self.bump();
            return Ok(ActionInvocation { name, arguments });
        }

        loop {
            let value = self
                .literal(true)
                .ok_or_else(|| self.unexpected(&["literal", "`)`"]))?;
            arguments.push(value);

            match self.peek() {
                TokenKind::Comma => {
                    self.bump();
                }
                TokenKind::RightParen => {
                    self.bump();
                    return Ok(ActionInvocation { name, arguments });
                }
                _ => return Err(self.unexpected(&["`,`", "`)`"])),
            }
        }
    }

    // -- Literals -----------------------------------------------------------

    /// Consume a literal if the lookahead is one. Bare identifiers count as
    /// string literals in argument position (`set(alpha, 0.5)`).
    fn literal(&mut self, allow_identifier: bool) -> Option<Value> {
        let is_literal = match self.peek() {
            TokenKind::String(_)
            | TokenKind::Int(_)
            | TokenKind::Float(_)
            | TokenKind::Double(_)
            | TokenKind::Bool(_) => true,
            TokenKind::Identifier(_) => allow_identifier,
            _ => false,
        };
        if !is_literal {
            return None;
        }

        match self.bump().kind {
            TokenKind::String(s) | TokenKind::Identifier(s) => Some(Value::String(s)),
            TokenKind::Int(v) => Some(Value::Int(v)),
            TokenKind::Float(v) => Some(Value::Float(v)),
            TokenKind::Double(v) => Some(Value::Double(v)),
            TokenKind::Bool(v) => Some(Value::Bool(v)),
            _ => None,
        }
    }
}
