//! Recursive-descent parser over the token stream
//!
//! Precedence climbing, lowest to highest: equals, additive, multiplicative,
//! exponentiation, primary. Every binary level is left-associative, `^`
//! included, so `a^b^c` parses as `(a^b)^c`. Failures are in-band error
//! nodes; an error returned by a recursive call propagates upward without
//! further token consumption.

use crate::Node;
use crate::parser::tokens::{Token, TokenKind};

pub struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn consume(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Parse an expression from the tokens. Trailing tokens the grammar does
    /// not reach are ignored.
    pub fn parse_expression(&mut self) -> Node {
        self.parse_equals()
    }

    fn parse_equals(&mut self) -> Node {
        let mut left = self.parse_additive();
        if left.is_error() {
            return left;
        }

        while let Some(token) = self.peek() {
            if token.kind != TokenKind::Equals {
                break;
            }
            self.consume();
            let right = self.parse_additive();
            if right.is_error() {
                return right;
            }
            left = Node::equals(left, right);
        }

        left
    }

    fn parse_additive(&mut self) -> Node {
        let mut left = self.parse_multiplicative();
        if left.is_error() {
            return left;
        }

        while let Some(token) = self.peek() {
            let op = match token.text.as_str() {
                "+" if token.kind == TokenKind::Operator => '+',
                "-" if token.kind == TokenKind::Operator => '-',
                _ => break,
            };
            self.consume();
            let right = self.parse_multiplicative();
            if right.is_error() {
                return right;
            }
            left = Node::binary(op, left, right);
        }

        left
    }

    fn parse_multiplicative(&mut self) -> Node {
        let mut left = self.parse_exponentiation();
        if left.is_error() {
            return left;
        }

        while let Some(token) = self.peek() {
            let op = match token.text.as_str() {
                "*" if token.kind == TokenKind::Operator => '*',
                "/" if token.kind == TokenKind::Operator => '/',
                _ => break,
            };
            self.consume();
            let right = self.parse_exponentiation();
            if right.is_error() {
                return right;
            }
            left = Node::binary(op, left, right);
        }

        left
    }

    fn parse_exponentiation(&mut self) -> Node {
        let mut left = self.parse_primary();
        if left.is_error() {
            return left;
        }

        while let Some(token) = self.peek() {
            if token.kind != TokenKind::Operator || token.text != "^" {
                break;
            }
            self.consume();
            let right = self.parse_primary();
            if right.is_error() {
                return right;
            }
            left = Node::binary('^', left, right);
        }

        left
    }

    fn parse_primary(&mut self) -> Node {
        let Some(token) = self.peek() else {
            return Node::error("Unexpected end of tokens");
        };

        match token.kind {
            TokenKind::Number => {
                let text = token.text.clone();
                self.consume();
                match text.parse::<f64>() {
                    Ok(value) => Node::number(value),
                    Err(_) => Node::error(format!("invalid number literal {}", text)),
                }
            }

            TokenKind::Constant => {
                let name = token.text.clone();
                self.consume();
                Node::constant(name)
            }

            TokenKind::Variable => {
                let name = token.text.clone();
                self.consume();
                Node::variable(name)
            }

            TokenKind::Function => {
                let id = token.text.clone();
                self.consume();

                if self.peek().map(|t| t.text.as_str()) != Some("(") {
                    return Node::error("expected '(' after function");
                }
                self.consume();

                let argument = self.parse_expression();
                if argument.is_error() {
                    return argument;
                }

                if self.peek().map(|t| t.text.as_str()) != Some(")") {
                    return Node::error("expected ')' after function argument");
                }
                self.consume();

                Node::func(id, argument)
            }

            TokenKind::ModulusDelimiter => {
                self.consume();

                let argument = self.parse_expression();
                if argument.is_error() {
                    return argument;
                }

                if self.peek().map(|t| t.text.as_str()) != Some("|") {
                    return Node::error("expected '|' to close modulus expression");
                }
                self.consume();

                Node::func("abs", argument)
            }

            TokenKind::Parenthesis if token.text == "(" => {
                self.consume();

                let inner = self.parse_expression();
                if inner.is_error() {
                    return inner;
                }

                if self.peek().map(|t| t.text.as_str()) != Some(")") {
                    return Node::error("expected ')'");
                }
                self.consume();

                inner
            }

            _ => Node::error(format!("unexpected token {}", token.text)),
        }
    }
}
