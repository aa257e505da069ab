//! Lexer: expression text to tokens
//!
//! The recognizer for `Function` and `Constant` tokens is built from the
//! current registry contents, so registering a function changes how source
//! text lexes. Characters that belong to no token class (whitespace included)
//! are passed over.

use log::trace;

use crate::functions::registry;
use crate::parser::tokens::{Token, TokenKind};

/// Tokenize an expression string.
pub fn tokenize(input: &str) -> Vec<Token> {
    let functions = registry::function_names();
    let constants = registry::constant_names();

    let chars: Vec<char> = input.chars().collect();
    let mut tokens: Vec<Token> = Vec::new();
    let mut inside_modulus = false;

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];

        if c.is_ascii_alphabetic() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_alphabetic() {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            // Registry names match word-bounded only: a trailing digit breaks
            // the boundary, so "sin2" lexes as a variable followed by a number.
            let digit_follows = chars.get(i).is_some_and(|ch| ch.is_ascii_digit());
            let kind = if !digit_follows && functions.iter().any(|f| *f == word) {
                TokenKind::Function
            } else if !digit_follows && constants.iter().any(|k| *k == word) {
                TokenKind::Constant
            } else {
                TokenKind::Variable
            };
            tokens.push(Token::new(kind, word));
        } else if c.is_ascii_digit() {
            let text = read_number(&chars, &mut i);
            tokens.push(Token::new(TokenKind::Number, text));
        } else if c == '-' && is_negative_sign(&tokens, inside_modulus) {
            // Absorb the minus into an immediately following numeric literal.
            let mut j = i + 1;
            while j < chars.len() && chars[j].is_whitespace() {
                j += 1;
            }
            if chars.get(j).is_some_and(|ch| ch.is_ascii_digit()) {
                i = j;
                let digits = read_number(&chars, &mut i);
                tokens.push(Token::new(TokenKind::Number, format!("-{}", digits)));
            } else {
                i += 1;
                tokens.push(Token::new(TokenKind::Operator, "-"));
            }
        } else {
            match c {
                '+' | '-' | '*' | '/' | '^' => {
                    tokens.push(Token::new(TokenKind::Operator, c.to_string()));
                }
                '=' => tokens.push(Token::new(TokenKind::Equals, "=")),
                '(' | ')' => tokens.push(Token::new(TokenKind::Parenthesis, c.to_string())),
                '|' => {
                    inside_modulus = !inside_modulus;
                    tokens.push(Token::new(TokenKind::ModulusDelimiter, "|"));
                }
                _ => {} // whitespace and unrecognized characters
            }
            i += 1;
        }
    }

    trace!("tokenized {:?} into {} tokens", input, tokens.len());
    tokens
}

/// Read `\d+(\.\d+)?` starting at `*i`, advancing past it.
fn read_number(chars: &[char], i: &mut usize) -> String {
    let start = *i;
    while *i < chars.len() && chars[*i].is_ascii_digit() {
        *i += 1;
    }
    if *i < chars.len()
        && chars[*i] == '.'
        && chars.get(*i + 1).is_some_and(|ch| ch.is_ascii_digit())
    {
        *i += 1;
        while *i < chars.len() && chars[*i].is_ascii_digit() {
            *i += 1;
        }
    }
    chars[start..*i].iter().collect()
}

/// Decide whether a `-` at the current position starts a negative number.
///
/// It does at the start of input, after another operator, after an opening
/// parenthesis, and right after an opening modulus bar. Note that `=` is its
/// own token kind and does not enable sign absorption.
fn is_negative_sign(tokens: &[Token], inside_modulus: bool) -> bool {
    match tokens.last() {
        None => true,
        Some(prev) => {
            prev.kind == TokenKind::Operator
                || (prev.kind == TokenKind::Parenthesis && prev.text == "(")
                || (prev.kind == TokenKind::ModulusDelimiter && inside_modulus)
        }
    }
}
