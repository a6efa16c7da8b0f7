use crate::interpreter::token::{is_symbol, Token};
use std::iter::{FusedIterator, Peekable};
use std::str::CharIndices;

/// A lazy stream of tokens over an expression.
///
/// Whitespace is not skipped, it becomes part of whatever atom it sits in.
pub struct Tokens<'a> {
    expression: &'a str,
    characters: Peekable<CharIndices<'a>>,
}

/// Splits the given expression into tokens.
///
/// # Arguments
///
/// * `expression`: The text-representation of an infix expression.
///
/// returns: An iterator over the tokens of the expression.
///
/// # Examples
///
/// ```
/// use infix_calculator::interpreter::lexer::tokenize;
/// use infix_calculator::interpreter::token::Token;
///
/// let tokens: Vec<Token> = tokenize("x*(12-y)").collect();
/// assert_eq!(tokens.len(), 7);
/// assert_eq!(tokens[3], Token::Number(12.0));
/// ```
pub fn tokenize(expression: &str) -> Tokens<'_> {
    Tokens {
        expression,
        characters: expression.char_indices().peekable(),
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let (start, first) = self.characters.next()?;
        if is_symbol(first) {
            return Some(Token::from_symbol(first));
        }

        let mut end = start + first.len_utf8();
        while let Some(&(index, character)) = self.characters.peek() {
            if is_symbol(character) {
                break;
            }
            end = index + character.len_utf8();
            self.characters.next();
        }
        Some(Token::from_atom(&self.expression[start..end]))
    }
}

impl<'a> FusedIterator for Tokens<'a> {}
