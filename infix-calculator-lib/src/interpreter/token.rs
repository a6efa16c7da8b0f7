use std::fmt;
use std::fmt::{Debug, Formatter};

/// A discrete part of an expression
#[derive(Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Identifier(String),
    Operator(char),
    LeftParenthesis,
    RightParenthesis,
}

/// Characters that always end an atom and form a token of their own.
pub static SYMBOLS: [char; 6] = ['+', '-', '*', '/', '(', ')'];

pub fn is_symbol(character: char) -> bool {
    SYMBOLS.contains(&character)
}

impl Token {
    /// Classifies a run of non-symbol characters.
    ///
    /// Only unsigned integer literals count as numbers, anything else is an identifier.
    pub fn from_atom(atom: &str) -> Token {
        let is_numeric = !atom.is_empty() && atom.chars().all(|c| c.is_ascii_digit());
        match atom.parse::<f64>() {
            Ok(value) if is_numeric => Token::Number(value),
            _ => Token::Identifier(atom.to_string()),
        }
    }

    pub fn from_symbol(symbol: char) -> Token {
        match symbol {
            '(' => Token::LeftParenthesis,
            ')' => Token::RightParenthesis,
            operator => Token::Operator(operator),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{}", value),
            Token::Identifier(name) => write!(f, "{}", name),
            Token::Operator(sign) => write!(f, "{}", sign),
            Token::LeftParenthesis => write!(f, "("),
            Token::RightParenthesis => write!(f, ")"),
        }
    }
}

impl Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized_macro::parameterized;

    #[parameterized(
    atom = { "0", "42", "007", "x", "x1", "1x", "3.5", "1e3", "a=3" },
    expected = {
    Token::Number(0.0),
    Token::Number(42.0),
    Token::Number(7.0),
    Token::Identifier("x".into()),
    Token::Identifier("x1".into()),
    Token::Identifier("1x".into()),
    Token::Identifier("3.5".into()),
    Token::Identifier("1e3".into()),
    Token::Identifier("a=3".into()),
    }
    )]
    fn atom_is_classified_as_number_only_when_all_digits(atom: &str, expected: Token) {
        assert_eq!(Token::from_atom(atom), expected);
    }

    #[test]
    fn parentheses_become_dedicated_tokens() {
        assert_eq!(Token::from_symbol('('), Token::LeftParenthesis);
        assert_eq!(Token::from_symbol(')'), Token::RightParenthesis);
        assert_eq!(Token::from_symbol('*'), Token::Operator('*'));
    }
}
