use crate::interpreter::error::{EvaluationError, ParseError};
use crate::interpreter::token::Token;
use std::fmt;
use std::fmt::Formatter;

/// A binary mathematical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Assign,
}

/// An unary mathematical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum UnaryOperator {
    Negate,
}

/// Either kind of operator, as it waits on the operator stack during parsing.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Operator {
    Unary(UnaryOperator),
    Binary(BinaryOperator),
}

impl UnaryOperator {
    pub fn sign(&self) -> char {
        match self {
            UnaryOperator::Negate => '-',
        }
    }

    pub fn token(&self) -> Token {
        Token::Operator(self.sign())
    }

    pub(crate) fn precedence(&self) -> u8 {
        match self {
            UnaryOperator::Negate => 0,
        }
    }

    pub fn apply(&self, x: f64) -> f64 {
        match self {
            UnaryOperator::Negate => -x,
        }
    }
}

impl BinaryOperator {
    pub fn sign(&self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Subtract => '-',
            BinaryOperator::Multiply => '*',
            BinaryOperator::Divide => '/',
            BinaryOperator::Assign => '=',
        }
    }

    pub fn token(&self) -> Token {
        Token::Operator(self.sign())
    }

    pub(crate) fn precedence(&self) -> u8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => 0,
            BinaryOperator::Multiply | BinaryOperator::Divide | BinaryOperator::Assign => 1,
        }
    }

    pub(crate) fn precedence_gt(&self, other: &Self) -> bool {
        self.precedence().gt(&other.precedence())
    }

    /// Applies the operator to two already evaluated operands.
    ///
    /// Division by zero is reported instead of producing an infinity, and an assignment
    /// has no numerical result.
    pub fn apply(&self, a: f64, b: f64) -> Result<f64, EvaluationError> {
        match self {
            BinaryOperator::Add => Ok(a + b),
            BinaryOperator::Subtract => Ok(a - b),
            BinaryOperator::Multiply => Ok(a * b),
            BinaryOperator::Divide if b == 0.0 => Err(EvaluationError::DivisionByZero),
            BinaryOperator::Divide => Ok(a / b),
            BinaryOperator::Assign => Err(EvaluationError::AssignmentInExpression),
        }
    }
}

impl Operator {
    /// Creates the operator a sign stands for.
    ///
    /// A dash is a subtraction when `is_binary` is set and a negation otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use infix_calculator::interpreter::operator::{BinaryOperator, Operator, UnaryOperator};
    ///
    /// assert_eq!(Operator::new('-', true), Ok(Operator::Binary(BinaryOperator::Subtract)));
    /// assert_eq!(Operator::new('-', false), Ok(Operator::Unary(UnaryOperator::Negate)));
    /// assert!(Operator::new('^', true).is_err());
    /// ```
    pub fn new(sign: char, is_binary: bool) -> Result<Operator, ParseError> {
        match (sign, is_binary) {
            ('+', _) => Ok(Operator::Binary(BinaryOperator::Add)),
            ('-', true) => Ok(Operator::Binary(BinaryOperator::Subtract)),
            ('-', false) => Ok(Operator::Unary(UnaryOperator::Negate)),
            ('*', _) => Ok(Operator::Binary(BinaryOperator::Multiply)),
            ('/', _) => Ok(Operator::Binary(BinaryOperator::Divide)),
            (sign, _) => Err(ParseError::UnsupportedOperator(sign)),
        }
    }

    pub fn sign(&self) -> char {
        match self {
            Operator::Unary(operator) => operator.sign(),
            Operator::Binary(operator) => operator.sign(),
        }
    }

    fn precedence(&self) -> u8 {
        match self {
            Operator::Unary(operator) => operator.precedence(),
            Operator::Binary(operator) => operator.precedence(),
        }
    }

    pub(crate) fn precedence_le(&self, other: &Self) -> bool {
        self.precedence().le(&other.precedence())
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}
