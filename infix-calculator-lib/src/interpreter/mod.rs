pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod simplifier;
pub mod symbol_table;
pub mod syntax;
pub mod token;

use crate::interpreter::error::CalculationError;
use crate::interpreter::evaluator::evaluate_expression;
use crate::interpreter::symbol_table::SymbolTable;
use crate::interpreter::token::Token;
use std::string::FromUtf8Error;
use string_builder::Builder;

/// Parses and evaluates an expression in one step.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
/// * `table`: The values of the variables the expression may read.
///
/// returns: The value of the expression.
///
/// # Examples
///
/// ```
/// use infix_calculator::interpreter::calculate;
/// use infix_calculator::interpreter::symbol_table::SymbolTable;
///
/// let mut table = SymbolTable::new();
/// table.set("x", 4.0);
/// assert_eq!(calculate("(x+2)*3", &table).unwrap(), 18.0);
/// ```
pub fn calculate(expression: &str, table: &SymbolTable) -> Result<f64, CalculationError> {
    let tree = parser::parse(expression)?;
    let value = evaluate_expression(&tree, table)?;
    Ok(value)
}

/// Pretty-prints the given vector of tokens with added whitespace.
///
/// Binary operators are surrounded by spaces, a negation is attached to its operand.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A pretty-printed text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use infix_calculator::interpreter::parser::parse;
/// use infix_calculator::interpreter::tokens_to_string;
///
/// let tree = parse("(a+b)*(c/1)").unwrap();
/// let pretty_printed_tokens = tokens_to_string(tree.to_infix()).unwrap();
/// assert_eq!(pretty_printed_tokens, "(a + b) * c");
/// ```
pub fn tokens_to_string(tokens: Vec<Token>) -> Result<String, FromUtf8Error> {
    let mut builder = Builder::new(tokens.len());
    let mut starts_group = true;

    for token in tokens {
        match token {
            Token::Operator('=') => builder.append("="),
            Token::Operator(sign) if starts_group => builder.append(sign.to_string()),
            Token::Operator(sign) => {
                builder.append(" ");
                builder.append(sign.to_string());
                builder.append(" ");
            }
            _ => builder.append(token.to_string()),
        }
        starts_group = token == Token::LeftParenthesis;
    }

    builder.string()
}
