mod infix_converter;

use crate::interpreter::error::ParseError;
use crate::interpreter::lexer::tokenize;
use crate::interpreter::parser::infix_converter::infix_to_tree;
use crate::interpreter::syntax::expression_tree::Node;
use log::debug;

/// Parses the given input string into an equivalent expression tree,
/// which is easier to manipulate than the original string.
///
/// Literal `0` and `1` operands are simplified away while the tree is built.
///
/// # Arguments
///
/// * `expression`: The expression to parse, in infix format and without whitespace.
///
/// returns: The equivalent expression tree.
///
/// # Examples
///
/// ```
/// # use infix_calculator::interpreter::error::ParseError;
/// # fn main() -> Result<(), ParseError> {
/// use infix_calculator::interpreter::parser::parse;
/// use infix_calculator::interpreter::syntax::expression_tree::Node;
///
/// let tree = parse("y/1")?;
/// assert_eq!(tree, Node::new_identifier("y".into()));
/// # Ok(()) }
/// ```
pub fn parse(expression: &str) -> Result<Node, ParseError> {
    let tree = infix_to_tree(tokenize(expression))?;
    debug!("parsed '{}' into\n{}", expression, tree);
    Ok(tree)
}
