use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::syntax::expression_tree::Node;
use log::trace;

/// Builds a binary operation, replacing it with an equivalent simpler tree when one of the
/// operands is the literal `0` or `1`.
///
/// Only literal operands are considered, a variable is never assumed to hold any value.
/// The first operand condition that holds decides which identities are tried:
///
/// * `0 / x -> 0`, `0 + x -> x`, `0 * x -> 0`
/// * `x + 0 -> x`, `x - 0 -> x`, `x * 0 -> 0`
/// * `x / 1 -> x`, `x * 1 -> x`
/// * `1 * x -> x`
///
/// Assignments are never simplified.
///
/// # Examples
///
/// ```
/// use infix_calculator::interpreter::operator::BinaryOperator;
/// use infix_calculator::interpreter::simplifier::simplify_binary_operation;
/// use infix_calculator::interpreter::syntax::expression_tree::Node;
///
/// let x = Node::new_identifier("x".into());
/// let simplified = simplify_binary_operation(BinaryOperator::Multiply, x, Node::new_number(0.0));
/// assert_eq!(simplified, Node::new_number(0.0));
/// ```
pub fn simplify_binary_operation(operator: BinaryOperator, left: Node, right: Node) -> Node {
    if operator == BinaryOperator::Assign {
        return Node::new_binary_operation(operator, left, right);
    }

    if left.is_number(0.0) {
        match operator {
            // 0 / x -> 0, 0 * x -> 0
            BinaryOperator::Divide | BinaryOperator::Multiply => return zero(operator),
            // 0 + x -> x
            BinaryOperator::Add => return reduced_to(operator, right),
            _ => {}
        }
    } else if right.is_number(0.0) {
        match operator {
            // x + 0 -> x, x - 0 -> x
            BinaryOperator::Add | BinaryOperator::Subtract => return reduced_to(operator, left),
            // x * 0 -> 0
            BinaryOperator::Multiply => return zero(operator),
            _ => {}
        }
    } else if right.is_number(1.0) {
        // x / 1 -> x, x * 1 -> x
        if let BinaryOperator::Divide | BinaryOperator::Multiply = operator {
            return reduced_to(operator, left);
        }
    } else if left.is_number(1.0) && operator == BinaryOperator::Multiply {
        // 1 * x -> x
        return reduced_to(operator, right);
    }

    Node::new_binary_operation(operator, left, right)
}

fn zero(operator: BinaryOperator) -> Node {
    trace!("'{}' with a zero operand folded to 0", operator);
    Node::new_number(0.0)
}

fn reduced_to(operator: BinaryOperator, operand: Node) -> Node {
    trace!("'{}' with an identity operand reduced to its other operand", operator);
    operand
}
