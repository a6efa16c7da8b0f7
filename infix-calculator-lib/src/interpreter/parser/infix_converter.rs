use crate::interpreter::error::ParseError;
use crate::interpreter::operator::Operator;
use crate::interpreter::simplifier::simplify_binary_operation;
use crate::interpreter::syntax::expression_tree::Node;
use crate::interpreter::token::Token;
use log::trace;

/// An entry of the operator stack.
#[derive(Debug, Clone, Copy, PartialEq)]
enum StackEntry {
    Operator(Operator),
    OpenParenthesis,
}

/// The working state of one conversion: pending operators and the subtrees built so far.
#[derive(Default)]
struct InfixConverter {
    operators: Vec<StackEntry>,
    operands: Vec<Node>,
}

/// Builds an expression tree out of infix tokens, using the shunting-yard algorithm with
/// a second stack of operands in place of a postfix output queue.
pub(crate) fn infix_to_tree(tokens: impl IntoIterator<Item = Token>) -> Result<Node, ParseError> {
    let mut converter = InfixConverter::default();
    // A dash is a negation at the start of the expression or right after an open parenthesis.
    let mut starts_group = true;

    for token in tokens {
        let opens_group = token == Token::LeftParenthesis;
        match token {
            Token::Number(value) => converter.operands.push(Node::new_number(value)),
            Token::Identifier(name) => converter.operands.push(Node::new_identifier(name)),
            Token::LeftParenthesis => converter.operators.push(StackEntry::OpenParenthesis),
            Token::RightParenthesis => converter.parse_closing_parenthesis()?,
            Token::Operator(sign) => {
                let operator = Operator::new(sign, !starts_group)?;
                converter.parse_operator(operator)?
            }
        };
        starts_group = opens_group;
    }

    converter.transfer_leftover_operators()?;
    converter.into_root()
}

impl InfixConverter {
    fn parse_operator(&mut self, operator: Operator) -> Result<(), ParseError> {
        // Reducing on equal precedence makes operators left-associative.
        while let Some(&StackEntry::Operator(top_of_operator_stack)) = self.operators.last() {
            if !operator.precedence_le(&top_of_operator_stack) {
                break;
            }
            self.reduce()?;
        }

        self.operators.push(StackEntry::Operator(operator));
        Ok(())
    }

    fn parse_closing_parenthesis(&mut self) -> Result<(), ParseError> {
        loop {
            match self.operators.last() {
                None => return Err(ParseError::UnbalancedParenthesis),
                Some(StackEntry::OpenParenthesis) => {
                    // Discard the open parenthesis.
                    self.operators.pop();
                    return Ok(());
                }
                Some(StackEntry::Operator(_)) => self.reduce()?,
            }
        }
    }

    fn transfer_leftover_operators(&mut self) -> Result<(), ParseError> {
        while let Some(entry) = self.operators.last() {
            match entry {
                StackEntry::OpenParenthesis => return Err(ParseError::UnbalancedParenthesis),
                StackEntry::Operator(_) => self.reduce()?,
            }
        }
        Ok(())
    }

    /// Replaces the operator on top of the stack and its operands with a single subtree.
    fn reduce(&mut self) -> Result<(), ParseError> {
        let operator = match self.operators.pop() {
            Some(StackEntry::Operator(operator)) => operator,
            Some(StackEntry::OpenParenthesis) | None => {
                return Err(ParseError::UnbalancedParenthesis)
            }
        };
        let missing_operand = || ParseError::MissingOperand(operator.sign());

        let node = match operator {
            Operator::Unary(operator) => {
                let operand = self.operands.pop().ok_or_else(missing_operand)?;
                Node::new_unary_operation(operator, operand)
            }
            Operator::Binary(operator) => {
                let right_operand = self.operands.pop().ok_or_else(missing_operand)?;
                let left_operand = self.operands.pop().ok_or_else(missing_operand)?;
                simplify_binary_operation(operator, left_operand, right_operand)
            }
        };
        trace!("reduced '{}' into {:?}", operator.sign(), node);

        self.operands.push(node);
        Ok(())
    }

    fn into_root(mut self) -> Result<Node, ParseError> {
        match self.operands.len() {
            1 => self
                .operands
                .pop()
                .ok_or(ParseError::EmptyExpression { roots: 0 }),
            roots => Err(ParseError::EmptyExpression { roots }),
        }
    }
}
