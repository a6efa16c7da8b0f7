use crate::interpreter::operator::{BinaryOperator, UnaryOperator};
use crate::interpreter::syntax::syntax_visitor::{
    walk_binary_operation, walk_unary_operation, IdentifierCollector, SyntaxVisitor,
};
use crate::interpreter::token::Token;
use ptree::{write_tree, TreeBuilder};
use std::fmt;
use std::fmt::{Display, Formatter};

/// A node of an expression tree. Operations own their operands, so a tree is never shared
/// or cyclic.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    // Terminal symbols (leaves)
    Number(f64),
    Identifier(String),
    // Non-terminal symbols (non-leaves)
    BinaryOperation {
        operator: BinaryOperator,
        left_operand: Box<Node>,
        right_operand: Box<Node>,
    },
    UnaryOperation {
        operator: UnaryOperator,
        operand: Box<Node>,
    },
}

/// Where a node sits relative to its parent, which decides whether it needs parentheses.
#[derive(Clone, Copy)]
enum Position {
    Root,
    LeftOf(BinaryOperator),
    RightOf(BinaryOperator),
    OperandOf(UnaryOperator),
}

impl Node {
    pub fn new_number(value: f64) -> Node {
        Node::Number(value)
    }

    pub fn new_identifier(name: String) -> Node {
        Node::Identifier(name)
    }

    pub fn new_binary_operation(
        operator: BinaryOperator,
        left_operand: Node,
        right_operand: Node,
    ) -> Node {
        Node::BinaryOperation {
            operator,
            left_operand: Box::new(left_operand),
            right_operand: Box::new(right_operand),
        }
    }

    pub fn new_unary_operation(operator: UnaryOperator, operand: Node) -> Node {
        Node::UnaryOperation {
            operator,
            operand: Box::new(operand),
        }
    }

    pub fn new_negation(operand: Node) -> Node {
        Self::new_unary_operation(UnaryOperator::Negate, operand)
    }

    /// An assignment statement storing the value of `value` under `name`.
    pub fn new_assignment(name: String, value: Node) -> Node {
        Self::new_binary_operation(BinaryOperator::Assign, Node::new_identifier(name), value)
    }

    pub fn is_number(&self, compare_to: f64) -> bool {
        match self {
            Node::Number(value) => *value == compare_to,
            _ => false,
        }
    }

    /// Names of the variables the tree reads when evaluated, in evaluation order.
    pub fn identifiers(&self) -> Vec<String> {
        let mut collector = IdentifierCollector::default();
        self.accept(&mut collector);
        collector.names
    }

    /// Calls the correct visitor method for the node variant on the given visitor.
    pub(crate) fn accept(&self, visitor: &mut impl SyntaxVisitor) {
        match self {
            Node::Number(value) => visitor.visit_number(*value),
            Node::Identifier(name) => visitor.visit_identifier(name),
            Node::BinaryOperation {
                operator,
                left_operand,
                right_operand,
            } => visitor.visit_binary_operation(operator, left_operand, right_operand),
            Node::UnaryOperation { operator, operand } => {
                visitor.visit_unary_operation(operator, operand)
            }
        }
    }

    /// Regenerates the infix tokens of the tree, with only the parentheses that are needed
    /// for the tokens to parse back into the same tree.
    pub fn to_infix(&self) -> Vec<Token> {
        let mut tokens = Vec::new();
        self.build_expression(Position::Root, &mut tokens);
        tokens
    }

    fn build_expression(&self, position: Position, tokens: &mut Vec<Token>) {
        match self {
            Node::Number(value) => tokens.push(Token::Number(*value)),
            Node::Identifier(name) => tokens.push(Token::Identifier(name.to_string())),
            Node::BinaryOperation {
                operator,
                left_operand,
                right_operand,
            } => parenthesize_if(tokens, needs_parentheses(*operator, position), |tokens| {
                left_operand.build_expression(Position::LeftOf(*operator), tokens);
                tokens.push(operator.token());
                right_operand.build_expression(Position::RightOf(*operator), tokens);
            }),
            Node::UnaryOperation { operator, operand } => {
                // A negation is only recognized at the start of a (sub)expression.
                let nested = !matches!(position, Position::Root);
                parenthesize_if(tokens, nested, |tokens| {
                    tokens.push(operator.token());
                    operand.build_expression(Position::OperandOf(*operator), tokens);
                })
            }
        }
    }

    fn format_tree(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut visitor = TreeBuilderVisitor {
            builder: TreeBuilder::new("expression".into()),
        };
        self.accept(&mut visitor);

        let mut buffer: Vec<u8> = Vec::new();
        match write_tree(&visitor.builder.build(), &mut buffer) {
            Ok(_) => {}
            Err(_) => return Err(fmt::Error),
        }
        let text = match std::str::from_utf8(&buffer) {
            Ok(text) => text,
            Err(_) => return Err(fmt::Error),
        };
        f.write_str(text)
    }
}

impl Display for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.format_tree(f)
    }
}

fn needs_parentheses(operator: BinaryOperator, position: Position) -> bool {
    match position {
        Position::Root => false,
        Position::LeftOf(BinaryOperator::Assign) | Position::RightOf(BinaryOperator::Assign) => {
            false
        }
        Position::LeftOf(parent) => parent.precedence_gt(&operator),
        // Same precedence on the right would otherwise be regrouped to the left.
        Position::RightOf(parent) => !operator.precedence_gt(&parent),
        Position::OperandOf(parent) => operator.precedence() <= parent.precedence(),
    }
}

fn parenthesize_if(
    tokens: &mut Vec<Token>,
    predicate: bool,
    mut build_interior: impl FnMut(&mut Vec<Token>),
) {
    if predicate {
        tokens.push(Token::LeftParenthesis);
    }

    build_interior(tokens);

    if predicate {
        tokens.push(Token::RightParenthesis);
    }
}

struct TreeBuilderVisitor {
    builder: TreeBuilder,
}

impl SyntaxVisitor for TreeBuilderVisitor {
    fn visit_number(&mut self, value: f64) {
        self.builder.add_empty_child(format!("{}", value));
    }
    fn visit_identifier(&mut self, name: &str) {
        self.builder.add_empty_child(name.to_string());
    }
    fn visit_binary_operation(
        &mut self,
        operator: &BinaryOperator,
        left_operand: &Node,
        right_operand: &Node,
    ) {
        self.builder.begin_child(format!("{}", operator));
        walk_binary_operation(self, left_operand, right_operand);
        self.builder.end_child();
    }
    fn visit_unary_operation(&mut self, operator: &UnaryOperator, operand: &Node) {
        self.builder.begin_child(format!("{}", operator));
        walk_unary_operation(self, operand);
        self.builder.end_child();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn print_succeeds() {
        let tree = create_complex_tree();

        let printed = format!("{}", tree);

        assert!(printed.starts_with("expression"));
        assert!(printed.contains('*'));
    }

    #[test]
    fn simple_tree_converts_back_to_simple_expression() {
        let expected_tokens = create_simple_infix_tokens();
        let tree = create_simple_tree();

        let actual_tokens = tree.to_infix();

        assert_eq!(actual_tokens, expected_tokens);
    }

    #[test]
    fn complex_tree_converts_back_to_simple_expression() {
        let expected_tokens = create_complex_infix_tokens();
        let tree = create_complex_tree();

        let actual_tokens = tree.to_infix();

        assert_eq!(actual_tokens, expected_tokens);
    }

    #[test]
    fn right_operand_of_same_precedence_is_parenthesized() {
        // a - (b - c)
        let tree = Node::new_binary_operation(
            BinaryOperator::Subtract,
            Node::new_identifier("a".into()),
            Node::new_binary_operation(
                BinaryOperator::Subtract,
                Node::new_identifier("b".into()),
                Node::new_identifier("c".into()),
            ),
        );

        let actual_tokens = tree.to_infix();

        assert_eq!(
            actual_tokens,
            vec![
                Token::Identifier("a".into()),
                Token::Operator('-'),
                Token::LeftParenthesis,
                Token::Identifier("b".into()),
                Token::Operator('-'),
                Token::Identifier("c".into()),
                Token::RightParenthesis,
            ]
        );
    }

    #[test]
    fn nested_negation_is_parenthesized() {
        // x * (-(y + 1))
        let negation = Node::new_negation(Node::new_binary_operation(
            BinaryOperator::Add,
            Node::new_identifier("y".into()),
            Node::new_number(1.0),
        ));
        let tree = Node::new_binary_operation(
            BinaryOperator::Multiply,
            Node::new_identifier("x".into()),
            negation,
        );

        let actual_tokens = tree.to_infix();

        assert_eq!(
            actual_tokens,
            vec![
                Token::Identifier("x".into()),
                Token::Operator('*'),
                Token::LeftParenthesis,
                Token::Operator('-'),
                Token::LeftParenthesis,
                Token::Identifier("y".into()),
                Token::Operator('+'),
                Token::Number(1.0),
                Token::RightParenthesis,
                Token::RightParenthesis,
            ]
        );
    }

    #[test]
    fn assignment_is_never_parenthesized() {
        let tree = Node::new_assignment("a".into(), create_simple_tree());

        let actual_tokens = tree.to_infix();

        assert_eq!(
            actual_tokens,
            vec![
                Token::Identifier("a".into()),
                Token::Operator('='),
                Token::Identifier("x".into()),
                Token::Operator('+'),
                Token::Identifier("y".into()),
            ]
        );
    }

    #[test]
    fn is_number_only_matches_literals() {
        assert!(Node::new_number(0.0).is_number(0.0));
        assert!(!Node::new_number(1.0).is_number(0.0));
        assert!(!Node::new_identifier("zero".into()).is_number(0.0));
    }

    #[test]
    fn identifiers_are_listed_in_evaluation_order() {
        assert_eq!(create_complex_tree().identifiers(), ["x", "y", "z", "a"]);
    }

    fn create_simple_tree() -> Node {
        let x = Node::new_identifier("x".into());
        let y = Node::new_identifier("y".into());
        Node::new_binary_operation(BinaryOperator::Add, x, y)
    }

    fn create_simple_infix_tokens() -> Vec<Token> {
        // x + y
        vec![
            Token::Identifier("x".to_string()),
            Token::Operator('+'),
            Token::Identifier("y".to_string()),
        ]
    }

    fn create_complex_infix_tokens() -> Vec<Token> {
        // x + (y + z) * a
        vec![
            Token::Identifier("x".to_string()),
            Token::Operator('+'),
            Token::LeftParenthesis,
            Token::Identifier("y".to_string()),
            Token::Operator('+'),
            Token::Identifier("z".to_string()),
            Token::RightParenthesis,
            Token::Operator('*'),
            Token::Identifier("a".to_string()),
        ]
    }

    fn create_complex_tree() -> Node {
        let x = Node::new_identifier("x".into());
        let y = Node::new_identifier("y".into());
        let z = Node::new_identifier("z".into());
        let a = Node::new_identifier("a".into());
        let second_plus = Node::new_binary_operation(BinaryOperator::Add, y, z);
        let star = Node::new_binary_operation(BinaryOperator::Multiply, second_plus, a);
        Node::new_binary_operation(BinaryOperator::Add, x, star)
    }
}
