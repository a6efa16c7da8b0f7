use crate::interpreter::error::EvaluationError;
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::symbol_table::SymbolTable;
use crate::interpreter::syntax::expression_tree::Node;
use log::debug;

/// What executing a tree produced.
#[derive(Debug, Clone, PartialEq)]
pub enum Evaluation {
    /// An expression was computed.
    Value(f64),
    /// An assignment stored `value` in the symbol table.
    Assignment { name: String, value: f64 },
}

/// Executes a tree, either as an assignment statement or as an expression.
///
/// An assignment evaluates its right-hand side and stores it under the name on its
/// left-hand side. Any other tree is evaluated for its value.
///
/// # Examples
///
/// ```
/// use infix_calculator::interpreter::evaluator::{evaluate, Evaluation};
/// use infix_calculator::interpreter::parser::parse;
/// use infix_calculator::interpreter::symbol_table::SymbolTable;
/// use infix_calculator::interpreter::syntax::expression_tree::Node;
///
/// let mut table = SymbolTable::new();
/// let statement = Node::new_assignment("a".into(), parse("3+4").unwrap());
/// evaluate(&statement, &mut table).unwrap();
///
/// let value = evaluate(&parse("a*2").unwrap(), &mut table).unwrap();
/// assert_eq!(value, Evaluation::Value(14.0));
/// ```
pub fn evaluate(node: &Node, table: &mut SymbolTable) -> Result<Evaluation, EvaluationError> {
    match node {
        Node::BinaryOperation {
            operator: BinaryOperator::Assign,
            left_operand,
            right_operand,
        } => {
            let name = match left_operand.as_ref() {
                Node::Identifier(name) => name,
                _ => return Err(EvaluationError::InvalidAssignmentTarget),
            };
            let value = evaluate_expression(right_operand, table)?;
            debug!("assigned {} = {}", name, value);
            table.set(name.as_str(), value);
            Ok(Evaluation::Assignment {
                name: name.to_string(),
                value,
            })
        }
        expression => evaluate_expression(expression, table).map(Evaluation::Value),
    }
}

/// Computes the value of an expression tree, reading variables from the symbol table.
///
/// Operands are evaluated left to right. An assignment nested anywhere inside the
/// expression is an error.
pub fn evaluate_expression(node: &Node, table: &SymbolTable) -> Result<f64, EvaluationError> {
    match node {
        Node::Number(value) => Ok(*value),
        Node::Identifier(name) => table
            .get(name)
            .ok_or_else(|| EvaluationError::UnboundVariable(name.to_string())),
        Node::UnaryOperation { operator, operand } => {
            let operand = evaluate_expression(operand, table)?;
            Ok(operator.apply(operand))
        }
        Node::BinaryOperation {
            operator: BinaryOperator::Assign,
            ..
        } => Err(EvaluationError::AssignmentInExpression),
        Node::BinaryOperation {
            operator,
            left_operand,
            right_operand,
        } => {
            let left = evaluate_expression(left_operand, table)?;
            let right = evaluate_expression(right_operand, table)?;
            operator.apply(left, right)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::parser::parse;
    use parameterized_macro::parameterized;

    fn value_of(expression: &str, table: &mut SymbolTable) -> Result<f64, EvaluationError> {
        let tree = parse(expression).unwrap();
        match evaluate(&tree, table)? {
            Evaluation::Value(value) => Ok(value),
            Evaluation::Assignment { .. } => panic!("expected an expression"),
        }
    }

    #[parameterized(
    expression = {
    "8-3-2",
    "8/4/2",
    "2+3*4",
    "(2+3)*4",
    "-5+3",
    "(-5+3)",
    "5-3",
    "10-(4-(3-1))",
    "2*(3+4)*5",
    "7/2",
    "0-7",
    "-(2+3)*2",
    "1-2*3+4/2",
    },
    expected = {
    3.0,
    1.0,
    14.0,
    20.0,
    -2.0,
    -2.0,
    2.0,
    8.0,
    70.0,
    3.5,
    -7.0,
    -10.0,
    -3.0,
    }
    )]
    fn expression_evaluates_like_arithmetic(expression: &str, expected: f64) {
        let mut table = SymbolTable::new();
        assert_eq!(value_of(expression, &mut table), Ok(expected));
    }

    #[test]
    fn multiplication_by_literal_zero_never_reads_variable() {
        let mut table = SymbolTable::new();
        table.set("x", 17.0);
        let tree = parse("x*0").unwrap();

        assert!(tree.identifiers().is_empty());
        assert_eq!(evaluate(&tree, &mut table), Ok(Evaluation::Value(0.0)));
        assert_eq!(value_of("x*0", &mut SymbolTable::new()), Ok(0.0));
    }

    #[test]
    fn division_by_literal_one_returns_variable() {
        let mut table = SymbolTable::new();
        table.set("y", 9.0);
        assert_eq!(value_of("y/1", &mut table), Ok(9.0));
    }

    fn x() -> Node {
        Node::new_identifier("x".into())
    }

    fn y() -> Node {
        Node::new_identifier("y".into())
    }

    fn number(value: f64) -> Node {
        Node::new_number(value)
    }

    /// Builds an operation directly, so no identity is ever applied to it.
    fn operation(operator: BinaryOperator, left: Node, right: Node) -> Node {
        Node::new_binary_operation(operator, left, right)
    }

    #[parameterized(
    expression = { "x*0+y", "0+x*y", "x-0", "1*x/1", "(0-x)*y", "0/y+x", "y*1-0*x" },
    unsimplified = {
    operation(BinaryOperator::Add, operation(BinaryOperator::Multiply, x(), number(0.0)), y()),
    operation(BinaryOperator::Add, number(0.0), operation(BinaryOperator::Multiply, x(), y())),
    operation(BinaryOperator::Subtract, x(), number(0.0)),
    operation(BinaryOperator::Divide, operation(BinaryOperator::Multiply, number(1.0), x()), number(1.0)),
    operation(BinaryOperator::Multiply, operation(BinaryOperator::Subtract, number(0.0), x()), y()),
    operation(BinaryOperator::Add, operation(BinaryOperator::Divide, number(0.0), y()), x()),
    operation(
        BinaryOperator::Subtract,
        operation(BinaryOperator::Multiply, y(), number(1.0)),
        operation(BinaryOperator::Multiply, number(0.0), x())
    )
    }
    )]
    fn simplification_never_changes_the_result(expression: &str, unsimplified: Node) {
        let mut table = SymbolTable::new();
        table.set("x", 3.0);
        table.set("y", -4.0);
        let expected = evaluate_expression(&unsimplified, &table).unwrap();

        let tree = parse(expression).unwrap();

        assert_eq!(evaluate(&tree, &mut table), Ok(Evaluation::Value(expected)));
    }

    #[test]
    fn simplified_multiplication_by_zero_differs_from_its_plain_tree() {
        let mut table = SymbolTable::new();
        table.set("x", 3.0);
        table.set("y", -4.0);
        let product = operation(BinaryOperator::Multiply, x(), number(0.0));
        let unsimplified = operation(BinaryOperator::Add, product, y());

        let tree = parse("x*0+y").unwrap();

        assert_ne!(tree, unsimplified);
        assert_eq!(tree, y());
        assert_eq!(evaluate_expression(&unsimplified, &table), Ok(-4.0));
        assert_eq!(evaluate(&tree, &mut table), Ok(Evaluation::Value(-4.0)));
    }

    #[test]
    fn assignment_then_expression_round_trips() {
        let mut table = SymbolTable::new();
        let statement = Node::new_assignment("a".into(), parse("3+4").unwrap());

        let assigned = evaluate(&statement, &mut table);

        assert_eq!(
            assigned,
            Ok(Evaluation::Assignment {
                name: "a".into(),
                value: 7.0
            })
        );
        assert_eq!(table.get("a"), Some(7.0));
        assert_eq!(value_of("a*2", &mut table), Ok(14.0));
    }

    #[test]
    fn failed_assignment_leaves_table_untouched() {
        let mut table = SymbolTable::new();
        let statement = Node::new_assignment("a".into(), parse("b+1").unwrap());

        assert_eq!(
            evaluate(&statement, &mut table),
            Err(EvaluationError::UnboundVariable("b".into()))
        );
        assert!(table.is_empty());
    }

    #[test]
    fn unbound_variable_is_reported() {
        let mut table = SymbolTable::new();
        assert_eq!(
            value_of("z+1", &mut table),
            Err(EvaluationError::UnboundVariable("z".into()))
        );
    }

    #[parameterized(
    expression = { "1/0", "5/(2-2)", "x/(x-x)" }
    )]
    fn division_by_zero_is_reported(expression: &str) {
        let mut table = SymbolTable::new();
        table.set("x", 2.0);
        assert_eq!(
            value_of(expression, &mut table),
            Err(EvaluationError::DivisionByZero)
        );
    }

    #[test]
    fn zero_divided_by_zero_literal_is_simplified_away() {
        let mut table = SymbolTable::new();
        assert_eq!(value_of("0/0", &mut table), Ok(0.0));
    }

    #[test]
    fn nested_assignment_is_rejected() {
        let mut table = SymbolTable::new();
        let assignment = Node::new_assignment("a".into(), Node::new_number(1.0));
        let tree =
            Node::new_binary_operation(BinaryOperator::Add, assignment, Node::new_number(2.0));

        assert_eq!(
            evaluate(&tree, &mut table),
            Err(EvaluationError::AssignmentInExpression)
        );
        assert!(table.is_empty());
    }

    #[test]
    fn assignment_to_non_variable_is_rejected() {
        let mut table = SymbolTable::new();
        let tree = Node::new_binary_operation(
            BinaryOperator::Assign,
            Node::new_number(1.0),
            Node::new_number(2.0),
        );

        assert_eq!(
            evaluate(&tree, &mut table),
            Err(EvaluationError::InvalidAssignmentTarget)
        );
    }
}
