use thiserror::Error;

/// Reasons an expression could not be turned into a tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unsupported operator '{0}'")]
    UnsupportedOperator(char),
    #[error("unbalanced parenthesis")]
    UnbalancedParenthesis,
    #[error("expected exactly one expression, found {roots}")]
    EmptyExpression { roots: usize },
    #[error("operator '{0}' is missing an operand")]
    MissingOperand(char),
}

/// Reasons a tree could not be evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    #[error("variable '{0}' has not been assigned")]
    UnboundVariable(String),
    #[error("division by zero")]
    DivisionByZero,
    #[error("an assignment can only be a statement, not part of an expression")]
    AssignmentInExpression,
    #[error("only a variable can be assigned to")]
    InvalidAssignmentTarget,
}

/// Reasons an expression could not be calculated in one step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculationError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
}
