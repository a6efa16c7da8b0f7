//! Execution of a program, one statement per line, against a shared symbol table.
//!
//! A line is one of
//!
//! * an assignment `name=expression`,
//! * an input request `>name`, which asks an [`InputSource`] for the expression to assign,
//! * an expression whose value is reported,
//! * blank, in which case nothing happens.

use crate::interpreter::error::{CalculationError, EvaluationError, ParseError};
use crate::interpreter::evaluator::{evaluate, Evaluation};
use crate::interpreter::parser::parse;
use crate::interpreter::symbol_table::SymbolTable;
use crate::interpreter::syntax::expression_tree::Node;
use log::debug;
use std::io;
use thiserror::Error;

/// Reasons a statement could not be executed.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("malformed assignment '{0}'")]
    MalformedAssignment(String),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Evaluation(#[from] EvaluationError),
    #[error("could not read a value for '{name}'")]
    Input {
        name: String,
        #[source]
        source: io::Error,
    },
}

impl From<CalculationError> for SessionError {
    fn from(error: CalculationError) -> Self {
        match error {
            CalculationError::Parse(error) => SessionError::Parse(error),
            CalculationError::Evaluation(error) => SessionError::Evaluation(error),
        }
    }
}

/// A classified line of a program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    Assignment { name: String, expression: String },
    Prompt { name: String },
    Expression(String),
}

impl Statement {
    /// Classifies a line, returning `None` for a blank one.
    ///
    /// Surrounding whitespace is removed from names and expressions alike, whitespace
    /// inside an expression is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use infix_calculator::session::Statement;
    ///
    /// let statement = Statement::classify("a = 3+4\n").unwrap();
    /// assert_eq!(
    ///     statement,
    ///     Some(Statement::Assignment {
    ///         name: "a".into(),
    ///         expression: "3+4".into()
    ///     })
    /// );
    /// ```
    pub fn classify(line: &str) -> Result<Option<Statement>, SessionError> {
        let line = line.trim_end();
        if line.trim_start().is_empty() {
            return Ok(None);
        }

        if line.contains('=') {
            let mut sides = line.split('=');
            return match (sides.next(), sides.next(), sides.next()) {
                (Some(name), Some(expression), None) if !name.trim().is_empty() => {
                    Ok(Some(Statement::Assignment {
                        name: name.trim().to_string(),
                        expression: expression.trim().to_string(),
                    }))
                }
                _ => Err(SessionError::MalformedAssignment(line.to_string())),
            };
        }

        if let Some(name) = line.strip_prefix('>') {
            let name = name.trim();
            if name.is_empty() {
                return Err(SessionError::MalformedAssignment(line.to_string()));
            }
            return Ok(Some(Statement::Prompt {
                name: name.to_string(),
            }));
        }

        Ok(Some(Statement::Expression(line.trim().to_string())))
    }
}

/// Supplies the expression for an input request.
pub trait InputSource {
    fn read_value(&mut self, name: &str) -> io::Result<String>;
}

impl<F> InputSource for F
where
    F: FnMut(&str) -> io::Result<String>,
{
    fn read_value(&mut self, name: &str) -> io::Result<String> {
        self(name)
    }
}

/// One program run. Variables assigned by earlier statements are visible to later ones.
#[derive(Debug, Default)]
pub struct Session {
    table: SymbolTable,
}

impl Session {
    pub fn new() -> Session {
        Session::default()
    }

    pub fn table(&self) -> &SymbolTable {
        &self.table
    }

    /// Executes one line of a program.
    ///
    /// # Arguments
    ///
    /// * `line`: The statement, possibly with a trailing line ending.
    /// * `input`: Asked for the expression of an input request.
    ///
    /// returns: What the statement did, or `None` for a blank line.
    ///
    /// # Examples
    ///
    /// ```
    /// use infix_calculator::interpreter::evaluator::Evaluation;
    /// use infix_calculator::session::Session;
    ///
    /// let mut session = Session::new();
    /// let mut input = |_: &str| -> std::io::Result<String> { Ok("2".to_string()) };
    /// session.execute(">a", &mut input).unwrap();
    /// session.execute("b=a*3", &mut input).unwrap();
    /// let outcome = session.execute("b-a", &mut input).unwrap();
    /// assert_eq!(outcome, Some(Evaluation::Value(4.0)));
    /// ```
    pub fn execute(
        &mut self,
        line: &str,
        input: &mut impl InputSource,
    ) -> Result<Option<Evaluation>, SessionError> {
        match self.prepare(line, input)? {
            None => Ok(None),
            Some(tree) => self.run(&tree).map(Some),
        }
    }

    /// Turns a line into the tree that executing it evaluates, without evaluating it.
    ///
    /// An input request asks `input` for its expression right away.
    pub fn prepare(
        &self,
        line: &str,
        input: &mut impl InputSource,
    ) -> Result<Option<Node>, SessionError> {
        let tree = match Statement::classify(line)? {
            None => return Ok(None),
            Some(Statement::Expression(expression)) => parse(&expression)?,
            Some(Statement::Assignment { name, expression }) => {
                Node::new_assignment(name, parse(&expression)?)
            }
            Some(Statement::Prompt { name }) => {
                let expression = input
                    .read_value(&name)
                    .map_err(|source| SessionError::Input {
                        name: name.clone(),
                        source,
                    })?;
                Node::new_assignment(name, parse(expression.trim_end())?)
            }
        };
        debug!("statement '{}' reads {:?}", line.trim_end(), tree.identifiers());
        Ok(Some(tree))
    }

    /// Evaluates a prepared tree against the variables of this run.
    pub fn run(&mut self, tree: &Node) -> Result<Evaluation, SessionError> {
        let evaluation = evaluate(tree, &mut self.table)?;
        Ok(evaluation)
    }
}
