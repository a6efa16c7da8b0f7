use itertools::Itertools;
use std::collections::HashMap;
use std::fmt;
use std::fmt::{Display, Formatter};

/// The values of all variables assigned during one program run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolTable {
    values: HashMap<String, f64>,
}

impl SymbolTable {
    pub fn new() -> SymbolTable {
        SymbolTable::default()
    }

    /// The current value of a variable, or `None` if it has never been assigned.
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Creates the variable, or overwrites its previous value.
    pub fn set(&mut self, name: impl Into<String>, value: f64) {
        self.values.insert(name.into(), value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Display for SymbolTable {
    /// One `name = value` line per variable, ordered by name.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let lines = self
            .values
            .iter()
            .sorted_by(|(a, _), (b, _)| a.cmp(b))
            .map(|(name, value)| format!("{} = {}", name, value))
            .join("\n");
        f.write_str(&lines)
    }
}
