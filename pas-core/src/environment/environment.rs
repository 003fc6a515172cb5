use std::collections::HashMap;

use crate::utils::prelude::SrcSpan;

use super::prelude::{Value, ValueType};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Symbol {
    pub value_type: ValueType,
    pub location: SrcSpan,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AssignError {
    Undeclared,
    TypeMismatch {
        expected: ValueType,
        got: ValueType,
    },
}

/// Symbol table (name -> declared type) and memory table (name -> last
/// assigned value) of one compilation.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Environment {
    symbols: HashMap<String, Symbol>,
    memory: HashMap<String, Value>,
    order: Vec<String>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a declaration. On redeclaration the first declaration is
    /// returned and the table is left untouched.
    pub fn declare(
        &mut self,
        name: String,
        value_type: ValueType,
        location: SrcSpan,
    ) -> Result<(), Symbol> {
        if let Some(symbol) = self.symbols.get(&name) {
            return Err(*symbol);
        }

        self.order.push(name.clone());
        self.symbols.insert(name, Symbol { value_type, location });

        Ok(())
    }

    pub fn symbol(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.memory.get(name)
    }

    pub fn assign(&mut self, name: &str, value: Value) -> Result<(), AssignError> {
        let symbol = self.symbols.get(name).ok_or(AssignError::Undeclared)?;

        if symbol.value_type != value.value_type() {
            return Err(AssignError::TypeMismatch {
                expected: symbol.value_type,
                got: value.value_type(),
            });
        }

        self.memory.insert(name.to_string(), value);

        Ok(())
    }

    /// Symbol table in declaration order.
    pub fn symbols(&self) -> Vec<(&str, ValueType)> {
        self.order.iter()
            .filter_map(|name| self.symbols.get(name).map(|symbol| (name.as_str(), symbol.value_type)))
            .collect()
    }

    /// Memory table in declaration order.
    pub fn memory(&self) -> Vec<(&str, Value)> {
        self.order.iter()
            .filter_map(|name| self.memory.get(name).map(|value| (name.as_str(), *value)))
            .collect()
    }

    /// Declared names that never received a value.
    pub fn unassigned(&self) -> Vec<(&str, SrcSpan)> {
        self.order.iter()
            .filter(|name| !self.memory.contains_key(*name))
            .filter_map(|name| self.symbols.get(name).map(|symbol| (name.as_str(), symbol.location)))
            .collect()
    }
}
