use std::collections::BTreeMap;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use serde_json::{Map, Value};

use crate::utils::error::TocgenError;

lazy_static! {
    static ref IDENTIFIER_REGEX: Regex = Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap();
}

/// Named values exported by one compiled document
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModuleExports {
    bindings: BTreeMap<String, Option<Value>>,
}

impl ModuleExports {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define `name` with `value`; `None` exports an undefined value.
    ///
    /// Fails when the name is not a valid identifier or is already defined.
    pub fn define_export(&mut self, name: &str, value: Option<Value>) -> Result<(), TocgenError> {
        if !IDENTIFIER_REGEX.is_match(name) {
            return Err(TocgenError::Export(format!(
                "'{}' is not a valid export name", name
            )));
        }

        if self.bindings.contains_key(name) {
            return Err(TocgenError::Export(format!(
                "Export '{}' is already defined", name
            )));
        }

        debug!("Defining export '{}'", name);
        self.bindings.insert(name.to_string(), value);
        Ok(())
    }

    /// Whether `name` has been defined, even as undefined
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Value of `name`, `None` when missing or undefined
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name).and_then(Option::as_ref)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// JSON object of all defined values; undefined values are omitted
    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .bindings
            .iter()
            .filter_map(|(name, value)| value.clone().map(|value| (name.clone(), value)))
            .collect();
        Value::Object(map)
    }
}
