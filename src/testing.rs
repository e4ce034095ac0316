//! Stub service clients shared by the pipeline tests.

use std::cell::Cell;
use std::collections::HashMap;

use crate::dictionary::{DictionaryError, ExampleSource};
use crate::lang::Lang;
use crate::translate::{TranslateError, Translator};

/// Serves examples from a fixed table; unknown words behave like a 404.
#[derive(Default)]
pub struct StubDictionary {
    entries: HashMap<String, Vec<String>>,
    pub calls: Cell<usize>,
}

impl StubDictionary {
    pub fn with(mut self, word: &str, examples: &[&str]) -> Self {
        self.entries.insert(
            word.to_string(),
            examples.iter().map(|s| s.to_string()).collect(),
        );
        self
    }
}

impl ExampleSource for StubDictionary {
    async fn examples(&self, word: &str) -> Result<Vec<String>, DictionaryError> {
        self.calls.set(self.calls.get() + 1);
        self.entries
            .get(word)
            .cloned()
            .ok_or_else(|| DictionaryError::NotFound(word.to_string()))
    }
}

/// Translates from a fixed table; unknown text fails like an unreachable backend.
#[derive(Default)]
pub struct StubTranslator {
    table: HashMap<String, String>,
    pub calls: Cell<usize>,
}

impl StubTranslator {
    pub fn with(mut self, from: &str, to: &str) -> Self {
        self.table.insert(from.to_string(), to.to_string());
        self
    }
}

impl Translator for StubTranslator {
    async fn translate(&self, text: &str, _target: &Lang) -> Result<String, TranslateError> {
        self.calls.set(self.calls.get() + 1);
        self.table
            .get(text)
            .cloned()
            .ok_or(TranslateError::Status(503))
    }
}
