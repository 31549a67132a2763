//! What the window does in response to the user.
//!
//! The two handlers are plain functions over a [`Dictionary`]; the egui frame
//! update decides when to call them and keeps the outcome in [`LookupState`].

use std::fmt;

use crate::dictionary::Dictionary;

pub const RESULT_PLACEHOLDER: &str = "Definition will appear here...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    Found(String),
    NotFound(String),
}

impl fmt::Display for LookupOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Found(definition) => write!(f, "Definition: {definition}"),
            Self::NotFound(_) => f.write_str("Word not found in the dictionary"),
        }
    }
}

/// Suggestions for the text currently in the entry field.
pub fn on_text_changed(dictionary: &Dictionary, text: &str) -> Vec<String> {
    dictionary
        .suggest(text.trim())
        .map(str::to_owned)
        .collect()
}

/// Result of an explicit search for the entry text.
pub fn on_search(dictionary: &Dictionary, text: &str) -> LookupOutcome {
    let word = text.trim();
    match dictionary.lookup(word) {
        Some(definition) => LookupOutcome::Found(definition.to_owned()),
        None => LookupOutcome::NotFound(word.to_owned()),
    }
}

/// Everything the window shows that is not the dictionary itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupState {
    pub entry: String,
    pub suggestions: Vec<String>,
    pub result: String,
    pub focus_entry: bool,
}

impl Default for LookupState {
    fn default() -> Self {
        Self {
            entry: String::new(),
            suggestions: Vec::new(),
            result: RESULT_PLACEHOLDER.to_string(),
            focus_entry: true,
        }
    }
}

impl LookupState {
    pub fn text_changed(&mut self, dictionary: &Dictionary) {
        self.suggestions = on_text_changed(dictionary, &self.entry);
    }

    pub fn search(&mut self, dictionary: &Dictionary) {
        let outcome = on_search(dictionary, &self.entry);
        if let LookupOutcome::NotFound(word) = &outcome {
            tracing::debug!(%word, "word not found");
        }
        self.result = outcome.to_string();
    }

    /// Puts a clicked suggestion into the entry field. The suggestion list is
    /// left as it was.
    pub fn apply_suggestion(&mut self, word: &str) {
        self.entry.clear();
        self.entry.push_str(word);
        self.focus_entry = true;
    }
}
