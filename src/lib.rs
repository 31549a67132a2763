pub mod app;
pub mod dictionary;
pub mod events;
pub mod settings;
pub mod suggest;
mod ui;

pub use app::DictionaryApp;
pub use dictionary::{Dictionary, DictionaryError, LoadReport};
pub use events::{LookupOutcome, LookupState, on_search, on_text_changed};
pub use settings::Settings;
pub use suggest::Suggestions;
