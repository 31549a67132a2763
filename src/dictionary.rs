use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
};

use roxmltree::{Document, Node};
use thiserror::Error;

use crate::suggest::Suggestions;

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("dictionary file '{}' not found", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read dictionary file: {0}")]
    Io(#[from] io::Error),

    #[error("XML parse error: {0}")]
    Xml(#[from] roxmltree::Error),
}

pub type Result<T> = std::result::Result<T, DictionaryError>;

/// Why a single `<entry>` was left out of the dictionary.
#[derive(Debug, Error, PartialEq, Eq)]
enum EntryError {
    #[error("missing <word> element")]
    MissingWord,

    #[error("word is blank")]
    BlankWord,

    #[error("missing <definition> element")]
    MissingDefinition,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryEntry {
    pub word: String,
    pub definition: String,
}

/// Counters collected while building a [`Dictionary`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadReport {
    /// Entries whose word was already present; the later definition replaced the earlier one.
    pub overwritten: usize,
    /// Malformed entries that were skipped.
    pub skipped: usize,
}

/// Read-only word to definition mapping.
///
/// Keys are lower-cased words. Iteration follows the order in which each word
/// was first seen, and a repeated word keeps that slot while taking the newer
/// definition.
#[derive(Debug, Default)]
pub struct Dictionary {
    entries: Vec<DictionaryEntry>,
    index: HashMap<String, usize>,
    report: LoadReport,
}

/// Key form of a word: surrounding whitespace dropped, lower-cased.
pub fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}

impl Dictionary {
    /// Reads and parses the XML definitions file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let xml = fs::read_to_string(path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => DictionaryError::NotFound(path.to_path_buf()),
            _ => DictionaryError::Io(e),
        })?;

        let dictionary = Self::from_xml_str(&xml)?;
        tracing::info!(
            path = %path.display(),
            words = dictionary.len(),
            overwritten = dictionary.report.overwritten,
            skipped = dictionary.report.skipped,
            "loaded dictionary"
        );
        Ok(dictionary)
    }

    /// Like [`Dictionary::load`], but any failure leaves the application with an
    /// empty dictionary instead of stopping it.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(dictionary) => dictionary,
            Err(e) => {
                tracing::error!("{e}; starting with an empty dictionary");
                Self::default()
            }
        }
    }

    pub fn from_xml_str(xml: &str) -> Result<Self> {
        let doc = Document::parse(xml)?;
        let mut dictionary = Self::default();

        let entries = doc
            .root_element()
            .children()
            .filter(|n| n.has_tag_name("entry"));

        for (position, node) in entries.enumerate() {
            match parse_entry(node) {
                Ok(entry) => dictionary.insert(entry),
                Err(reason) => {
                    let at = doc.text_pos_at(node.range().start);
                    tracing::warn!(
                        entry = position + 1,
                        line = at.row,
                        "skipping dictionary entry: {reason}"
                    );
                    dictionary.report.skipped += 1;
                }
            }
        }

        Ok(dictionary)
    }

    pub fn from_entries<W, D>(pairs: impl IntoIterator<Item = (W, D)>) -> Self
    where
        W: AsRef<str>,
        D: Into<String>,
    {
        let mut dictionary = Self::default();
        for (position, (word, definition)) in pairs.into_iter().enumerate() {
            match entry_from_parts(word.as_ref(), definition.into()) {
                Ok(entry) => dictionary.insert(entry),
                Err(reason) => {
                    tracing::warn!(entry = position + 1, "skipping dictionary entry: {reason}");
                    dictionary.report.skipped += 1;
                }
            }
        }
        dictionary
    }

    fn insert(&mut self, entry: DictionaryEntry) {
        match self.index.get(&entry.word) {
            Some(&slot) => {
                tracing::debug!(word = %entry.word, "duplicate word, keeping the later definition");
                self.entries[slot].definition = entry.definition;
                self.report.overwritten += 1;
            }
            None => {
                self.index.insert(entry.word.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    /// Exact, case-insensitive lookup.
    pub fn lookup(&self, word: &str) -> Option<&str> {
        self.index
            .get(&normalize(word))
            .map(|&slot| self.entries[slot].definition.as_str())
    }

    /// Words containing `partial` anywhere, in dictionary order.
    pub fn suggest(&self, partial: &str) -> Suggestions<'_> {
        Suggestions::new(&self.entries, partial)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn report(&self) -> LoadReport {
        self.report
    }
}

fn parse_entry(node: Node<'_, '_>) -> std::result::Result<DictionaryEntry, EntryError> {
    let word = child(node, "word").ok_or(EntryError::MissingWord)?;
    let definition = child(node, "definition").ok_or(EntryError::MissingDefinition)?;

    entry_from_parts(
        word.text().unwrap_or_default(),
        definition.text().unwrap_or_default().to_string(),
    )
}

fn entry_from_parts(
    word: &str,
    definition: String,
) -> std::result::Result<DictionaryEntry, EntryError> {
    let word = normalize(word);
    if word.is_empty() {
        return Err(EntryError::BlankWord);
    }

    Ok(DictionaryEntry { word, definition })
}

fn child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children().find(|n| n.has_tag_name(name))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const FRUIT_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<dictionary>
    <entry>
        <word>Apple</word>
        <definition>a fruit</definition>
    </entry>
    <entry>
        <word>application</word>
        <definition>a program</definition>
    </entry>
</dictionary>"#;

    #[test]
    fn lookup_returns_loaded_definitions() {
        let dictionary = Dictionary::from_xml_str(FRUIT_XML).unwrap();

        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.lookup("apple"), Some("a fruit"));
        assert_eq!(dictionary.lookup("application"), Some("a program"));
    }

    #[test]
    fn lookup_ignores_case() {
        let dictionary = Dictionary::from_xml_str(FRUIT_XML).unwrap();

        assert_eq!(dictionary.lookup("APPLE"), Some("a fruit"));
        assert_eq!(dictionary.lookup("Cat"), dictionary.lookup("cat"));
        assert_eq!(dictionary.lookup("ApPlIcAtIoN"), Some("a program"));
    }

    #[test]
    fn lookup_is_exact_match_only() {
        let dictionary = Dictionary::from_xml_str(FRUIT_XML).unwrap();

        assert_eq!(dictionary.lookup("app"), None);
        assert_eq!(dictionary.lookup("banana"), None);
        assert_eq!(dictionary.lookup(""), None);
    }

    #[test]
    fn definition_text_is_stored_verbatim() {
        let xml = "<d><entry><word>Tab</word><definition>  Mixed CASE, spaces  </definition></entry></d>";
        let dictionary = Dictionary::from_xml_str(xml).unwrap();

        assert_eq!(dictionary.lookup("tab"), Some("  Mixed CASE, spaces  "));
    }

    #[test]
    fn later_duplicate_wins_and_keeps_first_position() {
        let xml = r#"<d>
            <entry><word>pear</word><definition>first</definition></entry>
            <entry><word>plum</word><definition>stone fruit</definition></entry>
            <entry><word>PEAR</word><definition>second</definition></entry>
        </d>"#;
        let dictionary = Dictionary::from_xml_str(xml).unwrap();

        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.lookup("pear"), Some("second"));
        assert_eq!(dictionary.report().overwritten, 1);
        assert_eq!(dictionary.suggest("p").collect::<Vec<_>>(), ["pear", "plum"]);
    }

    #[test]
    fn malformed_entries_are_skipped() {
        let xml = r#"<d>
            <entry><definition>no word</definition></entry>
            <entry><word>   </word><definition>blank word</definition></entry>
            <entry><word>orphan</word></entry>
            <entry><word>kept</word><definition>fine</definition></entry>
            <entry><word>empty</word><definition/></entry>
        </d>"#;
        let dictionary = Dictionary::from_xml_str(xml).unwrap();

        assert_eq!(dictionary.report().skipped, 3);
        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.lookup("kept"), Some("fine"));
        assert_eq!(dictionary.lookup("empty"), Some(""));
        assert_eq!(dictionary.lookup("orphan"), None);
    }

    #[test]
    fn parse_entry_reports_the_missing_part() {
        let doc = Document::parse("<entry><definition>x</definition></entry>").unwrap();
        assert_eq!(parse_entry(doc.root_element()), Err(EntryError::MissingWord));

        let doc = Document::parse("<entry><word/><definition>x</definition></entry>").unwrap();
        assert_eq!(parse_entry(doc.root_element()), Err(EntryError::BlankWord));

        let doc = Document::parse("<entry><word>x</word></entry>").unwrap();
        assert_eq!(parse_entry(doc.root_element()), Err(EntryError::MissingDefinition));
    }

    #[test]
    fn word_whitespace_is_trimmed() {
        let xml = "<d><entry><word>\n  Lemon\n</word><definition>sour</definition></entry></d>";
        let dictionary = Dictionary::from_xml_str(xml).unwrap();

        assert_eq!(dictionary.lookup("lemon"), Some("sour"));
    }

    #[test]
    fn padded_words_round_trip_through_lookup() {
        let xml = "<d><entry><word> Lemon </word><definition>sour</definition></entry></d>";
        let dictionary = Dictionary::from_xml_str(xml).unwrap();

        assert_eq!(dictionary.lookup(" Lemon "), Some("sour"));
        assert_eq!(dictionary.lookup("lemon\t"), Some("sour"));
        assert_eq!(dictionary.suggest(" lem").collect::<Vec<_>>(), ["lemon"]);
        assert_eq!(dictionary.suggest("  ").count(), 0);
    }

    #[test]
    fn invalid_xml_is_an_error() {
        let err = Dictionary::from_xml_str("<d><entry>").unwrap_err();
        assert!(matches!(err, DictionaryError::Xml(_)));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(FRUIT_XML.as_bytes()).unwrap();

        let dictionary = Dictionary::load(file.path()).unwrap();

        assert_eq!(dictionary.lookup("Apple"), Some("a fruit"));
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dictionary.xml");

        let err = Dictionary::load(&path).unwrap_err();

        assert!(matches!(err, DictionaryError::NotFound(p) if p == path));
    }

    #[test]
    fn load_or_empty_survives_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        let dictionary = Dictionary::load_or_empty(dir.path().join("nope.xml"));

        assert!(dictionary.is_empty());
        assert_eq!(dictionary.lookup("apple"), None);
        assert_eq!(dictionary.suggest("a").count(), 0);
    }

    #[test]
    fn load_or_empty_survives_broken_xml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"<dictionary><entry>").unwrap();

        assert!(Dictionary::load_or_empty(file.path()).is_empty());
    }

    #[test]
    fn from_entries_normalizes_words() {
        let dictionary = Dictionary::from_entries([("Cat", "a pet"), ("DOG", "another pet")]);

        assert_eq!(dictionary.lookup("cat"), Some("a pet"));
        assert_eq!(dictionary.lookup("Dog"), Some("another pet"));
    }

    #[test]
    fn from_entries_follows_xml_rules() {
        let dictionary = Dictionary::from_entries([
            (" Cat ", "a pet"),
            ("", "blank"),
            ("   ", "also blank"),
            ("CAT", "still a pet"),
        ]);

        assert_eq!(dictionary.len(), 1);
        assert_eq!(dictionary.lookup("cat"), Some("still a pet"));
        assert_eq!(dictionary.report(), LoadReport {
            overwritten: 1,
            skipped: 2,
        });
    }
}
