//! YAML language files flattened to dotted keys.

use serde_norway::Value;
use tracing::debug;

use crate::expander::RawTable;
use crate::source::ConfigSource;

/// String entries of a YAML document, keyed by their dotted path.
///
/// Nested mappings become `parent.child` keys. Only string scalars are kept;
/// numbers, booleans, sequences and nulls are skipped.
///
/// ```
/// use polyglot::{ConfigSource, YamlSource};
///
/// let source = YamlSource::parse("command:\n  help: Shows help\n  limit: 3\n").unwrap();
/// assert_eq!(source.string("command.help"), Some("Shows help"));
/// assert_eq!(source.string("command.limit"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct YamlSource {
    entries: RawTable,
}

impl YamlSource {
    pub fn parse(content: &str) -> Result<Self, serde_norway::Error> {
        let document: Value = serde_norway::from_str(content)?;
        let mut entries = RawTable::new();
        flatten(&document, "", &mut entries);
        Ok(Self { entries })
    }

    pub fn entries(&self) -> &RawTable {
        &self.entries
    }

    pub fn into_entries(self) -> RawTable {
        self.entries
    }
}

impl ConfigSource for YamlSource {
    fn string_keys(&self) -> Vec<String> {
        self.entries.string_keys()
    }

    fn string(&self, key: &str) -> Option<&str> {
        self.entries.string(key)
    }
}

fn flatten(value: &Value, prefix: &str, entries: &mut RawTable) {
    match value {
        Value::Mapping(map) => {
            for (key, child) in map {
                let Some(key) = key.as_str() else {
                    debug!(parent = prefix, "skipping non-string mapping key");
                    continue;
                };
                let path = if prefix.is_empty() {
                    key.to_owned()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(child, &path, entries);
            }
        }
        Value::String(text) => {
            entries.insert(prefix.to_owned(), text.clone());
        }
        Value::Tagged(tagged) => flatten(&tagged.value, prefix, entries),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::Sequence(_) => {
            if !prefix.is_empty() {
                debug!(key = prefix, "skipping non-string value");
            }
        }
    }
}
