//! Reading language files from disk into a [`LanguageStorage`].

use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use bon::Builder;
use serde_norway::Location;
use tracing::{debug, info};

use crate::error::LoadError;
use crate::expander::ExpanderSettings;
use crate::language::{Language, LanguageStorage};
use crate::source::{YamlSource, language_from_source};

/// Parse and expand one YAML language file.
pub fn load_language_file(path: &Path, settings: &ExpanderSettings) -> Result<Language, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let source = YamlSource::parse(&content).map_err(|e| {
        let location = e.location();
        LoadError::Parse {
            path: path.to_path_buf(),
            line: location.as_ref().map(Location::line),
            column: location.as_ref().map(Location::column),
            message: e.to_string(),
        }
    })?;

    let language = language_from_source(&source, settings).map_err(|source| LoadError::Invalid {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), language = language.key(), entries = language.len(), "loaded language file");
    Ok(language)
}

/// Load every `*.yml` / `*.yaml` file of `dir`, in file name order.
pub fn load_language_dir(dir: &Path, settings: &ExpanderSettings) -> Result<Vec<Language>, LoadError> {
    if !dir.is_dir() {
        return Err(LoadError::NotADirectory {
            path: dir.to_path_buf(),
        });
    }

    let io_error = |source: io::Error| LoadError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        let is_yaml = path
            .extension()
            .and_then(OsStr::to_str)
            .is_some_and(|ext| ext == "yml" || ext == "yaml");
        if is_yaml && path.is_file() {
            paths.push(path);
        }
    }
    paths.sort();

    paths
        .iter()
        .map(|path| load_language_file(path, settings))
        .collect()
}

/// Loads a language directory and publishes it as one set.
///
/// # Example
///
/// ```no_run
/// use polyglot::{LanguageLoader, LanguageStorage};
///
/// let storage = LanguageStorage::new("en")?;
/// let loader = LanguageLoader::builder().dir("lang").build();
/// let count = loader.load_into(&storage)?;
/// println!("{count} languages loaded");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Builder)]
pub struct LanguageLoader {
    /// Directory holding one YAML file per language.
    #[builder(into)]
    dir: PathBuf,

    /// Variable expansion settings applied to every file.
    #[builder(default)]
    settings: ExpanderSettings,
}

impl LanguageLoader {
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn settings(&self) -> &ExpanderSettings {
        &self.settings
    }

    /// Read every language file without publishing anything.
    pub fn load(&self) -> Result<Vec<Language>, LoadError> {
        load_language_dir(&self.dir, &self.settings)
    }

    /// Read every language file and replace the languages of `storage`.
    ///
    /// Nothing is published unless every file loads and the set contains the
    /// default language. Returns the number of languages published.
    pub fn load_into(&self, storage: &LanguageStorage) -> Result<usize, LoadError> {
        let languages = self.load()?;
        let count = languages.len();
        storage
            .set_languages(languages)
            .map_err(|source| LoadError::Invalid {
                path: self.dir.clone(),
                source,
            })?;
        info!(dir = %self.dir.display(), languages = count, "reloaded languages");
        Ok(count)
    }
}
