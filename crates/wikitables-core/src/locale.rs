//! Country lookup and localized display names

use crate::error::{Error, Result};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Resolves a template name to a canonical country or region name
pub trait CountryLookup {
    /// Canonical (English) name for `name`, or `None` if it is not a country
    fn lookup(&self, name: &str) -> Option<String>;
}

/// Translations of canonical country names for one language
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    lang: String,
    names: HashMap<String, String>,
}

impl Catalog {
    /// Catalog that returns every name unchanged
    pub fn identity(lang: &str) -> Self {
        Self {
            lang: lang.to_string(),
            names: HashMap::new(),
        }
    }

    /// Catalog with the given translations
    pub fn from_names(lang: &str, names: HashMap<String, String>) -> Self {
        Self {
            lang: lang.to_string(),
            names,
        }
    }

    /// Load `<dir>/<lang>.json`, an object mapping canonical names to
    /// localized ones
    ///
    /// A missing file falls back to the identity catalog.
    pub fn load<P: AsRef<Path>>(dir: P, lang: &str) -> Result<Self> {
        let path = dir.as_ref().join(format!("{}.json", lang));
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::debug!("no catalog for '{}' at {}, names stay untranslated", lang, path.display());
                return Ok(Self::identity(lang));
            }
            Err(e) => return Err(Error::FileRead { path, source: e }),
        };

        let names: HashMap<String, String> = serde_json::from_str(&content)?;
        log::debug!("loaded {} names for '{}'", names.len(), lang);
        Ok(Self::from_names(lang, names))
    }

    pub fn lang(&self) -> &str {
        &self.lang
    }

    /// Localized display name, or `name` itself when untranslated
    pub fn translate<'a>(&'a self, name: &'a str) -> Cow<'a, str> {
        match self.names.get(name) {
            Some(localized) => Cow::Borrowed(localized.as_str()),
            None => Cow::Borrowed(name),
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
