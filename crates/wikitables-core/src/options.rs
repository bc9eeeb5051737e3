//! Reader configuration and the per-table reading context

use crate::countries::IsoCountries;
use crate::error::{Error, Result};
use crate::locale::{Catalog, CountryLookup};
use crate::node::Attribute;
use crate::parser::parse_attributes;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Tunable parts of table reading, loadable from JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderOptions {
    /// Attribute markup marking tags to leave out of field values
    pub ignore_attrs: Vec<String>,
    /// Templates whose output is suppressed entirely
    pub footnote_templates: Vec<String>,
    /// Template computing a percent change between two numbers
    pub delta_template: String,
    /// Name columns `column0..` when a table has no header cells at all
    pub placeholder_header: bool,
    /// Leave out the text of file, image and category links in cells
    pub hide_media_links: bool,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            ignore_attrs: vec![r#"group="Note""#.to_string()],
            footnote_templates: vec!["refn".to_string()],
            delta_template: "change".to_string(),
            placeholder_header: false,
            hide_media_links: false,
        }
    }
}

impl ReaderOptions {
    /// Load options from JSON; missing keys keep their defaults
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| Error::FileRead {
            path: path.as_ref().to_path_buf(),
            source: e,
        })?;
        let options: Self = serde_json::from_str(&content)?;
        options.validate()?;
        Ok(options)
    }

    /// Save the options to JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Check that every configured name is usable
    pub fn validate(&self) -> Result<()> {
        if self.delta_template.trim().is_empty() {
            return Err(Error::InvalidOptions(
                "delta_template must not be empty".to_string(),
            ));
        }
        if let Some(raw) = self
            .ignore_attrs
            .iter()
            .find(|raw| parse_attributes(raw).is_empty())
        {
            return Err(Error::InvalidOptions(format!(
                "ignore_attrs entry '{}' holds no attribute",
                raw
            )));
        }
        Ok(())
    }

    /// Parsed form of `ignore_attrs`
    pub fn ignored_attributes(&self) -> Vec<Attribute> {
        self.ignore_attrs
            .iter()
            .flat_map(|raw| parse_attributes(raw))
            .collect()
    }
}

/// Everything a table needs besides its markup: options, country lookup
/// and the locale catalog
#[derive(Clone)]
pub struct ReadContext {
    options: ReaderOptions,
    countries: Arc<dyn CountryLookup + Send + Sync>,
    catalog: Arc<Catalog>,
}

impl ReadContext {
    /// Context with default options, built-in ISO countries and no translations
    pub fn new(lang: &str) -> Self {
        Self {
            options: ReaderOptions::default(),
            countries: Arc::new(IsoCountries),
            catalog: Arc::new(Catalog::identity(lang)),
        }
    }

    pub fn with_options(mut self, options: ReaderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_countries(mut self, countries: impl CountryLookup + Send + Sync + 'static) -> Self {
        self.countries = Arc::new(countries);
        self
    }

    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = Arc::new(catalog);
        self
    }

    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }

    pub fn countries(&self) -> &dyn CountryLookup {
        self.countries.as_ref()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Language tag of the catalog in use
    pub fn lang(&self) -> &str {
        self.catalog.lang()
    }
}

impl Default for ReadContext {
    fn default() -> Self {
        Self::new("en")
    }
}

impl std::fmt::Debug for ReadContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReadContext")
            .field("options", &self.options)
            .field("lang", &self.lang())
            .finish_non_exhaustive()
    }
}
