//! Article sources and table import

use crate::error::{Error, Result};
use crate::node::filter_tags_recursive;
use crate::options::ReadContext;
use crate::parser::parse;
use crate::table::Table;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// File extension of stored wikitext articles
const ARTICLE_EXT: &str = "wiki";

/// Raw wikitext of one article
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    pub title: String,
    pub body: String,
}

/// Anything that can hand out article wikitext by title
pub trait ArticleSource {
    /// Fetch the latest wikitext for `title`
    fn fetch_article(&self, title: &str) -> Result<Article>;
}

/// Articles stored as `<title>.wiki` files, optionally grouped per language
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
    lang: Option<String>,
}

impl DirectorySource {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            lang: None,
        }
    }

    /// Prefer articles under `<root>/<lang>/`
    pub fn with_lang(mut self, lang: &str) -> Self {
        self.lang = Some(lang.to_string());
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn candidates(&self, title: &str) -> Vec<PathBuf> {
        let file = format!("{}.{}", title.trim().replace(' ', "_"), ARTICLE_EXT);
        let mut paths = Vec::new();
        if let Some(lang) = &self.lang {
            paths.push(self.root.join(lang).join(&file));
        }
        paths.push(self.root.join(file));
        paths
    }

    /// Titles of every article below the root, sorted
    pub fn titles(&self) -> Result<Vec<String>> {
        let mut titles = Vec::new();
        for entry in WalkDir::new(&self.root).follow_links(true) {
            let entry = entry?;
            let path = entry.path();
            if !entry.file_type().is_file()
                || path.extension().and_then(|e| e.to_str()) != Some(ARTICLE_EXT)
            {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                titles.push(stem.replace('_', " "));
            }
        }
        titles.sort();
        titles.dedup();
        Ok(titles)
    }
}

impl ArticleSource for DirectorySource {
    fn fetch_article(&self, title: &str) -> Result<Article> {
        for path in self.candidates(title) {
            match fs::read_to_string(&path) {
                Ok(body) => {
                    log::debug!("fetched '{}' from {}", title, path.display());
                    return Ok(Article {
                        title: title.to_string(),
                        body,
                    });
                }
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) => return Err(Error::FileRead { path, source: e }),
            }
        }
        Err(Error::ArticleNotFound(title.to_string()))
    }
}

/// Article title from a plain title or a page URL
///
/// `https://en.wikipedia.org/wiki/List_of_cities#Top` gives `List_of_cities`.
pub fn parse_title(s: &str) -> String {
    let s = s.trim().trim_end_matches('/');
    let s = s.split(['#', '?']).next().unwrap_or(s);
    s.rsplit('/').next().unwrap_or(s).to_string()
}

/// Read every table in an article body, named `<title>[<index>]`
pub fn import_tables(title: &str, body: &str, ctx: &ReadContext) -> Result<Vec<Table>> {
    let nodes = parse(body);
    let tables = filter_tags_recursive(&nodes, &["table"])
        .into_iter()
        .enumerate()
        .map(|(idx, node)| Table::new(format!("{}[{}]", title, idx), node, ctx))
        .collect::<Result<Vec<_>>>()?;
    log::debug!("{}: imported {} tables", title, tables.len());
    Ok(tables)
}

/// Fetch an article and read its tables
pub fn import_article<S: ArticleSource + ?Sized>(
    source: &S,
    title: &str,
    ctx: &ReadContext,
) -> Result<Vec<Table>> {
    let article = source.fetch_article(&parse_title(title))?;
    import_tables(&article.title, &article.body, ctx)
}
