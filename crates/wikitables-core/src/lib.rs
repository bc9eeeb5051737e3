//! wikitables-core: Core library for reading wiki markup tables
//!
//! This library provides functionality to:
//! - Parse wikitext into a tree of tags, templates, links and text
//! - Detect table headers (flat header cells or the widest header row)
//! - Read cells into typed fields, expanding known templates
//! - Carry row-spanned values down their columns
//! - Import every table of an article and export it as JSON or CSV

pub mod countries;
pub mod error;
pub mod field;
pub mod locale;
pub mod node;
pub mod options;
pub mod parser;
pub mod row;
pub mod source;
pub mod table;
pub mod templates;
pub mod value;

pub use countries::{Country, IsoCountries};
pub use error::{Error, Result};
pub use field::{Field, FieldReader, Part};
pub use locale::{Catalog, CountryLookup};
pub use node::{Attribute, Link, Node, Param, Tag, Template};
pub use options::{ReadContext, ReaderOptions};
pub use parser::parse;
pub use row::{Row, RowReader};
pub use source::{import_article, import_tables, parse_title, Article, ArticleSource, DirectorySource};
pub use table::Table;
pub use templates::{read_template, TemplateArgs};
pub use value::Value;
