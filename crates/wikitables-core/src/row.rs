//! Table rows and the stateful row reader

use crate::error::Result;
use crate::field::{Field, FieldReader};
use crate::node::{filter_tags, Node};
use crate::options::ReadContext;
use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use std::collections::HashMap;

/// Attribute carrying a cell's row span
const ROWSPAN: &str = "rowspan";

/// A single table row, mapping column names to fields
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Row name in the format `<table name>[<row index>]`
    pub name: String,
    /// Unparsed row node
    pub raw: Node,
    fields: IndexMap<String, Field>,
}

impl Row {
    pub fn new(name: impl Into<String>, raw: Node) -> Self {
        Self {
            name: name.into(),
            raw,
            fields: IndexMap::new(),
        }
    }

    /// Set a column's field; an existing key keeps its position
    pub fn insert(&mut self, column: impl Into<String>, field: Field) {
        self.fields.insert(column.into(), field);
    }

    /// Get a field by column name
    pub fn get(&self, column: &str) -> Option<&Field> {
        self.fields.get(column)
    }

    pub fn contains(&self, column: &str) -> bool {
        self.fields.contains_key(column)
    }

    /// Column names in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// True when every field holds the empty string
    pub fn is_null(&self) -> bool {
        self.fields.values().all(Field::is_empty)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl std::ops::Index<&str> for Row {
    type Output = Field;

    fn index(&self, column: &str) -> &Field {
        &self.fields[column]
    }
}

/// Rows serialize as an ordered object of bare values
impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

/// Field carried down a column by a row span
struct Span {
    field: Field,
    remaining: usize,
}

/// Stateful row reader; tracks row spans across the rows of one table
pub struct RowReader<'a> {
    table_name: &'a str,
    head: &'a [String],
    index: usize,
    spans: HashMap<String, Span>,
    fields: FieldReader<'a>,
}

impl<'a> RowReader<'a> {
    pub fn new(table_name: &'a str, head: &'a [String], ctx: &'a ReadContext) -> Self {
        Self {
            table_name,
            head,
            index: 0,
            spans: HashMap::new(),
            fields: FieldReader::new(ctx),
        }
    }

    /// Read `tr` nodes in order, skipping empty and null rows
    pub fn read_all<'n, I>(&mut self, nodes: I) -> Result<Vec<Row>>
    where
        I: IntoIterator<Item = &'n Node>,
    {
        let mut rows = Vec::new();
        for node in nodes {
            if let Some(row) = self.read(node)? {
                if !row.is_null() {
                    rows.push(row);
                }
            }
        }
        Ok(rows)
    }

    /// Read a single `tr` node; `None` if the row has no children
    pub fn read(&mut self, node: &Node) -> Result<Option<Row>> {
        if node.children().is_empty() {
            return Ok(None);
        }

        let name = format!("{}[{}]", self.table_name, self.index);
        self.index += 1;
        let mut row = Row::new(name, node.clone());

        let mut fields = Vec::new();
        for cell in filter_tags(node.children(), &["th", "td"]) {
            fields.extend(self.fields.read(cell)?);
        }
        let mut fields = fields.into_iter();

        for column in self.head {
            if let Some(span) = self.spans.get_mut(column).filter(|s| s.remaining > 0) {
                span.remaining -= 1;
                row.insert(column.as_str(), span.field.clone());
                continue;
            }

            let Some(field) = fields.next() else {
                log::warn!("{}: missing field for column [{}]", row.name, column);
                continue;
            };

            if let Some(raw) = field.attr(ROWSPAN) {
                let rows = parse_span(&row.name, raw);
                self.spans.insert(
                    column.clone(),
                    Span {
                        field: field.clone(),
                        remaining: rows.saturating_sub(1),
                    },
                );
            }
            row.insert(column.as_str(), field);
        }

        for field in fields {
            log::warn!("{}: dropping field from unknown column: {}", row.name, field);
        }

        Ok(Some(row))
    }
}

fn parse_span(row_name: &str, raw: &str) -> usize {
    match raw.trim().parse::<usize>() {
        Ok(rows) => rows,
        Err(_) => {
            log::warn!("{}: ignoring unreadable {} '{}'", row_name, ROWSPAN, raw);
            1
        }
    }
}
