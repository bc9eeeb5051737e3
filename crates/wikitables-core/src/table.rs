//! Table reading: header detection and row assembly

use crate::error::{Error, Result};
use crate::node::{filter_tags, Node};
use crate::options::ReadContext;
use crate::row::{Row, RowReader};
use serde::{Serialize, Serializer};
use std::io::Write;

/// A table read from wiki markup
#[derive(Debug, Clone)]
pub struct Table {
    name: String,
    head: Vec<String>,
    rows: Vec<Row>,
    /// Row nodes left after header extraction, kept to regenerate rows
    row_nodes: Vec<Node>,
    /// Unparsed table node
    pub raw: Node,
    ctx: ReadContext,
}

impl Table {
    /// Read a table node into a header and typed rows
    pub fn new(name: impl Into<String>, raw: &Node, ctx: &ReadContext) -> Result<Self> {
        let name = name.into();
        let mut row_nodes = Vec::new();
        collect_rows(raw.children(), &mut row_nodes);

        let head = read_head(&name, raw, &mut row_nodes, ctx);
        let rows = read_rows(&name, &head, &row_nodes, ctx)?;
        log::debug!("{}: parsed {} rows {} cols", name, rows.len(), head.len());

        Ok(Self {
            name,
            head,
            rows,
            row_nodes,
            raw: raw.clone(),
            ctx: ctx.clone(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lang(&self) -> &str {
        self.ctx.lang()
    }

    /// Column names in order
    pub fn head(&self) -> &[String] {
        &self.head
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn column_count(&self) -> usize {
        self.head.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Replace the header and re-read every row against it
    ///
    /// The table is left unchanged if reading fails.
    pub fn set_head(&mut self, head: Vec<String>) -> Result<()> {
        let rows = read_rows(&self.name, &head, &self.row_nodes, &self.ctx)?;
        self.head = head;
        self.rows = rows;
        Ok(())
    }

    /// Replace the header from a JSON array of strings
    pub fn set_head_json(&mut self, value: &serde_json::Value) -> Result<()> {
        let invalid = || Error::InvalidHead("table head must be provided as list".to_string());
        let items = value.as_array().ok_or_else(invalid)?;
        let head = items
            .iter()
            .map(|item| item.as_str().map(str::to_string).ok_or_else(invalid))
            .collect::<Result<Vec<_>>>()?;
        self.set_head(head)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the header and rows as CSV; unset columns are left empty
    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut writer = csv::Writer::from_writer(writer);
        writer.write_record(&self.head)?;
        for row in &self.rows {
            let record: Vec<String> = self
                .head
                .iter()
                .map(|column| row.get(column).map(|f| f.to_string()).unwrap_or_default())
                .collect();
            writer.write_record(&record)?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// Tables serialize as their rows
impl Serialize for Table {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.rows.serialize(serializer)
    }
}

/// Collect `tr` nodes in document order, not descending into nested tables
///
/// A nested table's rows stay inside its cell and read as that cell's text.
fn collect_rows(nodes: &[Node], out: &mut Vec<Node>) {
    for node in nodes {
        match node.tag_name() {
            Some("tr") => out.push(node.clone()),
            Some("table") => {}
            _ => collect_rows(node.children(), out),
        }
    }
}

fn read_head(name: &str, raw: &Node, row_nodes: &mut Vec<Node>, ctx: &ReadContext) -> Vec<String> {
    let flat = filter_tags(raw.children(), &["th"]);
    if !flat.is_empty() {
        log::debug!("{}: using flat header", name);
        return header_names(&flat);
    }

    let mut best: Option<(usize, usize)> = None;
    for (idx, row) in row_nodes.iter().enumerate() {
        let count = filter_tags(row.children(), &["th"]).len();
        if count > best.map_or(0, |(_, n)| n) {
            best = Some((idx, count));
        }
    }
    if let Some((idx, _)) = best {
        log::debug!("{}: using header row {}", name, idx);
        let row = row_nodes.remove(idx);
        return header_names(&filter_tags(row.children(), &["th"]));
    }

    if ctx.options().placeholder_header {
        let width = row_nodes
            .iter()
            .map(|row| filter_tags(row.children(), &["td"]).len())
            .max()
            .unwrap_or(0);
        log::debug!("{}: using {} placeholder columns", name, width);
        return (0..width).map(|i| format!("column{}", i)).collect();
    }

    log::warn!("{}: no header found, table has no columns", name);
    Vec::new()
}

fn header_names(cells: &[&Node]) -> Vec<String> {
    cells
        .iter()
        .map(|cell| cell.strip_code().trim().to_string())
        .collect()
}

fn read_rows(name: &str, head: &[String], row_nodes: &[Node], ctx: &ReadContext) -> Result<Vec<Row>> {
    RowReader::new(name, head, ctx).read_all(row_nodes)
}
