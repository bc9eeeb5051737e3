//! Fields and the per-cell field reader

use crate::error::Result;
use crate::node::{Attribute, Node, Tag};
use crate::options::ReadContext;
use crate::templates::read_template;
use crate::value::Value;
use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// One cell's resolved value
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    /// Node the value was read from
    pub raw: Node,
    /// Typed value
    pub value: Value,
    /// Tag attributes seen while reading the cell (`rowspan`, ...)
    pub attrs: IndexMap<String, String>,
}

impl Field {
    pub fn new(raw: Node, value: Value) -> Self {
        Self {
            raw,
            value,
            attrs: IndexMap::new(),
        }
    }

    pub fn with_attrs(mut self, attrs: IndexMap<String, String>) -> Self {
        self.attrs = attrs;
        self
    }

    /// Look up an attribute recorded for this field
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

/// Fields serialize as their bare value
impl Serialize for Field {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.value.fmt(f)
    }
}

/// Piece of a cell produced while walking its markup
#[derive(Debug, Clone, PartialEq)]
pub enum Part {
    /// Text fragment joined into the cell's own value
    Text(String),
    /// Finished field emitted as-is
    Field(Field),
}

/// Stateful field reader; attributes accumulate per cell
pub struct FieldReader<'a> {
    ctx: &'a ReadContext,
    ignored: Vec<Attribute>,
    attrs: IndexMap<String, String>,
}

impl<'a> FieldReader<'a> {
    pub fn new(ctx: &'a ReadContext) -> Self {
        Self {
            ctx,
            ignored: ctx.options().ignored_attributes(),
            attrs: IndexMap::new(),
        }
    }

    /// Read one header or data cell into one or more fields
    ///
    /// Fields emitted by templates come first, followed by a field holding
    /// the joined text of the cell. A cell without any content still yields
    /// a single empty field.
    pub fn read(&mut self, cell: &Node) -> Result<Vec<Field>> {
        self.attrs.clear();
        let mut fields = Vec::new();
        let mut texts = Vec::new();

        self.merge_attrs(cell.attrs());
        for child in cell.children() {
            self.read_node(child, &mut fields, &mut texts)?;
        }

        let joined = texts
            .iter()
            .map(|t| t.trim_matches([' ', '\n', '\t']))
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        if !joined.is_empty() {
            fields.push(Field::new(cell.clone(), Value::guess(&joined)).with_attrs(self.attrs.clone()));
        }
        if fields.is_empty() {
            fields.push(Field::new(cell.clone(), Value::default()).with_attrs(self.attrs.clone()));
        }
        Ok(fields)
    }

    fn read_node(&mut self, node: &Node, fields: &mut Vec<Field>, texts: &mut Vec<String>) -> Result<()> {
        match node {
            Node::Text(text) => texts.push(text.clone()),
            Node::Comment(_) => {}
            Node::Link(link) => {
                if !(link.is_media() && self.ctx.options().hide_media_links) {
                    texts.push(link.display_text());
                }
            }
            Node::Template(template) => {
                for part in read_template(template, self.ctx)? {
                    match part {
                        Part::Text(text) => texts.push(text),
                        Part::Field(field) => fields.push(field.with_attrs(self.attrs.clone())),
                    }
                }
            }
            Node::Tag(tag) => {
                self.merge_attrs(&tag.attrs);
                if !self.is_excluded(tag) {
                    for child in &tag.children {
                        self.read_node(child, fields, texts)?;
                    }
                }
            }
        }
        Ok(())
    }

    fn merge_attrs(&mut self, attrs: &[Attribute]) {
        for attr in attrs {
            self.attrs.insert(attr.name.clone(), attr.value.clone());
        }
    }

    /// Tags marked by an ignored attribute or without content are skipped
    fn is_excluded(&self, tag: &Tag) -> bool {
        tag.children.is_empty() || tag.attrs.iter().any(|a| self.ignored.contains(a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Link, Param, Template};
    use crate::options::ReaderOptions;

    fn td(children: Vec<Node>) -> Node {
        Tag::new("td").with_children(children).into()
    }

    fn read(cell: &Node) -> Vec<Field> {
        let ctx = ReadContext::default();
        FieldReader::new(&ctx).read(cell).unwrap()
    }

    #[test]
    fn test_plain_text_is_typed() {
        let fields = read(&td(vec![Node::text(" 1,975 \n")]));
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].value, Value::Integer(1975));
    }

    #[test]
    fn test_fragments_joined_with_spaces() {
        let cell = td(vec![
            Node::text(" Variable "),
            Tag::new("small")
                .with_children(vec![Node::text("(8- to 32-bit)")])
                .into(),
        ]);
        let fields = read(&cell);
        assert_eq!(fields[0].value, Value::from("Variable (8- to 32-bit)"));
    }

    #[test]
    fn test_links_use_display_text() {
        let cell = td(vec![
            Node::text(" 68000 / "),
            Link::new("Motorola 68000 series").with_text("680x0").into(),
        ]);
        assert_eq!(read(&cell)[0].value, Value::from("68000 / 680x0"));

        let cell = td(vec![Link::new("Carl Djerassi").into()]);
        assert_eq!(read(&cell)[0].value, Value::from("Carl Djerassi"));
    }

    #[test]
    fn test_media_links_read_as_text_by_default() {
        let cell = td(vec![
            Link::new("File:Flag of Brazil.svg").with_text("22px").into(),
            Node::text(" Brazil"),
        ]);
        assert_eq!(read(&cell)[0].value, Value::from("22px Brazil"));

        let ctx = ReadContext::default().with_options(ReaderOptions {
            hide_media_links: true,
            ..ReaderOptions::default()
        });
        let fields = FieldReader::new(&ctx).read(&cell).unwrap();
        assert_eq!(fields[0].value, Value::from("Brazil"));
    }

    #[test]
    fn test_empty_cell_yields_one_empty_field() {
        let fields = read(&td(vec![]));
        assert_eq!(fields.len(), 1);
        assert!(fields[0].is_empty());

        let fields = read(&td(vec![Node::text(" \n"), Tag::new("br").into()]));
        assert_eq!(fields.len(), 1);
        assert!(fields[0].is_empty());
    }

    #[test]
    fn test_ignored_attribute_excludes_tag() {
        let note: Node = Tag::new("ref")
            .with_attrs(vec![Attribute::new("group", "Note")])
            .with_children(vec![Node::text("a footnote")])
            .into();
        let cell = td(vec![Node::text("42"), note]);

        let fields = read(&cell);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].value, Value::Integer(42));
    }

    #[test]
    fn test_cell_attributes_carried_to_field() {
        let cell: Node = Tag::new("td")
            .with_attrs(vec![Attribute::new("rowspan", "2")])
            .with_children(vec![Node::text("spanned")])
            .into();

        let fields = read(&cell);
        assert_eq!(fields[0].attr("rowspan"), Some("2"));
    }

    #[test]
    fn test_nested_attributes_last_writer_wins() {
        let inner: Node = Tag::new("span")
            .with_attrs(vec![Attribute::new("style", "inner")])
            .with_children(vec![Node::text("x")])
            .into();
        let cell: Node = Tag::new("td")
            .with_attrs(vec![Attribute::new("style", "outer")])
            .with_children(vec![inner])
            .into();

        assert_eq!(read(&cell)[0].attr("style"), Some("inner"));
    }

    #[test]
    fn test_delta_template_emits_fields_first() {
        let change = Template::new("change")
            .with_param(Param::named("invert", "on"))
            .with_param(Param::positional("12176866"))
            .with_param(Param::positional("10659386"));
        let cell: Node = Tag::new("td")
            .with_attrs(vec![Attribute::new("align", "right")])
            .with_children(vec![change.into()])
            .into();

        let fields = read(&cell);
        assert_eq!(fields.len(), 3);
        assert_eq!(fields[0].value, Value::Integer(12176866));
        assert_eq!(fields[1].value, Value::Integer(10659386));
        assert!(matches!(fields[2].value, Value::Float(_)));
        assert!(fields.iter().all(|f| f.attr("align") == Some("right")));
    }

    #[test]
    fn test_generic_template_contributes_positional_args() {
        let cell = td(vec![Template::new("nowrap")
            .with_param(Param::positional("São Paulo"))
            .with_param(Param::named("class", "x"))
            .into()]);
        assert_eq!(read(&cell)[0].value, Value::from("São Paulo"));
    }

    #[test]
    fn test_attributes_reset_between_cells() {
        let ctx = ReadContext::default();
        let mut reader = FieldReader::new(&ctx);
        let first: Node = Tag::new("td")
            .with_attrs(vec![Attribute::new("rowspan", "3")])
            .into();

        reader.read(&first).unwrap();
        let fields = reader.read(&td(vec![Node::text("b")])).unwrap();
        assert_eq!(fields[0].attr("rowspan"), None);
    }

    #[test]
    fn test_field_serializes_as_value() {
        let field = Field::new(Node::text("x"), Value::Float(12.5));
        assert_eq!(serde_json::to_string(&field).unwrap(), "12.5");
    }
}
