//! Wikitext parser producing a markup tree
//!
//! Parsing never fails: markup that does not close properly is kept as
//! plain text, the way wiki renderers treat it.

use crate::node::{Attribute, Link, Node, Param, Tag, Template};

/// Tags that never have contents
const VOID_TAGS: &[&str] = &["br", "hr", "wbr", "img"];

/// Tags whose contents are kept verbatim
const LITERAL_TAGS: &[&str] = &["nowiki", "pre", "math", "syntaxhighlight", "source"];

const ENTITIES: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&apos;", "'"),
    ("&ndash;", "\u{2013}"),
    ("&mdash;", "\u{2014}"),
    ("&minus;", "\u{2212}"),
    ("&thinsp;", "\u{2009}"),
    ("&times;", "\u{d7}"),
];

/// Parse wikitext into a sequence of nodes
pub fn parse(source: &str) -> Vec<Node> {
    parse_block(source)
}

/// Parse attribute markup such as `rowspan="2" style=color:red`
///
/// Names are lowercased; values keep their case with quotes removed.
pub fn parse_attributes(src: &str) -> Vec<Attribute> {
    let mut attrs = Vec::new();
    let mut rest = src;

    loop {
        rest = rest.trim_start_matches(|c: char| c.is_whitespace() || c == '/');
        if rest.is_empty() {
            break;
        }

        let name_len = rest
            .find(|c: char| c.is_whitespace() || c == '=')
            .unwrap_or(rest.len());
        if name_len == 0 {
            // stray '='
            rest = &rest[1..];
            continue;
        }
        let name = rest[..name_len].to_lowercase();
        rest = rest[name_len..].trim_start();

        let value = match rest.strip_prefix('=') {
            Some(after) => {
                let after = after.trim_start();
                match after.chars().next() {
                    Some(quote @ ('"' | '\'')) => {
                        let body = &after[1..];
                        let end = body.find(quote).unwrap_or(body.len());
                        rest = body.get(end + 1..).unwrap_or("");
                        body[..end].to_string()
                    }
                    _ => {
                        let end = after.find(char::is_whitespace).unwrap_or(after.len());
                        rest = &after[end..];
                        after[..end].to_string()
                    }
                }
            }
            None => String::new(),
        };

        attrs.push(Attribute::new(name, value));
    }

    attrs
}

/// Parse text that may contain tables starting at line beginnings
fn parse_block(src: &str) -> Vec<Node> {
    let mut nodes = Vec::new();
    let mut text_start = 0;
    let mut pos = 0;

    while pos < src.len() {
        let end = line_end(src, pos);
        if src[pos..end].trim_start().starts_with("{|") {
            let table_end = table_end(src, pos);
            nodes.extend(parse_inline(&src[text_start..pos]));
            nodes.push(parse_table(&src[pos..table_end]));
            text_start = table_end;
            pos = table_end;
            continue;
        }
        pos = end + 1;
    }

    if text_start < src.len() {
        nodes.extend(parse_inline(&src[text_start..]));
    }
    nodes
}

fn line_end(src: &str, pos: usize) -> usize {
    src[pos..].find('\n').map_or(src.len(), |i| pos + i)
}

/// End offset of the table opening at `start`, accounting for nested tables
fn table_end(src: &str, start: usize) -> usize {
    let mut depth = 0usize;
    let mut pos = start;
    loop {
        let end = line_end(src, pos);
        let line = src[pos..end].trim_start();
        if line.starts_with("{|") {
            depth += 1;
        } else if line.starts_with("|}") {
            depth = depth.saturating_sub(1);
            if depth == 0 {
                return end;
            }
        }
        if end >= src.len() {
            return src.len();
        }
        pos = end + 1;
    }
}

/// Cell being accumulated while reading table lines
struct PendingCell {
    /// `None` for loose text between cells
    name: Option<&'static str>,
    attrs: Vec<Attribute>,
    content: String,
}

impl PendingCell {
    fn new(name: &'static str, segment: &str) -> Self {
        let (attrs, content) = split_cell_attrs(segment);
        Self {
            name: Some(name),
            attrs,
            content: content.to_string(),
        }
    }

    fn loose(line: &str) -> Self {
        Self {
            name: None,
            attrs: Vec::new(),
            content: line.to_string(),
        }
    }

    fn push_line(&mut self, line: &str) {
        self.content.push('\n');
        self.content.push_str(line);
    }
}

struct TableBuilder {
    table: Tag,
    row: Option<Tag>,
    cell: Option<PendingCell>,
}

impl TableBuilder {
    fn container(&mut self) -> &mut Vec<Node> {
        match &mut self.row {
            Some(row) => &mut row.children,
            None => &mut self.table.children,
        }
    }

    fn flush_cell(&mut self) {
        let Some(cell) = self.cell.take() else {
            return;
        };
        match cell.name {
            None => {
                if !cell.content.trim().is_empty() {
                    let nodes = parse_block(&cell.content);
                    self.container().extend(nodes);
                }
            }
            Some(name) => {
                let tag = Tag::new(name)
                    .with_attrs(cell.attrs)
                    .with_children(parse_block(&cell.content));
                if name == "caption" {
                    self.table.children.push(tag.into());
                } else {
                    self.container().push(tag.into());
                }
            }
        }
    }

    fn flush_row(&mut self) {
        self.flush_cell();
        if let Some(row) = self.row.take() {
            self.table.children.push(row.into());
        }
    }

    fn open_cells(&mut self, name: &'static str, line: &str, header: bool) {
        self.flush_cell();
        let separators: &[&str] = if header { &["||", "!!"] } else { &["||"] };
        let mut segments = split_top_level(line, separators);
        let last = segments.pop().unwrap_or("");
        for segment in segments {
            self.cell = Some(PendingCell::new(name, segment));
            self.flush_cell();
        }
        self.cell = Some(PendingCell::new(name, last));
    }

    fn finish(mut self) -> Node {
        self.flush_row();
        self.table.into()
    }
}

/// Parse a `{| ... |}` block into a `table` tag
fn parse_table(src: &str) -> Node {
    let mut lines = src.split('\n').map(|l| l.strip_suffix('\r').unwrap_or(l));
    let first = lines.next().unwrap_or("").trim_start();
    let attrs = parse_attributes(first.strip_prefix("{|").unwrap_or(first));

    let mut builder = TableBuilder {
        table: Tag::new("table").with_attrs(attrs),
        row: None,
        cell: None,
    };
    let mut nested = 0usize;

    for line in lines {
        let trimmed = line.trim_start();

        if nested > 0 {
            if trimmed.starts_with("{|") {
                nested += 1;
            } else if trimmed.starts_with("|}") {
                nested -= 1;
            }
            builder
                .cell
                .get_or_insert_with(|| PendingCell::loose(""))
                .push_line(line);
            continue;
        }

        if trimmed.starts_with("{|") {
            nested = 1;
            match &mut builder.cell {
                Some(cell) => cell.push_line(line),
                None => builder.cell = Some(PendingCell::loose(line)),
            }
        } else if trimmed.starts_with("|}") {
            break;
        } else if let Some(rest) = trimmed.strip_prefix("|-") {
            builder.flush_row();
            let attrs = parse_attributes(rest.trim_start_matches('-'));
            builder.row = Some(Tag::new("tr").with_attrs(attrs));
        } else if let Some(rest) = trimmed.strip_prefix("|+") {
            builder.flush_cell();
            builder.cell = Some(PendingCell::new("caption", rest));
        } else if let Some(rest) = trimmed.strip_prefix('!') {
            builder.open_cells("th", rest, true);
        } else if let Some(rest) = trimmed.strip_prefix('|') {
            builder.open_cells("td", rest, false);
        } else {
            match &mut builder.cell {
                Some(cell) => cell.push_line(line),
                None => builder.cell = Some(PendingCell::loose(line)),
            }
        }
    }

    builder.finish()
}

/// Split `attrs | content` cell markup
fn split_cell_attrs(segment: &str) -> (Vec<Attribute>, &str) {
    match find_top_level(segment, &["|"]) {
        Some((at, len)) => (parse_attributes(&segment[..at]), &segment[at + len..]),
        None => (Vec::new(), segment),
    }
}

/// Position and length of the first separator outside links, templates and tags
fn find_top_level(s: &str, separators: &[&str]) -> Option<(usize, usize)> {
    let mut depth = 0usize;
    let mut i = 0;
    while i < s.len() {
        let rest = &s[i..];
        if rest.starts_with("{{") || rest.starts_with("[[") {
            depth += 1;
            i += 2;
            continue;
        }
        if rest.starts_with("}}") || rest.starts_with("]]") {
            depth = depth.saturating_sub(1);
            i += 2;
            continue;
        }
        if rest.starts_with("<!--") {
            i += rest.find("-->").map_or(rest.len(), |e| e + 3);
            continue;
        }
        if is_tag_start(rest) {
            if let Some(len) = tag_span(rest) {
                i += len;
                continue;
            }
        }
        if depth == 0 {
            if let Some(sep) = separators.iter().find(|sep| rest.starts_with(**sep)) {
                return Some((i, sep.len()));
            }
        }
        i += rest.chars().next().map_or(1, char::len_utf8);
    }
    None
}

fn split_top_level<'a>(s: &'a str, separators: &[&str]) -> Vec<&'a str> {
    let mut parts = Vec::new();
    let mut rest = s;
    while let Some((at, len)) = find_top_level(rest, separators) {
        parts.push(&rest[..at]);
        rest = &rest[at + len..];
    }
    parts.push(rest);
    parts
}

/// Length of the tag opening `rest`, through its closing tag when it has one
fn tag_span(rest: &str) -> Option<usize> {
    let open_len = rest.find('>')? + 1;
    let after = &rest[1..];
    if after.starts_with('/') || rest[..open_len - 1].ends_with('/') {
        return Some(open_len);
    }
    let name_len = after
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(after.len());
    let name = after[..name_len].to_ascii_lowercase();
    if VOID_TAGS.contains(&name.as_str()) {
        return Some(open_len);
    }
    match find_close_tag(&rest[open_len..], &name) {
        Some((at, close_len)) => Some(open_len + at + close_len),
        None => Some(open_len),
    }
}

fn is_tag_start(s: &str) -> bool {
    let mut chars = s.chars();
    chars.next() == Some('<')
        && chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '/')
}

/// Byte offset of the `close` delimiter balancing an already consumed opener
fn find_balanced(s: &str, close: &str) -> Option<usize> {
    let mut stack: Vec<&str> = Vec::new();
    let mut i = 0;
    while i < s.len() {
        let rest = &s[i..];
        if rest.starts_with("<!--") {
            i += rest.find("-->").map_or(rest.len(), |e| e + 3);
            continue;
        }
        if rest.starts_with("{{") {
            stack.push("}}");
            i += 2;
            continue;
        }
        if rest.starts_with("[[") {
            stack.push("]]");
            i += 2;
            continue;
        }
        if rest.starts_with("}}") || rest.starts_with("]]") {
            let token = &rest[..2];
            match stack.last() {
                Some(top) if *top == token => {
                    stack.pop();
                }
                None if token == close => return Some(i),
                _ => {}
            }
            i += 2;
            continue;
        }
        i += rest.chars().next().map_or(1, char::len_utf8);
    }
    None
}

/// Parse inline markup: links, templates, tags, comments and quote runs
fn parse_inline(src: &str) -> Vec<Node> {
    let mut nodes = Vec::new();
    let mut text = String::new();
    let mut pos = 0;

    while pos < src.len() {
        let rest = &src[pos..];
        if let Some((node, used)) = parse_construct(rest) {
            flush_text(&mut text, &mut nodes);
            nodes.push(node);
            pos += used;
            continue;
        }
        let Some(ch) = rest.chars().next() else {
            break;
        };
        text.push(ch);
        pos += ch.len_utf8();
    }

    flush_text(&mut text, &mut nodes);
    nodes
}

fn flush_text(text: &mut String, nodes: &mut Vec<Node>) {
    if !text.is_empty() {
        nodes.push(Node::Text(decode_entities(text)));
        text.clear();
    }
}

fn parse_construct(rest: &str) -> Option<(Node, usize)> {
    if let Some(body) = rest.strip_prefix("<!--") {
        return Some(match body.find("-->") {
            Some(end) => (Node::Comment(body[..end].to_string()), 4 + end + 3),
            None => (Node::Comment(body.to_string()), rest.len()),
        });
    }
    if rest.starts_with("{{{") {
        // template argument reference, kept verbatim
        let end = rest[3..].find("}}}")?;
        return Some((Node::text(&rest[..3 + end + 3]), 3 + end + 3));
    }
    if rest.starts_with("{{") {
        return parse_template(rest);
    }
    if rest.starts_with("[[") {
        return parse_link(rest);
    }
    if rest.starts_with("''") {
        return parse_quotes(rest);
    }
    if is_tag_start(rest) {
        return parse_tag(rest);
    }
    None
}

fn parse_template(rest: &str) -> Option<(Node, usize)> {
    let end = find_balanced(&rest[2..], "}}")?;
    let inner = &rest[2..2 + end];
    let mut parts = split_top_level(inner, &["|"]).into_iter();
    let name = parts.next()?.trim();
    if name.is_empty() {
        return None;
    }

    let params = parts.map(parse_param).collect();
    let template = Template {
        name: name.to_string(),
        params,
    };
    Some((template.into(), 2 + end + 2))
}

fn parse_param(raw: &str) -> Param {
    match find_top_level(raw, &["="]) {
        Some((at, _)) => Param {
            name: Some(raw[..at].trim().to_string()),
            value: parse_block(&raw[at + 1..]),
        },
        None => Param {
            name: None,
            value: parse_block(raw),
        },
    }
}

fn parse_link(rest: &str) -> Option<(Node, usize)> {
    let end = find_balanced(&rest[2..], "]]")?;
    let inner = &rest[2..2 + end];
    let (title, text) = match find_top_level(inner, &["|"]) {
        Some((at, len)) => (&inner[..at], Some(&inner[at + len..])),
        None => (inner, None),
    };
    let title = title.trim();
    if title.is_empty() {
        return None;
    }

    let link = Link {
        title: title.to_string(),
        text: text.map(parse_inline),
    };
    Some((link.into(), 2 + end + 2))
}

/// `''italic''`, `'''bold'''` and `'''''both'''''`, closed at end of line if unmatched
fn parse_quotes(rest: &str) -> Option<(Node, usize)> {
    let run = rest.bytes().take_while(|b| *b == b'\'').count();
    let line_end = rest.find('\n').unwrap_or(rest.len());

    let (len, names): (usize, &[&str]) = match run {
        2 => (2, &["i"]),
        3 | 4 => (3, &["b"]),
        _ => (5, &["b", "i"]),
    };
    let body = &rest[len..line_end];
    let (inner, used) = match find_quote_run(body, len) {
        Some(at) => (&body[..at], len + at + len),
        None => (body, line_end),
    };

    let mut children = parse_inline(inner);
    for name in names.iter().rev() {
        children = vec![Tag::new(*name).with_children(children).into()];
    }
    children.pop().map(|node| (node, used))
}

/// Start of the first run of exactly `len` apostrophes
fn find_quote_run(s: &str, len: usize) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'\'' {
            let run = bytes[i..].iter().take_while(|b| **b == b'\'').count();
            if run == len {
                return Some(i);
            }
            i += run;
        } else {
            i += 1;
        }
    }
    None
}

fn parse_tag(rest: &str) -> Option<(Node, usize)> {
    let after = &rest[1..];
    if !after.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return None;
    }
    let name_len = after
        .find(|c: char| !c.is_ascii_alphanumeric())
        .unwrap_or(after.len());
    let name = after[..name_len].to_ascii_lowercase();
    let close = after.find('>')?;

    let attr_src = after[name_len..close].trim_end();
    let self_closing = attr_src.ends_with('/');
    let attrs = parse_attributes(attr_src.trim_end_matches('/'));
    let open_len = 1 + close + 1;
    let tag = Tag::new(name.as_str()).with_attrs(attrs);

    if self_closing || VOID_TAGS.contains(&name.as_str()) {
        return Some((tag.into(), open_len));
    }

    let body = &rest[open_len..];
    match find_close_tag(body, &name) {
        Some((at, close_len)) => {
            let inner = &body[..at];
            let children = if LITERAL_TAGS.contains(&name.as_str()) {
                if inner.is_empty() {
                    Vec::new()
                } else {
                    vec![Node::text(inner)]
                }
            } else {
                parse_block(inner)
            };
            Some((tag.with_children(children).into(), open_len + at + close_len))
        }
        None => Some((tag.into(), open_len)),
    }
}

/// Offset and length of the closing tag matching an open `name` tag
fn find_close_tag(body: &str, name: &str) -> Option<(usize, usize)> {
    // ASCII lowercasing keeps byte offsets intact
    let lower = body.to_ascii_lowercase();
    let open = format!("<{name}");
    let close = format!("</{name}");
    let mut depth = 0usize;
    let mut i = 0;

    while let Some(offset) = lower[i..].find('<') {
        let at = i + offset;
        let rest = &lower[at..];
        if rest.starts_with(&close) && is_name_end(&rest[close.len()..]) {
            let len = rest.find('>').map_or(rest.len(), |e| e + 1);
            if depth == 0 {
                return Some((at, len));
            }
            depth -= 1;
            i = at + len;
            continue;
        }
        if rest.starts_with(&open) && is_name_end(&rest[open.len()..]) {
            if let Some(e) = rest.find('>') {
                if !rest[..e].ends_with('/') {
                    depth += 1;
                }
            }
        }
        i = at + 1;
    }
    None
}

fn is_name_end(s: &str) -> bool {
    !s.starts_with(|c: char| c.is_ascii_alphanumeric())
}

fn decode_entities(text: &str) -> String {
    if !text.contains('&') {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(at) = rest.find('&') {
        out.push_str(&rest[..at]);
        rest = &rest[at..];
        if let Some((entity, value)) = ENTITIES.iter().find(|(e, _)| rest.starts_with(e)) {
            out.push_str(value);
            rest = &rest[entity.len()..];
        } else if let Some((ch, len)) = numeric_entity(rest) {
            out.push(ch);
            rest = &rest[len..];
        } else {
            out.push('&');
            rest = &rest[1..];
        }
    }
    out.push_str(rest);
    out
}

/// `&#123;` or `&#x7B;`
fn numeric_entity(s: &str) -> Option<(char, usize)> {
    let body = s.strip_prefix("&#")?;
    let end = body.find(';')?;
    let digits = &body[..end];
    let code = match digits.strip_prefix(['x', 'X']) {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => digits.parse::<u32>().ok()?,
    };
    char::from_u32(code).map(|ch| (ch, 2 + end + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{filter_tags, filter_tags_recursive, strip_code};

    fn first_table(source: &str) -> Tag {
        parse(source)
            .into_iter()
            .find_map(|n| match n {
                Node::Tag(tag) if tag.name == "table" => Some(tag),
                _ => None,
            })
            .expect("table")
    }

    #[test]
    fn test_parse_attributes() {
        let attrs = parse_attributes(r#" rowspan="2" Style='color: red' align=left hidden"#);
        assert_eq!(
            attrs,
            vec![
                Attribute::new("rowspan", "2"),
                Attribute::new("style", "color: red"),
                Attribute::new("align", "left"),
                Attribute::new("hidden", ""),
            ]
        );
    }

    #[test]
    fn test_parse_simple_table() {
        let table = first_table(
            "{| class=\"wikitable\"\n|-\n! Column 1 header !! Column 2 header\n|-\n| Row 1 Column 1 || Row 1 Column 2\n|}\n",
        );

        assert_eq!(table.attr("class"), Some("wikitable"));
        let rows = filter_tags(&table.children, &["tr"]);
        assert_eq!(rows.len(), 2);

        let header = filter_tags(rows[0].children(), &["th"]);
        assert_eq!(header.len(), 2);
        assert_eq!(header[0].strip_code(), " Column 1 header ");
        assert_eq!(header[1].strip_code(), " Column 2 header");

        let cells = filter_tags(rows[1].children(), &["td"]);
        assert_eq!(cells.len(), 2);
        assert_eq!(cells[1].strip_code(), " Row 1 Column 2");
    }

    #[test]
    fn test_header_before_first_row_is_flat() {
        let table = first_table("{|\n! A\n! B\n|-\n| 1\n| 2\n|}");

        assert_eq!(filter_tags(&table.children, &["th"]).len(), 2);
        assert_eq!(filter_tags(&table.children, &["tr"]).len(), 1);
    }

    #[test]
    fn test_cell_attributes_and_links() {
        let table = first_table("{|\n|-\n| rowspan=\"2\" | [[Rio de Janeiro|Rio]] || [[A|b]]\n|}");
        let rows = filter_tags(&table.children, &["tr"]);
        let cells = filter_tags(rows[0].children(), &["td"]);

        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].as_tag().and_then(|t| t.attr("rowspan")), Some("2"));
        assert_eq!(cells[0].strip_code().trim(), "Rio");
        assert!(cells[1].attrs().is_empty());
        assert_eq!(cells[1].strip_code().trim(), "b");
    }

    #[test]
    fn test_pipes_inside_tags_do_not_split_cells() {
        let table = first_table(
            "{|\n|-\n| 42<ref>p. 3|4</ref> || a<nowiki>|</nowiki>b || x<br/>|y\n|}",
        );
        let rows = filter_tags(&table.children, &["tr"]);
        let cells = filter_tags(rows[0].children(), &["td"]);

        assert_eq!(cells.len(), 3);
        assert!(cells[0].attrs().is_empty());
        assert_eq!(cells[0].strip_code().trim(), "42p. 3|4");
        assert_eq!(filter_tags(cells[0].children(), &["ref"]).len(), 1);
        assert_eq!(cells[1].strip_code().trim(), "a|b");
        // void tags do not hide what follows them
        assert_eq!(cells[2].strip_code().trim(), "y");
    }

    #[test]
    fn test_multiline_cell() {
        let table = first_table("{|\n|-\n| first line\nsecond line\n| next\n|}");
        let rows = filter_tags(&table.children, &["tr"]);
        let cells = filter_tags(rows[0].children(), &["td"]);

        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].strip_code(), " first line\nsecond line");
    }

    #[test]
    fn test_empty_row_has_no_children() {
        let table = first_table("{|\n|-\n| a\n|-\n|}");
        let rows = filter_tags(&table.children, &["tr"]);

        assert_eq!(rows.len(), 2);
        assert!(rows[1].children().is_empty());
    }

    #[test]
    fn test_nested_table_stays_inside_cell() {
        let table = first_table("{|\n|-\n| outer\n{|\n|-\n| inner\n|}\n| after\n|}");
        let rows = filter_tags(&table.children, &["tr"]);
        let cells = filter_tags(rows[0].children(), &["td"]);

        assert_eq!(rows.len(), 1);
        assert_eq!(cells.len(), 2);
        assert_eq!(filter_tags(cells[0].children(), &["table"]).len(), 1);
        assert_eq!(cells[1].strip_code().trim(), "after");
    }

    #[test]
    fn test_parse_template_params() {
        let nodes = parse("{{change|invert=on|12176866|10659386}}");
        let Node::Template(template) = &nodes[0] else {
            panic!("expected template, got {:?}", nodes);
        };

        assert_eq!(template.name, "change");
        assert_eq!(template.params.len(), 3);
        assert_eq!(template.params[0].name.as_deref(), Some("invert"));
        assert_eq!(template.params[0].text(), "on");
        assert_eq!(template.params[1].name, None);
        assert_eq!(template.params[2].text(), "10659386");
    }

    #[test]
    fn test_nested_template_and_link_in_params() {
        let nodes = parse("{{sort|{{flag|Brazil}}|[[a|b]]}} tail");
        let Node::Template(template) = &nodes[0] else {
            panic!("expected template, got {:?}", nodes);
        };

        assert_eq!(template.name, "sort");
        assert_eq!(template.params.len(), 2);
        assert!(matches!(template.params[0].value[0], Node::Template(_)));
        assert_eq!(template.params[1].text(), "b");
        assert_eq!(nodes[1], Node::text(" tail"));
    }

    #[test]
    fn test_tags_void_and_paired() {
        let nodes = parse("2018<br>rank <small>(8- to 32-bit)</small><ref name=\"a\" />");

        assert_eq!(strip_code(&nodes), "2018rank (8- to 32-bit)");
        let tags = filter_tags_recursive(&nodes, &["br", "small", "ref"]);
        assert_eq!(tags.len(), 3);
        assert!(tags[0].children().is_empty());
        assert_eq!(tags[2].as_tag().and_then(|t| t.attr("name")), Some("a"));
    }

    #[test]
    fn test_quotes_become_tags() {
        let nodes = parse("'''''[[São Paulo]]''''' and ''it''");

        assert_eq!(nodes[0].tag_name(), Some("b"));
        assert_eq!(nodes[0].children()[0].tag_name(), Some("i"));
        assert_eq!(strip_code(&nodes), "São Paulo and it");
    }

    #[test]
    fn test_comments_and_entities() {
        let nodes = parse("Design <!-- Strategy -->&amp; more&#33;");
        assert!(matches!(nodes[1], Node::Comment(_)));
        assert_eq!(strip_code(&nodes), "Design & more!");
    }

    #[test]
    fn test_unclosed_markup_is_text() {
        let nodes = parse("a [[b and {{c");
        assert_eq!(strip_code(&nodes), "a [[b and {{c");
    }
}
