//! Markup tree produced by the wikitext parser

/// Tags whose contents never show up in plain text
const INVISIBLE_TAGS: &[&str] = &[
    "categorytree",
    "gallery",
    "graph",
    "imagemap",
    "inputbox",
    "math",
    "score",
    "section",
    "templatedata",
    "timeline",
];

/// Link namespaces that render as media or metadata rather than text
const MEDIA_NAMESPACES: &[&str] = &["file", "image", "category"];

/// A parsed markup element
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Opaque text run
    Text(String),
    /// `<!-- ... -->`
    Comment(String),
    /// HTML-style tag, bold/italic run or table structure element
    Tag(Tag),
    /// `{{name|...}}` invocation
    Template(Template),
    /// `[[target|text]]`
    Link(Link),
}

impl Node {
    /// Convenience constructor for text runs
    pub fn text(s: impl Into<String>) -> Self {
        Node::Text(s.into())
    }

    /// Tag name, if this node is a tag
    pub fn tag_name(&self) -> Option<&str> {
        match self {
            Node::Tag(tag) => Some(&tag.name),
            _ => None,
        }
    }

    /// Whether this node is a tag with the given name
    pub fn is_tag(&self, name: &str) -> bool {
        self.tag_name() == Some(name)
    }

    /// Borrow the tag, if this node is one
    pub fn as_tag(&self) -> Option<&Tag> {
        match self {
            Node::Tag(tag) => Some(tag),
            _ => None,
        }
    }

    /// Attributes declared on this node (only tags carry any)
    pub fn attrs(&self) -> &[Attribute] {
        match self {
            Node::Tag(tag) => &tag.attrs,
            _ => &[],
        }
    }

    /// Child nodes (only tags carry any)
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Tag(tag) => &tag.children,
            _ => &[],
        }
    }

    /// Plain text of this node with all markup removed
    pub fn strip_code(&self) -> String {
        let mut out = String::new();
        self.strip_into(&mut out);
        out
    }

    fn strip_into(&self, out: &mut String) {
        match self {
            Node::Text(text) => out.push_str(text),
            Node::Comment(_) | Node::Template(_) => {}
            Node::Link(link) => out.push_str(&link.display_text()),
            Node::Tag(tag) => {
                if tag.is_visible() {
                    for child in &tag.children {
                        child.strip_into(out);
                    }
                }
            }
        }
    }
}

/// Plain text of a node sequence with all markup removed
pub fn strip_code(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        node.strip_into(&mut out);
    }
    out
}

/// Tags with any of the given names that are direct children of `nodes`
pub fn filter_tags<'a>(nodes: &'a [Node], names: &[&str]) -> Vec<&'a Node> {
    nodes
        .iter()
        .filter(|n| n.tag_name().is_some_and(|name| names.contains(&name)))
        .collect()
}

/// Tags with any of the given names anywhere below `nodes`, in document order
pub fn filter_tags_recursive<'a>(nodes: &'a [Node], names: &[&str]) -> Vec<&'a Node> {
    let mut found = Vec::new();
    collect_tags(nodes, names, &mut found);
    found
}

fn collect_tags<'a>(nodes: &'a [Node], names: &[&str], found: &mut Vec<&'a Node>) {
    for node in nodes {
        if let Node::Tag(tag) = node {
            if names.contains(&tag.name.as_str()) {
                found.push(node);
            }
            collect_tags(&tag.children, names, found);
        }
    }
}

/// A tag element with attributes and children
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    /// Lowercase tag name (`td`, `small`, `b`, ...)
    pub name: String,
    /// Attributes in declaration order
    pub attrs: Vec<Attribute>,
    /// Child nodes; empty for void and self-closing tags
    pub children: Vec<Node>,
}

impl Tag {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attrs(mut self, attrs: Vec<Attribute>) -> Self {
        self.attrs = attrs;
        self
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// Look up an attribute value by name
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    fn is_visible(&self) -> bool {
        !INVISIBLE_TAGS.contains(&self.name.as_str())
    }
}

impl From<Tag> for Node {
    fn from(tag: Tag) -> Self {
        Node::Tag(tag)
    }
}

/// A single `name="value"` attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A template invocation
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    /// Template name, trimmed
    pub name: String,
    /// Parameters in source order
    pub params: Vec<Param>,
}

impl Template {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
        }
    }

    pub fn with_param(mut self, param: Param) -> Self {
        self.params.push(param);
        self
    }

    /// Compare names the way wikis resolve them: first letter case-insensitive,
    /// underscores equal to spaces
    pub fn is_named(&self, name: &str) -> bool {
        let normalize = |s: &str| -> String {
            let s = s.trim().replace('_', " ");
            let mut chars = s.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        };
        normalize(&self.name) == normalize(name)
    }
}

impl From<Template> for Node {
    fn from(template: Template) -> Self {
        Node::Template(template)
    }
}

/// A template parameter, positional or `key=value`
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    /// Key for named parameters, `None` for positional ones
    pub name: Option<String>,
    pub value: Vec<Node>,
}

impl Param {
    pub fn positional(value: impl Into<String>) -> Self {
        Self {
            name: None,
            value: vec![Node::text(value)],
        }
    }

    pub fn named(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: vec![Node::text(value)],
        }
    }

    /// Parameter value as trimmed plain text
    pub fn text(&self) -> String {
        strip_code(&self.value).trim().to_string()
    }
}

/// An internal wiki link
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    /// Target page title
    pub title: String,
    /// Optional display text
    pub text: Option<Vec<Node>>,
}

impl Link {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(vec![Node::text(text)]);
        self
    }

    /// Display text if present, else the target title
    pub fn display_text(&self) -> String {
        match &self.text {
            Some(text) => strip_code(text),
            None => self.title.clone(),
        }
    }

    /// Whether the link points into the file, image or category namespace
    pub fn is_media(&self) -> bool {
        self.title.split_once(':').is_some_and(|(namespace, _)| {
            MEDIA_NAMESPACES.contains(&namespace.trim().to_ascii_lowercase().as_str())
        })
    }
}

impl From<Link> for Node {
    fn from(link: Link) -> Self {
        Node::Link(link)
    }
}
