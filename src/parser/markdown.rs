//! Markdown document tree
//!
//! Folds the flat pulldown-cmark event stream into an owned tree so that the
//! question extractor can look at top-level blocks by position, the way a
//! markdown AST exposes them.

use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag};

/// A node of the parsed markdown document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Root(Vec<Node>),
    Paragraph(Vec<Node>),
    Heading { depth: u8, children: Vec<Node> },
    ThematicBreak,
    Code { lang: Option<String>, value: String },
    List {
        ordered: bool,
        start: Option<u64>,
        children: Vec<Node>,
    },
    ListItem(Vec<Node>),
    Blockquote(Vec<Node>),
    /// Raw HTML, either a whole block or an inline tag
    Html(String),
    Text(String),
    Emphasis(Vec<Node>),
    Strong(Vec<Node>),
    Delete(Vec<Node>),
    InlineCode(String),
    Link {
        url: String,
        title: String,
        children: Vec<Node>,
    },
    Image {
        url: String,
        title: String,
        alt: Vec<Node>,
    },
    Break,
    Table(Vec<Node>),
    TableRow(Vec<Node>),
    TableCell(Vec<Node>),
    /// Containers without a dedicated variant (footnotes, definition lists, ...)
    Other(Vec<Node>),
}

impl Node {
    /// Child nodes, empty for leaves
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Root(c)
            | Node::Paragraph(c)
            | Node::ListItem(c)
            | Node::Blockquote(c)
            | Node::Emphasis(c)
            | Node::Strong(c)
            | Node::Delete(c)
            | Node::Table(c)
            | Node::TableRow(c)
            | Node::TableCell(c)
            | Node::Other(c) => c,
            Node::Heading { children, .. }
            | Node::List { children, .. }
            | Node::Link { children, .. } => children,
            Node::Image { alt, .. } => alt,
            Node::ThematicBreak
            | Node::Code { .. }
            | Node::Html(_)
            | Node::Text(_)
            | Node::InlineCode(_)
            | Node::Break => &[],
        }
    }

    /// Whether the node belongs inside a paragraph rather than at block level
    pub fn is_inline(&self) -> bool {
        matches!(
            self,
            Node::Text(_)
                | Node::Emphasis(_)
                | Node::Strong(_)
                | Node::Delete(_)
                | Node::InlineCode(_)
                | Node::Link { .. }
                | Node::Image { .. }
                | Node::Break
        )
    }

    /// Literal text of an HTML node
    pub fn html_value(&self) -> Option<&str> {
        match self {
            Node::Html(value) => Some(value),
            _ => None,
        }
    }
}

/// Container being filled while its events stream in
enum Frame {
    Root,
    Paragraph,
    Heading(u8),
    CodeBlock { lang: Option<String>, value: String },
    List { ordered: bool, start: Option<u64> },
    Item,
    Blockquote,
    HtmlBlock(String),
    Emphasis,
    Strong,
    Strikethrough,
    Link { url: String, title: String },
    Image { url: String, title: String },
    Table,
    TableRow,
    TableCell,
    Other,
}

impl Frame {
    fn from_tag(tag: Tag<'_>) -> Self {
        match tag {
            Tag::Paragraph => Frame::Paragraph,
            Tag::Heading { level, .. } => Frame::Heading(heading_depth(level)),
            Tag::CodeBlock(kind) => {
                let lang = match kind {
                    CodeBlockKind::Fenced(info) => info
                        .split_whitespace()
                        .next()
                        .map(|lang| lang.to_string()),
                    CodeBlockKind::Indented => None,
                };
                Frame::CodeBlock {
                    lang,
                    value: String::new(),
                }
            }
            Tag::List(start) => Frame::List {
                ordered: start.is_some(),
                start,
            },
            Tag::Item => Frame::Item,
            Tag::BlockQuote(_) => Frame::Blockquote,
            Tag::HtmlBlock => Frame::HtmlBlock(String::new()),
            Tag::Emphasis => Frame::Emphasis,
            Tag::Strong => Frame::Strong,
            Tag::Strikethrough => Frame::Strikethrough,
            Tag::Link {
                dest_url, title, ..
            } => Frame::Link {
                url: dest_url.to_string(),
                title: title.to_string(),
            },
            Tag::Image {
                dest_url, title, ..
            } => Frame::Image {
                url: dest_url.to_string(),
                title: title.to_string(),
            },
            Tag::Table(_) => Frame::Table,
            // The header row holds its cells directly
            Tag::TableHead | Tag::TableRow => Frame::TableRow,
            Tag::TableCell => Frame::TableCell,
            _ => Frame::Other,
        }
    }

    fn into_node(self, children: Vec<Node>) -> Node {
        match self {
            Frame::Root => Node::Root(children),
            Frame::Paragraph => Node::Paragraph(children),
            Frame::Heading(depth) => Node::Heading { depth, children },
            Frame::CodeBlock { lang, value } => Node::Code { lang, value },
            Frame::List { ordered, start } => Node::List {
                ordered,
                start,
                children,
            },
            Frame::Item => Node::ListItem(wrap_inline_runs(children)),
            Frame::Blockquote => Node::Blockquote(children),
            Frame::HtmlBlock(value) => Node::Html(value.trim_end_matches('\n').to_string()),
            Frame::Emphasis => Node::Emphasis(children),
            Frame::Strong => Node::Strong(children),
            Frame::Strikethrough => Node::Delete(children),
            Frame::Link { url, title } => Node::Link {
                url,
                title,
                children,
            },
            Frame::Image { url, title } => Node::Image {
                url,
                title,
                alt: children,
            },
            Frame::Table => Node::Table(children),
            Frame::TableRow => Node::TableRow(children),
            Frame::TableCell => Node::TableCell(children),
            Frame::Other => Node::Other(children),
        }
    }
}

fn heading_depth(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}

/// Tight list items carry bare inline content; give it a paragraph so each
/// block of the item is a single node.
fn wrap_inline_runs(children: Vec<Node>) -> Vec<Node> {
    let mut blocks = Vec::new();
    let mut run = Vec::new();

    for child in children {
        if child.is_inline() {
            run.push(child);
        } else {
            if !run.is_empty() {
                blocks.push(Node::Paragraph(std::mem::take(&mut run)));
            }
            blocks.push(child);
        }
    }
    if !run.is_empty() {
        blocks.push(Node::Paragraph(run));
    }

    blocks
}

fn push_text(children: &mut Vec<Node>, text: &str) {
    if let Some(Node::Text(last)) = children.last_mut() {
        last.push_str(text);
    } else {
        children.push(Node::Text(text.to_string()));
    }
}

/// Markdown parser producing a [`Node::Root`] tree
pub struct MarkdownParser {
    options: Options,
}

impl Default for MarkdownParser {
    fn default() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_TASKLISTS);
        Self { options }
    }
}

impl MarkdownParser {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    /// Parse markdown into a document tree whose root children are blocks
    pub fn parse(&self, content: &str) -> Node {
        let mut stack: Vec<(Frame, Vec<Node>)> = vec![(Frame::Root, Vec::new())];

        for event in Parser::new_ext(content, self.options) {
            match event {
                Event::Start(tag) => stack.push((Frame::from_tag(tag), Vec::new())),
                Event::End(_) => {
                    // pulldown-cmark guarantees balanced events; the root is never popped
                    if stack.len() > 1 {
                        if let Some((frame, children)) = stack.pop() {
                            let node = frame.into_node(children);
                            if let Some((_, parent)) = stack.last_mut() {
                                parent.push(node);
                            }
                        }
                    }
                }
                Event::Text(text) => match stack.last_mut() {
                    Some((Frame::CodeBlock { value, .. }, _)) => value.push_str(&text),
                    Some((Frame::HtmlBlock(value), _)) => value.push_str(&text),
                    Some((_, children)) => push_text(children, &text),
                    None => {}
                },
                Event::Html(html) => match stack.last_mut() {
                    Some((Frame::HtmlBlock(value), _)) => value.push_str(&html),
                    Some((_, children)) => children.push(Node::Html(html.to_string())),
                    None => {}
                },
                Event::InlineHtml(html) => {
                    if let Some((_, children)) = stack.last_mut() {
                        children.push(Node::Html(html.to_string()));
                    }
                }
                Event::Code(code) => {
                    if let Some((_, children)) = stack.last_mut() {
                        children.push(Node::InlineCode(code.to_string()));
                    }
                }
                Event::SoftBreak => {
                    if let Some((_, children)) = stack.last_mut() {
                        push_text(children, "\n");
                    }
                }
                Event::HardBreak => {
                    if let Some((_, children)) = stack.last_mut() {
                        children.push(Node::Break);
                    }
                }
                Event::Rule => {
                    if let Some((_, children)) = stack.last_mut() {
                        children.push(Node::ThematicBreak);
                    }
                }
                Event::TaskListMarker(checked) => {
                    if let Some((_, children)) = stack.last_mut() {
                        push_text(children, if checked { "[x] " } else { "[ ] " });
                    }
                }
                Event::FootnoteReference(label) => {
                    if let Some((_, children)) = stack.last_mut() {
                        push_text(children, &format!("[^{}]", label));
                    }
                }
                _ => {}
            }
        }

        // Only the root frame is left on well-formed input
        let mut root = Vec::new();
        while let Some((frame, children)) = stack.pop() {
            let node = frame.into_node(children);
            match stack.last_mut() {
                Some((_, parent)) => parent.push(node),
                None => root.push(node),
            }
        }

        root.pop().unwrap_or(Node::Root(Vec::new()))
    }
}

/// Parse markdown with the default options
pub fn parse_document(content: &str) -> Node {
    MarkdownParser::default().parse(content)
}
