//! Rich text rendering of markdown nodes for the terminal
//!
//! Every place that turns a document node into text goes through
//! [`RichTextRenderer::render`]: field extraction and prompt construction alike.
//! Node kinds without a dedicated rule are written back as markdown.

pub mod highlight;
pub mod wrap;

pub use highlight::JsHighlighter;
pub use wrap::{strip_ansi, visible_width, wrap_ansi};

use crate::parser::Node;
use colored::Colorize;
use regex::Regex;
use std::sync::OnceLock;

const ANSWER_MARKER: &str = "Answer:";
const CORRECT_ANSWER_MARKER: &str = "Correct answer:";

fn ordinal_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d+\.").expect("valid ordinal pattern"))
}

fn img_src_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"(?i)\ssrc\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s>]+))"#)
            .expect("valid src attribute pattern")
    })
}

/// Renders document nodes to styled terminal text
pub struct RichTextRenderer {
    highlight_languages: Vec<String>,
    highlighter: JsHighlighter,
}

impl Default for RichTextRenderer {
    fn default() -> Self {
        Self::new(vec!["javascript".to_string(), "js".to_string()])
    }
}

impl RichTextRenderer {
    /// Create a renderer highlighting fenced code tagged with one of `highlight_languages`
    pub fn new(highlight_languages: Vec<String>) -> Self {
        Self {
            highlight_languages,
            highlighter: JsHighlighter::new(),
        }
    }

    fn is_highlightable(&self, lang: Option<&str>) -> bool {
        lang.is_some_and(|lang| {
            self.highlight_languages
                .iter()
                .any(|candidate| candidate.eq_ignore_ascii_case(lang))
        })
    }

    /// Render a node and its subtree
    pub fn render(&self, node: &Node) -> String {
        match node {
            Node::Code { lang, value } => {
                let content = value.strip_suffix('\n').unwrap_or(value).replace('\t', "  ");
                if self.is_highlightable(lang.as_deref()) {
                    self.highlighter.highlight(&content)
                } else {
                    content
                }
            }
            Node::Emphasis(children) => self.render_all(children).italic().to_string(),
            Node::Strong(children) => self.render_all(children).bold().to_string(),
            Node::Heading { children, .. } => self.render_heading(&self.render_all(children)),
            Node::InlineCode(value) => value.yellow().to_string(),
            Node::Html(value) => render_html(value),
            Node::ListItem(children) => children
                .iter()
                .map(|child| self.render(child))
                .collect::<Vec<_>>()
                .join("\n"),
            _ => self.stringify(node),
        }
    }

    /// Concatenate the rendering of `nodes`
    pub fn render_all(&self, nodes: &[Node]) -> String {
        nodes.iter().map(|node| self.render(node)).collect()
    }

    /// Render a sequence of blocks separated by a blank line
    pub fn render_blocks(&self, nodes: &[Node]) -> String {
        nodes
            .iter()
            .map(|node| self.render(node))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn render_heading(&self, content: &str) -> String {
        if let Some(rest) = content.strip_prefix(ANSWER_MARKER) {
            return format!("{}{}", CORRECT_ANSWER_MARKER, rest)
                .bold()
                .green()
                .to_string();
        }
        if ordinal_pattern().is_match(content) {
            return content.underline().to_string();
        }
        content.to_string()
    }

    /// Markdown serialization for nodes without a styling rule
    fn stringify(&self, node: &Node) -> String {
        match node {
            Node::Root(children) | Node::Blockquote(children) | Node::Other(children)
                if children.is_empty() =>
            {
                String::new()
            }
            Node::Root(children) | Node::Other(children) => self.render_blocks(children),
            Node::Paragraph(children) | Node::TableCell(children) => self.render_all(children),
            Node::Text(text) => text.clone(),
            Node::ThematicBreak => "***".to_string(),
            Node::Break => "\n".to_string(),
            Node::Delete(children) => format!("~~{}~~", self.render_all(children)),
            Node::Link {
                url,
                title,
                children,
            } => {
                let text = self.render_all(children);
                if title.is_empty() {
                    format!("[{}]({})", text, url)
                } else {
                    format!("[{}]({} \"{}\")", text, url, title)
                }
            }
            Node::Image { url, title, alt } => {
                let alt = self.render_all(alt);
                if title.is_empty() {
                    format!("![{}]({})", alt, url)
                } else {
                    format!("![{}]({} \"{}\")", alt, url, title)
                }
            }
            Node::Blockquote(children) => self
                .render_blocks(children)
                .lines()
                .map(|line| {
                    if line.is_empty() {
                        ">".to_string()
                    } else {
                        format!("> {}", line)
                    }
                })
                .collect::<Vec<_>>()
                .join("\n"),
            Node::List {
                ordered,
                start,
                children,
            } => children
                .iter()
                .enumerate()
                .map(|(i, item)| {
                    let marker = if *ordered {
                        format!("{}. ", start.unwrap_or(1) + i as u64)
                    } else {
                        "- ".to_string()
                    };
                    indent_continuation(&marker, &self.render(item))
                })
                .collect::<Vec<_>>()
                .join("\n"),
            Node::Table(rows) => rows
                .iter()
                .map(|row| self.render(row))
                .collect::<Vec<_>>()
                .join("\n"),
            Node::TableRow(cells) => format!(
                "| {} |",
                cells
                    .iter()
                    .map(|cell| self.render(cell))
                    .collect::<Vec<_>>()
                    .join(" | ")
            ),
            // Nodes with a styling rule never reach here through `render`
            other => self.render(other),
        }
    }
}

/// Prefix the first line with `marker` and indent the rest to line up with it
fn indent_continuation(marker: &str, content: &str) -> String {
    let padding = " ".repeat(marker.len());
    content
        .lines()
        .enumerate()
        .map(|(i, line)| match (i, line.is_empty()) {
            (0, _) => format!("{}{}", marker, line),
            (_, true) => String::new(),
            _ => format!("{}{}", padding, line),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Images collapse to `<src>`; other markup passes through
fn render_html(value: &str) -> String {
    if !value.trim_start().starts_with("<img") {
        return value.to_string();
    }

    img_src_pattern()
        .captures(value)
        .and_then(|caps| caps.get(1).or_else(|| caps.get(2)).or_else(|| caps.get(3)))
        .map(|src| format!("<{}>", src.as_str()))
        .unwrap_or_else(|| value.to_string())
}
