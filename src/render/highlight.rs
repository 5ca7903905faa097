//! JavaScript syntax highlighting
//!
//! Parses code samples with tree-sitter and paints leaf tokens by kind.
//! Text between tokens (whitespace, anything the grammar skipped) is copied
//! through untouched, so stripping the colour codes gives back the input.

use colored::Colorize;
use tree_sitter::{Language, Node as SyntaxNode, Parser};

/// Token classes that receive a colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenClass {
    Keyword,
    Literal,
    Number,
    Constant,
    Comment,
}

impl TokenClass {
    fn of(node: &SyntaxNode) -> Option<Self> {
        let kind = node.kind();
        match kind {
            "comment" | "html_comment" => Some(Self::Comment),
            "string" | "template_string" | "regex" => Some(Self::Literal),
            "number" => Some(Self::Number),
            "true" | "false" | "null" | "undefined" | "this" | "super" if node.is_named() => {
                Some(Self::Constant)
            }
            _ if !node.is_named() && !kind.is_empty() && kind.chars().all(|c| c.is_ascii_alphabetic()) => {
                Some(Self::Keyword)
            }
            _ => None,
        }
    }

    fn paint(self, text: &str) -> String {
        match self {
            Self::Keyword => text.blue().to_string(),
            Self::Literal => text.green().to_string(),
            Self::Number => text.cyan().to_string(),
            Self::Constant => text.magenta().to_string(),
            Self::Comment => text.bright_black().to_string(),
        }
    }
}

/// Highlighter for JavaScript code samples
pub struct JsHighlighter {
    language: Language,
}

impl Default for JsHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsHighlighter {
    pub fn new() -> Self {
        Self {
            language: tree_sitter_javascript::LANGUAGE.into(),
        }
    }

    /// Highlight `source`; returns it unchanged if the grammar cannot be loaded
    pub fn highlight(&self, source: &str) -> String {
        let mut parser = Parser::new();
        if parser.set_language(&self.language).is_err() {
            return source.to_string();
        }
        let Some(tree) = parser.parse(source, None) else {
            return source.to_string();
        };

        let mut output = String::with_capacity(source.len() * 2);
        let mut offset = 0;
        paint_node(tree.root_node(), source, &mut offset, &mut output);
        output.push_str(source.get(offset..).unwrap_or_default());
        output
    }
}

fn paint_node(node: SyntaxNode, source: &str, offset: &mut usize, output: &mut String) {
    let class = TokenClass::of(&node);

    if class.is_none() && node.child_count() > 0 {
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            paint_node(child, source, offset, output);
        }
        return;
    }

    let (start, end) = (node.start_byte(), node.end_byte());
    if start < *offset || start == end {
        return;
    }
    let (Some(gap), Some(text)) = (source.get(*offset..start), source.get(start..end)) else {
        return;
    };

    output.push_str(gap);
    match class {
        Some(class) => output.push_str(&class.paint(text)),
        None => output.push_str(text),
    }
    *offset = end;
}
