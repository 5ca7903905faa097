//! Question extraction
//!
//! A quiz document is a run of items separated by thematic breaks. Each item
//! holds a heading (the question), an optional code sample, a list of choices
//! and a `<details>` block with the explanation:
//!
//! ````text
//! ---
//! ###### 1. What's the output?
//! ```javascript
//! ...
//! ```
//! - A: ...
//! - B: ...
//! <details><summary><b>Answer</b></summary>
//! #### Answer: B
//! ...
//! </details>
//! ---
//! ````
//!
//! Items that do not carry a heading and at least one choice are skipped.

use crate::models::QuestionRecord;
use crate::parser::Node;
use crate::render::RichTextRenderer;

const DETAILS_OPEN: &str = "<details";
const DETAILS_CLOSE: &str = "</details>";

/// Why a span produced no question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    Empty,
    MissingHeading,
    MissingChoices,
    UnclosedDetails,
}

/// Split top-level blocks into spans, one per thematic break.
///
/// Each span runs from just after a break up to the next break or the end of
/// the document. Content before the first break belongs to no span.
pub fn split_spans(children: &[Node]) -> Vec<&[Node]> {
    let markers: Vec<usize> = children
        .iter()
        .enumerate()
        .filter(|(_, node)| matches!(node, Node::ThematicBreak))
        .map(|(i, _)| i)
        .collect();

    markers
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = markers.get(i + 1).copied().unwrap_or(children.len());
            &children[start + 1..end]
        })
        .collect()
}

fn position_from(span: &[Node], from: usize, predicate: impl Fn(&Node) -> bool) -> Option<usize> {
    span.iter()
        .enumerate()
        .skip(from)
        .find(|(_, node)| predicate(node))
        .map(|(i, _)| i)
}

fn is_details_open(node: &Node) -> bool {
    node.html_value()
        .is_some_and(|value| value.starts_with(DETAILS_OPEN))
}

fn is_details_close(node: &Node) -> bool {
    node.html_value()
        .is_some_and(|value| value.ends_with(DETAILS_CLOSE))
}

/// Turns a parsed quiz document into question records
pub struct QuestionExtractor<'a> {
    renderer: &'a RichTextRenderer,
}

impl<'a> QuestionExtractor<'a> {
    pub fn new(renderer: &'a RichTextRenderer) -> Self {
        Self { renderer }
    }

    /// Extract every well-formed question, in document order
    pub fn extract(&self, document: &Node) -> Vec<QuestionRecord> {
        let spans = split_spans(document.children());
        let mut questions = Vec::with_capacity(spans.len());

        for (i, span) in spans.iter().enumerate() {
            match self.parse_span(span) {
                Ok(question) => questions.push(question),
                Err(reason) => tracing::debug!(span = i, ?reason, "skipping quiz span"),
            }
        }

        tracing::info!(
            spans = spans.len(),
            questions = questions.len(),
            "extracted questions"
        );
        questions
    }

    /// Parse one span into a question record
    pub fn parse_span(&self, span: &[Node]) -> Result<QuestionRecord, SkipReason> {
        if span.is_empty() {
            return Err(SkipReason::Empty);
        }

        let heading_pos = position_from(span, 0, |n| matches!(n, Node::Heading { .. }))
            .ok_or(SkipReason::MissingHeading)?;
        let question_text = self.renderer.render(&span[heading_pos]);
        if question_text.trim().is_empty() {
            return Err(SkipReason::MissingHeading);
        }

        let list_pos = position_from(span, heading_pos + 1, |n| matches!(n, Node::List { .. }))
            .ok_or(SkipReason::MissingChoices)?;
        let choices: Vec<String> = span[list_pos]
            .children()
            .iter()
            .map(|item| self.renderer.render(item))
            .collect();
        if choices.is_empty() {
            return Err(SkipReason::MissingChoices);
        }

        // The code sample sits between the question and its choices
        let code_example = span[heading_pos + 1..list_pos]
            .iter()
            .find(|n| matches!(n, Node::Code { .. }))
            .map(|code| self.renderer.render(code))
            .unwrap_or_default();

        let feedback = match position_from(span, list_pos + 1, is_details_open) {
            None => String::new(),
            Some(open_pos) => {
                let close_pos = position_from(span, open_pos, is_details_close)
                    .ok_or(SkipReason::UnclosedDetails)?;
                let body = span.get(open_pos + 1..close_pos).unwrap_or_default();
                self.renderer.render_blocks(body)
            }
        };

        Ok(QuestionRecord::new(
            question_text,
            code_example,
            choices,
            feedback,
        ))
    }
}

/// Extract every well-formed question of `document`
pub fn extract_questions(document: &Node, renderer: &RichTextRenderer) -> Vec<QuestionRecord> {
    QuestionExtractor::new(renderer).extract(document)
}
