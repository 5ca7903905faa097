//! Integration tests for question extraction
//!
//! Runs whole quiz documents through the markdown parser, the extractor and
//! the rich text renderer.

use mdquiz::parser::{split_spans, QuestionExtractor};
use mdquiz::render::strip_ansi;
use mdquiz::{extract_questions, parse_document, Node, RichTextRenderer};

const TWO_QUESTIONS: &str = r#"# JavaScript Questions

Answers are in the collapsed sections below each question.

---

# 1. What's the output?

```javascript
function sayHi() {
	console.log(name);
	var name = 'Lydia';
}

sayHi();
```

- A: `Lydia` and `undefined`
- B: `undefined`
- C: `ReferenceError`

<details><summary><b>Answer</b></summary>
<p>

#### Answer: B

Within the function, we first declare the `name` variable with the `var` keyword.

</p>
</details>

---

# 2. What's the output?

```javascript
for (var i = 0; i < 3; i++) {
  setTimeout(() => console.log(i), 1);
}
```

- A: `0 1 2`
- B: `3 3 3`
- C: `3 3 3` and `0 1 2`

<details><summary><b>Answer</b></summary>
<p>

#### Answer: C

Because of the event queue in JavaScript, the callback runs after the loop.

<img src="https://i.imgur.com/loop.png" width="300">

</p>
</details>
"#;

fn extract(content: &str) -> Vec<mdquiz::QuestionRecord> {
    let renderer = RichTextRenderer::default();
    extract_questions(&parse_document(content), &renderer)
}

// =========================================================================
// Full document scenarios
// =========================================================================

#[test]
fn test_two_spans_yield_two_records() {
    let questions = extract(TWO_QUESTIONS);
    assert_eq!(questions.len(), 2);

    for question in &questions {
        assert_eq!(question.choices.len(), 3);
        assert!(
            strip_ansi(&question.feedback).starts_with("Correct answer:"),
            "feedback was {:?}",
            question.feedback
        );
        assert_eq!(question.index, None);
    }
}

#[test]
fn test_fields_rendered_in_document_order() {
    let questions = extract(TWO_QUESTIONS);

    assert_eq!(strip_ansi(&questions[0].question_text), "1. What's the output?");
    assert_eq!(strip_ansi(&questions[1].question_text), "2. What's the output?");

    let choices: Vec<String> = questions[0].choices.iter().map(|c| strip_ansi(c)).collect();
    assert_eq!(
        choices,
        vec!["A: Lydia and undefined", "B: undefined", "C: ReferenceError"]
    );
}

#[test]
fn test_code_example_tabs_normalized() {
    let questions = extract(TWO_QUESTIONS);
    assert_eq!(
        strip_ansi(&questions[0].code_example),
        "function sayHi() {\n  console.log(name);\n  var name = 'Lydia';\n}\n\nsayHi();"
    );
}

#[test]
fn test_feedback_joins_blocks_and_renders_images() {
    let questions = extract(TWO_QUESTIONS);
    let feedback = strip_ansi(&questions[1].feedback);

    assert_eq!(
        feedback,
        "Correct answer: C\n\n\
         Because of the event queue in JavaScript, the callback runs after the loop.\n\n\
         <https://i.imgur.com/loop.png>"
    );
}

#[test]
fn test_preamble_is_not_a_question() {
    let questions = extract(TWO_QUESTIONS);
    assert!(questions
        .iter()
        .all(|q| !strip_ansi(&q.question_text).contains("JavaScript Questions")));
}

// =========================================================================
// Skip policy
// =========================================================================

#[test]
fn test_span_with_empty_list_dropped() {
    let heading = |text: &str| Node::Heading {
        depth: 1,
        children: vec![Node::Text(text.to_string())],
    };
    let list = |items: &[&str]| Node::List {
        ordered: false,
        start: None,
        children: items
            .iter()
            .map(|item| Node::ListItem(vec![Node::Paragraph(vec![Node::Text(item.to_string())])]))
            .collect(),
    };

    let document = Node::Root(vec![
        Node::ThematicBreak,
        heading("1. Kept"),
        list(&["A", "B"]),
        Node::ThematicBreak,
        heading("2. Dropped"),
        list(&[]),
        Node::ThematicBreak,
        heading("3. Kept"),
        list(&["C"]),
    ]);

    let renderer = RichTextRenderer::default();
    let questions = QuestionExtractor::new(&renderer).extract(&document);
    let texts: Vec<String> = questions.iter().map(|q| strip_ansi(&q.question_text)).collect();
    assert_eq!(texts, vec!["1. Kept", "3. Kept"]);
}

#[test]
fn test_records_never_exceed_spans() {
    let content = "---\n\n# 1. Fine\n\n- A\n\n---\n\nno heading\n\n- B\n\n---\n\n---\n\n# 4. No choices\n\n---\n\n# 5. Fine\n\n- C\n";
    let document = parse_document(content);
    let spans = split_spans(document.children());
    let questions = extract(content);

    assert_eq!(spans.len(), 5);
    assert_eq!(questions.len(), 2);
    assert!(questions.len() <= spans.len());
}

#[test]
fn test_unclosed_details_drops_only_that_span() {
    let content = "---\n\n# 1. Broken\n\n- A\n\n<details><summary>Answer</summary>\n\nnever closed\n\n---\n\n# 2. Fine\n\n- B\n";
    let questions = extract(content);
    assert_eq!(questions.len(), 1);
    assert_eq!(strip_ansi(&questions[0].question_text), "2. Fine");
}

#[test]
fn test_custom_highlight_languages() {
    let content = "---\n\n# Q\n\n```ts\nlet a: number = 1;\n```\n\n- A\n";
    let renderer = RichTextRenderer::new(vec!["python".to_string()]);
    let questions = extract_questions(&parse_document(content), &renderer);
    // Not highlightable: raw content comes back untouched
    assert_eq!(questions[0].code_example, "let a: number = 1;");
}
