//! ANSI-aware text wrapping
//!
//! Escape sequences take no columns, so widths are measured on the stripped
//! text. Lines that already fit are left byte for byte as they are.

use dialoguer::console;
use textwrap::{Options, WordSeparator};

/// Remove ANSI escape sequences
pub fn strip_ansi(text: &str) -> String {
    console::strip_ansi_codes(text).into_owned()
}

/// Display width in terminal columns, ignoring escape sequences
pub fn visible_width(text: &str) -> usize {
    console::measure_text_width(text)
}

/// Wrap every line of `text` at word boundaries so it fits in `width` columns.
///
/// Words wider than `width` are kept whole on their own line. Leading
/// indentation of each line is kept.
pub fn wrap_ansi(text: &str, width: usize) -> String {
    let options = Options::new(width.max(1))
        .break_words(false)
        .word_separator(WordSeparator::AsciiSpace);

    text.split('\n')
        .map(|line| {
            if visible_width(line) <= options.width {
                line.to_string()
            } else {
                textwrap::fill(line, &options)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
