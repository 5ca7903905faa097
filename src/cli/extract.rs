//! Non-interactive extraction command

use super::{load_questions, SourceArgs};
use crate::render::strip_ansi;
use crate::Result;
use colored::Colorize;

/// Extract the questions and print a listing, or the records as JSON
pub async fn run(args: &SourceArgs, json: bool) -> Result<()> {
    if json {
        // Machine-readable output carries no escape codes
        colored::control::set_override(false);
    }

    let (_, questions) = load_questions(args).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&questions)?);
        return Ok(());
    }

    println!(
        "{}",
        format!("📋 Found {} questions", questions.len()).cyan()
    );
    println!();

    for question in &questions {
        let heading = strip_ansi(&question.question_text);
        let code = if question.has_code() {
            " [code]".dimmed().to_string()
        } else {
            String::new()
        };
        println!(
            "   {} {}{}",
            heading.lines().next().unwrap_or_default(),
            format!("({} choices)", question.choices.len()).bright_black(),
            code
        );
    }

    Ok(())
}
