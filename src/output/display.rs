//! Display functions for command results

use super::formatters::{create_progress_bar, length_badge};
use crate::commands::{CheckResult, RevealResult};
use crate::game::Submission;
use colored::Colorize;

/// Print every answer a root allows, grouped by length
pub fn print_reveal_result(result: &RevealResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ANSWERS FOR:".bright_cyan().bold(),
        result.root.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    if result.words.is_empty() {
        println!("\n{}", "No words can be made from this root.".red());
        return;
    }

    let longest = result.longest();
    for len in (1..=longest).rev() {
        let group: Vec<&str> = result
            .words
            .iter()
            .filter(|w| w.chars().count() == len)
            .map(String::as_str)
            .collect();
        if group.is_empty() {
            continue;
        }

        println!(
            "\n{} {}",
            length_badge(len).bright_cyan(),
            format!("{} words", group.len()).bright_black()
        );
        println!("  {}", group.join(" "));
    }

    let bar = create_progress_bar(
        result.words.len() as f64,
        result.dictionary_size as f64,
        30,
    );
    println!(
        "\n📊 {} answers out of {} dictionary words [{}]",
        result.words.len().to_string().bright_yellow().bold(),
        result.dictionary_size,
        bar.green()
    );
}

/// Print the outcome of checking one word
pub fn print_check_result(result: &CheckResult) {
    match &result.outcome {
        Ok(Submission::Accepted(word)) => println!(
            "{} {} can be made from {}",
            "✅".green(),
            word.to_uppercase().bright_green().bold(),
            result.root.to_uppercase().bright_yellow()
        ),
        Ok(Submission::Ignored) => println!("{}", "Nothing to check.".bright_black()),
        Err(rejection) => {
            println!("{} {}", "❌".red(), rejection.title().red().bold());
            println!("   {}", rejection.message());
        }
    }
}
