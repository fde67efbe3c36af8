//! Survey all root candidates
//!
//! Counts how many answers each root word allows and summarizes the spread.

use crate::dictionary::{Dictionary, WordSet};
use crate::game::Game;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// Answer count for a single root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootCount {
    pub root: String,
    pub answers: usize,
}

/// Statistics across surveyed roots
#[derive(Debug)]
pub struct SurveyStatistics {
    pub total_roots: usize,
    pub total_answers: usize,
    pub average_answers: f64,
    pub max_answers: usize,
    pub min_answers: usize,
    /// Most answers first
    pub richest: Vec<RootCount>,
    /// Fewest answers first
    pub poorest: Vec<RootCount>,
    pub total_time: Duration,
}

/// Count answers for every root (or the first `limit` roots)
///
/// # Panics
///
/// Panics if the progress bar template is malformed.
pub fn run_survey<D: Dictionary + Sync>(
    game: &Game<D>,
    candidates: &WordSet,
    limit: Option<usize>,
) -> SurveyStatistics {
    let roots: Vec<&String> = game
        .roots()
        .iter()
        .take(limit.unwrap_or(game.roots().len()))
        .collect();
    let pool: Vec<&str> = candidates.iter().collect();

    println!("🔎 Surveying {} root words...", roots.len());

    let pb = ProgressBar::new(roots.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let mut counts: Vec<RootCount> = roots
        .par_iter()
        .map(|&root| {
            let answers = pool
                .iter()
                .filter(|&&word| game.is_answer(root, word))
                .count();
            pb.inc(1);
            RootCount {
                root: root.clone(),
                answers,
            }
        })
        .collect();

    pb.finish_with_message("Complete!");

    summarize(&mut counts, start.elapsed())
}

fn summarize(counts: &mut [RootCount], total_time: Duration) -> SurveyStatistics {
    counts.sort_by(|a, b| b.answers.cmp(&a.answers).then_with(|| a.root.cmp(&b.root)));

    let total_roots = counts.len();
    let total_answers: usize = counts.iter().map(|c| c.answers).sum();
    let average_answers = if total_roots > 0 {
        total_answers as f64 / total_roots as f64
    } else {
        0.0
    };

    let richest: Vec<RootCount> = counts.iter().take(5).cloned().collect();
    let poorest: Vec<RootCount> = counts.iter().rev().take(5).cloned().collect();

    SurveyStatistics {
        total_roots,
        total_answers,
        average_answers,
        max_answers: counts.first().map_or(0, |c| c.answers),
        min_answers: counts.last().map_or(0, |c| c.answers),
        richest,
        poorest,
        total_time,
    }
}

/// Print survey statistics
pub fn print_survey_statistics(stats: &SurveyStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Survey Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overview".bright_cyan().bold());
    println!("  Roots surveyed:      {}", stats.total_roots);
    println!("  Total answers:       {}", stats.total_answers);
    println!(
        "  Average per root:    {}",
        format!("{:.1}", stats.average_answers)
            .bright_yellow()
            .bold()
    );
    println!("  Most answers:        {}", stats.max_answers.to_string().green());
    println!("  Fewest answers:      {}", stats.min_answers.to_string().red());
    println!(
        "  Total time:          {:.2}s",
        stats.total_time.as_secs_f64()
    );

    if !stats.richest.is_empty() {
        println!("\n✨ {}", "Richest Roots".green().bold());
        for entry in &stats.richest {
            println!(
                "  {} ({} answers)",
                entry.root.to_uppercase().bright_green(),
                entry.answers
            );
        }
    }

    if !stats.poorest.is_empty() {
        println!("\n😰 {}", "Poorest Roots".yellow().bold());
        for entry in &stats.poorest {
            println!(
                "  {} ({} answers)",
                entry.root.to_uppercase().yellow(),
                entry.answers
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> WordSet {
        WordSet::new(["silkworm", "silk", "worm", "milk", "absolute", "lute", "salt"])
    }

    #[test]
    fn survey_counts_answers_per_root() {
        let dict = dictionary();
        let roots = vec!["silkworm".to_string(), "absolute".to_string()];
        let game = Game::new(&dict, &roots);

        let stats = run_survey(&game, &dict, None);
        assert_eq!(stats.total_roots, 2);
        assert_eq!(stats.total_answers, 7);
        assert_eq!(stats.max_answers, 4);
        assert_eq!(stats.min_answers, 3);
        assert_eq!(stats.richest[0].root, "silkworm");
        assert_eq!(stats.poorest[0].root, "absolute");
        assert!((stats.average_answers - 3.5).abs() < f64::EPSILON);
    }

    #[test]
    fn survey_respects_limit() {
        let dict = dictionary();
        let roots = vec!["silkworm".to_string(), "absolute".to_string()];
        let game = Game::new(&dict, &roots);

        let stats = run_survey(&game, &dict, Some(1));
        assert_eq!(stats.total_roots, 1);
        assert_eq!(stats.richest[0].root, "silkworm");
    }

    #[test]
    fn summarize_empty() {
        let stats = summarize(&mut [], Duration::ZERO);
        assert_eq!(stats.total_roots, 0);
        assert_eq!(stats.max_answers, 0);
        assert!(stats.average_answers.abs() < f64::EPSILON);
        assert!(stats.richest.is_empty());
    }
}
