//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::dictionary::Dictionary;
use crate::game::{Game, Session, Submission};
use crate::output::formatters::length_badge;
use colored::Colorize;
use rand::Rng;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input or writing
/// output.
pub fn run_simple<D: Dictionary, R: Rng + ?Sized>(game: &Game<D>, rng: &mut R) -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(game, rng, stdin.lock(), stdout.lock())
}

/// Run the game loop over arbitrary input and output
///
/// Each input line is one submission. Lines starting with `:` are commands:
/// `:new`/`:restart`, `:words`, `:quit`. The loop ends on `:quit` or end of
/// input.
///
/// # Errors
///
/// Returns an error if reading or writing fails.
pub fn run_simple_with<D, R, I, O>(
    game: &Game<D>,
    rng: &mut R,
    mut input: I,
    mut output: O,
) -> io::Result<()>
where
    D: Dictionary,
    R: Rng + ?Sized,
    I: BufRead,
    O: Write,
{
    writeln!(output, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(output, "║                  Word Scramble - Simple Mode                 ║")?;
    writeln!(output, "╚══════════════════════════════════════════════════════════════╝\n")?;
    writeln!(output, "Make as many words as you can from the letters of the root word.")?;
    writeln!(output, "Commands: ':new' to restart, ':words' to list your words, ':quit' to exit\n")?;

    let mut session = game.start(rng);
    print_root(&mut output, &session)?;

    let mut line = String::new();
    loop {
        write!(output, "Word: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            break;
        }

        match line.trim() {
            ":quit" | ":q" | ":exit" => {
                writeln!(output, "\n👋 Thanks for playing!\n")?;
                break;
            }
            ":new" | ":restart" | ":n" => {
                game.restart(&mut session, rng);
                writeln!(output, "\n🔄 New game started!")?;
                print_root(&mut output, &session)?;
            }
            ":words" | ":w" => print_words(&mut output, &session)?,
            _ => match game.submit(&mut session, &line) {
                Ok(Submission::Accepted(word)) => {
                    writeln!(
                        output,
                        "  {} {} ({} letters, {} found)",
                        "✓".green().bold(),
                        word.bright_white().bold(),
                        word.chars().count(),
                        session.accepted().len()
                    )?;
                }
                Ok(Submission::Ignored) => {}
                Err(rejection) => {
                    writeln!(
                        output,
                        "  {} {}",
                        "✗".red().bold(),
                        rejection.title().red().bold()
                    )?;
                    writeln!(output, "    {}", rejection.message())?;
                    session.take_rejection();
                }
            },
        }
    }

    Ok(())
}

fn print_root<O: Write>(output: &mut O, session: &Session) -> io::Result<()> {
    writeln!(output, "────────────────────────────────────────────────────────────")?;
    writeln!(
        output,
        "Root word: {}",
        session.root().to_uppercase().bright_yellow().bold()
    )?;
    writeln!(output, "────────────────────────────────────────────────────────────")
}

fn print_words<O: Write>(output: &mut O, session: &Session) -> io::Result<()> {
    if session.accepted().is_empty() {
        return writeln!(output, "  No words yet.");
    }

    for word in session.accepted() {
        writeln!(output, "  {} {word}", length_badge(word.chars().count()))?;
    }
    Ok(())
}
