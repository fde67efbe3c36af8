//! Word Scramble - CLI
//!
//! Word derivation game with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;
use word_scramble::{
    commands::{check_word, print_survey_statistics, reveal_words, run_simple, run_survey},
    dictionary::WordSet,
    game::{Game, Policy},
    output::{print_check_result, print_reveal_result},
    wordlists::{
        DICTIONARY, START_WORDS,
        loader::{load_from_file, words_from_slice},
    },
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Spell as many words as you can from the letters of a random root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root word candidates: 'all' (default, embedded list) or path to file
    #[arg(short = 's', long, global = true, default_value = "all")]
    start_words: String,

    /// Dictionary: 'all' (default, embedded list) or path to file
    #[arg(short = 'd', long, global = true, default_value = "all")]
    dictionary: String,

    /// Reject guesses shorter than this many letters
    #[arg(short = 'm', long, global = true, default_value_t = 1)]
    min_length: usize,

    /// Reject the root word itself as a guess
    #[arg(long, global = true)]
    no_root: bool,

    /// Seed for root word selection (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log file used in TUI mode
    #[arg(long, global = true, default_value = "word_scramble.log")]
    log_file: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-by-line, no TUI)
    Simple,

    /// Check a single word against a root word
    Check {
        /// The root word
        root: String,

        /// The word to check
        word: String,
    },

    /// List every word that can be made from a root word
    Reveal {
        /// The root word
        root: String,
    },

    /// Count the answers for every root word candidate
    Survey {
        /// Limit number of roots to survey
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Load a word list based on a flag value
///
/// "all" selects the embedded list, anything else is read from disk.
fn load_words(mode: &str, embedded: &[&str]) -> Result<Vec<String>> {
    match mode {
        "all" => Ok(words_from_slice(embedded)),
        path => load_from_file(path).with_context(|| format!("Couldn't load word list {path}")),
    }
}

fn init_logging(command: &Commands, log_file: &Path) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    if matches!(command, Commands::Play) {
        // Setup logging to file to avoid interfering with TUI
        let file = std::fs::File::create(log_file)
            .with_context(|| format!("Couldn't create log file {}", log_file.display()))?;
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::sync::Arc::new(file))
            .with_ansi(false)
            .try_init();
    } else {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }

    Ok(())
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(&command, &cli.log_file)?;

    // The game cannot run without its word lists
    let roots = load_words(&cli.start_words, START_WORDS)?;
    let dictionary = WordSet::new(load_words(&cli.dictionary, DICTIONARY)?);
    info!(
        roots = roots.len(),
        dictionary = dictionary.len(),
        "Word lists ready"
    );

    let policy = Policy::default()
        .with_min_length(cli.min_length)
        .with_allow_root(!cli.no_root);
    info!(
        min_length = policy.min_length,
        allow_root = policy.allow_root,
        permissive = policy.is_permissive(),
        "Game policy"
    );
    let game = Game::new(&dictionary, &roots).with_policy(policy);

    let rng = cli
        .seed
        .map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);

    match command {
        Commands::Play => run_play_command(game, rng),
        Commands::Simple => run_simple_command(&game, rng),
        Commands::Check { root, word } => run_check_command(&game, &root, &word),
        Commands::Reveal { root } => run_reveal_command(&game, &dictionary, &root),
        Commands::Survey { limit } => {
            let stats = run_survey(&game, &dictionary, limit);
            print_survey_statistics(&stats);
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_play_command(game: Game<'_, &WordSet>, rng: StdRng) -> Result<ExitCode> {
    use word_scramble::interactive::{App, run_tui};

    let app = App::new(game, rng);
    run_tui(app)?;
    Ok(ExitCode::SUCCESS)
}

fn run_simple_command(game: &Game<'_, &WordSet>, mut rng: StdRng) -> Result<ExitCode> {
    run_simple(game, &mut rng)?;
    Ok(ExitCode::SUCCESS)
}

fn run_check_command(game: &Game<'_, &WordSet>, root: &str, word: &str) -> Result<ExitCode> {
    let result = check_word(game, root, word).map_err(|e| anyhow::anyhow!(e))?;
    print_check_result(&result);

    Ok(if result.is_accepted() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn run_reveal_command(
    game: &Game<'_, &WordSet>,
    dictionary: &WordSet,
    root: &str,
) -> Result<ExitCode> {
    let result = reveal_words(game, dictionary, root).map_err(|e| anyhow::anyhow!(e))?;
    print_reveal_result(&result);
    Ok(ExitCode::SUCCESS)
}
