//! vocab-play - Play the Vocabox word games in a terminal

mod focus;
mod hangman;
mod memo;
mod prompt;
mod quiz;

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use libvocabox::focus::FocusOrder;
use libvocabox::games::hangman::Difficulty;
use libvocabox::{game_rng, Config, VocaboxError, WordPool};

#[derive(Parser, Debug)]
#[command(name = "vocab-play")]
#[command(version, about = "Vocabulary games in your terminal")]
#[command(long_about = r#"Vocabulary games in your terminal.

EXAMPLES:
    # List the available categories
    vocab-play categories

    # Five quiz questions about technology
    vocab-play quiz --categories technology --count 5

    # Today's hangman word, easy mode
    vocab-play hangman --difficulty easy --daily

    # Match eight words with their meanings
    vocab-play memo --categories food,travel --count 8

    # Slideshow of science words, 3 seconds each
    vocab-play focus --categories science --seconds 3

    # Reproducible games
    vocab-play --seed 42 quiz

EXIT CODES:
    0 - Success
    1 - Error (config or word data could not be loaded)
    3 - Invalid input (unknown category, nothing to play)
"#)]
struct Cli {
    /// Path to the configuration file
    #[arg(long, env = "VOCABOX_CONFIG", value_name = "PATH", global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Seed for reproducible games
    #[arg(long, value_name = "N", global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List word categories
    Categories {
        /// Output format
        #[arg(short, long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// Pick the right meaning for each word
    Quiz {
        /// Categories to draw words from (comma-separated, default: all)
        #[arg(short, long, value_delimiter = ',')]
        categories: Vec<String>,

        /// Number of questions
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Seconds per question
        #[arg(short, long)]
        seconds: Option<u32>,
    },

    /// Guess the word letter by letter
    Hangman {
        /// Categories to draw words from (comma-separated, default: all)
        #[arg(short, long, value_delimiter = ',')]
        categories: Vec<String>,

        /// easy, medium or hard
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Play today's word
        #[arg(long)]
        daily: bool,
    },

    /// Match words with their meanings
    Memo {
        /// Categories to draw words from (comma-separated, default: all)
        #[arg(short, long, value_delimiter = ',')]
        categories: Vec<String>,

        /// Number of pairs
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// Timed slideshow of words
    Focus {
        /// Categories to draw words from (comma-separated, default: all)
        #[arg(short, long, value_delimiter = ',')]
        categories: Vec<String>,

        /// Seconds before the first word
        #[arg(long)]
        countdown: Option<u64>,

        /// Seconds each word stays on screen
        #[arg(short, long)]
        seconds: Option<u64>,

        /// Keep the category order instead of shuffling
        #[arg(long)]
        fixed: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    libvocabox::logging::init_with_verbosity(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(exit_code(&e));
    }
}

/// Exit code of the library error behind `err`, 1 for anything else
fn exit_code(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<VocaboxError>())
        .map(VocaboxError::exit_code)
        .unwrap_or(1)
}

async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from_path(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load()?,
    };
    let pool = Arc::new(WordPool::load(&config)?);
    let rng = game_rng(cli.seed);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    match cli.command {
        Command::Categories { format } => {
            let stats = pool.category_stats();
            if format == "json" {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                for category in stats {
                    println!("{:<12} {:<14} {:>4} words", category.id, category.name, category.total);
                }
            }
        }

        Command::Quiz {
            categories,
            count,
            seconds,
        } => {
            let mut quiz_config = config.quiz.clone();
            if let Some(count) = count {
                quiz_config.count = count;
            }
            if let Some(seconds) = seconds {
                quiz_config.seconds_per_question = seconds;
            }
            let categories = resolve_categories(&pool, categories)?;
            quiz::run(pool, rng, categories, &quiz_config, &mut input, &mut out)?;
        }

        Command::Hangman {
            categories,
            difficulty,
            daily,
        } => {
            let difficulty = difficulty.unwrap_or(config.hangman.difficulty);
            let categories = resolve_categories(&pool, categories)?;
            hangman::run(
                pool,
                rng,
                &categories,
                &config.hangman,
                difficulty,
                daily,
                &mut input,
                &mut out,
            )?;
        }

        Command::Memo { categories, count } => {
            let count = count.unwrap_or(config.memorandum.count);
            let categories = resolve_categories(&pool, categories)?;
            memo::run(pool, rng, &categories, count, &config.memorandum, &mut input, &mut out)?;
        }

        Command::Focus {
            categories,
            countdown,
            seconds,
            fixed,
        } => {
            let mut focus_config = config.focus.clone();
            if let Some(countdown) = countdown {
                focus_config.countdown_seconds = countdown;
            }
            if let Some(seconds) = seconds {
                focus_config.per_word_seconds = seconds;
            }
            if fixed {
                focus_config.order = FocusOrder::Fixed;
            }
            let categories = resolve_categories(&pool, categories)?;
            let shutdown = async {
                if let Err(e) = tokio::signal::ctrl_c().await {
                    tracing::warn!(error = %e, "cannot listen for Ctrl-C");
                    std::future::pending::<()>().await;
                }
            };
            focus::run(&pool, rng, categories, &focus_config, shutdown, &mut out).await?;
        }
    }

    Ok(())
}

/// Requested categories, or every category of the pool when none are given
fn resolve_categories(pool: &WordPool, requested: Vec<String>) -> libvocabox::Result<Vec<String>> {
    if requested.is_empty() {
        return Ok(pool.categories().map(str::to_string).collect());
    }
    if let Some(unknown) = requested.iter().find(|c| !pool.has_category(c)) {
        return Err(VocaboxError::InvalidInput(format!(
            "Unknown category: '{}'. Run `vocab-play categories` to list them",
            unknown
        )));
    }
    Ok(requested)
}
