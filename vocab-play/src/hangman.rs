//! Hangman over stdin

use std::io::{BufRead, Write};
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use libvocabox::config::HangmanConfig;
use libvocabox::games::hangman::{Difficulty, HangmanSession, HangmanState, HangmanStatus};
use libvocabox::{GameRng, VocaboxError, WordPool};

use crate::prompt::read_command;

const HELP: &str = "letter = guess, ?m = meaning, ?e = example, ?r = reveal a letter, ! = give up";

#[allow(clippy::too_many_arguments)]
pub fn run<R: BufRead, W: Write>(
    pool: Arc<WordPool>,
    rng: GameRng,
    categories: &[String],
    config: &HangmanConfig,
    difficulty: Difficulty,
    daily: bool,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let mut session = HangmanSession::with_config(pool, rng, config);
    if !session.init_game(categories, difficulty, daily) {
        return Err(VocaboxError::InvalidInput(format!(
            "No word of {}-{} letters in the selected categories",
            config.min_len, config.max_len
        ))
        .into());
    }

    writeln!(out, "Hangman ({}). {}", difficulty, HELP)?;
    play(&mut session, input, out)?;
    summary(session.state(), out)
}

fn play<R: BufRead, W: Write>(session: &mut HangmanSession, input: &mut R, out: &mut W) -> Result<()> {
    while session.state().status == HangmanStatus::Running {
        board(session.state(), out)?;

        let asked = Instant::now();
        let Some(line) = read_command(input, out, "> ")? else {
            break;
        };
        for _ in 0..asked.elapsed().as_secs() {
            if session.state().status != HangmanStatus::Running {
                break;
            }
            session.tick_timer();
        }
        if session.state().status != HangmanStatus::Running {
            writeln!(out, "Time's up!")?;
            break;
        }

        match line.as_str() {
            "!" => session.give_up(),
            "?m" => {
                session.use_hint_meaning();
                hint(session.state(), out, |s| {
                    s.used_hint_meaning
                        .then(|| s.word.as_ref().map(|w| w.significado.clone()))
                        .flatten()
                })?;
            }
            "?e" => {
                session.use_hint_example();
                hint(session.state(), out, |s| {
                    s.used_hint_example
                        .then(|| s.word.as_ref().and_then(|w| w.ejemplo.clone()))
                        .flatten()
                })?;
            }
            "?r" => {
                let before = session.state().used_hint_reveal;
                session.use_hint_reveal();
                if before || !session.state().used_hint_reveal {
                    writeln!(out, "That hint is not available")?;
                }
            }
            "?" | "help" => writeln!(out, "{}", HELP)?,
            guess => {
                let wrong_before = session.state().wrong_letters.len();
                let guessed_before = session.state().guessed_letters.len();
                session.guess_letter(guess);
                let state = session.state();
                if state.guessed_letters.len() == guessed_before && state.wrong_letters.len() == wrong_before {
                    writeln!(out, "Type a new letter ({})", HELP)?;
                } else if state.wrong_letters.len() > wrong_before {
                    writeln!(out, "No luck.")?;
                }
            }
        }
    }
    Ok(())
}

fn hint<W, F>(state: &HangmanState, out: &mut W, text: F) -> Result<()>
where
    W: Write,
    F: Fn(&HangmanState) -> Option<String>,
{
    match text(state) {
        Some(text) => writeln!(out, "Hint: {}", text)?,
        None => writeln!(out, "That hint is not available")?,
    }
    Ok(())
}

fn board<W: Write>(state: &HangmanState, out: &mut W) -> Result<()> {
    writeln!(out, "\n  {}", state.masked_word())?;
    let mut status = format!("  lives {}/{}", state.lives_left, state.max_lives);
    if !state.wrong_letters.is_empty() {
        let wrong: String = state.wrong_letters.iter().collect();
        status.push_str(&format!("  wrong: {}", wrong));
    }
    if let Some(seconds) = state.seconds_left {
        status.push_str(&format!("  {}s left", seconds));
    }
    writeln!(out, "{}", status)?;
    Ok(())
}

fn summary<W: Write>(state: &HangmanState, out: &mut W) -> Result<()> {
    let Some(word) = &state.word else {
        return Ok(());
    };
    if state.is_win() {
        writeln!(out, "\nYou got it: {}", word.display)?;
    } else {
        writeln!(out, "\nThe word was: {}", word.display)?;
    }
    writeln!(out, "{}", word.significado)?;
    if state.status.is_terminal() {
        writeln!(out, "Score: {}", state.score)?;
    }
    Ok(())
}
