//! Flash quiz over stdin
//!
//! The question clock runs on wall time: seconds spent waiting for an answer
//! are replayed as ticks before the answer is applied, so a slow answer can
//! arrive after the question already timed out.

use std::io::{BufRead, Write};
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use libvocabox::config::QuizConfig;
use libvocabox::games::quiz::{QuizSession, QuizSetup, QuizStatus};
use libvocabox::{GameRng, VocaboxError, WordPool};

use crate::prompt::read_command;

pub fn run<R: BufRead, W: Write>(
    pool: Arc<WordPool>,
    rng: GameRng,
    categories: Vec<String>,
    config: &QuizConfig,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let mut session = QuizSession::new(pool, rng);
    let built = session.init_game(&QuizSetup::from_config(categories, config));
    if built == 0 {
        return Err(VocaboxError::InvalidInput("Not enough words to build a quiz".to_string()).into());
    }

    play(&mut session, input, out)?;

    let state = session.state();
    writeln!(
        out,
        "\nScore: {}  Correct: {}/{}",
        state.score,
        state.correct_count(),
        state.questions.len()
    )?;
    Ok(())
}

fn play<R: BufRead, W: Write>(session: &mut QuizSession, input: &mut R, out: &mut W) -> Result<()> {
    while session.state().status == QuizStatus::Running {
        let state = session.state();
        let Some(question) = state.current_question().cloned() else {
            break;
        };
        let progress = state.progress();
        writeln!(
            out,
            "\n[{}/{}] {}  ({}s)",
            progress.current, progress.total, question.word, state.time_left
        )?;
        for (n, option) in question.options.iter().enumerate() {
            writeln!(out, "  {}) {}", n + 1, option.text)?;
        }

        let asked = Instant::now();
        let Some(line) = read_command(input, out, "answer (number, s = skip, q = quit)> ")? else {
            break;
        };

        let index = session.state().current_index;
        for _ in 0..asked.elapsed().as_secs() {
            if session.state().current_index != index || session.state().status != QuizStatus::Running {
                break;
            }
            session.tick();
        }
        if session.state().current_index != index {
            writeln!(out, "Time's up! It meant: {}", question.correct_meaning)?;
            continue;
        }

        match line.as_str() {
            "q" => break,
            "s" => {
                session.skip_or_timeout();
                writeln!(out, "Skipped. It meant: {}", question.correct_meaning)?;
            }
            other => {
                let picked = other
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| question.options.get(i));
                match picked {
                    Some(option) => {
                        session.answer_question(&option.id);
                        if option.is_correct {
                            writeln!(out, "Correct!")?;
                        } else {
                            writeln!(out, "Wrong. It meant: {}", question.correct_meaning)?;
                        }
                    }
                    None => writeln!(out, "Pick a number between 1 and {}", question.options.len())?,
                }
            }
        }
    }
    Ok(())
}
