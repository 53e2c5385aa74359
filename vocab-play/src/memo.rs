//! Memorandum over stdin
//!
//! Words are numbered, meanings lettered; `3b` matches word 3 with meaning b.
//! Past `z` the letters continue as `aa`, `ab`, ... so every card stays
//! reachable.

use std::io::{BufRead, Write};
use std::sync::Arc;

use anyhow::Result;
use libvocabox::config::MemorandumConfig;
use libvocabox::games::memorandum::{Card, MemorandumSession, MemorandumState, MemorandumStatus};
use libvocabox::{GameRng, VocaboxError, WordPool};

use crate::prompt::read_command;

pub fn run<R: BufRead, W: Write>(
    pool: Arc<WordPool>,
    rng: GameRng,
    categories: &[String],
    count: usize,
    config: &MemorandumConfig,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let mut session = MemorandumSession::with_config(pool, rng, config);
    let build = session.init_game_validated(categories, count);
    if build.actual_count == 0 {
        return Err(VocaboxError::InvalidInput("No words to deal in the selected categories".to_string()).into());
    }
    if build.has_insufficient_words {
        writeln!(out, "Only {} pairs available", build.actual_count)?;
    }

    let mut attempts = 0u32;
    while session.state().status == MemorandumStatus::Running {
        board(session.state(), out)?;
        let Some(line) = read_command(input, out, "match (e.g. 1a, q = quit)> ")? else {
            break;
        };
        if line == "q" {
            break;
        }
        let Some((word_index, meaning_index)) = parse_move(&line) else {
            writeln!(out, "Type a word number followed by a meaning letter, like 2c")?;
            continue;
        };

        let state = session.state();
        let (Some(word), Some(meaning)) = (state.word_cards.get(word_index), state.meaning_cards.get(meaning_index))
        else {
            writeln!(out, "No such cards")?;
            continue;
        };
        if word.matched || meaning.matched {
            writeln!(out, "Those cards are already matched")?;
            continue;
        }
        let (word_id, meaning_id) = (word.id.clone(), meaning.id.clone());

        attempts += 1;
        session.select_word(&word_id);
        session.select_meaning(&meaning_id);

        let state = session.state();
        if state.lock_input {
            writeln!(out, "No match.")?;
            std::thread::sleep(session.mismatch_delay());
            session.clear_selections_after_delay();
        } else {
            writeln!(out, "Match!")?;
            session.clear_just_matched_cards();
        }
    }

    let state = session.state();
    writeln!(
        out,
        "\nMatched {}/{} pairs in {} attempts",
        state.matched_pairs_count(),
        state.pairs.len(),
        attempts
    )?;
    Ok(())
}

/// `"3b"` or `"3 b"` to zero-based (word, meaning) indices
fn parse_move(line: &str) -> Option<(usize, usize)> {
    let line: String = line.chars().filter(|c| !c.is_whitespace()).collect();
    let split = line.find(|c: char| !c.is_ascii_digit())?;
    let (number, letters) = line.split_at(split);

    let word = number.parse::<usize>().ok()?.checked_sub(1)?;
    Some((word, meaning_index(letters)?))
}

/// Bijective base-26 label: 0 is `a`, 25 is `z`, 26 is `aa`
fn meaning_label(index: usize) -> String {
    let mut label = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        n -= 1;
        label.push(b'a' + (n % 26) as u8);
        n /= 26;
    }
    label.iter().rev().map(|&b| b as char).collect()
}

fn meaning_index(label: &str) -> Option<usize> {
    if label.is_empty() || label.len() > 3 {
        return None;
    }
    let mut n = 0usize;
    for c in label.chars() {
        let c = c.to_ascii_lowercase();
        if !c.is_ascii_lowercase() {
            return None;
        }
        n = n * 26 + (c as u8 - b'a') as usize + 1;
    }
    Some(n - 1)
}

fn board<W: Write>(state: &MemorandumState, out: &mut W) -> Result<()> {
    writeln!(out)?;
    let rows = state.word_cards.len().max(state.meaning_cards.len());
    for row in 0..rows {
        let word = state.word_cards.get(row).map(label).unwrap_or_default();
        let meaning = state.meaning_cards.get(row).map(label).unwrap_or_default();
        writeln!(out, "  {:>2}. {:<22} {:>2}) {}", row + 1, word, meaning_label(row), meaning)?;
    }
    Ok(())
}

fn label(card: &Card) -> String {
    if card.matched {
        format!("✓ {}", card.label)
    } else {
        card.label.clone()
    }
}
