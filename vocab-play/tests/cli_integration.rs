//! CLI integration tests for vocab-play

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to escape path for TOML on Windows
fn escape_path_for_toml(path: &str) -> String {
    path.replace('\\', "\\\\")
}

/// Helper to create a config pointing at a small word directory
fn setup_test_env() -> (TempDir, String) {
    let temp_dir = TempDir::new().unwrap();

    let words_dir = temp_dir.path().join("words");
    fs::create_dir_all(&words_dir).unwrap();
    fs::write(
        words_dir.join("food.json"),
        r#"[
  {"palabra": "Canela", "significado": "Especia aromática", "ejemplo": "Arroz con canela"},
  {"palabra": "Azafrán", "significado": "Especia de color dorado"},
  {"palabra": "Berenjena", "significado": "Hortaliza morada"},
  {"palabra": "Membrillo", "significado": "Fruto para hacer dulce"}
]"#,
    )
    .unwrap();
    fs::write(
        words_dir.join("travel.json"),
        r#"[{"palabra": "Equipaje", "significado": "Maletas de un viaje"}]"#,
    )
    .unwrap();

    let config_path = temp_dir.path().join("config.toml");
    let config_content = format!(
        r#"
[data]
words_dir = "{}"

[memorandum]
mismatch_delay_ms = 0
"#,
        escape_path_for_toml(&words_dir.to_string_lossy())
    );
    fs::write(&config_path, config_content).unwrap();

    (temp_dir, config_path.to_string_lossy().to_string())
}

fn vocab_play(config_path: &str) -> Command {
    let mut cmd = Command::cargo_bin("vocab-play").unwrap();
    cmd.env("VOCABOX_CONFIG", config_path);
    cmd
}

#[test]
fn test_help() {
    Command::cargo_bin("vocab-play")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("EXIT CODES"));
}

#[test]
fn test_categories_text() {
    let (_temp_dir, config_path) = setup_test_env();

    vocab_play(&config_path)
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("food"))
        .stdout(predicate::str::contains("Comida"))
        .stdout(predicate::str::contains("4 words"));
}

#[test]
fn test_categories_json() {
    let (_temp_dir, config_path) = setup_test_env();

    let output = vocab_play(&config_path)
        .args(["categories", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stats: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(stats.as_array().unwrap().len(), 2);
    assert_eq!(stats[1]["id"], "travel");
    assert_eq!(stats[1]["total"], 1);
}

#[test]
fn test_missing_explicit_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("none.toml");

    Command::cargo_bin("vocab-play")
        .unwrap()
        .env("VOCABOX_CONFIG", &missing)
        .arg("categories")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_quiz_skipping_all_questions() {
    let (_temp_dir, config_path) = setup_test_env();

    vocab_play(&config_path)
        .args(["--seed", "7", "quiz", "-c", "food", "-n", "3"])
        .write_stdin("s\ns\ns\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipped.").count(3))
        .stdout(predicate::str::contains("Score: 0  Correct: 0/3"));
}

#[test]
fn test_quiz_is_reproducible_with_seed() {
    let (_temp_dir, config_path) = setup_test_env();

    let run = || {
        vocab_play(&config_path)
            .args(["--seed", "11", "quiz", "-c", "food", "-n", "2"])
            .write_stdin("q\n")
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn test_unknown_category_exit_code() {
    let (_temp_dir, config_path) = setup_test_env();

    vocab_play(&config_path)
        .args(["quiz", "--categories", "astrology"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Unknown category: 'astrology'"));
}

#[test]
fn test_invalid_config_exit_code() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    fs::write(&config_path, "[quiz]\nseconds_per_question = 0\n").unwrap();

    Command::cargo_bin("vocab-play")
        .unwrap()
        .arg("--config")
        .arg(&config_path)
        .arg("categories")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("quiz.seconds_per_question"));
}

#[test]
fn test_hangman_give_up() {
    let (_temp_dir, config_path) = setup_test_env();

    vocab_play(&config_path)
        .args(["--seed", "1", "hangman", "-c", "travel", "--difficulty", "easy"])
        .write_stdin("?m\n!\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hint: Maletas de un viaje"))
        .stdout(predicate::str::contains("The word was: Equipaje"));
}

#[test]
fn test_hangman_win() {
    let (_temp_dir, config_path) = setup_test_env();

    vocab_play(&config_path)
        .args(["hangman", "-c", "travel"])
        .write_stdin("e\nq\nu\ni\np\na\nj\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You got it: Equipaje"))
        .stdout(predicate::str::contains("Score: "));
}

#[test]
fn test_memo_single_pair() {
    let (_temp_dir, config_path) = setup_test_env();

    vocab_play(&config_path)
        .args(["memo", "-c", "travel", "-n", "1"])
        .write_stdin("1a\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Match!"))
        .stdout(predicate::str::contains("Matched 1/1 pairs in 1 attempts"));
}

#[test]
fn test_memo_reports_short_pool() {
    let (_temp_dir, config_path) = setup_test_env();

    vocab_play(&config_path)
        .args(["memo", "-c", "travel", "-n", "5"])
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Only 1 pairs available"));
}

#[test]
fn test_memo_board_beyond_26_pairs_can_be_finished() {
    let (temp_dir, config_path) = setup_test_env();
    let words: Vec<String> = (1..=30)
        .map(|n| format!(r#"{{"palabra": "Termino{}", "significado": "Definicion {}"}}"#, n, n))
        .collect();
    fs::write(
        temp_dir.path().join("words").join("law.json"),
        format!("[{}]", words.join(",")),
    )
    .unwrap();

    // Every word against every meaning label, a..z then aa..ad
    let labels: Vec<String> = ('a'..='z')
        .map(String::from)
        .chain(('a'..='d').map(|c| format!("a{}", c)))
        .collect();
    let mut script = String::new();
    for word in 1..=30 {
        for label in &labels {
            script.push_str(&format!("{}{}\n", word, label));
        }
    }

    vocab_play(&config_path)
        .args(["--seed", "4", "memo", "-c", "law", "-n", "30"])
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("ad) "))
        .stdout(predicate::str::contains("Matched 30/30 pairs"));
}

#[test]
fn test_focus_plays_to_the_end() {
    let (_temp_dir, config_path) = setup_test_env();

    vocab_play(&config_path)
        .args(["focus", "-c", "travel", "--countdown", "0", "--seconds", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[1/1] Equipaje"))
        .stdout(predicate::str::contains("Done: 1 words"));
}
