//! End-to-end console sessions driven by scripted input.

use std::fs;
use std::io::{self, BufReader, Cursor, Read};
use tempfile::TempDir;

use ttt_cli::{Console, Settings, run};
use ttt_engine::ScriptedSource;

/// Human moves that beat the computer when its random picks are index 1.
const WINNING_ROUND: &str = "1\n9\n7\n4\n";

fn play(input: impl AsRef<[u8]>, settings: &Settings) -> String {
    let mut console = Console::new(Cursor::new(input.as_ref().to_vec()), Vec::new(), false);
    run(&mut console, settings, ScriptedSource::new([1])).expect("session should end cleanly");
    String::from_utf8(console.into_output()).expect("output is utf-8")
}

#[test]
fn test_full_match_to_champion() {
    let input = format!("x\nAda\n{}n\n", WINNING_ROUND.repeat(5));
    let out = play(&input, &Settings::default());

    assert!(out.starts_with("Welcome to Tic Tac Toe!"));
    assert!(out.contains("You're X. Hal is O."));
    assert_eq!(out.matches("You won!").count(), 5);
    assert!(out.contains("Ada: 1  Hal: 0"));
    assert!(out.contains("Ada: 5  Hal: 0"));
    assert!(out.contains("Ada is the champion!"));
    assert!(out.contains("Would you like to play again? (y/n)"));
    assert!(out.trim_end().ends_with("Goodbye!"));
}

#[test]
fn test_invalid_setup_answers_reprompt() {
    let input = format!("maybe\no\n   \nAda\n{}", WINNING_ROUND);
    let out = play(&input, &Settings::default());

    assert!(out.contains("Sorry, must be X or O."));
    assert!(out.contains("Sorry, must enter a value."));
    assert!(out.contains("You're O. Hal is X."));
    assert!(out.contains("Ada: 1  Hal: 0"));
}

#[test]
fn test_invalid_square_reprompts() {
    let input = "x\nAda\n0\n1\nfoo\n5\n9\n";
    let out = play(input, &Settings::default());

    // 0 is rejected on the first turn; foo and the taken 5 on the second.
    assert_eq!(out.matches("Sorry, that's not a valid choice.").count(), 3);
    assert!(out.contains("Choose a square (2, 3, 4, 6, 7, 8, or 9):"));
}

#[test]
fn test_non_utf8_move_reprompts() {
    let mut input = b"x\nAda\n\xff\n".to_vec();
    input.extend_from_slice(WINNING_ROUND.as_bytes());
    let out = play(input, &Settings::default());

    assert_eq!(out.matches("Sorry, that's not a valid choice.").count(), 1);
    assert!(out.contains("You won!"));
    assert!(out.contains("Ada: 1  Hal: 0"));
}

#[test]
fn test_non_utf8_setup_answer_reprompts() {
    let mut input = b"\xff\nx\nAda\n".to_vec();
    input.extend_from_slice(WINNING_ROUND.as_bytes());
    let out = play(input, &Settings::default());

    assert!(out.contains("Sorry, must be X or O."));
    assert!(out.contains("You won!"));
}

struct Unplugged;

impl Read for Unplugged {
    fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::other("terminal unplugged"))
    }
}

#[test]
fn test_read_failure_mid_round_is_an_error() {
    let input = BufReader::new(Cursor::new(b"x\nAda\n1\n".to_vec()).chain(Unplugged));
    let mut console = Console::new(input, Vec::new(), false);

    let err = run(&mut console, &Settings::default(), ScriptedSource::new([1])).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("Failed to read a move"), "{message}");
    assert!(message.contains("terminal unplugged"), "{message}");

    let out = String::from_utf8(console.into_output()).expect("output is utf-8");
    assert!(!out.contains("Goodbye!"));
}

#[test]
fn test_end_of_input_during_setup_says_goodbye() {
    let out = play("x\n", &Settings::default());
    assert!(out.contains("What's your name?"));
    assert!(out.trim_end().ends_with("Goodbye!"));
    assert!(!out.contains("Choose a square"));
}

#[test]
fn test_rematch_resets_scores() {
    let input = format!("x\nAda\n{}y\n{}", WINNING_ROUND.repeat(5), WINNING_ROUND);
    let out = play(&input, &Settings::default());

    assert!(out.contains("Let's play again!"));
    let after_rematch = out.split("Let's play again!").nth(1).unwrap();
    assert!(after_rematch.contains("Ada: 1  Hal: 0"));
}

#[test]
fn test_settings_file_skips_prompts() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("ttt.toml");
    fs::write(&path, "name = \"Grace\"\nmarker = \"O\"\nclear_screen = false\n")
        .expect("Failed to write settings");

    let settings = Settings::load(&path).expect("Settings should load");
    let out = play(WINNING_ROUND, &settings);

    assert!(!out.contains("Choose your marker"));
    assert!(!out.contains("What's your name?"));
    assert!(out.contains("You're O. Hal is X."));
    assert!(out.contains("Grace: 1  Hal: 0"));
}

#[test]
fn test_missing_settings_file_is_default() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let settings = Settings::load(dir.path().join("absent.toml")).expect("Defaults expected");
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_malformed_settings_file_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("ttt.toml");
    fs::write(&path, "marker = \"Z\"").expect("Failed to write settings");

    let err = Settings::load(&path).unwrap_err();
    assert!(err.to_string().starts_with("Config error: Failed to parse settings"));
}
