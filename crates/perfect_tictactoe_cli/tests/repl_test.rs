//! Scripted terminal sessions and config loading.

use perfect_tictactoe_cli::{PlayConfig, run};
use std::io::{Cursor, Write};

fn play(config: &PlayConfig, script: &str) -> String {
    let mut out = Vec::new();
    run(config, Cursor::new(script.to_string()), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_prompts_for_side_first() {
    let output = play(&PlayConfig::default(), "5\nquit\n");
    assert!(output.contains("> Select who the computer is playing as."));
    assert!(output.contains("> Choose to play as X or O first"));
    assert!(!output.contains("placed"));
}

#[test]
fn test_engine_answers_in_the_center() {
    let output = play(&PlayConfig::default(), "x\n1\n");
    assert!(output.contains("> Computer will make the best plays for X"));
    assert!(output.contains("You placed O at Top-left (1)"));
    assert!(output.contains("Computer placed X at Center (5)"));
}

#[test]
fn test_opening_o_then_book_reply() {
    let output = play(&PlayConfig::default(), "o\n5\n1\nboard\n");
    assert!(output.contains("> Place the computer's opening O."));
    assert!(output.contains("You placed O at Center (5)"));
    assert!(output.contains("Computer placed O at Bottom-right (9)"));
    assert!(output.contains("X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|O"));
}

#[test]
fn test_bad_input_is_reported_not_fatal() {
    let output = play(&PlayConfig::default(), "x\nbanana\n42\n1\n1\n");
    assert!(output.contains("Unknown command \"banana\""));
    assert!(output.contains("> Cell id 42 is not between 1 and 9"));
    assert!(output.contains("> Top-left is already occupied"));
}

#[test]
fn test_full_game_ends_and_resets() {
    // Take the first free cell every turn; extra ids are rejected harmlessly
    let script = "x\n1\n2\n3\n4\n5\n6\n7\n8\n9\n1\n2\n3\n4\n6\n7\n8\n9\nreset\n";
    let output = play(&PlayConfig::default(), script);
    assert!(!output.contains("> O has won the game!"));
    assert!(output.contains("Type `reset` for a new game."));
    assert!(output.contains("Board cleared."));
}

#[test]
fn test_hints_follow_config() {
    let config: PlayConfig = toml::from_str("show_hints = true").unwrap();
    let output = play(&config, "x\n");
    assert!(output.contains("hints for O: 5:0 1:0 3:0 7:0 9:0 2:0 4:0 6:0 8:0"));
}

#[test]
fn test_config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "opening_book = false").unwrap();
    writeln!(file, "log_filter = \"debug\"").unwrap();

    let config = PlayConfig::from_file(file.path()).unwrap();
    assert!(!*config.opening_book());
    assert_eq!(config.log_filter(), "debug");

    // Without the book the engine searches and picks the first drawing corner
    let output = play(&config, "o\n5\n1\n");
    assert!(output.contains("Computer placed O at Top-right (3)"));
}

#[test]
fn test_config_errors_carry_location() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "opening_book = \"maybe\"").unwrap();

    let err = PlayConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
    assert!(err.file.ends_with("config.rs"));

    assert!(PlayConfig::from_file("/definitely/not/here.toml").is_err());
}
