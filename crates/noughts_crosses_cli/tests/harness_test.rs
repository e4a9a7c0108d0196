//! Scripted sessions through the line harness.

use noughts_crosses_cli::{AppConfig, harness};
use std::io::Cursor;

fn session(script: &str) -> String {
    let mut output = Vec::new();
    harness::run(Cursor::new(script), &mut output, &AppConfig::default()).expect("harness ran");
    String::from_utf8(output).expect("utf-8 output")
}

#[test]
fn test_win_announced() {
    let out = session("0\n3\n1\n4\n2\nquit\n");
    assert!(out.contains("O wins!"));
    assert!(out.contains("Type 'new' for a new game"));
    assert!(!out.contains("Invalid move"));
}

#[test]
fn test_tie_announced() {
    let out = session("0\n1\n2\n4\n7\n3\n5\n8\n6\n");
    assert!(out.contains("The game ended with a tie!"));
}

#[test]
fn test_invalid_moves_reprompt() {
    let out = session("4\n4\n9\nsideways\n0\n");
    assert!(out.contains("Invalid move: Square Center is already occupied"));
    assert!(out.contains("Invalid move: Position 9 is out of range (must be 0-8)"));
    assert!(out.contains("Unrecognized input: sideways"));
    // The rejected inputs did not consume turns.
    assert!(out.contains("Current turn is: 3"));
    assert!(!out.contains("Current turn is: 4"));
}

#[test]
fn test_moves_after_win_rejected_until_new_game() {
    let out = session("0\n3\n1\n4\n2\n8\nnew\n8\n");
    assert!(out.contains("Invalid move: Game is already over"));
    assert_eq!(out.matches("Invalid move").count(), 1);
    // After "new", noughts start over and take square 8.
    assert!(out.contains(" 6 | 7 | O "));
    assert!(out.ends_with("Current player is: X\nCurrent turn is: 2\n"));
}

#[test]
fn test_labels_accepted() {
    let out = session("center\ntop-left\n");
    assert!(out.contains(" X | 1 | 2 "));
    assert!(out.contains(" 3 | O | 5 "));
}

#[test]
fn test_quit_stops_reading() {
    let out = session("quit\n4\n");
    assert!(!out.contains(" O "));
}
