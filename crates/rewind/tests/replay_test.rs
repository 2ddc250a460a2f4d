//! End-to-end tests for headless replay.

use clap::Parser;
use rewind::{Cli, Command, ReplayOptions, render_text, replay};
use rewind_tictactoe::{GameStatus, Player, Position};

fn run(args: &[&str]) -> rewind_tictactoe::Game {
    let cli = Cli::try_parse_from(args).unwrap();
    match cli.command() {
        Command::Replay {
            moves,
            jump,
            descending,
            ..
        } => replay(&ReplayOptions {
            moves,
            jump,
            descending,
        })
        .unwrap(),
        other => panic!("expected replay, got {:?}", other),
    }
}

#[test]
fn test_winning_replay_from_args() {
    let game = run(&["rewind", "replay", "0,4,1,7,2"]);
    assert_eq!(game.state().status(), GameStatus::Winner(Player::X));
    assert_eq!(
        game.view().highlighted(),
        vec![Position::TopLeft, Position::TopCenter, Position::TopRight]
    );
}

#[test]
fn test_jump_back_shows_earlier_board() {
    let game = run(&["rewind", "replay", "0,4,1,7,2", "--jump", "2"]);
    assert_eq!(game.state().history().len(), 6);
    assert_eq!(game.state().status(), GameStatus::Turn(Player::X));

    let text = render_text(&game.view());
    assert!(text.starts_with("Next player: X"));
    assert!(text.contains("-> 2. You are at move #2"));
    assert!(text.contains("   5. Go to move #5 (0, 2)"));
}

#[test]
fn test_draw_replay() {
    let game = run(&["rewind", "replay", "0,1,2,4,3,5,7,6,8", "-d"]);
    assert_eq!(game.state().status(), GameStatus::Draw);
    let text = render_text(&game.view());
    assert!(text.starts_with("The game is a draw!"));
    let newest = text.find("You are at move #9").unwrap();
    let oldest = text.find("Go to game start").unwrap();
    assert!(newest < oldest);
}
