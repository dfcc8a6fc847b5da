//! CLI bowling scorer example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};

use tenpin::{Game, MAX_PINS};

fn main() {
    println!("Bowling scorer example (type 'q' to quit, 'r' to restart)");

    let mut game = Game::new();

    loop {
        print_scoreboard(&game);

        if game.is_complete() {
            println!("Game over. Final score: {}", game.score());
            match prompt_line("Play again? (y/n): ").as_str() {
                "y" | "yes" => game.restart(),
                _ => break,
            }
            continue;
        }

        let input = prompt_line(&format!(
            "Frame {}, pins knocked down: ",
            game.current_frame_index() + 1
        ));

        match input.as_str() {
            "q" | "quit" => break,
            "r" | "restart" => {
                game.restart();
                continue;
            }
            _ => {}
        }

        let Ok(pins) = input.parse::<u8>() else {
            println!("Enter a pin count between 0 and {MAX_PINS}.");
            continue;
        };
        if pins > MAX_PINS {
            println!("Enter a pin count between 0 and {MAX_PINS}.");
            continue;
        }

        if let Err(err) = game.roll(pins) {
            println!("Illegal roll: {err}");
        }
    }
}

fn print_scoreboard(game: &Game) {
    let tokens: Vec<String> = game
        .frames()
        .iter()
        .map(|frame| format!("[{frame}]"))
        .collect();
    println!(
        "{}  rolls: {}  score: {}",
        tokens.join(" "),
        game.roll_count(),
        game.score()
    );
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return String::new();
    }
    line.trim().to_lowercase()
}
