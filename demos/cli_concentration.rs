//! CLI concentration example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use concentration::{
    Card, Face, Game, GameEvent, GameOptions, GameState, Medal, Player, RevealOutcome, Snapshot,
    StartError, Suit, SuitColor, Theme,
};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const COLUMNS: usize = 13;

fn main() {
    init_logging();
    println!("Concentration CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);

    loop {
        if game.state() == GameState::NotStarted && !setup(&mut game) {
            break;
        }

        print_board(&game.snapshot());

        if game.state() == GameState::GameOver {
            match prompt_line("[r]estart with the same players, [n]ew game, [q]uit: ")
                .to_lowercase()
                .as_str()
            {
                "r" => game.restart(true),
                "n" => game.return_to_setup(),
                _ => break,
            }
            drain(&mut game);
            continue;
        }

        let player = &game.players()[game.current_player()];
        let hint = if game.can_hide() {
            "[h]ide"
        } else if game.can_shuffle() {
            "card number, [s]huffle"
        } else {
            "card number"
        };
        let input = prompt_line(&format!("{} ({hint}, q to quit): ", player.name)).to_lowercase();

        match input.as_str() {
            "q" | "quit" => break,
            "h" => {
                if !game.hide_mismatch() {
                    println!("Nothing to hide.");
                }
            }
            "s" => {
                if !game.shuffle() {
                    println!("You can only shuffle between turns.");
                }
            }
            other => match other.parse::<usize>() {
                Ok(position) if (1..=game.deck().len()).contains(&position) => {
                    let id = game.deck()[position - 1].id;
                    if let RevealOutcome::Rejected(reason) = game.reveal_card(id) {
                        println!("Can't reveal that card: {reason:?}");
                    }
                }
                _ => println!("Please enter a card number between 1 and {}.", game.deck().len()),
            },
        }

        drain(&mut game);
    }

    println!("Goodbye.");
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).compact())
        .init();
}

fn setup(game: &mut Game) -> bool {
    loop {
        let Some(count) = prompt_usize("Number of players (2-10): ") else {
            return false;
        };

        let roster: Vec<Player> = (1..=count)
            .map(|seat| Player::new(prompt_line(&format!("Name of player {seat}: "))))
            .collect();

        let theme_prompt = "Theme ([t]rump, [a]nimals, a[l]phabet, [v]ehicles): ";
        let theme = match prompt_line(theme_prompt).to_lowercase().as_str() {
            "a" => Theme::Animals,
            "l" => Theme::Alphabet,
            "v" => Theme::Vehicles,
            _ => Theme::Standard,
        };

        match game.start_game(roster, theme) {
            Ok(()) => {
                drain(game);
                return true;
            }
            Err(StartError::TooFewPlayers { .. } | StartError::TooManyPlayers { .. }) => {
                println!("Please choose between 2 and 10 players.");
            }
        }
    }
}

fn drain(game: &mut Game) {
    for event in game.drain_events() {
        match event {
            GameEvent::Started { theme, players } => {
                println!("New game: {players} players, {theme:?} deck.");
            }
            GameEvent::Shuffled => println!("The board was shuffled."),
            GameEvent::Revealed { .. } => {}
            GameEvent::MatchResolved {
                points,
                player_index,
                ..
            } => {
                let name = &game.players()[player_index].name;
                println!("{} {name} scores {points}!", colorize("Pair!", "32"));
            }
            GameEvent::Mismatch { .. } => {
                println!("{}", colorize("No match. Press h to hide.", "33"));
            }
            GameEvent::TurnAdvanced { player_index } => {
                println!("{}'s turn.", game.players()[player_index].name);
            }
            GameEvent::GameOver { standings } => {
                println!("\nGame over!");
                if standings.is_draw() {
                    println!("It's a draw.");
                }
                for placement in &standings.placements {
                    let medal = match placement.medal {
                        Some(Medal::Gold) => colorize("1st", "33"),
                        Some(Medal::Silver) => colorize("2nd", "37"),
                        Some(Medal::Bronze) => colorize("3rd", "31"),
                        None => format!("{}th", placement.rank),
                    };
                    println!("  {medal} {} - {} points", placement.name, placement.score);
                }
            }
            GameEvent::ConsistencyReset { .. } => println!("The turn was reset."),
        }
    }
}

fn print_board(snapshot: &Snapshot) {
    println!();
    for (row, cards) in snapshot.cards.chunks(COLUMNS).enumerate() {
        let line: Vec<String> = cards
            .iter()
            .enumerate()
            .map(|(column, card)| format_slot(snapshot, card, row * COLUMNS + column + 1))
            .collect();
        println!("{}", line.join(" "));
    }

    let scores: Vec<String> = snapshot
        .players
        .iter()
        .enumerate()
        .map(|(seat, player)| {
            let marker = if seat == snapshot.current_player && snapshot.started {
                "*"
            } else {
                " "
            };
            format!("{marker}{} {}", player.name, player.score())
        })
        .collect();
    println!("\n{} | pairs left: {}\n", scores.join("  "), snapshot.pairs_remaining);
}

fn format_slot(snapshot: &Snapshot, card: &Card, position: usize) -> String {
    if snapshot.is_matched(card.id) {
        return colorize(&format!("{:>6}", "--"), "90");
    }
    if snapshot.revealed.contains(&card.id) {
        return format_card(card);
    }
    format!("{position:>6}")
}

fn format_card(card: &Card) -> String {
    let text = format!("{:>6}", card.to_string());
    match card.face {
        Face::Standard { suit, .. } if suit.color() == SuitColor::Red => colorize(&text, "31"),
        Face::Standard { suit: Suit::Clubs | Suit::Spades, .. } => colorize(&text, "34"),
        _ => colorize(&text, "36"),
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => "q".to_string(),
        Ok(_) => input.trim().to_string(),
    }
}

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}
