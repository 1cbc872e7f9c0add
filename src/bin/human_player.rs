use checkers::engine::{Game, Move, Player};
use checkers::heuristics::{CapturePrioritySelector, MoveSelector};
use checkers::utils::parse_move;
use clap::Parser;
use std::io::{self, Write};
use tracing::Level;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Play checkers as White against the computer", long_about = None)]
struct Args {
    /// Seed for the computer player; omit for a different game every run
    #[clap(short, long)]
    seed: Option<u64>,

    /// Log engine activity to stderr (-v info, -vv debug, -vvv trace)
    #[clap(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn print_separator() {
    println!("{}", "=".repeat(51));
}

fn print_welcome() {
    print_separator();
    println!("CHECKERS GAME");
    print_separator();
    println!("You are playing as White (W) against the Computer Black (B)");
    println!("White moves first!");
    println!();
    println!("Move format: fromRow,fromCol:toRow,toCol (e.g., '5,0:4,1')");
    println!("Enter 'help' for available commands, 'quit' to exit");
    println!();
}

fn print_help() {
    println!();
    println!("=== HELP ===");
    println!("Commands:");
    println!("  help, h     - Show this help");
    println!("  moves, m    - Show all valid moves");
    println!("  quit, q     - Quit the game");
    println!();
    println!("Move format: fromRow,fromCol:toRow,toCol");
    println!("Example: '5,0:4,1' moves piece from (5,0) to (4,1)");
    println!();
    println!("Board coordinates:");
    println!("  Rows: 0-7 (top to bottom)");
    println!("  Cols: 0-7 (left to right)");
    println!("  W = White pieces (yours)");
    println!("  B = Black pieces (computer)");
    println!("  . = Empty dark squares (playable)");
    println!("    = Empty light squares (not playable)");
    println!();
}

fn role(player: Player) -> &'static str {
    match player {
        Player::White => "human",
        Player::Black => "computer",
    }
}

/// Outcome of prompting the human for a move.
enum HumanTurn {
    Moved,
    Quit,
}

fn handle_human_turn(game: &mut Game) -> io::Result<HumanTurn> {
    loop {
        print!("\nYour move (White): ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            // stdin closed
            return Ok(HumanTurn::Quit);
        }
        let trimmed_input = input.trim();

        match trimmed_input.to_lowercase().as_str() {
            "quit" | "exit" | "q" => return Ok(HumanTurn::Quit),
            "help" | "h" => {
                print_help();
                continue;
            }
            "moves" | "m" => {
                let moves: Vec<String> = game
                    .legal_moves()
                    .iter()
                    .map(|mv| mv.to_string())
                    .collect();
                println!("Valid moves: {}", moves.join("  "));
                continue;
            }
            "" => {
                println!("Please enter a move.");
                continue;
            }
            _ => {}
        }

        let mv = match parse_move(trimmed_input) {
            Ok(mv) => mv,
            Err(e) => {
                println!("Invalid move format: {}", e);
                continue;
            }
        };

        match game.apply_move(mv) {
            Ok(()) => {
                println!("You moved: {}", mv);
                return Ok(HumanTurn::Moved);
            }
            Err(e) => println!("Invalid move: {}", e),
        }
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut computer = match args.seed {
        Some(seed) => CapturePrioritySelector::seeded(seed),
        None => CapturePrioritySelector::from_entropy(),
    };
    let mut game = Game::new();
    let mut last_computer_move: Option<Move> = None;

    print_welcome();

    while !game.is_game_over() {
        println!(
            "{}",
            game.board()
                .to_string_with_highlight(last_computer_move.map(|mv| mv.to))
        );
        println!("{} ({})", game.status(), role(game.current_player()));

        match game.current_player() {
            Player::White => match handle_human_turn(&mut game) {
                Ok(HumanTurn::Moved) => {}
                Ok(HumanTurn::Quit) => {
                    println!("Game quit. Thanks for playing!");
                    return;
                }
                Err(e) => {
                    eprintln!("Failed to read input: {}", e);
                    return;
                }
            },
            Player::Black => {
                println!("\nComputer is thinking...");
                let mv = match computer.select_move(&game) {
                    Ok(mv) => mv,
                    Err(e) => {
                        eprintln!("Computer failed to find a move: {}", e);
                        return;
                    }
                };
                if let Err(e) = game.apply_move(mv) {
                    eprintln!("Computer made an invalid move {}: {}", mv, e);
                    return;
                }
                println!("Computer moved: {}", mv);
                last_computer_move = Some(mv);
            }
        }
    }

    println!();
    print_separator();
    println!("{}", game.board());
    println!("{}", game.status());
    println!("Total moves: {}", game.history().len());
    print_separator();
}
