use checkers::engine::{Game, Player};
use checkers::heuristics::{CapturePrioritySelector, MoveSelector};
use clap::Parser;
use tracing::Level;

/// Offset between the White and Black seeds of the same game, so the two sides
/// never share a random stream.
const BLACK_SEED_OFFSET: u64 = 1_000_000;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Play the computer against itself and tally the results", long_about = None)]
struct Args {
    /// Number of games to play
    #[clap(short, long, default_value_t = 20)]
    games: u32,

    /// Seed of the first game; game i uses seed + i, wrapping around at u64::MAX
    #[clap(short, long, default_value_t = 0)]
    seed: u64,

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
        .with_writer(std::io::stderr)
        .init();
}

/// White and Black seeds for game `game_idx`. Both wrap on overflow.
fn game_seeds(seed: u64, game_idx: u32) -> (u64, u64) {
    let white_seed = seed.wrapping_add(u64::from(game_idx));
    (white_seed, white_seed.wrapping_add(BLACK_SEED_OFFSET))
}

/// Plays one game to the end and returns it.
fn play_game(white: &mut impl MoveSelector, black: &mut impl MoveSelector) -> Result<Game, String> {
    let mut game = Game::new();
    while !game.is_game_over() {
        let selector: &mut dyn MoveSelector = match game.current_player() {
            Player::White => &mut *white,
            Player::Black => &mut *black,
        };
        let mv = selector
            .select_move(&game)
            .map_err(|e| format!("{} could not move: {}", game.current_player(), e))?;
        game.apply_move(mv)
            .map_err(|e| format!("selector chose illegal move {}: {}", mv, e))?;
    }
    Ok(game)
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    println!("Starting self-play for {} games...", args.games);

    let mut white_wins = 0u32;
    let mut black_wins = 0u32;
    let mut total_plies = 0usize;
    let mut played = 0u32;

    for game_idx in 0..args.games {
        let (current_seed, black_seed) = game_seeds(args.seed, game_idx);
        let mut white = CapturePrioritySelector::seeded(current_seed);
        let mut black = CapturePrioritySelector::seeded(black_seed);

        let game = match play_game(&mut white, &mut black) {
            Ok(game) => game,
            Err(e) => {
                eprintln!("Error: game {} (Seed: {}) aborted: {}", game_idx, current_seed, e);
                continue;
            }
        };

        match game.winner() {
            Some(Player::White) => white_wins += 1,
            Some(Player::Black) => black_wins += 1,
            None => {}
        }
        played += 1;
        total_plies += game.history().len();
        println!(
            "  Game {:<4} (Seed: {:<6}) {:<26} Plies: {}",
            game_idx,
            current_seed,
            game.status(),
            game.history().len()
        );
    }

    println!("\n--- Self-play Complete ---");
    println!("Games played: {}", played);
    println!("White wins: {}", white_wins);
    println!("Black wins: {}", black_wins);
    if played > 0 {
        println!(
            "Average game length: {:.2} plies",
            total_plies as f64 / played as f64
        );
    }
}
