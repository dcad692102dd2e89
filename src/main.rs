use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use rand::rngs::StdRng;
use rand::SeedableRng;

use slide48::{Board, Direction, Score, Status};

/// Play a scripted game of 2048 and print every board along the way.
#[derive(Parser, Debug)]
#[command(version)]
struct Args {
    /// Width and height of the grid (3, 4 or 5).
    #[arg(short, long, default_value_t = 4)]
    size: usize,

    /// Seed for tile spawns; a random seed is used when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Best score carried over from an earlier game on a grid of the same size.
    #[arg(long, default_value_t = 0)]
    best: Score,

    /// Write log records to this file instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,

    /// Moves to play: h/a/L left, l/d/R right, k/w/U up, j/s/D down, u undo, c keep going.
    moves: Vec<String>,
}

enum Command {
    Shift(Direction),
    Undo,
    KeepGoing,
}

impl TryFrom<char> for Command {
    type Error = slide48::Error;

    fn try_from(c: char) -> std::result::Result<Self, Self::Error> {
        match c {
            'u' => Ok(Command::Undo),
            'c' => Ok(Command::KeepGoing),
            c => Direction::try_from(c).map(Command::Shift),
        }
    }
}

fn setup_logging(args: &Args) -> Result<()> {
    let dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {}] {}",
                record.level(),
                record.target(),
                message,
            ))
        })
        .level(args.verbose.log_level_filter());
    let dispatch = match &args.log_file {
        Some(path) => dispatch.chain(fern::log_file(path)?),
        None => dispatch.chain(std::io::stderr()),
    };
    dispatch.apply()?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(&args)?;

    let commands = args
        .moves
        .iter()
        .flat_map(|m| m.chars())
        .map(Command::try_from)
        .collect::<std::result::Result<Vec<_>, _>>()?;

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("seed {}", seed);
    let mut board =
        Board::new(args.size, StdRng::seed_from_u64(seed))?.with_best(args.size, args.best);
    print!("{}", board.grid());

    for command in commands {
        match command {
            Command::Shift(direction) => match board.shift(direction) {
                Some(turn) => {
                    println!("\n{} +{}", direction, turn.gained);
                    print!("{}", board.grid());
                    match turn.status {
                        Status::Won => println!("you win! (c to keep going)"),
                        Status::Over => println!("game over"),
                        Status::Playing | Status::KeepGoing => (),
                    }
                }
                None => log::warn!("{} does nothing", direction),
            },
            Command::Undo => match board.undo() {
                Ok(()) => {
                    println!("\nundo ({} left)", board.undos_left());
                    print!("{}", board.grid());
                }
                Err(e) => log::warn!("{}", e),
            },
            Command::KeepGoing => board.keep_going(),
        }
    }

    println!(
        "\nscore {} best {} moves {} best streak {} best tile {} status {:?}",
        board.score(),
        board.best(),
        board.moves(),
        board.best_streak(),
        board.best_tile(),
        board.status()
    );
    let hints = board.grid().merge_hint_keys();
    if !hints.is_empty() {
        log::debug!("mergeable cells: {:?}", hints);
    }
    Ok(())
}
