use cube_nudge::cube::{
    StickerCube,
    greedy_solver::GreedySolver,
    moves::{FaceTurn, Htm, MoveGenerator},
    permutation::verify_move_table,
};
use cube_nudge::moves::MoveSequence;

use clap::Parser;
use env_logger::TimestampPrecision;
use log::{LevelFilter, error, info, warn};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Seed for painting the cube and breaking ties. Drawn from the OS when absent.
    #[arg(long)]
    seed: Option<u64>,

    /// Make this many moves and exit instead of reading commands from stdin.
    #[arg(long, short = 'n', value_name = "PLIES")]
    steps: Option<usize>,

    /// Moves applied to the starting cube before solving, e.g. "R U' F2".
    #[arg(long, value_name = "SEQUENCE")]
    moves: Option<MoveSequence<FaceTurn>>,

    /// Start from this cube instead of a random one: 54 color letters (W Y R O B G), faces in
    /// U D L R F B order.
    #[arg(long, value_name = "STICKERS")]
    cube: Option<StickerCube>,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    if let Err(e) = verify_move_table() {
        error!("move table is inconsistent: {e}");
        return ExitCode::FAILURE;
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut cube = cli.cube.unwrap_or_else(|| StickerCube::random(&mut rng));
    if let Some(moves) = &cli.moves {
        cube = cube.make_sequence(moves);
    }

    let mut solver = GreedySolver::new(cube);
    println!("{}", solver.cube());

    let result = match cli.steps {
        Some(plies) => {
            for _ in 0..plies {
                advance(&mut solver, &mut rng);
            }
            Ok(())
        }
        None => run_repl(&mut solver, &mut rng),
    };

    if let Err(e) = result {
        error!("failed to read from stdin: {e}");
        return ExitCode::FAILURE;
    }

    info!("moves made: {}", solver.history());
    info!("after cancelling: {}", solver.history().clone().cancel());
    ExitCode::SUCCESS
}

fn advance<R: Rng>(solver: &mut GreedySolver, rng: &mut R) {
    let report = solver.step(Htm::MOVE_LIST, rng);
    info!("{report}");
    println!("{}", solver.cube());
}

fn run_repl<R: Rng>(solver: &mut GreedySolver, rng: &mut R) -> io::Result<()> {
    eprintln!("n (or enter): next move, r: redraw, q: quit");
    prompt()?;

    for line in io::stdin().lock().lines() {
        match line?.trim() {
            "" | "n" => advance(solver, rng),
            "r" => println!("{}", solver.cube()),
            "q" => break,
            other => warn!("unknown command `{other}`"),
        }
        prompt()?;
    }

    Ok(())
}

fn prompt() -> io::Result<()> {
    let mut stderr = io::stderr();
    write!(stderr, "> ")?;
    stderr.flush()
}
