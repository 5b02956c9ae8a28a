//! Bulls and Cows - CLI
//!
//! Play the 4-digit guessing game in the terminal, or let the solver play.

use anyhow::{Result, anyhow};
use bulls_and_cows::{
    commands::{
        PlayConfig, PlayOutcome, SolveConfig, analyze_guess, run_assist, run_benchmark, run_play,
        solve_secret,
    },
    core::{Code, evaluate},
    game::Game,
    logging,
    output::{print_analysis_result, print_benchmark_result, print_score_result, print_solve_result},
    solver::{Solver, StrategyType},
};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "bulls_and_cows",
    about = "Bulls and Cows: guess 4 distinct digits, scored in bullseyes and hits",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Solver strategy: minimax (default), entropy, random
    #[arg(short, long, global = true, default_value = "minimax")]
    strategy: String,

    /// Seed for the random secret (reproducible games)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI game (default)
    Tui,

    /// Classic line-by-line console game
    Play {
        /// Ask again after a malformed guess instead of exiting with an error
        #[arg(long)]
        retry: bool,
    },

    /// You hold the secret, the solver guesses
    Assist,

    /// Let the solver find a specific secret
    Solve {
        /// The secret to solve
        secret: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Score one guess against a secret
    Score {
        /// The secret code
        secret: String,

        /// The guess to score
        guess: String,
    },

    /// Show how a guess splits all possible secrets
    Analyze {
        /// Guess to analyze
        guess: String,
    },

    /// Benchmark solver performance
    Benchmark {
        /// Number of random secrets to test
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Test every possible secret instead of a random sample
        #[arg(long)]
        all: bool,
    },
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();
    let all_codes = Code::all();

    // Default to the TUI if no command given
    let command = cli.command.unwrap_or(Commands::Tui);

    match command {
        Commands::Tui => run_tui_command(&all_codes, cli.seed),
        Commands::Play { retry } => run_play_command(cli.seed, retry),
        Commands::Assist => run_assist_command(&cli.strategy, cli.seed, &all_codes),
        Commands::Solve { secret, verbose } => {
            run_solve_command(&cli.strategy, cli.seed, &secret, verbose, &all_codes)
        }
        Commands::Score { secret, guess } => run_score_command(&secret, &guess),
        Commands::Analyze { guess } => run_analyze_command(&guess, &all_codes),
        Commands::Benchmark { count, all } => {
            run_benchmark_command(&cli.strategy, count, all, cli.seed, &all_codes);
            Ok(())
        }
    }
}

fn run_tui_command(all_codes: &[Code], seed: Option<u64>) -> Result<()> {
    use bulls_and_cows::interactive::{App, run_tui};

    let app = App::new(all_codes, seed);
    run_tui(app)
}

fn run_play_command(seed: Option<u64>, retry: bool) -> Result<()> {
    let mut game = Game::random(&mut make_rng(seed));
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let outcome = run_play(&mut game, stdin.lock(), &mut stdout, PlayConfig { retry })?;
    info!(?outcome, "console game ended");

    if let PlayOutcome::EndOfInput = outcome {
        println!("\nThe secret was {}", game.secret());
    }
    Ok(())
}

fn run_assist_command(strategy_name: &str, seed: Option<u64>, all_codes: &[Code]) -> Result<()> {
    let strategy = StrategyType::from_name_seeded(strategy_name, seed);
    let solver = Solver::new(strategy, all_codes, all_codes);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_assist(&solver, stdin.lock(), &mut stdout)
}

fn run_solve_command(
    strategy_name: &str,
    seed: Option<u64>,
    secret: &str,
    verbose: bool,
    all_codes: &[Code],
) -> Result<()> {
    let strategy = StrategyType::from_name_seeded(strategy_name, seed);
    let solver = Solver::new(strategy, all_codes, all_codes);

    let config = SolveConfig::new(secret.to_string());
    let result = solve_secret(config, &solver).map_err(|e| anyhow!(e))?;

    print_solve_result(&result, verbose);
    Ok(())
}

fn run_score_command(secret: &str, guess: &str) -> Result<()> {
    let secret = Code::new(secret).map_err(|e| anyhow!("Invalid secret: {e}"))?;
    let score = evaluate(&secret, guess).map_err(|e| anyhow!("Invalid guess: {e}"))?;
    let guess = Code::new(guess)?;

    print_score_result(&secret, &guess, score);
    Ok(())
}

fn run_analyze_command(guess: &str, all_codes: &[Code]) -> Result<()> {
    let result = analyze_guess(guess, all_codes).map_err(|e| anyhow!(e))?;
    print_analysis_result(&result);
    Ok(())
}

fn run_benchmark_command(
    strategy_name: &str,
    count: usize,
    all: bool,
    seed: Option<u64>,
    all_codes: &[Code],
) {
    let strategy = StrategyType::from_name_seeded(strategy_name, seed);
    let name = strategy.name();
    let solver = Solver::new(strategy, all_codes, all_codes);

    let secrets: Vec<Code> = if all {
        all_codes.to_vec()
    } else {
        let mut rng = make_rng(seed);
        (0..count).map(|_| Code::random(&mut rng)).collect()
    };

    println!("Running {name} benchmark on {} secrets...", secrets.len());

    let result = run_benchmark(&solver, &secrets, true);
    print_benchmark_result(&result);
}
