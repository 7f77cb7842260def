use clap::Parser;
use console::style;
use std::path::PathBuf;
use tracing::info;
use wrapfifteen::{
    search::{
        is_solvable, validate, BestFirstSearch, Board, SearchEngine, SearchResult, StrategyName,
        Verbosity,
    },
    PuzzleError, SolverConfig,
};

#[derive(Parser)]
#[command(version)]
/// Solve a wraparound fifteen puzzle with each configured heuristic.
struct Cli {
    #[arg(
        help = "The board file, 16 whitespace separated integers with 0 as the blank",
        default_value = "board.txt"
    )]
    board: PathBuf,
    #[arg(
        help = "A TOML file with solver settings",
        short = 'c',
        long = "config",
        id = "CONFIG"
    )]
    config: Option<PathBuf>,
    #[arg(
        help = "Maximum number of explored states per search, overrides the config file",
        short = 'b',
        long = "budget",
        id = "BUDGET"
    )]
    budget: Option<usize>,
    #[arg(
        value_enum,
        help = "The strategies to run, overrides the config file",
        short = 's',
        long = "strategy",
        id = "STRATEGY"
    )]
    strategies: Vec<StrategyName>,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Silent
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", long = "colour")]
    colour: bool,
}

fn main() {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();
    console::set_colors_enabled(cli.colour);

    if let Err(e) = run(cli) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn load_config(cli: &Cli) -> Result<SolverConfig, PuzzleError> {
    let mut config = match &cli.config {
        Some(path) => SolverConfig::from_path(path)?,
        None => SolverConfig::default(),
    };
    if let Some(budget) = cli.budget {
        config.budget = budget;
    }
    if !cli.strategies.is_empty() {
        config.strategies = cli.strategies.clone();
    }
    info!(budget = config.budget, strategies = ?config.strategies);
    Ok(config)
}

fn run(cli: Cli) -> Result<(), PuzzleError> {
    let config = load_config(&cli)?;
    let board = Board::from_path(&cli.board)?;
    info!("loaded board\n{}", board);

    if !is_solvable(&board)? {
        println!("Not solvable");
        return Ok(());
    }

    for strategy_name in &config.strategies {
        let strategy = strategy_name.create(Board::goal());
        let mut engine = BestFirstSearch::new(config.budget);
        let (result, statistics) = engine.search(&board, strategy.as_ref())?;

        match result {
            SearchResult::Success(solution) => {
                let plan = solution.plan()?;
                validate(&plan, &board)?;
                info!("plan is valid");
                info!(plan_length = plan.len());

                println!(
                    "\n{}\n",
                    style(format!(
                        "Solution using the {} as heuristics:",
                        strategy.name()
                    ))
                    .bold()
                );
                println!(
                    "Time taken to find the solution: {}",
                    humantime::format_duration(statistics.elapsed())
                );
                println!("Number of states generated: {}", solution.explored_states);
                println!("Moves required to return to canonical form of the board:");
                println!("{}", plan);
            }
            SearchResult::BudgetExceeded { budget } => {
                println!(
                    "\n{}",
                    style(format!(
                        "More than {} states generated using the {} heuristic, \
                        no solution found yet....",
                        budget,
                        strategy.name()
                    ))
                    .yellow()
                );
                println!("Discontinued");
            }
            SearchResult::FrontierExhausted => {
                println!(
                    "\n{}",
                    style(format!(
                        "Every reachable board was expanded using the {} heuristic \
                        without reaching the goal",
                        strategy.name()
                    ))
                    .red()
                );
            }
        }
    }

    Ok(())
}
