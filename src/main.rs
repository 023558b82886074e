use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use camel_odds::report::{BoardReport, MarkerTable, OutcomeTable, StartTable};
use camel_odds::{analyse_starts, estimate_markers, estimate_outcomes, Board, ConfigError, SimConfig};
use clap::Parser;

/// Estimate camel race leg odds from boards read on stdin
#[derive(Parser)]
struct Args {
    /// JSON config file; flags below override it
    #[clap(short, long)]
    config: Option<PathBuf>,
    /// Rollouts per outcome estimate
    #[clap(short, long)]
    trials: Option<u32>,
    /// Rollouts per marker placement option
    #[clap(short, long)]
    marker_trials: Option<u32>,
    /// How far past the lead camel markers may go
    #[clap(short, long)]
    reach: Option<i32>,
    /// Seed for reproducible runs
    #[clap(short, long)]
    seed: Option<u64>,
    /// Don't place random markers during rollouts
    #[clap(long)]
    no_explore: bool,
    /// Tabulate wins by starting profile on random boards instead
    #[clap(long)]
    analyse: bool,
    /// Print one JSON object per board instead of tables
    #[clap(long)]
    json: bool,
}

impl Args {
    fn config(&self) -> Result<SimConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => SimConfig::from_json_file(path)?,
            None => SimConfig::default(),
        };
        if let Some(trials) = self.trials {
            config.trials = trials;
        }
        if let Some(trials) = self.marker_trials {
            config.marker_trials = trials;
        }
        if let Some(reach) = self.reach {
            config.max_reach = reach;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if self.no_explore {
            config.explore_markers = false;
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = match args.config() {
        Ok(config) => config,
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(2);
        }
    };

    if args.analyse {
        match analyse_starts(&config) {
            Ok(analysis) => print!("{}", StartTable(&analysis)),
            Err(err) => {
                log::error!("{}", err);
                std::process::exit(2);
            }
        }
        return;
    }

    if let Err(err) = read_loop(&config, args.json) {
        log::error!("{}", err);
        std::process::exit(1);
    }
}

/// Estimate every board line on stdin until EOF.
fn read_loop(config: &SimConfig, json: bool) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let board: Board = match line.parse() {
            Ok(board) => board,
            Err(err) => {
                log::error!("bad board {:?}: {}", line, err);
                continue;
            }
        };
        log::info!("estimating {}", board);

        let outcomes = estimate_outcomes(&board, config).map_err(invalid_config)?;
        let markers = estimate_markers(&board, config).map_err(invalid_config)?;

        if json {
            let report = BoardReport::new(&board, &outcomes, &markers).to_json()?;
            writeln!(stdout, "{}", report)?;
        } else {
            write!(stdout, "{}", OutcomeTable(&outcomes))?;
            write!(stdout, "{}", MarkerTable(&markers))?;
            writeln!(stdout)?;
        }
        stdout.flush()?;
    }
    Ok(())
}

fn invalid_config(err: ConfigError) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, err)
}
