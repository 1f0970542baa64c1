use std::error::Error as _;
use std::path::PathBuf;
use std::process::ExitCode;

use argh::FromArgs;

use powerrank::config::RunConfig;
use powerrank::error::{PowerRankError, Result};
use powerrank::rankings::{Season, Week};
use powerrank::stats::ContiguousStrategy;

#[derive(FromArgs, Debug)]
/// Power ranking statistics and charts
struct Args {
    /// log debug output
    #[argh(switch, short = 'v')]
    verbose: bool,

    #[argh(subcommand)]
    command: Command,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Command {
    MaxSum(MaxSumArgs),
    Rank(RankArgs),
    Plot(PlotArgs),
}

#[derive(FromArgs, Debug)]
/// print the maximum sum of any contiguous run of values
/// (put `--` before the values when the first one is negative)
#[argh(subcommand, name = "maxsum")]
struct MaxSumArgs {
    /// how to search: exhaustive (every window) or scan (linear)
    #[argh(option, short = 's', default = "ContiguousStrategy::Exhaustive")]
    strategy: ContiguousStrategy,

    /// the values
    #[argh(positional)]
    values: Vec<i64>,
}

#[derive(FromArgs, Debug)]
/// print the consensus ranking of a week with mean and standard deviation
#[argh(subcommand, name = "rank")]
struct RankArgs {
    /// path to the run config (TOML)
    #[argh(option, short = 'c')]
    config: PathBuf,

    /// week to print, defaults to current_week
    #[argh(option, short = 'w')]
    week: Option<u32>,
}

#[derive(FromArgs, Debug)]
/// write box plot and scatter charts
#[argh(subcommand, name = "plot")]
struct PlotArgs {
    /// path to the run config (TOML)
    #[argh(option, short = 'c')]
    config: PathBuf,

    /// last week to chart, defaults to current_week
    #[argh(option, short = 'w')]
    week: Option<u32>,

    /// chart every week instead of only the last one
    #[argh(switch)]
    all: bool,
}

fn main() -> ExitCode {
    let args: Args = argh::from_env();

    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err);
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {}", cause);
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::MaxSum(args) => max_sum(args),
        Command::Rank(args) => rank(args),
        Command::Plot(args) => plot(args),
    }
}

fn max_sum(args: MaxSumArgs) -> Result<()> {
    let best = args.strategy.max_contiguous_sum(&args.values)?;
    log::debug!("{} values, strategy {}", args.values.len(), args.strategy);
    println!("{}", best);
    Ok(())
}

fn load_season(config: &RunConfig, up_to: Option<u32>) -> Result<Season> {
    let mut config = config.clone();
    if let Some(week) = up_to {
        if !config.weeks().contains(&week) {
            return Err(PowerRankError::InvalidArgument(format!(
                "week {} is outside {}..={}",
                week, config.first_week, config.current_week
            )));
        }
        config.current_week = week;
    }
    Season::load(&config)
}

fn rank(args: RankArgs) -> Result<()> {
    let config = RunConfig::from_file(&args.config)?;
    let season = load_season(&config, args.week)?;
    print_week(season.current());
    Ok(())
}

fn print_week(week: &Week) {
    println!("{} power rankings, week {}", week.league(), week.week_no());
    for (idx, team) in week.power_rankings().iter().enumerate() {
        match week.stats(team) {
            Some(stats) => println!(
                "{:>3} {:<24} mean {:>6.2}  std {:>5.2}",
                idx + 1,
                team,
                stats.mean,
                stats.std
            ),
            None => println!("{:>3} {}", idx + 1, team),
        }
    }
}

#[cfg(feature = "visualization")]
fn plot(args: PlotArgs) -> Result<()> {
    use powerrank::io::teams::{read_team_colors, read_team_names, TeamColors, TeamNames};
    use powerrank::vis::ChartWriter;

    let config = RunConfig::from_file(&args.config)?;
    let season = load_season(&config, args.week)?;

    let colors = match &config.colors_file {
        Some(path) => read_team_colors(config.resolve(path))?,
        None => TeamColors::new(),
    };
    let names = match &config.team_names_file {
        Some(path) => read_team_names(config.resolve(path))?,
        None => TeamNames::new(),
    };

    let writer = ChartWriter::new(&config, &colors, &names);
    let written = if args.all {
        writer.all_weeks(season.weeks())?
    } else {
        writer.current_week(season.weeks())?
    };

    for path in written {
        println!("{}", path.display());
    }
    Ok(())
}

#[cfg(not(feature = "visualization"))]
fn plot(_args: PlotArgs) -> Result<()> {
    Err(PowerRankError::Visualization(
        "built without the `visualization` feature".into(),
    ))
}
