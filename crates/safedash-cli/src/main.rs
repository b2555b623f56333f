//! Safedash command-line dashboard
//!
//! Generates a session dataset and prints the dashboard for a year and
//! factory selection.

mod render;

use anyhow::{bail, Context};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use safedash_core::{DashboardConfig, DashboardSnapshot, Session};
use safedash_model::{Dataset, FilterCriteria};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn cli() -> Command {
    Command::new("safedash")
        .version(safedash_core::VERSION)
        .about("Safety incident dashboard")
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .global(true)
                .value_parser(value_parser!(u64))
                .help("Random seed for reproducible data"),
        )
        .subcommand_required(true)
        .subcommand(Command::new("years").about("List available years, newest first"))
        .subcommand(Command::new("factories").about("List factories present in the data"))
        .subcommand(
            Command::new("summary")
                .about("Show KPIs, monthly trend, risk pivot and detail log")
                .arg(
                    Arg::new("year")
                        .long("year")
                        .value_parser(value_parser!(i32))
                        .help("Year to show (default: latest)"),
                )
                .arg(
                    Arg::new("factory")
                        .long("factory")
                        .action(ArgAction::Append)
                        .help("Factory to include; repeat for several (default: all)"),
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Output as JSON"),
                ),
        )
}

fn load_config(matches: &ArgMatches) -> anyhow::Result<DashboardConfig> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => DashboardConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => DashboardConfig::new(),
    };
    if let Some(&seed) = matches.get_one::<u64>("seed") {
        config = config.with_seed(seed);
    }
    Ok(config)
}

/// Criteria from the summary arguments
///
/// Omitting `--factory` selects every factory in the dataset; the filter
/// itself never widens an empty selection.
fn criteria_from_args(args: &ArgMatches, dataset: &Dataset) -> anyhow::Result<FilterCriteria> {
    let year = match args.get_one::<i32>("year") {
        Some(&year) => year,
        None => match dataset.years().first() {
            Some(&latest) => latest,
            None => bail!("dataset is empty"),
        },
    };

    let criteria = match args.get_many::<String>("factory") {
        Some(labels) => FilterCriteria::from_labels(year, labels),
        None => FilterCriteria::new(year, dataset.factories()),
    };

    if let Err(e) = criteria.validate_against(dataset) {
        tracing::warn!("{}", e);
    }
    Ok(criteria)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = cli().get_matches();
    let config = load_config(&matches)?;
    let session = Session::new(config);
    let dataset = session.dataset().context("generating dataset")?;

    match matches.subcommand() {
        Some(("years", _)) => {
            for year in dataset.years() {
                println!("{year}");
            }
        }
        Some(("factories", _)) => {
            for factory in dataset.factories() {
                println!("{factory}");
            }
        }
        Some(("summary", args)) => {
            let criteria = criteria_from_args(args, &dataset)?;
            let snapshot = DashboardSnapshot::build(&dataset, &criteria);

            if args.get_flag("json") {
                println!("{}", render::render_json(&snapshot)?);
            } else {
                print!("{}", render::render_text(&snapshot));
            }
        }
        _ => {}
    }

    Ok(())
}
