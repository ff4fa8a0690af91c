use anyhow::Result;
use clap::{arg, Arg, ArgAction, ArgMatches, Command};
use knapbench_runner::{
    format_summary, run_benchmark, summarize, BenchmarkConfig, ItemsExport, DEFAULT_EXPORT_ITEMS,
};
use knapbench_utils::load_json;
use std::path::PathBuf;

fn cli() -> Command {
    Command::new("knapbench")
        .about("Benchmarks 0/1 knapsack solvers over a grid of item counts and capacities")
        .arg(
            arg!([CONFIG] "Config json string or path to json file")
                .value_parser(clap::value_parser!(String)),
        )
        .arg(
            arg!(--seed [SEED] "String the instance seeds are derived from")
                .value_parser(clap::value_parser!(String)),
        )
        .arg(
            arg!(--results [RESULTS_FILE] "Path of the results csv")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            arg!(--items [ITEMS_FILE] "Path of the sample item dataset csv")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("no_verify")
                .long("no-verify")
                .help("Skip checking each solver's selection against its claimed value")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let matches = cli().get_matches();

    if let Err(e) = run(&matches) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<()> {
    let mut config = match matches.get_one::<String>("CONFIG") {
        Some(config) => load_json::<BenchmarkConfig>(config)?,
        None => BenchmarkConfig::default(),
    };
    if let Some(seed) = matches.get_one::<String>("seed") {
        config.seed = Some(seed.clone());
    }
    if let Some(path) = matches.get_one::<PathBuf>("results") {
        config.results_path = path.clone();
    }
    if let Some(path) = matches.get_one::<PathBuf>("items") {
        config
            .items_export
            .get_or_insert_with(|| ItemsExport {
                n_items: DEFAULT_EXPORT_ITEMS,
                path: path.clone(),
            })
            .path = path.clone();
    }
    if matches.get_flag("no_verify") {
        config.verify_solutions = false;
    }

    let rows = run_benchmark(config)?;
    println!("\n{}", format_summary(&summarize(&rows)));
    Ok(())
}
