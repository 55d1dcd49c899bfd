use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser};
use ringstore::config::Config;
use ringstore::util::human::fmt_seq;
use ringstore::{harness, scenarios, RingStore};
use std::io;

#[derive(Parser, Debug)]
#[command(name = "ringstore", about = "Fixed-capacity ring store with scenario runner", version)]
struct Cli {
    /// Run only the named scenario (repeatable)
    #[arg(short, long)]
    scenario: Vec<String>,

    /// List built-in scenario names and exit
    #[arg(long)]
    list: bool,

    /// Print the scenario summary as JSON
    #[arg(long)]
    json: bool,

    /// Only print failed cases and the summary
    #[arg(short, long)]
    quiet: bool,

    /// Ad-hoc mode: push these comma-separated values into a fresh store
    #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
    push: Option<Vec<i64>>,

    /// Store capacity for --push (defaults to the configured capacity)
    #[arg(short, long, requires = "push")]
    capacity: Option<usize>,

    /// With --push: print the N most recent values, newest first
    #[arg(long, value_name = "N", requires = "push")]
    latest: Option<usize>,

    /// With --push: print the N oldest retained values, oldest first
    #[arg(long, value_name = "N", requires = "push")]
    earliest: Option<usize>,

    /// Print config file path and current values, then exit
    #[arg(long)]
    config: bool,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    completions: Option<clap_complete::Shell>,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        clap_complete::generate(shell, &mut Cli::command(), "ringstore", &mut io::stdout());
        return Ok(());
    }
    if cli.list {
        for s in scenarios::all() {
            println!("{}", s.name);
        }
        return Ok(());
    }

    let cfg = Config::load();
    if cli.config {
        return run_print_config(&cfg);
    }
    if let Some(values) = &cli.push {
        return run_push(&cli, values, &cfg);
    }

    let verbose = cfg.report.verbose && !cli.quiet;
    let json = cli.json || cfg.report.json;
    if !run_scenarios(&cli.scenario, verbose, json)? {
        std::process::exit(1);
    }
    Ok(())
}

fn run_scenarios(names: &[String], verbose: bool, json: bool) -> Result<bool> {
    let selected = if names.is_empty() {
        scenarios::all()
    } else {
        let mut picked = Vec::with_capacity(names.len());
        for name in names {
            match scenarios::find(name) {
                Some(s) => picked.push(s),
                None    => bail!("unknown scenario '{}' (see --list)", name),
            }
        }
        picked
    };

    let summary = harness::run_all(&selected);
    log::info!("{} scenario(s) passed, {} failed", summary.passed, summary.failed);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print!("{}", harness::render_text(&summary, verbose));
    }
    Ok(summary.ok())
}

fn run_push(cli: &Cli, values: &[i64], cfg: &Config) -> Result<()> {
    let capacity = cli.capacity.unwrap_or(cfg.general.capacity);
    let mut store = RingStore::try_new(capacity)
        .with_context(|| format!("reserving ring store of capacity {}", capacity))?;
    store.extend(values.iter().copied());

    println!("size     = {}", store.size());
    println!("capacity = {}", store.capacity());
    println!("filled   = {}", store.is_filled());
    if let Some(n) = cli.latest {
        println!("latest({})   = {}", n, fmt_seq(&store.latest(n)));
    }
    if let Some(n) = cli.earliest {
        println!("earliest({}) = {}", n, fmt_seq(&store.earliest(n)));
    }
    if cli.latest.is_none() && cli.earliest.is_none() {
        println!("contents = {}", fmt_seq(&store.earliest(store.size())));
    }
    Ok(())
}

fn run_print_config(cfg: &Config) -> Result<()> {
    let path = Config::config_path()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "(unknown)".to_string());
    println!("Config: {}", path);
    println!();
    println!("[general]");
    println!("  capacity = {}", cfg.general.capacity);
    println!();
    println!("[report]");
    println!("  verbose  = {}", cfg.report.verbose);
    println!("  json     = {}", cfg.report.json);
    Ok(())
}
