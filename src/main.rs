//! Command-line entry: explore a guarded-command system and print every
//! expanded state.

use anyhow::{Context, Result};
use clap::Parser;
use gcmd::builder::{System, SystemBuilder, SystemDef};
use gcmd::explore::{ExploreConfig, Explorer, Reachability, SearchOrder};
use log::{debug, info, LevelFilter};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Variables of the built-in system used when no file is given.
const DEFAULT_VARIABLES: [&str; 3] = ["a", "b", "c"];

/// Explore the states reachable through a set of guarded commands.
#[derive(Debug, Parser)]
#[command(name = "gcmd", version)]
struct Arguments {
    /// If given, enables more verbose logging.
    #[arg(long, global = true)]
    debug: bool,

    /// Work-list order, overriding the definition's config.
    #[arg(long, value_enum)]
    order: Option<SearchOrder>,

    /// Abort once more than this many states are discovered.
    #[arg(long)]
    max_states: Option<usize>,

    /// JSON system definition. Without it, three variables and no commands are explored.
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,
}

fn load(args: &Arguments) -> Result<(System, ExploreConfig)> {
    let Some(path) = &args.file else {
        debug!("No definition given; using built-in system");
        let system = SystemBuilder::new().variables(DEFAULT_VARIABLES).build()?;
        return Ok((system, ExploreConfig::default()));
    };

    debug!("Reading system definition '{}'...", path.display());
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read system definition '{}'", path.display()))?;
    let mut def = SystemDef::from_json(&json)
        .with_context(|| format!("Failed to parse system definition '{}'", path.display()))?;
    let config = std::mem::take(&mut def.config);
    let system = def
        .build()
        .with_context(|| format!("Failed to resolve system definition '{}'", path.display()))?;
    Ok((system, config))
}

impl Arguments {
    /// Apply command-line overrides on top of a definition's config.
    fn configure(&self, mut config: ExploreConfig) -> ExploreConfig {
        if let Some(order) = self.order {
            config = config.order(order);
        }
        if let Some(limit) = self.max_states {
            config = config.max_states(limit);
        }
        config
    }
}

/// Explore the selected system, writing one `Processing` line per expanded state.
fn run(args: &Arguments, out: &mut impl Write) -> Result<Reachability> {
    let (system, config) = load(args)?;
    let config = args.configure(config);
    for cmd in system.commands() {
        debug!("{}", cmd.display(system.variables()));
    }

    let mut written = Ok(());
    let graph = Explorer::new(&system)
        .with_config(config)
        .run_with(|state| {
            if written.is_ok() {
                written = writeln!(out, "Processing {state}");
            }
        })
        .context("Exploration failed")?;
    written.context("Failed to write output")?;
    Ok(graph)
}

fn main() -> Result<()> {
    let args = Arguments::parse();

    env_logger::Builder::new()
        .filter_level(if args.debug {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        })
        .parse_default_env()
        .init();
    info!("{} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let graph = run(&args, &mut io::stdout().lock())?;
    info!(
        "{} reachable state(s), {} terminal",
        graph.len(),
        graph.terminal_states().len()
    );
    Ok(())
}
