use anyhow::Context;
use chatter::styling::{eprintln, error_line};
use chatter::{Flag, OutputConfig, Setting};
use clap::Parser;

mod cli;

use cli::Cli;

fn init_logging() {
    // RUST_LOG takes precedence; the library only logs at debug level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();
}

/// Layer config file < environment < flags
fn resolve_config(cli: &Cli) -> anyhow::Result<OutputConfig> {
    let mut config = OutputConfig::default();
    if let Some(path) = &cli.config {
        let file = OutputConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?;
        config = config.merge(file);
    }
    let env = OutputConfig::from_env().context("invalid CHATTER_* environment variable")?;
    Ok(config.merge(env).merge(cli.overrides()))
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = resolve_config(&cli)?;
    log::debug!("Resolved output config: {config:?}");

    // Flags owned here, shared with the default emitter
    let quiet = Flag::default();
    let verbose = Flag::default();
    let sync = Flag::default();
    chatter::defaults([
        Setting::Quiet(quiet.clone()),
        Setting::Verbose(verbose.clone()),
        Setting::Sync(sync.clone()),
    ]);
    chatter::with_default(|emitter| config.apply(emitter));
    log::debug!(
        "quiet={} verbose={} sync={}",
        quiet.get(),
        verbose.get(),
        sync.get()
    );

    let message = cli.message();
    match cli.action.verb() {
        Some(verb) => chatter::say(verb, message),
        None => chatter::die(message),
    }
    Ok(())
}

fn main() {
    init_logging();

    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("{}", error_line(format!("{err:#}")));
        std::process::exit(1);
    }
}
