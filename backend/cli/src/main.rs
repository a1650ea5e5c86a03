mod config;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use funclog::{
    init_logger, log_cleanup, logfln, logflln, loglln, logln, program_identity, FuncLogLayer,
    Severity,
};

use config::Config;

#[derive(Parser)]
#[command(name = "funclog-demo")]
#[command(about = "Writes a few records through every funclog macro shape")]
#[command(version)]
struct Cli {
    /// Threshold: debug, info, warning or error (overrides FUNCLOG_LEVEL)
    #[arg(short, long)]
    level: Option<Severity>,

    /// Log directory (overrides FUNCLOG_DIR)
    #[arg(short, long)]
    dir: Option<String>,

    /// Disable the log file sink
    #[arg(long)]
    no_file: bool,

    /// Disable the console sink
    #[arg(long)]
    no_console: bool,

    /// Initialize twice, which is a fatal usage error
    #[arg(long)]
    double_init: bool,

    /// Also forward `tracing` events into the logger
    #[arg(long)]
    tracing: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(level) = cli.level {
        config.level = level;
    }
    if let Some(dir) = cli.dir {
        config.log_dir = Some(dir);
    }

    let options = config.logger_options(!cli.no_file, !cli.no_console);
    let program = program_identity();
    init_logger(&options, program.as_deref());
    if cli.double_init {
        init_logger(&options, program.as_deref());
    }

    if cli.tracing {
        tracing_subscriber::registry()
            .with(FuncLogLayer::new())
            .init();
        tracing::info!(sinks = "file+console", "Forwarded through tracing");
    }

    logln!("Log from logln!()");
    loglln!(Severity::Info, "Log from loglln!() at level {}", Severity::Info);
    logfln!("Log from logfln!()");
    logflln!(Severity::Debug, "Log from logflln!() at level {}", Severity::Debug);

    log_cleanup();
    Ok(())
}
