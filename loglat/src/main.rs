use clap::{Parser, Subcommand};
use loglat_core::cli::{self, AnalyzeArgs, ConfigOverrides};
use loglat_core::logging::{LogFormat, default_log_format, init_logging};

#[derive(Parser, Debug)]
#[command(
    name = "loglat",
    version,
    about = "loglat: latency percentiles from log files"
)]
struct Cli {
    /// Log output format (defaults to pretty on a terminal, JSON otherwise)
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scan a log file and report latency statistics
    Analyze(AnalyzeArgs),

    /// Validate configuration and exit
    Check {
        #[command(flatten)]
        overrides: ConfigOverrides,
    },
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.log_format.unwrap_or_else(default_log_format));

    let result = match cli.command {
        Command::Analyze(args) => cli::run(args).map(|_| ()),
        Command::Check { overrides } => cli::check(&overrides),
    };

    if let Err(e) = result {
        eprintln!("loglat: {e:#}");
        std::process::exit(1);
    }
}
