use clap::Parser;
use tracing::{debug, error, trace};

use timecal::app;
use timecal::clock::SystemClock;

/// Calculate the time after a duration, with an optional reference time
#[derive(Parser)]
#[command(name = "timecal")]
#[command(
    about = "Calculate the time after a duration, wrapping across midnight",
    long_about = None,
    after_help = "Examples:\n  timecal 09:34 1:48   # prints 11:22\n  timecal 23:12 2:54   # prints 02:06\n\nWith no arguments, timecal enters interactive mode."
)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Optional reference time (HH:MM) followed by a duration ([HH:]MM)
    #[arg(value_name = "TIME", allow_hyphen_values = true)]
    tokens: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .with_target(cli.verbose >= 2)
        .init();

    debug!("timecal started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    if let Err(e) = run(cli) {
        error!("Fatal error: {}", e);
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let clock = SystemClock;

    if cli.tokens.iter().any(|t| app::is_help_token(t)) {
        print!("{}", app::USAGE);
        return Ok(());
    }

    match cli.tokens.as_slice() {
        [] => app::run_interactive(&clock, std::io::stdin().lock(), std::io::stdout()),
        [duration] => {
            println!("{}", app::run_once(&clock, None, duration)?);
            Ok(())
        }
        [reference, duration] => {
            println!("{}", app::run_once(&clock, Some(reference), duration)?);
            Ok(())
        }
        tokens => {
            eprint!("{}", app::USAGE);
            anyhow::bail!("expected at most two arguments, got {}", tokens.len());
        }
    }
}
