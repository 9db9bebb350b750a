use std::process;

use clap::Parser;
use githublink::Cli;

fn main() {
    // Initialize tracing subscriber with RUST_LOG environment variable support
    // Default to "warn" level if RUST_LOG is not set
    // Write to stderr so logs never mix with a printed link
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    // Usage errors exit 1 like every other failure; --help and --version exit 0
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = i32::from(e.use_stderr());
            let _ = e.print();
            process::exit(code);
        }
    };

    if let Err(e) = cli.execute() {
        eprintln!("Error: {e}");

        for cause in e.chain().skip(1) {
            eprintln!("  Caused by: {cause}");
        }

        process::exit(1);
    }
}
