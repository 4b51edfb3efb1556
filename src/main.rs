//! `urlv`: inspect and compose URLs from the command line

use clap::Parser;
use url_value::{cli::UrlCommand, init_logger_with_config, init_logger_with_env, log_debug, log_error};

#[derive(Parser)]
#[command(name = "urlv")]
#[command(about = "Parse, modify and assemble URLs")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    #[command(subcommand)]
    command: UrlCommand,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Log level (trace, debug, info, warn, error); RUST_LOG is used when unset
    #[arg(long, global = true)]
    log_level: Option<String>,
}

fn main() {
    let cli = Cli::parse();

    match (cli.verbose, cli.log_level.as_deref()) {
        (true, _) => init_logger_with_config("debug"),
        (false, Some(level)) => init_logger_with_config(level),
        (false, None) => init_logger_with_env(),
    }

    log_debug!("Running {:?}", cli.command);

    match cli.command.execute() {
        Ok(output) => println!("{}", output),
        Err(e) => {
            log_error!("Command failed: {:#}", e);
            eprintln!("urlv error: {:#}", e);
            std::process::exit(1);
        }
    }
}
