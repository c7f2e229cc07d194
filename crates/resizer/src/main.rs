//! Resizer - AWS Lambda that resizes JPEG uploads and writes the copy back to S3.
//!
//! Deployed as a Lambda bootstrap the binary runs with no arguments and
//! serves S3 `ObjectCreated` notifications. The same binary can process a
//! saved event locally, which is handy when testing bucket permissions.
//!
//! # Usage
//!
//! ```bash
//! # Run the Lambda runtime loop (the default)
//! resizer serve
//!
//! # Process a saved S3 event against real buckets
//! NEW_SIZE=50x50 NEW_IMAGE_DESCRIPTION="awesome image" NEW_IMAGE_EXTENSION=.jpeg \
//!     resizer invoke event.json
//!
//! # Print the resolved configuration
//! resizer config show --config resizer.toml
//! ```

use clap::{Parser, Subcommand};

mod cli;
mod logging;

/// Resizer - resize S3 JPEG uploads to a fixed size.
#[derive(Parser, Debug)]
#[command(name = "resizer")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format (always on inside Lambda)
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve S3 notifications through the Lambda runtime API
    Serve(cli::serve::ServeArgs),

    /// Process one S3 event JSON file and print the report
    Invoke(cli::invoke::InvokeArgs),

    /// View configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose, cli.json_logs);
    tracing::debug!("Resizer v{}", resizer_core::VERSION);

    // Dispatch to the appropriate command handler
    match cli.command {
        None => cli::serve::execute(cli::serve::ServeArgs::default()).await,
        Some(Commands::Serve(args)) => cli::serve::execute(args).await,
        Some(Commands::Invoke(args)) => cli::invoke::execute(args).await,
        Some(Commands::Config(args)) => cli::config::execute(args).await,
    }
}
