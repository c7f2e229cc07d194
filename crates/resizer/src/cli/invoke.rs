//! The `resizer invoke` command: run one saved S3 event outside Lambda.

use std::path::PathBuf;

use anyhow::Context;
use aws_lambda_events::event::s3::S3Event;
use clap::Args;
use resizer_core::{ImageResizer, InvocationReport};

use super::ConfigSource;

/// Arguments for the `invoke` command.
#[derive(Args, Debug)]
pub struct InvokeArgs {
    /// S3 event JSON file (use `-` for stdin)
    pub event: PathBuf,

    #[command(flatten)]
    pub source: ConfigSource,

    /// Write the report here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Execute the invoke command.
pub async fn execute(args: InvokeArgs) -> anyhow::Result<()> {
    let config = args.source.load()?;
    let event = read_event(&args.event)?;
    tracing::info!("Loaded {} record(s) from {}", event.records.len(), args.event.display());

    let resizer = ImageResizer::new(config, super::s3_store().await);
    let report = resizer.process_event(&event).await?;

    write_report(&report, args.output.as_deref())
}

fn read_event(path: &std::path::Path) -> anyhow::Result<S3Event> {
    let json = if path.as_os_str() == "-" {
        std::io::read_to_string(std::io::stdin()).context("Failed to read event from stdin")?
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read event file {}", path.display()))?
    };
    serde_json::from_str(&json).context("Event is not a valid S3 notification")
}

fn write_report(report: &InvocationReport, output: Option<&std::path::Path>) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    match output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write report to {}", path.display()))?;
            tracing::info!("Report written to {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}
