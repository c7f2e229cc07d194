//! The Lambda runtime loop.

use std::sync::Arc;

use aws_lambda_events::event::s3::S3Event;
use clap::Args;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use resizer_core::ImageResizer;
use tracing::Instrument;

use super::ConfigSource;

/// Arguments for the `serve` command.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    #[command(flatten)]
    pub source: ConfigSource,
}

/// Load config, build one S3 client, and serve invocations until shutdown.
///
/// Configuration is validated before the runtime starts polling, so a
/// missing variable fails the init phase instead of the first invocation.
pub async fn execute(args: ServeArgs) -> anyhow::Result<()> {
    let config = args.source.load()?;
    tracing::info!(
        size = %config.size,
        extension = %config.extension,
        filter = config.filter.as_str(),
        "Resizer configured"
    );

    let resizer = ImageResizer::new(config, super::s3_store().await);
    run(Arc::new(resizer)).await
}

async fn run(resizer: Arc<ImageResizer>) -> anyhow::Result<()> {
    lambda_runtime::run(service_fn(|event| {
        let resizer = Arc::clone(&resizer);
        async move { function_handler(event, &resizer).await }
    }))
    .await
    .map_err(|e| anyhow::anyhow!(e))
}

/// Handle one S3 notification.
///
/// Logs for the invocation are grouped under a span carrying the request id.
pub(crate) async fn function_handler(
    event: LambdaEvent<S3Event>,
    resizer: &ImageResizer,
) -> Result<(), Error> {
    let span = tracing::info_span!("invocation", request_id = %event.context.request_id);
    let report = resizer.process_event(&event.payload).instrument(span).await?;
    tracing::debug!("Invocation produced {} image(s)", report.len());
    Ok(())
}
