mod compliance;
mod error;
mod event;
mod handler;
mod report;

use std::sync::Arc;

use lambda_runtime::{handler_fn, Context, Error};
use rusoto_config::ConfigServiceClient;
use rusoto_core::Region;
use tracing::{info_span, Instrument};
use tracing_subscriber::EnvFilter;

use crate::event::ChangeEvent;
use crate::handler::ComplianceEvaluator;
use crate::report::ConfigServiceReporter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        // CloudWatch adds the ingestion time.
        .without_time()
        .with_target(false)
        .init();

    let client = ConfigServiceClient::new(Region::default());
    let evaluator = Arc::new(ComplianceEvaluator::new(
        ConfigServiceReporter::new_with_client(client),
    ));

    lambda_runtime::run(handler_fn(move |event: ChangeEvent, context: Context| {
        let evaluator = Arc::clone(&evaluator);
        async move {
            let span = info_span!("invocation", request_id = %context.request_id);
            evaluator.handle(event).instrument(span).await.map(|_| ())
        }
    }))
    .await?;
    Ok(())
}
