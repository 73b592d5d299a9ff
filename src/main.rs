use boleto_worker::client::create_sqs_client_with_credentials;
use boleto_worker::config::{PollConfig, WorkerConfig};
use boleto_worker::errors::WorkerError;
use boleto_worker::queue::SqsQueue;
use boleto_worker::render::HtmlSlipRenderer;
use boleto_worker::worker::WorkerLoop;
use tokio::sync::watch;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), WorkerError> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    // Incomplete configuration or an unresolvable queue name aborts here,
    // before the loop starts.
    let config = WorkerConfig::from_env()?;
    let sqs_client = create_sqs_client_with_credentials(
        &config.access_key_id,
        &config.secret_access_key,
        &config.region,
    );

    let worker = WorkerLoop::connect(
        SqsQueue::new(sqs_client),
        HtmlSlipRenderer::default(),
        &config,
        PollConfig::default(),
    )
    .await?;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("shutdown signal received");
            let _ = shutdown_tx.send(true);
        }
    });

    worker.run(shutdown_rx).await;

    Ok(())
}
