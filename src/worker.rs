use std::path::PathBuf;

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use tokio::sync::watch;
use tracing::{error, info};

use crate::config::{PollConfig, WorkerConfig};
use crate::errors::WorkerError;
use crate::queue::{QueueClient, QueueMessage};
use crate::render::{DocumentRenderer, render_from_template};

/// The poll → process → acknowledge loop.
///
/// One `WorkerLoop` owns one queue client and the queue URLs it resolved at
/// construction; everything is read-only after that. Messages in a batch are
/// processed sequentially, and a failure in any step of one message is logged
/// and isolated to that message: the source message stays in the queue and
/// is redelivered by the service after its visibility timeout.
#[derive(Debug)]
pub struct WorkerLoop<Q, R>
where
    Q: QueueClient,
    R: DocumentRenderer,
{
    queue: Q,
    renderer: R,
    source_queue_url: String,
    output_queue_url: String,
    template_path: PathBuf,
    staging_path: Option<PathBuf>,
    poll: PollConfig,
}

impl<Q, R> WorkerLoop<Q, R>
where
    Q: QueueClient,
    R: DocumentRenderer,
{
    /// Resolves the configured queue name(s) and builds the loop.
    ///
    /// Resolution happens exactly once, here; the URLs are cached for the
    /// process lifetime. Failure to resolve either name is fatal; the loop
    /// must not start without a destination.
    pub async fn connect(
        queue: Q,
        renderer: R,
        config: &WorkerConfig,
        poll: PollConfig,
    ) -> Result<Self, WorkerError> {
        let source_queue_url = queue.resolve_queue_url(&config.queue_name).await?;
        let output_queue_url = match &config.output_queue_name {
            Some(name) => queue.resolve_queue_url(name).await?,
            None => source_queue_url.clone(),
        };

        Ok(WorkerLoop {
            queue,
            renderer,
            source_queue_url,
            output_queue_url,
            template_path: config.template_path.clone(),
            staging_path: config.staging_path.clone(),
            poll,
        })
    }

    /// Runs until the shutdown signal flips to `true`.
    ///
    /// Outer cycle: one consumption pass, then a pause before the next. The
    /// pause doubles as backoff after a pass that ended on a receive error.
    /// Cancellation is cooperative: a message being processed when the signal
    /// arrives finishes (or fails) before the loop observes it and exits.
    pub async fn run(&self, mut shutdown: watch::Receiver<bool>) {
        while !*shutdown.borrow() {
            info!("waiting for messages to generate slips");
            self.run_pass(&mut shutdown).await;

            if *shutdown.borrow() {
                break;
            }

            tokio::select! {
                _ = tokio::time::sleep(self.poll.pass_pause) => {}
                changed = shutdown.changed() => {
                    if changed.is_err() {
                        break;
                    }
                }
            }
        }

        info!("worker loop stopped");
    }

    /// One consumption pass: long-poll receive until cancelled or the
    /// receive call fails. An empty result just polls again.
    async fn run_pass(&self, shutdown: &mut watch::Receiver<bool>) {
        loop {
            if *shutdown.borrow() {
                return;
            }

            let received = tokio::select! {
                received = self.queue.receive(
                    &self.source_queue_url,
                    self.poll.max_number_of_messages,
                    self.poll.wait_time_seconds,
                ) => received,
                _ = shutdown.changed() => return,
            };

            let messages = match received {
                Ok(messages) => messages,
                Err(e) => {
                    error!("error receiving messages from the queue: {e}");
                    return;
                }
            };

            for message in &messages {
                self.process_message(message).await;
            }
        }
    }

    /// Render, forward, then acknowledge one message.
    ///
    /// The delete call is only reached after a successful render and send;
    /// an earlier failure leaves the message for redelivery. A failed delete
    /// is logged and tolerated, so the same message may be processed again
    /// (at-least-once delivery).
    async fn process_message(&self, message: &QueueMessage) {
        info!("message received: {}", message.body);

        let document = match render_from_template(
            &self.renderer,
            &self.template_path,
            self.staging_path.as_deref(),
        ) {
            Ok(document) => document,
            Err(e) => {
                error!("error rendering slip document: {e}");
                return;
            }
        };
        info!("slip document generated ({} bytes)", document.len());

        let body = BASE64.encode(&document);
        let message_id = match self.queue.send(&self.output_queue_url, body).await {
            Ok(message_id) => message_id,
            Err(e) => {
                error!("error sending slip document to the queue: {e}");
                return;
            }
        };
        info!("slip document sent to the queue, message id: {message_id}");

        if let Err(e) = self
            .queue
            .delete(&self.source_queue_url, &message.receipt_handle)
            .await
        {
            error!("error deleting message from the queue: {e}");
        }
    }
}
