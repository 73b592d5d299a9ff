use async_trait::async_trait;
use tracing::warn;

use crate::errors::WorkerError;

/// One delivery of a queue message.
///
/// The receipt handle identifies this specific delivery and is required to
/// acknowledge (delete) the message; the body is opaque text as far as the
/// worker is concerned.
#[derive(Debug, Clone)]
pub struct QueueMessage {
    pub receipt_handle: String,
    pub body: String,
}

/// Narrow interface over the queue service.
///
/// The worker loop only ever talks to the queue through this trait, so tests
/// can drive it with an in-memory implementation.
#[async_trait]
pub trait QueueClient: Send + Sync {
    /// Resolves a human-readable queue name to its queue URL.
    async fn resolve_queue_url(&self, queue_name: &str) -> Result<String, WorkerError>;

    /// Receives up to `max_messages` messages, long-polling for up to
    /// `wait_time_seconds`. An empty result is not an error.
    async fn receive(
        &self,
        queue_url: &str,
        max_messages: i32,
        wait_time_seconds: i32,
    ) -> Result<Vec<QueueMessage>, WorkerError>;

    /// Sends a message and returns the service-assigned message id.
    async fn send(&self, queue_url: &str, body: String) -> Result<String, WorkerError>;

    /// Deletes one delivery by its receipt handle.
    async fn delete(&self, queue_url: &str, receipt_handle: &str) -> Result<(), WorkerError>;
}

/// `QueueClient` backed by AWS SQS.
pub struct SqsQueue {
    client: aws_sdk_sqs::Client,
}

impl SqsQueue {
    pub fn new(client: aws_sdk_sqs::Client) -> Self {
        SqsQueue { client }
    }
}

#[async_trait]
impl QueueClient for SqsQueue {
    async fn resolve_queue_url(&self, queue_name: &str) -> Result<String, WorkerError> {
        let output = self
            .client
            .get_queue_url()
            .queue_name(queue_name)
            .send()
            .await
            .map_err(|e| WorkerError::QueueUrl(queue_name.to_string(), e.to_string()))?;

        output
            .queue_url()
            .map(str::to_string)
            .ok_or_else(|| {
                WorkerError::QueueUrl(queue_name.to_string(), "no queue URL in response".into())
            })
    }

    async fn receive(
        &self,
        queue_url: &str,
        max_messages: i32,
        wait_time_seconds: i32,
    ) -> Result<Vec<QueueMessage>, WorkerError> {
        let output = self
            .client
            .receive_message()
            .queue_url(queue_url)
            .max_number_of_messages(max_messages)
            .wait_time_seconds(wait_time_seconds)
            .send()
            .await
            .map_err(|e| WorkerError::Receive(e.to_string()))?;

        let messages = output
            .messages()
            .iter()
            .filter_map(|message| match (message.receipt_handle(), message.body()) {
                (Some(receipt_handle), Some(body)) => Some(QueueMessage {
                    receipt_handle: receipt_handle.to_string(),
                    body: body.to_string(),
                }),
                _ => {
                    warn!("skipping a message without a body or receipt handle");
                    None
                }
            })
            .collect();

        Ok(messages)
    }

    async fn send(&self, queue_url: &str, body: String) -> Result<String, WorkerError> {
        let output = self
            .client
            .send_message()
            .queue_url(queue_url)
            .message_body(body)
            .send()
            .await
            .map_err(|e| WorkerError::Send(e.to_string()))?;

        Ok(output.message_id().unwrap_or_default().to_string())
    }

    async fn delete(&self, queue_url: &str, receipt_handle: &str) -> Result<(), WorkerError> {
        self.client
            .delete_message()
            .queue_url(queue_url)
            .receipt_handle(receipt_handle)
            .send()
            .await
            .map_err(|e| WorkerError::Delete(e.to_string()))?;

        Ok(())
    }
}
