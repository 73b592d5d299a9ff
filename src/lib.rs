//! # Boleto Worker
//!
//! A queue-driven worker that polls an AWS SQS queue, renders a payment slip
//! document from a fixed HTML template for every message, publishes the
//! rendered artifact back onto a queue, and acknowledges the source message.
//!
//! ## Features
//!
//! - Asynchronous SQS long polling with tokio
//! - Per-message fault isolation: render, send, and delete failures are
//!   logged and leave the message for queue redelivery
//! - Delete-after-success semantics (at-least-once delivery)
//! - Trait seams for the queue client and the document renderer
//! - Cooperative shutdown via a watch channel
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use boleto_worker::{
//!     client::create_sqs_client_from_env,
//!     config::{PollConfig, WorkerConfig},
//!     queue::SqsQueue,
//!     render::HtmlSlipRenderer,
//!     worker::WorkerLoop,
//! };
//! use tokio::sync::watch;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = WorkerConfig::from_env()?;
//!     let queue = SqsQueue::new(create_sqs_client_from_env().await);
//!
//!     let worker = WorkerLoop::connect(
//!         queue,
//!         HtmlSlipRenderer::default(),
//!         &config,
//!         PollConfig::default(),
//!     )
//!     .await?;
//!
//!     let (_shutdown_tx, shutdown_rx) = watch::channel(false);
//!     worker.run(shutdown_rx).await;
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod errors;
pub mod queue;
pub mod render;
pub mod worker;
