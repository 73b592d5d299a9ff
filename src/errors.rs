use std::path::PathBuf;

use thiserror::Error;

/// Startup configuration errors. Any of these aborts the process before the
/// worker loop starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
}

/// Errors from rendering the slip document.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The fixed template file could not be read from disk.
    #[error("template file {} could not be read: {source}", .path.display())]
    TemplateNotFound {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The template markup could not be converted into a document.
    #[error("template markup could not be converted: {0}")]
    Malformed(String),

    /// The rendered artifact could not be staged to or read back from disk.
    #[error("staging file {} could not be accessed: {source}", .path.display())]
    Staging {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Error types for the worker's queue and rendering operations.
///
/// Each variant corresponds to one fallible operation boundary; the loop
/// checks every boundary independently and never lets a per-message failure
/// propagate past it.
#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("invalid worker configuration: {0}")]
    Config(#[from] ConfigError),

    /// The queue name could not be resolved to a queue URL. Fatal at startup.
    #[error("failed to resolve queue URL for \"{0}\": {1}")]
    QueueUrl(String, String),

    #[error("failed to receive messages: {0}")]
    Receive(String),

    #[error("failed to render slip document: {0}")]
    Render(#[from] RenderError),

    #[error("failed to send message: {0}")]
    Send(String),

    #[error("failed to delete message: {0}")]
    Delete(String),
}
