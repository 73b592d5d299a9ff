use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::errors::ConfigError;

/// Worker configuration loaded once at startup.
///
/// The four AWS settings and the source queue name are required; startup
/// aborts with an error naming the first missing variable. The remaining
/// fields have defaults matching the original deployment layout (template
/// next to the binary, output onto the source queue, no staging file).
#[derive(Debug, Clone)]
pub struct WorkerConfig {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub region: String,

    /// Name of the queue the worker consumes slip requests from.
    pub queue_name: String,

    /// Name of the queue rendered artifacts are published to. Defaults to
    /// the source queue when unset.
    pub output_queue_name: Option<String>,

    /// Path of the fixed HTML slip template.
    pub template_path: PathBuf,

    /// Optional path the rendered artifact is written to before transmission.
    pub staging_path: Option<PathBuf>,
}

impl WorkerConfig {
    /// Loads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub(crate) fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let required =
            |name: &'static str| lookup(name).ok_or(ConfigError::MissingVar(name));

        Ok(WorkerConfig {
            access_key_id: required("AWS_ACCESS_KEY_ID")?,
            secret_access_key: required("AWS_SECRET_ACCESS_KEY")?,
            region: required("AWS_REGION")?,
            queue_name: required("QUEUE_NAME")?,
            output_queue_name: lookup("OUTPUT_QUEUE_NAME"),
            template_path: lookup("TEMPLATE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("template.html")),
            staging_path: lookup("STAGING_PATH").map(PathBuf::from),
        })
    }
}

/// Polling parameters for the worker loop.
///
/// # Fields
/// - `max_number_of_messages`: The maximum number of messages to receive in a single request.
/// - `wait_time_seconds`: The wait time for long polling, in seconds.
/// - `pass_pause`: The pause between consumption passes.
#[derive(Debug, Clone)]
pub struct PollConfig {
    /// The maximum number of messages to receive in a single request.
    pub max_number_of_messages: i32,

    /// The wait time for long polling, in seconds.
    pub wait_time_seconds: i32,

    /// The pause between consumption passes; also the backoff after a
    /// failed receive call.
    pub pass_pause: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        PollConfig {
            max_number_of_messages: 10,
            wait_time_seconds: 20,
            pass_pause: Duration::from_secs(10),
        }
    }
}
