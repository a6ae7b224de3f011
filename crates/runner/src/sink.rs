use std::process::Stdio;

use async_trait::async_trait;
use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, warn};

use specled_core::LedEvent;

use crate::config::RunnerConfig;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to spawn control script: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Where dispatched events go. The server only depends on this seam, so the
/// real script runner can be swapped for an in-memory recorder in tests.
#[async_trait]
pub trait CommandSink: Send + Sync {
    async fn send(&self, event: &LedEvent) -> Result<(), SinkError>;
}

/// Runs the external control script, one blocking invocation per event.
/// Output and exit status are discarded; the hardware daemon on the far side
/// is the only observer that matters.
#[derive(Debug, Clone)]
pub struct ScriptRunner {
    config: RunnerConfig,
}

impl ScriptRunner {
    pub fn new(config: RunnerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }
}

#[async_trait]
impl CommandSink for ScriptRunner {
    async fn send(&self, event: &LedEvent) -> Result<(), SinkError> {
        let arg = event.script_arg();
        debug!(program = %self.config.program, script = %self.config.script, %arg, "Running control script");
        let status = Command::new(&self.config.program)
            .arg(&self.config.script)
            .arg(&arg)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await?;
        if !status.success() {
            // Non-zero exit is not an error contract we hold the script to.
            warn!(%arg, ?status, "Control script exited non-zero");
        }
        Ok(())
    }
}
