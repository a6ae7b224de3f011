use std::env;

#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Interpreter the control script runs under.
    pub program: String,
    /// Path to the control script handed one event argument per invocation.
    pub script: String,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            program: "python".to_string(),
            script: "./sendCmds.py".to_string(),
        }
    }
}

impl RunnerConfig {
    pub fn from_env() -> Self {
        let mut cfg = RunnerConfig::default();

        if let Ok(v) = env::var("SPECLED_CMD_PROGRAM") {
            if !v.is_empty() {
                cfg.program = v;
            }
        }
        if let Ok(v) = env::var("SPECLED_CMD_SCRIPT") {
            if !v.is_empty() {
                cfg.script = v;
            }
        }

        cfg
    }

    /// Whether the configured script is present on disk. Advisory only;
    /// dispatch attempts the spawn regardless.
    pub fn script_exists(&self) -> bool {
        std::path::Path::new(&self.script).exists()
    }
}
