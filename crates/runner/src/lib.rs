pub mod config;
pub mod sink;

pub use config::RunnerConfig;
pub use sink::{CommandSink, ScriptRunner, SinkError};
