//! Output sinks for the lines servlets write.
//!
//! Every servlet writes to one shared sink, the process-wide output. The
//! default is stdout; `TracingSink` routes lines into the diagnostic log
//! instead and `MemorySink` keeps them for inspection.

mod memory;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::Serialize;

pub use memory::{MemorySink, OutputEntry};

/// Target used by `TracingSink` events.
pub const OUTPUT_TARGET: &str = "paramlog::output";

/// Process-wide line output.
pub trait LogSink: Send + Sync {
    fn line(&self, line: &str);
}

pub type SharedSink = Arc<dyn LogSink>;

/// Writes every line to stdout.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn line(&self, line: &str) {
        println!("{line}");
    }
}

/// Emits every line as an `info` event.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn line(&self, line: &str) {
        tracing::info!(target: OUTPUT_TARGET, "{line}");
    }
}

/// Sink selectable from configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    #[default]
    Console,
    Tracing,
}

impl SinkKind {
    pub fn build(self) -> SharedSink {
        match self {
            SinkKind::Console => Arc::new(ConsoleSink),
            SinkKind::Tracing => Arc::new(TracingSink),
        }
    }
}

impl fmt::Display for SinkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SinkKind::Console => f.write_str("console"),
            SinkKind::Tracing => f.write_str("tracing"),
        }
    }
}

impl FromStr for SinkKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "console" | "stdout" => Ok(SinkKind::Console),
            "tracing" | "log" => Ok(SinkKind::Tracing),
            other => Err(format!("unknown sink '{other}' (expected console or tracing)")),
        }
    }
}
