//! Run command implementation
//!
//! Streams log messages line by line from a file or stdin, applies the
//! configured anonymization, and writes the result to a file or stdout.

use crate::anonymization::AnonymizationEngine;
use crate::config::load_config;
use clap::Args;
use std::path::PathBuf;
use std::time::Instant;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader, BufWriter};

/// Arguments for the run command
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Input log file (defaults to stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Counters accumulated over one run
#[derive(Debug, Default)]
struct RunSummary {
    lines_scanned: u64,
    lines_rewritten: u64,
}

impl RunArgs {
    /// Execute the run command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        let config = load_config(config_path)?;
        let engine = AnonymizationEngine::new(&config.anonymization)?;

        tracing::info!(
            mode = ?engine.policy().mode,
            bits = engine.policy().bits,
            consistent = engine.policy().random_consistent,
            "Starting anonymization run"
        );

        let reader: Box<dyn AsyncRead + Unpin> = match &self.input {
            Some(path) => Box::new(File::open(path).await?),
            None => Box::new(tokio::io::stdin()),
        };
        let writer: Box<dyn AsyncWrite + Unpin> = match &self.output {
            Some(path) => Box::new(File::create(path).await?),
            None => Box::new(tokio::io::stdout()),
        };

        let start = Instant::now();
        let summary = process_stream(&engine, reader, writer).await?;

        tracing::info!(
            lines_scanned = summary.lines_scanned,
            lines_rewritten = summary.lines_rewritten,
            duration_ms = start.elapsed().as_millis() as u64,
            "Anonymization run completed"
        );

        Ok(0)
    }
}

/// Copy `reader` to `writer` line by line, anonymizing each line.
///
/// Lines are handled as raw bytes; non-UTF-8 content passes through intact.
/// Unmodified lines are written back byte for byte.
async fn process_stream(
    engine: &AnonymizationEngine,
    reader: impl AsyncRead + Unpin,
    writer: impl AsyncWrite + Unpin,
) -> anyhow::Result<RunSummary> {
    let mut reader = BufReader::new(reader);
    let mut writer = BufWriter::new(writer);
    let mut summary = RunSummary::default();
    let mut line = Vec::new();

    loop {
        line.clear();
        let n = reader.read_until(b'\n', &mut line).await?;
        if n == 0 {
            break;
        }
        summary.lines_scanned += 1;
        match engine.anonymize_message(&line) {
            Some(rewritten) => {
                summary.lines_rewritten += 1;
                writer.write_all(&rewritten).await?;
            }
            None => writer.write_all(&line).await?,
        }
    }
    writer.flush().await?;

    Ok(summary)
}
