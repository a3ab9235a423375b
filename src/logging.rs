//! Tracing setup.
//!
//! Filtering comes from `RUST_LOG` and defaults to `warn`. The interactive game owns the
//! terminal, so it only logs when given a file.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub enum LogTarget<'a> {
    File(&'a Path),
    Stderr,
    Off,
}

/// Install the global subscriber.
///
/// # Example
/// ```bash
/// RUST_LOG=beanstalk=debug beanstalk --log-file moves.log play
/// ```
pub fn init(target: LogTarget) -> Result<(), Box<dyn std::error::Error>> {
    let (writer, ansi) = match target {
        LogTarget::Off => return Ok(()),
        LogTarget::Stderr => (BoxMakeWriter::new(std::io::stderr), true),
        LogTarget::File(path) => (BoxMakeWriter::new(Mutex::new(File::create(path)?)), false),
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(writer).with_ansi(ansi).compact())
        .try_init()?;
    Ok(())
}
