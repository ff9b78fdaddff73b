//! Tracing initialization for create-helicone.
//!
//! Filtering uses the standard `RUST_LOG` variable and falls back to the
//! default level chosen by the caller. Other knobs:
//! - `RUST_LOG_FORMAT`: `pretty` (default), `compact` or `json`
//! - `LOG_OUTPUT`: `console` (default), `file` or `both`
//! - `LOG_FILE_PATH`: log file location when file output is enabled
//!
//! Console output always goes to stderr so it never interleaves with the
//! command's own stdout.

use std::{
    env,
    io::{self, Write},
    path::{Path, PathBuf},
};
use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt::{self, writer::BoxMakeWriter, MakeWriter},
    prelude::*,
    registry, EnvFilter,
};

const DEFAULT_LOG_FILE: &str = "create-helicone.log";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to initialize tracing: {0}")]
    Init(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Compact,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput {
    Console,
    File,
    Both,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub default_filter: String,
    pub format: LogFormat,
    pub output: LogOutput,
    pub file_path: PathBuf,
}

impl LogSettings {
    /// Reads the settings from the process environment.
    pub fn from_env(default_filter: &str) -> Self {
        Self::from_lookup(default_filter, |key| env::var(key).ok())
    }

    fn from_lookup<F>(default_filter: &str, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let format = match lookup("RUST_LOG_FORMAT").as_deref() {
            Some("json") => LogFormat::Json,
            Some("compact") => LogFormat::Compact,
            _ => LogFormat::Pretty,
        };

        let output = match lookup("LOG_OUTPUT").as_deref() {
            Some("file") => LogOutput::File,
            Some("both") => LogOutput::Both,
            _ => LogOutput::Console,
        };

        let file_path = lookup("LOG_FILE_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| env::temp_dir().join(DEFAULT_LOG_FILE));

        Self {
            default_filter: default_filter.to_string(),
            format,
            output,
            file_path,
        }
    }
}

// --- Tee writer: console and file at once ---
struct Tee<A, B> {
    a: A,
    b: B,
}

impl<A: Write, B: Write> Write for Tee<A, B> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let res_a = self.a.write_all(buf);
        let res_b = self.b.write_all(buf);
        res_a.and(res_b).map(|_| buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.a.flush()?;
        self.b.flush()
    }
}

#[derive(Clone)]
struct MakeTee<A, B> {
    make_a: A,
    make_b: B,
}

impl<'a, A, B> MakeWriter<'a> for MakeTee<A, B>
where
    A: MakeWriter<'a>,
    B: MakeWriter<'a>,
{
    type Writer = Tee<A::Writer, B::Writer>;

    fn make_writer(&'a self) -> Self::Writer {
        Tee {
            a: self.make_a.make_writer(),
            b: self.make_b.make_writer(),
        }
    }
}

fn build_writer(settings: &LogSettings) -> (BoxMakeWriter, Option<WorkerGuard>) {
    let log_dir = settings
        .file_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let log_filename = settings
        .file_path
        .file_name()
        .unwrap_or(DEFAULT_LOG_FILE.as_ref());

    match settings.output {
        LogOutput::Console => (BoxMakeWriter::new(io::stderr), None),
        LogOutput::File => {
            let appender = tracing_appender::rolling::never(log_dir, log_filename);
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            (BoxMakeWriter::new(non_blocking), Some(guard))
        }
        LogOutput::Both => {
            let appender = tracing_appender::rolling::never(log_dir, log_filename);
            let (non_blocking, guard) = tracing_appender::non_blocking(appender);
            let tee = MakeTee {
                make_a: io::stderr,
                make_b: non_blocking,
            };
            (BoxMakeWriter::new(tee), Some(guard))
        }
    }
}

/// Installs the global subscriber.
///
/// The returned guard must be kept alive for the life of the program when
/// file output is enabled, otherwise buffered lines are lost.
pub fn init_subscriber(settings: &LogSettings) -> Result<Option<WorkerGuard>, LoggingError> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.default_filter));

    let (writer, guard) = build_writer(settings);
    let ansi = settings.output == LogOutput::Console;
    let fmt_layer = fmt::layer().with_writer(writer).with_ansi(ansi);

    let result = match settings.format {
        LogFormat::Json => registry()
            .with(env_filter)
            .with(fmt_layer.with_ansi(false).json())
            .try_init(),
        LogFormat::Compact => registry().with(env_filter).with(fmt_layer.compact()).try_init(),
        LogFormat::Pretty => registry().with(env_filter).with(fmt_layer.pretty()).try_init(),
    };

    result.map_err(|e| LoggingError::Init(e.to_string()))?;
    Ok(guard)
}
