use anyhow::{Context, Result};
use chrono::Local;
use std::{
    fs::File,
    io::{self, IsTerminal},
    path::Path,
    sync::Mutex,
};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{
        FmtContext,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    util::SubscriberInitExt,
};

/// Default directives when `RUST_LOG` is unset. Validation warnings from the
/// core are already part of the report, so they stay out of the log.
const DEFAULT_FILTER: &str = "info,housing_core=error";
const VERBOSE_FILTER: &str = "debug";

// --- Formatter ---

/// Local timestamp, colored level, source location, then the event fields.
struct LocalFmt;

impl<S, N> FormatEvent<S, N> for LocalFmt
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let ansi = writer.has_ansi_escapes();
        let timestamp = Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z");

        if ansi {
            let color = match *meta.level() {
                Level::ERROR => "1;31",
                Level::WARN => "1;33",
                Level::INFO => "1;32",
                Level::DEBUG => "1;34",
                Level::TRACE => "1;35",
            };
            write!(
                writer,
                "\x1b[2m{timestamp}\x1b[0m \x1b[{color}m{:>5}\x1b[0m ",
                meta.level()
            )?;
        } else {
            write!(writer, "{timestamp} {:>5} ", meta.level())?;
        }

        if let (Some(file), Some(line)) = (meta.file(), meta.line()) {
            let file = file
                .rsplit_once("src/")
                .map_or(file, |(_, rest)| rest);
            write!(writer, "{file}:{line} ")?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

// --- Public API ---

/// Logging options taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct LogOptions<'a> {
    /// Append log records to this file as well as stderr.
    pub file: Option<&'a Path>,
    /// Lower the default level to `debug` for every crate.
    pub verbose: bool,
}

fn make_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { VERBOSE_FILTER } else { DEFAULT_FILTER })
    })
}

/// Initializes logging. Call once at startup.
///
/// - Stderr: colored when attached to a terminal, plain when piped. Stdout
///   is left to the report.
/// - File: plain text, appended, only when `options.file` is set.
/// - Level: `RUST_LOG` when set, otherwise [`DEFAULT_FILTER`] (or `debug`
///   with `verbose`).
pub fn init_logging(options: &LogOptions<'_>) -> Result<()> {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .event_format(LocalFmt)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr);

    let file_layer = options
        .file
        .map(|path| -> Result<_> {
            let file = File::options()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file '{}'", path.display()))?;

            Ok(tracing_subscriber::fmt::layer()
                .event_format(LocalFmt)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .boxed())
        })
        .transpose()?;

    tracing_subscriber::registry()
        .with(make_filter(options.verbose))
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("logging already initialized")?;

    Ok(())
}
