// Logging - compact stderr formatter for the command-line tool

use chrono::Local;
use tracing::{Event, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

pub struct ConsoleFormatter;

impl<S, N> FormatEvent<S, N> for ConsoleFormatter
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
        let timestamp = Local::now().format("%H:%M:%S");
        write!(
            writer,
            "{} [{}]: ",
            level_label(event.metadata().level()),
            timestamp
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn level_label(level: &tracing::Level) -> &'static str {
    match *level {
        tracing::Level::TRACE => "TRACE",
        tracing::Level::DEBUG => "DEBUG",
        tracing::Level::INFO => " INFO",
        tracing::Level::WARN => " WARN",
        tracing::Level::ERROR => "ERROR",
    }
}

/// Default filter directive; `RUST_LOG` takes precedence
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "cucumber_junit=debug,warn"
    } else {
        "cucumber_junit=warn,error"
    }
}

/// Install the global subscriber, logging to stderr so stdout stays clean XML
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    // Ignore a second installation (e.g. from tests)
    let _ = tracing_subscriber::fmt()
        .event_format(ConsoleFormatter)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
