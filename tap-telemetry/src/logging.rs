//! ## tap-telemetry::logging
//! **Line-oriented logger for the container log stream**
//!
//! Every event renders as `<timestamp> - <LEVEL> - <message>` on standard
//! output, one line per event. The level filter comes from `RUST_LOG` and
//! defaults to `info`.

use chrono::Local;
use opentelemetry::KeyValue;
use thiserror::Error;
use tracing::{info_span, Event, Instrument, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Failure to install the process-wide subscriber.
#[derive(Debug, Error)]
#[error("logger initialization failed: {0}")]
pub struct TelemetryError(#[from] tracing_subscriber::util::TryInitError);

/// Renders events as `<timestamp> - <LEVEL> - <message>`.
pub struct LineFormat;

impl<S, N> FormatEvent<S, N> for LineFormat
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
        write!(
            writer,
            "{} - {} - ",
            Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
            event.metadata().level()
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

#[derive(Clone)]
pub struct EventLogger;

impl EventLogger {
    /// Installs the process-wide subscriber. Called exactly once, before
    /// configuration loads, so configuration faults reach the log stream in
    /// the same format.
    pub fn init() -> Result<(), TelemetryError> {
        fmt()
            .event_format(LineFormat)
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .finish()
            .try_init()?;
        Ok(())
    }

    /// Emits a structured informational event inside a dedicated span.
    pub async fn log_event(event_type: &str, metadata: Vec<KeyValue>) {
        let span = info_span!(
            "monitor_event",
            event_type = event_type,
            otel.kind = "INTERNAL"
        );

        async {
            tracing::info!(
                metadata = ?metadata,
                "Monitor event recorded"
            );
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};

    use tracing_subscriber::fmt::MakeWriter;
    use tracing_test::traced_test;

    #[derive(Clone, Default)]
    struct CaptureWriter(Arc<Mutex<Vec<u8>>>);

    impl CaptureWriter {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    impl io::Write for CaptureWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for CaptureWriter {
        type Writer = CaptureWriter;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn capture_line(emit: impl FnOnce()) -> String {
        let writer = CaptureWriter::default();
        let subscriber = fmt()
            .event_format(LineFormat)
            .with_writer(writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, emit);

        let output = writer.contents();
        output.lines().next().expect("one event line").to_string()
    }

    #[test]
    fn events_render_as_timestamp_level_message() {
        let line = capture_line(|| tracing::info!("formatted heartbeat"));

        let (timestamp, rest) = line.split_once(" - ").expect("timestamp separator");
        assert!(
            chrono::NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S%.3f").is_ok(),
            "unparseable timestamp: {timestamp}"
        );
        assert_eq!(rest, "INFO - formatted heartbeat");
    }

    #[test]
    fn error_events_carry_the_level_name() {
        let line = capture_line(|| tracing::error!("capture backend gone"));

        let (_, rest) = line.split_once(" - ").expect("timestamp separator");
        assert_eq!(rest, "ERROR - capture backend gone");
    }

    #[traced_test]
    #[tokio::test]
    async fn structured_events_reach_the_log() {
        EventLogger::log_event("unit_test", vec![KeyValue::new("key", "value")]).await;
        assert!(logs_contain("Monitor event recorded"));
    }
}
