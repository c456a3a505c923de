use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::FormatEvent;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::registry::LookupSpan;

pub struct WriskFormatter;

impl<S, N> FormatEvent<S, N> for WriskFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &tracing_subscriber::fmt::FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();

        // Display output carries its own styling; no level symbol.
        if meta.target() == "wrisk::print" {
            ctx.field_format().format_fields(writer.by_ref(), event)?;
            return writeln!(writer);
        }

        if meta.target() == "wrisk::success" {
            write!(writer, "{} ", "[✓]".green().bold())?;
            ctx.field_format().format_fields(writer.by_ref(), event)?;
            return writeln!(writer);
        }

        let (symbol, color_func): (&str, fn(ColoredString) -> ColoredString) = match *meta.level() {
            Level::TRACE => ("[ ]", |s| s.dimmed()),
            Level::DEBUG => ("[?]", |s| s.blue()),
            Level::INFO => ("[+]", |s| s.green().bold()),
            Level::WARN => ("[*]", |s| s.yellow().bold()),
            Level::ERROR => ("[-]", |s| s.red().bold()),
        };

        write!(writer, "{} ", color_func(symbol.into()))?;

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Filter for the quietest mode: display output and the summary line
/// still pass, everything else only from WARN up.
const SUMMARY_ONLY_DIRECTIVE: &str = "warn,wrisk::print=info,wrisk::success=info";

/// Installs the subscriber. `RUST_LOG` overrides the quiet-derived default.
pub fn init(quiet: u8) {
    let default_directive = match quiet {
        0 | 1 => "info",
        _ => SUMMARY_ONLY_DIRECTIVE,
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .event_format(WriskFormatter)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Capture {
        type Writer = Capture;

        fn make_writer(&'a self) -> Capture {
            self.clone()
        }
    }

    fn captured_with(directive: &str, f: impl FnOnce()) -> String {
        colored::control::set_override(false);
        let buf = Arc::new(Mutex::new(Vec::new()));
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(directive))
            .event_format(WriskFormatter)
            .with_writer(Capture(buf.clone()))
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = buf.lock().unwrap().clone();
        String::from_utf8_lossy(&bytes).into_owned()
    }

    #[test]
    fn summary_line_survives_the_quietest_filter() {
        let out = captured_with(SUMMARY_ONLY_DIRECTIVE, || {
            wrisk_common::success!("Survey complete: 3 networks assessed");
        });
        assert!(
            out.contains("Survey complete: 3 networks assessed"),
            "summary line was filtered out: {out:?}"
        );
    }

    #[test]
    fn display_output_survives_the_quietest_filter_without_a_symbol() {
        let out = captured_with(SUMMARY_ONLY_DIRECTIVE, || {
            crate::terminal::print::print("plain display line");
        });
        assert_eq!(out, "plain display line\n");
    }

    #[test]
    fn plain_info_is_filtered_at_the_quietest_level() {
        let out = captured_with(SUMMARY_ONLY_DIRECTIVE, || {
            tracing::info!("backend chatter");
        });
        assert_eq!(out, "");
    }

    #[test]
    fn success_messages_get_their_own_symbol() {
        let out = captured_with("info", || {
            wrisk_common::success!("done");
        });
        assert_eq!(out, "[✓] done\n");
    }
}
