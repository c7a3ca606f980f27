// crates/logging/src/formatter.rs
use std::fmt;
use time::{OffsetDateTime, macros::format_description};
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, format::Writer};
use tracing_subscriber::registry::LookupSpan;

/// Plain text event format: an optional timestamp, a severity tag for
/// warnings and errors, the message, then `key=value` fields. Lines are
/// wrapped to the terminal width.
#[derive(Clone, Debug, Default)]
pub struct ScanFormatter {
    timestamps: bool,
    width: Option<usize>,
}

impl ScanFormatter {
    pub fn new(timestamps: bool) -> Self {
        Self {
            timestamps,
            width: None,
        }
    }

    /// Wrap at `width` columns instead of `$COLUMNS`.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    fn columns(&self) -> usize {
        self.width.filter(|&c| c > 0).unwrap_or_else(|| {
            std::env::var("COLUMNS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|&c| c > 0)
                .unwrap_or(80)
        })
    }

    fn wrap(msg: &str, width: usize) -> String {
        let mut out = String::new();
        let mut line_len = 0usize;
        for word in msg.split_whitespace() {
            let wlen = word.len();
            if line_len == 0 {
                out.push_str(word);
                line_len = wlen;
            } else if line_len + 1 + wlen > width {
                out.push('\n');
                out.push_str(word);
                line_len = wlen;
            } else {
                out.push(' ');
                out.push_str(word);
                line_len += 1 + wlen;
            }
        }
        out
    }
}

struct MsgVisitor {
    msg: String,
    fields: Vec<(&'static str, String)>,
}

impl Visit for MsgVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.msg.push_str(value);
        } else {
            self.fields.push((field.name(), value.to_string()));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.msg.push_str(&format!("{value:?}"));
        } else {
            self.fields.push((field.name(), format!("{value:?}")));
        }
    }
}

fn format_time() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    let fmt = format_description!("[year]/[month]/[day] [hour]:[minute]:[second]");
    now.format(&fmt).unwrap_or_default()
}

impl<S, N> FormatEvent<S, N> for ScanFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let mut visitor = MsgVisitor {
            msg: String::new(),
            fields: Vec::new(),
        };
        event.record(&mut visitor);

        let mut line = String::new();
        if self.timestamps {
            line.push_str(&format_time());
            line.push(' ');
        }
        match *event.metadata().level() {
            Level::ERROR => line.push_str("error: "),
            Level::WARN => line.push_str("warning: "),
            _ => {}
        }
        if visitor.msg.is_empty() {
            line.push_str(event.metadata().target());
        } else {
            line.push_str(&visitor.msg);
        }
        for (name, value) in &visitor.fields {
            line.push(' ');
            line.push_str(name);
            line.push('=');
            line.push_str(value);
        }

        let wrapped = Self::wrap(&line, self.columns());
        for (i, part) in wrapped.lines().enumerate() {
            if i > 0 {
                writer.write_char('\n')?;
            }
            writer.write_str(part)?;
        }
        writer.write_char('\n')
    }
}
