//! Tracing layer that forwards formatted log lines to a [`LogSink`].

use std::fmt::Write;

use tracing::field::{Field, Visit};
use tracing_subscriber::layer::{Context, Layer};

use crate::config::LogSink;

/// Lines longer than this are cut and suffixed with their full length.
pub const MAX_LINE_CHARS: usize = 32_000;

/// Collects "message key=value ..." from one event.
#[derive(Default)]
struct LineVisitor {
    buf: String,
}

impl LineVisitor {
    fn separate(&mut self) {
        if !self.buf.is_empty() {
            self.buf.push(' ');
        }
    }
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.separate();
        if field.name() == "message" {
            self.buf.push_str(value);
        } else {
            write!(self.buf, "{}={}", field.name(), value).ok();
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        self.separate();
        if field.name() == "message" {
            write!(self.buf, "{value:?}").ok();
        } else {
            write!(self.buf, "{}={:?}", field.name(), value).ok();
        }
    }
}

fn truncate_line(line: String) -> String {
    let total = line.chars().count();
    if total <= MAX_LINE_CHARS {
        return line;
    }
    let head: String = line.chars().take(MAX_LINE_CHARS).collect();
    format!("{head}… ({total} chars)")
}

pub(crate) fn sink_layer(sink: Option<LogSink>) -> SinkLayer {
    SinkLayer { sink }
}

#[derive(Clone)]
pub(crate) struct SinkLayer {
    sink: Option<LogSink>,
}

impl<S> Layer<S> for SinkLayer
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let Some(sink) = &self.sink else {
            return;
        };
        let metadata = event.metadata();
        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);

        let line = if visitor.buf.is_empty() {
            format!("[{}] {}", metadata.level(), metadata.target())
        } else {
            format!("[{}] {}: {}", metadata.level(), metadata.target(), visitor.buf)
        };
        sink(truncate_line(line));
    }
}
