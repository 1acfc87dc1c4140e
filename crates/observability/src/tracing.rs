//! Span helpers shared by the command surfaces.

/// Span around one project creation request.
///
/// ```rust
/// use studio_observability::creation_span;
///
/// let span = creation_span!(false, 2);
/// let _guard = span.enter();
/// ```
#[macro_export]
macro_rules! creation_span {
    ($is_blank:expr, $attachments:expr) => {
        tracing::info_span!(
            "studio.creation",
            creation.blank = $is_blank,
            creation.attachments = $attachments,
            duration_ms = tracing::field::Empty,
            error = tracing::field::Empty,
            error.message = tracing::field::Empty,
        )
    };
}

/// Span around one shell command run through the host.
#[macro_export]
macro_rules! command_span {
    ($cwd:expr, $command:expr) => {
        tracing::info_span!(
            "studio.command",
            command.cwd = $cwd,
            command.line = $command,
            duration_ms = tracing::field::Empty,
            error = tracing::field::Empty,
            error.message = tracing::field::Empty,
        )
    };
}

/// Marks the current span as failed and logs the error.
pub fn record_error<E: std::fmt::Display + ?Sized>(error: &E) {
    let span = tracing::Span::current();
    span.record("error", true);
    span.record("error.message", error.to_string());
    tracing::error!(error = %error, "Operation failed");
}

pub fn record_duration(key: &str, duration: std::time::Duration) {
    tracing::Span::current().record(key, duration.as_millis() as u64);
}
