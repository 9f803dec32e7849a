//! Formatting errors into single correlated log lines.

use chrono::Utc;
use std::error::Error;
use tracing::debug;
use uuid::Uuid;

/// Placeholder emitted when an error carries no underlying cause chain.
pub const NO_TRACE_MESSAGE: &str = "No stack trace available";

/// Log-line rendering for error values.
pub trait ErrorExt: Error {
    /// Render this error as one log line and mint a correlation identifier
    /// for it.
    ///
    /// The line carries a UTC timestamp at second precision, the freshly
    /// generated trace id (also returned to the caller), the error's type
    /// name, its message, and its cause chain, or a fixed placeholder when
    /// no cause is attached. The identifier is unique with overwhelming
    /// probability and is never stored by this library.
    fn to_log_line(&self) -> (String, Uuid)
    where
        Self: Sized,
    {
        let trace_id = Uuid::new_v4();
        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S");
        let kind = short_type_name::<Self>();
        let message = self.to_string();
        let trace = cause_chain(self).unwrap_or_else(|| NO_TRACE_MESSAGE.to_string());

        debug!(%trace_id, error_type = kind, "formatted error log line");

        (
            format!(
                "{timestamp} | TraceId: {trace_id} | Exception: {kind} | Message: {message} | StackTrace: {trace}"
            ),
            trace_id,
        )
    }
}

impl<E: Error> ErrorExt for E {}

// The cause chain rendered innermost-last, or None when there is no source.
fn cause_chain(error: &dyn Error) -> Option<String> {
    let mut current = error.source()?;
    let mut chain = vec![current.to_string()];
    while let Some(next) = current.source() {
        chain.push(next.to_string());
        current = next;
    }
    Some(chain.join(" <- "))
}

// Drop generic arguments before taking the last path segment, so
// `probe::Wrap<probe::Leaf>` names `Wrap`, not `Leaf>`.
fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct LeafError;

    impl fmt::Display for LeafError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "disk unplugged")
        }
    }

    impl Error for LeafError {}

    #[derive(Debug)]
    struct WrapError(LeafError);

    impl fmt::Display for WrapError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "storage failed")
        }
    }

    impl Error for WrapError {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_log_line_shape() {
        let (line, trace_id) = WrapError(LeafError).to_log_line();

        assert!(line.contains(&format!("TraceId: {trace_id}")));
        assert!(line.contains("Exception: WrapError"));
        assert!(line.contains("Message: storage failed"));
        assert!(line.contains("StackTrace: disk unplugged"));

        // Timestamp at second precision, fixed format.
        let date_part = line.split(" | ").next().unwrap();
        assert!(chrono::NaiveDateTime::parse_from_str(date_part, "%Y-%m-%d %H:%M:%S").is_ok());
    }

    #[derive(Debug)]
    struct GenericWrap<E>(E);

    impl<E: fmt::Debug> fmt::Display for GenericWrap<E> {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "wrapped")
        }
    }

    impl<E: Error + 'static> Error for GenericWrap<E> {
        fn source(&self) -> Option<&(dyn Error + 'static)> {
            Some(&self.0)
        }
    }

    #[test]
    fn test_generic_error_names_the_wrapper_type() {
        let (line, _) = GenericWrap(LeafError).to_log_line();

        assert!(line.contains("Exception: GenericWrap"));
        assert!(!line.contains("Exception: LeafError"));
        assert!(!line.contains('>'));
    }

    #[test]
    fn test_missing_trace_uses_placeholder() {
        let (line, _) = LeafError.to_log_line();
        assert!(line.ends_with(&format!("StackTrace: {NO_TRACE_MESSAGE}")));
    }

    #[test]
    fn test_trace_ids_are_fresh_per_call() {
        let (_, first) = LeafError.to_log_line();
        let (_, second) = LeafError.to_log_line();
        assert_ne!(first, second);
    }
}
