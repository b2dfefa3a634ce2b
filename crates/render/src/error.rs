//! Error types for the hypnos-render crate.

/// Error type for all fallible operations in the hypnos-render crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RenderError {
    /// Returned when the trace to render contains no epochs.
    #[error("session trace is empty")]
    EmptyTrace,

    /// Returned when a layout parameter is invalid.
    #[error("invalid layout: {reason}")]
    InvalidLayout {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when the drawing backend fails.
    #[error("drawing backend error: {message}")]
    Backend {
        /// Stringified backend error.
        message: String,
    },
}

/// Maps a plotters drawing error onto [`RenderError::Backend`].
pub(crate) fn backend<E: std::fmt::Display>(err: E) -> RenderError {
    RenderError::Backend {
        message: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_empty_trace() {
        let e = RenderError::EmptyTrace;
        assert_eq!(e.to_string(), "session trace is empty");
    }

    #[test]
    fn error_invalid_layout() {
        let e = RenderError::InvalidLayout {
            reason: "cols must be at least 1".to_string(),
        };
        assert_eq!(e.to_string(), "invalid layout: cols must be at least 1");
    }

    #[test]
    fn error_backend() {
        let e = backend("disk full");
        assert_eq!(e.to_string(), "drawing backend error: disk full");
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<RenderError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<RenderError>();
    }
}
