//! Parsing options and configuration.

/// Options for parsing documents.
///
/// The same options apply to every document kind.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Error handling mode
    pub error_mode: ErrorMode,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable lenient mode (recover with partial text).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Enable strict mode (fail on any read error).
    pub fn strict(mut self) -> Self {
        self.error_mode = ErrorMode::Strict;
        self
    }

    /// Whether read failures should be logged and recovered from.
    pub fn is_lenient(&self) -> bool {
        self.error_mode == ErrorMode::Lenient
    }
}

/// Error handling mode during parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail on any error
    #[default]
    Strict,
    /// Log the failure and continue with whatever text was gathered
    Lenient,
}
