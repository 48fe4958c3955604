use std::fmt;

/// A textual configuration value that does not name any known option.
///
/// Produced by the `FromStr` impls of the toolkit's configuration enums
/// (shape family, style, corners, ripple modes, orientation, alignment).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// What was being parsed, e.g. `"shape style"`.
    pub kind: &'static str,
    /// The rejected input, verbatim.
    pub value: String,
}

impl ConfigError {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self { kind, value: value.into() }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown {}: {:?}", self.kind, self.value)
    }
}

impl std::error::Error for ConfigError {}
