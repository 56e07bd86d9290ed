//! Playground configuration.

use crate::catalog::{DEFAULT_PROGRAM, INTRODUCTION};
use crate::notify::DEFAULT_TIMEOUT_MS;

/// Startup content and notification behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Program used when there is no usable share fragment.
    pub default_program: String,
    /// Markdown shown before an example is picked.
    pub default_description: String,
    /// Lifetime of status notifications; `None` keeps them until dismissed.
    pub notification_timeout_ms: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_program: DEFAULT_PROGRAM.to_string(),
            default_description: INTRODUCTION.to_string(),
            notification_timeout_ms: Some(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl Config {
    pub fn with_default_program(mut self, program: impl Into<String>) -> Self {
        self.default_program = program.into();
        self
    }

    pub fn with_default_description(mut self, description: impl Into<String>) -> Self {
        self.default_description = description.into();
        self
    }

    pub fn with_notification_timeout(mut self, timeout_ms: Option<u32>) -> Self {
        self.notification_timeout_ms = timeout_ms;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.default_program, DEFAULT_PROGRAM);
        assert_eq!(config.notification_timeout_ms, Some(3000));
    }

    #[test]
    fn test_builders() {
        let config = Config::default()
            .with_default_program("1")
            .with_default_description("d")
            .with_notification_timeout(None);
        assert_eq!(config.default_program, "1");
        assert_eq!(config.default_description, "d");
        assert_eq!(config.notification_timeout_ms, None);
    }
}
