//! Environment variable access seam.
//!
//! The greeting value comes from the process environment, but handlers never
//! call `std::env::var` directly: they go through [`EnvSource`], so tests can
//! substitute a fixed map instead of mutating the real process environment.
//! [`ProcessEnv`] reads the live environment on every call -- the greeting
//! always reflects the current value, never a snapshot taken at startup.

use std::collections::HashMap;

/// Name of the environment variable that controls the greeting value.
pub const SANDBOX_ENV_VAR: &str = "SANDBOX_ENV";

/// Greeting value used when `SANDBOX_ENV` is unset or empty.
pub const DEFAULT_ENV: &str = "default-dev";

/// Source of environment variable values.
///
/// Implementations return `None` for unset variables. An empty string is a
/// valid return value; callers decide how to treat it.
pub trait EnvSource: Send + Sync {
    /// Returns the value of `key`, or `None` if it is not set.
    fn get(&self, key: &str) -> Option<String>;
}

/// Live process environment. Reads on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Fixed map-backed source for tests.
#[derive(Debug, Clone, Default)]
pub struct FixedEnv {
    vars: HashMap<String, String>,
}

impl FixedEnv {
    /// Creates an empty source (every lookup misses).
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a variable, returning `self` for chaining.
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.vars.insert(key.to_string(), value.to_string());
        self
    }
}

impl EnvSource for FixedEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

/// Returns the current sandbox environment name from `source`.
///
/// Unset and empty both fall back to [`DEFAULT_ENV`].
pub fn sandbox_env(source: &dyn EnvSource) -> String {
    match source.get(SANDBOX_ENV_VAR) {
        Some(value) if !value.is_empty() => value,
        _ => DEFAULT_ENV.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_falls_back_to_default() {
        let source = FixedEnv::new();
        assert_eq!(sandbox_env(&source), DEFAULT_ENV);
    }

    #[test]
    fn empty_falls_back_to_default() {
        let source = FixedEnv::new().with(SANDBOX_ENV_VAR, "");
        assert_eq!(sandbox_env(&source), DEFAULT_ENV);
    }

    #[test]
    fn set_value_is_returned_verbatim() {
        let source = FixedEnv::new().with(SANDBOX_ENV_VAR, "staging");
        assert_eq!(sandbox_env(&source), "staging");
    }

    #[test]
    fn process_env_reads_the_live_environment() {
        // Unique key so no other test can race on it.
        let key = "SANDBOX_GREETER_ENV_TEST";
        assert_eq!(ProcessEnv.get(key), None);
        std::env::set_var(key, "live");
        assert_eq!(ProcessEnv.get(key), Some("live".to_string()));
        std::env::remove_var(key);
        assert_eq!(ProcessEnv.get(key), None);
    }

    #[test]
    fn unrelated_variables_are_ignored() {
        let source = FixedEnv::new().with("OTHER_VAR", "production");
        assert_eq!(sandbox_env(&source), DEFAULT_ENV);
    }
}
