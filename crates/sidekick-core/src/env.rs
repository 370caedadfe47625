//! Environment lookup with defaults.
//!
//! Callers pass an [`EnvSource`] instead of reading the process environment
//! directly, so tests never mutate global state.

use std::collections::HashMap;

/// Read-only key/value lookup.
pub trait EnvSource {
    fn get(&self, name: &str) -> Option<String>;
}

/// The real process environment. Non-UTF-8 values read as absent.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

/// An in-memory environment.
#[derive(Debug, Default, Clone)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }
}

impl EnvSource for MapEnv {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

impl<const N: usize> From<[(&str, &str); N]> for MapEnv {
    fn from(pairs: [(&str, &str); N]) -> Self {
        pairs
            .into_iter()
            .fold(MapEnv::new(), |env, (name, value)| env.with(name, value))
    }
}

/// Look up `name`, falling back to `default` when unset or empty.
///
/// # Examples
///
/// ```
/// use sidekick_core::{get_or, MapEnv};
///
/// let env = MapEnv::from([("EXAMPLE_ENV", "set")]);
/// assert_eq!(get_or(&env, "EXAMPLE_ENV", "defaultValue"), "set");
/// assert_eq!(get_or(&env, "MISSING", "defaultValue"), "defaultValue");
/// ```
pub fn get_or(env: &dyn EnvSource, name: &str, default: &str) -> String {
    env.get(name)
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present_value_wins() {
        let env = MapEnv::new().with("NAME", "value");
        assert_eq!(get_or(&env, "NAME", "fallback"), "value");
    }

    #[test]
    fn test_missing_falls_back() {
        assert_eq!(get_or(&MapEnv::new(), "NAME", "fallback"), "fallback");
    }

    #[test]
    fn test_empty_falls_back() {
        let env = MapEnv::from([("NAME", "")]);
        assert_eq!(get_or(&env, "NAME", "fallback"), "fallback");
    }

    #[test]
    fn test_whitespace_is_a_value() {
        let env = MapEnv::from([("NAME", " ")]);
        assert_eq!(get_or(&env, "NAME", "fallback"), " ");
    }

    #[test]
    fn test_empty_default() {
        assert_eq!(get_or(&MapEnv::new(), "NAME", ""), "");
    }

    #[test]
    fn test_process_env_reads_cargo_vars() {
        // cargo exports package metadata to the test process.
        assert_eq!(
            ProcessEnv.get("CARGO_PKG_NAME").as_deref(),
            Some(env!("CARGO_PKG_NAME"))
        );
    }
}
