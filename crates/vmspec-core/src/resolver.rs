//! Option resolution with layered precedence
//!
//! The `ValueResolver` computes a single scalar option from three sources,
//! with later sources overriding earlier ones:
//!
//! 1. Environment variable (seed, present even when empty)
//! 2. Command-line flag (when it carries a non-default value)
//! 3. Built-in default (when the result is still the zero value)
//!
//! The boolean variant has no default layer: the flag always wins.

use crate::env::{EnvSource, ProcessEnv};

/// Resolves option values from the environment, flags and defaults
#[derive(Debug, Clone, Default)]
pub struct ValueResolver<E = ProcessEnv> {
    env: E,
}

impl ValueResolver<ProcessEnv> {
    /// Create a resolver reading the real process environment
    pub fn new() -> Self {
        Self { env: ProcessEnv }
    }
}

impl<E: EnvSource> ValueResolver<E> {
    /// Create a resolver over a custom environment source.
    ///
    /// This is primarily useful for testing, where resolution must not
    /// depend on (or mutate) the real process environment.
    pub fn with_env(env: E) -> Self {
        Self { env }
    }

    /// Access the underlying environment source
    pub fn env(&self) -> &E {
        &self.env
    }

    /// Resolve a string option.
    ///
    /// A flag equal to `default` is treated the same as an absent flag, so it
    /// will not override a conflicting environment value.
    pub fn resolve_string(&self, key: &str, flag: &str, default: &str) -> String {
        let mut res = String::new();

        if let Some(value) = self.env.lookup(key) {
            tracing::debug!(key, value = %value, "Seeded from environment");
            res = value;
        }

        if !flag.is_empty() && flag != default {
            tracing::debug!(key, flag, "Flag overrides environment");
            res = flag.to_string();
        }

        if res.is_empty() {
            tracing::debug!(key, default, "Falling back to default");
            res = default.to_string();
        }
        res
    }

    /// Resolve an integer option.
    ///
    /// An environment value that does not parse as an integer is treated as
    /// `0` and no error is reported. The caller then sees either the flag or
    /// the default.
    ///
    /// Any non-zero flag that differs from the default overrides, negative
    /// values included (`-1` wins over the environment).
    pub fn resolve_int(&self, key: &str, flag: i64, default: i64) -> i64 {
        let mut res = 0;

        if let Some(value) = self.env.lookup(key) {
            res = match value.parse::<i64>() {
                Ok(n) => {
                    tracing::debug!(key, value = n, "Seeded from environment");
                    n
                }
                Err(e) => {
                    tracing::debug!(key, value = %value, error = %e, "Ignoring unparsable environment value");
                    0
                }
            };
        }

        if flag != 0 && flag != default {
            tracing::debug!(key, flag, "Flag overrides environment");
            res = flag;
        }

        if res == 0 {
            tracing::debug!(key, default, "Falling back to default");
            res = default;
        }
        res
    }

    /// Resolve a boolean option from a two-state flag.
    ///
    /// A plain `bool` cannot tell "flag omitted" from "flag set to false",
    /// so the flag value is always the result. The environment only matters
    /// when it happens to agree. Use [`resolve_bool_flag`](Self::resolve_bool_flag)
    /// when the caller knows whether the flag was given.
    pub fn resolve_bool(&self, key: &str, flag: bool) -> bool {
        let mut res = self.env_bool(key).unwrap_or(false);

        if res != flag {
            tracing::debug!(key, flag, "Flag overrides environment");
            res = flag;
        }
        res
    }

    /// Resolve a boolean option from a tri-state flag.
    ///
    /// `None` keeps the environment value (false when unset), `Some` wins.
    pub fn resolve_bool_flag(&self, key: &str, flag: Option<bool>) -> bool {
        match flag {
            Some(value) => {
                tracing::debug!(key, flag = value, "Explicit flag");
                value
            }
            None => self.env_bool(key).unwrap_or(false),
        }
    }

    fn env_bool(&self, key: &str) -> Option<bool> {
        let value = self.env.lookup(key)?;
        let res = parse_env_bool(&value);
        tracing::debug!(key, value = %value, resolved = res, "Seeded from environment");
        Some(res)
    }
}

/// Map an environment string onto a boolean.
///
/// Only `""`, `"0"`, `"false"` and `"FALSE"` are false. Everything else,
/// including typos such as `"flase"`, is true.
pub fn parse_env_bool(value: &str) -> bool {
    !matches!(value, "" | "0" | "false" | "FALSE")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn string_uses_default_when_nothing_set() {
        let resolver = ValueResolver::with_env(env(&[]));
        assert_eq!(resolver.resolve_string("K", "", "dflt"), "dflt");
    }

    #[test]
    fn string_flag_matching_default_does_not_beat_env() {
        let resolver = ValueResolver::with_env(env(&[("K", "from-env")]));
        assert_eq!(resolver.resolve_string("K", "dflt", "dflt"), "from-env");
    }

    #[test]
    fn string_empty_env_falls_back_to_default() {
        let resolver = ValueResolver::with_env(env(&[("K", "")]));
        assert_eq!(resolver.resolve_string("K", "", "dflt"), "dflt");
    }

    #[test]
    fn int_garbage_env_is_silently_zero() {
        let resolver = ValueResolver::with_env(env(&[("N", "lots")]));
        assert_eq!(resolver.resolve_int("N", 0, 4), 4);
    }

    #[test]
    fn int_negative_flag_overrides() {
        let resolver = ValueResolver::with_env(env(&[("N", "8")]));
        assert_eq!(resolver.resolve_int("N", -1, 4), -1);
    }

    #[test]
    fn bool_false_flag_beats_true_env() {
        let resolver = ValueResolver::with_env(env(&[("B", "true")]));
        assert!(!resolver.resolve_bool("B", false));
    }

    #[test]
    fn tri_state_keeps_env_when_flag_omitted() {
        let resolver = ValueResolver::with_env(env(&[("B", "yes")]));
        assert!(resolver.resolve_bool_flag("B", None));
        assert!(!resolver.resolve_bool_flag("B", Some(false)));
    }

    #[test]
    fn env_bool_literals() {
        for falsy in ["", "0", "false", "FALSE"] {
            assert!(!parse_env_bool(falsy), "{falsy:?} should be false");
        }
        for truthy in ["1", "true", "TRUE", "False", "no", "flase"] {
            assert!(parse_env_bool(truthy), "{truthy:?} should be true");
        }
    }
}
