//! # Configuration
//!
//! Runtime settings read from the environment:
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `PIZZERIA_CHANNEL_CAPACITY` | `32` | request buffer of the cart store |
//! | `PIZZERIA_CURRENCY` | `$` | symbol printed before amounts |
//! | `PIZZERIA_USER` | unset | signed-in customer shown in greetings |
use crate::cart_actor::DEFAULT_CAPACITY;
use crate::model::CurrentUser;
use thiserror::Error;

pub const CHANNEL_CAPACITY_VAR: &str = "PIZZERIA_CHANNEL_CAPACITY";
pub const CURRENCY_VAR: &str = "PIZZERIA_CURRENCY";
pub const USER_VAR: &str = "PIZZERIA_USER";

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value for {key} ({value:?}): {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub channel_capacity: usize,
    pub currency: String,
    pub user: Option<CurrentUser>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CAPACITY,
            currency: "$".to_string(),
            user: None,
        }
    }
}

impl AppConfig {
    /// Load configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a variable is set but unusable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let channel_capacity = match non_blank(lookup(CHANNEL_CAPACITY_VAR)) {
            None => defaults.channel_capacity,
            Some(raw) => parse_capacity(&raw)?,
        };
        let currency = non_blank(lookup(CURRENCY_VAR)).unwrap_or(defaults.currency);
        let user = non_blank(lookup(USER_VAR)).map(CurrentUser::new);

        Ok(Self {
            channel_capacity,
            currency,
            user,
        })
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_capacity(raw: &str) -> Result<usize, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidValue {
        key: CHANNEL_CAPACITY_VAR,
        value: raw.to_string(),
        reason,
    };
    let capacity = raw.parse::<usize>().map_err(|e| invalid(e.to_string()))?;
    // Tokio channels panic on a zero buffer.
    if capacity == 0 {
        return Err(invalid("must be at least 1".to_string()));
    }
    Ok(capacity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.channel_capacity, 32);
        assert_eq!(config.currency, "$");
        assert!(config.user.is_none());
    }

    #[test]
    fn test_values_are_read() {
        let config = AppConfig::from_lookup(lookup(&[
            (CHANNEL_CAPACITY_VAR, "8"),
            (CURRENCY_VAR, "€"),
            (USER_VAR, " Alice "),
        ]))
        .unwrap();
        assert_eq!(config.channel_capacity, 8);
        assert_eq!(config.currency, "€");
        assert_eq!(config.user, Some(CurrentUser::new("Alice")));
    }

    #[test]
    fn test_blank_user_means_signed_out() {
        let config = AppConfig::from_lookup(lookup(&[(USER_VAR, "   ")])).unwrap();
        assert!(config.user.is_none());
    }

    #[test]
    fn test_invalid_capacity() {
        let result = AppConfig::from_lookup(lookup(&[(CHANNEL_CAPACITY_VAR, "lots")]));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { key: CHANNEL_CAPACITY_VAR, .. })
        ));

        let result = AppConfig::from_lookup(lookup(&[(CHANNEL_CAPACITY_VAR, "0")]));
        assert!(result.is_err());
    }
}
