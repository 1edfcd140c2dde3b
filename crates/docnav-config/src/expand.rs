//! `${VAR}` expansion for string values in `docnav.toml`.
//!
//! - `${VAR}` is replaced with the value of `VAR` and fails when it is unset
//! - `${VAR:-fallback}` uses `fallback` when `VAR` is unset
//!
//! Strings without a `${` sequence are returned as-is, so a URL containing a
//! bare `$` survives untouched.

use crate::ConfigError;

/// Expand environment references in `value`, reporting failures against `field`.
pub(crate) fn expand_env(value: &str, field: &str) -> Result<String, ConfigError> {
    if !value.contains("${") {
        return Ok(value.to_owned());
    }

    shellexpand::env_with_context(value, |name| -> Result<Option<String>, UnsetVar> {
        std::env::var(name).map(Some).map_err(|_| UnsetVar(name.to_owned()))
    })
    .map(std::borrow::Cow::into_owned)
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.0),
    })
}

/// Name of a variable that had no value during expansion.
struct UnsetVar(String);
