/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Reads and parses an environment variable, falling back to `default`
///
/// A value that is present but fails to parse is logged and replaced by the default.
///
/// # Arguments
///
/// * `env_var` - Name of the environment variable
/// * `default` - Value used when the variable is missing or unparsable
///
/// # Returns
///
/// The parsed value, or `default`
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().unwrap_or_else(|_| {
            error!("Failed to parse {}: {}, using default", env_var, val);
            default
        }),
        Err(_) => default,
    }
}

/// Reads and parses an environment variable
///
/// # Arguments
///
/// * `env_var` - Name of the environment variable
///
/// # Returns
///
/// `Some(value)` when the variable is set and parses, `None` otherwise
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    env::var(env_var).ok().and_then(|val| val.parse::<T>().ok())
}

/// Reads a string variable that the client cannot work without
///
/// Missing or blank values are reported through `tracing` and returned as an
/// empty string, so construction still succeeds and the auth server gets the
/// final word on the credentials.
///
/// # Arguments
///
/// * `env_var` - Name of the environment variable
///
/// # Returns
///
/// The variable's value, or an empty string when it is missing or blank
pub fn get_env_required(env_var: &str) -> String {
    match env::var(env_var) {
        Ok(val) if !val.trim().is_empty() => val,
        _ => {
            error!("{} not found in environment variables or .env file", env_var);
            String::new()
        }
    }
}
