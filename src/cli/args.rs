//! Command-line argument parsing for the hubview CLI.
//!
//! This module handles parsing command-line arguments and determining
//! which CLI command to execute.

use std::path::PathBuf;
use std::time::Duration;

use super::config::CliConfig;
use crate::models::ContentPolicy;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Load one view model
    Load(CliConfig),
}

/// Argument errors. The binary prints these with the usage text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgsError {
    #[error("missing view URI")]
    MissingViewUri,

    #[error("unexpected argument '{0}'")]
    Unexpected(String),

    #[error("option {0} requires a value")]
    MissingValue(&'static str),

    #[error("invalid value for {flag}: {reason}")]
    InvalidValue { flag: &'static str, reason: String },

    #[error("unknown option '{0}'")]
    UnknownOption(String),
}

/// Usage text for `--help`.
pub const USAGE: &str = "\
Usage: hubview [OPTIONS] <VIEW_URI>

Load one view model and print it as JSON.

Options:
      --offline            Treat the network as unreachable
      --policy <POLICY>    prefer-remote | prefer-local | remote-only | local-only
      --remote-url <URL>   Remote content base URL [env: HUBVIEW_REMOTE_URL]
      --cache-dir <DIR>    Local content directory [env: HUBVIEW_CACHE_DIR]
      --feature <NAME>     Feature identifier [default: hub]
      --timeout <SECS>     Give up on a provider after SECS seconds
  -h, --help               Print help
  -V, --version            Print version
";

/// Parse command-line arguments, using the process environment for fallbacks.
///
/// # Examples
///
/// ```
/// use hubview::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["hubview".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args.into_iter()), Ok(CliCommand::Version));
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
{
    parse_args_with_env(args, |key| std::env::var(key).ok())
}

/// Parse arguments with an explicit environment lookup.
///
/// Flags take precedence over environment values.
pub fn parse_args_with_env<I, F>(args: I, env: F) -> Result<CliCommand, ArgsError>
where
    I: Iterator<Item = String>,
    F: Fn(&str) -> Option<String>,
{
    let mut view_uri = None;
    let mut offline = false;
    let mut policy = None;
    let mut remote_url = None;
    let mut cache_dir = None;
    let mut feature = None;
    let mut timeout = None;

    // Skip the program name
    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--offline" => offline = true,
            "--policy" => {
                let value = args.next().ok_or(ArgsError::MissingValue("--policy"))?;
                let parsed = value
                    .parse::<ContentPolicy>()
                    .map_err(|reason| ArgsError::InvalidValue { flag: "--policy", reason })?;
                policy = Some(parsed);
            }
            "--remote-url" => {
                remote_url = Some(args.next().ok_or(ArgsError::MissingValue("--remote-url"))?);
            }
            "--cache-dir" => {
                cache_dir = Some(args.next().ok_or(ArgsError::MissingValue("--cache-dir"))?);
            }
            "--feature" => {
                feature = Some(args.next().ok_or(ArgsError::MissingValue("--feature"))?);
            }
            "--timeout" => {
                let value = args.next().ok_or(ArgsError::MissingValue("--timeout"))?;
                let secs = value.parse::<u64>().map_err(|e| ArgsError::InvalidValue {
                    flag: "--timeout",
                    reason: e.to_string(),
                })?;
                timeout = Some(Duration::from_secs(secs));
            }
            other if other.starts_with('-') && other.len() > 1 => {
                return Err(ArgsError::UnknownOption(other.to_string()));
            }
            _ => {
                if view_uri.is_some() {
                    return Err(ArgsError::Unexpected(arg));
                }
                view_uri = Some(arg);
            }
        }
    }

    let view_uri = view_uri.ok_or(ArgsError::MissingViewUri)?;
    let mut config = CliConfig::new(view_uri).with_env(env);

    if offline {
        config = config.with_offline(true);
    }
    if let Some(policy) = policy {
        config = config.with_policy(policy);
    }
    if let Some(url) = remote_url {
        config = config.with_remote_url(url);
    }
    if let Some(dir) = cache_dir {
        config = config.with_cache_dir(PathBuf::from(dir));
    }
    if let Some(feature) = feature {
        config = config.with_feature(feature);
    }
    if let Some(timeout) = timeout {
        config = config.with_timeout(timeout);
    }

    Ok(CliCommand::Load(config))
}
