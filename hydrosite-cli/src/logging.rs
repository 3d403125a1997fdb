//! Logger installation for the CLI.

use std::io::IsTerminal;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;

use crate::CliError;

/// Environment variable consulted when `--log-level` is absent.
pub(crate) const ENV_LOG_LEVEL: &str = "HYDROSITE_LOG_LEVEL";

/// Level used when neither the flag nor the environment sets one.
pub(crate) const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

/// Parse a level name case-insensitively.
pub(crate) fn parse_level(level: &str) -> Result<LevelFilter, CliError> {
    match level.to_ascii_lowercase().as_str() {
        "off" => Ok(LevelFilter::Off),
        "error" => Ok(LevelFilter::Error),
        "warn" => Ok(LevelFilter::Warn),
        "info" => Ok(LevelFilter::Info),
        "debug" => Ok(LevelFilter::Debug),
        "trace" => Ok(LevelFilter::Trace),
        _ => Err(CliError::InvalidLogLevel {
            level: level.to_owned(),
        }),
    }
}

/// Resolve the level from the flag, then the environment, then the default.
pub(crate) fn resolve_level(
    from_flag: Option<&str>,
    from_env: Option<&str>,
) -> Result<LevelFilter, CliError> {
    from_flag
        .or(from_env)
        .map_or(Ok(DEFAULT_LOG_LEVEL), parse_level)
}

/// Install a `fern` dispatcher writing to stderr.
///
/// Output is coloured only when stderr is a terminal. Stdout stays reserved
/// for command output.
pub(crate) fn init(level: LevelFilter) -> Result<(), CliError> {
    let colours = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Green)
        .debug(Color::Blue)
        .trace(Color::Magenta);
    let use_colour = std::io::stderr().is_terminal();

    Dispatch::new()
        .format(move |out, message, record| {
            if use_colour {
                out.finish(format_args!(
                    "[{} {}] {message}",
                    colours.color(record.level()),
                    record.target()
                ));
            } else {
                out.finish(format_args!(
                    "[{} {}] {message}",
                    record.level(),
                    record.target()
                ));
            }
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;
    Ok(())
}
