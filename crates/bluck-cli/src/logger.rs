//! Logging setup for the bluck CLI.
//!
//! Logs go to stderr so stdout carries only command output.
//!
//! The filter is chosen in this order:
//! 1. `--verbose`: DEBUG for bluck crates
//! 2. `--quiet`: ERROR only
//! 3. `RUST_LOG`
//! 4. `settings.log_level` from the configuration
//! 5. INFO for bluck crates
//!
//! Colours are off under `--no-color` or `NO_COLOR`, forced on by
//! `FORCE_COLOR`, and otherwise follow whether stderr is a terminal.

use std::io::IsTerminal;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const CRATES: [&str; 6] = [
    "bluck",
    "bluck_cli",
    "bluck_catalog",
    "bluck_config",
    "bluck_graph",
    "bluck_mood",
];

fn crate_filter(level: &str) -> String {
    CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Build the filter for the given flags.
pub fn build_filter(verbose: bool, quiet: bool, config_level: Option<&str>) -> EnvFilter {
    if verbose {
        return EnvFilter::new(crate_filter("debug"));
    }
    if quiet {
        return EnvFilter::new("error");
    }

    EnvFilter::try_from_default_env()
        .ok()
        .or_else(|| config_level.and_then(|level| EnvFilter::try_new(crate_filter(level)).ok()))
        .unwrap_or_else(|| EnvFilter::new(crate_filter("info")))
}

fn color_enabled(no_color_flag: bool, no_color_env: bool, force_color_env: bool, tty: bool) -> bool {
    if no_color_flag || no_color_env {
        return false;
    }
    force_color_env || tty
}

/// Whether log output on stderr should carry ANSI colours.
pub fn should_use_color(no_color: bool) -> bool {
    color_enabled(
        no_color,
        std::env::var_os("NO_COLOR").is_some(),
        std::env::var_os("FORCE_COLOR").is_some(),
        std::io::stderr().is_terminal(),
    )
}

/// Install the global subscriber. Call once, before anything logs.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool, config_level: Option<&str>) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(should_use_color(no_color))
        .compact();

    tracing_subscriber::registry()
        .with(build_filter(verbose, quiet, config_level))
        .with(fmt_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crate_filter_covers_every_crate() {
        let filter = crate_filter("warn");
        assert!(filter.starts_with("bluck=warn,"));
        assert!(filter.contains("bluck_graph=warn"));
        assert_eq!(filter.matches('=').count(), CRATES.len());
    }

    #[test]
    fn no_color_wins_over_force_color() {
        assert!(!color_enabled(true, false, true, true));
        assert!(!color_enabled(false, true, true, true));
        assert!(color_enabled(false, false, true, false));
        assert!(color_enabled(false, false, false, true));
        assert!(!color_enabled(false, false, false, false));
    }

    #[test]
    fn flags_take_precedence() {
        use tracing_subscriber::filter::LevelFilter;

        let verbose = build_filter(true, false, Some("error"));
        assert_eq!(verbose.max_level_hint(), Some(LevelFilter::DEBUG));
        let quiet = build_filter(false, true, Some("debug"));
        assert_eq!(quiet.max_level_hint(), Some(LevelFilter::ERROR));
    }
}
