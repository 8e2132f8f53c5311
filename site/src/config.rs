use std::str::FromStr;
use std::time::Duration;

use dioxus_logger::tracing::Level;

/// Site-wide settings fixed at build time.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SiteConfig {
    /// Verbosity passed to the logger by the binaries.
    pub log_level: Level,
    /// Delay between typewriter keystrokes.
    pub type_speed: Duration,
    /// How long a fully typed phrase stays on screen.
    pub type_hold: Duration,
}

impl SiteConfig {
    pub const DEFAULT_LOG_LEVEL: Level = Level::INFO;
    pub const DEFAULT_TYPE_SPEED: Duration = Duration::from_millis(50);
    pub const DEFAULT_TYPE_HOLD: Duration = Duration::from_millis(2000);

    /// Creates a SiteConfig from variables captured when the crate was
    /// compiled. The browser has no process environment, so runtime
    /// `std::env` lookups would always miss.
    ///
    /// # Build Environment Variables
    /// - `PORTFOLIO_LOG_LEVEL`: "trace", "debug", "info", "warn" or "error".
    /// - `PORTFOLIO_TYPE_SPEED_MS`: keystroke delay in milliseconds.
    /// - `PORTFOLIO_TYPE_HOLD_MS`: hold time in milliseconds.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("PORTFOLIO_LOG_LEVEL"),
            option_env!("PORTFOLIO_TYPE_SPEED_MS"),
            option_env!("PORTFOLIO_TYPE_HOLD_MS"),
        )
    }

    /// Unset or unparsable values keep their defaults.
    pub fn from_values(
        log_level: Option<&str>,
        type_speed_ms: Option<&str>,
        type_hold_ms: Option<&str>,
    ) -> Self {
        let log_level = log_level
            .and_then(|s| Level::from_str(s.trim()).ok())
            .unwrap_or(Self::DEFAULT_LOG_LEVEL);

        Self {
            log_level,
            type_speed: parse_millis(type_speed_ms).unwrap_or(Self::DEFAULT_TYPE_SPEED),
            type_hold: parse_millis(type_hold_ms).unwrap_or(Self::DEFAULT_TYPE_HOLD),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

// zero would spin the typewriter coroutine
fn parse_millis(value: Option<&str>) -> Option<Duration> {
    value
        .and_then(|s| s.trim().parse::<u64>().ok())
        .filter(|ms| *ms > 0)
        .map(Duration::from_millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_unset() {
        let config = SiteConfig::from_values(None, None, None);
        assert_eq!(config.log_level, Level::INFO);
        assert_eq!(config.type_speed, Duration::from_millis(50));
        assert_eq!(config.type_hold, Duration::from_secs(2));
    }

    #[test]
    fn parses_overrides() {
        let config = SiteConfig::from_values(Some("debug"), Some(" 80 "), Some("1500"));
        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(config.type_speed, Duration::from_millis(80));
        assert_eq!(config.type_hold, Duration::from_millis(1500));
    }

    #[test]
    fn rejects_garbage_and_zero() {
        let config = SiteConfig::from_values(Some("loud"), Some("0"), Some("-3"));
        assert_eq!(config, SiteConfig::from_values(None, None, None));
    }
}
