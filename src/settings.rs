use std::{path::PathBuf, time::Duration};

use crate::{
    config::{Config, ConfigError, expand_path},
    log::log_level::LogLevel,
    weather::{condition::Condition, outcome_set::OutcomeSet},
};

pub const DEFAULT_LOGGER_NAME: &str = "weather_checker";
pub const DEFAULT_LOG_PATH: &str = "weather.log";
pub const DEFAULT_LOCATIONS: [&str; 4] = ["Tehran", "Shiraz", "Isfahan", "Tabriz"];
pub const DEFAULT_DELAY: Duration = Duration::from_secs(1);

/// Typed view of everything the checker can be configured with.
///
/// Missing keys keep their defaults; present but malformed values are
/// rejected rather than silently ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherSettings {
    pub logger_name: String,
    pub log_path: PathBuf,
    pub level: LogLevel,
    pub locations: Vec<String>,
    pub delay: Duration,
    pub outcomes: OutcomeSet,
}

impl Default for WeatherSettings {
    fn default() -> Self {
        Self {
            logger_name: DEFAULT_LOGGER_NAME.to_owned(),
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            level: LogLevel::Info,
            locations: DEFAULT_LOCATIONS.iter().map(|s| (*s).to_owned()).collect(),
            delay: DEFAULT_DELAY,
            outcomes: OutcomeSet::default(),
        }
    }
}

impl WeatherSettings {
    /// Reads `[Logging]` and `[Weather]` from `config`.
    ///
    /// # Errors
    /// [`ConfigError::InvalidValue`] for an unknown level, a non-numeric
    /// `delay_ms`, an unknown outcome label or an empty outcome list.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let mut settings = Self::default();

        settings.logger_name = config
            .get_non_empty_or_default("Logging", "logger_name", DEFAULT_LOGGER_NAME)
            .to_owned();

        if let Some(path) = config.get_non_empty("Logging", "log_path") {
            settings.log_path = expand_path(path);
        }

        if let Some(raw) = config.get_non_empty("Logging", "level") {
            settings.level = raw
                .parse()
                .map_err(|e| invalid("Logging", "level", raw, e))?;
        }

        if let Some(locations) = config.get_list("Weather", "locations") {
            settings.locations = locations;
        }

        if let Some(raw) = config.get_non_empty("Weather", "delay_ms") {
            let ms: u64 = raw
                .trim()
                .parse()
                .map_err(|e| invalid("Weather", "delay_ms", raw, e))?;
            settings.delay = Duration::from_millis(ms);
        }

        if let Some(labels) = config.get_list("Weather", "outcomes") {
            let raw = labels.join(", ");
            let parsed = labels
                .iter()
                .map(|l| l.parse::<Condition>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| invalid("Weather", "outcomes", &raw, e))?;
            settings.outcomes = OutcomeSet::new(parsed).ok_or_else(|| {
                invalid("Weather", "outcomes", &raw, "at least one outcome is required")
            })?;
        }

        Ok(settings)
    }
}

fn invalid(section: &str, key: &str, value: &str, reason: impl ToString) -> ConfigError {
    ConfigError::InvalidValue {
        section: section.to_owned(),
        key: key.to_owned(),
        value: value.to_owned(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    #[test]
    fn empty_config_gives_baseline_defaults() {
        let s = WeatherSettings::from_config(&Config::empty()).unwrap();

        assert_eq!(s, WeatherSettings::default());
        assert_eq!(s.locations, vec!["Tehran", "Shiraz", "Isfahan", "Tabriz"]);
        assert_eq!(s.delay, Duration::from_secs(1));
        assert_eq!(s.log_path, PathBuf::from("weather.log"));
        assert_eq!(s.outcomes.as_slice(), &Condition::ALL);
    }

    #[test]
    fn every_key_can_be_overridden() {
        let cfg = Config::parse(
            "[Logging]\nlogger_name = night\nlog_path = out/n.log\nlevel = warning\n\
             [Weather]\nlocations = Yazd, Kerman\ndelay_ms = 5\noutcomes = Rainy, stormy\n",
        );
        let s = WeatherSettings::from_config(&cfg).unwrap();

        assert_eq!(s.logger_name, "night");
        assert_eq!(s.log_path, PathBuf::from("out/n.log"));
        assert_eq!(s.level, LogLevel::Warning);
        assert_eq!(s.locations, vec!["Yazd", "Kerman"]);
        assert_eq!(s.delay, Duration::from_millis(5));
        assert_eq!(s.outcomes.as_slice(), &[Condition::Rainy, Condition::Stormy]);
    }

    #[test]
    fn empty_location_list_is_allowed() {
        let cfg = Config::parse("[Weather]\nlocations =\n");
        let s = WeatherSettings::from_config(&cfg).unwrap();
        assert!(s.locations.is_empty());
    }

    #[test]
    fn unknown_outcome_is_rejected() {
        let cfg = Config::parse("[Weather]\noutcomes = Sunny, Foggy\n");
        match WeatherSettings::from_config(&cfg) {
            Err(ConfigError::InvalidValue { key, .. }) => assert_eq!(key, "outcomes"),
            other => panic!("expected InvalidValue, got: {:?}", other),
        }
    }

    #[test]
    fn empty_outcome_list_is_rejected() {
        let cfg = Config::parse("[Weather]\noutcomes = ,\n");
        assert!(WeatherSettings::from_config(&cfg).is_err());
    }

    #[test]
    fn bad_delay_and_level_are_rejected() {
        let cfg = Config::parse("[Weather]\ndelay_ms = soon\n");
        assert!(WeatherSettings::from_config(&cfg).is_err());

        let cfg = Config::parse("[Logging]\nlevel = loud\n");
        assert!(WeatherSettings::from_config(&cfg).is_err());
    }
}
