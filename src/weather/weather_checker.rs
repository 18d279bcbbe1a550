use std::time::Duration;

use crate::{
    log::{log_level::LogLevel, logger_handle::LoggerHandle, sink_error::SinkError},
    logger_log,
    settings::WeatherSettings,
    weather::{
        cancel_token::CancelToken,
        delay::Delay,
        observation::{Observation, RunReport},
        outcome_set::OutcomeSet,
        weather_source::WeatherSource,
    },
};

/// Walks a fixed list of locations and logs a simulated reading for each.
///
/// For every location, in list order, the checker logs that it is checking,
/// waits `delay_per_step`, asks the [`WeatherSource`] for a condition and
/// logs the result. One record opens the run and one closes it, so a
/// completed run over `N` locations emits exactly `2 * N + 2` records.
///
/// These records are the run's output, not diagnostics: they go through
/// `logger_log!` and are never compiled out by the `log-*` level features.
#[derive(Debug, Clone)]
pub struct WeatherChecker {
    locations: Vec<String>,
    delay_per_step: Duration,
    outcomes: OutcomeSet,
}

impl WeatherChecker {
    pub fn new<I, S>(locations: I, delay_per_step: Duration, outcomes: OutcomeSet) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            locations: locations.into_iter().map(Into::into).collect(),
            delay_per_step,
            outcomes,
        }
    }

    #[must_use]
    pub fn from_settings(settings: &WeatherSettings) -> Self {
        Self::new(
            settings.locations.iter().cloned(),
            settings.delay,
            settings.outcomes.clone(),
        )
    }

    /// Runs one full check.
    ///
    /// # Errors
    /// A [`SinkError`] from the logger is returned as-is; the run stops at
    /// that point and nothing is retried.
    pub fn run<W, D>(
        &self,
        log: &LoggerHandle,
        source: &mut W,
        delay: &mut D,
    ) -> Result<RunReport, SinkError>
    where
        W: WeatherSource + ?Sized,
        D: Delay + ?Sized,
    {
        self.run_with_cancel(log, source, delay, &CancelToken::new())
    }

    /// Like [`run`](Self::run), but checks `cancel` before each location.
    ///
    /// A cancelled run logs a WARNING in place of the completion record and
    /// returns the observations gathered so far.
    ///
    /// # Errors
    /// Same as [`run`](Self::run).
    pub fn run_with_cancel<W, D>(
        &self,
        log: &LoggerHandle,
        source: &mut W,
        delay: &mut D,
        cancel: &CancelToken,
    ) -> Result<RunReport, SinkError>
    where
        W: WeatherSource + ?Sized,
        D: Delay + ?Sized,
    {
        logger_log!(log, LogLevel::Info, "Starting weather check...")?;

        let mut report = RunReport {
            observations: Vec::with_capacity(self.locations.len()),
            cancelled: false,
        };

        for location in &self.locations {
            if cancel.is_cancelled() {
                report.cancelled = true;
                logger_log!(
                    log,
                    LogLevel::Warning,
                    "Weather check cancelled after {} of {} locations",
                    report.observations.len(),
                    self.locations.len()
                )?;
                return Ok(report);
            }

            logger_log!(log, LogLevel::Info, "Checking weather for {location}")?;
            delay.wait(self.delay_per_step);

            let condition = source.observe(location, &self.outcomes);
            logger_log!(log, LogLevel::Info, "The weather in {location} is: {condition}")?;

            report.observations.push(Observation {
                location: location.clone(),
                condition,
            });
        }

        logger_log!(log, LogLevel::Info, "Weather check completed ✅")?;
        Ok(report)
    }
}
