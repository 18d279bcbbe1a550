//! The `weather_checker` binary: one check over the configured locations.
//!
//! ```text
//! weather_checker                 # uses ./weather_checker.conf if present, else defaults
//! weather_checker my_settings.conf
//! ```

use std::{env, io, process};

use weather_checker::{
    config::{Config, ConfigError},
    log::{LogLevel, LoggerRegistry},
    logger_log,
    settings::WeatherSettings,
    weather::{WeatherChecker, delay::ThreadSleep, weather_source::RandomWeather},
};

const DEFAULT_CONFIG_PATH: &str = "weather_checker.conf";

fn load_settings(args: &[String]) -> Result<WeatherSettings, ConfigError> {
    let config = match args.get(1) {
        Some(path) => Config::load(path)?,
        None => match Config::load(DEFAULT_CONFIG_PATH) {
            Ok(cfg) => cfg,
            Err(ConfigError::Io { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                Config::empty()
            }
            Err(e) => return Err(e),
        },
    };
    WeatherSettings::from_config(&config)
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let settings = load_settings(&args).unwrap_or_else(|e| {
        eprintln!("[weather_checker] {e}");
        process::exit(1);
    });

    // --- Start process logger ----------------------------------------------
    let registry = LoggerRegistry::new();
    let log = match registry.initialize(&settings.logger_name, &settings.log_path) {
        Ok(handle) => handle,
        Err(e) => {
            // The console sink is attached before the file is opened.
            let reported = registry
                .get(&settings.logger_name)
                .is_some_and(|console| logger_log!(console, LogLevel::Critical, "{e}").is_ok());
            if !reported {
                eprintln!("[weather_checker] {e}");
            }
            process::exit(1);
        }
    };
    log.logger().set_threshold(settings.level);

    // --- Run the check (blocks for delay * locations) ----------------------
    let checker = WeatherChecker::from_settings(&settings);
    let mut source = RandomWeather::from_entropy();
    if let Err(e) = checker.run(&log, &mut source, &mut ThreadSleep) {
        eprintln!("[weather_checker] {e}");
        process::exit(1);
    }
}
