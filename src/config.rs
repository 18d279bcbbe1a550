use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::{fmt, fs, io};

/// Errors raised while reading or interpreting a configuration file.
#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "Error reading file {}: {source}", path.display())
            }
            ConfigError::InvalidValue {
                section,
                key,
                value,
                reason,
            } => write!(f, "invalid value {value:?} for [{section}] {key}: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            ConfigError::InvalidValue { .. } => None,
        }
    }
}

/// INI-style key/value configuration.
///
/// ```text
/// # comment
/// global_key = value
///
/// [Section]
/// key = "quoted or bare value"
/// ```
#[derive(Debug, Default)]
pub struct Config {
    pub globals: HashMap<String, String>,
    pub sections: HashMap<String, HashMap<String, String>>,
}

impl Config {
    /// Reads and parses the file at `path`.
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] if the file cannot be read.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&content))
    }

    /// Parses configuration text. Lines that are neither a section header
    /// nor `key = value` are ignored.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let mut globals = HashMap::new();
        let mut sections: HashMap<String, HashMap<String, String>> = HashMap::new();
        let mut current_section: Option<String> = None;

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                current_section = Some(name.trim().to_string());
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim().to_string();
                let value = value.trim().trim_matches('"').to_string();

                match &current_section {
                    None => {
                        globals.insert(key, value);
                    }
                    Some(sec) => {
                        sections.entry(sec.clone()).or_default().insert(key, value);
                    }
                }
            }
        }
        Config { globals, sections }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|sec| sec.get(key))
            .map(|s| s.as_str())
    }

    #[must_use]
    pub fn get_non_empty(&self, section: &str, key: &str) -> Option<&str> {
        self.get(section, key).filter(|s| !s.is_empty())
    }

    #[must_use]
    pub fn get_global(&self, key: &str) -> Option<&str> {
        self.globals.get(key).map(|s| s.as_str())
    }

    /// Section value, then global value, then `default`. Empty values count
    /// as missing.
    #[must_use]
    pub fn get_non_empty_or_default<'a>(
        &'a self,
        section: &str,
        key: &str,
        default: &'a str,
    ) -> &'a str {
        self.get_non_empty(section, key)
            .or_else(|| self.get_global(key).filter(|s| !s.is_empty()))
            .unwrap_or(default)
    }

    /// Splits a comma-separated value into trimmed, non-empty items.
    ///
    /// Returns `None` if the key is absent, `Some(vec![])` if it is present
    /// but lists nothing.
    #[must_use]
    pub fn get_list(&self, section: &str, key: &str) -> Option<Vec<String>> {
        self.get(section, key).map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
                .collect()
        })
    }
}

/// Expands tilde (`~`) in file paths to the user's home directory.
pub fn expand_path(path_str: &str) -> PathBuf {
    if path_str.starts_with('~') {
        let home = std::env::var("HOME")
            .or_else(|_| std::env::var("USERPROFILE"))
            .ok()
            .map(PathBuf::from);

        if let Some(mut home_path) = home {
            if path_str == "~" {
                return home_path;
            }
            if let Some(rest) = path_str
                .strip_prefix("~/")
                .or_else(|| path_str.strip_prefix("~\\"))
            {
                home_path.push(rest);
                return home_path;
            }
        }
    }
    PathBuf::from(path_str)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]
    use super::*;

    const SAMPLE: &str = r#"
# weather checker
logger_name = global_name

[Logging]
log_path = "logs/weather.log"
level =

[Weather]
locations = Tehran, Shiraz ,, Isfahan
"#;

    #[test]
    fn parses_sections_globals_and_quotes() {
        let cfg = Config::parse(SAMPLE);

        assert_eq!(cfg.get_global("logger_name"), Some("global_name"));
        assert_eq!(cfg.get("Logging", "log_path"), Some("logs/weather.log"));
        assert_eq!(cfg.get("Logging", "level"), Some(""));
        assert_eq!(cfg.get_non_empty("Logging", "level"), None);
    }

    #[test]
    fn default_lookup_falls_back_to_globals() {
        let cfg = Config::parse(SAMPLE);

        assert_eq!(
            cfg.get_non_empty_or_default("Logging", "logger_name", "x"),
            "global_name"
        );
        assert_eq!(cfg.get_non_empty_or_default("Logging", "level", "INFO"), "INFO");
    }

    #[test]
    fn lists_are_trimmed_and_skip_blanks() {
        let cfg = Config::parse(SAMPLE);

        assert_eq!(
            cfg.get_list("Weather", "locations").unwrap(),
            vec!["Tehran", "Shiraz", "Isfahan"]
        );
        assert_eq!(cfg.get_list("Weather", "outcomes"), None);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = std::env::temp_dir().join("weather_checker_no_such_config.conf");
        let _ = fs::remove_file(&path);
        assert!(matches!(Config::load(&path), Err(ConfigError::Io { .. })));
    }

    #[test]
    fn expand_path_leaves_plain_paths_alone() {
        assert_eq!(expand_path("weather.log"), PathBuf::from("weather.log"));
        assert_eq!(expand_path("/var/log/w.log"), PathBuf::from("/var/log/w.log"));
    }
}
