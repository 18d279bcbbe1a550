//! Simple, leveled logging macros for `LoggerHandle` and direct `Logger`.
//!
//! Each macro formats its arguments and evaluates to the
//! `Result<(), SinkError>` returned by `log`, so call sites can use `?`.
//!
//! # Feature Flags
//! specific log levels are controlled by cargo features:
//! `log-debug`, `log-info`, `log-warn`, `log-error`, `log-critical`.
//!
//! If a feature is disabled, the corresponding macro expands to `Ok(())`,
//! removing all formatting and allocation overhead at compile time.

// ============================================================================
// 1. GENERIC INTERNAL MACROS
// ============================================================================

#[macro_export]
macro_rules! logger_log {
    ($logger:expr, $lvl:expr, $($arg:tt)*) => {{
        let __msg = format!($($arg)*);
        $logger.log($lvl, &__msg)
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! logger_disabled {
    () => {
        ::core::result::Result::<(), $crate::log::sink_error::SinkError>::Ok(())
    };
}

// ============================================================================
// 2. LEVEL-SPECIFIC MACROS (Feature Gated)
// ============================================================================

// ---------------------- DEBUG ----------------------
#[cfg(feature = "log-debug")]
#[macro_export]
macro_rules! logger_debug { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::log_level::LogLevel::Debug, $($arg)*) } }

#[cfg(not(feature = "log-debug"))]
#[macro_export]
macro_rules! logger_debug {
    ($($arg:tt)*) => {
        $crate::logger_disabled!()
    };
}

// ---------------------- INFO ----------------------
#[cfg(feature = "log-info")]
#[macro_export]
macro_rules! logger_info { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::log_level::LogLevel::Info, $($arg)*) } }

#[cfg(not(feature = "log-info"))]
#[macro_export]
macro_rules! logger_info {
    ($($arg:tt)*) => {
        $crate::logger_disabled!()
    };
}

// ---------------------- WARN ----------------------
#[cfg(feature = "log-warn")]
#[macro_export]
macro_rules! logger_warn { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::log_level::LogLevel::Warning, $($arg)*) } }

#[cfg(not(feature = "log-warn"))]
#[macro_export]
macro_rules! logger_warn {
    ($($arg:tt)*) => {
        $crate::logger_disabled!()
    };
}

// ---------------------- ERROR ----------------------
#[cfg(feature = "log-error")]
#[macro_export]
macro_rules! logger_error { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::log_level::LogLevel::Error, $($arg)*) } }

#[cfg(not(feature = "log-error"))]
#[macro_export]
macro_rules! logger_error {
    ($($arg:tt)*) => {
        $crate::logger_disabled!()
    };
}

// ---------------------- CRITICAL ----------------------
// Generally always enabled, but consistent structure allows user to disable if really needed.
#[cfg(feature = "log-critical")]
#[macro_export]
macro_rules! logger_critical { ($logger:expr, $($arg:tt)*) => { $crate::logger_log!($logger, $crate::log::log_level::LogLevel::Critical, $($arg)*) } }

#[cfg(not(feature = "log-critical"))]
#[macro_export]
macro_rules! logger_critical {
    ($($arg:tt)*) => {
        $crate::logger_disabled!()
    };
}
