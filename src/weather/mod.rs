pub mod cancel_token;
pub mod condition;
pub mod delay;
pub mod observation;
pub mod outcome_set;
pub mod weather_checker;
pub mod weather_source;
pub use condition::Condition;
pub use weather_checker::WeatherChecker;
