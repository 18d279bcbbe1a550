use std::{fmt, str::FromStr};

/// A simulated weather reading.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Condition {
    Sunny,
    Cloudy,
    Rainy,
    Stormy,
}

impl Condition {
    /// Every condition, in canonical order.
    pub const ALL: [Condition; 4] = [
        Condition::Sunny,
        Condition::Cloudy,
        Condition::Rainy,
        Condition::Stormy,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Condition::Sunny => "Sunny",
            Condition::Cloudy => "Cloudy",
            Condition::Rainy => "Rainy",
            Condition::Stormy => "Stormy",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCondition(pub String);

impl fmt::Display for UnknownCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown weather condition {:?} (expected Sunny, Cloudy, Rainy or Stormy)",
            self.0
        )
    }
}

impl std::error::Error for UnknownCondition {}

impl FromStr for Condition {
    type Err = UnknownCondition;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        Condition::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(label))
            .ok_or_else(|| UnknownCondition(label.to_owned()))
    }
}
