use crate::weather::condition::Condition;

/// Result of checking one location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    pub location: String,
    pub condition: Condition,
}

/// What a run produced, in location order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    pub observations: Vec<Observation>,
    /// True when a [`CancelToken`](crate::weather::cancel_token::CancelToken)
    /// stopped the run before every location was checked.
    pub cancelled: bool,
}
