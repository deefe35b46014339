use crate::config::PackerConfig;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

/// The clock is only consulted once every this many attempts
const CLOCK_INTERVAL: u64 = 256;

/// Why a packing search was cut short
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbortReason {
    AttemptLimit,
    TimeLimit,
}

/// Keeps track of the effort spent on a packing search.
#[derive(Clone, Debug)]
pub struct SearchBudget {
    max_attempts: Option<u64>,
    deadline: Option<Instant>,
    attempts: u64,
    exceeded: Option<AbortReason>,
}

impl SearchBudget {
    pub fn new(max_attempts: Option<u64>, time_limit: Option<Duration>) -> Self {
        SearchBudget {
            max_attempts,
            deadline: time_limit.map(|tl| Instant::now() + tl),
            attempts: 0,
            exceeded: None,
        }
    }

    pub fn from_config(config: &PackerConfig) -> Self {
        Self::new(
            config.max_attempts,
            config.time_limit_ms.map(Duration::from_millis),
        )
    }

    pub fn unlimited() -> Self {
        Self::new(None, None)
    }

    /// Registers a fit attempt. Fails with the limit that was hit if the budget does not allow it.
    pub fn spend(&mut self) -> Result<(), AbortReason> {
        if let Some(reason) = self.exceeded {
            return Err(reason);
        }
        if let Some(max) = self.max_attempts
            && self.attempts >= max
        {
            self.exceeded = Some(AbortReason::AttemptLimit);
            return Err(AbortReason::AttemptLimit);
        }
        if let Some(deadline) = self.deadline
            && self.attempts % CLOCK_INTERVAL == 0
            && Instant::now() >= deadline
        {
            self.exceeded = Some(AbortReason::TimeLimit);
            return Err(AbortReason::TimeLimit);
        }
        self.attempts += 1;
        Ok(())
    }

    pub fn attempts(&self) -> u64 {
        self.attempts
    }
}
