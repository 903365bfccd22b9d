//! Engine configuration.

use std::env;

use serde::{Deserialize, Serialize};

use crate::ai::registry;
use crate::domain::events::DEFAULT_EVENT_LOG_CAPACITY;
use crate::domain::rules::PLAYERS;
use crate::error::AppError;

/// Who drives a seat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SeatKind {
    /// Actions arrive through the public action entry points.
    Human,
    /// A registered player profile; see [`crate::ai::registered_ais`].
    Ai {
        profile: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        seed: Option<u64>,
    },
}

impl SeatKind {
    pub fn ai(profile: impl Into<String>) -> Self {
        SeatKind::Ai {
            profile: profile.into(),
            seed: None,
        }
    }

    pub fn is_human(&self) -> bool {
        matches!(self, SeatKind::Human)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Deterministic dealing when set; OS entropy otherwise.
    pub seed: Option<u64>,
    /// Number of recent notices kept in the event log (at least 1).
    pub event_log_capacity: usize,
    pub seats: [SeatKind; PLAYERS],
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::with_ai_profile(registry::default_profile())
    }
}

impl EngineConfig {
    /// Human at seat 0, `profile` at the other three seats.
    pub fn with_ai_profile(profile: &str) -> Self {
        Self {
            seed: None,
            event_log_capacity: DEFAULT_EVENT_LOG_CAPACITY,
            seats: [
                SeatKind::Human,
                SeatKind::ai(profile),
                SeatKind::ai(profile),
                SeatKind::ai(profile),
            ],
        }
    }

    /// Every seat driven by `profile`; used for headless simulation.
    pub fn all_ai(profile: &str) -> Self {
        Self {
            seats: std::array::from_fn(|_| SeatKind::ai(profile)),
            ..Self::with_ai_profile(profile)
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load overrides from `RANG_SEED`, `RANG_EVENT_LOG_CAPACITY` and `RANG_AI_PROFILE`.
    pub fn from_env() -> Result<Self, AppError> {
        let profile = match env::var("RANG_AI_PROFILE") {
            Ok(p) => p,
            Err(_) => registry::default_profile().to_string(),
        };
        let mut config = Self::with_ai_profile(&profile);
        config.seed = parse_var::<u64>("RANG_SEED")?;
        if let Some(cap) = parse_var::<usize>("RANG_EVENT_LOG_CAPACITY")? {
            config.event_log_capacity = cap;
        }
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON config document; missing fields take their defaults.
    pub fn from_json(raw: &str) -> Result<Self, AppError> {
        let config: Self = serde_json::from_str(raw)
            .map_err(|e| AppError::config(format!("invalid engine config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.event_log_capacity == 0 {
            return Err(AppError::config("event_log_capacity must be at least 1"));
        }
        for (seat, kind) in self.seats.iter().enumerate() {
            if let SeatKind::Ai { profile, .. } = kind {
                if registry::by_name(profile).is_none() {
                    return Err(AppError::config(format!(
                        "Unknown AI profile '{profile}' for seat {seat}"
                    )));
                }
            }
        }
        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Result<Option<T>, AppError> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| AppError::config(format!("{key} has an invalid value: '{raw}'"))),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(e) => Err(AppError::config(format!("{key}: {e}"))),
    }
}
