use std::env;
use std::time::Duration;

use crate::domain::rules::{valid_hand_size, DEFAULT_HAND_SIZE, DEFAULT_WIN_THRESHOLD};
use crate::domain::MatchRules;
use crate::error::AppError;

pub const SCORE_LIMIT_VAR: &str = "BRINGTEN_SCORE_LIMIT";
pub const HAND_SIZE_VAR: &str = "BRINGTEN_HAND_SIZE";
pub const ROOM_EXPIRY_VAR: &str = "BRINGTEN_ROOM_EXPIRY_SECS";
pub const SWEEP_INTERVAL_VAR: &str = "BRINGTEN_SWEEP_INTERVAL_SECS";

const DEFAULT_ROOM_EXPIRY: Duration = Duration::from_secs(30 * 60);
const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(15 * 60);

/// Engine tunables. Every room created by a service uses the same values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub win_threshold: u16,
    pub hand_size: u8,
    /// Rooms idle longer than this are reaped.
    pub room_expiry: Duration,
    /// How often the reaper sweeps.
    pub sweep_interval: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            win_threshold: DEFAULT_WIN_THRESHOLD,
            hand_size: DEFAULT_HAND_SIZE,
            room_expiry: DEFAULT_ROOM_EXPIRY,
            sweep_interval: DEFAULT_SWEEP_INTERVAL,
        }
    }
}

impl EngineConfig {
    /// Read overrides from the environment; unset variables keep defaults.
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();
        let config = Self {
            win_threshold: parse_var(SCORE_LIMIT_VAR)?.unwrap_or(defaults.win_threshold),
            hand_size: parse_var(HAND_SIZE_VAR)?.unwrap_or(defaults.hand_size),
            room_expiry: parse_var(ROOM_EXPIRY_VAR)?
                .map(Duration::from_secs)
                .unwrap_or(defaults.room_expiry),
            sweep_interval: parse_var(SWEEP_INTERVAL_VAR)?
                .map(Duration::from_secs)
                .unwrap_or(defaults.sweep_interval),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.win_threshold == 0 {
            return Err(AppError::config("Score limit must be at least 1"));
        }
        if !valid_hand_size(self.hand_size) {
            return Err(AppError::config(format!(
                "Hand size {} does not fit four hands and a trump flip in one deck",
                self.hand_size
            )));
        }
        if self.sweep_interval.is_zero() {
            return Err(AppError::config("Sweep interval must be non-zero"));
        }
        Ok(())
    }

    pub fn match_rules(&self) -> MatchRules {
        MatchRules {
            win_threshold: self.win_threshold,
            hand_size: self.hand_size,
        }
    }
}

/// Parse an optional environment variable, rejecting malformed values.
fn parse_var<T: std::str::FromStr>(name: &str) -> Result<Option<T>, AppError> {
    match env::var(name) {
        Ok(raw) => raw.trim().parse::<T>().map(Some).map_err(|_| {
            AppError::config(format!("Environment variable '{name}' has invalid value '{raw}'"))
        }),
        Err(_) => Ok(None),
    }
}
