//! Session configuration.

use crate::error::ChainError;
use crate::stage::SleepStage;

/// Session geometry for one simulated night of sleep.
///
/// Use the builder methods to customise parameters.
///
/// # Example
///
/// ```
/// use hypnos_chain::{SessionConfig, SleepStage};
///
/// let config = SessionConfig::new()
///     .with_epoch_minutes(10)
///     .with_initial_stage(SleepStage::Light);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.epoch_count(), 48);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SessionConfig {
    epoch_minutes: u32,
    duration_hours: u32,
    initial_stage: SleepStage,
}

impl SessionConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: 5-minute epochs, 8-hour session (96 epochs), starting Awake.
    pub fn new() -> Self {
        Self {
            epoch_minutes: 5,
            duration_hours: 8,
            initial_stage: SleepStage::Awake,
        }
    }

    /// Sets the epoch duration in minutes.
    pub fn with_epoch_minutes(mut self, minutes: u32) -> Self {
        self.epoch_minutes = minutes;
        self
    }

    /// Sets the total session duration in hours.
    pub fn with_duration_hours(mut self, hours: u32) -> Self {
        self.duration_hours = hours;
        self
    }

    /// Sets the stage the session starts in.
    pub fn with_initial_stage(mut self, stage: SleepStage) -> Self {
        self.initial_stage = stage;
        self
    }

    // --- Accessors ---

    /// Returns the epoch duration in minutes.
    pub fn epoch_minutes(&self) -> u32 {
        self.epoch_minutes
    }

    /// Returns the total session duration in hours.
    pub fn duration_hours(&self) -> u32 {
        self.duration_hours
    }

    /// Returns the stage the session starts in.
    pub fn initial_stage(&self) -> SleepStage {
        self.initial_stage
    }

    /// Number of whole epochs spanned by the session.
    ///
    /// Durations that do not divide evenly truncate to whole epochs.
    pub fn epoch_count(&self) -> usize {
        (self.duration_hours as usize * 60)
            .checked_div(self.epoch_minutes as usize)
            .unwrap_or(0)
    }

    /// Validates this configuration.
    ///
    /// Checks that the epoch duration and session duration are positive and
    /// that the session spans at least one whole epoch.
    pub fn validate(&self) -> Result<(), ChainError> {
        if self.epoch_minutes == 0 {
            return Err(ChainError::InvalidSession {
                reason: "epoch_minutes must be at least 1".to_string(),
            });
        }
        if self.duration_hours == 0 {
            return Err(ChainError::InvalidSession {
                reason: "duration_hours must be at least 1".to_string(),
            });
        }
        if self.epoch_count() == 0 {
            return Err(ChainError::InvalidSession {
                reason: format!(
                    "session spans less than one epoch: {} h at {} min per epoch",
                    self.duration_hours, self.epoch_minutes
                ),
            });
        }
        Ok(())
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = SessionConfig::new();
        assert_eq!(cfg.epoch_minutes(), 5);
        assert_eq!(cfg.duration_hours(), 8);
        assert_eq!(cfg.initial_stage(), SleepStage::Awake);
        assert_eq!(cfg.epoch_count(), 96);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn builder_chaining() {
        let cfg = SessionConfig::new()
            .with_epoch_minutes(15)
            .with_duration_hours(6)
            .with_initial_stage(SleepStage::Light);
        assert_eq!(cfg.epoch_minutes(), 15);
        assert_eq!(cfg.duration_hours(), 6);
        assert_eq!(cfg.initial_stage(), SleepStage::Light);
        assert_eq!(cfg.epoch_count(), 24);
    }

    #[test]
    fn uneven_division_truncates() {
        let cfg = SessionConfig::new()
            .with_epoch_minutes(7)
            .with_duration_hours(1);
        assert_eq!(cfg.epoch_count(), 8);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_zero_epoch_minutes() {
        let cfg = SessionConfig::new().with_epoch_minutes(0);
        assert!(matches!(
            cfg.validate(),
            Err(ChainError::InvalidSession { .. })
        ));
        assert_eq!(cfg.epoch_count(), 0);
    }

    #[test]
    fn validate_zero_duration() {
        let cfg = SessionConfig::new().with_duration_hours(0);
        assert!(matches!(
            cfg.validate(),
            Err(ChainError::InvalidSession { .. })
        ));
    }

    #[test]
    fn validate_epoch_longer_than_session() {
        let cfg = SessionConfig::new()
            .with_epoch_minutes(90)
            .with_duration_hours(1);
        assert!(matches!(
            cfg.validate(),
            Err(ChainError::InvalidSession { .. })
        ));
    }
}
