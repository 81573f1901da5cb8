//! Tunable parameters of a kinetic scroll view.

use kinetic_animation::DEFAULT_DECEL_RATE;
use kinetic_foundation::gesture_constants::DEFAULT_BUFFER_CAPACITY;

/// Rejected configuration values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    /// Deceleration rates must be finite and strictly greater than 1.
    DecelRate(f64),
    /// The motion buffer must hold at least one sample.
    BufferCapacity(usize),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::DecelRate(rate) => {
                write!(f, "deceleration rate {rate} must be greater than 1")
            }
            ConfigError::BufferCapacity(capacity) => {
                write!(f, "motion buffer capacity {capacity} must be at least 1")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Clone, PartialEq)]
pub struct KineticParameters {
    kinetic: bool,
    decel_rate: f64,
    buffer_capacity: usize,
}

impl Default for KineticParameters {
    fn default() -> Self {
        Self {
            kinetic: false,
            decel_rate: DEFAULT_DECEL_RATE,
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
        }
    }
}

impl KineticParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether releasing a drag starts a fling. Off by default.
    pub fn kinetic(&self) -> bool {
        self.kinetic
    }

    pub fn decel_rate(&self) -> f64 {
        self.decel_rate
    }

    pub fn buffer_capacity(&self) -> usize {
        self.buffer_capacity
    }

    pub fn with_kinetic(mut self, kinetic: bool) -> Self {
        self.kinetic = kinetic;
        self
    }

    pub fn with_decel_rate(mut self, decel_rate: f64) -> Result<Self, ConfigError> {
        self.set_decel_rate(decel_rate)?;
        Ok(self)
    }

    pub fn with_buffer_capacity(mut self, capacity: usize) -> Result<Self, ConfigError> {
        self.set_buffer_capacity(capacity)?;
        Ok(self)
    }

    pub fn set_kinetic(&mut self, kinetic: bool) {
        self.kinetic = kinetic;
    }

    pub fn set_decel_rate(&mut self, decel_rate: f64) -> Result<(), ConfigError> {
        if !decel_rate.is_finite() || decel_rate <= 1.0 {
            return Err(ConfigError::DecelRate(decel_rate));
        }
        self.decel_rate = decel_rate;
        Ok(())
    }

    pub fn set_buffer_capacity(&mut self, capacity: usize) -> Result<(), ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::BufferCapacity(capacity));
        }
        self.buffer_capacity = capacity;
        Ok(())
    }
}
