//! Error types for tuning validation, settings loading and renderer setup

use thiserror::Error;

/// A tuning value that makes the simulation ill-formed
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TuningError {
    /// A value that must be a finite number is NaN or infinite
    #[error("{name} must be finite, got {value}")]
    NotFinite { name: &'static str, value: f32 },

    /// A value that must be strictly positive is not
    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f32 },

    /// A half-open range whose start is not below its end
    #[error("{name} range is empty: [{start}, {end})")]
    EmptyRange {
        name: &'static str,
        start: f32,
        end: f32,
    },

    /// Jump force must point up (negative y)
    #[error("jump force must be negative, got {0}")]
    JumpForceNotUpward(f32),

    /// Spawn interval of zero ticks
    #[error("{0} must be at least one tick")]
    ZeroInterval(&'static str),

    /// Ground line outside the visible field
    #[error("ground line {ground_y} must lie inside the field height {field_height}")]
    GroundOutsideField { ground_y: f32, field_height: f32 },

    /// Player does not fit between the top of the field and the ground line
    #[error("player height {height} does not fit above the ground line {ground_y}")]
    PlayerTooTall { height: f32, ground_y: f32 },
}

/// Failure to load host settings
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Settings file could not be read
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    /// Settings are not valid JSON for the expected shape
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),

    /// Settings parsed but carry an unusable tuning
    #[error("invalid tuning: {0}")]
    Tuning(#[from] TuningError),
}

/// Failure to bring up the GPU renderer
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to create surface: {0}")]
    SurfaceCreation(String),
    #[error("Failed to get adapter: {0}")]
    AdapterNotFound(String),
    #[error("Failed to create device: {0}")]
    DeviceCreation(String),
    #[error("Surface reports no texture formats")]
    NoSurfaceFormat,
}
