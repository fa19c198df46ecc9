//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`PatrolError`] covers:
//! - Configuration errors (half-specified parameter pairs, bad turn fractions)
//! - Path and track construction errors
//! - Opt-in strict validation of waypoints and durations
//! - Configuration file I/O and parsing
//!
//! Degenerate geometry and non-positive durations are *not* errors unless a
//! patrol is built with [`Validation::Strict`](crate::path::Validation::Strict).
//!
//! # Usage
//!
//! ```rust,ignore
//! use patrol::errors::{PatrolError, Result};
//!
//! fn build() -> Result<()> {
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// The main error type for the patrol crate.
#[derive(Error, Debug)]
pub enum PatrolError {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Inconsistent configuration, e.g. a width given without a height.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Turn fraction outside the open interval (0, 1).
    #[error("Turn fraction must lie strictly between 0 and 1, got {0}")]
    InvalidTurnFraction(f32),

    // ========================================================================
    // Path & Track Errors
    // ========================================================================
    /// A patrol path needs at least one waypoint.
    #[error("Patrol path has no waypoints")]
    EmptyPath,

    /// A track needs at least one command.
    #[error("Cannot build a track from an empty command list")]
    EmptyTrack,

    // ========================================================================
    // Strict Validation Errors
    // ========================================================================
    /// A segment duration is zero or negative.
    #[error("Duration {value} at index {index} is not positive")]
    NonPositiveDuration {
        /// Index into the duration list
        index: usize,
        /// The offending value
        value: f32,
    },

    /// Two consecutive waypoints (in loop order) coincide.
    #[error("Waypoint {index} coincides with the next waypoint in the loop")]
    DuplicateWaypoint {
        /// Index of the first of the two coinciding waypoints
        index: usize,
    },

    // ========================================================================
    // I/O & Parsing Errors
    // ========================================================================
    /// File I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Alias for `Result<T, PatrolError>`.
pub type Result<T> = std::result::Result<T, PatrolError>;
