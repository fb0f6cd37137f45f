//! Centralized error types for the Skycast application.
//!
//! This module provides a typed error hierarchy that:
//! - Enables precise error handling throughout the codebase
//! - Provides user-friendly messages suitable for display
//! - Preserves full error context for debugging/logging

use thiserror::Error;

use skycast_weather::{FetchError, MomentError, SunTableError, WeatherTableError};

/// Top-level application error type.
///
/// All errors in the Skycast application should be convertible to this type.
/// Use `user_message()` to get a display-appropriate message.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Sun table error: {0}")]
    SunTable(#[from] SunTableError),

    #[error("Weather table error: {0}")]
    CodeTable(#[from] WeatherTableError),

    #[error("Moment resolution error: {0}")]
    Moment(#[from] MomentError),

    #[error("Weather fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Returns a user-friendly message suitable for display.
    ///
    /// These messages are designed to be actionable and non-technical.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::SunTable(_) => {
                "Sunrise/sunset data could not be loaded. Check the data file."
            }
            AppError::CodeTable(_) => {
                "Weather category data is inconsistent. Reinstall the application."
            }
            AppError::Moment(MomentError::MissingDailyEntry { .. }) => {
                "Sunrise/sunset data has no entry for today. Update the data table."
            }
            AppError::Fetch(e) => fetch_user_message(e),
            AppError::Io(_) => "A file operation failed. Please try again.",
            AppError::Other(_) => "An unexpected error occurred. Please try again.",
        }
    }
}

fn fetch_user_message(error: &FetchError) -> &'static str {
    match error {
        FetchError::Network(_) => "Unable to reach the weather service. Check your connection.",
        FetchError::NoRecords(_) => "The weather service has no data for this city.",
        FetchError::MissingElement(_) | FetchError::Malformed(_) => {
            "The weather service returned unexpected data. Please try again."
        }
    }
}
