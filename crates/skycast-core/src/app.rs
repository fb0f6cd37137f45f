use anyhow::{Context, Result};
use chrono::NaiveDateTime;

use skycast_weather::{
    find_location, validate_code_groups, Moment, MomentError, SunMomentTable,
};

use crate::error::AppError;
use crate::Config;

/// Main application state and lifecycle manager.
///
/// Owns the configuration and the static reference tables. The tables are
/// loaded and validated once here and never mutated afterwards.
pub struct App {
    config: Config,
    sun_table: SunMomentTable,
}

impl App {
    /// Create a new application instance from the on-disk configuration
    pub fn new() -> Result<Self> {
        Self::with_config(Config::load()?)
    }

    /// Create an application instance around an existing configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let sun_table = match &config.weather.sun_table_path {
            Some(path) => SunMomentTable::from_path(path)
                .with_context(|| format!("Failed to load sun table from {}", path.display()))?,
            None => SunMomentTable::bundled().context("Failed to load bundled sun table")?,
        };

        Ok(Self { config, sun_table })
    }

    /// Validate the static tables and log a startup summary
    pub fn initialize(&self) -> Result<(), AppError> {
        validate_code_groups()?;

        tracing::info!(
            "Initialized with {} sun table locations, city '{}'",
            self.sun_table.len(),
            self.config.city.name
        );
        Ok(())
    }

    /// Get reference to application config
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get reference to the sunrise/sunset table
    pub fn sun_table(&self) -> &SunMomentTable {
        &self.sun_table
    }

    /// Change the selected city and persist the choice
    pub fn select_city(&mut self, name: &str) -> Result<()> {
        if find_location(name).is_none() {
            tracing::warn!("Selected city '{}' is not in the supported city table", name);
        }
        self.config.city.name = name.to_string();
        self.config.save()?;
        tracing::info!("Selected city: {}", name);
        Ok(())
    }

    /// Resolve the moment for the configured city at the current local time
    pub fn current_moment(&self) -> Result<Option<Moment>, MomentError> {
        self.current_moment_at(chrono::Local::now().naive_local())
    }

    /// Resolve the moment for the configured city at a given local time.
    ///
    /// A city outside the lookup table yields `Ok(None)`, matching the
    /// resolver's treatment of unknown locations.
    pub fn current_moment_at(&self, now: NaiveDateTime) -> Result<Option<Moment>, MomentError> {
        let Some(city) = find_location(&self.config.city.name) else {
            return Ok(None);
        };
        self.sun_table.resolve_moment(city.sun_table_key, now)
    }
}
