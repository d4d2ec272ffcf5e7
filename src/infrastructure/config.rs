use crate::domain::court::{CourtDimensions, CourtGeometry, ViewMode};
use crate::domain::error::AnalyticsError;
use config::builder::DefaultState;
use config::ConfigBuilder;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct DashboardConfig {
    pub server: ServerSettings,
    pub data: DataSettings,
    pub view: ViewConfig,
    pub court: CourtConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataSettings {
    pub path: PathBuf,
    pub max_records: usize,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ViewConfig {
    pub mode: ViewMode,
    pub zone_count: usize,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CourtUnits {
    Metres,
    Feet,
    Custom,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CourtConfig {
    pub units: CourtUnits,
    pub custom: Option<CourtDimensions>,
}

/// Startup-time view choice; fixed for the life of the process.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSettings {
    pub mode: ViewMode,
    pub geometry: CourtGeometry,
}

impl DashboardConfig {
    pub fn view_settings(&self) -> Result<ViewSettings, AnalyticsError> {
        let dimensions = match (self.court.units, self.court.custom) {
            (CourtUnits::Metres, _) => CourtDimensions::METRES,
            (CourtUnits::Feet, _) => CourtDimensions::FEET,
            (CourtUnits::Custom, Some(custom)) => custom,
            (CourtUnits::Custom, None) => {
                return Err(AnalyticsError::InvalidDimensions(
                    "court.units is 'custom' but court.custom is not set".to_string(),
                ));
            }
        };

        Ok(ViewSettings {
            mode: self.view.mode,
            geometry: CourtGeometry::new(dimensions, self.view.zone_count)?,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn with_defaults(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, config::ConfigError> {
    builder
        .set_default("server.host", "0.0.0.0")?
        .set_default("server.port", 8080_i64)?
        .set_default("data.path", "data/shots.csv")?
        .set_default("data.max_records", 100_000_i64)?
        .set_default("view.mode", "mirrored")?
        .set_default("view.zone_count", 3_i64)?
        .set_default("court.units", "metres")
}

pub fn load_dashboard_config() -> anyhow::Result<DashboardConfig> {
    let settings = with_defaults(config::Config::builder())?
        .add_source(config::File::with_name("config/dashboard").required(false))
        .add_source(config::Environment::with_prefix("DASHBOARD").separator("__"))
        .build()?;

    Ok(settings.try_deserialize()?)
}
