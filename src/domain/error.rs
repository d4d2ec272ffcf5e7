// Analytics errors shared by the core and the HTTP layer
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyticsError {
    #[error("shot #{index} has no usable bounce coordinates")]
    MissingCoordinate { index: usize },

    #[error("a perspective view needs exactly two players, dataset has {found}")]
    InvalidPlayerCount { found: usize },

    #[error("player '{0}' does not appear in the dataset")]
    UnknownPlayer(String),

    #[error("zone count must be 3 or 6, got {0}")]
    InvalidZoneCount(usize),

    #[error("invalid court dimensions: {0}")]
    InvalidDimensions(String),

    #[error("dataset has {records} records, limit is {limit}")]
    DatasetTooLarge { records: usize, limit: usize },
}
