// Repository trait for shot data access
use crate::domain::shot::ShotRecord;
use async_trait::async_trait;

#[async_trait]
pub trait ShotRepository: Send + Sync {
    /// Load every recorded shot, in source order
    async fn load_shots(&self) -> anyhow::Result<Vec<ShotRecord>>;
}
