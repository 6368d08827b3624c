use async_trait::async_trait;

use crate::domain::errors::DomainResult;

/// Port for the persisted yearly commit target.
///
/// A single key-value slot: created on first save, read on every
/// subsequent load, overwritten in place, never deleted.
#[async_trait]
pub trait GoalRepository: Send + Sync {
    /// Read the target stored under `slot`, if any.
    async fn load(&self, slot: &str) -> DomainResult<Option<u64>>;

    /// Save (or overwrite) the target stored under `slot`.
    async fn save(&self, slot: &str, target: u64) -> DomainResult<()>;
}
