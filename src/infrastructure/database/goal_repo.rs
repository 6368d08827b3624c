use async_trait::async_trait;
use sqlx::SqlitePool;

use crate::domain::errors::DomainResult;
use crate::domain::ports::GoalRepository;

/// `SQLite`-backed implementation of [`GoalRepository`].
///
/// One row per slot; saving upserts in place, which preserves the
/// single-slot lifecycle: created on first save, overwritten after,
/// never deleted.
pub struct GoalRepositoryImpl {
    pool: SqlitePool,
}

impl GoalRepositoryImpl {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GoalRepository for GoalRepositoryImpl {
    async fn load(&self, slot: &str) -> DomainResult<Option<u64>> {
        let target: Option<i64> =
            sqlx::query_scalar("SELECT target FROM goals WHERE slot = ?")
                .bind(slot)
                .fetch_optional(&self.pool)
                .await?;

        Ok(target.map(|t| t.max(0) as u64))
    }

    async fn save(&self, slot: &str, target: u64) -> DomainResult<()> {
        sqlx::query(
            r"
            INSERT INTO goals (slot, target, updated_at)
            VALUES (?, ?, datetime('now'))
            ON CONFLICT(slot) DO UPDATE SET
                target = excluded.target,
                updated_at = excluded.updated_at
            ",
        )
        .bind(slot)
        .bind(target as i64)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
