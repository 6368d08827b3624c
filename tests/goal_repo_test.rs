use tempfile::TempDir;

use pacer::infrastructure::database::{DatabaseConnection, GoalRepositoryImpl};
use pacer::GoalRepository;

async fn repo(dir: &TempDir) -> GoalRepositoryImpl {
    let db_path = dir.path().join("pacer.db");
    let db = DatabaseConnection::new(&format!("sqlite:{}", db_path.display()), 2)
        .await
        .unwrap();
    db.migrate().await.unwrap();
    GoalRepositoryImpl::new(db.pool().clone())
}

#[tokio::test]
async fn test_load_before_save_is_none() {
    let dir = TempDir::new().unwrap();
    let repo = repo(&dir).await;

    assert_eq!(repo.load("yearly_commit_target").await.unwrap(), None);
}

#[tokio::test]
async fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let repo = repo(&dir).await;

    repo.save("yearly_commit_target", 365).await.unwrap();
    assert_eq!(
        repo.load("yearly_commit_target").await.unwrap(),
        Some(365)
    );
}

#[tokio::test]
async fn test_save_overwrites_in_place() {
    let dir = TempDir::new().unwrap();
    let repo = repo(&dir).await;

    repo.save("yearly_commit_target", 365).await.unwrap();
    repo.save("yearly_commit_target", 1_000).await.unwrap();

    assert_eq!(
        repo.load("yearly_commit_target").await.unwrap(),
        Some(1_000)
    );
}

#[tokio::test]
async fn test_slots_are_independent() {
    let dir = TempDir::new().unwrap();
    let repo = repo(&dir).await;

    repo.save("yearly_commit_target", 365).await.unwrap();
    assert_eq!(repo.load("another_slot").await.unwrap(), None);
}
