use async_trait::async_trait;

use crate::domain::change::ChangeSet;
use crate::domain::commit::CommitMessage;
use crate::error::AppResult;

/// Runs a single git invocation and returns its stdout.
#[async_trait]
pub trait GitCommandRunner: Send + Sync {
    async fn run(&self, args: &[&str]) -> AppResult<String>;
}

#[async_trait]
pub trait VersionControlService: Send + Sync {
    async fn ensure_repository(&self) -> AppResult<()>;
    async fn collect_changes(&self) -> AppResult<ChangeSet>;
    async fn stage_all(&self) -> AppResult<()>;
    async fn commit(&self, message: &CommitMessage) -> AppResult<()>;
    async fn push(&self) -> AppResult<()>;
}
