use async_trait::async_trait;

use crate::domain::change::ChangeSet;
use crate::domain::commit::CommitMessage;
use crate::domain::language::Language;
use crate::error::AppResult;

#[async_trait]
pub trait LanguageModelService: Send + Sync {
    /// `api_key` is expected to be non-empty; callers check it first.
    async fn generate_commit_message(
        &self,
        api_key: &str,
        changes: &ChangeSet,
        language: Language,
    ) -> AppResult<CommitMessage>;
}
