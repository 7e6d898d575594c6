use tracing::info;

use crate::context::AppContext;
use crate::domain::commit::CommitMessage;
use crate::domain::language::Language;
use crate::error::AppResult;

#[derive(Debug, PartialEq, Eq)]
pub enum CommitOutcome {
    NoChanges,
    Committed(CommitMessage),
}

/// Every failure returns before the next git side effect runs.
pub async fn commit_and_push<F>(ctx: &AppContext, select_language: F) -> AppResult<CommitOutcome>
where
    F: FnOnce() -> AppResult<Language>,
{
    ctx.version_control.ensure_repository().await?;
    info!("Git repository detected.");

    let changes = ctx.version_control.collect_changes().await?;
    if changes.is_empty() {
        info!("No changes found. Exiting.");
        return Ok(CommitOutcome::NoChanges);
    }
    info!("Git diff obtained.");

    let api_key = ctx.config.require_api_key()?;
    let language = select_language()?;

    let message = ctx
        .language_model
        .generate_commit_message(api_key, &changes, language)
        .await?;
    info!("Generated commit title: {}", message.title);
    info!("Generated commit description:\n{}", message.description);

    ctx.version_control.stage_all().await?;
    info!("Executing git commit...");
    ctx.version_control.commit(&message).await?;
    info!("Git commit successful.");

    info!("Executing git push...");
    ctx.version_control.push().await?;
    info!("Git push successful.");

    Ok(CommitOutcome::Committed(message))
}
