use std::path::PathBuf;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::domain::change::ChangeSet;
use crate::domain::commit::CommitMessage;
use crate::error::{AppError, AppResult};
use crate::services::{GitCommandRunner, VersionControlService};

pub struct ProcessRunner {
    workspace_root: PathBuf,
}

impl ProcessRunner {
    pub fn new(workspace_root: PathBuf) -> Self {
        Self { workspace_root }
    }
}

#[async_trait]
impl GitCommandRunner for ProcessRunner {
    async fn run(&self, args: &[&str]) -> AppResult<String> {
        debug!(args = ?args, "running git");
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.workspace_root)
            .output()
            .await
            .map_err(|err| {
                AppError::VersionControl(format!("failed to run git {}: {err}", args.join(" ")))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::VersionControl(format!(
                "git {} failed ({}): {}",
                args.join(" "),
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

pub struct GitCli<R> {
    runner: R,
}

impl GitCli<ProcessRunner> {
    pub fn new(workspace_root: PathBuf) -> Self {
        Self::with_runner(ProcessRunner::new(workspace_root))
    }
}

impl<R: GitCommandRunner> GitCli<R> {
    pub fn with_runner(runner: R) -> Self {
        Self { runner }
    }
}

#[async_trait]
impl<R: GitCommandRunner> VersionControlService for GitCli<R> {
    async fn ensure_repository(&self) -> AppResult<()> {
        self.runner
            .run(&["rev-parse", "--is-inside-work-tree"])
            .await
            .map_err(|err| AppError::NotARepository(err.to_string()))?;
        Ok(())
    }

    async fn collect_changes(&self) -> AppResult<ChangeSet> {
        let status = self.runner.run(&["status", "--short"]).await.map_err(|err| {
            AppError::VersionControl(format!("failed to get git status --short: {err}"))
        })?;
        let diff = self
            .runner
            .run(&["diff"])
            .await
            .map_err(|err| AppError::VersionControl(format!("failed to get git diff: {err}")))?;
        Ok(ChangeSet::new(status, diff))
    }

    async fn stage_all(&self) -> AppResult<()> {
        self.runner.run(&["add", "."]).await?;
        Ok(())
    }

    async fn commit(&self, message: &CommitMessage) -> AppResult<()> {
        if message.title.trim().is_empty() {
            return Err(AppError::VersionControl(
                "commit title cannot be empty".to_string(),
            ));
        }
        self.runner
            .run(&["commit", "-m", &message.title, "-m", &message.description])
            .await?;
        Ok(())
    }

    async fn push(&self) -> AppResult<()> {
        self.runner.run(&["push"]).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    #[derive(Default)]
    struct FakeRunner {
        calls: Mutex<Vec<Vec<String>>>,
        fail_on: Option<&'static str>,
    }

    impl FakeRunner {
        fn failing_on(command: &'static str) -> Self {
            Self {
                fail_on: Some(command),
                ..Self::default()
            }
        }

        fn calls(&self) -> Vec<Vec<String>> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl GitCommandRunner for FakeRunner {
        async fn run(&self, args: &[&str]) -> AppResult<String> {
            self.calls
                .lock()
                .unwrap()
                .push(args.iter().map(|arg| arg.to_string()).collect());
            if self.fail_on == args.first().copied() {
                return Err(AppError::VersionControl("exit status: 128".to_string()));
            }
            Ok(match args {
                ["status", ..] => " M src/lib.rs\n".to_string(),
                ["diff"] => "+fn added() {}\n".to_string(),
                _ => String::new(),
            })
        }
    }

    #[tokio::test]
    async fn collects_status_then_diff() {
        let git = GitCli::with_runner(FakeRunner::default());
        let changes = git.collect_changes().await.unwrap();

        assert_eq!(changes, ChangeSet::new(" M src/lib.rs\n", "+fn added() {}\n"));
        assert_eq!(
            git.runner.calls(),
            vec![vec!["status", "--short"], vec!["diff"]]
        );
    }

    #[tokio::test]
    async fn status_failure_names_the_command() {
        let git = GitCli::with_runner(FakeRunner::failing_on("status"));
        let err = git.collect_changes().await.unwrap_err();

        assert!(err.to_string().contains("git status --short"));
        assert_eq!(git.runner.calls().len(), 1);
    }

    #[tokio::test]
    async fn repository_check_maps_to_not_a_repository() {
        let git = GitCli::with_runner(FakeRunner::failing_on("rev-parse"));
        let err = git.ensure_repository().await.unwrap_err();
        assert!(matches!(err, AppError::NotARepository(_)));
    }

    #[tokio::test]
    async fn commits_title_and_body_as_separate_paragraphs() {
        let git = GitCli::with_runner(FakeRunner::default());
        let message = CommitMessage {
            title: "Add parser".to_string(),
            description: "Parses the config file.".to_string(),
        };

        git.stage_all().await.unwrap();
        git.commit(&message).await.unwrap();
        git.push().await.unwrap();

        assert_eq!(
            git.runner.calls(),
            vec![
                vec!["add", "."],
                vec!["commit", "-m", "Add parser", "-m", "Parses the config file."],
                vec!["push"],
            ]
        );
    }

    #[tokio::test]
    async fn rejects_empty_commit_title() {
        let git = GitCli::with_runner(FakeRunner::default());
        let message = CommitMessage {
            title: "  ".to_string(),
            description: "body".to_string(),
        };
        assert!(git.commit(&message).await.is_err());
        assert!(git.runner.calls().is_empty());
    }

    #[tokio::test]
    async fn process_runner_reports_git_failures() {
        let runner = ProcessRunner::new(std::env::temp_dir());
        assert!(runner.run(&["--version"]).await.is_ok());
        assert!(runner.run(&["not-a-real-command"]).await.is_err());
    }
}
