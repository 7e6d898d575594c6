#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    pub status: String,
    pub diff: String,
}

impl ChangeSet {
    pub fn new(status: impl Into<String>, diff: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            diff: diff.into(),
        }
    }

    /// True when git reports nothing to commit.
    pub fn is_empty(&self) -> bool {
        self.status.trim().is_empty() && self.diff.trim().is_empty()
    }

    pub fn render(&self) -> String {
        format!(
            "Git Status (staged files):\n{}\nGit Diff (staged changes):\n{}",
            self.status, self.diff
        )
    }
}
