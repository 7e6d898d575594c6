use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommitMessage {
    pub title: String,
    pub description: String,
}
