use crate::ghevent::{Repository, User};

/// Sent when someone stars a repository. Everything the handler
/// dereferences is optional and checked before use.
#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct WatchEvent {
    pub action: Option<String>,
    pub sender: Option<User>,
    pub repository: Option<Repository>,
}

impl WatchEvent {
    /// Whether the action field is present and equal to `"starred"`.
    pub fn starred(&self) -> bool {
        self.action.as_deref() == Some("starred")
    }

    /// The console line announcing a star, or `None` when the sender or
    /// repository is missing from the payload.
    pub fn starred_message(&self) -> Option<String> {
        let sender = self.sender.as_ref()?;
        let repository = self.repository.as_ref()?;
        Some(format!(
            "{} starred repository {}",
            sender.login, repository.full_name
        ))
    }
}
