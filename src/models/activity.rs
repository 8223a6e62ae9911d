use serde::{Deserialize, Serialize};

/// Per-user activity for one repository over the report window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserActivityRow {
    pub repository: String,
    pub user: String,
    pub created: u32,
    /// Distinct pull requests the user reviewed at least once.
    pub reviewed: u32,
    pub approved: u32,
    pub changes_requested: u32,
    pub commented: u32,
    pub dismissed: u32,
}

impl UserActivityRow {
    pub fn new(repository: &str, user: &str) -> Self {
        Self {
            repository: repository.to_string(),
            user: user.to_string(),
            ..Default::default()
        }
    }

    pub fn outcome_total(&self) -> u32 {
        self.approved + self.changes_requested + self.commented + self.dismissed
    }
}
