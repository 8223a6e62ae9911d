use serde::{Deserialize, Serialize};

use super::pull_request::Account;

/// Verdict recorded by a review. Anything GitHub adds later, or `PENDING`,
/// lands in `Other` instead of failing the whole list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewState {
    Approved,
    ChangesRequested,
    Commented,
    Dismissed,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub user: Account,
    pub state: ReviewState,
}

impl Review {
    pub fn reviewer(&self) -> &str {
        &self.user.login
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_states() {
        let json = r#"[
            {"id": 1, "user": {"login": "bob"}, "state": "APPROVED"},
            {"id": 2, "user": {"login": "bob"}, "state": "CHANGES_REQUESTED"},
            {"id": 3, "user": {"login": "eve"}, "state": "COMMENTED"},
            {"id": 4, "user": {"login": "eve"}, "state": "DISMISSED"},
            {"id": 5, "user": {"login": "eve"}, "state": "PENDING"}
        ]"#;
        let reviews: Vec<Review> = serde_json::from_str(json).unwrap();
        let states: Vec<_> = reviews.iter().map(|r| r.state).collect();

        assert_eq!(
            states,
            vec![
                ReviewState::Approved,
                ReviewState::ChangesRequested,
                ReviewState::Commented,
                ReviewState::Dismissed,
                ReviewState::Other,
            ]
        );
        assert_eq!(reviews[2].reviewer(), "eve");
    }
}
