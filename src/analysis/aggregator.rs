use std::collections::{BTreeSet, HashMap};

use crate::models::{PullRequest, Review, ReviewState, UserActivityRow};

/// Builds one row per user who authored or reviewed an in-window pull request.
///
/// Rows come back sorted by login. `reviewed` counts distinct pull requests,
/// while the outcome counters count every review event, so a user reviewing
/// the same pull request twice adds 1 to `reviewed` and 2 to the outcomes.
/// Reviews with an unrecognised state count towards `reviewed` only.
pub fn aggregate(
    repository: &str,
    prs: &[PullRequest],
    reviews: &HashMap<u64, Vec<Review>>,
) -> Vec<UserActivityRow> {
    let users: BTreeSet<&str> = prs
        .iter()
        .map(|pr| pr.author())
        .chain(
            prs.iter()
                .filter_map(|pr| reviews.get(&pr.number))
                .flatten()
                .map(|review| review.reviewer()),
        )
        .collect();

    users
        .into_iter()
        .map(|user| user_row(repository, user, prs, reviews))
        .collect()
}

fn user_row(
    repository: &str,
    user: &str,
    prs: &[PullRequest],
    reviews: &HashMap<u64, Vec<Review>>,
) -> UserActivityRow {
    let mut row = UserActivityRow::new(repository, user);
    row.created = prs.iter().filter(|pr| pr.author() == user).count() as u32;

    for pr in prs {
        let mut user_reviews = reviews
            .get(&pr.number)
            .into_iter()
            .flatten()
            .filter(|review| review.reviewer() == user)
            .peekable();

        if user_reviews.peek().is_none() {
            continue;
        }
        row.reviewed += 1;

        for review in user_reviews {
            match review.state {
                ReviewState::Approved => row.approved += 1,
                ReviewState::ChangesRequested => row.changes_requested += 1,
                ReviewState::Commented => row.commented += 1,
                ReviewState::Dismissed => row.dismissed += 1,
                ReviewState::Other => {}
            }
        }
    }

    row
}
