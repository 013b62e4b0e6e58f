// src/scrape/follow.rs
// Splitting the "1.2k followers · 340 following" block.

use crate::model::FollowCounts;

const SEPARATOR: char = '·';

/// Splits the follow block on its middle dot into exactly two parts. Both
/// halves are trimmed and kept as display text.
///
/// Returns None unless there are exactly two non-empty parts, so a change in
/// the markup loses the counts instead of breaking the render.
pub fn parse_follow_counts(text: &str) -> Option<FollowCounts> {
    let mut parts = text.split(SEPARATOR).map(str::trim);

    let (followers, following) = match (parts.next(), parts.next(), parts.next()) {
        (Some(followers), Some(following), None) => (followers, following),
        _ => return None,
    };

    if followers.is_empty() || following.is_empty() {
        return None;
    }

    Some(FollowCounts {
        followers: followers.to_string(),
        following: following.to_string(),
    })
}
