//! Client-side ordering and search over an in-memory post collection.

use std::fmt;
use std::str::FromStr;

use crate::domain::Post;
use crate::error::DomainError;

/// Creation-time ordering for the list view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Newest => write!(f, "newest"),
            SortOrder::Oldest => write!(f, "oldest"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "newest" => Ok(SortOrder::Newest),
            "oldest" => Ok(SortOrder::Oldest),
            other => Err(DomainError::Validation(format!(
                "Unknown sort order '{}' (expected 'newest' or 'oldest')",
                other
            ))),
        }
    }
}

/// Sort by creation time. Stable: ties keep their original relative order.
pub fn sort_posts(posts: &mut [&Post], order: SortOrder) {
    match order {
        SortOrder::Newest => posts.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOrder::Oldest => posts.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
    }
}

/// Keep posts whose title or content contains `query`, ignoring case.
pub fn filter_posts<'a>(posts: Vec<&'a Post>, query: &str) -> Vec<&'a Post> {
    let needle = query.to_lowercase();
    if needle.is_empty() {
        return posts;
    }

    posts
        .into_iter()
        .filter(|post| {
            post.title.to_lowercase().contains(&needle)
                || post.content.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Sort, then filter.
pub fn arrange<'a>(posts: &'a [Post], order: SortOrder, query: &str) -> Vec<&'a Post> {
    let mut sorted: Vec<&Post> = posts.iter().collect();
    sort_posts(&mut sorted, order);
    filter_posts(sorted, query)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn post(id: i64, title: &str, content: &str, minute: u32) -> Post {
        Post {
            id,
            title: title.to_string(),
            content: content.to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 5, 1, 12, minute, 0).unwrap(),
        }
    }

    fn ids(posts: &[&Post]) -> Vec<i64> {
        posts.iter().map(|p| p.id).collect()
    }

    fn sample() -> Vec<Post> {
        vec![
            post(1, "Rust notes", "<p>Ownership</p>", 10),
            post(2, "Groceries", "<p>Milk and BREAD</p>", 30),
            post(3, "Travel", "<p>Lisbon in May</p>", 20),
        ]
    }

    #[test]
    fn test_newest_is_reverse_of_oldest() {
        let posts = sample();

        let newest = arrange(&posts, SortOrder::Newest, "");
        let mut oldest = ids(&arrange(&posts, SortOrder::Oldest, ""));
        oldest.reverse();

        assert_eq!(ids(&newest), vec![2, 3, 1]);
        assert_eq!(ids(&newest), oldest);
    }

    #[test]
    fn test_ties_keep_original_order() {
        let posts = vec![
            post(1, "a", "", 5),
            post(2, "b", "", 5),
            post(3, "c", "", 1),
        ];

        assert_eq!(ids(&arrange(&posts, SortOrder::Newest, "")), vec![1, 2, 3]);
        assert_eq!(ids(&arrange(&posts, SortOrder::Oldest, "")), vec![3, 1, 2]);
    }

    #[test]
    fn test_empty_query_returns_full_sorted_list() {
        let posts = sample();
        let mut sorted: Vec<&Post> = posts.iter().collect();
        sort_posts(&mut sorted, SortOrder::Oldest);

        let filtered = filter_posts(sorted.clone(), "");

        assert_eq!(ids(&filtered), ids(&sorted));
    }

    #[test]
    fn test_filter_is_case_insensitive_over_title_and_content() {
        let posts = sample();

        assert_eq!(ids(&arrange(&posts, SortOrder::Newest, "RUST")), vec![1]);
        assert_eq!(ids(&arrange(&posts, SortOrder::Newest, "bread")), vec![2]);
        assert_eq!(ids(&arrange(&posts, SortOrder::Newest, "LiSbOn")), vec![3]);
        assert_eq!(
            ids(&arrange(&posts, SortOrder::Newest, "<P>")),
            vec![2, 3, 1]
        );
        assert!(arrange(&posts, SortOrder::Newest, "kayak").is_empty());
    }

    #[test]
    fn test_sort_order_parsing() {
        assert_eq!("newest".parse::<SortOrder>().unwrap(), SortOrder::Newest);
        assert_eq!(" Oldest ".parse::<SortOrder>().unwrap(), SortOrder::Oldest);
        assert!("sideways".parse::<SortOrder>().is_err());
        assert_eq!(SortOrder::default().to_string(), "newest");
    }
}
