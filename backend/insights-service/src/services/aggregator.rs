use std::collections::HashMap;
use std::hash::Hash;

use crate::models::{JoinedUser, Post, User, UserId};

/// Joins posts onto users and derives post statistics.
///
/// All operations are pure: inputs are borrowed, results are built fresh.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostAggregator;

impl PostAggregator {
    pub fn new() -> Self {
        Self
    }

    /// Attach to every user the posts whose `user_id` matches, keeping user
    /// order and relative post order. Posts owned by unknown users are
    /// dropped.
    pub fn join<'a>(&self, users: &'a [User], posts: &'a [Post]) -> Vec<JoinedUser<'a>> {
        let by_owner = group_by_owner(posts);

        users
            .iter()
            .map(|user| JoinedUser {
                user,
                posts: by_owner.get(&user.id).cloned().unwrap_or_default(),
            })
            .collect()
    }

    /// Titles used by more than one post, in order of first appearance
    pub fn duplicate_titles<'a>(&self, posts: &'a [Post]) -> Vec<&'a str> {
        count_occurrences(posts.iter().map(|post| post.title.as_str()))
            .into_iter()
            .filter(|(_, count)| *count > 1)
            .map(|(title, _)| title)
            .collect()
    }

    /// (user name, number of posts) for every joined user, in join order
    pub fn posts_per_user<'a>(&self, joined: &[JoinedUser<'a>]) -> Vec<(&'a str, usize)> {
        joined
            .iter()
            .map(|entry| (entry.user.name.as_str(), entry.posts.len()))
            .collect()
    }
}

fn group_by_owner(posts: &[Post]) -> HashMap<UserId, Vec<&Post>> {
    let mut by_owner: HashMap<UserId, Vec<&Post>> = HashMap::new();
    for post in posts {
        by_owner.entry(post.user_id).or_default().push(post);
    }
    by_owner
}

/// Count how often each item occurs.
///
/// Items are returned once each, in the order they first appear.
pub fn count_occurrences<T, I>(items: I) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut slots: HashMap<T, usize> = HashMap::new();
    let mut counts: Vec<(T, usize)> = Vec::new();

    for item in items {
        match slots.get(&item) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slots.insert(item.clone(), counts.len());
                counts.push((item, 1));
            }
        }
    }

    counts
}
