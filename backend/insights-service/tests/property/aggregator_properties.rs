use std::collections::HashSet;

use geo_core::Coordinate;
use insights_service::models::{Post, User};
use insights_service::PostAggregator;
use proptest::prelude::*;

fn users_strategy() -> impl Strategy<Value = Vec<User>> {
    prop::collection::hash_set(0u64..20, 0..8).prop_map(|ids| {
        ids.into_iter()
            .map(|id| User {
                id,
                name: format!("user-{}", id),
                username: None,
                email: None,
                city: None,
                location: Coordinate::new(0.0, 0.0).unwrap(),
            })
            .collect()
    })
}

fn posts_strategy() -> impl Strategy<Value = Vec<Post>> {
    prop::collection::vec((0u64..30, "[a-c]{1,2}"), 0..40).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(index, (user_id, title))| Post {
                id: index as u64,
                user_id,
                title,
                body: String::new(),
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn join_keeps_only_matching_posts(users in users_strategy(), posts in posts_strategy()) {
        let joined = PostAggregator::new().join(&users, &posts);
        let user_ids: HashSet<u64> = users.iter().map(|u| u.id).collect();

        let matching = posts.iter().filter(|p| user_ids.contains(&p.user_id)).count();
        let total: usize = joined.iter().map(|j| j.posts.len()).sum();
        prop_assert_eq!(total, matching);

        for entry in &joined {
            for post in &entry.posts {
                prop_assert_eq!(post.user_id, entry.user.id);
            }
        }
    }

    #[test]
    fn join_preserves_order(users in users_strategy(), posts in posts_strategy()) {
        let joined = PostAggregator::new().join(&users, &posts);

        let joined_ids: Vec<u64> = joined.iter().map(|j| j.user.id).collect();
        let input_ids: Vec<u64> = users.iter().map(|u| u.id).collect();
        prop_assert_eq!(joined_ids, input_ids);

        for entry in &joined {
            let post_ids: Vec<u64> = entry.posts.iter().map(|p| p.id).collect();
            let expected: Vec<u64> = posts
                .iter()
                .filter(|p| p.user_id == entry.user.id)
                .map(|p| p.id)
                .collect();
            prop_assert_eq!(post_ids, expected);
        }
    }

    #[test]
    fn duplicates_are_exactly_repeated_titles(posts in posts_strategy()) {
        let duplicates = PostAggregator::new().duplicate_titles(&posts);

        for title in &duplicates {
            let count = posts.iter().filter(|p| p.title == *title).count();
            prop_assert!(count >= 2, "{} occurs {} times", title, count);
        }
        for post in &posts {
            let count = posts.iter().filter(|p| p.title == post.title).count();
            prop_assert_eq!(count >= 2, duplicates.contains(&post.title.as_str()));
        }

        let unique: HashSet<&str> = duplicates.iter().copied().collect();
        prop_assert_eq!(unique.len(), duplicates.len());
    }

    #[test]
    fn duplicates_follow_first_occurrence(posts in posts_strategy()) {
        let duplicates = PostAggregator::new().duplicate_titles(&posts);
        let first_seen = |title: &str| posts.iter().position(|p| p.title == title).unwrap();
        let positions: Vec<usize> = duplicates.iter().map(|t| first_seen(*t)).collect();
        let mut sorted = positions.clone();
        sorted.sort_unstable();
        prop_assert_eq!(positions, sorted);
    }
}
