//! Insights run: fetch → validate → aggregate → nearest neighbours → report

use std::io::Write;

use geo_core::{Coordinate, NearestNeighborFinder, NeighborResult};
use tracing::info;

use crate::error::{AppError, AppResult};
use crate::models::{self, Post, User, UserId};
use crate::services::{PostAggregator, RecordSource, Report};

/// Summaries derived from one batch of users and posts
#[derive(Debug, Clone, PartialEq)]
pub struct Insights {
    /// (user name, post count) in user order
    pub post_counts: Vec<(String, usize)>,
    /// Titles used more than once, in first-occurrence order
    pub duplicated_titles: Vec<String>,
    pub neighbors: NeighborResult<UserId>,
}

impl Insights {
    pub fn report(&self) -> Report {
        Report::new(&self.post_counts, &self.duplicated_titles, &self.neighbors)
    }
}

pub struct Pipeline<S> {
    source: S,
    aggregator: PostAggregator,
    finder: NearestNeighborFinder,
}

impl<S: RecordSource> Pipeline<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            aggregator: PostAggregator::new(),
            finder: NearestNeighborFinder::new(),
        }
    }

    /// Fetch both collections concurrently and compute the insights.
    ///
    /// Any upstream failure or invalid record aborts the run; nothing is
    /// returned partially.
    pub async fn run(&self) -> AppResult<Insights> {
        let (raw_users, raw_posts) =
            tokio::try_join!(self.source.fetch_users(), self.source.fetch_posts())?;

        let users = models::parse_users(raw_users)?;
        let posts = models::parse_posts(raw_posts)?;

        self.analyze(&users, &posts)
    }

    /// Run and write the report to `out`
    pub async fn run_to<W: Write>(&self, out: &mut W) -> AppResult<Insights> {
        let insights = self.run().await?;
        insights.report().write_to(out)?;
        Ok(insights)
    }

    /// Compute the insights for already validated collections
    pub fn analyze(&self, users: &[User], posts: &[Post]) -> AppResult<Insights> {
        let joined = self.aggregator.join(users, posts);
        let post_counts = self
            .aggregator
            .posts_per_user(&joined)
            .into_iter()
            .map(|(name, count)| (name.to_string(), count))
            .collect();

        let duplicated_titles: Vec<String> = self
            .aggregator
            .duplicate_titles(posts)
            .into_iter()
            .map(str::to_string)
            .collect();

        let points: Vec<(UserId, Coordinate)> =
            users.iter().map(|user| (user.id, user.location)).collect();
        let neighbors = self
            .finder
            .find_nearest(&points)
            .map_err(|source| AppError::InvalidCoordinate {
                record: "user locations".to_string(),
                source,
            })?;

        info!(
            users = users.len(),
            posts = posts.len(),
            duplicated_titles = duplicated_titles.len(),
            "Insights computed"
        );

        Ok(Insights {
            post_counts,
            duplicated_titles,
            neighbors,
        })
    }
}
