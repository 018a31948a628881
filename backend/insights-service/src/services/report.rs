use std::fmt;
use std::io::{self, Write};

use geo_core::NeighborResult;

use crate::models::UserId;

/// Human-readable summary of one insights run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub post_counts: Vec<String>,
    pub duplicated_titles: String,
    pub neighbors: Vec<String>,
}

impl Report {
    pub fn new<N: AsRef<str>, T: AsRef<str>>(
        post_counts: &[(N, usize)],
        duplicated_titles: &[T],
        neighbors: &NeighborResult<UserId>,
    ) -> Self {
        Self {
            post_counts: post_count_lines(post_counts),
            duplicated_titles: duplicated_titles_line(duplicated_titles),
            neighbors: neighbor_lines(neighbors),
        }
    }

    /// All lines with a blank line between sections
    pub fn lines(&self) -> Vec<String> {
        let mut lines = self.post_counts.clone();
        lines.push(String::new());
        lines.push(self.duplicated_titles.clone());
        lines.push(String::new());
        lines.extend(self.neighbors.iter().cloned());
        lines
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for line in self.lines() {
            writeln!(out, "{}", line)?;
        }
        out.flush()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

pub fn post_count_lines<S: AsRef<str>>(counts: &[(S, usize)]) -> Vec<String> {
    counts
        .iter()
        .map(|(name, count)| format!("{} wrote {} posts", name.as_ref(), count))
        .collect()
}

pub fn duplicated_titles_line<S: AsRef<str>>(titles: &[S]) -> String {
    if titles.is_empty() {
        return "Duplicated titles: none".to_string();
    }
    let joined: Vec<&str> = titles.iter().map(|t| t.as_ref()).collect();
    format!("Duplicated titles: {}", joined.join(", "))
}

pub fn neighbor_lines(result: &NeighborResult<UserId>) -> Vec<String> {
    result
        .iter()
        .map(|entry| match &entry.nearest {
            Some(neighbor) => format!(
                "User {}: nearest neighbour is {}, distance {} m",
                entry.id, neighbor.id, neighbor.distance_meters
            ),
            None => format!("User {}: no neighbour available", entry.id),
        })
        .collect()
}
