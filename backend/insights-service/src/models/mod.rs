//! Users, posts and the wire records they are parsed from
//!
//! Upstream records are untyped JSON. Each one is decoded into a `Raw*`
//! record whose fields are all optional, then converted into the typed model.
//! Missing fields are reported as `MalformedRecord`, bad coordinates as
//! `InvalidCoordinate`; nothing is defaulted silently.

use std::collections::HashSet;

use geo_core::Coordinate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, AppResult};

pub type UserId = u64;
pub type PostId = u64;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub username: Option<String>,
    pub email: Option<String>,
    pub city: Option<String>,
    pub location: Coordinate,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Post {
    pub id: PostId,
    pub user_id: UserId,
    pub title: String,
    pub body: String,
}

/// A user together with the posts they own, in original post order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JoinedUser<'a> {
    pub user: &'a User,
    pub posts: Vec<&'a Post>,
}

// ============================================================================
// WIRE RECORDS
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawUser {
    pub id: Option<UserId>,
    pub name: Option<String>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub address: Option<RawAddress>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawAddress {
    pub city: Option<String>,
    pub geo: Option<RawGeo>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawGeo {
    pub lat: Option<Degrees>,
    pub lng: Option<Degrees>,
}

/// Coordinate component as sent upstream: usually a numeric string
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Degrees {
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPost {
    pub id: Option<PostId>,
    #[serde(rename = "userId")]
    pub user_id: Option<UserId>,
    pub title: Option<String>,
    pub body: Option<String>,
}

impl TryFrom<RawUser> for User {
    type Error = AppError;

    fn try_from(raw: RawUser) -> AppResult<Self> {
        let id = raw.id.ok_or_else(|| AppError::malformed("user", "missing field `id`"))?;
        let record = format!("user {}", id);

        let name = raw
            .name
            .ok_or_else(|| AppError::malformed(&record, "missing field `name`"))?;
        let address = raw
            .address
            .ok_or_else(|| AppError::malformed(&record, "missing field `address`"))?;
        let geo = address
            .geo
            .ok_or_else(|| AppError::malformed(&record, "missing field `address.geo`"))?;
        let lat = geo
            .lat
            .ok_or_else(|| AppError::malformed(&record, "missing field `address.geo.lat`"))?;
        let lng = geo
            .lng
            .ok_or_else(|| AppError::malformed(&record, "missing field `address.geo.lng`"))?;

        let location = parse_location(&lat, &lng).map_err(|source| {
            AppError::InvalidCoordinate {
                record: record.clone(),
                source,
            }
        })?;

        Ok(User {
            id,
            name,
            username: raw.username,
            email: raw.email,
            city: address.city,
            location,
        })
    }
}

impl TryFrom<RawPost> for Post {
    type Error = AppError;

    fn try_from(raw: RawPost) -> AppResult<Self> {
        let id = raw.id.ok_or_else(|| AppError::malformed("post", "missing field `id`"))?;
        let record = format!("post {}", id);

        Ok(Post {
            id,
            user_id: raw
                .user_id
                .ok_or_else(|| AppError::malformed(&record, "missing field `userId`"))?,
            title: raw
                .title
                .ok_or_else(|| AppError::malformed(&record, "missing field `title`"))?,
            body: raw
                .body
                .ok_or_else(|| AppError::malformed(&record, "missing field `body`"))?,
        })
    }
}

fn parse_location(lat: &Degrees, lng: &Degrees) -> geo_core::Result<Coordinate> {
    match (lat, lng) {
        (Degrees::Number(lat), Degrees::Number(lng)) => Coordinate::new(*lat, *lng),
        _ => Coordinate::parse(&lat.to_string(), &lng.to_string()),
    }
}

impl std::fmt::Display for Degrees {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Degrees::Number(n) => write!(f, "{}", n),
            Degrees::Text(s) => f.write_str(s),
        }
    }
}

/// Decode and validate a batch of user records.
///
/// Fails on the first malformed record or repeated identifier.
pub fn parse_users(records: Vec<Value>) -> AppResult<Vec<User>> {
    let users = records
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            let raw: RawUser = serde_json::from_value(value)
                .map_err(|e| AppError::malformed(format!("user[{}]", index), e.to_string()))?;
            User::try_from(raw)
        })
        .collect::<AppResult<Vec<User>>>()?;

    let mut seen = HashSet::with_capacity(users.len());
    for user in &users {
        if !seen.insert(user.id) {
            return Err(AppError::malformed(
                format!("user {}", user.id),
                "duplicate identifier",
            ));
        }
    }

    Ok(users)
}

/// Decode and validate a batch of post records.
pub fn parse_posts(records: Vec<Value>) -> AppResult<Vec<Post>> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            let raw: RawPost = serde_json::from_value(value)
                .map_err(|e| AppError::malformed(format!("post[{}]", index), e.to_string()))?;
            Post::try_from(raw)
        })
        .collect()
}
