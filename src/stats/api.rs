//! Codeforces public API client.
//!
//! Only the two read-only endpoints the stats widget needs. Responses are
//! wrapped in the API's `{"status": ..., "result": ...}` envelope.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::join;
use crate::error::StatsError;

/// GET a URL and decode its JSON body.
///
/// Implementations send `Accept: application/json`, bypass the HTTP cache, and
/// treat any non-success status as an error.
#[async_trait(?Send)]
pub trait JsonFetch {
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, StatsError>;
}

/// Response envelope shared by every endpoint
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub status: String,
    #[serde(default)]
    pub comment: Option<String>,
    pub result: Option<T>,
}

impl<T> Envelope<T> {
    pub fn into_result(self) -> Result<T, StatsError> {
        if self.status != "OK" {
            return Err(StatsError::Api {
                status: self.status,
                comment: self.comment.unwrap_or_default(),
            });
        }
        self.result
            .ok_or_else(|| StatsError::Decode("envelope has no result".into()))
    }
}

/// Entry from `user.info`
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    #[serde(default)]
    pub handle: String,
    pub rating: Option<i64>,
    #[serde(default)]
    pub rank: String,
}

/// Entry from `user.rating`, oldest first
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RatingChange {
    pub contest_name: Option<String>,
    pub rating_update_time_seconds: Option<i64>,
    pub new_rank: Option<i64>,
}

/// What the widget renders: the user's profile and their latest contest.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProfileSnapshot {
    pub user: Option<UserInfo>,
    pub latest: Option<RatingChange>,
}

pub struct CodeforcesApi<F> {
    fetch: F,
    base: String,
}

impl<F: JsonFetch> CodeforcesApi<F> {
    pub fn new(fetch: F, base: impl Into<String>) -> Self {
        Self {
            fetch,
            base: base.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn user_info_url(&self, handle: &str) -> String {
        format!("{}/user.info?handles={}", self.base, urlencoding::encode(handle))
    }

    pub fn user_rating_url(&self, handle: &str) -> String {
        format!("{}/user.rating?handle={}", self.base, urlencoding::encode(handle))
    }

    pub async fn user_info(&self, handle: &str) -> Result<Vec<UserInfo>, StatsError> {
        let envelope: Envelope<Vec<UserInfo>> =
            self.fetch.get_json(&self.user_info_url(handle)).await?;
        envelope.into_result()
    }

    pub async fn rating_history(&self, handle: &str) -> Result<Vec<RatingChange>, StatsError> {
        let envelope: Envelope<Vec<RatingChange>> =
            self.fetch.get_json(&self.user_rating_url(handle)).await?;
        envelope.into_result()
    }

    /// Fetch profile and rating history concurrently; fails if either fails.
    pub async fn snapshot(&self, handle: &str) -> Result<ProfileSnapshot, StatsError> {
        let (users, history) =
            join::both(self.user_info(handle), self.rating_history(handle)).await?;
        Ok(ProfileSnapshot {
            user: users.into_iter().next(),
            latest: history.into_iter().last(),
        })
    }
}
