//! `trending/{media}/{window}` endpoints.

use std::fmt;

use anyhow::Result;
use tracing::instrument;

use crate::client::TmdbClient;
use crate::media::MediaObject;
use crate::options::LanguageOptions;
use crate::types::{MovieResult, Paged, PersonResult, TvResult};

/// Window over which trending is computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TimeWindow {
    /// Last 24 hours.
    #[default]
    Day,
    /// Last 7 days.
    Week,
}

impl TimeWindow {
    /// Path segment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trending endpoints.
#[derive(Debug, Clone, Copy)]
pub struct TrendingApi<'a> {
    client: &'a TmdbClient,
}

impl<'a> TrendingApi<'a> {
    pub(crate) const fn new(client: &'a TmdbClient) -> Self {
        Self { client }
    }

    /// Trending movies, series and people, tagged with `media_type`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options))]
    pub async fn all(
        &self,
        window: TimeWindow,
        options: &LanguageOptions,
    ) -> Result<Paged<MediaObject>> {
        let path = format!("trending/all/{window}");
        self.client.get(&path, options).await
    }

    /// Trending movies.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options))]
    pub async fn movies(
        &self,
        window: TimeWindow,
        options: &LanguageOptions,
    ) -> Result<Paged<MovieResult>> {
        let path = format!("trending/movie/{window}");
        self.client.get(&path, options).await
    }

    /// Trending people.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options))]
    pub async fn people(
        &self,
        window: TimeWindow,
        options: &LanguageOptions,
    ) -> Result<Paged<PersonResult>> {
        let path = format!("trending/person/{window}");
        self.client.get(&path, options).await
    }

    /// Trending series.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options))]
    pub async fn tv(&self, window: TimeWindow, options: &LanguageOptions) -> Result<Paged<TvResult>> {
        let path = format!("trending/tv/{window}");
        self.client.get(&path, options).await
    }
}
