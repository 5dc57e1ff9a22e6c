//! `discover/movie` and `discover/tv`: filtered, sorted listings.
//!
//! Range filters use TMDB's dotted wire names (`vote_average.gte`). List
//! filters take TMDB's own syntax: `,` means AND, `|` means OR.

use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::instrument;

use crate::client::TmdbClient;
use crate::types::{MovieResult, Paged, TvResult};

/// Sort order for discover queries.
///
/// Title, release and revenue orders apply to movies; name and first-air
/// orders apply to series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiscoverSort {
    /// `popularity.asc`
    #[serde(rename = "popularity.asc")]
    PopularityAsc,
    /// `popularity.desc` (the API default)
    #[serde(rename = "popularity.desc")]
    PopularityDesc,
    /// `vote_average.asc`
    #[serde(rename = "vote_average.asc")]
    VoteAverageAsc,
    /// `vote_average.desc`
    #[serde(rename = "vote_average.desc")]
    VoteAverageDesc,
    /// `vote_count.asc`
    #[serde(rename = "vote_count.asc")]
    VoteCountAsc,
    /// `vote_count.desc`
    #[serde(rename = "vote_count.desc")]
    VoteCountDesc,
    /// `original_title.asc`
    #[serde(rename = "original_title.asc")]
    OriginalTitleAsc,
    /// `original_title.desc`
    #[serde(rename = "original_title.desc")]
    OriginalTitleDesc,
    /// `primary_release_date.asc`
    #[serde(rename = "primary_release_date.asc")]
    PrimaryReleaseDateAsc,
    /// `primary_release_date.desc`
    #[serde(rename = "primary_release_date.desc")]
    PrimaryReleaseDateDesc,
    /// `revenue.asc`
    #[serde(rename = "revenue.asc")]
    RevenueAsc,
    /// `revenue.desc`
    #[serde(rename = "revenue.desc")]
    RevenueDesc,
    /// `first_air_date.asc`
    #[serde(rename = "first_air_date.asc")]
    FirstAirDateAsc,
    /// `first_air_date.desc`
    #[serde(rename = "first_air_date.desc")]
    FirstAirDateDesc,
    /// `name.asc`
    #[serde(rename = "name.asc")]
    NameAsc,
    /// `name.desc`
    #[serde(rename = "name.desc")]
    NameDesc,
}

/// Filters for `discover/movie`.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DiscoverMovieOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<DiscoverSort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certification: Option<String>,
    #[serde(rename = "certification.gte", skip_serializing_if = "Option::is_none")]
    pub certification_gte: Option<String>,
    #[serde(rename = "certification.lte", skip_serializing_if = "Option::is_none")]
    pub certification_lte: Option<String>,
    /// Required by the API when any certification filter is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certification_country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_adult: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_video: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_release_year: Option<i32>,
    #[serde(rename = "primary_release_date.gte", skip_serializing_if = "Option::is_none")]
    pub primary_release_date_gte: Option<NaiveDate>,
    #[serde(rename = "primary_release_date.lte", skip_serializing_if = "Option::is_none")]
    pub primary_release_date_lte: Option<NaiveDate>,
    #[serde(rename = "release_date.gte", skip_serializing_if = "Option::is_none")]
    pub release_date_gte: Option<NaiveDate>,
    #[serde(rename = "release_date.lte", skip_serializing_if = "Option::is_none")]
    pub release_date_lte: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(rename = "vote_average.gte", skip_serializing_if = "Option::is_none")]
    pub vote_average_gte: Option<f64>,
    #[serde(rename = "vote_average.lte", skip_serializing_if = "Option::is_none")]
    pub vote_average_lte: Option<f64>,
    #[serde(rename = "vote_count.gte", skip_serializing_if = "Option::is_none")]
    pub vote_count_gte: Option<u32>,
    #[serde(rename = "vote_count.lte", skip_serializing_if = "Option::is_none")]
    pub vote_count_lte: Option<u32>,
    #[serde(rename = "with_runtime.gte", skip_serializing_if = "Option::is_none")]
    pub with_runtime_gte: Option<u32>,
    #[serde(rename = "with_runtime.lte", skip_serializing_if = "Option::is_none")]
    pub with_runtime_lte: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_cast: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_crew: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_people: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_companies: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_genres: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub without_genres: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub without_keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_original_language: Option<String>,
    /// Release types (1-6) joined with `|` or `,`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_release_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watch_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_watch_providers: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_watch_monetization_types: Option<String>,
}

impl DiscoverMovieOptions {
    /// Sets the response language.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Sets the result page.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the sort order.
    #[must_use]
    pub const fn sort_by(mut self, sort: DiscoverSort) -> Self {
        self.sort_by = Some(sort);
        self
    }

    /// Restricts to primary releases in `[from, to]`.
    #[must_use]
    pub const fn primary_release_between(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.primary_release_date_gte = Some(from);
        self.primary_release_date_lte = Some(to);
        self
    }

    /// Restricts to the given genre ids (all of them).
    #[must_use]
    pub fn with_genres(mut self, genre_ids: &[u32]) -> Self {
        self.with_genres = Some(join_ids(genre_ids));
        self
    }

    /// Requires at least this average vote.
    #[must_use]
    pub const fn min_vote_average(mut self, value: f64) -> Self {
        self.vote_average_gte = Some(value);
        self
    }

    /// Requires at least this many votes.
    #[must_use]
    pub const fn min_vote_count(mut self, count: u32) -> Self {
        self.vote_count_gte = Some(count);
        self
    }
}

/// Filters for `discover/tv`.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DiscoverTvOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<DiscoverSort>,
    #[serde(rename = "air_date.gte", skip_serializing_if = "Option::is_none")]
    pub air_date_gte: Option<NaiveDate>,
    #[serde(rename = "air_date.lte", skip_serializing_if = "Option::is_none")]
    pub air_date_lte: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_air_date_year: Option<i32>,
    #[serde(rename = "first_air_date.gte", skip_serializing_if = "Option::is_none")]
    pub first_air_date_gte: Option<NaiveDate>,
    #[serde(rename = "first_air_date.lte", skip_serializing_if = "Option::is_none")]
    pub first_air_date_lte: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_adult: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_null_first_air_dates: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub screened_theatrically: Option<bool>,
    /// Used with `air_date` filters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(rename = "vote_average.gte", skip_serializing_if = "Option::is_none")]
    pub vote_average_gte: Option<f64>,
    #[serde(rename = "vote_average.lte", skip_serializing_if = "Option::is_none")]
    pub vote_average_lte: Option<f64>,
    #[serde(rename = "vote_count.gte", skip_serializing_if = "Option::is_none")]
    pub vote_count_gte: Option<u32>,
    #[serde(rename = "vote_count.lte", skip_serializing_if = "Option::is_none")]
    pub vote_count_lte: Option<u32>,
    #[serde(rename = "with_runtime.gte", skip_serializing_if = "Option::is_none")]
    pub with_runtime_gte: Option<u32>,
    #[serde(rename = "with_runtime.lte", skip_serializing_if = "Option::is_none")]
    pub with_runtime_lte: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_companies: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_genres: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub without_genres: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub without_keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_networks: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_original_language: Option<String>,
    /// Series status codes (0-5) joined with `|` or `,`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_status: Option<String>,
    /// Series type codes (0-6) joined with `|` or `,`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub watch_region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_watch_providers: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub with_watch_monetization_types: Option<String>,
}

impl DiscoverTvOptions {
    /// Sets the response language.
    #[must_use]
    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Sets the result page.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the sort order.
    #[must_use]
    pub const fn sort_by(mut self, sort: DiscoverSort) -> Self {
        self.sort_by = Some(sort);
        self
    }

    /// Restricts to series first aired in `[from, to]`.
    #[must_use]
    pub const fn first_aired_between(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.first_air_date_gte = Some(from);
        self.first_air_date_lte = Some(to);
        self
    }

    /// Restricts to the given genre ids (all of them).
    #[must_use]
    pub fn with_genres(mut self, genre_ids: &[u32]) -> Self {
        self.with_genres = Some(join_ids(genre_ids));
        self
    }

    /// Restricts to the given network ids (any of them).
    #[must_use]
    pub fn with_networks(mut self, network_ids: &[u64]) -> Self {
        let joined = network_ids
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("|");
        self.with_networks = Some(joined);
        self
    }
}

fn join_ids(ids: &[u32]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// Discover endpoints.
#[derive(Debug, Clone, Copy)]
pub struct DiscoverApi<'a> {
    client: &'a TmdbClient,
}

impl<'a> DiscoverApi<'a> {
    pub(crate) const fn new(client: &'a TmdbClient) -> Self {
        Self { client }
    }

    /// Movies matching the filters.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip_all, fields(sort_by = ?options.sort_by))]
    pub async fn movies(&self, options: &DiscoverMovieOptions) -> Result<Paged<MovieResult>> {
        self.client.get("discover/movie", options).await
    }

    /// Series matching the filters.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip_all, fields(sort_by = ?options.sort_by))]
    pub async fn tv(&self, options: &DiscoverTvOptions) -> Result<Paged<TvResult>> {
        self.client.get("discover/tv", options).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use serde_json::json;

    use super::*;

    #[test]
    fn test_discover_movie_options_use_dotted_wire_names() {
        // Arrange
        let options = DiscoverMovieOptions::default()
            .sort_by(DiscoverSort::VoteCountDesc)
            .primary_release_between(
                NaiveDate::from_ymd_opt(1999, 1, 1).unwrap(),
                NaiveDate::from_ymd_opt(1999, 12, 31).unwrap(),
            )
            .with_genres(&[18, 53])
            .min_vote_count(0);

        // Act
        let value = serde_json::to_value(&options).unwrap();

        // Assert
        assert_eq!(
            value,
            json!({
                "sort_by": "vote_count.desc",
                "primary_release_date.gte": "1999-01-01",
                "primary_release_date.lte": "1999-12-31",
                "with_genres": "18,53",
                "vote_count.gte": 0
            })
        );
    }

    #[test]
    fn test_discover_tv_networks_join_with_or() {
        // Arrange
        let options = DiscoverTvOptions::default().with_networks(&[49, 213]);

        // Act
        let value = serde_json::to_value(&options).unwrap();

        // Assert
        assert_eq!(value, json!({"with_networks": "49|213"}));
    }

    #[test]
    fn test_discover_tv_options_empty_by_default() {
        // Act
        let value = serde_json::to_value(DiscoverTvOptions::default()).unwrap();

        // Assert
        assert_eq!(value, json!({}));
    }
}
