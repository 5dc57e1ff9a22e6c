//! `search/*` endpoints.
//!
//! Every search takes a required `query`; the remaining parameters are
//! optional and omitted when unset.

use anyhow::Result;
use serde::Serialize;
use tracing::instrument;

use crate::client::TmdbClient;
use crate::media::MediaObject;
use crate::types::{
    CollectionResult, CompanySummary, Keyword, MovieResult, Paged, PersonResult, TvResult,
};

/// Options shared by the collection, company, keyword, multi and people
/// searches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchOptions {
    /// Search text.
    pub query: String,
    /// Response language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Result page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Include adult titles and people.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_adult: Option<bool>,
    /// ISO 3166-1 region (collections only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
}

impl SearchOptions {
    /// Creates options for the given query.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

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

    /// Includes or excludes adult results.
    #[must_use]
    pub const fn include_adult(mut self, include: bool) -> Self {
        self.include_adult = Some(include);
        self
    }
}

/// Options for `search/movie`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchMovieOptions {
    /// Search text.
    pub query: String,
    /// Response language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Result page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Include adult titles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_adult: Option<bool>,
    /// ISO 3166-1 region.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    /// Year of any release.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    /// Year of the primary release.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_release_year: Option<i32>,
}

impl SearchMovieOptions {
    /// Creates options for the given query.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

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

    /// Includes or excludes adult titles.
    #[must_use]
    pub const fn include_adult(mut self, include: bool) -> Self {
        self.include_adult = Some(include);
        self
    }

    /// Restricts to a primary release year.
    #[must_use]
    pub const fn primary_release_year(mut self, year: i32) -> Self {
        self.primary_release_year = Some(year);
        self
    }

    /// Restricts to a release year.
    #[must_use]
    pub const fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }
}

/// Options for `search/tv`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchTvOptions {
    /// Search text.
    pub query: String,
    /// Response language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Result page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Include adult titles.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_adult: Option<bool>,
    /// Year of the first episode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_air_date_year: Option<i32>,
    /// Year of any episode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

impl SearchTvOptions {
    /// Creates options for the given query.
    #[must_use]
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

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

    /// Restricts to a first-air year.
    #[must_use]
    pub const fn first_air_date_year(mut self, year: i32) -> Self {
        self.first_air_date_year = Some(year);
        self
    }
}

/// Search endpoints.
#[derive(Debug, Clone, Copy)]
pub struct SearchApi<'a> {
    client: &'a TmdbClient,
}

impl<'a> SearchApi<'a> {
    pub(crate) const fn new(client: &'a TmdbClient) -> Self {
        Self { client }
    }

    /// Searches collections.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip_all, fields(query = %options.query))]
    pub async fn collections(&self, options: &SearchOptions) -> Result<Paged<CollectionResult>> {
        self.client.get("search/collection", options).await
    }

    /// Searches production companies.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip_all, fields(query = %options.query))]
    pub async fn companies(&self, options: &SearchOptions) -> Result<Paged<CompanySummary>> {
        self.client.get("search/company", options).await
    }

    /// Searches keywords.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip_all, fields(query = %options.query))]
    pub async fn keywords(&self, options: &SearchOptions) -> Result<Paged<Keyword>> {
        self.client.get("search/keyword", options).await
    }

    /// Searches movies.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip_all, fields(query = %options.query))]
    pub async fn movies(&self, options: &SearchMovieOptions) -> Result<Paged<MovieResult>> {
        self.client.get("search/movie", options).await
    }

    /// Searches movies, series and people at once. Entries carry a
    /// `media_type` and are converted with [`MediaObject::decode`] or the
    /// typed `to_*` helpers.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip_all, fields(query = %options.query))]
    pub async fn multi(&self, options: &SearchOptions) -> Result<Paged<MediaObject>> {
        self.client.get("search/multi", options).await
    }

    /// Searches people.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip_all, fields(query = %options.query))]
    pub async fn people(&self, options: &SearchOptions) -> Result<Paged<PersonResult>> {
        self.client.get("search/person", options).await
    }

    /// Searches TV series.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip_all, fields(query = %options.query))]
    pub async fn tv(&self, options: &SearchTvOptions) -> Result<Paged<TvResult>> {
        self.client.get("search/tv", options).await
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use serde_json::json;

    use super::*;

    #[test]
    fn test_search_options_send_only_query_by_default() {
        // Arrange
        let options = SearchOptions::new("fight club");

        // Act
        let value = serde_json::to_value(&options).unwrap();

        // Assert
        assert_eq!(value, json!({"query": "fight club"}));
    }

    #[test]
    fn test_search_movie_options_keep_explicit_false() {
        // Arrange
        let options = SearchMovieOptions::new("fight club")
            .include_adult(false)
            .primary_release_year(1999);

        // Act
        let value = serde_json::to_value(&options).unwrap();

        // Assert
        assert_eq!(
            value,
            json!({
                "query": "fight club",
                "include_adult": false,
                "primary_release_year": 1999
            })
        );
    }
}
