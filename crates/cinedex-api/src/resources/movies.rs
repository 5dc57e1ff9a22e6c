//! `movie/*` endpoints.

use anyhow::Result;
use serde::Serialize;
use tracing::instrument;

use crate::client::{NO_QUERY, TmdbClient};
use crate::options::{
    ChangesOptions, DetailsOptions, ImageOptions, LanguageOptions, PageOptions,
    RegionPageOptions, SessionOptions, VideoOptions,
};
use crate::types::{
    AccountStates, AlternativeTitles, ChangeSet, Credits, DatedPaged, ExternalIds, Images,
    Keywords, ListSummary, MovieDetails, MovieResult, Paged, RatingRequest, ReleaseDates, Review,
    StatusResponse, Translations, Videos, WatchProviderResults,
};

#[derive(Serialize)]
struct CountryQuery<'c> {
    #[serde(skip_serializing_if = "Option::is_none")]
    country: Option<&'c str>,
}

/// Movie endpoints.
#[derive(Debug, Clone, Copy)]
pub struct MoviesApi<'a> {
    client: &'a TmdbClient,
}

impl<'a> MoviesApi<'a> {
    pub(crate) const fn new(client: &'a TmdbClient) -> Self {
        Self { client }
    }

    /// Primary movie details, plus any sub-resources named in
    /// `append_to_response`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options))]
    pub async fn details(&self, movie_id: u64, options: &DetailsOptions) -> Result<MovieDetails> {
        let path = format!("movie/{movie_id}");
        self.client.get(&path, options).await
    }

    /// Favorite / watchlist / rating state for a session.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, session))]
    pub async fn account_states(
        &self,
        movie_id: u64,
        session: &SessionOptions,
    ) -> Result<AccountStates> {
        let path = format!("movie/{movie_id}/account_states");
        self.client.get(&path, session).await
    }

    /// Titles used in other countries, optionally for one country.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self))]
    pub async fn alternative_titles(
        &self,
        movie_id: u64,
        country: Option<&str>,
    ) -> Result<AlternativeTitles> {
        let path = format!("movie/{movie_id}/alternative_titles");
        self.client.get(&path, &CountryQuery { country }).await
    }

    /// Change history (24 hours by default, at most 14 days).
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options))]
    pub async fn changes(&self, movie_id: u64, options: &ChangesOptions) -> Result<ChangeSet> {
        let path = format!("movie/{movie_id}/changes");
        self.client.get(&path, options).await
    }

    /// Cast and crew.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options))]
    pub async fn credits(&self, movie_id: u64, options: &LanguageOptions) -> Result<Credits> {
        let path = format!("movie/{movie_id}/credits");
        self.client.get(&path, options).await
    }

    /// IDs on other sites.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self))]
    pub async fn external_ids(&self, movie_id: u64) -> Result<ExternalIds> {
        let path = format!("movie/{movie_id}/external_ids");
        self.client.get(&path, NO_QUERY).await
    }

    /// Posters, backdrops and logos.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options))]
    pub async fn images(&self, movie_id: u64, options: &ImageOptions) -> Result<Images> {
        let path = format!("movie/{movie_id}/images");
        self.client.get(&path, options).await
    }

    /// Keywords.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self))]
    pub async fn keywords(&self, movie_id: u64) -> Result<Keywords> {
        let path = format!("movie/{movie_id}/keywords");
        self.client.get(&path, NO_QUERY).await
    }

    /// Lists the movie belongs to.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options))]
    pub async fn lists(&self, movie_id: u64, options: &PageOptions) -> Result<Paged<ListSummary>> {
        let path = format!("movie/{movie_id}/lists");
        self.client.get(&path, options).await
    }

    /// Recommended movies.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options))]
    pub async fn recommendations(
        &self,
        movie_id: u64,
        options: &PageOptions,
    ) -> Result<Paged<MovieResult>> {
        let path = format!("movie/{movie_id}/recommendations");
        self.client.get(&path, options).await
    }

    /// Release dates and certifications per country.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self))]
    pub async fn release_dates(&self, movie_id: u64) -> Result<ReleaseDates> {
        let path = format!("movie/{movie_id}/release_dates");
        self.client.get(&path, NO_QUERY).await
    }

    /// User reviews.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options))]
    pub async fn reviews(&self, movie_id: u64, options: &PageOptions) -> Result<Paged<Review>> {
        let path = format!("movie/{movie_id}/reviews");
        self.client.get(&path, options).await
    }

    /// Similar movies (by keywords and genres).
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options))]
    pub async fn similar(&self, movie_id: u64, options: &PageOptions) -> Result<Paged<MovieResult>> {
        let path = format!("movie/{movie_id}/similar");
        self.client.get(&path, options).await
    }

    /// Translations.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self))]
    pub async fn translations(&self, movie_id: u64) -> Result<Translations> {
        let path = format!("movie/{movie_id}/translations");
        self.client.get(&path, NO_QUERY).await
    }

    /// Trailers, teasers and clips.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options))]
    pub async fn videos(&self, movie_id: u64, options: &VideoOptions) -> Result<Videos> {
        let path = format!("movie/{movie_id}/videos");
        self.client.get(&path, options).await
    }

    /// Streaming, rental and purchase availability per country.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self))]
    pub async fn watch_providers(&self, movie_id: u64) -> Result<WatchProviderResults> {
        let path = format!("movie/{movie_id}/watch/providers");
        self.client.get(&path, NO_QUERY).await
    }

    /// Most recently created movie.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip_all)]
    pub async fn latest(&self) -> Result<MovieDetails> {
        self.client.get("movie/latest", NO_QUERY).await
    }

    /// Movies currently in theaters.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip_all)]
    pub async fn now_playing(&self, options: &RegionPageOptions) -> Result<DatedPaged<MovieResult>> {
        self.client.get("movie/now_playing", options).await
    }

    /// Popular movies.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip_all)]
    pub async fn popular(&self, options: &RegionPageOptions) -> Result<Paged<MovieResult>> {
        self.client.get("movie/popular", options).await
    }

    /// Top rated movies.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip_all)]
    pub async fn top_rated(&self, options: &RegionPageOptions) -> Result<Paged<MovieResult>> {
        self.client.get("movie/top_rated", options).await
    }

    /// Upcoming releases.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip_all)]
    pub async fn upcoming(&self, options: &RegionPageOptions) -> Result<DatedPaged<MovieResult>> {
        self.client.get("movie/upcoming", options).await
    }

    /// Rates a movie (0.5-10.0).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects the value.
    #[instrument(skip(self, session))]
    pub async fn add_rating(
        &self,
        movie_id: u64,
        session: &SessionOptions,
        value: f64,
    ) -> Result<StatusResponse> {
        let path = format!("movie/{movie_id}/rating");
        self.client
            .post(&path, session, &RatingRequest { value })
            .await
    }

    /// Removes a rating.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects it.
    #[instrument(skip(self, session))]
    pub async fn delete_rating(
        &self,
        movie_id: u64,
        session: &SessionOptions,
    ) -> Result<StatusResponse> {
        let path = format!("movie/{movie_id}/rating");
        self.client.delete(&path, session, None::<&()>).await
    }
}
