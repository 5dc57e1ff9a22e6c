//! `tv/*` endpoints: series, seasons, episodes and episode groups.

use anyhow::Result;
use serde::Serialize;
use tracing::instrument;

use crate::client::{NO_QUERY, TmdbClient};
use crate::options::{
    ChangesOptions, DetailsOptions, ImageOptions, LanguageOptions, PageOptions, SessionOptions,
    VideoOptions,
};
use crate::types::{
    AccountStates, AggregateCredits, AlternativeTitles, ChangeSet, ContentRatings, Credits,
    EpisodeDetails, EpisodeGroupDetails, EpisodeGroups, ExternalIds, Images, Keywords,
    ListSummary, Paged, RatingRequest, Review, ScreenedTheatrically, SeasonAccountStates,
    SeasonDetails, StatusResponse, Translations, TvDetails, TvResult, Videos,
    WatchProviderResults,
};

/// Options for series listings (`airing_today`, `popular`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TvListOptions {
    /// Response language.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Result page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Timezone used to decide what airs "today" (`Asia/Tokyo`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

impl TvListOptions {
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

    /// Sets the timezone.
    #[must_use]
    pub fn timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }
}

// --- Series ---

/// TV series endpoints.
#[derive(Debug, Clone, Copy)]
pub struct TvApi<'a> {
    client: &'a TmdbClient,
}

impl<'a> TvApi<'a> {
    pub(crate) const fn new(client: &'a TmdbClient) -> Self {
        Self { client }
    }

    /// Primary series details, plus any sub-resources named in
    /// `append_to_response`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options))]
    pub async fn details(&self, series_id: u64, options: &DetailsOptions) -> Result<TvDetails> {
        let path = format!("tv/{series_id}");
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
        series_id: u64,
        session: &SessionOptions,
    ) -> Result<AccountStates> {
        let path = format!("tv/{series_id}/account_states");
        self.client.get(&path, session).await
    }

    /// Cast and crew summed over all episodes.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options))]
    pub async fn aggregate_credits(
        &self,
        series_id: u64,
        options: &LanguageOptions,
    ) -> Result<AggregateCredits> {
        let path = format!("tv/{series_id}/aggregate_credits");
        self.client.get(&path, options).await
    }

    /// Titles used in other countries.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self))]
    pub async fn alternative_titles(&self, series_id: u64) -> Result<AlternativeTitles> {
        let path = format!("tv/{series_id}/alternative_titles");
        self.client.get(&path, NO_QUERY).await
    }

    /// Change history.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options))]
    pub async fn changes(&self, series_id: u64, options: &ChangesOptions) -> Result<ChangeSet> {
        let path = format!("tv/{series_id}/changes");
        self.client.get(&path, options).await
    }

    /// Content ratings per country.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self))]
    pub async fn content_ratings(&self, series_id: u64) -> Result<ContentRatings> {
        let path = format!("tv/{series_id}/content_ratings");
        self.client.get(&path, NO_QUERY).await
    }

    /// Cast and crew of the latest season.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options))]
    pub async fn credits(&self, series_id: u64, options: &LanguageOptions) -> Result<Credits> {
        let path = format!("tv/{series_id}/credits");
        self.client.get(&path, options).await
    }

    /// Alternative episode orderings.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self))]
    pub async fn episode_groups(&self, series_id: u64) -> Result<EpisodeGroups> {
        let path = format!("tv/{series_id}/episode_groups");
        self.client.get(&path, NO_QUERY).await
    }

    /// IDs on other sites.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self))]
    pub async fn external_ids(&self, series_id: u64) -> Result<ExternalIds> {
        let path = format!("tv/{series_id}/external_ids");
        self.client.get(&path, NO_QUERY).await
    }

    /// Posters, backdrops and logos.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options))]
    pub async fn images(&self, series_id: u64, options: &ImageOptions) -> Result<Images> {
        let path = format!("tv/{series_id}/images");
        self.client.get(&path, options).await
    }

    /// Keywords.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self))]
    pub async fn keywords(&self, series_id: u64) -> Result<Keywords> {
        let path = format!("tv/{series_id}/keywords");
        self.client.get(&path, NO_QUERY).await
    }

    /// Lists the series belongs to.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options))]
    pub async fn lists(&self, series_id: u64, options: &PageOptions) -> Result<Paged<ListSummary>> {
        let path = format!("tv/{series_id}/lists");
        self.client.get(&path, options).await
    }

    /// Recommended series.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options))]
    pub async fn recommendations(
        &self,
        series_id: u64,
        options: &PageOptions,
    ) -> Result<Paged<TvResult>> {
        let path = format!("tv/{series_id}/recommendations");
        self.client.get(&path, options).await
    }

    /// User reviews.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options))]
    pub async fn reviews(&self, series_id: u64, options: &PageOptions) -> Result<Paged<Review>> {
        let path = format!("tv/{series_id}/reviews");
        self.client.get(&path, options).await
    }

    /// Episodes screened in theaters.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self))]
    pub async fn screened_theatrically(&self, series_id: u64) -> Result<ScreenedTheatrically> {
        let path = format!("tv/{series_id}/screened_theatrically");
        self.client.get(&path, NO_QUERY).await
    }

    /// Similar series.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options))]
    pub async fn similar(&self, series_id: u64, options: &PageOptions) -> Result<Paged<TvResult>> {
        let path = format!("tv/{series_id}/similar");
        self.client.get(&path, options).await
    }

    /// Translations.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self))]
    pub async fn translations(&self, series_id: u64) -> Result<Translations> {
        let path = format!("tv/{series_id}/translations");
        self.client.get(&path, NO_QUERY).await
    }

    /// Trailers, teasers and clips.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options))]
    pub async fn videos(&self, series_id: u64, options: &VideoOptions) -> Result<Videos> {
        let path = format!("tv/{series_id}/videos");
        self.client.get(&path, options).await
    }

    /// Streaming availability per country.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self))]
    pub async fn watch_providers(&self, series_id: u64) -> Result<WatchProviderResults> {
        let path = format!("tv/{series_id}/watch/providers");
        self.client.get(&path, NO_QUERY).await
    }

    /// Most recently created series.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip_all)]
    pub async fn latest(&self) -> Result<TvDetails> {
        self.client.get("tv/latest", NO_QUERY).await
    }

    /// Series with an episode airing today.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip_all)]
    pub async fn airing_today(&self, options: &TvListOptions) -> Result<Paged<TvResult>> {
        self.client.get("tv/airing_today", options).await
    }

    /// Series with an episode airing in the next seven days.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip_all)]
    pub async fn on_the_air(&self, options: &TvListOptions) -> Result<Paged<TvResult>> {
        self.client.get("tv/on_the_air", options).await
    }

    /// Popular series.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip_all)]
    pub async fn popular(&self, options: &TvListOptions) -> Result<Paged<TvResult>> {
        self.client.get("tv/popular", options).await
    }

    /// Top rated series.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip_all)]
    pub async fn top_rated(&self, options: &TvListOptions) -> Result<Paged<TvResult>> {
        self.client.get("tv/top_rated", options).await
    }

    /// Rates a series (0.5-10.0).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects the value.
    #[instrument(skip(self, session))]
    pub async fn add_rating(
        &self,
        series_id: u64,
        session: &SessionOptions,
        value: f64,
    ) -> Result<StatusResponse> {
        let path = format!("tv/{series_id}/rating");
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
        series_id: u64,
        session: &SessionOptions,
    ) -> Result<StatusResponse> {
        let path = format!("tv/{series_id}/rating");
        self.client.delete(&path, session, None::<&()>).await
    }
}

// --- Seasons ---

/// TV season endpoints.
#[derive(Debug, Clone, Copy)]
pub struct TvSeasonsApi<'a> {
    client: &'a TmdbClient,
}

impl<'a> TvSeasonsApi<'a> {
    pub(crate) const fn new(client: &'a TmdbClient) -> Self {
        Self { client }
    }

    /// Season details with its episodes.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options))]
    pub async fn details(
        &self,
        series_id: u64,
        season_number: u32,
        options: &DetailsOptions,
    ) -> Result<SeasonDetails> {
        let path = format!("tv/{series_id}/season/{season_number}");
        self.client.get(&path, options).await
    }

    /// Per-episode rating state for a session.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, session))]
    pub async fn account_states(
        &self,
        series_id: u64,
        season_number: u32,
        session: &SessionOptions,
    ) -> Result<SeasonAccountStates> {
        let path = format!("tv/{series_id}/season/{season_number}/account_states");
        self.client.get(&path, session).await
    }

    /// Cast and crew summed over the season.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options))]
    pub async fn aggregate_credits(
        &self,
        series_id: u64,
        season_number: u32,
        options: &LanguageOptions,
    ) -> Result<AggregateCredits> {
        let path = format!("tv/{series_id}/season/{season_number}/aggregate_credits");
        self.client.get(&path, options).await
    }

    /// Change history. Takes the season ID, not the season number.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options))]
    pub async fn changes(&self, season_id: u64, options: &ChangesOptions) -> Result<ChangeSet> {
        let path = format!("tv/season/{season_id}/changes");
        self.client.get(&path, options).await
    }

    /// Season cast and crew.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options))]
    pub async fn credits(
        &self,
        series_id: u64,
        season_number: u32,
        options: &LanguageOptions,
    ) -> Result<Credits> {
        let path = format!("tv/{series_id}/season/{season_number}/credits");
        self.client.get(&path, options).await
    }

    /// IDs on other sites.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self))]
    pub async fn external_ids(&self, series_id: u64, season_number: u32) -> Result<ExternalIds> {
        let path = format!("tv/{series_id}/season/{season_number}/external_ids");
        self.client.get(&path, NO_QUERY).await
    }

    /// Season posters.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options))]
    pub async fn images(
        &self,
        series_id: u64,
        season_number: u32,
        options: &ImageOptions,
    ) -> Result<Images> {
        let path = format!("tv/{series_id}/season/{season_number}/images");
        self.client.get(&path, options).await
    }

    /// Translations.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self))]
    pub async fn translations(&self, series_id: u64, season_number: u32) -> Result<Translations> {
        let path = format!("tv/{series_id}/season/{season_number}/translations");
        self.client.get(&path, NO_QUERY).await
    }

    /// Season videos.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options))]
    pub async fn videos(
        &self,
        series_id: u64,
        season_number: u32,
        options: &VideoOptions,
    ) -> Result<Videos> {
        let path = format!("tv/{series_id}/season/{season_number}/videos");
        self.client.get(&path, options).await
    }

    /// Streaming availability per country.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options))]
    pub async fn watch_providers(
        &self,
        series_id: u64,
        season_number: u32,
        options: &LanguageOptions,
    ) -> Result<WatchProviderResults> {
        let path = format!("tv/{series_id}/season/{season_number}/watch/providers");
        self.client.get(&path, options).await
    }
}

// --- Episodes ---

/// TV episode endpoints.
#[derive(Debug, Clone, Copy)]
pub struct TvEpisodesApi<'a> {
    client: &'a TmdbClient,
}

impl<'a> TvEpisodesApi<'a> {
    pub(crate) const fn new(client: &'a TmdbClient) -> Self {
        Self { client }
    }

    /// Episode details.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options))]
    pub async fn details(
        &self,
        series_id: u64,
        season_number: u32,
        episode_number: u32,
        options: &DetailsOptions,
    ) -> Result<EpisodeDetails> {
        let path = format!("tv/{series_id}/season/{season_number}/episode/{episode_number}");
        self.client.get(&path, options).await
    }

    /// Rating state for a session.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, session))]
    pub async fn account_states(
        &self,
        series_id: u64,
        season_number: u32,
        episode_number: u32,
        session: &SessionOptions,
    ) -> Result<AccountStates> {
        let path = format!(
            "tv/{series_id}/season/{season_number}/episode/{episode_number}/account_states"
        );
        self.client.get(&path, session).await
    }

    /// Change history. Takes the episode ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options))]
    pub async fn changes(&self, episode_id: u64, options: &ChangesOptions) -> Result<ChangeSet> {
        let path = format!("tv/episode/{episode_id}/changes");
        self.client.get(&path, options).await
    }

    /// Cast, crew and guest stars.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options))]
    pub async fn credits(
        &self,
        series_id: u64,
        season_number: u32,
        episode_number: u32,
        options: &LanguageOptions,
    ) -> Result<Credits> {
        let path =
            format!("tv/{series_id}/season/{season_number}/episode/{episode_number}/credits");
        self.client.get(&path, options).await
    }

    /// IDs on other sites.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self))]
    pub async fn external_ids(
        &self,
        series_id: u64,
        season_number: u32,
        episode_number: u32,
    ) -> Result<ExternalIds> {
        let path = format!(
            "tv/{series_id}/season/{season_number}/episode/{episode_number}/external_ids"
        );
        self.client.get(&path, NO_QUERY).await
    }

    /// Episode stills.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options))]
    pub async fn images(
        &self,
        series_id: u64,
        season_number: u32,
        episode_number: u32,
        options: &ImageOptions,
    ) -> Result<Images> {
        let path =
            format!("tv/{series_id}/season/{season_number}/episode/{episode_number}/images");
        self.client.get(&path, options).await
    }

    /// Translations.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self))]
    pub async fn translations(
        &self,
        series_id: u64,
        season_number: u32,
        episode_number: u32,
    ) -> Result<Translations> {
        let path = format!(
            "tv/{series_id}/season/{season_number}/episode/{episode_number}/translations"
        );
        self.client.get(&path, NO_QUERY).await
    }

    /// Episode videos.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options))]
    pub async fn videos(
        &self,
        series_id: u64,
        season_number: u32,
        episode_number: u32,
        options: &VideoOptions,
    ) -> Result<Videos> {
        let path =
            format!("tv/{series_id}/season/{season_number}/episode/{episode_number}/videos");
        self.client.get(&path, options).await
    }

    /// Rates an episode (0.5-10.0).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API rejects the value.
    #[instrument(skip(self, session))]
    pub async fn add_rating(
        &self,
        series_id: u64,
        season_number: u32,
        episode_number: u32,
        session: &SessionOptions,
        value: f64,
    ) -> Result<StatusResponse> {
        let path =
            format!("tv/{series_id}/season/{season_number}/episode/{episode_number}/rating");
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
        series_id: u64,
        season_number: u32,
        episode_number: u32,
        session: &SessionOptions,
    ) -> Result<StatusResponse> {
        let path =
            format!("tv/{series_id}/season/{season_number}/episode/{episode_number}/rating");
        self.client.delete(&path, session, None::<&()>).await
    }
}

// --- Episode groups ---

/// Episode group lookup.
#[derive(Debug, Clone, Copy)]
pub struct TvEpisodeGroupsApi<'a> {
    client: &'a TmdbClient,
}

impl<'a> TvEpisodeGroupsApi<'a> {
    pub(crate) const fn new(client: &'a TmdbClient) -> Self {
        Self { client }
    }

    /// Episode group with its groups and episodes.
    ///
    /// # Errors
    ///
    /// Returns an error if the request or JSON parsing fails.
    #[instrument(skip(self, options))]
    pub async fn details(
        &self,
        episode_group_id: &str,
        options: &LanguageOptions,
    ) -> Result<EpisodeGroupDetails> {
        let path = format!("tv/episode_group/{episode_group_id}");
        self.client.get(&path, options).await
    }
}
