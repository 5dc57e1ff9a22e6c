//! Resource facades, one per TMDB endpoint family.
//!
//! Each facade borrows the [`TmdbClient`] and is obtained from one of its
//! accessors:
//!
//! ```no_run
//! # async fn run() -> anyhow::Result<()> {
//! use cinedex_api::{DetailsOptions, TmdbClient};
//!
//! let client = TmdbClient::builder().api_key("key").build()?;
//! let movie = client.movies().details(550, &DetailsOptions::default()).await?;
//! assert_eq!(movie.title, "Fight Club");
//! # Ok(())
//! # }
//! ```

mod account;
mod authentication;
mod catalog;
mod discover;
mod entities;
mod find;
mod lists;
mod movies;
mod people;
mod search;
mod trending;
mod tv;

pub use account::{AccountApi, AccountListOptions, AccountSort};
pub use authentication::AuthenticationApi;
pub use catalog::{
    CertificationsApi, ChangesApi, ConfigurationApi, GenresApi, WatchProviderOptions,
    WatchProvidersApi,
};
pub use discover::{DiscoverApi, DiscoverMovieOptions, DiscoverSort, DiscoverTvOptions};
pub use entities::{
    CollectionsApi, CompaniesApi, CreditsApi, KeywordMoviesOptions, KeywordsApi, NetworksApi,
    ReviewsApi,
};
pub use find::{ExternalSource, FindApi, FindOptions};
pub use lists::{GuestSessionsApi, ListsApi};
pub use movies::MoviesApi;
pub use people::PeopleApi;
pub use search::{SearchApi, SearchMovieOptions, SearchOptions, SearchTvOptions};
pub use trending::{TimeWindow, TrendingApi};
pub use tv::{TvApi, TvEpisodeGroupsApi, TvEpisodesApi, TvListOptions, TvSeasonsApi};

use crate::client::TmdbClient;

impl TmdbClient {
    /// `account/*`
    #[must_use]
    pub const fn account(&self) -> AccountApi<'_> {
        AccountApi::new(self)
    }

    /// `authentication/*`
    #[must_use]
    pub const fn authentication(&self) -> AuthenticationApi<'_> {
        AuthenticationApi::new(self)
    }

    /// `certification/*`
    #[must_use]
    pub const fn certifications(&self) -> CertificationsApi<'_> {
        CertificationsApi::new(self)
    }

    /// Global change feeds.
    #[must_use]
    pub const fn changes(&self) -> ChangesApi<'_> {
        ChangesApi::new(self)
    }

    /// `collection/*`
    #[must_use]
    pub const fn collections(&self) -> CollectionsApi<'_> {
        CollectionsApi::new(self)
    }

    /// `company/*`
    #[must_use]
    pub const fn companies(&self) -> CompaniesApi<'_> {
        CompaniesApi::new(self)
    }

    /// `configuration/*`
    #[must_use]
    pub const fn configuration(&self) -> ConfigurationApi<'_> {
        ConfigurationApi::new(self)
    }

    /// `credit/*`
    #[must_use]
    pub const fn credits(&self) -> CreditsApi<'_> {
        CreditsApi::new(self)
    }

    /// `discover/*`
    #[must_use]
    pub const fn discover(&self) -> DiscoverApi<'_> {
        DiscoverApi::new(self)
    }

    /// `find/*`
    #[must_use]
    pub const fn find(&self) -> FindApi<'_> {
        FindApi::new(self)
    }

    /// `genre/*`
    #[must_use]
    pub const fn genres(&self) -> GenresApi<'_> {
        GenresApi::new(self)
    }

    /// `guest_session/*`
    #[must_use]
    pub const fn guest_sessions(&self) -> GuestSessionsApi<'_> {
        GuestSessionsApi::new(self)
    }

    /// `keyword/*`
    #[must_use]
    pub const fn keywords(&self) -> KeywordsApi<'_> {
        KeywordsApi::new(self)
    }

    /// `list/*`
    #[must_use]
    pub const fn lists(&self) -> ListsApi<'_> {
        ListsApi::new(self)
    }

    /// `movie/*`
    #[must_use]
    pub const fn movies(&self) -> MoviesApi<'_> {
        MoviesApi::new(self)
    }

    /// `network/*`
    #[must_use]
    pub const fn networks(&self) -> NetworksApi<'_> {
        NetworksApi::new(self)
    }

    /// `person/*`
    #[must_use]
    pub const fn people(&self) -> PeopleApi<'_> {
        PeopleApi::new(self)
    }

    /// `review/*`
    #[must_use]
    pub const fn reviews(&self) -> ReviewsApi<'_> {
        ReviewsApi::new(self)
    }

    /// `search/*`
    #[must_use]
    pub const fn search(&self) -> SearchApi<'_> {
        SearchApi::new(self)
    }

    /// `trending/*`
    #[must_use]
    pub const fn trending(&self) -> TrendingApi<'_> {
        TrendingApi::new(self)
    }

    /// `tv/{series_id}`
    #[must_use]
    pub const fn tv(&self) -> TvApi<'_> {
        TvApi::new(self)
    }

    /// `tv/{series_id}/season/{season_number}`
    #[must_use]
    pub const fn tv_seasons(&self) -> TvSeasonsApi<'_> {
        TvSeasonsApi::new(self)
    }

    /// `tv/{series_id}/season/{season_number}/episode/{episode_number}`
    #[must_use]
    pub const fn tv_episodes(&self) -> TvEpisodesApi<'_> {
        TvEpisodesApi::new(self)
    }

    /// `tv/episode_group/*`
    #[must_use]
    pub const fn tv_episode_groups(&self) -> TvEpisodeGroupsApi<'_> {
        TvEpisodeGroupsApi::new(self)
    }

    /// `watch/providers/*`
    #[must_use]
    pub const fn watch_providers(&self) -> WatchProvidersApi<'_> {
        WatchProvidersApi::new(self)
    }
}
