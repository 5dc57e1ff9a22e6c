//! Search and find result types not covered by the entity modules.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::movie::MovieResult;
use super::person::PersonResult;
use super::tv::{EpisodeSummary, TvResult};
use crate::error::TmdbError;
use crate::media::{MediaObject, MediaType};

/// Collection entry in `search/collection` results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionResult {
    /// Collection ID.
    pub id: u64,
    /// Localized name.
    pub name: String,
    /// Original name.
    pub original_name: String,
    /// Original language.
    pub original_language: String,
    /// Overview text.
    pub overview: String,
    /// Adult flag.
    pub adult: bool,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
}

/// Company entry in `search/company` results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanySummary {
    /// Company ID.
    pub id: u64,
    /// Name.
    pub name: String,
    /// Logo image path.
    pub logo_path: Option<String>,
    /// Country (ISO 3166-1).
    pub origin_country: String,
}

/// Season match in `find` results.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FindSeasonResult {
    pub id: u64,
    pub name: String,
    pub overview: String,
    pub air_date: Option<String>,
    pub episode_count: u32,
    pub season_number: u32,
    pub show_id: u64,
    pub poster_path: Option<String>,
    pub vote_average: f64,
}

/// Response from `find/{external_id}`.
///
/// Each list holds the entities matching the external ID; usually only one
/// list is non-empty. Entries are tagged with `media_type` and converted
/// through the typed accessors, which reject entries tagged for another list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FindResults {
    /// Matching movies.
    pub movie_results: Vec<MediaObject>,
    /// Matching people.
    pub person_results: Vec<MediaObject>,
    /// Matching series.
    pub tv_results: Vec<MediaObject>,
    /// Matching episodes.
    pub tv_episode_results: Vec<MediaObject>,
    /// Matching seasons.
    pub tv_season_results: Vec<MediaObject>,
}

impl FindResults {
    /// Whether nothing matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.movie_results.is_empty()
            && self.person_results.is_empty()
            && self.tv_results.is_empty()
            && self.tv_episode_results.is_empty()
            && self.tv_season_results.is_empty()
    }

    /// Matching movies.
    ///
    /// # Errors
    ///
    /// Fails on the first entry not tagged `movie`; see [`MediaObject::convert`].
    pub fn movies(&self) -> Result<Vec<MovieResult>, TmdbError> {
        convert_all(&self.movie_results, MediaType::Movie)
    }

    /// Matching people.
    ///
    /// # Errors
    ///
    /// Fails on the first entry not tagged `person`.
    pub fn people(&self) -> Result<Vec<PersonResult>, TmdbError> {
        convert_all(&self.person_results, MediaType::Person)
    }

    /// Matching series.
    ///
    /// # Errors
    ///
    /// Fails on the first entry not tagged `tv`.
    pub fn tv(&self) -> Result<Vec<TvResult>, TmdbError> {
        convert_all(&self.tv_results, MediaType::Tv)
    }

    /// Matching episodes.
    ///
    /// # Errors
    ///
    /// Fails on the first entry not tagged `tv_episode`.
    pub fn tv_episodes(&self) -> Result<Vec<EpisodeSummary>, TmdbError> {
        convert_all(&self.tv_episode_results, MediaType::TvEpisode)
    }

    /// Matching seasons.
    ///
    /// # Errors
    ///
    /// Fails on the first entry not tagged `tv_season`.
    pub fn tv_seasons(&self) -> Result<Vec<FindSeasonResult>, TmdbError> {
        convert_all(&self.tv_season_results, MediaType::TvSeason)
    }
}

fn convert_all<T: DeserializeOwned>(
    objects: &[MediaObject],
    target: MediaType,
) -> Result<Vec<T>, TmdbError> {
    objects.iter().map(|obj| obj.convert(target)).collect()
}
