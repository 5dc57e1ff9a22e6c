//! People response types.

use serde::{Deserialize, Serialize};

use super::common::{ExternalIds, Images, Translations};
use super::movie::MovieResult;
use super::tv::TvResult;
use crate::error::TmdbError;
use crate::media::{MediaObject, MediaType};

/// A person as it appears in listings and search results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonResult {
    /// TMDB person ID.
    pub id: u64,
    /// Name.
    pub name: String,
    /// Original name.
    pub original_name: String,
    /// 0 unknown, 1 female, 2 male, 3 non-binary.
    pub gender: u8,
    /// Adult flag.
    pub adult: bool,
    /// Main department.
    pub known_for_department: String,
    /// Popularity score.
    pub popularity: f64,
    /// Profile image path.
    pub profile_path: Option<String>,
    /// Notable works, each tagged with `media_type`.
    pub known_for: Vec<MediaObject>,
}

/// Response from `person/{person_id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonDetails {
    /// TMDB person ID.
    pub id: u64,
    /// IMDb ID (`nm0000093`).
    pub imdb_id: Option<String>,
    /// Name.
    pub name: String,
    /// Other names.
    pub also_known_as: Vec<String>,
    /// Biography.
    pub biography: String,
    /// Birthday (YYYY-MM-DD or null).
    pub birthday: Option<String>,
    /// Deathday (YYYY-MM-DD or null).
    pub deathday: Option<String>,
    /// Place of birth.
    pub place_of_birth: Option<String>,
    /// 0 unknown, 1 female, 2 male, 3 non-binary.
    pub gender: u8,
    /// Adult flag.
    pub adult: bool,
    /// Official homepage.
    pub homepage: Option<String>,
    /// Main department.
    pub known_for_department: String,
    /// Popularity score.
    pub popularity: f64,
    /// Profile image path.
    pub profile_path: Option<String>,

    /// Appended `combined_credits`.
    pub combined_credits: Option<PersonCombinedCredits>,
    /// Appended `movie_credits`.
    pub movie_credits: Option<PersonMovieCredits>,
    /// Appended `tv_credits`.
    pub tv_credits: Option<PersonTvCredits>,
    /// Appended `external_ids`.
    pub external_ids: Option<ExternalIds>,
    /// Appended `images`.
    pub images: Option<Images>,
    /// Appended `translations`.
    pub translations: Option<Translations>,
}

// --- Credits ---

/// Acting role in a movie.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonMovieCast {
    /// The movie.
    #[serde(flatten)]
    pub movie: MovieResult,
    /// Character played.
    #[serde(default)]
    pub character: String,
    /// Credit ID.
    #[serde(default)]
    pub credit_id: String,
    /// Billing order.
    #[serde(default)]
    pub order: Option<u32>,
}

/// Crew job on a movie.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonMovieCrew {
    /// The movie.
    #[serde(flatten)]
    pub movie: MovieResult,
    /// Credit ID.
    #[serde(default)]
    pub credit_id: String,
    /// Department.
    #[serde(default)]
    pub department: String,
    /// Job title.
    #[serde(default)]
    pub job: String,
}

/// Acting role in a series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonTvCast {
    /// The series.
    #[serde(flatten)]
    pub tv: TvResult,
    /// Character played.
    #[serde(default)]
    pub character: String,
    /// Credit ID.
    #[serde(default)]
    pub credit_id: String,
    /// Episodes credited.
    #[serde(default)]
    pub episode_count: u32,
}

/// Crew job on a series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonTvCrew {
    /// The series.
    #[serde(flatten)]
    pub tv: TvResult,
    /// Credit ID.
    #[serde(default)]
    pub credit_id: String,
    /// Department.
    #[serde(default)]
    pub department: String,
    /// Job title.
    #[serde(default)]
    pub job: String,
    /// Episodes credited.
    #[serde(default)]
    pub episode_count: u32,
}

/// Response from `person/{person_id}/movie_credits`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonMovieCredits {
    /// Person ID.
    pub id: u64,
    /// Acting roles.
    pub cast: Vec<PersonMovieCast>,
    /// Crew jobs.
    pub crew: Vec<PersonMovieCrew>,
}

/// Response from `person/{person_id}/tv_credits`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonTvCredits {
    /// Person ID.
    pub id: u64,
    /// Acting roles.
    pub cast: Vec<PersonTvCast>,
    /// Crew jobs.
    pub crew: Vec<PersonTvCrew>,
}

/// Response from `person/{person_id}/combined_credits`.
///
/// Entries mix movies and series; the typed accessors keep the entries whose
/// discriminator matches and convert them through [`MediaObject::convert`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonCombinedCredits {
    /// Person ID.
    pub id: u64,
    /// Acting roles.
    pub cast: Vec<MediaObject>,
    /// Crew jobs.
    pub crew: Vec<MediaObject>,
}

impl PersonCombinedCredits {
    /// Movie roles.
    ///
    /// # Errors
    ///
    /// Returns [`TmdbError::Decode`] if a movie entry has malformed fields.
    pub fn movie_cast(&self) -> Result<Vec<PersonMovieCast>, TmdbError> {
        convert_matching(&self.cast, MediaType::Movie)
    }

    /// Series roles.
    ///
    /// # Errors
    ///
    /// Returns [`TmdbError::Decode`] if a series entry has malformed fields.
    pub fn tv_cast(&self) -> Result<Vec<PersonTvCast>, TmdbError> {
        convert_matching(&self.cast, MediaType::Tv)
    }

    /// Movie crew jobs.
    ///
    /// # Errors
    ///
    /// Returns [`TmdbError::Decode`] if a movie entry has malformed fields.
    pub fn movie_crew(&self) -> Result<Vec<PersonMovieCrew>, TmdbError> {
        convert_matching(&self.crew, MediaType::Movie)
    }

    /// Series crew jobs.
    ///
    /// # Errors
    ///
    /// Returns [`TmdbError::Decode`] if a series entry has malformed fields.
    pub fn tv_crew(&self) -> Result<Vec<PersonTvCrew>, TmdbError> {
        convert_matching(&self.crew, MediaType::Tv)
    }
}

fn convert_matching<T>(items: &[MediaObject], target: MediaType) -> Result<Vec<T>, TmdbError>
where
    T: serde::de::DeserializeOwned,
{
    items
        .iter()
        .filter(|item| item.is(target))
        .map(|item| item.convert(target))
        .collect()
}
