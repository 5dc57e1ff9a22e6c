//! Configuration, certifications, genres, credits, reviews and watch provider catalogs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{AuthorDetails, Genre};
use crate::error::TmdbError;
use crate::media::{Media, MediaObject};

// --- Configuration ---

/// Image base URLs and available sizes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfiguration {
    /// Plain HTTP base URL.
    pub base_url: String,
    /// HTTPS base URL.
    pub secure_base_url: String,
    /// Backdrop sizes (`w300`, ..., `original`).
    pub backdrop_sizes: Vec<String>,
    /// Logo sizes.
    pub logo_sizes: Vec<String>,
    /// Poster sizes.
    pub poster_sizes: Vec<String>,
    /// Profile sizes.
    pub profile_sizes: Vec<String>,
    /// Still sizes.
    pub still_sizes: Vec<String>,
}

impl ImageConfiguration {
    /// Full HTTPS URL of an image.
    ///
    /// ```
    /// use cinedex_api::ImageConfiguration;
    ///
    /// let config = ImageConfiguration {
    ///     secure_base_url: String::from("https://image.tmdb.org/t/p/"),
    ///     ..ImageConfiguration::default()
    /// };
    /// assert_eq!(
    ///     config.url("w500", "/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg"),
    ///     "https://image.tmdb.org/t/p/w500/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg"
    /// );
    /// ```
    #[must_use]
    pub fn url(&self, size: &str, file_path: &str) -> String {
        format!(
            "{}/{}/{}",
            self.secure_base_url.trim_end_matches('/'),
            size.trim_matches('/'),
            file_path.trim_start_matches('/')
        )
    }
}

/// Response from `configuration`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfiguration {
    /// Image settings.
    pub images: ImageConfiguration,
    /// Keys that appear in change feeds.
    pub change_keys: Vec<String>,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Country {
    pub iso_3166_1: String,
    pub english_name: String,
    pub native_name: String,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Department {
    pub department: String,
    pub jobs: Vec<String>,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Language {
    pub iso_639_1: String,
    pub english_name: String,
    pub name: String,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timezone {
    pub iso_3166_1: String,
    pub zones: Vec<String>,
}

// --- Certifications and genres ---

/// One age certification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    /// Label (`PG-13`).
    pub certification: String,
    /// What the label means.
    pub meaning: String,
    /// Sort order.
    pub order: u32,
}

/// Response from `certification/{movie,tv}/list`, keyed by country.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certifications {
    /// Certifications per country.
    pub certifications: BTreeMap<String, Vec<Certification>>,
}

/// Response from `genre/{movie,tv}/list`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenreList {
    /// Genres.
    pub genres: Vec<Genre>,
}

impl GenreList {
    /// Genre name for an ID.
    #[must_use]
    pub fn name_of(&self, id: u32) -> Option<&str> {
        self.genres
            .iter()
            .find(|g| g.id == id)
            .map(|g| g.name.as_str())
    }
}

// --- Credits ---

/// Person side of a credit.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreditPerson {
    pub id: u64,
    pub name: String,
    pub original_name: String,
    pub adult: bool,
    pub gender: u8,
    pub known_for_department: String,
    pub popularity: f64,
    pub profile_path: Option<String>,
}

/// Response from `credit/{credit_id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CreditDetails {
    /// Credit ID.
    pub id: String,
    /// `cast` or `crew`.
    pub credit_type: String,
    /// Department.
    pub department: String,
    /// Job title.
    pub job: String,
    /// `movie` or `tv`.
    pub media_type: String,
    /// The credited work.
    pub media: MediaObject,
    /// The credited person.
    pub person: CreditPerson,
}

impl CreditDetails {
    /// Decodes the credited work.
    ///
    /// The embedded object may omit `media_type`; the top-level value is used
    /// as its discriminator in that case.
    ///
    /// # Errors
    ///
    /// Fails when no discriminator is available or the fields do not fit.
    pub fn decode_media(&self) -> Result<Media, TmdbError> {
        if self.media.media_type().is_some() || self.media_type.is_empty() {
            return self.media.decode();
        }
        let mut map = self.media.as_map().clone();
        map.insert(
            String::from("media_type"),
            Value::String(self.media_type.clone()),
        );
        MediaObject::new(map).decode()
    }
}

// --- Reviews ---

/// Response from `review/{review_id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewDetails {
    /// Review ID.
    pub id: String,
    /// Author name.
    pub author: String,
    /// Author profile.
    pub author_details: AuthorDetails,
    /// Review text.
    pub content: String,
    /// Language.
    pub iso_639_1: String,
    /// Reviewed entity ID.
    pub media_id: u64,
    /// Reviewed entity title.
    pub media_title: String,
    /// `movie` or `tv`.
    pub media_type: String,
    /// Creation timestamp.
    pub created_at: String,
    /// Update timestamp.
    pub updated_at: String,
    /// Review URL.
    pub url: String,
}

// --- Watch provider catalogs ---

#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchRegion {
    pub iso_3166_1: String,
    pub english_name: String,
    pub native_name: String,
}

/// Response from `watch/providers/regions`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchRegions {
    /// Regions.
    pub results: Vec<WatchRegion>,
}

/// Provider entry in the provider catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderInfo {
    /// Provider ID.
    pub provider_id: u64,
    /// Provider name.
    pub provider_name: String,
    /// Logo image path.
    pub logo_path: Option<String>,
    /// Default display priority.
    pub display_priority: u32,
    /// Display priority per country.
    pub display_priorities: BTreeMap<String, u32>,
}

/// Response from `watch/providers/{movie,tv}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchProviderList {
    /// Providers.
    pub results: Vec<ProviderInfo>,
}
