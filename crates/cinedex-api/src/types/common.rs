//! Response shapes shared by several resources.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

// --- Pagination ---

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Paged<T> {
    /// Current page number (1-based).
    pub page: u32,
    /// Items on this page.
    pub results: Vec<T>,
    /// Total number of pages.
    pub total_pages: u32,
    /// Total number of items.
    pub total_results: u32,
}

impl<T> Default for Paged<T> {
    fn default() -> Self {
        Self {
            page: 0,
            results: Vec::new(),
            total_pages: 0,
            total_results: 0,
        }
    }
}

impl<T> Paged<T> {
    /// Whether another page follows this one.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Date window of `now_playing` / `upcoming` listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateRange {
    /// First date (YYYY-MM-DD).
    pub minimum: String,
    /// Last date (YYYY-MM-DD).
    pub maximum: String,
}

/// A page carrying the date window it covers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatedPaged<T> {
    /// Date window.
    pub dates: DateRange,
    /// Current page number (1-based).
    pub page: u32,
    /// Items on this page.
    pub results: Vec<T>,
    /// Total number of pages.
    pub total_pages: u32,
    /// Total number of items.
    pub total_results: u32,
}

impl<T> Default for DatedPaged<T> {
    fn default() -> Self {
        Self {
            dates: DateRange::default(),
            page: 0,
            results: Vec::new(),
            total_pages: 0,
            total_results: 0,
        }
    }
}

// --- Small reference entities ---

/// Genre entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Genre {
    /// TMDB genre ID.
    pub id: u32,
    /// Localized name.
    pub name: String,
}

/// Keyword entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Keyword {
    /// TMDB keyword ID.
    pub id: u64,
    /// Keyword text.
    pub name: String,
}

/// Keywords attached to a movie or series.
///
/// Movies return them under `keywords`, series under `results`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Keywords {
    /// Owner ID.
    pub id: u64,
    /// Movie keywords.
    pub keywords: Vec<Keyword>,
    /// Series keywords.
    pub results: Vec<Keyword>,
}

impl Keywords {
    /// Keywords regardless of which field the endpoint used.
    pub fn iter(&self) -> impl Iterator<Item = &Keyword> {
        self.keywords.iter().chain(self.results.iter())
    }
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductionCompany {
    pub id: u64,
    pub logo_path: Option<String>,
    pub name: String,
    pub origin_country: String,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductionCountry {
    pub iso_3166_1: String,
    pub name: String,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpokenLanguage {
    pub english_name: String,
    pub iso_639_1: String,
    pub name: String,
}

// --- Media assets ---

/// A single image (poster, backdrop, logo, profile or still).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageInfo {
    /// Width divided by height.
    pub aspect_ratio: f64,
    /// Path to append to an image base URL and size.
    pub file_path: String,
    /// Height in pixels.
    pub height: u32,
    /// Width in pixels.
    pub width: u32,
    /// Language of text in the image, if any.
    pub iso_639_1: Option<String>,
    /// Vote average.
    pub vote_average: f64,
    /// Vote count.
    pub vote_count: u32,
}

/// Image sets of an entity. Which lists are filled depends on the endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Images {
    /// Owner ID.
    pub id: u64,
    /// Backdrop images.
    pub backdrops: Vec<ImageInfo>,
    /// Logo images.
    pub logos: Vec<ImageInfo>,
    /// Poster images.
    pub posters: Vec<ImageInfo>,
    /// Profile images (people).
    pub profiles: Vec<ImageInfo>,
    /// Still images (episodes).
    pub stills: Vec<ImageInfo>,
}

/// A video hosted on an external site.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Video {
    /// Video ID.
    pub id: String,
    /// Language.
    pub iso_639_1: String,
    /// Region.
    pub iso_3166_1: String,
    /// Key on the hosting site.
    pub key: String,
    /// Title.
    pub name: String,
    /// Hosting site (`YouTube`, `Vimeo`).
    pub site: String,
    /// Vertical resolution.
    pub size: u32,
    /// `Trailer`, `Teaser`, `Clip`, ...
    #[serde(rename = "type")]
    pub kind: String,
    /// Whether the video is official.
    pub official: bool,
    /// Publication timestamp.
    pub published_at: String,
}

/// Videos of an entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Videos {
    /// Owner ID.
    pub id: u64,
    /// Video list.
    pub results: Vec<Video>,
}

// --- Credits ---

/// A cast entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CastMember {
    /// Adult flag.
    pub adult: bool,
    /// 0 unknown, 1 female, 2 male, 3 non-binary.
    pub gender: u8,
    /// Person ID.
    pub id: u64,
    /// Main department of the person.
    pub known_for_department: String,
    /// Name.
    pub name: String,
    /// Original name.
    pub original_name: String,
    /// Popularity score.
    pub popularity: f64,
    /// Profile image path.
    pub profile_path: Option<String>,
    /// Cast ID (movies only).
    pub cast_id: Option<u64>,
    /// Character played.
    pub character: String,
    /// Credit ID.
    pub credit_id: String,
    /// Billing order.
    pub order: u32,
}

/// A crew entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrewMember {
    /// Adult flag.
    pub adult: bool,
    /// 0 unknown, 1 female, 2 male, 3 non-binary.
    pub gender: u8,
    /// Person ID.
    pub id: u64,
    /// Main department of the person.
    pub known_for_department: String,
    /// Name.
    pub name: String,
    /// Original name.
    pub original_name: String,
    /// Popularity score.
    pub popularity: f64,
    /// Profile image path.
    pub profile_path: Option<String>,
    /// Credit ID.
    pub credit_id: String,
    /// Department of this credit.
    pub department: String,
    /// Job title.
    pub job: String,
}

/// Cast and crew of a movie, series, season or episode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Credits {
    /// Owner ID.
    pub id: u64,
    /// Cast.
    pub cast: Vec<CastMember>,
    /// Crew.
    pub crew: Vec<CrewMember>,
    /// Guest stars (episodes only).
    pub guest_stars: Vec<CastMember>,
}

impl Credits {
    /// Crew members with the given job (`Director`, `Screenplay`, ...).
    pub fn crew_with_job<'a>(&'a self, job: &'a str) -> impl Iterator<Item = &'a CrewMember> {
        self.crew.iter().filter(move |c| c.job == job)
    }
}

// --- External ids, translations, titles ---

/// Identifiers on other sites. Which fields are present depends on the entity.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExternalIds {
    /// Owner ID.
    pub id: u64,
    pub imdb_id: Option<String>,
    pub wikidata_id: Option<String>,
    pub facebook_id: Option<String>,
    pub instagram_id: Option<String>,
    pub twitter_id: Option<String>,
    pub tiktok_id: Option<String>,
    pub youtube_id: Option<String>,
    pub freebase_mid: Option<String>,
    pub freebase_id: Option<String>,
    pub tvdb_id: Option<u64>,
    pub tvrage_id: Option<u64>,
}

/// Translated fields. Only those relevant to the entity are present.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationData {
    pub title: Option<String>,
    pub name: Option<String>,
    pub overview: Option<String>,
    pub tagline: Option<String>,
    pub homepage: Option<String>,
    pub biography: Option<String>,
    pub runtime: Option<u32>,
}

/// One translation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Translation {
    /// Region.
    pub iso_3166_1: String,
    /// Language.
    pub iso_639_1: String,
    /// Native language name.
    pub name: String,
    /// English language name.
    pub english_name: String,
    /// Translated fields.
    pub data: TranslationData,
}

/// Available translations of an entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Translations {
    /// Owner ID.
    pub id: u64,
    /// Translations.
    pub translations: Vec<Translation>,
}

impl Translations {
    /// Translation for a language, optionally narrowed to a region.
    #[must_use]
    pub fn find(&self, iso_639_1: &str, iso_3166_1: Option<&str>) -> Option<&Translation> {
        self.translations.iter().find(|t| {
            t.iso_639_1 == iso_639_1 && iso_3166_1.is_none_or(|region| t.iso_3166_1 == region)
        })
    }
}

/// Title used in some country.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlternativeTitle {
    /// Country.
    pub iso_3166_1: String,
    /// Title.
    pub title: String,
    /// Title kind, free text.
    #[serde(rename = "type")]
    pub kind: String,
}

/// Alternative titles. Movies use `titles`, series use `results`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlternativeTitles {
    /// Owner ID.
    pub id: u64,
    /// Movie titles.
    pub titles: Vec<AlternativeTitle>,
    /// Series titles.
    pub results: Vec<AlternativeTitle>,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlternativeName {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// Alternative names of a company or network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlternativeNames {
    /// Owner ID.
    pub id: u64,
    /// Names.
    pub results: Vec<AlternativeName>,
}

// --- Reviews ---

/// Reviewer profile.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorDetails {
    pub name: String,
    pub username: String,
    pub avatar_path: Option<String>,
    /// Rating given by the author, if any.
    pub rating: Option<f64>,
}

/// A user review as found in listings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Review {
    /// Review ID.
    pub id: String,
    /// Author name.
    pub author: String,
    /// Author profile.
    pub author_details: AuthorDetails,
    /// Review text.
    pub content: String,
    /// Creation timestamp.
    pub created_at: String,
    /// Update timestamp.
    pub updated_at: String,
    /// Review URL.
    pub url: String,
}

// --- Watch providers ---

/// A streaming/rental provider.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchProvider {
    pub logo_path: Option<String>,
    pub provider_id: u64,
    pub provider_name: String,
    pub display_priority: u32,
}

/// Providers for one country, grouped by offer.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchProviderCountry {
    /// Link to the TMDB watch page.
    pub link: String,
    pub flatrate: Vec<WatchProvider>,
    pub rent: Vec<WatchProvider>,
    pub buy: Vec<WatchProvider>,
    pub free: Vec<WatchProvider>,
    pub ads: Vec<WatchProvider>,
}

/// Where an entity can be watched, keyed by ISO 3166-1 country.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatchProviderResults {
    /// Owner ID.
    pub id: u64,
    /// Providers per country.
    pub results: BTreeMap<String, WatchProviderCountry>,
}

// --- User state ---

/// Rating state: `false` when unrated, `{"value": x}` otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Rated {
    /// Rated with a value.
    Value {
        /// Rating (0.5-10.0).
        value: f64,
    },
    /// Not rated.
    Unrated(bool),
}

impl Default for Rated {
    fn default() -> Self {
        Self::Unrated(false)
    }
}

impl Rated {
    /// Rating value, if rated.
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        match self {
            Self::Value { value } => Some(*value),
            Self::Unrated(_) => None,
        }
    }
}

/// Favorite / watchlist / rating state of an entity for a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountStates {
    /// Entity ID.
    pub id: u64,
    /// In favorites.
    pub favorite: bool,
    /// Rating state.
    pub rated: Rated,
    /// In watchlist.
    pub watchlist: bool,
}

/// Generic acknowledgement returned by mutating endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusResponse {
    /// Present on most responses.
    pub success: Option<bool>,
    /// TMDB status code (1 created, 12 updated, 13 deleted, ...).
    pub status_code: i32,
    /// Human-readable status.
    pub status_message: String,
}

/// Rating request body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatingRequest {
    /// Rating (0.5-10.0, step 0.5).
    pub value: f64,
}

// --- Changes ---

/// A single recorded change.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangeItem {
    pub id: String,
    /// `added`, `updated`, `deleted`, ...
    pub action: String,
    pub time: String,
    pub iso_639_1: Option<String>,
    pub iso_3166_1: Option<String>,
    pub value: Option<Value>,
    pub original_value: Option<Value>,
}

/// Changes to one field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Change {
    /// Changed field.
    pub key: String,
    /// Recorded changes.
    pub items: Vec<ChangeItem>,
}

/// Change history of one entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangeSet {
    /// Changes grouped by field.
    pub changes: Vec<Change>,
}

/// Entity id listed in a change feed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangedId {
    /// Entity ID.
    pub id: u64,
    /// Adult flag, when known.
    pub adult: Option<bool>,
}

/// Accepts an id sent either as a JSON number or a string.
pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}
