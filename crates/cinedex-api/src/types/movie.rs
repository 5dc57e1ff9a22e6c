//! Movie response types.

use serde::{Deserialize, Serialize};

use super::common::{
    AlternativeTitles, Credits, ExternalIds, Genre, Images, Keywords, Paged, ProductionCompany,
    ProductionCountry, Review, SpokenLanguage, Translations, Videos, WatchProviderResults,
};
use super::company::CollectionSummary;

// --- Listings ---

/// A movie as it appears in listings and search results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovieResult {
    /// TMDB movie ID.
    pub id: u64,
    /// Localized title.
    pub title: String,
    /// Original title.
    pub original_title: String,
    /// Original language (ISO 639-1).
    pub original_language: String,
    /// Overview text.
    pub overview: String,
    /// Release date (YYYY-MM-DD or null).
    pub release_date: Option<String>,
    /// Genre IDs.
    pub genre_ids: Vec<u32>,
    /// Adult flag.
    pub adult: bool,
    /// Video-only release flag.
    pub video: bool,
    /// Popularity score.
    pub popularity: f64,
    /// Vote average.
    pub vote_average: f64,
    /// Vote count.
    pub vote_count: u32,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
}

/// A movie rated by the user, with the rating.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatedMovie {
    /// The movie.
    #[serde(flatten)]
    pub movie: MovieResult,
    /// Rating given by the user.
    #[serde(default)]
    pub rating: f64,
}

// --- Details ---

/// Response from `movie/{movie_id}`.
///
/// The trailing optional fields are filled only when requested through
/// `append_to_response`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovieDetails {
    /// TMDB movie ID.
    pub id: u64,
    /// IMDb ID (`tt0137523`).
    pub imdb_id: Option<String>,
    /// Localized title.
    pub title: String,
    /// Original title.
    pub original_title: String,
    /// Original language (ISO 639-1).
    pub original_language: String,
    /// Overview text.
    pub overview: String,
    /// Tagline.
    pub tagline: Option<String>,
    /// `Released`, `Post Production`, ...
    pub status: String,
    /// Release date (YYYY-MM-DD or null).
    pub release_date: Option<String>,
    /// Runtime in minutes.
    pub runtime: Option<u32>,
    /// Budget in USD.
    pub budget: u64,
    /// Revenue in USD.
    pub revenue: u64,
    /// Official homepage.
    pub homepage: Option<String>,
    /// Adult flag.
    pub adult: bool,
    /// Video-only release flag.
    pub video: bool,
    /// Popularity score.
    pub popularity: f64,
    /// Vote average.
    pub vote_average: f64,
    /// Vote count.
    pub vote_count: u32,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
    /// Collection the movie is part of.
    pub belongs_to_collection: Option<CollectionSummary>,
    /// Genres.
    pub genres: Vec<Genre>,
    /// Production companies.
    pub production_companies: Vec<ProductionCompany>,
    /// Production countries.
    pub production_countries: Vec<ProductionCountry>,
    /// Spoken languages.
    pub spoken_languages: Vec<SpokenLanguage>,

    /// Appended `alternative_titles`.
    pub alternative_titles: Option<AlternativeTitles>,
    /// Appended `credits`.
    pub credits: Option<Credits>,
    /// Appended `external_ids`.
    pub external_ids: Option<ExternalIds>,
    /// Appended `images`.
    pub images: Option<Images>,
    /// Appended `keywords`.
    pub keywords: Option<Keywords>,
    /// Appended `release_dates`.
    pub release_dates: Option<ReleaseDates>,
    /// Appended `translations`.
    pub translations: Option<Translations>,
    /// Appended `videos`.
    pub videos: Option<Videos>,
    /// Appended `recommendations`.
    pub recommendations: Option<Paged<MovieResult>>,
    /// Appended `similar`.
    pub similar: Option<Paged<MovieResult>>,
    /// Appended `reviews`.
    pub reviews: Option<Paged<Review>>,
    /// Appended `watch/providers`.
    #[serde(rename = "watch/providers")]
    pub watch_providers: Option<WatchProviderResults>,
}

impl MovieDetails {
    /// Release year parsed from `release_date`.
    #[must_use]
    pub fn release_year(&self) -> Option<i32> {
        self.release_date
            .as_deref()
            .and_then(|d| d.get(..4))
            .and_then(|y| y.parse().ok())
    }
}

// --- Release dates ---

/// One release of a movie in a country.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseDate {
    /// Age certification (`R`, `PG-13`, ...).
    pub certification: String,
    /// Content descriptors.
    pub descriptors: Vec<String>,
    /// Language of the release.
    pub iso_639_1: String,
    /// Free-text note.
    pub note: String,
    /// Release timestamp.
    pub release_date: String,
    /// 1 premiere, 2 limited, 3 theatrical, 4 digital, 5 physical, 6 TV.
    #[serde(rename = "type")]
    pub kind: u8,
}

/// Releases in one country.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountryReleaseDates {
    /// Country (ISO 3166-1).
    pub iso_3166_1: String,
    /// Releases.
    pub release_dates: Vec<ReleaseDate>,
}

/// Response from `movie/{movie_id}/release_dates`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseDates {
    /// Movie ID.
    pub id: u64,
    /// Releases per country.
    pub results: Vec<CountryReleaseDates>,
}

impl ReleaseDates {
    /// Releases in a country.
    #[must_use]
    pub fn for_country(&self, iso_3166_1: &str) -> Option<&CountryReleaseDates> {
        self.results.iter().find(|r| r.iso_3166_1 == iso_3166_1)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use super::*;

    #[test]
    fn test_details_with_appended_credits() {
        // Arrange
        let body = include_str!("../../../../fixtures/tmdb/movie_details_550.json");

        // Act
        let movie: MovieDetails = serde_json::from_str(body).unwrap();

        // Assert
        assert_eq!(movie.id, 550);
        assert_eq!(movie.title, "Fight Club");
        assert_eq!(movie.imdb_id.as_deref(), Some("tt0137523"));
        assert_eq!(movie.runtime, Some(139));
        assert_eq!(movie.release_year(), Some(1999));
        assert_eq!(movie.genres[0].name, "Drama");
        let credits = movie.credits.unwrap();
        assert_eq!(credits.cast[0].name, "Edward Norton");
        assert_eq!(
            credits.crew_with_job("Director").next().unwrap().name,
            "David Fincher"
        );
        let images = movie.images.unwrap();
        assert_eq!(images.posters.len(), 1);
        assert!(movie.videos.is_none());
    }

    #[test]
    fn test_rated_movie_flattens() {
        // Arrange
        let value = serde_json::json!({"id": 550, "title": "Fight Club", "rating": 9.0});

        // Act
        let rated: RatedMovie = serde_json::from_value(value).unwrap();

        // Assert
        assert_eq!(rated.movie.id, 550);
        assert!((rated.rating - 9.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_release_dates_for_country() {
        // Arrange
        let value = serde_json::json!({
            "id": 550,
            "results": [
                {"iso_3166_1": "US", "release_dates": [
                    {"certification": "R", "release_date": "1999-10-15T00:00:00.000Z", "type": 3}
                ]}
            ]
        });

        // Act
        let dates: ReleaseDates = serde_json::from_value(value).unwrap();

        // Assert
        let us = dates.for_country("US").unwrap();
        assert_eq!(us.release_dates[0].certification, "R");
        assert_eq!(us.release_dates[0].kind, 3);
        assert!(dates.for_country("JP").is_none());
    }
}
