//! TV series, season and episode response types.

use serde::{Deserialize, Serialize};

use super::common::{
    AlternativeTitles, CastMember, Credits, CrewMember, ExternalIds, Genre, Images, Keywords,
    Paged, ProductionCompany, ProductionCountry, Rated, Review, SpokenLanguage, Translations,
    Videos, WatchProviderResults,
};

// --- Listings ---

/// A TV series as it appears in listings and search results.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TvResult {
    /// TMDB series ID.
    pub id: u64,
    /// Localized name.
    pub name: String,
    /// Original name.
    pub original_name: String,
    /// Original language (ISO 639-1).
    pub original_language: String,
    /// Origin countries (ISO 3166-1).
    pub origin_country: Vec<String>,
    /// First air date (YYYY-MM-DD or null).
    pub first_air_date: Option<String>,
    /// Overview text.
    pub overview: String,
    /// Popularity score.
    pub popularity: f64,
    /// Vote average.
    pub vote_average: f64,
    /// Vote count.
    pub vote_count: u32,
    /// Genre IDs.
    pub genre_ids: Vec<u32>,
    /// Adult flag.
    pub adult: bool,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Backdrop image path.
    pub backdrop_path: Option<String>,
}

/// A series rated by the user, with the rating.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatedTv {
    /// The series.
    #[serde(flatten)]
    pub tv: TvResult,
    /// Rating given by the user.
    #[serde(default)]
    pub rating: f64,
}

/// An episode rated by the user, with the rating.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RatedEpisode {
    /// The episode.
    #[serde(flatten)]
    pub episode: EpisodeSummary,
    /// Rating given by the user.
    #[serde(default)]
    pub rating: f64,
}

// --- Series details ---

/// Creator of a series.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Creator {
    /// Person ID.
    pub id: u64,
    /// Credit ID.
    pub credit_id: String,
    /// Name.
    pub name: String,
    /// 0 unknown, 1 female, 2 male, 3 non-binary.
    pub gender: u8,
    /// Profile image path.
    pub profile_path: Option<String>,
}

/// Network reference embedded in series payloads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkSummary {
    /// Network ID.
    pub id: u64,
    /// Name.
    pub name: String,
    /// Logo image path.
    pub logo_path: Option<String>,
    /// Country (ISO 3166-1).
    pub origin_country: String,
}

/// Season summary included in series details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonSummary {
    /// TMDB season ID.
    pub id: u64,
    /// Season number (0 = specials).
    pub season_number: u32,
    /// Season name.
    pub name: String,
    /// Overview text.
    pub overview: String,
    /// Number of episodes.
    pub episode_count: u32,
    /// Air date (YYYY-MM-DD or null).
    pub air_date: Option<String>,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Vote average.
    pub vote_average: f64,
}

/// Episode fields shared by listings, rated lists and series details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EpisodeSummary {
    /// TMDB episode ID.
    pub id: u64,
    /// Episode name.
    pub name: String,
    /// Overview text.
    pub overview: String,
    /// Season number.
    pub season_number: u32,
    /// Episode number within the season.
    pub episode_number: u32,
    /// `standard`, `finale`, `mid_season`.
    pub episode_type: String,
    /// Air date (YYYY-MM-DD or null).
    pub air_date: Option<String>,
    /// Production code.
    pub production_code: String,
    /// Runtime in minutes.
    pub runtime: Option<u32>,
    /// Series ID.
    pub show_id: u64,
    /// Still image path.
    pub still_path: Option<String>,
    /// Vote average.
    pub vote_average: f64,
    /// Vote count.
    pub vote_count: u32,
}

/// Response from `tv/{series_id}`.
///
/// The trailing optional fields are filled only when requested through
/// `append_to_response`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TvDetails {
    /// TMDB series ID.
    pub id: u64,
    /// Localized name.
    pub name: String,
    /// Original name.
    pub original_name: String,
    /// Original language (ISO 639-1).
    pub original_language: String,
    /// Overview text.
    pub overview: String,
    /// Tagline.
    pub tagline: Option<String>,
    /// `Returning Series`, `Ended`, ...
    pub status: String,
    /// `Scripted`, `Documentary`, ...
    #[serde(rename = "type")]
    pub kind: String,
    /// Adult flag.
    pub adult: bool,
    /// Still producing new episodes.
    pub in_production: bool,
    /// Official homepage.
    pub homepage: Option<String>,
    /// First air date (YYYY-MM-DD or null).
    pub first_air_date: Option<String>,
    /// Last air date (YYYY-MM-DD or null).
    pub last_air_date: Option<String>,
    /// Typical episode runtimes in minutes.
    pub episode_run_time: Vec<u32>,
    /// Total episodes.
    pub number_of_episodes: u32,
    /// Total seasons.
    pub number_of_seasons: u32,
    /// Languages (ISO 639-1).
    pub languages: Vec<String>,
    /// Origin countries (ISO 3166-1).
    pub origin_country: Vec<String>,
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
    /// Creators.
    pub created_by: Vec<Creator>,
    /// Genres.
    pub genres: Vec<Genre>,
    /// Most recently aired episode.
    pub last_episode_to_air: Option<EpisodeSummary>,
    /// Next scheduled episode.
    pub next_episode_to_air: Option<EpisodeSummary>,
    /// Broadcasting networks.
    pub networks: Vec<NetworkSummary>,
    /// Production companies.
    pub production_companies: Vec<ProductionCompany>,
    /// Production countries.
    pub production_countries: Vec<ProductionCountry>,
    /// Seasons.
    pub seasons: Vec<SeasonSummary>,
    /// Spoken languages.
    pub spoken_languages: Vec<SpokenLanguage>,

    /// Appended `aggregate_credits`.
    pub aggregate_credits: Option<AggregateCredits>,
    /// Appended `alternative_titles`.
    pub alternative_titles: Option<AlternativeTitles>,
    /// Appended `content_ratings`.
    pub content_ratings: Option<ContentRatings>,
    /// Appended `credits`.
    pub credits: Option<Credits>,
    /// Appended `external_ids`.
    pub external_ids: Option<ExternalIds>,
    /// Appended `images`.
    pub images: Option<Images>,
    /// Appended `keywords`.
    pub keywords: Option<Keywords>,
    /// Appended `translations`.
    pub translations: Option<Translations>,
    /// Appended `videos`.
    pub videos: Option<Videos>,
    /// Appended `recommendations`.
    pub recommendations: Option<Paged<TvResult>>,
    /// Appended `similar`.
    pub similar: Option<Paged<TvResult>>,
    /// Appended `reviews`.
    pub reviews: Option<Paged<Review>>,
    /// Appended `watch/providers`.
    #[serde(rename = "watch/providers")]
    pub watch_providers: Option<WatchProviderResults>,
}

impl TvDetails {
    /// Regular seasons, specials (season 0) excluded.
    pub fn regular_seasons(&self) -> impl Iterator<Item = &SeasonSummary> {
        self.seasons.iter().filter(|s| s.season_number > 0)
    }
}

// --- Aggregate credits ---

#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Role {
    pub credit_id: String,
    pub character: String,
    pub episode_count: u32,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Job {
    pub credit_id: String,
    pub job: String,
    pub episode_count: u32,
}

/// Cast entry summed over all episodes.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregateCastMember {
    pub adult: bool,
    pub gender: u8,
    pub id: u64,
    pub known_for_department: String,
    pub name: String,
    pub original_name: String,
    pub popularity: f64,
    pub profile_path: Option<String>,
    pub roles: Vec<Role>,
    pub total_episode_count: u32,
    pub order: u32,
}

/// Crew entry summed over all episodes.
#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregateCrewMember {
    pub adult: bool,
    pub gender: u8,
    pub id: u64,
    pub known_for_department: String,
    pub name: String,
    pub original_name: String,
    pub popularity: f64,
    pub profile_path: Option<String>,
    pub jobs: Vec<Job>,
    pub department: String,
    pub total_episode_count: u32,
}

/// Response from `.../aggregate_credits`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregateCredits {
    /// Owner ID.
    pub id: u64,
    /// Cast.
    pub cast: Vec<AggregateCastMember>,
    /// Crew.
    pub crew: Vec<AggregateCrewMember>,
}

// --- Series sub-resources ---

#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentRating {
    pub descriptors: Vec<String>,
    pub iso_3166_1: String,
    pub rating: String,
}

/// Response from `tv/{series_id}/content_ratings`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentRatings {
    /// Series ID.
    pub id: u64,
    /// Ratings per country.
    pub results: Vec<ContentRating>,
}

/// Episode group listed under a series.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EpisodeGroupSummary {
    /// Group ID.
    pub id: String,
    /// Name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Episodes across all groups.
    pub episode_count: u32,
    /// Number of groups.
    pub group_count: u32,
    /// 1 original air date, 2 absolute, 3 DVD, 4 digital, 5 story arc, 6 production, 7 TV.
    #[serde(rename = "type")]
    pub kind: u8,
    /// Network the ordering belongs to.
    pub network: Option<NetworkSummary>,
}

/// Response from `tv/{series_id}/episode_groups`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EpisodeGroups {
    /// Series ID.
    pub id: u64,
    /// Groups.
    pub results: Vec<EpisodeGroupSummary>,
}

/// Episode within an episode group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupedEpisode {
    /// The episode.
    #[serde(flatten)]
    pub episode: EpisodeSummary,
    /// Position within the group.
    #[serde(default)]
    pub order: u32,
}

/// One group of an episode group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EpisodeGroup {
    /// Group ID.
    pub id: String,
    /// Name.
    pub name: String,
    /// Position within the parent.
    pub order: u32,
    /// Locked flag.
    pub locked: bool,
    /// Episodes.
    pub episodes: Vec<GroupedEpisode>,
}

/// Response from `tv/episode_group/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EpisodeGroupDetails {
    /// Group ID.
    pub id: String,
    /// Name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Episodes across all groups.
    pub episode_count: u32,
    /// Number of groups.
    pub group_count: u32,
    /// Group ordering kind, see [`EpisodeGroupSummary::kind`].
    #[serde(rename = "type")]
    pub kind: u8,
    /// Network the ordering belongs to.
    pub network: Option<NetworkSummary>,
    /// Groups.
    pub groups: Vec<EpisodeGroup>,
}

#[allow(missing_docs)]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenedEpisode {
    pub id: u64,
    pub episode_number: u32,
    pub season_number: u32,
}

/// Response from `tv/{series_id}/screened_theatrically`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenedTheatrically {
    /// Series ID.
    pub id: u64,
    /// Episodes screened in theaters.
    pub results: Vec<ScreenedEpisode>,
}

// --- Seasons ---

/// Response from `tv/{series_id}/season/{season_number}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonDetails {
    /// Internal object ID.
    #[serde(rename = "_id")]
    pub object_id: String,
    /// TMDB season ID.
    pub id: u64,
    /// Season number.
    pub season_number: u32,
    /// Season name.
    pub name: String,
    /// Overview text.
    pub overview: String,
    /// Air date (YYYY-MM-DD or null).
    pub air_date: Option<String>,
    /// Poster image path.
    pub poster_path: Option<String>,
    /// Vote average.
    pub vote_average: f64,
    /// Episodes.
    pub episodes: Vec<EpisodeDetails>,

    /// Appended `aggregate_credits`.
    pub aggregate_credits: Option<AggregateCredits>,
    /// Appended `credits`.
    pub credits: Option<Credits>,
    /// Appended `external_ids`.
    pub external_ids: Option<ExternalIds>,
    /// Appended `images`.
    pub images: Option<Images>,
    /// Appended `translations`.
    pub translations: Option<Translations>,
    /// Appended `videos`.
    pub videos: Option<Videos>,
    /// Appended `watch/providers`.
    #[serde(rename = "watch/providers")]
    pub watch_providers: Option<WatchProviderResults>,
}

/// Rating state of one episode in a season.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EpisodeAccountState {
    /// Episode ID.
    pub id: u64,
    /// Episode number.
    pub episode_number: u32,
    /// Rating state.
    pub rated: Rated,
}

/// Response from `tv/{series_id}/season/{season_number}/account_states`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonAccountStates {
    /// Season ID.
    pub id: u64,
    /// Per-episode state.
    pub results: Vec<EpisodeAccountState>,
}

// --- Episodes ---

/// Response from `tv/{series_id}/season/{season_number}/episode/{episode_number}`.
///
/// Also used for the episode list embedded in season details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EpisodeDetails {
    /// TMDB episode ID.
    pub id: u64,
    /// Episode name.
    pub name: String,
    /// Overview text.
    pub overview: String,
    /// Season number.
    pub season_number: u32,
    /// Episode number within the season.
    pub episode_number: u32,
    /// `standard`, `finale`, `mid_season`.
    pub episode_type: String,
    /// Air date (YYYY-MM-DD or null).
    pub air_date: Option<String>,
    /// Production code.
    pub production_code: String,
    /// Runtime in minutes.
    pub runtime: Option<u32>,
    /// Series ID.
    pub show_id: u64,
    /// Still image path.
    pub still_path: Option<String>,
    /// Vote average.
    pub vote_average: f64,
    /// Vote count.
    pub vote_count: u32,
    /// Episode crew.
    pub crew: Vec<CrewMember>,
    /// Guest stars.
    pub guest_stars: Vec<CastMember>,

    /// Appended `credits`.
    pub credits: Option<Credits>,
    /// Appended `external_ids`.
    pub external_ids: Option<ExternalIds>,
    /// Appended `images`.
    pub images: Option<Images>,
    /// Appended `translations`.
    pub translations: Option<Translations>,
    /// Appended `videos`.
    pub videos: Option<Videos>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::indexing_slicing)]

    use serde_json::json;

    use super::*;

    #[test]
    fn test_tv_details_fixture() {
        // Arrange
        let body = include_str!("../../../../fixtures/tmdb/tv_details_1399.json");

        // Act
        let tv: TvDetails = serde_json::from_str(body).unwrap();

        // Assert
        assert_eq!(tv.id, 1399);
        assert_eq!(tv.name, "Game of Thrones");
        assert_eq!(tv.kind, "Scripted");
        assert_eq!(tv.number_of_seasons, 8);
        assert_eq!(tv.seasons.len(), 2);
        assert_eq!(tv.regular_seasons().count(), 1);
        assert_eq!(tv.networks[0].name, "HBO");
        let external_ids = tv.external_ids.unwrap();
        assert_eq!(external_ids.tvdb_id, Some(121_361));
    }

    #[test]
    fn test_season_details_with_episodes() {
        // Arrange
        let value = json!({
            "_id": "5256c89f19c2956ff6046d47",
            "id": 3624,
            "season_number": 1,
            "name": "Season 1",
            "air_date": "2011-04-17",
            "episodes": [
                {
                    "id": 63056,
                    "episode_number": 1,
                    "name": "Winter Is Coming",
                    "season_number": 1,
                    "show_id": 1399,
                    "runtime": 62,
                    "crew": [{"id": 44797, "job": "Director", "department": "Directing", "name": "Tim Van Patten"}],
                    "guest_stars": []
                }
            ]
        });

        // Act
        let season: SeasonDetails = serde_json::from_value(value).unwrap();

        // Assert
        assert_eq!(season.object_id, "5256c89f19c2956ff6046d47");
        assert_eq!(season.episodes[0].name, "Winter Is Coming");
        assert_eq!(season.episodes[0].crew[0].job, "Director");
        assert!(season.credits.is_none());
    }

    #[test]
    fn test_season_account_states() {
        // Arrange
        let value = json!({
            "id": 3624,
            "results": [
                {"id": 63056, "episode_number": 1, "rated": {"value": 9.0}},
                {"id": 63057, "episode_number": 2, "rated": false}
            ]
        });

        // Act
        let states: SeasonAccountStates = serde_json::from_value(value).unwrap();

        // Assert
        assert_eq!(states.results[0].rated.value(), Some(9.0));
        assert_eq!(states.results[1].rated.value(), None);
    }

    #[test]
    fn test_episode_group_details() {
        // Arrange
        let value = json!({
            "id": "5acf93e60e0a26346d0000ce",
            "name": "Production Order",
            "type": 6,
            "groups": [
                {"id": "g1", "name": "Season 1", "order": 1, "episodes": [
                    {"id": 63056, "name": "Winter Is Coming", "order": 0, "season_number": 1, "episode_number": 1}
                ]}
            ]
        });

        // Act
        let group: EpisodeGroupDetails = serde_json::from_value(value).unwrap();

        // Assert
        assert_eq!(group.kind, 6);
        assert_eq!(group.groups[0].episodes[0].episode.id, 63056);
        assert_eq!(group.groups[0].episodes[0].order, 0);
    }
}
