//! Typed mirrors of TMDB JSON responses and request bodies.
//!
//! Every response struct tolerates missing fields (they take their zero value)
//! and ignores unknown ones.

mod account;
mod common;
mod company;
mod lookup;
mod movie;
mod person;
mod reference;
mod tv;

pub use account::{
    AccountDetails, Avatar, CreateListRequest, FavoriteRequest, Gravatar, GuestSession,
    ItemStatus, ListCreated, ListDetails, ListItemRequest, ListSummary, LoginRequest,
    RequestToken, Session, SessionDeleted, TmdbAvatar, WatchlistRequest,
};
pub use common::{
    AccountStates, AlternativeName, AlternativeNames, AlternativeTitle, AlternativeTitles,
    AuthorDetails, CastMember, Change, ChangeItem, ChangeSet, ChangedId, Credits, CrewMember,
    DateRange, DatedPaged, ExternalIds, Genre, ImageInfo, Images, Keyword, Keywords, Paged,
    ProductionCompany, ProductionCountry, Rated, RatingRequest, Review, SpokenLanguage,
    StatusResponse, Translation, TranslationData, Translations, Video, Videos, WatchProvider,
    WatchProviderCountry, WatchProviderResults,
};
pub use company::{
    CollectionDetails, CollectionSummary, CompanyDetails, NetworkDetails, ParentCompany,
};
pub use lookup::{CollectionResult, CompanySummary, FindResults, FindSeasonResult};
pub use movie::{
    CountryReleaseDates, MovieDetails, MovieResult, RatedMovie, ReleaseDate, ReleaseDates,
};
pub use person::{
    PersonCombinedCredits, PersonDetails, PersonMovieCast, PersonMovieCredits, PersonMovieCrew,
    PersonResult, PersonTvCast, PersonTvCredits, PersonTvCrew,
};
pub use reference::{
    ApiConfiguration, Certification, Certifications, Country, CreditDetails, CreditPerson,
    Department, GenreList, ImageConfiguration, Language, ProviderInfo, ReviewDetails, Timezone,
    WatchProviderList, WatchRegion, WatchRegions,
};
pub use tv::{
    AggregateCastMember, AggregateCredits, AggregateCrewMember, ContentRating, ContentRatings,
    Creator, EpisodeAccountState, EpisodeDetails, EpisodeGroup, EpisodeGroupDetails,
    EpisodeGroupSummary, EpisodeGroups, EpisodeSummary, GroupedEpisode, Job, NetworkSummary,
    RatedEpisode, RatedTv, Role, ScreenedEpisode, ScreenedTheatrically, SeasonAccountStates,
    SeasonDetails, SeasonSummary, TvDetails, TvResult,
};
