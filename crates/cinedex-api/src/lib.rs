//! Typed async client for The Movie Database (TMDB) API v3.
//!
//! [`TmdbClient`] owns the HTTP transport; endpoint families are reached
//! through facades such as [`TmdbClient::movies`] or [`TmdbClient::search`].
//! Responses decode into the structs in [`types`]; payloads that can be a
//! movie, a series or a person decode as [`MediaObject`] and are converted
//! with a discriminator check.
//!
//! ```no_run
//! # async fn run() -> anyhow::Result<()> {
//! use cinedex_api::{SearchOptions, TmdbClient};
//!
//! let client = TmdbClient::builder().api_key("key").auto_retry().build()?;
//! let page = client.search().multi(&SearchOptions::new("fight club")).await?;
//! for entry in &page.results {
//!     if let Ok(movie) = entry.to_movie() {
//!         println!("{} ({:?})", movie.title, movie.release_date);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod error;
mod media;
mod options;
mod retry;

/// Endpoint facades and their option bags.
pub mod resources;

/// Response and request body types.
pub mod types;

pub use client::{Credentials, DEFAULT_BASE_URL, TmdbClient, TmdbClientBuilder};
pub use config::{RetryConfig, TmdbConfig, resolve_config_path};
pub use error::{TmdbError, flatten_error_value};
pub use media::{Media, MediaObject, MediaType};
pub use options::{
    ChangesOptions, DetailsOptions, ImageOptions, LanguageOptions, PageOptions,
    RegionPageOptions, SessionOptions, VideoOptions,
};
pub use resources::*;
pub use retry::RetryPolicy;
pub use types::*;
