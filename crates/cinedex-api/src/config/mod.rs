//! File-based client configuration.
//!
//! Reads a TOML file holding credentials and transport settings, overlays
//! `TMDB_*` environment variables and turns the result into a
//! [`TmdbClientBuilder`](crate::TmdbClientBuilder).

#[allow(clippy::module_inception)]
mod config;
mod paths;

#[allow(clippy::module_name_repetitions)]
pub use config::{RetryConfig, TmdbConfig};
pub use paths::resolve_config_path;
