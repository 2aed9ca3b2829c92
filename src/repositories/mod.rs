// src/repositories/mod.rs
//
// Repository layer
//
// RULES:
// - One transport call per operation, wrapped in the resource envelope
// - Mapping only, no presentation decisions
// - Failures that the envelope can describe are emitted, never returned
// - The local store is optional and only backs list pages (movies, trending)

pub mod movie_cache_repository;
pub mod movie_repository;
pub mod resource_fetch;
pub mod trending_repository;

mod movie_repository_tests;

pub use movie_cache_repository::{
    MovieCacheRepository, SqliteMovieCacheRepository, TrendingCacheRepository,
};
pub use movie_repository::{MovieRepository, RemoteMovieRepository};
pub use resource_fetch::{FetchOptions, LoadOutcome, ResourceSink};
pub use trending_repository::{RemoteTrendingRepository, TrendingRepository};
