// src/lib.rs
// Ciney - movie catalog client core
//
// Architecture:
// - Layered: Transport -> Repositories -> Use Cases -> View models
// - Every fetch is a short envelope sequence: Loading, then one terminal value
// - Explicit: wiring happens in one composition root, no global registry
// - Local store is optional and backs movie-list and trending pages

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod integrations;

// ============================================================================
// DATA AND USE CASES
// ============================================================================

pub mod repositories;
pub mod use_cases;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API
// ============================================================================

pub use config::{CineyConfig, EmptyBodyPolicy};

pub use domain::{
    Cast, CreditsResult, Crew, Image, ImagesResult, MediaType, Movie, MovieDetail, MoviesResult,
    Resource, Review, TimeWindow, Trending, Video,
};

pub use error::{AppError, AppResult, TransportError};

pub use integrations::{CatalogRequest, CatalogTransport, Endpoint, TmdbClient};

pub use repositories::{MovieRepository, ResourceSink, TrendingRepository};

pub use use_cases::UseCase;

pub use application::{AppState, HomeViewModel, MovieDetailViewModel, MovieUseCases, ViewState};
