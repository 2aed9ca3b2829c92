// src/application/state.rs
//
// Composition root
//
// Transport -> Repositories -> Use Cases, wired explicitly. Nothing here is
// global; tests build the same graph over a mocked transport.

use log::info;
use std::sync::Arc;

use crate::config::CineyConfig;
use crate::db::{
    create_connection_pool, get_connection, initialize_database, verify_database_integrity,
};
use crate::error::AppResult;
use crate::integrations::tmdb::{CatalogTransport, TmdbClient};
use crate::repositories::{
    FetchOptions, MovieRepository, RemoteMovieRepository,
    RemoteTrendingRepository, SqliteMovieCacheRepository, TrendingRepository,
};
use crate::use_cases::{
    GetMovieCreditsUseCase, GetMovieImagesUseCase, GetMovieReviewsUseCase, GetMovieUseCase,
    GetMovieVideosUseCase, GetMoviesUseCase, GetRecommendedMoviesUseCase,
    GetSimilarMoviesUseCase, GetTrendingUseCase,
};

/// Every use case the view models need, shared by reference count.
#[derive(Clone)]
pub struct MovieUseCases {
    pub get_movies: Arc<GetMoviesUseCase>,
    pub get_movie: Arc<GetMovieUseCase>,
    pub get_similar_movies: Arc<GetSimilarMoviesUseCase>,
    pub get_recommended_movies: Arc<GetRecommendedMoviesUseCase>,
    pub get_movie_videos: Arc<GetMovieVideosUseCase>,
    pub get_movie_reviews: Arc<GetMovieReviewsUseCase>,
    pub get_movie_credits: Arc<GetMovieCreditsUseCase>,
    pub get_movie_images: Arc<GetMovieImagesUseCase>,
    pub get_trending: Arc<GetTrendingUseCase>,
}

impl MovieUseCases {
    pub fn new(
        movie_repo: Arc<dyn MovieRepository>,
        trending_repo: Arc<dyn TrendingRepository>,
    ) -> Self {
        Self {
            get_movies: Arc::new(GetMoviesUseCase::new(movie_repo.clone())),
            get_movie: Arc::new(GetMovieUseCase::new(movie_repo.clone())),
            get_similar_movies: Arc::new(GetSimilarMoviesUseCase::new(movie_repo.clone())),
            get_recommended_movies: Arc::new(GetRecommendedMoviesUseCase::new(movie_repo.clone())),
            get_movie_videos: Arc::new(GetMovieVideosUseCase::new(movie_repo.clone())),
            get_movie_reviews: Arc::new(GetMovieReviewsUseCase::new(movie_repo.clone())),
            get_movie_credits: Arc::new(GetMovieCreditsUseCase::new(movie_repo.clone())),
            get_movie_images: Arc::new(GetMovieImagesUseCase::new(movie_repo)),
            get_trending: Arc::new(GetTrendingUseCase::new(trending_repo)),
        }
    }
}

pub struct AppState {
    pub config: CineyConfig,
    pub use_cases: MovieUseCases,
}

impl AppState {
    /// Build the whole graph over the real catalog client.
    pub fn build(config: CineyConfig) -> AppResult<Self> {
        let client: Arc<dyn CatalogTransport> = Arc::new(TmdbClient::new(&config)?);
        Self::with_transport(config, client)
    }

    /// Build the graph over any transport.
    pub fn with_transport(
        config: CineyConfig,
        transport: Arc<dyn CatalogTransport>,
    ) -> AppResult<Self> {
        let options = FetchOptions::from(&config);

        let cache: Option<Arc<SqliteMovieCacheRepository>> = match &config.database_path {
            Some(path) => {
                let pool = create_connection_pool(path)?;
                let conn = get_connection(&pool)?;
                initialize_database(&conn)?;
                verify_database_integrity(&conn)?;
                drop(conn);
                info!("Movie cache at {}", path.display());
                Some(Arc::new(SqliteMovieCacheRepository::new(Arc::new(pool))))
            }
            None => None,
        };

        let mut movie_repo = RemoteMovieRepository::new(transport.clone(), options);
        let mut trending_repo = RemoteTrendingRepository::new(transport, options);
        if let Some(cache) = cache {
            movie_repo = movie_repo.with_cache(cache.clone(), config.offline_fallback);
            trending_repo = trending_repo.with_cache(cache, config.offline_fallback);
        }
        let movie_repo: Arc<dyn MovieRepository> = Arc::new(movie_repo);
        let trending_repo: Arc<dyn TrendingRepository> = Arc::new(trending_repo);

        Ok(Self {
            config,
            use_cases: MovieUseCases::new(movie_repo, trending_repo),
        })
    }
}
