// src/repositories/movie_repository.rs
//
// Movie catalog repository
//
// Every operation runs the shared fetch protocol (see `resource_fetch`) with
// its own request and mapper. Only `get_movies` touches the local store, and
// only when one is configured.

use async_trait::async_trait;
use log::{info, warn};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use super::movie_cache_repository::MovieCacheRepository;
use super::resource_fetch::{self, FetchOptions, LoadOutcome, ResourceSink};
use crate::domain::{CreditsResult, ImagesResult, Movie, MovieDetail, Review, Video};
use crate::error::AppResult;
use crate::integrations::tmdb::{mapper, CatalogRequest, CatalogTransport, Endpoint};

#[async_trait]
pub trait MovieRepository: Send + Sync {
    async fn get_movies(
        &self,
        category: &str,
        page: u32,
        token: &CancellationToken,
        sink: &mut dyn ResourceSink<Vec<Movie>>,
    ) -> AppResult<()>;

    async fn get_movie_detail(
        &self,
        movie_id: i64,
        token: &CancellationToken,
        sink: &mut dyn ResourceSink<MovieDetail>,
    ) -> AppResult<()>;

    async fn get_similar_movies(
        &self,
        movie_id: i64,
        page: u32,
        token: &CancellationToken,
        sink: &mut dyn ResourceSink<Vec<Movie>>,
    ) -> AppResult<()>;

    async fn get_recommended_movies(
        &self,
        movie_id: i64,
        page: u32,
        token: &CancellationToken,
        sink: &mut dyn ResourceSink<Vec<Movie>>,
    ) -> AppResult<()>;

    async fn get_movie_videos(
        &self,
        movie_id: i64,
        token: &CancellationToken,
        sink: &mut dyn ResourceSink<Vec<Video>>,
    ) -> AppResult<()>;

    async fn get_movie_reviews(
        &self,
        movie_id: i64,
        token: &CancellationToken,
        sink: &mut dyn ResourceSink<Vec<Review>>,
    ) -> AppResult<()>;

    async fn get_movie_credits(
        &self,
        movie_id: i64,
        token: &CancellationToken,
        sink: &mut dyn ResourceSink<CreditsResult>,
    ) -> AppResult<()>;

    async fn get_movie_images(
        &self,
        movie_id: i64,
        token: &CancellationToken,
        sink: &mut dyn ResourceSink<ImagesResult>,
    ) -> AppResult<()>;
}

pub struct RemoteMovieRepository {
    transport: Arc<dyn CatalogTransport>,
    cache: Option<Arc<dyn MovieCacheRepository>>,
    options: FetchOptions,
    offline_fallback: bool,
}

impl RemoteMovieRepository {
    pub fn new(transport: Arc<dyn CatalogTransport>, options: FetchOptions) -> Self {
        Self {
            transport,
            cache: None,
            options,
            offline_fallback: false,
        }
    }

    /// Write successful movie-list pages through to `cache`. With
    /// `offline_fallback`, a cached page answers connectivity failures.
    pub fn with_cache(mut self, cache: Arc<dyn MovieCacheRepository>, offline_fallback: bool) -> Self {
        self.cache = Some(cache);
        self.offline_fallback = offline_fallback;
        self
    }

    fn store(&self, category: &str, page: u32, movies: &[Movie]) {
        if let Some(cache) = &self.cache {
            if let Err(e) = cache.save_movies(category, page, movies) {
                warn!("could not cache {} page {}: {}", category, page, e);
            }
        }
    }

    fn cached(&self, category: &str, page: u32) -> Option<Vec<Movie>> {
        let cache = self.cache.as_ref()?;
        match cache.get_movies(category, page) {
            Ok(movies) => movies,
            Err(e) => {
                warn!("could not read cached {} page {}: {}", category, page, e);
                None
            }
        }
    }

    async fn fetch_movie_page(
        &self,
        endpoint: Endpoint,
        page: u32,
        token: &CancellationToken,
        sink: &mut dyn ResourceSink<Vec<Movie>>,
    ) -> AppResult<()> {
        resource_fetch::fetch(
            &*self.transport,
            CatalogRequest::paged(endpoint, page),
            |body| mapper::to_movies(body).map(|result| result.movies),
            &self.options,
            token,
            sink,
        )
        .await
    }
}

#[async_trait]
impl MovieRepository for RemoteMovieRepository {
    async fn get_movies(
        &self,
        category: &str,
        page: u32,
        token: &CancellationToken,
        sink: &mut dyn ResourceSink<Vec<Movie>>,
    ) -> AppResult<()> {
        resource_fetch::begin(sink);
        let request = CatalogRequest::movie_list(category, page)?;
        let outcome = resource_fetch::load(&*self.transport, &request, token, |body| {
            mapper::to_movies(body).map(|result| result.movies)
        })
        .await?;

        let outcome = match outcome {
            LoadOutcome::Loaded(movies) => {
                self.store(category, page, &movies);
                LoadOutcome::Loaded(movies)
            }
            other if self.offline_fallback => resource_fetch::recover_offline(other, || {
                let movies = self.cached(category, page)?;
                info!("serving cached {} page {} while offline", category, page);
                Some(movies)
            }),
            other => other,
        };

        resource_fetch::finish(outcome, &request, &self.options, token, sink);
        Ok(())
    }

    async fn get_movie_detail(
        &self,
        movie_id: i64,
        token: &CancellationToken,
        sink: &mut dyn ResourceSink<MovieDetail>,
    ) -> AppResult<()> {
        resource_fetch::fetch(
            &*self.transport,
            CatalogRequest::new(Endpoint::MovieDetail { movie_id }),
            mapper::to_movie_detail,
            &self.options,
            token,
            sink,
        )
        .await
    }

    async fn get_similar_movies(
        &self,
        movie_id: i64,
        page: u32,
        token: &CancellationToken,
        sink: &mut dyn ResourceSink<Vec<Movie>>,
    ) -> AppResult<()> {
        self.fetch_movie_page(Endpoint::Similar { movie_id }, page, token, sink)
            .await
    }

    async fn get_recommended_movies(
        &self,
        movie_id: i64,
        page: u32,
        token: &CancellationToken,
        sink: &mut dyn ResourceSink<Vec<Movie>>,
    ) -> AppResult<()> {
        self.fetch_movie_page(Endpoint::Recommended { movie_id }, page, token, sink)
            .await
    }

    async fn get_movie_videos(
        &self,
        movie_id: i64,
        token: &CancellationToken,
        sink: &mut dyn ResourceSink<Vec<Video>>,
    ) -> AppResult<()> {
        resource_fetch::fetch(
            &*self.transport,
            CatalogRequest::new(Endpoint::Videos { movie_id }),
            mapper::to_videos,
            &self.options,
            token,
            sink,
        )
        .await
    }

    async fn get_movie_reviews(
        &self,
        movie_id: i64,
        token: &CancellationToken,
        sink: &mut dyn ResourceSink<Vec<Review>>,
    ) -> AppResult<()> {
        resource_fetch::fetch(
            &*self.transport,
            CatalogRequest::new(Endpoint::Reviews { movie_id }),
            mapper::to_reviews,
            &self.options,
            token,
            sink,
        )
        .await
    }

    async fn get_movie_credits(
        &self,
        movie_id: i64,
        token: &CancellationToken,
        sink: &mut dyn ResourceSink<CreditsResult>,
    ) -> AppResult<()> {
        resource_fetch::fetch(
            &*self.transport,
            CatalogRequest::new(Endpoint::Credits { movie_id }),
            mapper::to_credits,
            &self.options,
            token,
            sink,
        )
        .await
    }

    async fn get_movie_images(
        &self,
        movie_id: i64,
        token: &CancellationToken,
        sink: &mut dyn ResourceSink<ImagesResult>,
    ) -> AppResult<()> {
        resource_fetch::fetch(
            &*self.transport,
            CatalogRequest::new(Endpoint::Images { movie_id }),
            mapper::to_images,
            &self.options,
            token,
            sink,
        )
        .await
    }
}
