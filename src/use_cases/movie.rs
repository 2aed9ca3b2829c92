// src/use_cases/movie.rs

use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use super::UseCase;
use crate::domain::{CreditsResult, ImagesResult, Movie, MovieDetail, Review, Video};
use crate::error::AppResult;
use crate::repositories::{MovieRepository, ResourceSink};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetMoviesParams {
    /// `popular`, `top_rated`, `upcoming`, `now_playing`
    pub category: String,
    pub page: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetMovieParams {
    pub movie_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetSimilarMoviesParams {
    pub movie_id: i64,
    pub page: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetRecommendedMoviesParams {
    pub movie_id: i64,
    pub page: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetMovieVideosParams {
    pub movie_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetMovieReviewsParams {
    pub movie_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetMovieCreditsParams {
    pub movie_id: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetMovieImagesParams {
    pub movie_id: i64,
}

pub struct GetMoviesUseCase {
    movie_repo: Arc<dyn MovieRepository>,
}

impl GetMoviesUseCase {
    pub fn new(movie_repo: Arc<dyn MovieRepository>) -> Self {
        Self { movie_repo }
    }
}

#[async_trait]
impl UseCase for GetMoviesUseCase {
    type Params = GetMoviesParams;
    type Output = Vec<Movie>;

    async fn execute(
        &self,
        params: GetMoviesParams,
        token: &CancellationToken,
        sink: &mut dyn ResourceSink<Vec<Movie>>,
    ) -> AppResult<()> {
        self.movie_repo
            .get_movies(&params.category, params.page, token, sink)
            .await
    }
}

pub struct GetMovieUseCase {
    movie_repo: Arc<dyn MovieRepository>,
}

impl GetMovieUseCase {
    pub fn new(movie_repo: Arc<dyn MovieRepository>) -> Self {
        Self { movie_repo }
    }
}

#[async_trait]
impl UseCase for GetMovieUseCase {
    type Params = GetMovieParams;
    type Output = MovieDetail;

    async fn execute(
        &self,
        params: GetMovieParams,
        token: &CancellationToken,
        sink: &mut dyn ResourceSink<MovieDetail>,
    ) -> AppResult<()> {
        self.movie_repo
            .get_movie_detail(params.movie_id, token, sink)
            .await
    }
}

pub struct GetSimilarMoviesUseCase {
    movie_repo: Arc<dyn MovieRepository>,
}

impl GetSimilarMoviesUseCase {
    pub fn new(movie_repo: Arc<dyn MovieRepository>) -> Self {
        Self { movie_repo }
    }
}

#[async_trait]
impl UseCase for GetSimilarMoviesUseCase {
    type Params = GetSimilarMoviesParams;
    type Output = Vec<Movie>;

    async fn execute(
        &self,
        params: GetSimilarMoviesParams,
        token: &CancellationToken,
        sink: &mut dyn ResourceSink<Vec<Movie>>,
    ) -> AppResult<()> {
        self.movie_repo
            .get_similar_movies(params.movie_id, params.page, token, sink)
            .await
    }
}

pub struct GetRecommendedMoviesUseCase {
    movie_repo: Arc<dyn MovieRepository>,
}

impl GetRecommendedMoviesUseCase {
    pub fn new(movie_repo: Arc<dyn MovieRepository>) -> Self {
        Self { movie_repo }
    }
}

#[async_trait]
impl UseCase for GetRecommendedMoviesUseCase {
    type Params = GetRecommendedMoviesParams;
    type Output = Vec<Movie>;

    async fn execute(
        &self,
        params: GetRecommendedMoviesParams,
        token: &CancellationToken,
        sink: &mut dyn ResourceSink<Vec<Movie>>,
    ) -> AppResult<()> {
        self.movie_repo
            .get_recommended_movies(params.movie_id, params.page, token, sink)
            .await
    }
}

pub struct GetMovieVideosUseCase {
    movie_repo: Arc<dyn MovieRepository>,
}

impl GetMovieVideosUseCase {
    pub fn new(movie_repo: Arc<dyn MovieRepository>) -> Self {
        Self { movie_repo }
    }
}

#[async_trait]
impl UseCase for GetMovieVideosUseCase {
    type Params = GetMovieVideosParams;
    type Output = Vec<Video>;

    async fn execute(
        &self,
        params: GetMovieVideosParams,
        token: &CancellationToken,
        sink: &mut dyn ResourceSink<Vec<Video>>,
    ) -> AppResult<()> {
        self.movie_repo
            .get_movie_videos(params.movie_id, token, sink)
            .await
    }
}

pub struct GetMovieReviewsUseCase {
    movie_repo: Arc<dyn MovieRepository>,
}

impl GetMovieReviewsUseCase {
    pub fn new(movie_repo: Arc<dyn MovieRepository>) -> Self {
        Self { movie_repo }
    }
}

#[async_trait]
impl UseCase for GetMovieReviewsUseCase {
    type Params = GetMovieReviewsParams;
    type Output = Vec<Review>;

    async fn execute(
        &self,
        params: GetMovieReviewsParams,
        token: &CancellationToken,
        sink: &mut dyn ResourceSink<Vec<Review>>,
    ) -> AppResult<()> {
        self.movie_repo
            .get_movie_reviews(params.movie_id, token, sink)
            .await
    }
}

pub struct GetMovieCreditsUseCase {
    movie_repo: Arc<dyn MovieRepository>,
}

impl GetMovieCreditsUseCase {
    pub fn new(movie_repo: Arc<dyn MovieRepository>) -> Self {
        Self { movie_repo }
    }
}

#[async_trait]
impl UseCase for GetMovieCreditsUseCase {
    type Params = GetMovieCreditsParams;
    type Output = CreditsResult;

    async fn execute(
        &self,
        params: GetMovieCreditsParams,
        token: &CancellationToken,
        sink: &mut dyn ResourceSink<CreditsResult>,
    ) -> AppResult<()> {
        self.movie_repo
            .get_movie_credits(params.movie_id, token, sink)
            .await
    }
}

pub struct GetMovieImagesUseCase {
    movie_repo: Arc<dyn MovieRepository>,
}

impl GetMovieImagesUseCase {
    pub fn new(movie_repo: Arc<dyn MovieRepository>) -> Self {
        Self { movie_repo }
    }
}

#[async_trait]
impl UseCase for GetMovieImagesUseCase {
    type Params = GetMovieImagesParams;
    type Output = ImagesResult;

    async fn execute(
        &self,
        params: GetMovieImagesParams,
        token: &CancellationToken,
        sink: &mut dyn ResourceSink<ImagesResult>,
    ) -> AppResult<()> {
        self.movie_repo
            .get_movie_images(params.movie_id, token, sink)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Resource;
    use crate::error::{TransportError, CONNECTIVITY_FAILURE_MSG};
    use crate::integrations::tmdb::MockCatalogTransport;
    use crate::repositories::{FetchOptions, RemoteMovieRepository};
    use serde_json::json;

    fn movie_repo(transport: MockCatalogTransport) -> Arc<dyn MovieRepository> {
        Arc::new(RemoteMovieRepository::new(
            Arc::new(transport),
            FetchOptions::default(),
        ))
    }

    #[tokio::test]
    async fn test_get_movies_passes_category_and_page() {
        let mut transport = MockCatalogTransport::new();
        transport
            .expect_execute()
            .withf(|request| request.endpoint.path() == "/movie/upcoming" && request.page == Some(2))
            .times(1)
            .returning(|_| Ok(Some(json!({ "page": 2, "results": [{ "id": 5, "title": "Soon" }] }))));

        let use_case = GetMoviesUseCase::new(movie_repo(transport));
        let mut sink = Vec::new();

        use_case
            .execute(
                GetMoviesParams {
                    category: "upcoming".to_string(),
                    page: 2,
                },
                &CancellationToken::new(),
                &mut sink,
            )
            .await
            .unwrap();

        assert_eq!(sink.len(), 2);
        assert_eq!(sink[1].data().unwrap()[0].title, "Soon");
    }

    #[tokio::test]
    async fn test_get_similar_movies_passes_movie_and_page() {
        let mut transport = MockCatalogTransport::new();
        transport
            .expect_execute()
            .withf(|request| request.endpoint.path() == "/movie/9/similar" && request.page == Some(4))
            .times(1)
            .returning(|_| Ok(Some(json!({ "results": [] }))));

        let use_case = GetSimilarMoviesUseCase::new(movie_repo(transport));
        let mut sink = Vec::new();

        use_case
            .execute(
                GetSimilarMoviesParams {
                    movie_id: 9,
                    page: 4,
                },
                &CancellationToken::new(),
                &mut sink,
            )
            .await
            .unwrap();

        assert_eq!(sink, vec![Resource::Loading, Resource::success(Vec::new())]);
    }

    #[tokio::test]
    async fn test_use_case_forwards_repository_sequence_unchanged() {
        let mut transport = MockCatalogTransport::new();
        transport
            .expect_execute()
            .returning(|_| Err(TransportError::Connectivity("down".to_string())));
        let repo = movie_repo(transport);

        let mut direct = Vec::new();
        repo.get_movie_videos(7, &CancellationToken::new(), &mut direct)
            .await
            .unwrap();

        let mut through_use_case = Vec::new();
        GetMovieVideosUseCase::new(repo)
            .execute(
                GetMovieVideosParams { movie_id: 7 },
                &CancellationToken::new(),
                &mut through_use_case,
            )
            .await
            .unwrap();

        assert_eq!(direct, through_use_case);
        assert_eq!(through_use_case[1].message(), Some(CONNECTIVITY_FAILURE_MSG));
    }
}
