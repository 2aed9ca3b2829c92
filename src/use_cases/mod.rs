// src/use_cases/mod.rs
//
// Use case layer
//
// RULES:
// - One use case per repository operation
// - Pure delegation: no filtering, caching or retry
// - The repository's emission sequence reaches the caller unchanged

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::AppResult;
use crate::repositories::ResourceSink;

pub mod movie;
pub mod trending;

pub use movie::{
    GetMovieCreditsParams, GetMovieCreditsUseCase, GetMovieImagesParams, GetMovieImagesUseCase,
    GetMovieParams, GetMovieReviewsParams, GetMovieReviewsUseCase, GetMovieUseCase,
    GetMovieVideosParams, GetMovieVideosUseCase, GetMoviesParams, GetMoviesUseCase,
    GetRecommendedMoviesParams, GetRecommendedMoviesUseCase, GetSimilarMoviesParams,
    GetSimilarMoviesUseCase,
};
pub use trending::{GetTrendingParams, GetTrendingUseCase};

/// A single catalog operation, parameterised by its own `Params`.
#[async_trait]
pub trait UseCase: Send + Sync {
    type Params: Send + 'static;
    type Output: Send + 'static;

    async fn execute(
        &self,
        params: Self::Params,
        token: &CancellationToken,
        sink: &mut dyn ResourceSink<Self::Output>,
    ) -> AppResult<()>;
}
