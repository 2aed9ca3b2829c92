// src/application/view_models/movie_detail.rs
//
// Movie detail screen
//
// Seven independent concerns for one movie. A failure in one slot never
// touches another.

use log::info;
use tokio::sync::watch;

use super::state::{
    CreditsState, ImagesState, MovieDetailState, MoviesState, ReviewsState, VideoState,
};
use super::subscription::{settled, Subscriptions};
use crate::application::state::MovieUseCases;
use crate::use_cases::{
    GetMovieCreditsParams, GetMovieImagesParams, GetMovieParams, GetMovieReviewsParams,
    GetMovieVideosParams, GetRecommendedMoviesParams, GetSimilarMoviesParams,
};

/// Settled view of every concern at one point in time
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDetailSnapshot {
    pub detail: MovieDetailState,
    pub trailers: VideoState,
    pub similar: MoviesState,
    pub recommended: MoviesState,
    pub reviews: ReviewsState,
    pub credits: CreditsState,
    pub images: ImagesState,
}

pub struct MovieDetailViewModel {
    movie_id: i64,
    detail: watch::Receiver<MovieDetailState>,
    trailers: watch::Receiver<VideoState>,
    similar: watch::Receiver<MoviesState>,
    recommended: watch::Receiver<MoviesState>,
    reviews: watch::Receiver<ReviewsState>,
    credits: watch::Receiver<CreditsState>,
    images: watch::Receiver<ImagesState>,
    subscriptions: Subscriptions,
}

impl MovieDetailViewModel {
    /// Start every concern for `movie_id`. Must be called inside a tokio runtime.
    pub fn new(use_cases: &MovieUseCases, movie_id: i64) -> Self {
        info!("Opening movie detail for {}", movie_id);
        let mut subscriptions = Subscriptions::new();

        let detail = subscriptions.launch(
            "movie_detail",
            use_cases.get_movie.clone(),
            GetMovieParams { movie_id },
        );
        let trailers = subscriptions.launch(
            "movie_videos",
            use_cases.get_movie_videos.clone(),
            GetMovieVideosParams { movie_id },
        );
        let similar = subscriptions.launch(
            "similar_movies",
            use_cases.get_similar_movies.clone(),
            GetSimilarMoviesParams { movie_id, page: 1 },
        );
        let recommended = subscriptions.launch(
            "recommended_movies",
            use_cases.get_recommended_movies.clone(),
            GetRecommendedMoviesParams { movie_id, page: 1 },
        );
        let reviews = subscriptions.launch(
            "movie_reviews",
            use_cases.get_movie_reviews.clone(),
            GetMovieReviewsParams { movie_id },
        );
        let credits = subscriptions.launch(
            "movie_credits",
            use_cases.get_movie_credits.clone(),
            GetMovieCreditsParams { movie_id },
        );
        let images = subscriptions.launch(
            "movie_images",
            use_cases.get_movie_images.clone(),
            GetMovieImagesParams { movie_id },
        );

        Self {
            movie_id,
            detail,
            trailers,
            similar,
            recommended,
            reviews,
            credits,
            images,
            subscriptions,
        }
    }

    pub fn movie_id(&self) -> i64 {
        self.movie_id
    }

    pub fn detail(&self) -> watch::Receiver<MovieDetailState> {
        self.detail.clone()
    }

    pub fn trailers(&self) -> watch::Receiver<VideoState> {
        self.trailers.clone()
    }

    pub fn similar(&self) -> watch::Receiver<MoviesState> {
        self.similar.clone()
    }

    pub fn recommended(&self) -> watch::Receiver<MoviesState> {
        self.recommended.clone()
    }

    pub fn reviews(&self) -> watch::Receiver<ReviewsState> {
        self.reviews.clone()
    }

    pub fn credits(&self) -> watch::Receiver<CreditsState> {
        self.credits.clone()
    }

    pub fn images(&self) -> watch::Receiver<ImagesState> {
        self.images.clone()
    }

    /// Wait for every concern to settle (or end without a terminal value).
    pub async fn settle(&self) -> MovieDetailSnapshot {
        MovieDetailSnapshot {
            detail: settled(&mut self.detail()).await,
            trailers: settled(&mut self.trailers()).await,
            similar: settled(&mut self.similar()).await,
            recommended: settled(&mut self.recommended()).await,
            reviews: settled(&mut self.reviews()).await,
            credits: settled(&mut self.credits()).await,
            images: settled(&mut self.images()).await,
        }
    }

    /// Stop every concern. Later values are discarded.
    pub fn close(&mut self) {
        self.subscriptions.close();
    }
}
