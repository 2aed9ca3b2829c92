// src/application/view_models/state.rs
//
// Per-concern view state
//
// Each observable slot moves through:
//   Initial -> Loading -> Loaded | Failed
// driven only by the resource values of its own fetch.

use crate::domain::{
    CreditsResult, ImagesResult, Movie, MovieDetail, Resource, Review, Trending, Video,
};
use crate::error::REMOTE_SERVICE_FAILURE_MSG;

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState<T> {
    /// Nothing requested yet
    Initial,
    Loading,
    Loaded(T),
    /// User-facing message, never empty
    Failed(String),
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Initial
    }
}

impl<T> ViewState<T> {
    /// Replace this state with the one `resource` describes.
    pub fn apply(&mut self, resource: Resource<T>) {
        *self = match resource {
            Resource::Loading => ViewState::Loading,
            Resource::Success { data } => ViewState::Loaded(data),
            Resource::Error { message, .. } if message.is_empty() => {
                ViewState::Failed(REMOTE_SERVICE_FAILURE_MSG.to_string())
            }
            Resource::Error { message, .. } => ViewState::Failed(message),
        };
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ViewState::Loaded(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Loaded or Failed
    pub fn is_settled(&self) -> bool {
        matches!(self, ViewState::Loaded(_) | ViewState::Failed(_))
    }
}

pub type MovieDetailState = ViewState<MovieDetail>;
pub type VideoState = ViewState<Vec<Video>>;
pub type MoviesState = ViewState<Vec<Movie>>;
pub type ReviewsState = ViewState<Vec<Review>>;
pub type CreditsState = ViewState<CreditsResult>;
pub type ImagesState = ViewState<ImagesResult>;
pub type TrendingState = ViewState<Vec<Trending>>;
