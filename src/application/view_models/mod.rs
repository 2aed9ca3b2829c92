// src/application/view_models/mod.rs
//
// View state holders
//
// RULES:
// - One observable slot per concern
// - A slot changes only on its own fetch's values
// - Closing the holder cancels every in-flight fetch

pub mod home;
pub mod movie_detail;
pub mod state;
pub mod subscription;


pub use home::{HomeViewModel, POPULAR_CATEGORY};
pub use movie_detail::{MovieDetailSnapshot, MovieDetailViewModel};
pub use state::{
    CreditsState, ImagesState, MovieDetailState, MoviesState, ReviewsState, TrendingState,
    VideoState, ViewState,
};
pub use subscription::{settled, Subscriptions};
