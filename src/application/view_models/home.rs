// src/application/view_models/home.rs

use log::info;
use tokio::sync::watch;

use super::state::{MoviesState, TrendingState};
use super::subscription::{settled, Subscriptions};
use crate::application::state::MovieUseCases;
use crate::use_cases::{GetMoviesParams, GetTrendingParams};

pub const POPULAR_CATEGORY: &str = "popular";

/// Home screen: trending titles and popular movies.
pub struct HomeViewModel {
    trending: watch::Receiver<TrendingState>,
    popular: watch::Receiver<MoviesState>,
    subscriptions: Subscriptions,
}

impl HomeViewModel {
    pub fn new(use_cases: &MovieUseCases, trending: GetTrendingParams) -> Self {
        info!(
            "Opening home ({} trending, {})",
            trending.media_type, trending.time_window
        );
        let mut subscriptions = Subscriptions::new();

        let trending = subscriptions.launch("trending", use_cases.get_trending.clone(), trending);
        let popular = subscriptions.launch(
            "popular_movies",
            use_cases.get_movies.clone(),
            GetMoviesParams {
                category: POPULAR_CATEGORY.to_string(),
                page: 1,
            },
        );

        Self {
            trending,
            popular,
            subscriptions,
        }
    }

    pub fn trending(&self) -> watch::Receiver<TrendingState> {
        self.trending.clone()
    }

    pub fn popular(&self) -> watch::Receiver<MoviesState> {
        self.popular.clone()
    }

    pub async fn settle(&self) -> (TrendingState, MoviesState) {
        (
            settled(&mut self.trending()).await,
            settled(&mut self.popular()).await,
        )
    }

    pub fn close(&mut self) {
        self.subscriptions.close();
    }
}
