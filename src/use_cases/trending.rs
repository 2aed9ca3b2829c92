// src/use_cases/trending.rs

use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use super::UseCase;
use crate::domain::{MediaType, TimeWindow, Trending};
use crate::error::AppResult;
use crate::repositories::{ResourceSink, TrendingRepository};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetTrendingParams {
    pub media_type: MediaType,
    pub time_window: TimeWindow,
    pub page: u32,
}

impl Default for GetTrendingParams {
    fn default() -> Self {
        Self {
            media_type: MediaType::All,
            time_window: TimeWindow::Day,
            page: 1,
        }
    }
}

pub struct GetTrendingUseCase {
    trending_repo: Arc<dyn TrendingRepository>,
}

impl GetTrendingUseCase {
    pub fn new(trending_repo: Arc<dyn TrendingRepository>) -> Self {
        Self { trending_repo }
    }
}

#[async_trait]
impl UseCase for GetTrendingUseCase {
    type Params = GetTrendingParams;
    type Output = Vec<Trending>;

    async fn execute(
        &self,
        params: GetTrendingParams,
        token: &CancellationToken,
        sink: &mut dyn ResourceSink<Vec<Trending>>,
    ) -> AppResult<()> {
        self.trending_repo
            .get_trending(params.media_type, params.time_window, params.page, token, sink)
            .await
    }
}
