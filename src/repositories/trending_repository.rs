// src/repositories/trending_repository.rs
//
// Trending titles. Shares the local store with movie lists: successful pages
// are written through, and with offline fallback a cached page answers a
// connectivity failure.

use async_trait::async_trait;
use log::{info, warn};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use super::movie_cache_repository::TrendingCacheRepository;
use super::resource_fetch::{self, FetchOptions, LoadOutcome, ResourceSink};
use crate::domain::{MediaType, TimeWindow, Trending};
use crate::error::AppResult;
use crate::integrations::tmdb::{mapper, CatalogRequest, CatalogTransport, Endpoint};

#[async_trait]
pub trait TrendingRepository: Send + Sync {
    async fn get_trending(
        &self,
        media_type: MediaType,
        time_window: TimeWindow,
        page: u32,
        token: &CancellationToken,
        sink: &mut dyn ResourceSink<Vec<Trending>>,
    ) -> AppResult<()>;
}

pub struct RemoteTrendingRepository {
    transport: Arc<dyn CatalogTransport>,
    cache: Option<Arc<dyn TrendingCacheRepository>>,
    options: FetchOptions,
    offline_fallback: bool,
}

impl RemoteTrendingRepository {
    pub fn new(transport: Arc<dyn CatalogTransport>, options: FetchOptions) -> Self {
        Self {
            transport,
            cache: None,
            options,
            offline_fallback: false,
        }
    }

    pub fn with_cache(
        mut self,
        cache: Arc<dyn TrendingCacheRepository>,
        offline_fallback: bool,
    ) -> Self {
        self.cache = Some(cache);
        self.offline_fallback = offline_fallback;
        self
    }

    fn store(&self, media_type: MediaType, time_window: TimeWindow, page: u32, items: &[Trending]) {
        if let Some(cache) = &self.cache {
            if let Err(e) = cache.save_trending(media_type, time_window, page, items) {
                warn!(
                    "could not cache trending {}/{} page {}: {}",
                    media_type, time_window, page, e
                );
            }
        }
    }

    fn cached(
        &self,
        media_type: MediaType,
        time_window: TimeWindow,
        page: u32,
    ) -> Option<Vec<Trending>> {
        let cache = self.cache.as_ref()?;
        match cache.get_trending(media_type, time_window, page) {
            Ok(items) => items,
            Err(e) => {
                warn!(
                    "could not read cached trending {}/{} page {}: {}",
                    media_type, time_window, page, e
                );
                None
            }
        }
    }
}

#[async_trait]
impl TrendingRepository for RemoteTrendingRepository {
    async fn get_trending(
        &self,
        media_type: MediaType,
        time_window: TimeWindow,
        page: u32,
        token: &CancellationToken,
        sink: &mut dyn ResourceSink<Vec<Trending>>,
    ) -> AppResult<()> {
        let request = CatalogRequest::paged(
            Endpoint::Trending {
                media_type,
                time_window,
            },
            page,
        );

        resource_fetch::begin(sink);
        let outcome =
            resource_fetch::load(&*self.transport, &request, token, mapper::to_trending).await?;

        let outcome = match outcome {
            LoadOutcome::Loaded(items) => {
                self.store(media_type, time_window, page, &items);
                LoadOutcome::Loaded(items)
            }
            other if self.offline_fallback => resource_fetch::recover_offline(other, || {
                let items = self.cached(media_type, time_window, page)?;
                info!(
                    "serving cached trending {}/{} page {} while offline",
                    media_type, time_window, page
                );
                Some(items)
            }),
            other => other,
        };

        resource_fetch::finish(outcome, &request, &self.options, token, sink);
        Ok(())
    }
}
