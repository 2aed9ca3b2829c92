// src/repositories/movie_cache_repository.rs
//
// Local store for movie list and trending pages

use chrono::Utc;
use rusqlite::{params, OptionalExtension};
use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::domain::{MediaType, Movie, TimeWindow, Trending};
use crate::error::AppResult;

pub trait MovieCacheRepository: Send + Sync {
    /// Replace the cached page for (category, page)
    fn save_movies(&self, category: &str, page: u32, movies: &[Movie]) -> AppResult<()>;
    fn get_movies(&self, category: &str, page: u32) -> AppResult<Option<Vec<Movie>>>;
    fn clear(&self) -> AppResult<()>;
}

pub trait TrendingCacheRepository: Send + Sync {
    fn save_trending(
        &self,
        media_type: MediaType,
        time_window: TimeWindow,
        page: u32,
        items: &[Trending],
    ) -> AppResult<()>;

    fn get_trending(
        &self,
        media_type: MediaType,
        time_window: TimeWindow,
        page: u32,
    ) -> AppResult<Option<Vec<Trending>>>;
}

pub struct SqliteMovieCacheRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteMovieCacheRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }
}

impl MovieCacheRepository for SqliteMovieCacheRepository {
    fn save_movies(&self, category: &str, page: u32, movies: &[Movie]) -> AppResult<()> {
        let conn = self.pool.get()?;
        let movies_json = serde_json::to_string(movies)?;

        conn.execute(
            "INSERT OR REPLACE INTO movie_cache (category, page, movies, cached_at)
             VALUES (?1, ?2, ?3, ?4)",
            params![category, page, movies_json, Utc::now().to_rfc3339()],
        )?;

        Ok(())
    }

    fn get_movies(&self, category: &str, page: u32) -> AppResult<Option<Vec<Movie>>> {
        let conn = self.pool.get()?;

        let movies_json: Option<String> = conn
            .query_row(
                "SELECT movies FROM movie_cache WHERE category = ?1 AND page = ?2",
                params![category, page],
                |row| row.get(0),
            )
            .optional()?;

        match movies_json {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    fn clear(&self) -> AppResult<()> {
        let conn = self.pool.get()?;
        conn.execute_batch("DELETE FROM movie_cache; DELETE FROM trending_cache;")?;
        Ok(())
    }
}

impl TrendingCacheRepository for SqliteMovieCacheRepository {
    fn save_trending(
        &self,
        media_type: MediaType,
        time_window: TimeWindow,
        page: u32,
        items: &[Trending],
    ) -> AppResult<()> {
        let conn = self.pool.get()?;
        let items_json = serde_json::to_string(items)?;

        conn.execute(
            "INSERT OR REPLACE INTO trending_cache (media_type, time_window, page, items, cached_at)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                media_type.as_str(),
                time_window.as_str(),
                page,
                items_json,
                Utc::now().to_rfc3339()
            ],
        )?;

        Ok(())
    }

    fn get_trending(
        &self,
        media_type: MediaType,
        time_window: TimeWindow,
        page: u32,
    ) -> AppResult<Option<Vec<Trending>>> {
        let conn = self.pool.get()?;

        let items_json: Option<String> = conn
            .query_row(
                "SELECT items FROM trending_cache
                 WHERE media_type = ?1 AND time_window = ?2 AND page = ?3",
                params![media_type.as_str(), time_window.as_str(), page],
                |row| row.get(0),
            )
            .optional()?;

        match items_json {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }
}
