// src/integrations/tmdb/request.rs
//
// Catalog requests: which endpoint, with which path and query parameters.

use std::fmt;

use crate::domain::{MediaType, TimeWindow};
use crate::error::TransportError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// `popular`, `top_rated`, `upcoming`, `now_playing`...
    MovieList { category: String },
    MovieDetail { movie_id: i64 },
    Similar { movie_id: i64 },
    Recommended { movie_id: i64 },
    Videos { movie_id: i64 },
    Reviews { movie_id: i64 },
    Credits { movie_id: i64 },
    Images { movie_id: i64 },
    Trending { media_type: MediaType, time_window: TimeWindow },
}

impl Endpoint {
    /// Path relative to the API base URL, always starting with `/`
    pub fn path(&self) -> String {
        match self {
            Endpoint::MovieList { category } => format!("/movie/{}", category),
            Endpoint::MovieDetail { movie_id } => format!("/movie/{}", movie_id),
            Endpoint::Similar { movie_id } => format!("/movie/{}/similar", movie_id),
            Endpoint::Recommended { movie_id } => format!("/movie/{}/recommendations", movie_id),
            Endpoint::Videos { movie_id } => format!("/movie/{}/videos", movie_id),
            Endpoint::Reviews { movie_id } => format!("/movie/{}/reviews", movie_id),
            Endpoint::Credits { movie_id } => format!("/movie/{}/credits", movie_id),
            Endpoint::Images { movie_id } => format!("/movie/{}/images", movie_id),
            Endpoint::Trending {
                media_type,
                time_window,
            } => format!("/trending/{}/{}", media_type, time_window),
        }
    }

    /// Short name used in logs
    pub fn operation(&self) -> &'static str {
        match self {
            Endpoint::MovieList { .. } => "movie_list",
            Endpoint::MovieDetail { .. } => "movie_detail",
            Endpoint::Similar { .. } => "similar_movies",
            Endpoint::Recommended { .. } => "recommended_movies",
            Endpoint::Videos { .. } => "movie_videos",
            Endpoint::Reviews { .. } => "movie_reviews",
            Endpoint::Credits { .. } => "movie_credits",
            Endpoint::Images { .. } => "movie_images",
            Endpoint::Trending { .. } => "trending",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CatalogRequest {
    pub endpoint: Endpoint,
    pub page: Option<u32>,
}

impl CatalogRequest {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            page: None,
        }
    }

    pub fn paged(endpoint: Endpoint, page: u32) -> Self {
        Self {
            endpoint,
            page: Some(page),
        }
    }

    /// A movie-list page. The category is a single path segment such as
    /// `popular`: only ASCII letters, digits and `_` are accepted.
    pub fn movie_list(category: &str, page: u32) -> Result<Self, TransportError> {
        let valid = !category.is_empty()
            && category
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_');
        if !valid {
            return Err(TransportError::InvalidRequest(format!(
                "invalid movie category '{}'",
                category
            )));
        }

        Ok(Self::paged(
            Endpoint::MovieList {
                category: category.to_string(),
            },
            page,
        ))
    }

    /// Query parameters specific to this request (credentials are added by the client)
    pub fn query(&self) -> Vec<(&'static str, String)> {
        self.page
            .map(|page| vec![("page", page.to_string())])
            .unwrap_or_default()
    }
}

impl fmt::Display for CatalogRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.page {
            Some(page) => write!(f, "{}?page={}", self.endpoint.path(), page),
            None => f.write_str(&self.endpoint.path()),
        }
    }
}
