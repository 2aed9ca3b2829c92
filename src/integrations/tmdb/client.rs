// src/integrations/tmdb/client.rs
//
// TMDB REST client
//
// ARCHITECTURE:
// - Implements the CatalogTransport port used by the repositories
// - Returns the decoded JSON body untouched; mapping lives in `mapper`
// - Classifies every failure as protocol, connectivity, malformed body or
//   invalid request so repositories can pick the right message
//
// CRITICAL RULES:
// - This is INFRASTRUCTURE, not DOMAIN
// - No retries, no caching: one call, one answer
// - Safe to share between concurrent callers (reqwest::Client is)

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{header, Client};
use serde_json::Value;

use super::request::CatalogRequest;
use crate::config::CineyConfig;
use crate::error::{AppError, AppResult, TransportError};

/// Port to the remote catalog service.
///
/// `Ok(None)` means the service answered successfully with an empty body.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogTransport: Send + Sync {
    async fn execute(&self, request: &CatalogRequest) -> Result<Option<Value>, TransportError>;
}

/// Image sizes served by the TMDB image CDN
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSize {
    W92,
    W185,
    W342,
    W500,
    W780,
    W1280,
    Original,
}

impl ImageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::W92 => "w92",
            ImageSize::W185 => "w185",
            ImageSize::W342 => "w342",
            ImageSize::W500 => "w500",
            ImageSize::W780 => "w780",
            ImageSize::W1280 => "w1280",
            ImageSize::Original => "original",
        }
    }
}

pub struct TmdbClient {
    base_url: String,
    image_base_url: String,
    api_key: String,
    language: Option<String>,
    http_client: Client,
}

impl std::fmt::Debug for TmdbClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TmdbClient")
            .field("base_url", &self.base_url)
            .field("language", &self.language)
            .finish()
    }
}

impl TmdbClient {
    pub fn new(config: &CineyConfig) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AppError::Other(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            image_base_url: config.image_base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            language: config.language.clone(),
            http_client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a request (without query parameters)
    pub fn url_for(&self, request: &CatalogRequest) -> String {
        format!("{}{}", self.base_url, request.endpoint.path())
    }

    /// Absolute URL of a poster/backdrop/profile path such as `/abc.jpg`
    pub fn image_url(&self, size: ImageSize, path: &str) -> String {
        format!(
            "{}/{}/{}",
            self.image_base_url,
            size.as_str(),
            path.trim_start_matches('/')
        )
    }

    fn query_for(&self, request: &CatalogRequest) -> Vec<(&'static str, String)> {
        let mut query = request.query();
        query.push(("api_key", self.api_key.clone()));
        if let Some(language) = &self.language {
            query.push(("language", language.clone()));
        }
        query
    }
}

#[async_trait]
impl CatalogTransport for TmdbClient {
    async fn execute(&self, request: &CatalogRequest) -> Result<Option<Value>, TransportError> {
        debug!("GET {}", request);

        let response = self
            .http_client
            .get(self.url_for(request))
            .header(header::ACCEPT, "application/json")
            .query(&self.query_for(request))
            .send()
            .await
            .map_err(classify)?;

        let status = response.status();
        if !status.is_success() {
            warn!("{} returned status {}", request, status);
            return Err(TransportError::Protocol {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await.map_err(classify)?;
        parse_body(&bytes)
    }
}

/// Decode a successful response body. Blank bodies and JSON `null` are empty.
pub(crate) fn parse_body(bytes: &[u8]) -> Result<Option<Value>, TransportError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    let value: Value =
        serde_json::from_slice(bytes).map_err(|e| TransportError::Malformed(e.to_string()))?;

    if value.is_null() {
        Ok(None)
    } else {
        Ok(Some(value))
    }
}

fn classify(err: reqwest::Error) -> TransportError {
    if err.is_builder() {
        TransportError::InvalidRequest(err.to_string())
    } else if err.is_status() {
        TransportError::Protocol {
            status: err.status().map(|s| s.as_u16()).unwrap_or_default(),
        }
    } else if err.is_decode() {
        TransportError::Malformed(err.to_string())
    } else {
        TransportError::Connectivity(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrations::tmdb::request::Endpoint;
    use std::time::Duration;

    fn config(base_url: &str) -> CineyConfig {
        CineyConfig {
            api_base_url: base_url.to_string(),
            api_key: "test_key".to_string(),
            language: Some("en-US".to_string()),
            request_timeout: Duration::from_secs(2),
            ..CineyConfig::default()
        }
    }

    #[test]
    fn test_client_creation() {
        let client = TmdbClient::new(&config("https://api.themoviedb.org/3/")).unwrap();
        assert_eq!(client.base_url(), "https://api.themoviedb.org/3");
    }

    #[test]
    fn test_url_and_query() {
        let client = TmdbClient::new(&config("https://api.themoviedb.org/3")).unwrap();
        let request = CatalogRequest::paged(Endpoint::Similar { movie_id: 42 }, 2);

        assert_eq!(
            client.url_for(&request),
            "https://api.themoviedb.org/3/movie/42/similar"
        );
        assert_eq!(
            client.query_for(&request),
            vec![
                ("page", "2".to_string()),
                ("api_key", "test_key".to_string()),
                ("language", "en-US".to_string()),
            ]
        );
    }

    #[test]
    fn test_image_url() {
        let client = TmdbClient::new(&config("https://api.themoviedb.org/3")).unwrap();
        assert_eq!(
            client.image_url(ImageSize::W500, "/poster.jpg"),
            "https://image.tmdb.org/t/p/w500/poster.jpg"
        );
    }

    #[test]
    fn test_parse_body() {
        assert_eq!(parse_body(b"").unwrap(), None);
        assert_eq!(parse_body(b"  \n").unwrap(), None);
        assert_eq!(parse_body(b"null").unwrap(), None);
        assert_eq!(
            parse_body(br#"{"id": 1}"#).unwrap(),
            Some(serde_json::json!({"id": 1}))
        );
        assert!(matches!(
            parse_body(b"<html>"),
            Err(TransportError::Malformed(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_host_is_connectivity_failure() {
        // Nothing listens on port 1 locally; the connection is refused.
        let client = TmdbClient::new(&config("http://127.0.0.1:1/3")).unwrap();
        let request = CatalogRequest::new(Endpoint::Videos { movie_id: 7 });

        let err = client.execute(&request).await.unwrap_err();
        assert!(matches!(err, TransportError::Connectivity(_)), "got {:?}", err);
    }
}
