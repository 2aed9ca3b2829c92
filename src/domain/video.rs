// src/domain/video.rs

use serde::{Deserialize, Serialize};

/// A video attached to a movie (trailer, teaser, clip...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub key: String,
    pub name: String,
    pub official: bool,
    pub published_at: String,
    pub site: String,
    pub size: u32,
    /// "Trailer", "Teaser", "Clip", "Featurette"...
    pub kind: String,
}

impl Video {
    pub fn is_trailer(&self) -> bool {
        self.kind.eq_ignore_ascii_case("trailer")
    }

    /// Watch URL for the hosting site, when the site is one we know
    pub fn watch_url(&self) -> Option<String> {
        match self.site.as_str() {
            "YouTube" => Some(format!("https://www.youtube.com/watch?v={}", self.key)),
            "Vimeo" => Some(format!("https://vimeo.com/{}", self.key)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(site: &str, kind: &str) -> Video {
        Video {
            id: "v1".to_string(),
            key: "abc123".to_string(),
            name: "Official Trailer".to_string(),
            official: true,
            published_at: "2021-07-22T16:00:00.000Z".to_string(),
            site: site.to_string(),
            size: 1080,
            kind: kind.to_string(),
        }
    }

    #[test]
    fn test_watch_url() {
        assert_eq!(
            video("YouTube", "Trailer").watch_url().as_deref(),
            Some("https://www.youtube.com/watch?v=abc123")
        );
        assert_eq!(video("Dailymotion", "Trailer").watch_url(), None);
    }

    #[test]
    fn test_is_trailer() {
        assert!(video("YouTube", "Trailer").is_trailer());
        assert!(!video("YouTube", "Featurette").is_trailer());
    }
}
