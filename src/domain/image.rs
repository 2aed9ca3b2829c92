// src/domain/image.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImagesResult {
    pub id: i64,
    pub backdrops: Vec<Image>,
    pub posters: Vec<Image>,
    pub logos: Vec<Image>,
}

impl ImagesResult {
    pub fn is_empty(&self) -> bool {
        self.backdrops.is_empty() && self.posters.is_empty() && self.logos.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub file_path: String,
    pub aspect_ratio: f64,
    pub width: u32,
    pub height: u32,
    /// Language code, absent for language-neutral artwork
    pub iso_639_1: Option<String>,
    pub vote_average: f64,
    pub vote_count: i64,
}
