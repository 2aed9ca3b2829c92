// src/domain/review.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub author: String,
    /// Embedded by value, not a reference to another entity
    pub author_details: AuthorDetail,
    pub content: String,
    pub created_at: String,
    pub updated_at: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthorDetail {
    pub name: String,
    pub username: String,
    pub avatar_path: Option<String>,
    /// Out of 10
    pub rating: Option<f64>,
}
