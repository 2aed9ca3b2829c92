// src/domain/credit.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditsResult {
    pub id: i64,
    pub cast: Vec<Cast>,
    pub crew: Vec<Crew>,
}

impl CreditsResult {
    /// Crew members with the given job, e.g. "Director"
    pub fn crew_with_job<'a>(&'a self, job: &'a str) -> impl Iterator<Item = &'a Crew> + 'a {
        self.crew.iter().filter(move |c| c.job == job)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cast {
    pub id: i64,
    pub credit_id: String,
    pub name: String,
    pub original_name: String,
    pub character: String,
    pub profile_path: Option<String>,
    pub known_for_department: Option<String>,
    pub gender: Option<i32>,
    pub popularity: f64,
    pub order: u32,
    pub adult: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crew {
    pub id: i64,
    pub credit_id: String,
    pub name: String,
    pub original_name: String,
    pub department: String,
    pub job: String,
    pub profile_path: Option<String>,
    pub known_for_department: Option<String>,
    pub gender: Option<i32>,
    pub popularity: f64,
    pub adult: bool,
}
