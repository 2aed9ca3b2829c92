use serde::{Deserialize, Serialize};

/// A movie as it appears in list endpoints (category, similar, recommended)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub original_title: String,
    pub original_language: String,
    pub overview: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub genre_ids: Vec<i64>,
    /// `YYYY-MM-DD`, empty when the catalog has no date
    pub release_date: String,
    pub popularity: f64,
    pub vote_average: f64,
    pub vote_count: i64,
    pub adult: bool,
    pub video: bool,
}

/// One page of a movie list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoviesResult {
    pub page: u32,
    pub movies: Vec<Movie>,
    pub total_pages: u32,
    pub total_results: u32,
}

/// Full movie record from the detail endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    pub id: i64,
    pub imdb_id: Option<String>,
    pub title: String,
    pub original_title: String,
    pub original_language: String,
    pub tagline: Option<String>,
    pub overview: Option<String>,
    pub status: String,
    pub release_date: String,
    /// Minutes
    pub runtime: Option<u32>,
    pub budget: i64,
    pub revenue: i64,
    pub homepage: Option<String>,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub genres: Vec<Genre>,
    pub production_companies: Vec<ProductionCompany>,
    pub production_countries: Vec<ProductionCountry>,
    pub spoken_languages: Vec<SpokenLanguage>,
    pub belongs_to_collection: Option<MovieCollection>,
    pub popularity: f64,
    pub vote_average: f64,
    pub vote_count: i64,
    pub adult: bool,
    pub video: bool,
}

impl MovieDetail {
    /// Genre names joined for display, e.g. "Action, Drama"
    pub fn genre_names(&self) -> String {
        self.genres
            .iter()
            .map(|g| g.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Release year, if the release date is known
    pub fn release_year(&self) -> Option<i32> {
        self.release_date.get(..4)?.parse().ok()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionCompany {
    pub id: i64,
    pub name: String,
    pub logo_path: Option<String>,
    pub origin_country: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionCountry {
    pub iso_3166_1: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpokenLanguage {
    pub iso_639_1: String,
    pub name: String,
    pub english_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieCollection {
    pub id: i64,
    pub name: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detail(release_date: &str, genres: Vec<Genre>) -> MovieDetail {
        MovieDetail {
            id: 42,
            imdb_id: None,
            title: "Dune".to_string(),
            original_title: "Dune".to_string(),
            original_language: "en".to_string(),
            tagline: None,
            overview: None,
            status: "Released".to_string(),
            release_date: release_date.to_string(),
            runtime: Some(155),
            budget: 0,
            revenue: 0,
            homepage: None,
            poster_path: None,
            backdrop_path: None,
            genres,
            production_companies: vec![],
            production_countries: vec![],
            spoken_languages: vec![],
            belongs_to_collection: None,
            popularity: 0.0,
            vote_average: 0.0,
            vote_count: 0,
            adult: false,
            video: false,
        }
    }

    #[test]
    fn test_release_year() {
        assert_eq!(detail("2021-09-15", vec![]).release_year(), Some(2021));
        assert_eq!(detail("", vec![]).release_year(), None);
    }

    #[test]
    fn test_genre_names() {
        let genres = vec![
            Genre { id: 1, name: "Science Fiction".to_string() },
            Genre { id: 2, name: "Adventure".to_string() },
        ];
        assert_eq!(detail("2021-09-15", genres).genre_names(), "Science Fiction, Adventure");
    }
}
