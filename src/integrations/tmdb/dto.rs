// src/integrations/tmdb/dto.rs
//
// Wire-format structures of the TMDB v3 API and their conversion into
// domain values. Fields the catalog may omit or null out are defaulted so a
// well-formed body always maps; a body of the wrong shape still fails.

use serde::{Deserialize, Deserializer};

use crate::domain::{
    AuthorDetail, Cast, CreditsResult, Crew, Genre, Image, ImagesResult, MediaType, Movie,
    MovieCollection, MovieDetail, MoviesResult, ProductionCompany, ProductionCountry, Review,
    SpokenLanguage, Trending, Video,
};

/// Missing and `null` both read as the type's default.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Envelope shared by every paged endpoint
#[derive(Debug, Deserialize)]
pub(crate) struct PagedDto<T> {
    #[serde(default, deserialize_with = "null_as_default")]
    pub page: u32,
    pub results: Vec<T>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_pages: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_results: u32,
}

/// Envelope of endpoints returning `{ id, results }`
#[derive(Debug, Deserialize)]
pub(crate) struct ResultsDto<T> {
    #[allow(dead_code)] // Part of the response schema
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    pub results: Vec<T>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MovieDto {
    id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    original_title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    original_language: String,
    #[serde(default, deserialize_with = "null_as_default")]
    overview: Option<String>,
    poster_path: Option<String>,
    backdrop_path: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    genre_ids: Vec<i64>,
    #[serde(default, deserialize_with = "null_as_default")]
    release_date: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    popularity: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    vote_average: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    vote_count: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    adult: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    video: bool,
}

impl From<MovieDto> for Movie {
    fn from(dto: MovieDto) -> Self {
        Movie {
            id: dto.id,
            title: dto.title,
            original_title: dto.original_title,
            original_language: dto.original_language,
            overview: dto.overview.unwrap_or_default(),
            poster_path: dto.poster_path,
            backdrop_path: dto.backdrop_path,
            genre_ids: dto.genre_ids,
            release_date: dto.release_date.unwrap_or_default(),
            popularity: dto.popularity,
            vote_average: dto.vote_average,
            vote_count: dto.vote_count,
            adult: dto.adult,
            video: dto.video,
        }
    }
}

impl From<PagedDto<MovieDto>> for MoviesResult {
    fn from(dto: PagedDto<MovieDto>) -> Self {
        MoviesResult {
            page: dto.page,
            movies: dto.results.into_iter().map(Movie::from).collect(),
            total_pages: dto.total_pages,
            total_results: dto.total_results,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct MovieDetailDto {
    id: i64,
    imdb_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    original_title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    original_language: String,
    tagline: Option<String>,
    overview: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    status: String,
    #[serde(default, deserialize_with = "null_as_default")]
    release_date: Option<String>,
    runtime: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    budget: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    revenue: i64,
    homepage: Option<String>,
    poster_path: Option<String>,
    backdrop_path: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    genres: Vec<GenreDto>,
    #[serde(default, deserialize_with = "null_as_default")]
    production_companies: Vec<ProductionCompanyDto>,
    #[serde(default, deserialize_with = "null_as_default")]
    production_countries: Vec<ProductionCountryDto>,
    #[serde(default, deserialize_with = "null_as_default")]
    spoken_languages: Vec<SpokenLanguageDto>,
    belongs_to_collection: Option<CollectionDto>,
    #[serde(default, deserialize_with = "null_as_default")]
    popularity: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    vote_average: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    vote_count: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    adult: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    video: bool,
}

#[derive(Debug, Deserialize)]
struct GenreDto {
    id: i64,
    name: String,
}

#[derive(Debug, Deserialize)]
struct ProductionCompanyDto {
    id: i64,
    name: String,
    logo_path: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    origin_country: String,
}

#[derive(Debug, Deserialize)]
struct ProductionCountryDto {
    iso_3166_1: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct SpokenLanguageDto {
    iso_639_1: String,
    #[serde(default, deserialize_with = "null_as_default")]
    name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    english_name: String,
}

#[derive(Debug, Deserialize)]
struct CollectionDto {
    id: i64,
    name: String,
    poster_path: Option<String>,
    backdrop_path: Option<String>,
}

impl From<MovieDetailDto> for MovieDetail {
    fn from(dto: MovieDetailDto) -> Self {
        MovieDetail {
            id: dto.id,
            imdb_id: dto.imdb_id,
            title: dto.title,
            original_title: dto.original_title,
            original_language: dto.original_language,
            tagline: dto.tagline.filter(|t| !t.is_empty()),
            overview: dto.overview.filter(|o| !o.is_empty()),
            status: dto.status,
            release_date: dto.release_date.unwrap_or_default(),
            runtime: dto.runtime,
            budget: dto.budget,
            revenue: dto.revenue,
            homepage: dto.homepage.filter(|h| !h.is_empty()),
            poster_path: dto.poster_path,
            backdrop_path: dto.backdrop_path,
            genres: dto
                .genres
                .into_iter()
                .map(|g| Genre {
                    id: g.id,
                    name: g.name,
                })
                .collect(),
            production_companies: dto
                .production_companies
                .into_iter()
                .map(|c| ProductionCompany {
                    id: c.id,
                    name: c.name,
                    logo_path: c.logo_path,
                    origin_country: c.origin_country,
                })
                .collect(),
            production_countries: dto
                .production_countries
                .into_iter()
                .map(|c| ProductionCountry {
                    iso_3166_1: c.iso_3166_1,
                    name: c.name,
                })
                .collect(),
            spoken_languages: dto
                .spoken_languages
                .into_iter()
                .map(|l| SpokenLanguage {
                    iso_639_1: l.iso_639_1,
                    name: l.name,
                    english_name: l.english_name,
                })
                .collect(),
            belongs_to_collection: dto.belongs_to_collection.map(|c| MovieCollection {
                id: c.id,
                name: c.name,
                poster_path: c.poster_path,
                backdrop_path: c.backdrop_path,
            }),
            popularity: dto.popularity,
            vote_average: dto.vote_average,
            vote_count: dto.vote_count,
            adult: dto.adult,
            video: dto.video,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct VideoDto {
    id: String,
    key: String,
    #[serde(default, deserialize_with = "null_as_default")]
    name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    official: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    published_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    site: String,
    #[serde(default, deserialize_with = "null_as_default")]
    size: u32,
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    kind: String,
}

impl From<VideoDto> for Video {
    fn from(dto: VideoDto) -> Self {
        Video {
            id: dto.id,
            key: dto.key,
            name: dto.name,
            official: dto.official,
            published_at: dto.published_at,
            site: dto.site,
            size: dto.size,
            kind: dto.kind,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReviewDto {
    id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    author: String,
    author_details: AuthorDetailDto,
    #[serde(default, deserialize_with = "null_as_default")]
    content: String,
    #[serde(default, deserialize_with = "null_as_default")]
    created_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    updated_at: String,
    #[serde(default, deserialize_with = "null_as_default")]
    url: String,
}

#[derive(Debug, Deserialize)]
struct AuthorDetailDto {
    #[serde(default, deserialize_with = "null_as_default")]
    name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    username: String,
    avatar_path: Option<String>,
    rating: Option<f64>,
}

impl From<ReviewDto> for Review {
    fn from(dto: ReviewDto) -> Self {
        Review {
            id: dto.id,
            author: dto.author,
            author_details: AuthorDetail {
                name: dto.author_details.name,
                username: dto.author_details.username,
                avatar_path: dto.author_details.avatar_path,
                rating: dto.author_details.rating,
            },
            content: dto.content,
            created_at: dto.created_at,
            updated_at: dto.updated_at,
            url: dto.url,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreditsDto {
    id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    cast: Vec<CastDto>,
    #[serde(default, deserialize_with = "null_as_default")]
    crew: Vec<CrewDto>,
}

#[derive(Debug, Deserialize)]
struct CastDto {
    id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    credit_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    original_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    character: Option<String>,
    profile_path: Option<String>,
    known_for_department: Option<String>,
    gender: Option<i32>,
    #[serde(default, deserialize_with = "null_as_default")]
    popularity: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    order: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    adult: bool,
}

#[derive(Debug, Deserialize)]
struct CrewDto {
    id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    credit_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    original_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    department: String,
    #[serde(default, deserialize_with = "null_as_default")]
    job: String,
    profile_path: Option<String>,
    known_for_department: Option<String>,
    gender: Option<i32>,
    #[serde(default, deserialize_with = "null_as_default")]
    popularity: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    adult: bool,
}

impl From<CreditsDto> for CreditsResult {
    fn from(dto: CreditsDto) -> Self {
        CreditsResult {
            id: dto.id,
            cast: dto
                .cast
                .into_iter()
                .map(|c| Cast {
                    id: c.id,
                    credit_id: c.credit_id,
                    name: c.name,
                    original_name: c.original_name,
                    character: c.character.unwrap_or_default(),
                    profile_path: c.profile_path,
                    known_for_department: c.known_for_department,
                    gender: c.gender,
                    popularity: c.popularity,
                    order: c.order,
                    adult: c.adult,
                })
                .collect(),
            crew: dto
                .crew
                .into_iter()
                .map(|c| Crew {
                    id: c.id,
                    credit_id: c.credit_id,
                    name: c.name,
                    original_name: c.original_name,
                    department: c.department,
                    job: c.job,
                    profile_path: c.profile_path,
                    known_for_department: c.known_for_department,
                    gender: c.gender,
                    popularity: c.popularity,
                    adult: c.adult,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ImagesDto {
    id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    backdrops: Vec<ImageDto>,
    #[serde(default, deserialize_with = "null_as_default")]
    posters: Vec<ImageDto>,
    #[serde(default, deserialize_with = "null_as_default")]
    logos: Vec<ImageDto>,
}

#[derive(Debug, Deserialize)]
struct ImageDto {
    file_path: String,
    #[serde(default, deserialize_with = "null_as_default")]
    aspect_ratio: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    width: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    height: u32,
    iso_639_1: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    vote_average: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    vote_count: i64,
}

impl From<ImageDto> for Image {
    fn from(dto: ImageDto) -> Self {
        Image {
            file_path: dto.file_path,
            aspect_ratio: dto.aspect_ratio,
            width: dto.width,
            height: dto.height,
            iso_639_1: dto.iso_639_1,
            vote_average: dto.vote_average,
            vote_count: dto.vote_count,
        }
    }
}

impl From<ImagesDto> for ImagesResult {
    fn from(dto: ImagesDto) -> Self {
        ImagesResult {
            id: dto.id,
            backdrops: dto.backdrops.into_iter().map(Image::from).collect(),
            posters: dto.posters.into_iter().map(Image::from).collect(),
            logos: dto.logos.into_iter().map(Image::from).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct TrendingDto {
    id: i64,
    media_type: MediaType,
    title: Option<String>,
    name: Option<String>,
    overview: Option<String>,
    poster_path: Option<String>,
    backdrop_path: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    genre_ids: Vec<i64>,
    release_date: Option<String>,
    first_air_date: Option<String>,
    original_language: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    popularity: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    vote_average: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    vote_count: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    adult: bool,
}

impl From<TrendingDto> for Trending {
    fn from(dto: TrendingDto) -> Self {
        Trending {
            id: dto.id,
            media_type: dto.media_type,
            title: dto.title.or(dto.name).unwrap_or_default(),
            overview: dto.overview,
            poster_path: dto.poster_path,
            backdrop_path: dto.backdrop_path,
            genre_ids: dto.genre_ids,
            release_date: dto.release_date.or(dto.first_air_date),
            original_language: dto.original_language,
            popularity: dto.popularity,
            vote_average: dto.vote_average,
            vote_count: dto.vote_count,
            adult: dto.adult,
        }
    }
}
