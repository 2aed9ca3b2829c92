// src/integrations/tmdb/mapper.rs
//
// Domain mappers: decoded response body -> domain value.
// Pure functions; a body of the wrong shape fails with a serialization error.

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::dto::{
    CreditsDto, ImagesDto, MovieDetailDto, MovieDto, PagedDto, ResultsDto, ReviewDto,
    TrendingDto, VideoDto,
};
use crate::domain::{CreditsResult, ImagesResult, MovieDetail, MoviesResult, Review, Trending, Video};
use crate::error::AppResult;

fn decode<T: DeserializeOwned>(body: Value) -> AppResult<T> {
    Ok(serde_json::from_value(body)?)
}

/// Paged movie list (category, similar, recommended)
pub fn to_movies(body: Value) -> AppResult<MoviesResult> {
    decode::<PagedDto<MovieDto>>(body).map(MoviesResult::from)
}

pub fn to_movie_detail(body: Value) -> AppResult<MovieDetail> {
    decode::<MovieDetailDto>(body).map(MovieDetail::from)
}

pub fn to_videos(body: Value) -> AppResult<Vec<Video>> {
    let dto: ResultsDto<VideoDto> = decode(body)?;
    Ok(dto.results.into_iter().map(Video::from).collect())
}

/// The reviews endpoint is paged; only the embedded results are kept.
pub fn to_reviews(body: Value) -> AppResult<Vec<Review>> {
    let dto: PagedDto<ReviewDto> = decode(body)?;
    Ok(dto.results.into_iter().map(Review::from).collect())
}

pub fn to_credits(body: Value) -> AppResult<CreditsResult> {
    decode::<CreditsDto>(body).map(CreditsResult::from)
}

pub fn to_images(body: Value) -> AppResult<ImagesResult> {
    decode::<ImagesDto>(body).map(ImagesResult::from)
}

pub fn to_trending(body: Value) -> AppResult<Vec<Trending>> {
    let dto: PagedDto<TrendingDto> = decode(body)?;
    Ok(dto.results.into_iter().map(Trending::from).collect())
}
