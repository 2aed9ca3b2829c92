// src/domain/mod.rs
//
// Domain Root
//
// Immutable value records populated from the catalog, plus the resource
// envelope that carries them through a fetch.

pub mod credit;
pub mod image;
pub mod movie;
pub mod resource;
pub mod review;
pub mod trending;
pub mod video;

pub use credit::{Cast, CreditsResult, Crew};
pub use image::{Image, ImagesResult};
pub use movie::{
    Genre, Movie, MovieCollection, MovieDetail, MoviesResult, ProductionCompany,
    ProductionCountry, SpokenLanguage,
};
pub use resource::Resource;
pub use review::{AuthorDetail, Review};
pub use trending::{MediaType, TimeWindow, Trending};
pub use video::Video;
