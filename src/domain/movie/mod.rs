pub mod entity;

pub use entity::{
    Genre, Movie, MovieCollection, MovieDetail, MoviesResult, ProductionCompany,
    ProductionCountry, SpokenLanguage,
};
