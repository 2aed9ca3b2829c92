// src/integrations/tmdb/mod.rs

pub mod client;
mod dto;
pub mod mapper;
pub mod request;

pub use client::{CatalogTransport, ImageSize, TmdbClient};
pub use request::{CatalogRequest, Endpoint};

#[cfg(test)]
pub use client::MockCatalogTransport;
