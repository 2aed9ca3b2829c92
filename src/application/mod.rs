// src/application/mod.rs
//
// Application layer
//
// ARCHITECTURE:
// - Sits above the use cases and owns nothing but wiring and view state
// - View models consume use cases, never repositories or the transport

pub mod state;
pub mod view_models;

pub use state::{AppState, MovieUseCases};
pub use view_models::{HomeViewModel, MovieDetailViewModel, ViewState};
