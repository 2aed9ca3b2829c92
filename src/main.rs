// src/main.rs
//
// ciney [movie_id]
//
// With a movie id: open the movie detail view and print every concern once it
// settles. Without one: open the home view (trending and popular movies).

use anyhow::{Context, Result};
use env_logger::{Builder, Target};
use log::{info, warn, LevelFilter};
use std::fmt::Display;

use ciney::application::view_models::{MovieDetailSnapshot, ViewState};
use ciney::application::{AppState, HomeViewModel, MovieDetailViewModel};
use ciney::config::CineyConfig;
use ciney::use_cases::GetTrendingParams;

fn init_logger() {
    if std::env::var("RUST_LOG").is_ok() {
        env_logger::init();
    } else {
        Builder::new()
            .target(Target::Stderr)
            .filter_level(LevelFilter::Warn)
            .filter_module("ciney", LevelFilter::Info)
            .init();
    }
}

fn describe<T>(state: &ViewState<T>, summary: impl Fn(&T) -> String) -> String {
    match state {
        ViewState::Initial => "not requested".to_string(),
        ViewState::Loading => "no result".to_string(),
        ViewState::Loaded(data) => summary(data),
        ViewState::Failed(message) => format!("error: {}", message),
    }
}

fn print_line(label: &str, value: impl Display) {
    println!("{:<12} {}", label, value);
}

fn print_detail(snapshot: &MovieDetailSnapshot) {
    print_line(
        "movie",
        describe(&snapshot.detail, |movie| {
            let year = movie
                .release_year()
                .map(|y| format!(" ({})", y))
                .unwrap_or_default();
            format!("{}{} [{}]", movie.title, year, movie.genre_names())
        }),
    );
    print_line(
        "trailers",
        describe(&snapshot.trailers, |videos| {
            let trailers = videos.iter().filter(|v| v.is_trailer()).count();
            format!("{} videos, {} trailers", videos.len(), trailers)
        }),
    );
    print_line(
        "similar",
        describe(&snapshot.similar, |movies| format!("{} movies", movies.len())),
    );
    print_line(
        "recommended",
        describe(&snapshot.recommended, |movies| {
            format!("{} movies", movies.len())
        }),
    );
    print_line(
        "reviews",
        describe(&snapshot.reviews, |reviews| format!("{} reviews", reviews.len())),
    );
    print_line(
        "credits",
        describe(&snapshot.credits, |credits| {
            let directors: Vec<&str> = credits
                .crew_with_job("Director")
                .map(|c| c.name.as_str())
                .collect();
            format!(
                "{} cast, directed by {}",
                credits.cast.len(),
                directors.join(", ")
            )
        }),
    );
    print_line(
        "images",
        describe(&snapshot.images, |images| {
            format!(
                "{} backdrops, {} posters, {} logos",
                images.backdrops.len(),
                images.posters.len(),
                images.logos.len()
            )
        }),
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    let dotenv = dotenvy::dotenv();
    init_logger();
    if let Err(e) = dotenv {
        if !e.not_found() {
            warn!("Ignoring unreadable .env file: {}", e);
        }
    }

    let movie_id = std::env::args()
        .nth(1)
        .map(|raw| raw.parse::<i64>())
        .transpose()
        .context("movie id must be an integer")?;

    let config = CineyConfig::from_env().context("invalid configuration")?;
    let state = AppState::build(config).context("failed to initialise")?;
    info!("Catalog at {}", state.config.api_base_url);

    match movie_id {
        Some(movie_id) => {
            let mut view_model = MovieDetailViewModel::new(&state.use_cases, movie_id);
            let snapshot = view_model.settle().await;
            view_model.close();
            print_detail(&snapshot);
        }
        None => {
            let mut view_model =
                HomeViewModel::new(&state.use_cases, GetTrendingParams::default());
            let (trending, popular) = view_model.settle().await;
            view_model.close();

            print_line(
                "trending",
                describe(&trending, |items| {
                    let titles: Vec<&str> = items.iter().take(5).map(|t| t.title.as_str()).collect();
                    titles.join(" | ")
                }),
            );
            print_line(
                "popular",
                describe(&popular, |movies| {
                    let titles: Vec<&str> =
                        movies.iter().take(5).map(|m| m.title.as_str()).collect();
                    titles.join(" | ")
                }),
            );
        }
    }

    Ok(())
}
