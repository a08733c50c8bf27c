use std::sync::Arc;

use axum::{
    extract::{Form, Query, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;

use crate::{
    AppState,
    error::{AppError, AppResult},
    models::{AddMovieForm, NewMovie, ReviewForm},
    templates,
    tmdb::parse_year,
};

/// `GET /` — recompute rankings from the stored ratings, persist them, and
/// render the list. Rank 1 goes to the highest-rated movie.
pub async fn home(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let movies = state.store.list_by_rating().await?;
    let total = movies.len() as i32;

    let ranked: Vec<_> = movies
        .into_iter()
        .enumerate()
        .map(|(i, mut movie)| {
            movie.ranking = total - i as i32;
            movie
        })
        .collect();

    let rankings: Vec<(i32, i32)> = ranked.iter().map(|m| (m.id, m.ranking)).collect();
    state.store.set_rankings(&rankings).await?;

    Ok(Html(templates::index_page(&ranked)))
}

pub async fn add_form() -> Html<String> {
    Html(templates::add_page(None))
}

/// `POST /add` — search TMDB for the submitted title. An empty title
/// re-renders the form without touching the network.
pub async fn add_submit(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AddMovieForm>,
) -> AppResult<Response> {
    let title = form.title.trim();
    if title.is_empty() {
        return Ok(Html(templates::add_page(Some("title is required"))).into_response());
    }

    let search = state.tmdb.search_movies(title).await?;
    if search.total_results > 0 {
        Ok(Html(templates::select_page(&search.results)).into_response())
    } else {
        Ok("There is no movie with this title".into_response())
    }
}

#[derive(Debug, Deserialize)]
pub struct FindQuery {
    id: i64,
}

/// `GET /find?id=<tmdb_id>` — fetch details for the picked candidate, store a
/// local record with placeholder rating/review, and hand off to the edit form.
pub async fn find(
    State(state): State<Arc<AppState>>,
    Query(q): Query<FindQuery>,
) -> AppResult<Redirect> {
    let details = state.tmdb.movie_details(q.id).await?;

    let year = parse_year(&details.release_date)
        .ok_or_else(|| anyhow::anyhow!("no release year for TMDB movie {}", q.id))?;
    let img_url = format!(
        "{}{}",
        state.config.tmdb_image_base_url,
        details.poster_path.as_deref().unwrap_or_default()
    );

    let new = NewMovie {
        title: details.title,
        year,
        description: details.overview,
        img_url,
        rating: 0.0,
        ranking: 0,
        review: "Nice".to_string(),
    };

    let id = state.store.insert(new).await?;
    tracing::info!(id, tmdb_id = q.id, "movie added");

    Ok(Redirect::to(&format!("/edit?movie_id={id}")))
}

#[derive(Debug, Deserialize)]
pub struct MovieQuery {
    movie_id: i32,
}

pub async fn edit_form(
    State(state): State<Arc<AppState>>,
    Query(q): Query<MovieQuery>,
) -> AppResult<Html<String>> {
    let movie = state.store.movie(q.movie_id).await?.ok_or(AppError::NotFound)?;
    Ok(Html(templates::edit_page(&movie, None)))
}

/// `POST /edit?movie_id=<id>` — overwrite rating and review, then back to the
/// list. A failed validation re-renders the form with nothing persisted.
pub async fn edit_submit(
    State(state): State<Arc<AppState>>,
    Query(q): Query<MovieQuery>,
    Form(form): Form<ReviewForm>,
) -> AppResult<Response> {
    let movie = state.store.movie(q.movie_id).await?.ok_or(AppError::NotFound)?;

    let (rating, review) = match form.validate() {
        Ok(values) => values,
        Err(message) => {
            return Ok(Html(templates::edit_page(&movie, Some(message))).into_response());
        }
    };

    state.store.update_review(movie.id, rating, review).await?;
    Ok(Redirect::to("/").into_response())
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Query(q): Query<MovieQuery>,
) -> AppResult<Redirect> {
    let movie = state.store.movie(q.movie_id).await?.ok_or(AppError::NotFound)?;
    state.store.delete(movie.id).await?;
    tracing::info!(id = movie.id, title = %movie.title, "movie deleted");
    Ok(Redirect::to("/"))
}
