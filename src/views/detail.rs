use super::layout::{escape, page};
use crate::omdb::{poster_or_placeholder, TitleDetail};

const BACK_BUTTON: &str = r#"<button type="button" onclick="history.back()">Back</button>"#;

pub fn render_detail(detail: Option<&TitleDetail>) -> String {
    match detail {
        Some(movie) => page(&movie.title, &detail_body(movie)),
        None => page(
            "Movie details",
            &format!(
                r#"<div class="movie-details">
    {BACK_BUTTON}
    <p>No details available.</p>
</div>"#
            ),
        ),
    }
}

pub fn detail_body(movie: &TitleDetail) -> String {
    format!(
        r#"<div class="movie-details">
    {BACK_BUTTON}
    <h2>{title}</h2>
    <img src="{poster}" alt="{title}">
    <p><strong>Year:</strong> {year}</p>
    <p><strong>Genre:</strong> {genre}</p>
    <p><strong>Director:</strong> {director}</p>
    <p><strong>Actors:</strong> {actors}</p>
    <p><strong>Plot:</strong> {plot}</p>
</div>"#,
        title = escape(&movie.title),
        poster = escape(poster_or_placeholder(&movie.poster)),
        year = escape(&movie.year),
        genre = escape(&movie.genre),
        director = escape(&movie.director),
        actors = escape(&movie.actors),
        plot = escape(&movie.plot),
    )
}
