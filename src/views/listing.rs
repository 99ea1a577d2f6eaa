//! Search/list view: form, result cards, pagination bar.

use super::layout::{escape, page};
use crate::omdb::{poster_or_placeholder, SearchPage, SearchSummary};
use crate::pagination::PageWindow;

const LOADING_SCRIPT: &str = r#"<script>
(function () {
    var results = document.getElementById("results");
    function showLoading() {
        if (results) { results.innerHTML = "<p>Loading...</p>"; }
    }
    var form = document.querySelector("form[data-loading]");
    if (form) { form.addEventListener("submit", showLoading); }
    document.querySelectorAll(".pagination a").forEach(function (a) {
        a.addEventListener("click", showLoading);
    });
})();
</script>"#;

#[derive(Debug, Clone, Default)]
pub struct ListingView {
    /// Keyword as typed; blank for the default listing.
    pub keyword: String,
    pub movies: Vec<SearchSummary>,
    pub current_page: u32,
    pub total_results: u32,
    pub loading: bool,
}

impl ListingView {
    pub fn from_page(keyword: &str, current_page: u32, result: SearchPage) -> Self {
        Self {
            keyword: keyword.to_string(),
            movies: result.movies,
            current_page,
            total_results: result.total_results,
            loading: false,
        }
    }

    pub fn render(&self) -> String {
        let results = if self.loading {
            "<p>Loading...</p>".to_string()
        } else {
            format!(
                r#"<div class="movie-results">{}</div>"#,
                self.movies.iter().map(movie_card).collect::<String>()
            )
        };
        let window = PageWindow::compute(self.current_page, self.total_results);
        let body = format!(
            r#"<div class="App">
    <h1>Movie Search Engine</h1>
    <form action="/" method="get" data-loading>
        <input type="text" name="keyword" placeholder="Enter a keyword..." value="{keyword}" required>
        <button type="submit">Search</button>
    </form>
    <div id="results">{results}</div>
    {pagination}
</div>
{LOADING_SCRIPT}"#,
            keyword = escape(&self.keyword),
            pagination = pagination_bar(&window, &self.keyword),
        );
        page("Movie Search Engine", &body)
    }
}

pub fn movie_card(movie: &SearchSummary) -> String {
    format!(
        r#"<div class="movie-card">
    <a href="/movie/{id}">
        <img src="{poster}" alt="{title}">
        <h3>{title}</h3>
        <p>Year: {year}</p>
        <p>Type: {kind}</p>
    </a>
</div>"#,
        id = urlencoding::encode(&movie.imdb_id),
        poster = escape(poster_or_placeholder(&movie.poster)),
        title = escape(&movie.title),
        year = escape(&movie.year),
        kind = escape(&movie.kind),
    )
}

pub fn page_href(keyword: &str, page: u32) -> String {
    let keyword = keyword.trim();
    if keyword.is_empty() {
        format!("/?page={}", page)
    } else {
        format!("/?keyword={}&amp;page={}", urlencoding::encode(keyword), page)
    }
}

pub fn pagination_bar(window: &PageWindow, keyword: &str) -> String {
    let mut html = String::from(r#"<div class="pagination">"#);
    if let Some(prev) = window.previous {
        html.push_str(&format!(
            r#"<a class="button" href="{}">Previous</a>"#,
            page_href(keyword, prev)
        ));
    }
    for page in window.pages() {
        let class = if window.is_current(page) {
            "button active"
        } else {
            "button"
        };
        html.push_str(&format!(
            r#"<a class="{class}" href="{}">{page}</a>"#,
            page_href(keyword, page)
        ));
    }
    if let Some(next) = window.next {
        html.push_str(&format!(
            r#"<a class="button" href="{}">Next</a>"#,
            page_href(keyword, next)
        ));
    }
    html.push_str("</div>");
    html
}
