use std::sync::Arc;

use axum::{Extension, extract::Query, response::Html};
use serde::Deserialize;

use crate::{search::{ScoredTrack, SearchService}, warning};

const COUNT_OPTIONS: [usize; 6] = [5, 10, 20, 50, 100, 500];
const DEFAULT_COUNT: usize = 10;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
    pub count: Option<usize>,
}

/// Renders the landing page: an empty query form.
pub async fn home(Extension(_service): Extension<Arc<SearchService>>) -> Html<String> {
    Html(render_page("", DEFAULT_COUNT, None))
}

/// Runs a semantic search and renders the form together with result cards.
pub async fn search(
    Query(params): Query<SearchParams>,
    Extension(service): Extension<Arc<SearchService>>,
) -> Html<String> {
    let count = params.count.unwrap_or(DEFAULT_COUNT);
    let query = params.query.trim();

    if query.is_empty() {
        return Html(render_page(query, count, Some(
            "<p class=\"hint\">Describe the music you are looking for first.</p>".to_string(),
        )));
    }

    let results = match service.recommend(query, count) {
        Ok(results) => results,
        Err(e) => {
            warning!("Search failed: {}", e);
            return Html(render_page(query, count, Some(
                "<p class=\"hint\">Search failed, see the server log.</p>".to_string(),
            )));
        }
    };

    let cards = if results.is_empty() {
        "<p class=\"hint\">Nothing matched. The corpus may still be empty.</p>".to_string()
    } else {
        results.iter().map(render_track_card).collect::<Vec<String>>().join("\n")
    };

    Html(render_page(query, count, Some(cards)))
}

/// One result card: title, artist and the Spotify embedded player.
fn render_track_card(result: &ScoredTrack) -> String {
    format!(
        r#"<div class="card">
  <h3>{title}</h3>
  <p>by {artist}</p>
  <iframe src="https://open.spotify.com/embed/track/{id}?utm_source=generator&theme=0"
          width="100%" height="152" frameborder="0" allowfullscreen=""
          allow="autoplay; clipboard-write; encrypted-media; fullscreen; picture-in-picture"
          loading="lazy"></iframe>
</div>"#,
        title = escape_html(&result.track.name),
        artist = escape_html(&result.track.artist),
        id = escape_html(&result.track.id),
    )
}

fn render_count_options(selected: usize) -> String {
    COUNT_OPTIONS
        .iter()
        .map(|&n| {
            format!(
                "<option value=\"{n}\"{sel}>{n}</option>",
                n = n,
                sel = if n == selected { " selected" } else { "" }
            )
        })
        .collect::<Vec<String>>()
        .join("")
}

fn render_page(query: &str, count: usize, results: Option<String>) -> String {
    let results_section = match results {
        Some(html) => format!("<h2>Your recommendations</h2>\n{}", html),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>vibecli</title>
<style>
  body {{
    background: linear-gradient(135deg, #0f0f23 0%, #1a1a2e 50%, #16213e 100%);
    color: #ffffff;
    font-family: 'Inter', -apple-system, BlinkMacSystemFont, sans-serif;
    max-width: 720px;
    margin: 0 auto;
    padding: 2rem 1rem;
  }}
  h1 {{ font-size: 2.2rem; }}
  h2 {{ color: #b0b0d0; font-size: 1.4rem; margin-top: 2rem; }}
  form {{ display: flex; gap: 12px; align-items: flex-end; flex-wrap: wrap; }}
  label {{ color: #b0b0d0; display: block; margin-bottom: 4px; }}
  input, select {{
    background: rgba(26, 26, 46, 0.8);
    border: 1px solid #2a2a5a;
    border-radius: 12px;
    color: #ffffff;
    padding: 10px;
  }}
  input {{ width: 320px; }}
  button {{
    background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
    border: none;
    border-radius: 12px;
    color: white;
    font-weight: 600;
    padding: 10px 18px;
    cursor: pointer;
  }}
  .card {{
    margin-bottom: 25px;
    padding: 20px;
    background: linear-gradient(135deg, #1a1a2e 0%, #16213e 100%);
    border-radius: 15px;
    border: 1px solid #2a2a5a;
  }}
  .card h3 {{ margin: 0 0 6px 0; }}
  .card p {{ color: #b0b0d0; margin: 0 0 12px 0; }}
  .card iframe {{ border-radius: 12px; }}
  .hint {{ color: #8a8ab0; }}
</style>
</head>
<body>
<h1>vibecli</h1>
<p class="hint">Semantic search over your own Spotify library.</p>
<form action="/search" method="get">
  <div>
    <label for="query">Describe the music you're looking for</label>
    <input id="query" name="query" type="text" value="{query}"
           placeholder="e.g., melancholic indie rock, energetic workout songs...">
  </div>
  <div>
    <label for="count">Results</label>
    <select id="count" name="count">{options}</select>
  </div>
  <button type="submit">Find my music</button>
</form>
{results}
</body>
</html>"#,
        query = escape_html(query),
        options = render_count_options(count),
        results = results_section,
    )
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
