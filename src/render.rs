//! Turns a search response into a printable table.
//!
//! Each article becomes one row of a bordered grid table with Title,
//! Description, and URL columns. Titles wrap at 40 columns and
//! descriptions at 60, joined with newlines so the table renders them
//! as multi-line cells. URLs go through the shortening service, one
//! sequential call per row.
//!
//! There is no partial output: any bad record or shortener failure
//! aborts the whole render.

use comfy_table::{Table, presets::UTF8_FULL};
use tracing::{debug, instrument};

use crate::error::Error;
use crate::models::{Article, SearchResponse};
use crate::shorten::ShortenUrl;

const TITLE_WIDTH: usize = 40;
const DESCRIPTION_WIDTH: usize = 60;

/// Word-wrap `text` to `width` columns, joining lines with newlines.
/// Wrapping happens at word boundaries.
fn wrap_cell(text: &str, width: usize) -> String {
    textwrap::wrap(text, width).join("\n")
}

/// Render the response as table text, with a trailing match-count line
/// when the API reported one.
#[instrument(level = "info", skip_all, fields(articles = response.value.len()))]
pub async fn render_results<S: ShortenUrl>(
    response: SearchResponse,
    shortener: &S,
) -> Result<String, Error> {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Title", "Description", "URL"]);

    for raw in response.value {
        let article = Article::classify(raw)?;
        debug!(title = article.title(), "rendering article row");
        let short_url = shortener.shorten(article.url()).await?;
        table.add_row(vec![
            wrap_cell(article.title(), TITLE_WIDTH),
            wrap_cell(&article.display_description(), DESCRIPTION_WIDTH),
            short_url,
        ]);
    }

    let mut out = table.to_string();
    if let Some(total) = response.total_estimated_matches {
        out.push('\n');
        out.push_str(&format!("{total} estimated matches."));
    }
    Ok(out)
}
