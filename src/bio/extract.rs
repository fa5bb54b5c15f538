//! Best-effort extraction from a baseball-reference player page.
//!
//! Each rule works on a parsed [`Html`] document so it can be exercised against
//! small fixed fragments as well as full pages.

use std::sync::LazyLock;

use regex::Regex;
use scraper::{Html, Selector};
use tracing::debug;

use crate::error::{Error, Result};

const MEDIA_ITEM_SELECTOR: &str = ".media-item";
const META_SELECTOR: &str = "#meta";
const POSITION_MARKER: &str = "Position";

static COLON_SPACING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r":\s*").unwrap());
static WHITESPACE_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s{2,}|\n").unwrap());

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::Extraction(format!("bad selector `{}`: {}", css, e)))
}

pub fn parse_document(html: &str) -> Html {
    Html::parse_document(html)
}

/// `src` of the first `<img>` inside the first media item. `None` when either is missing.
pub fn extract_image_url(document: &Html) -> Result<Option<String>> {
    let container_sel = selector(MEDIA_ITEM_SELECTOR)?;
    let img_sel = selector("img")?;

    let Some(container) = document.select(&container_sel).next() else {
        debug!("no media item on page");
        return Ok(None);
    };

    let src = container
        .select(&img_sel)
        .next()
        .and_then(|img| img.value().attr("src"))
        .map(str::to_string);
    Ok(src)
}

/// Text of the last `#meta` paragraph mentioning "Position", normalized.
///
/// A page without `#meta` is an error; a `#meta` without a matching paragraph
/// yields an empty string.
pub fn extract_position(document: &Html) -> Result<String> {
    let meta_sel = selector(META_SELECTOR)?;
    let p_sel = selector("p")?;

    let meta = document
        .select(&meta_sel)
        .next()
        .ok_or_else(|| Error::Extraction("page has no #meta info box".to_string()))?;

    let mut position = String::new();
    for paragraph in meta.select(&p_sel) {
        let text: String = paragraph.text().collect();
        if text.contains(POSITION_MARKER) {
            // Later matches win.
            position = text;
        }
    }

    Ok(normalize_position(&position))
}

/// `:\s*` → `": "`, then drop any 2+ whitespace run or newline. Order matters.
pub fn normalize_position(text: &str) -> String {
    let spaced = COLON_SPACING.replace_all(text, ": ");
    WHITESPACE_RUNS.replace_all(&spaced, "").into_owned()
}
