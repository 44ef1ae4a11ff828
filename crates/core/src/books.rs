use serde::{Deserialize, Serialize};

use crate::pagination::{clamp_page, link_window, page_bounds, total_pages};

/// Books shown per page.
pub const PAGE_SIZE: usize = 4;

/// Base URL for Open Library cover images, keyed by edition (OLID).
pub const COVERS_BASE: &str = "https://covers.openlibrary.org/b/olid";

/// Bundled placeholder shown when a record has no cover edition key.
pub const PLACEHOLDER_COVER: &str = "assets/empty-cover.svg";

/// Label shown when a record has no author list, or an empty one.
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// One search result record from the Open Library search API.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BookDoc {
    pub key: String,
    pub title: Option<String>,
    pub author_name: Option<Vec<String>>,
    pub cover_edition_key: Option<String>,
    pub first_publish_year: Option<i64>,
}

/// The search response envelope; results live under `docs`.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub docs: Vec<BookDoc>,
    #[serde(rename = "numFound")]
    pub num_found: Option<u64>,
}

/// One displayable book card, with optional fields already resolved.
#[derive(Debug, Serialize, Clone)]
pub struct BookCard {
    pub key: String,
    pub title: String,
    pub author: String,
    pub cover_url: String,
    pub year: Option<i64>,
}

/// Pagination metadata for page output
#[derive(Debug, Serialize, Clone)]
pub struct PageInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub per_page: usize,
    pub links: Vec<usize>,
    pub next_page_command: Option<String>,
    pub prev_page_command: Option<String>,
}

/// Complete page output with items and pagination
#[derive(Debug, Serialize, Clone)]
pub struct PageOutput {
    pub query: String,
    pub items: Vec<BookCard>,
    pub pagination: PageInfo,
}

/// Resolve the cover image URL for a record.
///
/// Not every record carries a `cover_edition_key`; those fall back to the
/// bundled placeholder asset.
pub fn resolve_cover_url(doc: &BookDoc) -> String {
    match &doc.cover_edition_key {
        Some(olid) => format!("{COVERS_BASE}/{olid}-M.jpg"),
        None => PLACEHOLDER_COVER.to_string(),
    }
}

/// The display author for a record: the first listed author, or the fixed
/// fallback label when the list is missing or empty.
pub fn display_author(doc: &BookDoc) -> String {
    doc.author_name
        .as_ref()
        .and_then(|names| names.first())
        .cloned()
        .unwrap_or_else(|| UNKNOWN_AUTHOR.to_string())
}

/// Turn a wire record into a displayable card.
pub fn to_card(doc: &BookDoc) -> BookCard {
    BookCard {
        key: doc.key.clone(),
        title: doc
            .title
            .clone()
            .unwrap_or_else(|| "(No title)".to_string()),
        author: display_author(doc),
        cover_url: resolve_cover_url(doc),
        year: doc.first_publish_year,
    }
}

/// Build the complete output for one page of results.
///
/// Slices the display window for `page` (clamped into range), resolves each
/// record into a card, and attaches pagination metadata with navigation
/// commands.
pub fn build_page_output(docs: &[BookDoc], query: String, page: usize) -> PageOutput {
    let total_items = docs.len();
    let total = total_pages(total_items, PAGE_SIZE);
    let page = clamp_page(page, total);

    let (start, end) = page_bounds(total_items, page, PAGE_SIZE);
    let items: Vec<BookCard> = docs[start..end].iter().map(to_card).collect();

    let next_page = if page < total {
        Some(format!("bookgrid page --page {}", page + 1))
    } else {
        None
    };

    let prev_page = if page > 1 {
        Some(format!("bookgrid page --page {}", page - 1))
    } else {
        None
    };

    PageOutput {
        query,
        items,
        pagination: PageInfo {
            current_page: page,
            total_pages: total,
            total_items,
            per_page: PAGE_SIZE,
            links: link_window(page, total),
            next_page_command: next_page,
            prev_page_command: prev_page,
        },
    }
}
