use bookgrid_core::books::{BookDoc, SearchResponse};

use crate::prelude::Error;

const OPEN_LIBRARY_API: &str = "https://openlibrary.org";

/// The fixed search query the tool was built around.
pub const SEARCH_QUERY: &str = "lord of the rings";

pub fn get_api_base() -> &'static str {
    OPEN_LIBRARY_API
}

pub fn search_url(query: &str) -> String {
    format!(
        "{}/search.json?q={}",
        get_api_base(),
        urlencoding::encode(query)
    )
}

/// Fetch the fixed query's result records.
///
/// Failures (network, HTTP status, malformed body) are logged and swallowed:
/// callers always receive a list, possibly empty. No retries, no timeout.
pub async fn fetch_search_docs(client: &reqwest::Client) -> Vec<BookDoc> {
    match try_fetch(client, SEARCH_QUERY).await {
        Ok(docs) => docs,
        Err(err) => {
            log::error!("search request failed: {err}");
            Vec::new()
        }
    }
}

async fn try_fetch(client: &reqwest::Client, query: &str) -> Result<Vec<BookDoc>, Error> {
    let response = client
        .get(search_url(query))
        .send()
        .await
        .map_err(|e| Error::Network(e.to_string()))?;

    if !response.status().is_success() {
        return Err(Error::Status(response.status().as_u16()));
    }

    let body: SearchResponse = response
        .json()
        .await
        .map_err(|e| Error::Decode(e.to_string()))?;

    Ok(body.docs)
}
