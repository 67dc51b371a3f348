use chrono::{DateTime, Local};
use reqwest::header::HeaderMap;
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::error::Error;
use std::io::Write;
use tracing::{debug, info};

use crate::error::SearchError;
use crate::models::SearchResponse;
use crate::presenter::Presenter;
use crate::Args;

pub struct GitHubSearcher {
    client: Client,
    search_url: String,
}

impl GitHubSearcher {
    /// Create a new GitHubSearcher from command line settings
    pub fn new(args: &Args) -> Result<Self, Box<dyn Error + Send + Sync>> {
        Self::with_api_url(&args.api_url, &args.user_agent)
    }

    /// Create a searcher against an arbitrary API base URL
    pub fn with_api_url(
        api_url: &str,
        user_agent: &str,
    ) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let client = Client::builder().user_agent(user_agent).build()?;

        Ok(GitHubSearcher {
            client,
            search_url: format!("{}/search/repositories", api_url.trim_end_matches('/')),
        })
    }

    /// Fetch one page of results, reporting any failure through `presenter`
    /// and returning an empty page in its place.
    pub async fn fetch<W: Write>(
        &self,
        keyword: &str,
        page: u32,
        presenter: &mut Presenter<W>,
    ) -> std::io::Result<SearchResponse> {
        match self.search(keyword, page).await {
            Ok(response) => Ok(response),
            Err(e) => {
                // The presenter line is the user-facing report.
                debug!("Search for '{}' page {} failed: {}", keyword, page, e);
                presenter.show_error(&e)?;
                Ok(SearchResponse::default())
            }
        }
    }

    /// Search a specific page for a keyword
    pub async fn search(&self, keyword: &str, page: u32) -> Result<SearchResponse, SearchError> {
        let page_param = page.to_string();
        let request = self
            .client
            .get(&self.search_url)
            .query(&[("q", keyword), ("page", page_param.as_str())]);

        debug!("Requesting {} (q={:?}, page={})", self.search_url, keyword, page);
        let response = request.send().await?;

        let status = response.status();
        let reset = rate_limit_reset(response.headers());
        let body = response.text().await?;

        if !status.is_success() {
            return Err(api_error(status, reset, &body));
        }

        let parsed = parse_search_body(&body)?;
        info!(
            "Fetched {} of {} results for '{}' page {}",
            parsed.items.len(),
            parsed.total_count,
            keyword,
            page
        );
        Ok(parsed)
    }
}

/// Parse a search response body. Non-JSON bodies and JSON of the wrong shape
/// are reported as different errors.
pub fn parse_search_body(body: &str) -> Result<SearchResponse, SearchError> {
    let json: Value = serde_json::from_str(body).map_err(SearchError::Parse)?;
    serde_json::from_value(json).map_err(SearchError::Shape)
}

fn api_error(status: StatusCode, reset: Option<DateTime<Local>>, body: &str) -> SearchError {
    let rate_limited =
        status == StatusCode::FORBIDDEN || status == StatusCode::TOO_MANY_REQUESTS;
    if let (true, Some(reset)) = (rate_limited, reset) {
        return SearchError::RateLimited { reset };
    }

    let message = serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| json.get("message")?.as_str().map(str::to_string))
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").to_string());

    SearchError::Api { status, message }
}

/// When the rate limit is exhausted, the local time at which it resets
fn rate_limit_reset(headers: &HeaderMap) -> Option<DateTime<Local>> {
    let remaining = headers
        .get("X-RateLimit-Remaining")?
        .to_str()
        .ok()?
        .parse::<u32>()
        .ok()?;
    if remaining > 0 {
        return None;
    }

    let reset_timestamp = headers
        .get("X-RateLimit-Reset")?
        .to_str()
        .ok()?
        .parse::<i64>()
        .ok()?;
    DateTime::from_timestamp(reset_timestamp, 0).map(|reset| reset.with_timezone(&Local))
}
