use serde::Deserialize;

/// Number of repositories the search endpoint returns per page.
pub const PAGE_SIZE: u64 = 30;

/// One repository from the `/search/repositories` response, reduced to the
/// fields we display.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchResultItem {
    pub name: String,
    #[serde(rename = "html_url")]
    pub url: String,
    #[serde(rename = "stargazers_count")]
    pub stars: u64,
    #[serde(rename = "forks_count")]
    pub forks: u64,
    pub description: Option<String>,
}

/// A single page of search results plus the total match count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SearchResponse {
    pub items: Vec<SearchResultItem>,
    pub total_count: u64,
}

/// Keyword being browsed and the page currently shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationState {
    pub keyword: String,
    pub page: u32,
}

impl PaginationState {
    /// Start browsing `keyword` from the first page.
    pub fn new(keyword: String) -> Self {
        PaginationState { keyword, page: 1 }
    }

    pub fn go_to(&mut self, page: u32) {
        self.page = page;
    }

    pub fn has_more(&self, total_count: u64) -> bool {
        has_more(total_count, self.page)
    }
}

/// Whether results exist beyond `page`.
pub fn has_more(total_count: u64, page: u32) -> bool {
    total_count > u64::from(page) * PAGE_SIZE
}
