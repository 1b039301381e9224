//! Instant-answer search via the DuckDuckGo JSON API.

use serde::{Deserialize, Serialize};

use super::{fetch_json, UpstreamError};

pub const DEFAULT_SEARCH_API_URL: &str = "https://api.duckduckgo.com/";

/// At most this many results are returned.
pub const MAX_RESULTS: usize = 5;

const SERVICE: &str = "search service";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
}

#[derive(Debug, Default, Deserialize)]
struct InstantAnswer {
    #[serde(rename = "RelatedTopics", default)]
    related_topics: Vec<Topic>,
}

/// Either a leaf result (`Text` + `FirstURL`) or a named group of them.
#[derive(Debug, Deserialize)]
struct Topic {
    #[serde(rename = "Text")]
    text: Option<String>,
    #[serde(rename = "FirstURL")]
    first_url: Option<String>,
    #[serde(rename = "Topics", default)]
    topics: Vec<Topic>,
}

impl Topic {
    fn as_result(&self) -> Option<SearchResult> {
        match (&self.text, &self.first_url) {
            (Some(title), Some(url)) => Some(SearchResult {
                title: title.clone(),
                url: url.clone(),
            }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct WebSearchClient {
    client: reqwest::Client,
    api_url: String,
}

impl WebSearchClient {
    pub fn with_client(client: reqwest::Client, api_url: String) -> Self {
        Self { client, api_url }
    }

    pub async fn search(&self, query: &str) -> Result<SearchResponse, UpstreamError> {
        let request = self.client.get(&self.api_url).query(&[
            ("q", query),
            ("format", "json"),
            ("no_redirect", "1"),
            ("no_html", "1"),
        ]);
        let answer: InstantAnswer = fetch_json(request, SERVICE).await?;
        Ok(SearchResponse {
            results: collect_results(&answer),
        })
    }
}

/// Flatten one level of topic groups, keeping the first [`MAX_RESULTS`].
fn collect_results(answer: &InstantAnswer) -> Vec<SearchResult> {
    answer
        .related_topics
        .iter()
        .flat_map(|topic| match topic.as_result() {
            Some(result) => vec![result],
            None => topic.topics.iter().filter_map(Topic::as_result).collect(),
        })
        .take(MAX_RESULTS)
        .collect()
}
