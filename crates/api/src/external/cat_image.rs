//! Random cat pictures from TheCatAPI.

use serde::Deserialize;

use super::{fetch_json, UpstreamError};

/// Public TheCatAPI search endpoint; returns a one-element array.
pub const DEFAULT_CAT_API_URL: &str = "https://api.thecatapi.com/v1/images/search";

const SERVICE: &str = "cat image service";

#[derive(Debug, Deserialize)]
struct CatImage {
    url: Option<String>,
}

/// Client for the cat image search endpoint.
#[derive(Debug, Clone)]
pub struct CatImageClient {
    client: reqwest::Client,
    api_url: String,
}

impl CatImageClient {
    pub fn with_client(client: reqwest::Client, api_url: String) -> Self {
        Self { client, api_url }
    }

    /// Fetch one random image and return its URL.
    pub async fn random_image_url(&self) -> Result<String, UpstreamError> {
        let images: Vec<CatImage> = fetch_json(self.client.get(&self.api_url), SERVICE).await?;
        first_url(images).ok_or(UpstreamError::UnexpectedResponse { service: SERVICE })
    }
}

fn first_url(images: Vec<CatImage>) -> Option<String> {
    images
        .into_iter()
        .next()
        .and_then(|image| image.url)
        .filter(|url| !url.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Vec<CatImage> {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn takes_the_first_image() {
        let images = parse(
            r#"[{"id":"a1","url":"https://cdn.test/a1.jpg","width":500},{"url":"https://cdn.test/b.jpg"}]"#,
        );
        assert_eq!(first_url(images).as_deref(), Some("https://cdn.test/a1.jpg"));
    }

    #[test]
    fn empty_or_urlless_payloads_yield_nothing() {
        assert_eq!(first_url(parse("[]")), None);
        assert_eq!(first_url(parse(r#"[{"id":"a1"}]"#)), None);
        assert_eq!(first_url(parse(r#"[{"url":""}]"#)), None);
    }
}
