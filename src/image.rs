use anyhow::Context;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;
use viralcarrot_recipe::image::{ImageCandidate, ImageQuery, ImageSearch, Session, choose_image};

const RESULTS_PER_QUERY: &str = "10";

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<Photo>,
}

#[derive(Deserialize)]
struct Photo {
    urls: PhotoUrls,
    description: Option<String>,
    alt_description: Option<String>,
}

#[derive(Deserialize)]
struct PhotoUrls {
    regular: String,
}

impl From<Photo> for ImageCandidate {
    fn from(photo: Photo) -> Self {
        let description = [photo.description, photo.alt_description]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");

        ImageCandidate {
            url: photo.urls.regular,
            description: (!description.trim().is_empty()).then_some(description),
        }
    }
}

/// Unsplash-style photo search. Results go through the food-content filter.
pub struct HttpImageSearch {
    client: reqwest::Client,
    endpoint: String,
    access_key: String,
}

impl HttpImageSearch {
    pub fn new(client: reqwest::Client, endpoint: &str, access_key: &str) -> Self {
        Self {
            client,
            endpoint: endpoint.to_string(),
            access_key: access_key.to_string(),
        }
    }
}

#[async_trait]
impl ImageSearch for HttpImageSearch {
    async fn search_image(
        &self,
        session: &Session,
        query: &ImageQuery,
    ) -> anyhow::Result<Option<String>> {
        let terms = query.terms();
        let resp = self
            .client
            .get(&self.endpoint)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Client-ID {}", self.access_key),
            )
            .query(&[
                ("query", terms.as_str()),
                ("per_page", RESULTS_PER_QUERY),
                ("orientation", "landscape"),
                ("content_filter", "high"),
            ])
            .send()
            .await
            .context("send image search request")?;

        if resp.status() != StatusCode::OK {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            anyhow::bail!("image search failed ({status}): {body}");
        }

        let found: SearchResponse = resp.json().await.context("decode image search response")?;
        let candidates: Vec<ImageCandidate> = found.results.into_iter().map(Into::into).collect();
        let chosen = choose_image(&candidates, query.index).map(str::to_owned);

        tracing::debug!(
            session = session.id,
            terms,
            candidates = candidates.len(),
            found = chosen.is_some(),
            "Image search completed"
        );

        Ok(chosen)
    }
}
