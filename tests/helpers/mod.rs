#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, header};
use axum::response::Response;
use http_body_util::BodyExt;
use tower::ServiceExt;
use viralcarrot::AppState;
use viralcarrot::sources::{CatalogSource, CommunitySource};
use viralcarrot_recipe::image::NoImageSearch;
use viralcarrot_recipe::random::SequenceRandom;
use viralcarrot_recipe::source::RecipeSource;
use viralcarrot_recipe::synthesizer::Synthesizer;
use viralcarrot_recipe::{Discovery, Settings, TtlCache};

/// App over the built-in catalog and a community file, no network.
pub fn create_test_app(community_path: &Path, development: bool) -> anyhow::Result<axum::Router> {
    let sources: Vec<Arc<dyn RecipeSource>> = vec![
        Arc::new(CatalogSource::builtin()?),
        Arc::new(CommunitySource::new(community_path)),
    ];

    let discovery = Discovery::new(
        sources,
        Synthesizer::new(Arc::new(NoImageSearch), Duration::from_secs(5)),
        Arc::new(TtlCache::new()),
        Settings::default(),
    )
    .with_random(SequenceRandom::factory(vec![2, 7, 1, 8]));

    Ok(viralcarrot::create_app(AppState {
        discovery,
        development,
    }))
}

pub async fn post_json(
    app: axum::Router,
    uri: &str,
    body: serde_json::Value,
) -> anyhow::Result<(Response, serde_json::Value)> {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(serde_json::to_vec(&body)?))?,
        )
        .await?;

    let (parts, body) = response.into_parts();
    let bytes = body.collect().await?.to_bytes();
    let json = serde_json::from_slice(&bytes)?;

    Ok((Response::from_parts(parts, Body::empty()), json))
}
