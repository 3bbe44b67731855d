pub mod cli;
pub mod config;
pub mod error;
pub mod image;
pub mod middleware;
pub mod observability;
pub mod routes;
pub mod sources;

use std::sync::Arc;

pub use config::Config;
pub use routes::AppState;

use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use viralcarrot_recipe::image::{ImageSearch, NoImageSearch};
use viralcarrot_recipe::synthesizer::Synthesizer;
use viralcarrot_recipe::{Discovery, Settings, TtlCache};

/// Wires the configured sources, image search and cache into a `Discovery`.
pub fn build_discovery(config: &Config) -> anyhow::Result<Discovery> {
    let client = reqwest::Client::builder()
        .user_agent(concat!("viralcarrot/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let image_search: Arc<dyn ImageSearch> = if config.image_search.enabled {
        Arc::new(image::HttpImageSearch::new(
            client.clone(),
            &config.image_search.endpoint,
            &config.image_search.access_key,
        ))
    } else {
        Arc::new(NoImageSearch)
    };

    let settings = Settings {
        original_count: config.generation.original_count,
        page_size: config.generation.page_size,
        generate_ttl: config.cache.generate_ttl(),
        external_ttl: config.cache.external_ttl(),
    };

    Ok(Discovery::new(
        sources::from_config(&config.sources, &client)?,
        Synthesizer::new(image_search, config.image_search.timeout()),
        Arc::new(TtlCache::new()),
        settings,
    ))
}

/// Create app router with its middleware stack
///
/// Used by `serve` and by integration tests, which drive it without
/// binding a socket.
pub fn create_app(state: AppState) -> axum::Router {
    routes::router(state)
        .layer(axum::middleware::from_fn(
            middleware::cache_control_middleware,
        ))
        .layer(CompressionLayer::new().br(true).gzip(true))
        .layer(TraceLayer::new_for_http())
}
