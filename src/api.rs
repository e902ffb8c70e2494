use std::cell::Cell;
use std::rc::Rc;

use tracing::{debug, info, warn};
use url::Url;

use crate::config::DashboardConfig;
use crate::error::NeoWatchError;
use crate::models::{AsteroidDetail, AsteroidSummary, NeoLookupResponse};

// -- Endpoint construction --

/// Resolve the list endpoint against the page origin. Absolute endpoints
/// are returned unchanged.
pub fn resolve_feed_url(origin: &str, endpoint: &str) -> Result<Url, NeoWatchError> {
    if let Ok(url) = Url::parse(endpoint) {
        return Ok(url);
    }
    Url::parse(origin)
        .and_then(|base| base.join(endpoint))
        .map_err(|e| {
            NeoWatchError::Config(format!(
                "Cannot resolve feed endpoint '{}' against '{}': {}",
                endpoint, origin, e
            ))
        })
}

/// `{base}/{id}?api_key={key}` with the id percent-encoded as one segment.
pub fn lookup_url(base_url: &str, id: &str, api_key: &str) -> Result<Url, NeoWatchError> {
    let mut url = Url::parse(base_url)
        .map_err(|e| NeoWatchError::Config(format!("Invalid NEO API base '{}': {}", base_url, e)))?;
    url.path_segments_mut()
        .map_err(|_| NeoWatchError::Config(format!("NEO API base '{}' cannot take a path", base_url)))?
        .pop_if_empty()
        .push(id);
    url.query_pairs_mut().append_pair("api_key", api_key);
    Ok(url)
}

fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost".to_string())
}

// -- Fetchers --

/// List view source: `GET {feed endpoint}`.
pub async fn fetch_asteroids(config: &DashboardConfig) -> Result<Vec<AsteroidSummary>, NeoWatchError> {
    let url = resolve_feed_url(&page_origin(), &config.feed.endpoint)?;

    let response = reqwest::get(url.clone())
        .await
        .map_err(|e| NeoWatchError::FeedUnavailable(e.to_string()))?;

    if !response.status().is_success() {
        let status = response.status();
        warn!("Asteroid feed returned {} from {}", status, url);
        return Err(NeoWatchError::FeedUnavailable(format!(
            "{} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Unknown")
        )));
    }

    let asteroids: Vec<AsteroidSummary> = response
        .json()
        .await
        .map_err(|e| NeoWatchError::FeedUnavailable(e.to_string()))?;
    info!("Fetched {} asteroids from feed", asteroids.len());
    Ok(asteroids)
}

/// Detail view source: single-object lookup on the NEO API.
pub async fn fetch_asteroid_detail(
    config: &DashboardConfig,
    id: &str,
) -> Result<AsteroidDetail, NeoWatchError> {
    let id = id.trim();
    if id.is_empty() {
        return Err(NeoWatchError::EmptyQuery);
    }
    let url = lookup_url(&config.neo_api.base_url, id, &config.neo_api.api_key)?;

    let response = reqwest::get(url).await?;
    let status = response.status();
    info!("NEO lookup for {} returned {}", id, status);

    if !status.is_success() {
        return Err(NeoWatchError::NotFound(id.to_string()));
    }

    let raw: NeoLookupResponse = response.json().await?;
    Ok(AsteroidDetail::from(raw))
}

// -- Stale response guard --

/// Monotonic generation counter shared by one search box. Each search
/// takes a token; only the response for the newest token is applied.
#[derive(Debug, Clone, Default)]
pub struct RequestGeneration {
    current: Rc<Cell<u64>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestToken(u64);

impl RequestGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self) -> RequestToken {
        let next = self.current.get() + 1;
        self.current.set(next);
        RequestToken(next)
    }

    pub fn is_current(&self, token: RequestToken) -> bool {
        let current = self.current.get() == token.0;
        if !current {
            debug!("Discarding stale response for request #{}", token.0);
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_relative_feed() {
        let url = resolve_feed_url("http://localhost:8000", "/asteroids/").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/asteroids/");
    }

    #[test]
    fn test_resolve_absolute_feed() {
        let url = resolve_feed_url("http://localhost:8000", "https://feed.example.com/a/").unwrap();
        assert_eq!(url.as_str(), "https://feed.example.com/a/");
    }

    #[test]
    fn test_resolve_with_bad_origin() {
        let err = resolve_feed_url("not a url", "/asteroids/").unwrap_err();
        assert!(matches!(err, NeoWatchError::Config(_)));
    }

    #[test]
    fn test_lookup_url() {
        let url = lookup_url("https://api.nasa.gov/neo/rest/v1/neo", "3542519", "DEMO_KEY").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.nasa.gov/neo/rest/v1/neo/3542519?api_key=DEMO_KEY"
        );
    }

    #[test]
    fn test_lookup_url_encodes_id() {
        let url = lookup_url("https://api.nasa.gov/neo/rest/v1/neo/", "2010 PK9/x", "K").unwrap();
        assert_eq!(
            url.as_str(),
            "https://api.nasa.gov/neo/rest/v1/neo/2010%20PK9%2Fx?api_key=K"
        );
    }

    #[test]
    fn test_request_generation_discards_stale() {
        let gen = RequestGeneration::new();
        let first = gen.begin();
        let second = gen.begin();
        assert!(!gen.is_current(first));
        assert!(gen.is_current(second));

        let shared = gen.clone();
        let third = shared.begin();
        assert!(!gen.is_current(second));
        assert!(gen.is_current(third));
    }
}
