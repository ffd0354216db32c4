use crate::license_resolution::domain::ResolvedComponent;
use crate::ports::outbound::ComponentResolver;
use crate::shared::{EngineError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Default request timeout for the component service
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Deserialize)]
struct ComponentResponse {
    purl: String,
    version: String,
}

/// HttpComponentResolver adapter resolving versions through a component service
///
/// Issues `GET {base_url}/component?purl=..&requirement=..` and expects a
/// `{"purl": "...", "version": "..."}` body. Failures are returned as-is;
/// the engine treats them as a resolution miss and does not retry.
pub struct HttpComponentResolver {
    client: reqwest::Client,
    base_url: String,
}

impl HttpComponentResolver {
    /// Creates a resolver for the given service base URL
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(EngineError::invalid_input("resolver url", "must not be empty").into());
        }

        let user_agent = format!("purl-licenses/{}", env!("CARGO_PKG_VERSION"));
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.to_string(),
        })
    }

    fn component_url(&self, purl: &str, requirement: &str) -> String {
        format!(
            "{}/component?purl={}&requirement={}",
            self.base_url,
            urlencoding::encode(purl),
            urlencoding::encode(requirement)
        )
    }
}

#[async_trait]
impl ComponentResolver for HttpComponentResolver {
    async fn resolve_version(&self, purl: &str, requirement: &str) -> Result<ResolvedComponent> {
        let url = self.component_url(purl, requirement);
        let response = self.client.get(&url).send().await?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            anyhow::bail!("component not found: {}", purl);
        }
        if !response.status().is_success() {
            anyhow::bail!("component service returned status code {}", response.status());
        }

        let body: ComponentResponse = response.json().await?;
        if body.version.is_empty() {
            anyhow::bail!("component service returned no version for {}", purl);
        }
        Ok(ResolvedComponent::new(body.purl, body.version))
    }
}
