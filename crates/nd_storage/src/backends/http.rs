use std::fmt;

use async_trait::async_trait;
use nd_core::{Catalog, CatalogDocument, CatalogSource, Error, Result};
use reqwest::Client;
use tracing::info;
use url::Url;

/// Catalog fetched once from a remote JSON endpoint returning the same
/// shape as the builtin data.
pub struct HttpSource {
    client: Client,
    url: Url,
}

impl HttpSource {
    pub fn new(url: &str) -> Result<Self> {
        let url = Url::parse(url)
            .map_err(|e| Error::Config(format!("invalid catalog url {}: {}", url, e)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::Config(format!("unsupported catalog url scheme: {}", url.scheme())));
        }
        Ok(Self {
            client: Client::new(),
            url,
        })
    }
}

impl fmt::Debug for HttpSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpSource")
            .field("client", &"<reqwest::Client>")
            .field("url", &self.url.as_str())
            .finish()
    }
}

#[async_trait]
impl CatalogSource for HttpSource {
    fn name(&self) -> &str {
        self.url.as_str()
    }

    async fn load(&self) -> Result<Catalog> {
        info!("🌐 Fetching catalog from {}", self.url);
        let document = self
            .client
            .get(self.url.clone())
            .send()
            .await?
            .error_for_status()?
            .json::<CatalogDocument>()
            .await?;
        Catalog::try_from(document)
    }
}
