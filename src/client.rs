use crate::models::{AddProductRequest, Product};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::future::Future;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("backend returned status {0}")]
    Status(StatusCode),
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// The remote sustainability service. It owns the product data; the tracker
/// only mirrors what it returns.
pub trait Backend: Send + Sync + 'static {
    /// Registers `link` and returns the full refreshed product list.
    fn add_product(
        &self,
        link: &str,
    ) -> impl Future<Output = Result<Vec<Product>, ClientError>> + Send;

    fn get_products(&self) -> impl Future<Output = Result<Vec<Product>, ClientError>> + Send;

    /// Clears all remote state. The response body only has to be JSON.
    fn reset(&self) -> impl Future<Output = Result<(), ClientError>> + Send;
}

#[derive(Clone)]
pub struct HttpBackend {
    base_url: String,
    http: reqwest::Client,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("sustainability-tracker/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            base_url: base_url.into(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ClientError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(ClientError::Status(status));
    }
    let bytes = resp.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

impl Backend for HttpBackend {
    async fn add_product(&self, link: &str) -> Result<Vec<Product>, ClientError> {
        let resp = self
            .http
            .post(self.url("/add_product"))
            .json(&AddProductRequest { link })
            .send()
            .await?;
        decode(resp).await
    }

    async fn get_products(&self) -> Result<Vec<Product>, ClientError> {
        let resp = self.http.get(self.url("/get_products")).send().await?;
        decode(resp).await
    }

    async fn reset(&self) -> Result<(), ClientError> {
        let resp = self.http.post(self.url("/reset")).send().await?;
        decode::<serde_json::Value>(resp).await?;
        Ok(())
    }
}
