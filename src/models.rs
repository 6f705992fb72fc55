use serde::{Deserialize, Serialize};

/// A tracked product as reported by the sustainability backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Product {
    pub product_name: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub percentage: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sustainability_index: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct AddProductRequest<'a> {
    pub link: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitSource {
    Drop,
    Typed,
}

#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    pub source: SubmitSource,
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct SubmitForm {
    #[serde(default)]
    pub url: String,
}

/// `?status=` left by the form fallbacks after their redirect.
#[derive(Debug, Default, Deserialize)]
pub struct IndexQuery {
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SortRequest {
    pub header: String,
}

/// Re-rendered HTML fragments the page swaps in.
#[derive(Debug, Serialize)]
pub struct Panels {
    pub table: String,
    pub chart: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<String>,
    pub synced: String,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub panels: Option<Panels>,
}

#[derive(Debug, Serialize)]
pub struct SortResponse {
    pub panels: Panels,
}

#[derive(Debug, Serialize)]
pub struct ResetResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub panels: Option<Panels>,
}
