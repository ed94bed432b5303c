use lookout_resolver::{AutocompleteResult, Identifier, Results, Schema, Status, TypedObject};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolveRequest {
    pub want: String,
    pub have: Identifier,
    #[serde(default)]
    pub limit: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub want: String,
    pub query: String,
    #[serde(default)]
    pub limit: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutocompleteRequest {
    pub want: String,
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub limit: u64,
    #[serde(default)]
    pub case_sensitive: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetObjectSchemasRequest {
    pub type_url: String,
}

/// Response of both resolve and search.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultsResponse {
    pub results: Vec<TypedObject>,
    pub partial_failures: Vec<Status>,
}

impl From<Results> for ResultsResponse {
    fn from(results: Results) -> Self {
        Self {
            results: results.objects,
            partial_failures: results.partial_failures,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutocompleteResponse {
    pub results: Vec<AutocompleteResult>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetObjectSchemasResponse {
    pub type_url: String,
    pub schemas: Vec<Schema>,
}
