use serde::{Deserialize, Serialize};

use super::TypedObject;
use crate::errors::Status;

/// Uniform return value of `resolve` and `search`.
///
/// `objects` and `partial_failures` are independent: results may come back
/// alongside failures from other accounts or regions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Results {
    pub objects: Vec<TypedObject>,
    pub partial_failures: Vec<Status>,
}

impl Results {
    pub fn new(objects: Vec<TypedObject>, partial_failures: Vec<Status>) -> Self {
        Self {
            objects,
            partial_failures,
        }
    }
}

/// One typeahead suggestion.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutocompleteResult {
    /// Identifier to feed back into `search`
    pub id: String,

    /// Human readable label (e.g., "i-0abc (prod/us-east-1)")
    #[serde(default)]
    pub label: String,
}

impl AutocompleteResult {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}
