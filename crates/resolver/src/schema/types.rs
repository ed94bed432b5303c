//! Serializable schema descriptions consumed by clients to build query forms.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::errors::Status;

/// Output type URL -> input schemas that resolve to it.
pub type SchemaMap = BTreeMap<String, Vec<Schema>>;

/// Description of one input schema.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// Type URL of the input identifier.
    pub type_url: String,
    pub display_name: String,
    /// Whether results for this schema take part in free-text search.
    pub searchable: bool,
    pub autocomplete_enabled: bool,
    pub fields: Vec<Field>,
    /// Structural error, set when the schema cannot be filled in as declared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Status>,
}

impl Schema {
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    pub name: String,
    pub display_name: String,
    pub required: bool,
    pub kind: FieldKind,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FieldKind {
    Text(TextField),
    Options(OptionField),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextField {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionField {
    pub options: Vec<FieldOption>,
    /// Prepend an "All" choice when there is more than one real option.
    #[serde(default)]
    pub include_all_option: bool,
    /// Name of the live value set (e.g. "regions") filled in at construction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dynamic_source: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldOption {
    #[serde(default)]
    pub display_name: String,
    pub value: String,
}

impl FieldOption {
    pub fn new(display_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            value: value.into(),
        }
    }
}
