//! Build [`Schema`] values from identifier declarations.
//!
//! Identifiers declare their form once through [`InputSchema::descriptor`].
//! Resolvers then build a [`SchemaMap`] at construction time:
//!
//! ```ignore
//! let schemas = SchemaSetBuilder::new()
//!     .add::<Instance, InstanceId>()
//!     .hydrate(REGIONS, &topology.regions())
//!     .hydrate(ACCOUNTS, &topology.accounts())
//!     .build();
//! ```
//!
//! `build` validates after hydration, so a required option field whose live
//! value set came back empty is reported on the schema itself.

use crate::errors::{Code, Status};
use crate::models::Typed;

use super::types::{Field, FieldKind, FieldOption, OptionField, Schema, SchemaMap, TextField};

/// Implemented by identifiers that can be offered as an input schema.
pub trait InputSchema: Typed {
    fn descriptor() -> SchemaDescriptor;
}

/// Message-level declaration of an input schema.
#[derive(Clone, Debug, Default)]
pub struct SchemaDescriptor {
    display_name: Option<String>,
    searchable: bool,
    fields: Vec<FieldDescriptor>,
}

impl SchemaDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    /// Results for this schema take part in search and autocomplete.
    pub fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }

    pub fn field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }
}

/// Field-level declaration.
#[derive(Clone, Debug)]
pub struct FieldDescriptor {
    name: String,
    display_name: Option<String>,
    required: bool,
    kind: FieldKind,
}

impl FieldDescriptor {
    /// Free-text field.
    pub fn text(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: None,
            required: false,
            kind: FieldKind::Text(TextField::default()),
        }
    }

    /// Field restricted to a list of options.
    pub fn options(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: None,
            required: false,
            kind: FieldKind::Options(OptionField::default()),
        }
    }

    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Placeholder text. Ignored on option fields.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        if let FieldKind::Text(text) = &mut self.kind {
            text.placeholder = Some(placeholder.into());
        }
        self
    }

    /// Default value. Ignored on option fields.
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        if let FieldKind::Text(text) = &mut self.kind {
            text.default_value = Some(value.into());
        }
        self
    }

    /// Literal option. Ignored on text fields.
    pub fn option(mut self, display_name: impl Into<String>, value: impl Into<String>) -> Self {
        if let FieldKind::Options(options) = &mut self.kind {
            options.options.push(FieldOption::new(display_name, value));
        }
        self
    }

    /// Fill the options from the named live value set at construction.
    pub fn dynamic(mut self, source: impl Into<String>) -> Self {
        if let FieldKind::Options(options) = &mut self.kind {
            options.dynamic_source = Some(source.into());
        }
        self
    }

    /// Offer an "All" choice when more than one option is available.
    pub fn include_all(mut self) -> Self {
        if let FieldKind::Options(options) = &mut self.kind {
            options.include_all_option = true;
        }
        self
    }

    fn build(self) -> Field {
        Field {
            display_name: self.display_name.unwrap_or_else(|| self.name.clone()),
            name: self.name,
            required: self.required,
            kind: self.kind,
        }
    }
}

/// Build the schema for one identifier type.
pub fn build_schema<I: InputSchema>() -> Schema {
    let descriptor = I::descriptor();
    let display_name = descriptor
        .display_name
        .unwrap_or_else(|| short_name(I::TYPE_URL).to_string());

    Schema {
        type_url: I::TYPE_URL.to_string(),
        display_name,
        searchable: descriptor.searchable,
        autocomplete_enabled: false,
        fields: descriptor
            .fields
            .into_iter()
            .map(FieldDescriptor::build)
            .collect(),
        error: None,
    }
}

fn short_name(type_url: &str) -> &str {
    type_url.rsplit(['/', '.']).next().unwrap_or(type_url)
}

/// Collects the schema set a resolver exposes.
#[derive(Clone, Debug, Default)]
pub struct SchemaSetBuilder {
    schemas: SchemaMap,
    autocomplete: bool,
}

impl SchemaSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept identifier `I` as an input for output type `O`.
    pub fn add<O: Typed, I: InputSchema>(mut self) -> Self {
        self.schemas
            .entry(O::TYPE_URL.to_string())
            .or_default()
            .push(build_schema::<I>());
        self
    }

    /// Inject live values into every field that asked for `source`.
    pub fn hydrate(mut self, source: &str, values: &[String]) -> Self {
        hydrate_dynamic_options(&mut self.schemas, source, values);
        self
    }

    /// Mark searchable schemas as autocomplete-capable.
    pub fn autocomplete(mut self, enabled: bool) -> Self {
        self.autocomplete = enabled;
        self
    }

    /// Finish the set, recording structural errors.
    pub fn build(mut self) -> SchemaMap {
        if self.autocomplete {
            for schema in self.schemas.values_mut().flatten() {
                schema.autocomplete_enabled = schema.searchable;
            }
        }
        validate_schemas(&mut self.schemas);
        self.schemas
    }
}

/// Append `values` to every option field whose dynamic source is `source`.
pub fn hydrate_dynamic_options(schemas: &mut SchemaMap, source: &str, values: &[String]) {
    for schema in schemas.values_mut().flatten() {
        for field in &mut schema.fields {
            let FieldKind::Options(options) = &mut field.kind else {
                continue;
            };
            if options.dynamic_source.as_deref() != Some(source) {
                continue;
            }
            options.options.extend(
                values
                    .iter()
                    .map(|value| FieldOption::new(value.clone(), value.clone())),
            );
        }
    }
}

/// Validate one schema: a required option field must have options.
///
/// Sets `schema.error` to an `OutOfRange` status when it does not, and clears
/// any previous error when it does.
pub fn validate_schema(schema: &mut Schema) {
    schema.error = schema.fields.iter().find_map(|field| match &field.kind {
        FieldKind::Options(options) if field.required && options.options.is_empty() => {
            Some(Status::new(
                Code::OutOfRange,
                format!(
                    "field '{}' of '{}' is required but has no options",
                    field.name, schema.type_url
                ),
            ))
        }
        _ => None,
    });
}

pub fn validate_schemas(schemas: &mut SchemaMap) {
    for schema in schemas.values_mut().flatten() {
        validate_schema(schema);
    }
}
