//! Self-describing input schemas.
//!
//! Every resolver publishes, per output type, the identifier shapes it
//! accepts. Clients read these to render lookup forms without knowing which
//! backend answers them.

mod builder;
mod types;

pub use builder::{
    build_schema, hydrate_dynamic_options, validate_schema, validate_schemas, FieldDescriptor,
    InputSchema, SchemaDescriptor, SchemaSetBuilder,
};
pub use types::{Field, FieldKind, FieldOption, OptionField, Schema, SchemaMap, TextField};
