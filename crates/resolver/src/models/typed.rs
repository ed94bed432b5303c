//! Type URL identity and packed domain objects.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::errors::ResolverError;

/// A type with a globally unique type URL.
///
/// Implemented by every resolvable output type and every input identifier.
/// The type URL is the join key between resolvers, schemas, and requests.
pub trait Typed {
    const TYPE_URL: &'static str;
}

/// A resolved domain object tagged with its type URL.
///
/// Results from different resolvers are heterogeneous; packing them keeps the
/// result list uniform while letting callers recover the concrete type.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypedObject {
    #[serde(rename = "@type")]
    pub type_url: String,
    pub value: serde_json::Value,
}

impl TypedObject {
    /// Pack a domain object.
    pub fn pack<T: Typed + Serialize>(object: &T) -> Result<Self, ResolverError> {
        Ok(Self {
            type_url: T::TYPE_URL.to_string(),
            value: serde_json::to_value(object)?,
        })
    }

    /// Whether this object holds a `T`.
    pub fn is<T: Typed>(&self) -> bool {
        self.type_url == T::TYPE_URL
    }

    /// Recover the concrete domain object.
    pub fn unpack<T: Typed + DeserializeOwned>(&self) -> Result<T, ResolverError> {
        if !self.is::<T>() {
            return Err(ResolverError::Internal(format!(
                "cannot unpack '{}' as '{}'",
                self.type_url,
                T::TYPE_URL
            )));
        }
        Ok(serde_json::from_value(self.value.clone())?)
    }
}
