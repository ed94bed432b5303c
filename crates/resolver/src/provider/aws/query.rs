//! Free-text query grammar for AWS resources.
//!
//! - `account/region/<id>` scopes the lookup to one account and region
//!   (either may be `all`)
//! - a bare `<id>` searches every account and region
//!
//! Instance ids may omit the `i-` prefix when the rest is hexadecimal.

use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::ResolverError;
use crate::models::OPTION_ALL;

lazy_static! {
    /// `[account/region/]name`, no whitespace inside segments.
    static ref SCOPED_QUERY_REGEX: Regex =
        Regex::new(r"^(?:(?P<account>[^/\s]+)/(?P<region>[^/\s]+)/)?(?P<name>[^/\s]+)$")
            .expect("Invalid regex pattern");

    /// Instance id with its prefix, e.g. `i-0abc123`.
    static ref INSTANCE_ID_REGEX: Regex =
        Regex::new(r"^i-[0-9a-f]+$").expect("Invalid regex pattern");

    /// Instance id without its prefix.
    static ref BARE_HEX_REGEX: Regex =
        Regex::new(r"^[0-9a-f]+$").expect("Invalid regex pattern");
}

/// A parsed `[account/region/]name` query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScopedQuery {
    pub account: String,
    pub region: String,
    pub name: String,
}

fn parse_scoped(query: &str) -> Result<ScopedQuery, ResolverError> {
    let query = query.trim();
    let captures = SCOPED_QUERY_REGEX
        .captures(query)
        .ok_or_else(|| ResolverError::InvalidQuery {
            query: query.to_string(),
            reason: "expected 'account/region/name' or a bare name".to_string(),
        })?;

    let segment = |name: &str| {
        captures
            .name(name)
            .map_or_else(|| OPTION_ALL.to_string(), |m| m.as_str().to_string())
    };

    Ok(ScopedQuery {
        account: segment("account"),
        region: segment("region"),
        name: segment("name"),
    })
}

/// Parse an instance query, normalizing the id to its `i-` form.
pub fn parse_instance_query(query: &str) -> Result<ScopedQuery, ResolverError> {
    let mut parsed = parse_scoped(query)?;
    let id = parsed.name.to_lowercase();

    parsed.name = if INSTANCE_ID_REGEX.is_match(&id) {
        id
    } else if BARE_HEX_REGEX.is_match(&id) {
        format!("i-{}", id)
    } else {
        return Err(ResolverError::InvalidQuery {
            query: query.trim().to_string(),
            reason: format!("'{}' is not an instance id", parsed.name),
        });
    };

    Ok(parsed)
}

/// Parse an autoscaling group query.
pub fn parse_autoscaling_group_query(query: &str) -> Result<ScopedQuery, ResolverError> {
    parse_scoped(query)
}
