//! Data model for the upstream character API
//!
//! Both types are transient deserialization targets for a single
//! request/response cycle. The facade never constructs them itself outside
//! of tests; they are decoded from upstream and serialized back out.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single character record as reported by the upstream API
///
/// `status` is free text upstream ("Alive", "Dead", "unknown", ...), not a
/// closed enum. Unknown upstream fields are ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Character {
    /// Unique identifier assigned by upstream
    pub id: u64,
    /// Character name
    pub name: String,
    /// Species, may be absent or null upstream
    pub species: Option<String>,
    /// Life status as free text, e.g. "Alive", "Dead" or "unknown"
    pub status: String,
}

/// One page of upstream listing results
///
/// No pagination metadata is modeled; only the first page is ever read.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct CharacterPage {
    /// Characters in upstream order
    pub results: Vec<Character>,
}
