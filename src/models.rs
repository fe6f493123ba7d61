//! Request payloads, filter parameters, and response data for each resource
//! family.
//!
//! Entities are server-defined records: the typed fields below cover what the
//! API documents, and anything else the server sends is kept verbatim in the
//! `extra` map of each response struct. Payload fields are optional and
//! omitted from the wire when unset, so updates are partial by construction.

mod analysis;
mod lookup;
mod patient;
mod project;
mod sample;
mod sequencing;
mod upload;

pub use analysis::*;
pub use lookup::*;
pub use patient::*;
pub use project::*;
pub use sample::*;
pub use sequencing::*;
pub use upload::*;

use itertools::Itertools;
use serde::Serializer;

/// Serialize a list-valued filter as one comma-joined query parameter, the
/// shape the upstream API expects. Records matching any listed value are
/// included.
pub(crate) fn comma_separated<S, T>(
    value: &Option<Vec<T>>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: std::fmt::Display,
{
    match value {
        Some(items) => serializer.serialize_str(&items.iter().join(",")),
        None => serializer.serialize_none(),
    }
}
