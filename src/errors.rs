//! Catalog construction errors.

use thiserror::Error;

use crate::codecs::fourcc_to_string;

/// A malformed codec table.
///
/// These indicate a mistake in the table itself, not a runtime condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The same identifier appears twice with different descriptions.
    #[error(
        "codec '{}' listed twice with different descriptions: {existing:?} and {conflicting:?}",
        fourcc_to_string(*identifier)
    )]
    ConflictingDescription {
        identifier: u32,
        existing: String,
        conflicting: String,
    },

    /// A codec has an empty description.
    #[error("codec '{}' has an empty description", fourcc_to_string(*identifier))]
    EmptyDescription { identifier: u32 },
}
