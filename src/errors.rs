use thiserror::Error;

/// Errors raised while building or feeding the quest-status pipeline.
///
/// Only the catalog variants are hard failures: a missing or empty quest
/// catalog leaves nothing to aggregate against, and silently producing an
/// empty prerequisite index would be indistinguishable from "no quest has
/// prerequisites". Everything below the catalog degrades in place (a bad
/// profile record is skipped, a bad progress entry is dropped) so one
/// corrupt file never takes down the whole status table.
#[derive(Debug, Error)]
pub enum QuestBoardError {
    /// Quest catalog missing or unusable.
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// A single raw profile record could not be used at all.
    #[error(transparent)]
    Profile(#[from] ProfileParseError),

    /// Wrapper around IO errors (seed files, profile directory).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapper around JSON deserialization errors.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Hard failures of the quest catalog itself.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog source produced zero quests.
    #[error("quest catalog is empty")]
    Empty,

    /// The catalog source could not be read or decoded.
    #[error("quest catalog unavailable: {reason}")]
    Unavailable { reason: String },
}

/// Per-record failures while parsing a raw profile.
///
/// These abort only the record they occur in; batch loaders log and skip.
#[derive(Debug, Error)]
pub enum ProfileParseError {
    /// The record carries no usable display name.
    #[error("profile record has no identity (missing or empty nickname)")]
    MissingIdentity,

    /// The record does not match the expected profile shape.
    #[error("malformed profile record: {reason}")]
    Malformed { reason: String },
}
