//! Snapshot loading and validation.
//!
//! The index engine assumes its input collections are already valid:
//! parsable dates, non-empty slugs, unique slugs within a kind. This module
//! is where that contract is enforced, so everything downstream can trust
//! the data instead of re-checking it.

use super::entry::ContentEntry;
use crate::utils::date::PublishDate;
use serde::de::DeserializeOwned;
use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Content snapshot errors
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("cannot read snapshot `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("snapshot `{0}` is not a valid JSON entry list")]
    Json(PathBuf, #[source] serde_json::Error),

    #[error("invalid entry `{slug}` in `{path}`: {reason}")]
    Entry {
        path: PathBuf,
        slug: String,
        reason: String,
    },
}

/// Read a snapshot file into a validated entry collection.
pub fn load_entries<E>(path: &Path) -> Result<Vec<E>, ContentError>
where
    E: ContentEntry + DeserializeOwned,
{
    let raw = fs::read_to_string(path).map_err(|e| ContentError::Io(path.to_path_buf(), e))?;
    let entries: Vec<E> =
        serde_json::from_str(&raw).map_err(|e| ContentError::Json(path.to_path_buf(), e))?;
    validate(&entries, path)?;

    Ok(entries)
}

/// Enforce the identity invariants the engine relies on.
fn validate<E: ContentEntry>(entries: &[E], path: &Path) -> Result<(), ContentError> {
    let invalid = |slug: &str, reason: String| ContentError::Entry {
        path: path.to_path_buf(),
        slug: slug.to_owned(),
        reason,
    };

    let mut seen = HashSet::new();
    for entry in entries {
        if entry.slug().is_empty() {
            return Err(invalid(entry.title(), "slug must not be empty".into()));
        }
        if !seen.insert(entry.slug()) {
            return Err(invalid(entry.slug(), "duplicate slug".into()));
        }
        if PublishDate::parse(entry.date()).is_none() {
            return Err(invalid(
                entry.slug(),
                format!("unparsable date `{}`", entry.date()),
            ));
        }
    }

    Ok(())
}
