//! The per-kind record contract.
//!
//! Every portfolio resource (project, certificate, accomplishment) shares the
//! same lifecycle: a partial payload is validated, merged over declared
//! defaults on create, and merged field-by-field over the stored value on
//! update. The `Resource` trait is that declared schema; the CRUD service and
//! both store shapes are generic over it.

use chrono::Utc;
use serde::{de::DeserializeOwned, Serialize};

use crate::errors::ModelError;

/// Category applied when a payload does not supply one.
pub const DEFAULT_CATEGORY: &str = "Other";

/// Current UTC year-month, the default `date` stamp for new records.
pub fn current_month() -> String {
    Utc::now().format("%Y-%m").to_string()
}

pub(crate) fn has_text(field: &Option<String>) -> bool {
    field.as_deref().map(|s| !s.is_empty()).unwrap_or(false)
}

/// Shared create-time rule: both fields must be present and non-empty.
pub(crate) fn require_title_and_description(
    title: &Option<String>,
    description: &Option<String>,
) -> Result<(), ModelError> {
    if !has_text(title) || !has_text(description) {
        return Err(ModelError::Validation(
            "Title and description are required".into(),
        ));
    }
    Ok(())
}

/// One stored portfolio entity kind.
///
/// `Patch` is the wire shape of create and update payloads: every field
/// optional, absent meaning "apply the default" on create and "no change" on
/// update.
pub trait Resource: Clone + Send + Sync + Serialize + DeserializeOwned + 'static {
    type Patch: Clone + Default + Send + DeserializeOwned + 'static;

    /// Lowercase singular name, used in log fields.
    const KIND: &'static str;
    /// Capitalized label, used in client-facing messages.
    const LABEL: &'static str;

    fn id(&self) -> i64;

    /// Create-time validation of a payload.
    fn validate(patch: &Self::Patch) -> Result<(), ModelError>;

    /// Build a new record from a validated payload, applying declared
    /// defaults for absent fields.
    fn create(id: i64, patch: Self::Patch) -> Self;

    /// Overwrite only the fields the payload supplies.
    fn merge(&mut self, patch: Self::Patch);

    /// The hard-coded record seeded into an empty store.
    fn sample() -> Self;
}
