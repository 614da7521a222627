//! Field-scoped error collection for request-body validation.
//!
//! Validators in the entity modules (`category`, `place`, `event`,
//! `reminder`) push messages into a [`FieldErrors`] instead of returning on
//! the first failure, so a single response can report every problem with a
//! payload. Cross-field rules are only evaluated once the fields they read
//! passed their own checks; the orchestrating validators enforce that by
//! consulting [`FieldErrors::has`].

pub mod rules;

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Reserved key for errors that span the whole record rather than a single
/// field (e.g. the owner+name uniqueness check).
pub const NON_FIELD: &str = "non_field_errors";

/// Validation errors keyed by field name.
///
/// A `BTreeMap` keeps the serialized output deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FieldErrors {
    #[serde(flatten)]
    errors: BTreeMap<String, Vec<String>>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message against a field (or [`NON_FIELD`]).
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    /// Whether any error has been recorded for `field`.
    pub fn has(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// `Ok(())` when no errors were collected, `Err(self)` otherwise.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Iterate over `(field, messages)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.errors {
            for message in messages {
                if !first {
                    write!(f, "; ")?;
                }
                write!(f, "{field}: {message}")?;
                first = false;
            }
        }
        Ok(())
    }
}

// Lets the API layer wrap a collector in its thiserror enum.
impl std::error::Error for FieldErrors {}
