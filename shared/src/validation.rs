//! Ordered validation error collection
//!
//! `validator` reports violations in a hash map, which makes the error list
//! order unstable between runs. Payload types declare their field order and
//! the collector walks it, so the `errors` array in a 422 response always
//! matches schema declaration order.

use crate::types::FieldError;
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

/// A payload type with a declared field order.
pub trait OrderedValidate: Validate {
    /// Rust field names in declaration order.
    const FIELDS: &'static [&'static str];

    /// Validate, returning violations ordered by field declaration.
    fn validate_ordered(&self) -> Result<(), Vec<FieldError>> {
        match self.validate() {
            Ok(()) => Ok(()),
            Err(errors) => Err(collect_field_errors(&errors, Self::FIELDS)),
        }
    }
}

/// Flatten a `ValidationErrors` tree into `{path, message}` entries, ordered
/// by the given field list. Nested struct violations get dotted paths
/// (`favoriteBook.title`).
pub fn collect_field_errors(errors: &ValidationErrors, order: &[&str]) -> Vec<FieldError> {
    let mut out = Vec::new();
    let kinds = errors.errors();
    for field in order {
        match kinds.get(*field) {
            Some(ValidationErrorsKind::Field(violations)) => {
                for violation in violations {
                    out.push(FieldError {
                        path: wire_path(field),
                        message: message_for(violation),
                    });
                }
            }
            Some(ValidationErrorsKind::Struct(nested)) => {
                // Nested keys are sorted for determinism; nested payloads
                // here are single-field, so this never reorders anything.
                let mut entries: Vec<_> = nested.errors().iter().collect();
                entries.sort_by_key(|(name, _)| *name);
                for (name, kind) in entries {
                    if let ValidationErrorsKind::Field(violations) = kind {
                        for violation in violations {
                            out.push(FieldError {
                                path: format!("{}.{}", wire_path(field), wire_path(name)),
                                message: message_for(violation),
                            });
                        }
                    }
                }
            }
            Some(ValidationErrorsKind::List(_)) | None => {}
        }
    }
    out
}

fn message_for(violation: &ValidationError) -> String {
    violation
        .message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| format!("Invalid value ({})", violation.code))
}

/// Convert a Rust field name to its wire form (snake_case to camelCase).
fn wire_path(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for ch in field.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}
