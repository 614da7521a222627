//! Shared field-level rules.
//!
//! Category names, place names, and event titles all follow the same
//! contract (trimmed, non-empty, leading uppercase, bounded length), so the
//! rule is parametrized by field name and length limit instead of being
//! restated per entity.

use super::FieldErrors;

/// Validate a display-name field: trim surrounding whitespace, require a
/// non-empty value whose first character is uppercase, and cap the length.
///
/// Returns the trimmed value when every check passed; on failure the
/// messages are recorded against `field` and `None` is returned. Length is
/// measured in characters, not bytes, and the uppercase check is
/// Unicode-aware.
pub fn titled_name(field: &str, value: &str, max_len: usize, errors: &mut FieldErrors) -> Option<String> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        errors.add(field, format!("{field} cannot be empty"));
        return None;
    }

    let mut ok = true;

    // trimmed is non-empty, so a first char exists.
    let first = trimmed.chars().next().unwrap();
    if !first.is_uppercase() {
        errors.add(field, format!("{field} must start with an uppercase letter"));
        ok = false;
    }

    if trimmed.chars().count() > max_len {
        errors.add(field, format!("{field} must be at most {max_len} characters"));
        ok = false;
    }

    ok.then(|| trimmed.to_string())
}

/// Validate an optional free-text field against a character limit.
pub fn max_chars(field: &str, value: &str, max_len: usize, errors: &mut FieldErrors) {
    if value.chars().count() > max_len {
        errors.add(field, format!("{field} must be at most {max_len} characters"));
    }
}

/// Validate membership in a fixed enumeration (event status/priority).
pub fn one_of(field: &str, value: &str, allowed: &[&str], errors: &mut FieldErrors) {
    if !allowed.contains(&value) {
        errors.add(
            field,
            format!("{field} must be one of: {}", allowed.join(", ")),
        );
    }
}

/// Validate a `#RRGGBB` hex color string.
pub fn hex_color(field: &str, value: &str, errors: &mut FieldErrors) {
    let mut chars = value.chars();
    let valid = chars.next() == Some('#')
        && value.len() == 7
        && chars.all(|c| c.is_ascii_hexdigit());
    if !valid {
        errors.add(field, format!("{field} must be a hex color like #RRGGBB"));
    }
}
