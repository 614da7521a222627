//! Category validation: name rules and color format.

use crate::validation::{rules, FieldErrors};

/// Maximum length for a category name.
pub const MAX_NAME_LEN: usize = 50;

/// Default color assigned when the client does not pick one.
pub const DEFAULT_COLOR: &str = "#000000";

/// Fields of a category create/update payload relevant to validation.
///
/// On update, absent fields stay `None` and keep their stored value; the
/// validator only checks what was supplied.
#[derive(Debug, Default)]
pub struct CategoryPayload<'a> {
    pub name: Option<&'a str>,
    pub color: Option<&'a str>,
}

/// Validate a category payload, collecting every error.
///
/// Returns the trimmed name when one was supplied and passed its checks;
/// callers persist the trimmed form, never the raw input.
pub fn validate(payload: &CategoryPayload<'_>, errors: &mut FieldErrors) -> Option<String> {
    let name = payload
        .name
        .and_then(|name| rules::titled_name("name", name, MAX_NAME_LEN, errors));

    if let Some(color) = payload.color {
        rules::hex_color("color", color, errors);
    }

    name
}
