//! Place validation.

use crate::validation::{rules, FieldErrors};

/// Maximum length for a place name.
pub const MAX_NAME_LEN: usize = 120;

/// Maximum length for a place address.
pub const MAX_ADDRESS_LEN: usize = 255;

/// Fields of a place create/update payload relevant to validation.
#[derive(Debug, Default)]
pub struct PlacePayload<'a> {
    pub name: Option<&'a str>,
    pub address: Option<&'a str>,
}

/// Validate a place payload, collecting every error.
///
/// Returns the trimmed name when one was supplied and passed its checks.
pub fn validate(payload: &PlacePayload<'_>, errors: &mut FieldErrors) -> Option<String> {
    let name = payload
        .name
        .and_then(|name| rules::titled_name("name", name, MAX_NAME_LEN, errors));

    if let Some(address) = payload.address {
        rules::max_chars("address", address, MAX_ADDRESS_LEN, errors);
    }

    name
}
