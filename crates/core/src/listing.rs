//! Presentation-layer configuration.
//!
//! A static table per entity describing the listing columns and which of
//! them support filtering and searching, plus the exposed/read-only field
//! sets for the API surface. List handlers in `agenda-api` mirror this
//! table; the unit tests pin the two against each other. Owner filtering is
//! implicit — every listing is scoped to the authenticated owner.

use crate::types::DbId;

/// The four calendar entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Category,
    Place,
    Event,
    Reminder,
}

/// One listing column: wire field name plus filter/search capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub field: &'static str,
    pub filterable: bool,
    pub searchable: bool,
}

const fn col(field: &'static str, filterable: bool, searchable: bool) -> ColumnSpec {
    ColumnSpec {
        field,
        filterable,
        searchable,
    }
}

const CATEGORY_COLUMNS: &[ColumnSpec] = &[
    col("name", false, true),
    col("color", false, false),
    col("owner", false, false),
];

const PLACE_COLUMNS: &[ColumnSpec] = &[
    col("name", false, true),
    col("address", false, false),
    col("owner", false, false),
];

const EVENT_COLUMNS: &[ColumnSpec] = &[
    col("title", false, true),
    col("description", false, true),
    col("start", false, false),
    col("end", false, false),
    col("status", true, false),
    col("priority", true, false),
    col("category", true, false),
    col("place", false, false),
    col("all_day", true, false),
    col("owner", false, false),
];

const REMINDER_COLUMNS: &[ColumnSpec] = &[
    // Searching "event" matches the joined event title.
    col("event", false, true),
    col("when", false, false),
    col("message", false, true),
    col("sent", true, false),
];

/// Ordered listing columns for an entity.
pub fn columns(kind: EntityKind) -> &'static [ColumnSpec] {
    match kind {
        EntityKind::Category => CATEGORY_COLUMNS,
        EntityKind::Place => PLACE_COLUMNS,
        EntityKind::Event => EVENT_COLUMNS,
        EntityKind::Reminder => REMINDER_COLUMNS,
    }
}

/// Exposed wire fields per entity: the §3 attribute list plus `id`.
pub fn exposed_fields(kind: EntityKind) -> &'static [&'static str] {
    match kind {
        EntityKind::Category => &["id", "name", "description", "color", "owner"],
        EntityKind::Place => &["id", "name", "address", "notes", "owner"],
        EntityKind::Event => &[
            "id",
            "title",
            "description",
            "start",
            "end",
            "all_day",
            "status",
            "priority",
            "category",
            "place",
            "owner",
            "created_at",
        ],
        EntityKind::Reminder => &["id", "event", "when", "message", "sent"],
    }
}

/// Fields present in output but rejected (silently ignored) on input.
pub fn read_only_fields(kind: EntityKind) -> &'static [&'static str] {
    match kind {
        EntityKind::Event => &["id", "created_at"],
        _ => &["id"],
    }
}

/// Whether `field` supports listing-level filtering for `kind`.
pub fn is_filterable(kind: EntityKind, field: &str) -> bool {
    columns(kind).iter().any(|c| c.field == field && c.filterable)
}

/// Whether `field` participates in listing search for `kind`.
pub fn is_searchable(kind: EntityKind, field: &str) -> bool {
    columns(kind).iter().any(|c| c.field == field && c.searchable)
}

/// Denormalized category column for the event listing:
/// `"CategoryName (CategoryID)"`, or `"-"` when no category is set.
pub fn category_label(category: Option<(&str, DbId)>) -> String {
    match category {
        Some((name, id)) => format!("{name} ({id})"),
        None => "-".to_string(),
    }
}
