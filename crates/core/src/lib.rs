//! Domain logic for the agenda calendar backend.
//!
//! Everything in this crate is pure: validation rules, entity constants,
//! and the presentation-layer listing configuration. Persistence lives in
//! `agenda-db`, HTTP in `agenda-api`.

pub mod category;
pub mod error;
pub mod event;
pub mod listing;
pub mod place;
pub mod reminder;
pub mod types;
pub mod validation;
