//! Table repositories. One unit struct per table with static async methods.
//!
//! Every calendar query is owner-scoped in SQL: a row that exists but
//! belongs to another user behaves exactly like a missing row.

pub mod category_repo;
pub mod event_repo;
pub mod place_repo;
pub mod reminder_repo;
pub mod user_repo;

pub use category_repo::CategoryRepo;
pub use event_repo::{EventFilter, EventRepo};
pub use place_repo::PlaceRepo;
pub use reminder_repo::ReminderRepo;
pub use user_repo::UserRepo;
