//! Trait definitions for Kaiten operations.
//!
//! Each entity type implements the operations its endpoints support. All
//! of them are single round trips; none paginate or retry.

mod create;
mod get;
mod list;
mod remove;
mod update;

pub use create::Create;
pub use get::Get;
pub use list::List;
pub use remove::Remove;
pub use update::Update;
