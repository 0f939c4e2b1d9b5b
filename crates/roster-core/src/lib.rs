// crates/roster-core/src/lib.rs
//
// roster-core: Core types, error taxonomy, and store traits for the Roster
// service.
//
// This is the leaf crate that all other crates in the workspace depend on.
// It defines the user record, the failure taxonomy that crosses the
// transport boundary, the storage trait, and the greeting text helpers.

pub mod error;
pub mod greeting;
pub mod traits;
pub mod user;

// Re-export key types for ergonomic access from downstream crates.
// Usage: `use roster_core::UserRecord;`

pub use error::{FailureKind, RosterError};
pub use greeting::{greet, title_case};
pub use traits::UserStore;
pub use user::UserRecord;
