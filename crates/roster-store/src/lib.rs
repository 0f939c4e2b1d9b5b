// crates/roster-store/src/lib.rs
//
// roster-store: Storage layer for the Roster service.
//
// Provides the in-memory user record store shared by both transports.

pub mod memory;

// Re-export the store type for ergonomic access from downstream crates.
pub use memory::MemoryUserStore;
