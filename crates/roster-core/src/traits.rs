// crates/roster-core/src/traits.rs

use async_trait::async_trait;

use crate::error::RosterError;
use crate::user::UserRecord;

/// Trait for user record storage.
///
/// Implemented by roster-store (in-memory backend). All accesses must be
/// safe under concurrent invocation from many in-flight requests.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a record, overwriting any existing record with the same
    /// username.
    async fn put(&self, record: UserRecord) -> Result<(), RosterError>;

    /// Look up a record by username. `Ok(None)` when absent.
    async fn get(&self, username: &str) -> Result<Option<UserRecord>, RosterError>;
}
