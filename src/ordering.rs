//! Manual ordering for kinds that carry a `sortOrder`.
//!
//! Moving a record only rewrites its own `sortOrder`; neighbours are left
//! alone, so two records may end up sharing a value. Readers resolve ties
//! by storage order. A record already at `i32::MIN` or `i32::MAX` stays put.

use crate::backend::{Repository, StoreError, StoreResult};
use crate::content::Record;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Towards the front of the list (`sortOrder - 1`)
    Up,
    /// Towards the back of the list (`sortOrder + 1`)
    Down,
}

impl Direction {
    fn delta(self) -> i32 {
        match self {
            Direction::Up => -1,
            Direction::Down => 1,
        }
    }
}

/// Shift a record one step in `direction` and return it as stored.
pub async fn move_record<M, R>(repo: &R, key: &M::Key, direction: Direction) -> StoreResult<M>
where
    M: Record,
    R: Repository<M> + ?Sized,
{
    let unsupported = || StoreError::Unsupported {
        kind: M::KIND,
        operation: "reorder",
    };
    if M::sort_order_patch(0).is_none() {
        return Err(unsupported());
    }

    let current = repo.get(key).await?.ok_or_else(|| StoreError::not_found(M::KIND, key))?;
    let position = current.sort_order().ok_or_else(unsupported)?;
    let patch = M::sort_order_patch(position.saturating_add(direction.delta())).ok_or_else(unsupported)?;

    repo.update(key, patch).await
}

/// Set the active flag of a record and return it as stored.
pub async fn set_active<M, R>(repo: &R, key: &M::Key, active: bool) -> StoreResult<M>
where
    M: Record,
    R: Repository<M> + ?Sized,
{
    let patch = M::active_patch(active).ok_or(StoreError::Unsupported {
        kind: M::KIND,
        operation: "toggle",
    })?;

    repo.update(key, patch).await
}
