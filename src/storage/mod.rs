use std::error::Error;

use crate::state::QuizState;

pub mod file;

pub type StoreResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

/// Durable home of the session snapshot. The engine writes through this on
/// every mutation and reads it back once at startup; failures are reported
/// to the caller, which treats them as best-effort.
pub trait SnapshotStore {
    /// `Ok(None)` means no usable snapshot exists and the session starts fresh.
    fn load(&self) -> StoreResult<Option<QuizState>>;

    fn save(&self, state: &QuizState) -> StoreResult<()>;

    fn clear(&self) -> StoreResult<()>;
}
