//! Session pipeline errors.

use reflect_core::InteractionRecord;
use storage::StorageError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Reflection is empty")]
    EmptyQuery,

    #[error("Failed to load history: {0}")]
    Load(#[source] StorageError),

    /// The turn was answered and is in the session transcript, but was not saved.
    #[error("Failed to save interaction: {source}")]
    Persist {
        record: Box<InteractionRecord>,
        #[source]
        source: StorageError,
    },
}
