//! # reflect-core
//!
//! Core types for the journaling companion: [`InteractionRecord`] (one stored exchange),
//! [`UserKey`] (normalized username used as the storage key), core errors and tracing
//! initialization. Transport-agnostic; used by storage, memory, llm-client and the session crate.

pub mod error;
pub mod logger;
pub mod types;

pub use error::{CoreError, Result};
pub use logger::init_tracing;
pub use types::{display_name, InteractionRecord, UserKey};
