//! # reflect-session
//!
//! One journaling session: who is writing ([`Session`]) and the pipeline that turns a
//! reflection into a stored, answered interaction ([`JournalService`]).
//!
//! Per-session state is owned by the caller and passed by `&mut`; the store, classifier and
//! conversation client are shared behind `Arc` and never mutated.

mod error;
mod service;
mod session;

pub use error::SessionError;
pub use service::JournalService;
pub use session::Session;
