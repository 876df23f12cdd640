//! # Memory Crate
//!
//! Derives a short natural-language profile of the user from their accumulated history.
//! The profile is recomputed on every load and never persisted; it is injected into the
//! system prompt of the next model call as personal context.
//!
//! ## Quick Start
//!
//! ```rust
//! use memory::summarize_user_patterns;
//! use reflect_core::InteractionRecord;
//!
//! let history = vec![
//!     InteractionRecord::new("Great day", "Glad to hear", "positive"),
//!     InteractionRecord::new("Nice walk", "Lovely", "positive"),
//!     InteractionRecord::new("Bad sleep", "Sorry", "negative"),
//! ];
//! let profile = summarize_user_patterns(&history);
//! assert_eq!(profile.dominant_sentiment, "positive");
//! assert_eq!(
//!     profile.summary(),
//!     "User tends to be positive and often talks about: ."
//! );
//! ```
//!
//! ## Modules
//!
//! - [`profile`] - UserProfile and summarize_user_patterns

pub mod profile;

pub use profile::{summarize_user_patterns, UserProfile, DEFAULT_SENTIMENT, MAX_TOPICS};
