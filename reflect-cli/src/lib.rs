//! # reflect-cli
//!
//! Terminal front end: argument parsing, config loading, component wiring, the chat loop and
//! its rendering.

pub mod chat;
pub mod cli;
pub mod components;
pub mod config;
pub mod render;

pub use chat::{prompt_login, run_chat, SIDEBAR_LIMIT};
pub use cli::{Cli, Commands};
pub use components::build_service;
pub use config::AppConfig;
