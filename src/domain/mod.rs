//! Domain layer - Core business logic
//!
//! Signature table, verdict rules and the collaborator traits. Nothing in
//! here touches the filesystem or the terminal.

pub mod entities;
pub mod repositories;
pub mod services;
